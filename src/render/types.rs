//! Draw-list types produced by sprite templates and consumed by the canvas

use glam::IVec2;

use crate::types::{Color, PixelRect};

/// Fill and outline colors of a primitive. `None` leaves pixels untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
}

impl Paint {
    /// Solid interior with a one-pixel outline
    pub const fn filled(fill: Color, outline: Color) -> Self {
        Paint {
            fill: Some(fill),
            outline: Some(outline),
        }
    }

    /// Outline only, interior left as is
    pub const fn outlined(outline: Color) -> Self {
        Paint {
            fill: None,
            outline: Some(outline),
        }
    }
}

/// A single draw call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Rect { bounds: PixelRect, paint: Paint },
    Ellipse { bounds: PixelRect, paint: Paint },
    /// Closed polygon; vertices are pixel centers
    Polygon { vertices: Vec<IVec2>, paint: Paint },
}

impl Primitive {
    pub fn rect(bounds: PixelRect, paint: Paint) -> Self {
        Primitive::Rect { bounds, paint }
    }

    pub fn ellipse(bounds: PixelRect, paint: Paint) -> Self {
        Primitive::Ellipse { bounds, paint }
    }

    pub fn polygon(vertices: impl Into<Vec<IVec2>>, paint: Paint) -> Self {
        Primitive::Polygon {
            vertices: vertices.into(),
            paint,
        }
    }

    pub fn paint(&self) -> Paint {
        match self {
            Primitive::Rect { paint, .. }
            | Primitive::Ellipse { paint, .. }
            | Primitive::Polygon { paint, .. } => *paint,
        }
    }

    /// Short name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Rect { .. } => "rect",
            Primitive::Ellipse { .. } => "ellipse",
            Primitive::Polygon { .. } => "polygon",
        }
    }
}
