//! Sprite templates
//!
//! Each shape tag has its own template type that knows which primitives make
//! up the sprite. Templates are stateless; the fill color is supplied at
//! draw time and every other color comes from `defaults`.

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use super::defaults::{HIGHLIGHT, OUTLINE, SKIN};
use super::types::{Paint, Primitive};
use crate::resolve::ShapeTag;
use crate::types::{Color, PixelRect};

/// Common behavior for all sprite templates
#[enum_dispatch]
pub trait Template {
    /// The tag this template renders
    fn tag(&self) -> ShapeTag;

    /// Draw list in painting order; later primitives overwrite earlier ones
    fn primitives(&self, color: Color) -> Vec<Primitive>;
}

/// Lootbox: framed square with an inner highlight ring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxTemplate;

impl Template for BoxTemplate {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Box
    }

    fn primitives(&self, color: Color) -> Vec<Primitive> {
        vec![
            Primitive::rect(PixelRect::new(4, 4, 27, 27), Paint::filled(color, OUTLINE)),
            Primitive::rect(PixelRect::new(6, 6, 25, 25), Paint::outlined(HIGHLIGHT)),
        ]
    }
}

/// Coin: disc with an off-center highlight ring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CircleTemplate;

impl Template for CircleTemplate {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Circle
    }

    fn primitives(&self, color: Color) -> Vec<Primitive> {
        vec![
            Primitive::ellipse(PixelRect::new(4, 4, 27, 27), Paint::filled(color, OUTLINE)),
            Primitive::ellipse(PixelRect::new(8, 8, 20, 20), Paint::outlined(HIGHLIGHT)),
        ]
    }
}

/// Blaster: L-shaped silhouette, barrel to the right, grip below
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GunTemplate;

impl GunTemplate {
    pub const VERTICES: [IVec2; 6] = [
        IVec2::new(8, 10),
        IVec2::new(24, 10),
        IVec2::new(24, 16),
        IVec2::new(14, 16),
        IVec2::new(14, 24),
        IVec2::new(8, 24),
    ];
}

impl Template for GunTemplate {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Gun
    }

    fn primitives(&self, color: Color) -> Vec<Primitive> {
        vec![Primitive::polygon(Self::VERTICES, Paint::filled(color, OUTLINE))]
    }
}

/// Character: skin-toned head over a body in the fill color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersonTemplate;

impl Template for PersonTemplate {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Person
    }

    fn primitives(&self, color: Color) -> Vec<Primitive> {
        vec![
            Primitive::ellipse(PixelRect::new(10, 4, 22, 16), Paint::filled(SKIN, OUTLINE)),
            Primitive::rect(PixelRect::new(8, 16, 24, 30), Paint::filled(color, OUTLINE)),
        ]
    }
}

/// Fallback: plain framed square
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultTemplate;

impl Template for DefaultTemplate {
    fn tag(&self) -> ShapeTag {
        ShapeTag::Default
    }

    fn primitives(&self, color: Color) -> Vec<Primitive> {
        vec![Primitive::rect(PixelRect::new(8, 8, 24, 24), Paint::filled(color, OUTLINE))]
    }
}

/// Any sprite template, dispatched statically
#[enum_dispatch(Template)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteTemplate {
    BoxTemplate,
    CircleTemplate,
    GunTemplate,
    PersonTemplate,
    DefaultTemplate,
}

impl From<ShapeTag> for SpriteTemplate {
    fn from(tag: ShapeTag) -> Self {
        match tag {
            ShapeTag::Box => BoxTemplate.into(),
            ShapeTag::Circle => CircleTemplate.into(),
            ShapeTag::Gun => GunTemplate.into(),
            ShapeTag::Person => PersonTemplate.into(),
            ShapeTag::Default => DefaultTemplate.into(),
        }
    }
}
