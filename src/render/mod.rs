//! Sprite rasterization
//!
//! This module is organized into submodules:
//! - `defaults`: Canvas size and fixed palette
//! - `types`: Draw-list types (`Paint`, `Primitive`)
//! - `geometry`: Pixel coverage of ellipses, polygons and lines
//! - `canvas`: The RGBA buffer and its draw operations
//! - `shapes`: One template per shape tag

pub mod canvas;
pub mod defaults;
pub mod geometry;
pub mod shapes;
pub mod types;

pub use canvas::Canvas;
pub use shapes::{SpriteTemplate, Template};
pub use types::*;

use crate::log::debug;
use crate::resolve::ShapeTag;
use crate::types::Color;

/// Rasterize the template for `tag` in `color` onto a fresh transparent canvas
pub fn render(tag: ShapeTag, color: Color) -> Canvas {
    render_template(&SpriteTemplate::from(tag), color)
}

/// Rasterize any template onto a fresh `CANVAS_SIZE` square canvas
pub fn render_template(template: &impl Template, color: Color) -> Canvas {
    let mut canvas = Canvas::new(defaults::CANVAS_SIZE, defaults::CANVAS_SIZE);
    let primitives = template.primitives(color);
    debug!(tag = %template.tag(), %color, count = primitives.len(), "rendering sprite");
    for primitive in &primitives {
        canvas.draw(primitive);
    }
    canvas
}
