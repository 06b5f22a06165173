//! Canvas size and the fixed palette shared by all templates

use crate::types::Color;

pub const CANVAS_SIZE: u32 = 32;
pub const OUTLINE: Color = Color::BLACK;
/// Translucent white used for inner highlight rings
pub const HIGHLIGHT: Color = Color::rgba(255, 255, 255, 100);
pub const SKIN: Color = Color::rgb(255, 220, 177);
