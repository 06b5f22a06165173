//! Deterministic prompt-to-sprite generator.
//!
//! A free-text prompt is reduced to two choices, a fill color and a shape
//! template, each picked by an ordered keyword chain. The template is then
//! rasterized onto a 32x32 transparent canvas:
//!
//! ```
//! use pixel_pusher::{Color, ShapeTag};
//!
//! let sprite = pixel_pusher::generate("Rusty Blacksmith");
//! assert_eq!(sprite.shape, ShapeTag::Person);
//! assert_eq!(sprite.color, Color::rgb(139, 69, 19));
//! assert_eq!(sprite.canvas.width(), 32);
//! ```

pub mod errors;
pub mod log;
pub mod render;
pub mod resolve;
pub mod types;

use std::path::Path;

pub use errors::SpriteError;
pub use render::{Canvas, render};
pub use resolve::{ShapeTag, resolve_color, resolve_shape};
pub use types::{Color, Prompt};

use resolve::color::resolve_prompt_color;
use resolve::shape::resolve_prompt_shape;

/// A rendered sprite together with the choices that produced it
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub prompt: Prompt,
    pub shape: ShapeTag,
    pub color: Color,
    pub canvas: Canvas,
}

/// Resolve and render the sprite for `prompt`. Never fails.
pub fn generate(prompt: &str) -> Sprite {
    let prompt = Prompt::new(prompt);
    let color = resolve_prompt_color(&prompt);
    let shape = resolve_prompt_shape(&prompt);
    let canvas = render(shape, color);
    Sprite {
        prompt,
        shape,
        color,
        canvas,
    }
}

impl Sprite {
    /// Encode the canvas to `path`, format chosen by extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SpriteError> {
        self.canvas.save(path)
    }

    /// One-line report printed after a successful save
    pub fn confirmation(&self, path: &Path) -> String {
        format!(
            "Generated {} with prompt '{}' (Shape: {}, Color: {})",
            path.display(),
            self.prompt.raw(),
            self.shape,
            self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use render::defaults::{OUTLINE, SKIN};

    #[test]
    fn rusty_blacksmith_is_a_brown_person() {
        let sprite = generate("rusty blacksmith");
        assert_eq!(sprite.shape, ShapeTag::Person);
        assert_eq!(sprite.color, Color::rgb(139, 69, 19));
        // head
        assert_eq!(sprite.canvas.pixel(16, 10), Some(SKIN));
        assert_eq!(sprite.canvas.pixel(10, 10), Some(OUTLINE));
        // body
        assert_eq!(sprite.canvas.pixel(16, 24), Some(sprite.color));
        assert_eq!(sprite.canvas.pixel(8, 24), Some(OUTLINE));
    }

    #[test]
    fn color_and_shape_are_chosen_independently() {
        let sprite = generate("golden gun");
        assert_eq!(sprite.shape, ShapeTag::Gun);
        assert_eq!(sprite.color, Color::rgb(255, 215, 0));
    }

    #[test]
    fn blacksmith_alone_gets_its_own_color() {
        let sprite = generate("Blacksmith");
        assert_eq!(sprite.color, Color::rgb(105, 105, 105));
        assert_eq!(sprite.shape, ShapeTag::Person);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate("a mysterious orb"), generate("a mysterious orb"));
    }

    #[test]
    fn empty_prompt_falls_back_everywhere() {
        let sprite = generate("");
        assert_eq!(sprite.shape, ShapeTag::Default);
        assert_eq!(sprite.color, Color::rgb(212, 29, 140));
        assert_eq!(sprite.canvas.count(sprite.color), 15 * 15);
    }

    #[test]
    fn confirmation_echoes_the_raw_prompt() {
        let sprite = generate("Golden LootBox");
        assert_eq!(
            sprite.confirmation(Path::new("out/box.png")),
            "Generated out/box.png with prompt 'Golden LootBox' (Shape: box, Color: (255, 215, 0, 255))"
        );
    }
}
