//! Shape resolver: prompt keywords → rendering template tag.

use std::fmt;

use super::{KeywordRule, first_match};
use crate::log::debug;
use crate::types::Prompt;

/// Rendering template selected for a prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Box,
    Circle,
    Gun,
    Person,
    Default,
}

impl ShapeTag {
    pub const ALL: [ShapeTag; 5] = [
        ShapeTag::Box,
        ShapeTag::Circle,
        ShapeTag::Gun,
        ShapeTag::Person,
        ShapeTag::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeTag::Box => "box",
            ShapeTag::Circle => "circle",
            ShapeTag::Gun => "gun",
            ShapeTag::Person => "person",
            ShapeTag::Default => "default",
        }
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword groups in resolution order; anything else is `ShapeTag::Default`
pub const SHAPE_RULES: &[KeywordRule<ShapeTag>] = &[
    KeywordRule::new(&["lootbox", "box"], ShapeTag::Box),
    KeywordRule::new(&["coin", "money"], ShapeTag::Circle),
    KeywordRule::new(&["gun", "blaster"], ShapeTag::Gun),
    KeywordRule::new(
        &["blacksmith", "explorer", "merchant", "gambler", "farmer", "scholar"],
        ShapeTag::Person,
    ),
];

/// Resolve the shape template for a prompt (case-insensitive, never fails)
pub fn resolve_shape(prompt: &str) -> ShapeTag {
    resolve_prompt_shape(&Prompt::new(prompt))
}

pub(crate) fn resolve_prompt_shape(prompt: &Prompt) -> ShapeTag {
    let shape = first_match(prompt, SHAPE_RULES).map_or(ShapeTag::Default, |(_, tag)| tag);
    debug!(%shape, "shape resolved");
    shape
}
