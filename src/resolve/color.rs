//! Color resolver: prompt keywords → fill color, with a digest fallback.

use md5::{Digest, Md5};

use super::{KeywordRule, first_match};
use crate::log::debug;
use crate::types::{Color, Prompt};

/// Keyword groups in resolution order
pub const COLOR_RULES: &[KeywordRule<Color>] = &[
    KeywordRule::new(&["rusty", "brown"], Color::rgb(139, 69, 19)),
    KeywordRule::new(&["silver", "basic", "grey"], Color::rgb(192, 192, 192)),
    KeywordRule::new(&["golden", "gold", "coin"], Color::rgb(255, 215, 0)),
    KeywordRule::new(&["ray gun"], Color::rgb(255, 0, 0)),
    KeywordRule::new(&["blacksmith"], Color::rgb(105, 105, 105)),
    KeywordRule::new(&["explorer"], Color::rgb(34, 139, 34)),
    KeywordRule::new(&["merchant"], Color::rgb(70, 130, 180)),
    KeywordRule::new(&["gambler"], Color::rgb(128, 0, 128)),
    KeywordRule::new(&["farmer"], Color::rgb(154, 205, 50)),
    KeywordRule::new(&["scholar"], Color::rgb(65, 105, 225)),
];

/// Resolve the fill color for a prompt.
///
/// Matching is case-insensitive. Prompts without a known keyword get a
/// stable color derived from their content digest, so this never fails.
pub fn resolve_color(prompt: &str) -> Color {
    resolve_prompt_color(&Prompt::new(prompt))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn resolve_prompt_color(prompt: &Prompt) -> Color {
    match first_match(prompt, COLOR_RULES) {
        Some((rule, color)) => {
            debug!(rule, %color, "color keyword matched");
            color
        }
        None => {
            let color = digest_color(prompt.normalized());
            debug!(%color, "no color keyword, using digest color");
            color
        }
    }
}

/// Opaque color from the MD5 digest of `text`.
///
/// The first three digest bytes (the first six hex characters of the
/// digest) become red, green and blue.
pub fn digest_color(text: &str) -> Color {
    let digest = Md5::digest(text.as_bytes());
    Color::rgb(digest[0], digest[1], digest[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: Color = Color::rgb(255, 215, 0);

    #[test]
    fn gold_keywords_resolve_to_gold() {
        for prompt in ["gold", "golden crown", "a shiny coin", "GOLD BAR", "bitcoin"] {
            assert_eq!(resolve_color(prompt), GOLD, "prompt {prompt:?}");
        }
    }

    #[test]
    fn earlier_groups_take_priority() {
        // rusty is checked before golden
        assert_eq!(resolve_color("golden rusty sword"), Color::rgb(139, 69, 19));
        // silver is checked before coin
        assert_eq!(resolve_color("silver coin"), Color::rgb(192, 192, 192));
        // gold is checked before ray gun
        assert_eq!(resolve_color("golden ray gun"), GOLD);
    }

    #[test]
    fn every_group_resolves() {
        let cases = [
            ("brown bag", Color::rgb(139, 69, 19)),
            ("basic sword", Color::rgb(192, 192, 192)),
            ("grey cloak", Color::rgb(192, 192, 192)),
            ("ray gun", Color::rgb(255, 0, 0)),
            ("blacksmith", Color::rgb(105, 105, 105)),
            ("explorer", Color::rgb(34, 139, 34)),
            ("merchant", Color::rgb(70, 130, 180)),
            ("gambler", Color::rgb(128, 0, 128)),
            ("farmer", Color::rgb(154, 205, 50)),
            ("scholar", Color::rgb(65, 105, 225)),
        ];
        for (prompt, expected) in cases {
            assert_eq!(resolve_color(prompt), expected, "prompt {prompt:?}");
        }
    }

    #[test]
    fn ray_gun_needs_the_full_phrase() {
        let color = resolve_color("raygun");
        assert_ne!(color, Color::rgb(255, 0, 0));
        assert_eq!(color, digest_color("raygun"));
    }

    #[test]
    fn empty_prompt_uses_digest_of_empty_string() {
        // md5("") = d41d8cd9...
        assert_eq!(resolve_color(""), Color::rgb(212, 29, 140));
    }

    #[test]
    fn digest_fallback_is_stable() {
        assert_eq!(resolve_color("dragon egg"), Color::rgb(163, 29, 71));
        assert_eq!(resolve_color("potion"), Color::rgb(30, 4, 31));
        assert_eq!(resolve_color("dragon egg"), resolve_color("dragon egg"));
    }

    #[test]
    fn digest_fallback_hashes_lowercased_text() {
        assert_eq!(resolve_color("A Mysterious Orb"), Color::rgb(120, 156, 66));
        assert_eq!(resolve_color("A Mysterious Orb"), resolve_color("a mysterious orb"));
    }

    #[test]
    fn digest_colors_are_opaque() {
        for prompt in ["", "x", "ancient relic", "unicorn"] {
            assert_eq!(resolve_color(prompt).a, 255);
        }
    }
}
