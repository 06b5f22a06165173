//! Prompt → sprite parameters.
//!
//! Both resolvers are ordered keyword chains: rules are tested top to bottom
//! and the first rule with any keyword present in the prompt wins. The two
//! chains are independent, so a prompt can pick its color from one narrative
//! ("golden") and its shape from another ("gun").

pub mod color;
pub mod shape;

pub use color::{COLOR_RULES, digest_color, resolve_color};
pub use shape::{SHAPE_RULES, ShapeTag, resolve_shape};

use crate::types::Prompt;

/// One link of a keyword chain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub value: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], value: T) -> Self {
        KeywordRule { keywords, value }
    }

    pub fn matches(&self, prompt: &Prompt) -> bool {
        prompt.contains_any(self.keywords)
    }
}

/// Value of the first rule matching `prompt`, along with its index
pub fn first_match<T: Copy>(prompt: &Prompt, rules: &[KeywordRule<T>]) -> Option<(usize, T)> {
    rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(prompt))
        .map(|(idx, rule)| (idx, rule.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<u8>] = &[
        KeywordRule::new(&["alpha"], 1),
        KeywordRule::new(&["beta", "gamma"], 2),
        KeywordRule::new(&["alpha beta"], 3),
    ];

    #[test]
    fn earliest_rule_wins() {
        // "alpha beta" satisfies all three rules
        assert_eq!(first_match(&Prompt::new("alpha beta"), RULES), Some((0, 1)));
    }

    #[test]
    fn any_keyword_in_a_group_matches() {
        assert_eq!(first_match(&Prompt::new("GAMMA ray"), RULES), Some((1, 2)));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(first_match(&Prompt::new("delta"), RULES), None);
        assert_eq!(first_match(&Prompt::new(""), RULES), None);
        assert_eq!(first_match::<u8>(&Prompt::new("alpha"), &[]), None);
    }
}
