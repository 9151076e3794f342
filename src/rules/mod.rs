//! Icon rule tables for lsicons
//!
//! Defines the rule type shared by the name, extension, and directory
//! tables, and the ordered first-match-wins evaluator.

pub mod directories;
pub mod extensions;
pub mod names;

use crate::matcher::{matches_any, MatchMode};

/// A single classification rule
#[derive(Debug, Clone, Copy)]
pub struct IconRule {
    /// Comma/space-delimited case-insensitive tokens
    pub patterns: &'static str,

    /// How candidates are compared against the tokens
    pub mode: MatchMode,

    /// Glyph returned when this rule matches
    pub glyph: &'static str,
}

impl IconRule {
    /// Rule whose tokens must equal the candidate
    pub const fn exact(patterns: &'static str, glyph: &'static str) -> Self {
        Self {
            patterns,
            mode: MatchMode::Exact,
            glyph,
        }
    }

    /// Rule whose tokens need only begin the candidate
    pub const fn prefix(patterns: &'static str, glyph: &'static str) -> Self {
        Self {
            patterns,
            mode: MatchMode::Prefix,
            glyph,
        }
    }

    /// Test a candidate against this rule's pattern list
    pub fn matches(&self, candidate: &str) -> bool {
        matches_any(candidate, self.patterns, self.mode)
    }
}

/// Walk an ordered rule table; the first matching rule decides.
///
/// Table order is a fixed contract: some tables carry overlapping patterns
/// (an exact rule followed by a broader prefix rule) and reordering them
/// changes results.
pub fn first_match(rules: &[IconRule], candidate: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| rule.matches(candidate))
        .map(|rule| rule.glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tokens(rule: &IconRule) -> Vec<&'static str> {
        rule.patterns
            .split(|c| c == ',' || c == ' ')
            .filter(|token| !token.is_empty())
            .collect()
    }

    fn all_tables() -> [&'static [IconRule]; 3] {
        [
            names::NAME_RULES,
            extensions::EXTENSION_RULES,
            directories::DIRECTORY_RULES,
        ]
    }

    #[test]
    fn test_first_match_respects_order() {
        const RULES: &[IconRule] = &[
            IconRule::exact("sh", "\u{e795}"),
            IconRule::prefix("sh", "\u{f423}"),
        ];
        assert_eq!(first_match(RULES, "sh"), Some("\u{e795}"));
        assert_eq!(first_match(RULES, "shrc"), Some("\u{f423}"));
        assert_eq!(first_match(RULES, "zsh"), None);
    }

    #[test]
    fn test_every_rule_has_tokens() {
        for table in all_tables() {
            for rule in table {
                assert!(!tokens(rule).is_empty(), "rule with no tokens: {:?}", rule);
            }
        }
    }

    #[test]
    fn test_no_duplicate_token_mode_pairs_within_a_table() {
        for table in all_tables() {
            let mut seen = HashSet::new();
            for rule in table {
                for token in tokens(rule) {
                    assert!(
                        seen.insert((token, rule.mode)),
                        "duplicate token {:?} ({:?})",
                        token,
                        rule.mode
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_glyphs_are_single_nf_code_points() {
        // Nerd Font private-use ranges: BMP PUA and supplementary PUA-A
        let in_nf_range = |c: char| {
            let cp = c as u32;
            (0xE000..=0xF8FF).contains(&cp) || (0xF0000..=0xFFFFF).contains(&cp)
        };

        for table in all_tables() {
            for rule in table {
                let mut chars = rule.glyph.chars();
                let c = chars.next().expect("empty glyph");
                assert!(
                    chars.next().is_none(),
                    "multi-char glyph for {:?}",
                    rule.patterns
                );
                assert!(in_nf_range(c), "glyph U+{:04X} outside NF ranges", c as u32);
            }
        }
    }
}
