//! Pattern-list matching primitive
//!
//! Shared by every rule table: tests a candidate string against a
//! comma/space-delimited list of tokens, either exactly or as a prefix,
//! ignoring ASCII case.

/// How a candidate is compared against a pattern token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Candidate equals the token
    Exact,

    /// Candidate begins with the token
    Prefix,
}

/// Check whether `candidate` matches any token of `patterns` under `mode`.
///
/// Tokens are separated by commas and/or spaces; consecutive separators
/// collapse, so `"a,  b"` and `"a,b"` carry the same tokens. Comparison is
/// ASCII-case-insensitive in both modes.
pub fn matches_any(candidate: &str, patterns: &str, mode: MatchMode) -> bool {
    patterns
        .split(|c| c == ',' || c == ' ')
        .filter(|token| !token.is_empty())
        .any(|token| matches_token(candidate, token, mode))
}

fn matches_token(candidate: &str, token: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exact => candidate.eq_ignore_ascii_case(token),
        MatchMode::Prefix => {
            candidate.len() >= token.len()
                && candidate.as_bytes()[..token.len()].eq_ignore_ascii_case(token.as_bytes())
        }
    }
}
