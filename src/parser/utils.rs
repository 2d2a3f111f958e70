//! String splitting helpers shared by the name parser
//!
//! These functions pin down the exact split and trim semantics so the parse
//! result does not depend on the quirks of any particular split primitive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Conjunctions that join several people into one entry: `and`, `&` and `+`.
/// `and` is matched anywhere in the entry and is case-sensitive.
static CONJUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"and|&|\+").expect("conjunction pattern is valid"));

/// Whitespace removed from both ends of a fragment
pub const FRAGMENT_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Characters removed from both ends of a forename
pub const FORENAME_TRIM_CHARS: &[char] = &['.', ',', ' ', '\n', '\r', '\t', '\x0B', '\0'];

/// Split an entry into person fragments, dropping the conjunctions.
///
/// Empty fragments are kept, so `"& Mr Smith"` yields `["", " Mr Smith"]`.
pub fn split_fragments(entry: &str) -> Vec<&str> {
    CONJUNCTION_RE.split(entry).collect()
}

/// Trim fragment whitespace and split on single spaces.
///
/// Consecutive spaces produce empty tokens and an empty fragment produces a
/// single empty token.
pub fn split_tokens(fragment: &str) -> Vec<&str> {
    fragment.trim_matches(FRAGMENT_TRIM_CHARS).split(' ').collect()
}

pub fn trim_forename(forename: &str) -> &str {
    forename.trim_matches(FORENAME_TRIM_CHARS)
}
