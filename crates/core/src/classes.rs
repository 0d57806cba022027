//! Class-token merging.

use std::collections::HashSet;

/// Joins class strings into one space-separated list.
///
/// Each input may itself hold several whitespace-separated tokens. Empty
/// tokens are dropped, and a token that already appeared keeps its first
/// position.
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut tokens: Vec<String> = Vec::new();
    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if seen.insert(token.to_string()) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens.join(" ")
}
