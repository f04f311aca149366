//! Article label normalization

use regex::Regex;
use std::sync::OnceLock;

static PAREN_SUFFIX: OnceLock<Regex> = OnceLock::new();

/// Trim Wikipedia's parenthetical disambiguation from an article label,
/// e.g. "Java (programming language)" → "Java".
///
/// Removes the first optional-whitespace-plus-parenthesized group; a label
/// without one is returned unchanged. Idempotent.
pub fn clean(label: &str) -> String {
    let re = PAREN_SUFFIX.get_or_init(|| {
        Regex::new(r"\s*\(.*\)").expect("parenthetical pattern is a valid regex")
    });
    re.replace(label, "").into_owned()
}
