//! Input sanitizer — strips markup and normalizes whitespace.

use std::sync::LazyLock;

use regex::Regex;

// Anything between angle brackets, shortest match. Unterminated brackets
// are left alone; they are plain text, not markup.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Remove markup-tag-like substrings and collapse whitespace runs to single
/// spaces, trimming the ends. Pure and idempotent; empty in, empty out.
pub fn sanitize(raw: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(raw, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
