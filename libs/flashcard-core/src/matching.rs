//! Answer matching for console quiz sessions.

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive comparison of a typed answer with the stored one.
pub fn answers_match(typed: &str, correct: &str) -> bool {
    normalize_whitespace(typed).to_lowercase() == normalize_whitespace(correct).to_lowercase()
}
