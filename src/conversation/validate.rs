//! Input validators for the guided flow.
//!
//! Validation failures are not errors: the engine re-prompts and stays in
//! the same state, so every function here is a plain predicate.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Loose international shape: optional leading +, digit groups of 1-4 with
// optional parentheses, separated by -, space, or dot.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?(?:\(?\d{1,4}\)?[-. ]?)+$").unwrap());

/// Minimum digits a phone number must contain after separator stripping.
const MIN_PHONE_DIGITS: usize = 7;

/// Consent check: "yes" or "y", case-insensitive.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "yes" | "y")
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input.trim())
}

/// A name needs at least two characters after trimming.
pub fn is_valid_name(input: &str) -> bool {
    input.trim().chars().count() >= 2
}

/// Strip separators (whitespace, hyphens, parentheses, dots) from a phone
/// number.
pub fn clean_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect()
}

/// Loose phone check: at least [`MIN_PHONE_DIGITS`] digits after separator
/// stripping, and the original string matches the international shape.
///
/// Intentionally permissive — the hard requirement is rejecting obviously
/// too-short input.
pub fn is_valid_phone(input: &str) -> bool {
    let trimmed = input.trim();
    let digit_count = clean_phone(trimmed)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();
    digit_count >= MIN_PHONE_DIGITS && PHONE_RE.is_match(trimmed)
}
