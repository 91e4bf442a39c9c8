//! String length, pattern and character-class checks
//!
//! Lengths count Unicode scalar values (`chars`), not bytes.
//!
//! Absent strings fail the positive checks and pass the negative ones
//! ([`not_matches`], [`not_contain`], [`no_white_space`]), and [`max_length`]
//! treats an absent string as within any upper bound.

use std::sync::LazyLock;

use dashmap::DashMap;
use regex::Regex;

use super::StringComparison;

// ============================================================================
// LENGTH
// ============================================================================

/// Number of Unicode scalar values in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Present and at least `min` characters long.
#[inline]
pub fn min_length(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|value| char_len(value) >= min)
}

/// Absent, or at most `max` characters long.
#[inline]
pub fn max_length(value: Option<&str>, max: usize) -> bool {
    value.is_none_or(|value| char_len(value) <= max)
}

/// Present and `min..=max` characters long.
#[inline]
pub fn length(value: Option<&str>, min: usize, max: usize) -> bool {
    value.is_some_and(|value| (min..=max).contains(&char_len(value)))
}

/// Absent, or at least `min` characters long.
#[inline]
pub fn null_or_min_length(value: Option<&str>, min: usize) -> bool {
    value.is_none_or(|value| char_len(value) >= min)
}

/// Absent, or `min..=max` characters long.
#[inline]
pub fn null_or_length(value: Option<&str>, min: usize, max: usize) -> bool {
    value.is_none_or(|value| (min..=max).contains(&char_len(value)))
}

// ============================================================================
// PATTERNS
// ============================================================================

static PATTERN_CACHE: LazyLock<DashMap<String, Regex>> = LazyLock::new(DashMap::new);

/// Compiles `pattern`, reusing a previously compiled instance.
///
/// Compiled patterns are cached for the lifetime of the process; cloning a
/// [`Regex`] only bumps a reference count.
pub fn cached_regex(pattern: &str) -> Result<Regex, regex::Error> {
    if let Some(regex) = PATTERN_CACHE.get(pattern) {
        return Ok(regex.value().clone());
    }

    let regex = Regex::new(pattern)?;
    tracing::debug!(pattern, "compiled and cached pattern");
    PATTERN_CACHE.insert(pattern.to_owned(), regex.clone());
    Ok(regex)
}

/// Present and matching `regex`.
#[inline]
pub fn matches(value: Option<&str>, regex: &Regex) -> bool {
    value.is_some_and(|value| regex.is_match(value))
}

/// Absent, or not matching `regex`.
#[inline]
pub fn not_matches(value: Option<&str>, regex: &Regex) -> bool {
    value.is_none_or(|value| !regex.is_match(value))
}

#[inline]
pub fn starts_with(value: Option<&str>, prefix: &str, comparison: StringComparison) -> bool {
    value.is_some_and(|value| comparison.starts_with(value, prefix))
}

#[inline]
pub fn ends_with(value: Option<&str>, suffix: &str, comparison: StringComparison) -> bool {
    value.is_some_and(|value| comparison.ends_with(value, suffix))
}

#[inline]
pub fn contains(value: Option<&str>, needle: &str, comparison: StringComparison) -> bool {
    value.is_some_and(|value| comparison.contains(value, needle))
}

#[inline]
pub fn not_contain(value: Option<&str>, needle: &str, comparison: StringComparison) -> bool {
    value.is_none_or(|value| !comparison.contains(value, needle))
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Non-empty and only alphabetic characters.
#[inline]
pub fn only_letters(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty() && value.chars().all(char::is_alphabetic))
}

/// Non-empty and only numeric characters.
#[inline]
pub fn only_digits(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty() && value.chars().all(char::is_numeric))
}

/// Non-empty and only alphanumeric characters.
#[inline]
pub fn only_letters_or_digits(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty() && value.chars().all(char::is_alphanumeric))
}

/// Absent or free of white space. The empty string passes.
#[inline]
pub fn no_white_space(value: Option<&str>) -> bool {
    value.is_none_or(|value| !value.chars().any(char::is_whitespace))
}
