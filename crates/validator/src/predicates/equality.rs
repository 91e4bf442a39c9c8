//! Equality checks and string comparison modes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How two strings are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StringComparison {
    /// Exact, code-point by code-point.
    #[default]
    Ordinal,
    /// Code-point by code-point after mapping each character to its
    /// single-character upper case. Characters whose upper case expands
    /// (`ß` -> `SS`) are compared as they are.
    OrdinalIgnoreCase,
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl StringComparison {
    fn fold(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Ordinal => Cow::Borrowed(text),
            Self::OrdinalIgnoreCase if !text.chars().any(char::is_lowercase) => Cow::Borrowed(text),
            Self::OrdinalIgnoreCase => Cow::Owned(text.chars().map(simple_upper).collect()),
        }
    }

    /// Returns true if `left` and `right` are equal under this mode.
    #[must_use]
    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            Self::Ordinal => left == right,
            Self::OrdinalIgnoreCase => self.fold(left) == self.fold(right),
        }
    }

    /// Returns true if `text` starts with `prefix` under this mode.
    #[must_use]
    pub fn starts_with(self, text: &str, prefix: &str) -> bool {
        self.fold(text).starts_with(&*self.fold(prefix))
    }

    /// Returns true if `text` ends with `suffix` under this mode.
    #[must_use]
    pub fn ends_with(self, text: &str, suffix: &str) -> bool {
        self.fold(text).ends_with(&*self.fold(suffix))
    }

    /// Returns true if `text` contains `needle` under this mode.
    #[must_use]
    pub fn contains(self, text: &str, needle: &str) -> bool {
        self.fold(text).contains(&*self.fold(needle))
    }
}

/// Present and equal to `expected`. Absent never equals.
#[inline]
pub fn equal<T: PartialEq + ?Sized>(value: Option<&T>, expected: &T) -> bool {
    value.is_some_and(|value| value == expected)
}

/// Absent, or present and different from `expected`.
#[inline]
pub fn not_equal<T: PartialEq + ?Sized>(value: Option<&T>, expected: &T) -> bool {
    !equal(value, expected)
}

/// String [`equal`] under `comparison`.
#[inline]
pub fn equal_str(value: Option<&str>, expected: &str, comparison: StringComparison) -> bool {
    value.is_some_and(|value| comparison.equals(value, expected))
}

/// String [`not_equal`] under `comparison`.
#[inline]
pub fn not_equal_str(value: Option<&str>, expected: &str, comparison: StringComparison) -> bool {
    !equal_str(value, expected, comparison)
}

/// Both equal; two absent values are equal.
#[inline]
pub fn both_equal<T: PartialEq + ?Sized>(first: Option<&T>, second: Option<&T>) -> bool {
    first == second
}

/// Negation of [`both_equal`].
#[inline]
pub fn both_not_equal<T: PartialEq + ?Sized>(first: Option<&T>, second: Option<&T>) -> bool {
    !both_equal(first, second)
}

/// String [`both_equal`] under `comparison`.
#[inline]
pub fn both_equal_str(first: Option<&str>, second: Option<&str>, comparison: StringComparison) -> bool {
    match (first, second) {
        (None, None) => true,
        (Some(first), Some(second)) => comparison.equals(first, second),
        _ => false,
    }
}

/// String [`both_not_equal`] under `comparison`.
#[inline]
pub fn both_not_equal_str(
    first: Option<&str>,
    second: Option<&str>,
    comparison: StringComparison,
) -> bool {
    !both_equal_str(first, second, comparison)
}
