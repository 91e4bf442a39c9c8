//! Pattern, affix and character-class operators on strings.

use regex::Regex;

use super::{RuleSet, Template, Violation};
use crate::foundation::TextOperand;
use crate::predicates::{StringComparison, text};
use crate::rules;

impl RuleSet {
    /// Requires a present string matching `regex`.
    ///
    /// The failure records the pattern under `pattern` and the value under
    /// `current`.
    pub fn matches<S: TextOperand + ?Sized>(self, value: &S, regex: &Regex, property: &str) -> Self {
        let current = value.text();
        if text::matches(current, regex) {
            return self;
        }
        self.report(
            property,
            with_pattern(rules::MATCH_PATTERN, |t| &t.match_pattern, regex.as_str()).current(current),
        )
    }

    /// Accepts an absent string; a present one must not match `regex`.
    pub fn not_matches<S: TextOperand + ?Sized>(self, value: &S, regex: &Regex, property: &str) -> Self {
        let current = value.text();
        if text::not_matches(current, regex) {
            return self;
        }
        self.report(
            property,
            with_pattern(rules::NOT_MATCH_PATTERN, |t| &t.not_match_pattern, regex.as_str())
                .current(current),
        )
    }

    /// [`matches`](RuleSet::matches) with a pattern compiled on first use
    /// and cached for the process lifetime.
    ///
    /// ```rust,ignore
    /// set().matches_pattern(&order.code, r"^[A-Z]{3}-\d{4}$", "code")
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Pass a
    /// pre-built [`Regex`] to [`matches`](RuleSet::matches) for patterns
    /// that are not known at compile time.
    pub fn matches_pattern<S: TextOperand + ?Sized>(self, value: &S, pattern: &str, property: &str) -> Self {
        let regex = compile(pattern);
        self.matches(value, &regex, property)
    }

    /// [`not_matches`](RuleSet::not_matches) with a cached pattern.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    pub fn not_matches_pattern<S: TextOperand + ?Sized>(
        self,
        value: &S,
        pattern: &str,
        property: &str,
    ) -> Self {
        let regex = compile(pattern);
        self.not_matches(value, &regex, property)
    }

    // ------------------------------------------------------------------------
    // Affixes and substrings
    // ------------------------------------------------------------------------

    /// Requires a present string starting with `prefix`.
    pub fn starts_with<S: TextOperand + ?Sized>(
        self,
        value: &S,
        prefix: &str,
        comparison: StringComparison,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::starts_with(current, prefix, comparison) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::STARTS_WITH, |t| &t.starts_with)
                .expected(prefix.into())
                .current(current),
        )
    }

    /// Requires a present string ending with `suffix`.
    pub fn ends_with<S: TextOperand + ?Sized>(
        self,
        value: &S,
        suffix: &str,
        comparison: StringComparison,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::ends_with(current, suffix, comparison) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::ENDS_WITH, |t| &t.ends_with)
                .expected(suffix.into())
                .current(current),
        )
    }

    /// Requires a present string containing `needle`.
    pub fn contains<S: TextOperand + ?Sized>(
        self,
        value: &S,
        needle: &str,
        comparison: StringComparison,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::contains(current, needle, comparison) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::CONTAINS, |t| &t.contains)
                .expected(needle.into())
                .current(current),
        )
    }

    /// Accepts an absent string; a present one must not contain `needle`.
    pub fn not_contain<S: TextOperand + ?Sized>(
        self,
        value: &S,
        needle: &str,
        comparison: StringComparison,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::not_contain(current, needle, comparison) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::NOT_CONTAIN, |t| &t.not_contain)
                .expected(needle.into())
                .current(current),
        )
    }

    // ------------------------------------------------------------------------
    // Character classes
    // ------------------------------------------------------------------------

    /// Requires a non-empty string of alphabetic characters.
    pub fn only_letters<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.char_class(value, text::only_letters, rules::ONLY_LETTERS, |t| &t.only_letters, property)
    }

    /// Requires a non-empty string of numeric characters (any script).
    pub fn only_digits<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.char_class(value, text::only_digits, rules::ONLY_DIGITS, |t| &t.only_digits, property)
    }

    /// Requires a non-empty string of alphanumeric characters.
    pub fn only_letters_or_digits<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.char_class(
            value,
            text::only_letters_or_digits,
            rules::ONLY_LETTERS_OR_DIGITS,
            |t| &t.only_letters_or_digits,
            property,
        )
    }

    /// Accepts an absent string; a present one must not contain white space.
    pub fn no_white_space<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.char_class(value, text::no_white_space, rules::NO_WHITE_SPACE, |t| &t.no_white_space, property)
    }

    fn char_class<S: TextOperand + ?Sized>(
        self,
        value: &S,
        holds: fn(Option<&str>) -> bool,
        rule: &'static str,
        template: Template,
        property: &str,
    ) -> Self {
        let current = value.text();
        if holds(current) {
            return self;
        }
        self.report(property, Violation::new(rule, template).current(current))
    }
}

/// `{1}` and the `pattern` extension both carry the pattern source.
fn with_pattern(rule: &'static str, template: Template, pattern: &str) -> Violation {
    Violation::new(rule, template)
        .arg(&pattern.into())
        .extension(rules::PATTERN, pattern.into())
}

fn compile(pattern: &str) -> Regex {
    match text::cached_regex(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid validation pattern `{pattern}`: {err}"),
    }
}
