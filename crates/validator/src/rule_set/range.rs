//! Bound and length operators
//!
//! Bounds are inclusive. The plain variants fail on an absent value; the
//! `null_or_*` variants accept it.

use serde::Serialize;
use serde_json::Value;

use super::{RuleSet, Violation, Template, to_json};
use crate::foundation::{Operand, TextOperand};
use crate::predicates::{ordering, text};
use crate::rules;

impl RuleSet {
    /// Requires `value >= min`.
    ///
    /// ```rust,ignore
    /// set().min(&order.amount, 1, "amount")
    /// ```
    pub fn min<V>(self, value: &V, min: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialOrd + Serialize + Sized,
    {
        let current = value.present();
        if ordering::min(current, &min) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::MIN, |t| &t.min, &min).current(current),
        )
    }

    /// Accepts an absent `value`; a present one must be `>= min`.
    pub fn null_or_min<V>(self, value: &V, min: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialOrd + Serialize + Sized,
    {
        let current = value.present();
        if ordering::null_or_min(current, &min) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::NULL_OR_MIN, |t| &t.null_or_min, &min).current(current),
        )
    }

    /// Requires `value <= max`.
    pub fn max<V>(self, value: &V, max: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialOrd + Serialize + Sized,
    {
        let current = value.present();
        if ordering::max(current, &max) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::MAX, |t| &t.max, &max).current(current),
        )
    }

    /// Accepts an absent `value`; a present one must be `<= max`.
    pub fn null_or_max<V>(self, value: &V, max: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialOrd + Serialize + Sized,
    {
        let current = value.present();
        if ordering::null_or_max(current, &max) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::NULL_OR_MAX, |t| &t.null_or_max, &max).current(current),
        )
    }

    /// Requires `min <= value <= max`.
    pub fn min_max<V>(self, value: &V, min: V::Value, max: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialOrd + Serialize + Sized,
    {
        let current = value.present();
        if ordering::min_max(current, &min, &max) {
            return self;
        }
        self.report(
            property,
            bounds(rules::MIN_MAX, |t| &t.min_max, to_json(&min), to_json(&max)).current(current),
        )
    }

    /// Accepts an absent `value`; a present one must be within `min..=max`.
    pub fn null_or_min_max<V>(self, value: &V, min: V::Value, max: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialOrd + Serialize + Sized,
    {
        let current = value.present();
        if ordering::null_or_min_max(current, &min, &max) {
            return self;
        }
        self.report(
            property,
            bounds(rules::NULL_OR_MIN_MAX, |t| &t.null_or_min_max, to_json(&min), to_json(&max))
                .current(current),
        )
    }

    // ------------------------------------------------------------------------
    // Length (in characters)
    // ------------------------------------------------------------------------

    /// Requires a present string of at least `min` characters.
    pub fn min_length<S: TextOperand + ?Sized>(self, value: &S, min: usize, property: &str) -> Self {
        let current = value.text();
        if text::min_length(current, min) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::MIN_LENGTH, |t| &t.min_length, &min).current(current),
        )
    }

    /// Accepts an absent string; a present one needs `min` characters.
    pub fn null_or_min_length<S: TextOperand + ?Sized>(
        self,
        value: &S,
        min: usize,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::null_or_min_length(current, min) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::NULL_OR_MIN_LENGTH, |t| &t.null_or_min_length, &min).current(current),
        )
    }

    /// Requires at most `max` characters. An absent string passes.
    pub fn max_length<S: TextOperand + ?Sized>(self, value: &S, max: usize, property: &str) -> Self {
        let current = value.text();
        if text::max_length(current, max) {
            return self;
        }
        self.report(
            property,
            single_bound(rules::MAX_LENGTH, |t| &t.max_length, &max).current(current),
        )
    }

    /// Requires a present string of `min..=max` characters.
    pub fn length<S: TextOperand + ?Sized>(
        self,
        value: &S,
        min: usize,
        max: usize,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::length(current, min, max) {
            return self;
        }
        self.report(
            property,
            bounds(rules::LENGTH, |t| &t.length, min.into(), max.into()).current(current),
        )
    }

    /// Accepts an absent string; a present one needs `min..=max` characters.
    pub fn null_or_length<S: TextOperand + ?Sized>(
        self,
        value: &S,
        min: usize,
        max: usize,
        property: &str,
    ) -> Self {
        let current = value.text();
        if text::null_or_length(current, min, max) {
            return self;
        }
        self.report(
            property,
            bounds(rules::NULL_OR_LENGTH, |t| &t.null_or_length, min.into(), max.into())
                .current(current),
        )
    }
}

/// One bound: `{1}` in the message and `expected` in the extensions.
fn single_bound<T: Serialize + ?Sized>(rule: &'static str, template: Template, bound: &T) -> Violation {
    Violation::new(rule, template).expected(to_json(bound))
}

/// Two bounds: `{1}` and `{2}` in the message, `expected` holds both.
fn bounds(rule: &'static str, template: Template, min: Value, max: Value) -> Violation {
    Violation::new(rule, template)
        .arg(&min)
        .arg(&max)
        .extension(rules::EXPECTED, Value::Array(vec![min, max]))
}

#[cfg(test)]
mod tests {
    use crate::{rules, set};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_min_failure() {
        let failed = set().min(&0, 1, "amount");
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.property.as_deref(), Some("amount"));
        assert_eq!(problem.rule(), Some(rules::MIN));
        assert_eq!(problem.message, "The 'amount' field must be at least '1'");
        assert_eq!(problem.extension(rules::CURRENT), Some(&json!(0)));
        assert_eq!(problem.extension(rules::EXPECTED), Some(&json!(1)));
    }

    #[test]
    fn test_min_max_extensions() {
        let failed = set().min_max(&Some(11_u8), 1, 10, "rating");
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.rule(), Some(rules::MIN_MAX));
        assert_eq!(problem.extension(rules::EXPECTED), Some(&json!([1, 10])));
        assert_eq!(problem.message, "The 'rating' field must be between '1' and '10'");
    }

    #[rstest]
    #[case(None, true, false)]
    #[case(Some(0), false, false)]
    #[case(Some(5), true, true)]
    fn test_nullable_bounds(#[case] value: Option<i32>, #[case] nullable_ok: bool, #[case] strict_ok: bool) {
        assert_eq!(!set().null_or_min(&value, 1, "v").has_problems(), nullable_ok);
        assert_eq!(!set().min(&value, 1, "v").has_problems(), strict_ok);
        assert_eq!(!set().null_or_min_max(&value, 1, 9, "v").has_problems(), nullable_ok);
        assert_eq!(!set().min_max(&value, 1, 9, "v").has_problems(), strict_ok);
    }

    #[test]
    fn test_max_family() {
        assert!(set().max(&11.5_f64, 10.0, "weight").has_problems());
        assert!(!set().max(&10.0_f64, 10.0, "weight").has_problems());
        assert!(!set().null_or_max(&None::<f64>, 10.0, "weight").has_problems());
        assert!(set().max(&None::<f64>, 10.0, "weight").has_problems());
    }

    #[test]
    fn test_length_family() {
        let name: Option<String> = None;
        let set = set()
            .min_length(&name, 2, "name")
            .max_length(&name, 2, "name")
            .null_or_min_length(&name, 2, "name")
            .null_or_length(&name, 2, 4, "name")
            .length("ab", 3, 5, "code")
            .max_length("ação", 3, "code")
            .null_or_length(&Some("abcdef"), 2, 4, "code");

        let tags: Vec<_> = set
            .problems()
            .unwrap()
            .iter()
            .filter_map(|p| p.rule())
            .collect();
        assert_eq!(
            tags,
            vec![rules::MIN_LENGTH, rules::LENGTH, rules::MAX_LENGTH, rules::NULL_OR_LENGTH]
        );
    }

    #[test]
    fn test_length_message() {
        let failed = set().length("ab", 3, 5, "code");
        assert_eq!(
            failed.problems().unwrap().as_slice()[0].message,
            "The 'code' field must have a length between '3' and '5' characters"
        );
    }
}
