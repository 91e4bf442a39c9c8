//! Equality operators.

use serde::Serialize;

use super::{RuleSet, Violation, optional_json, to_json};
use crate::foundation::{Operand, TextOperand};
use crate::predicates::{StringComparison, equality};
use crate::rules;

impl RuleSet {
    /// Requires `value` to be present and equal to `expected`.
    pub fn equal<V>(self, value: &V, expected: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialEq + Serialize + Sized,
    {
        let current = value.present();
        if equality::equal(current, &expected) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::EQUALS, |t| &t.equal)
                .expected(to_json(&expected))
                .current(current),
        )
    }

    /// Requires `value` to be absent or different from `expected`.
    pub fn not_equal<V>(self, value: &V, expected: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: PartialEq + Serialize + Sized,
    {
        let current = value.present();
        if equality::not_equal(current, &expected) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::NOT_EQUALS, |t| &t.not_equal)
                .expected(to_json(&expected))
                .current(current),
        )
    }

    /// String [`equal`](RuleSet::equal) under `comparison`.
    ///
    /// ```rust,ignore
    /// set().equal_str(&code, "ABC", StringComparison::OrdinalIgnoreCase, "code")
    /// ```
    pub fn equal_str<S: TextOperand + ?Sized>(
        self,
        value: &S,
        expected: &str,
        comparison: StringComparison,
        property: &str,
    ) -> Self {
        let current = value.text();
        if equality::equal_str(current, expected, comparison) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::EQUALS, |t| &t.equal)
                .expected(expected.into())
                .current(current),
        )
    }

    /// String [`not_equal`](RuleSet::not_equal) under `comparison`.
    pub fn not_equal_str<S: TextOperand + ?Sized>(
        self,
        value: &S,
        expected: &str,
        comparison: StringComparison,
        property: &str,
    ) -> Self {
        let current = value.text();
        if equality::not_equal_str(current, expected, comparison) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::NOT_EQUALS, |t| &t.not_equal)
                .expected(expected.into())
                .current(current),
        )
    }

    /// Requires two values to be equal; two absent values are equal.
    pub fn both_equal<A, B>(
        self,
        first: &A,
        second: &B,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: PartialEq + Serialize,
    {
        let (first, second) = (first.present(), second.present());
        if equality::both_equal(first, second) {
            return self;
        }
        self.report_pair(
            [first_property, second_property],
            [optional_json(first), optional_json(second)],
            Violation::new(rules::BOTH_EQUALS, |t| &t.both_equal),
        )
    }

    /// Requires two values to differ.
    pub fn both_not_equal<A, B>(
        self,
        first: &A,
        second: &B,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: PartialEq + Serialize,
    {
        let (first, second) = (first.present(), second.present());
        if equality::both_not_equal(first, second) {
            return self;
        }
        self.report_pair(
            [first_property, second_property],
            [optional_json(first), optional_json(second)],
            Violation::new(rules::BOTH_NOT_EQUALS, |t| &t.both_not_equal),
        )
    }

    /// String [`both_equal`](RuleSet::both_equal) under `comparison`.
    pub fn both_equal_str<A, B>(
        self,
        first: &A,
        second: &B,
        comparison: StringComparison,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: TextOperand + ?Sized,
        B: TextOperand + ?Sized,
    {
        let (first, second) = (first.text(), second.text());
        if equality::both_equal_str(first, second, comparison) {
            return self;
        }
        self.report_pair(
            [first_property, second_property],
            [optional_json(first), optional_json(second)],
            Violation::new(rules::BOTH_EQUALS, |t| &t.both_equal),
        )
    }

    /// String [`both_not_equal`](RuleSet::both_not_equal) under `comparison`.
    pub fn both_not_equal_str<A, B>(
        self,
        first: &A,
        second: &B,
        comparison: StringComparison,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: TextOperand + ?Sized,
        B: TextOperand + ?Sized,
    {
        let (first, second) = (first.text(), second.text());
        if equality::both_not_equal_str(first, second, comparison) {
            return self;
        }
        self.report_pair(
            [first_property, second_property],
            [optional_json(first), optional_json(second)],
            Violation::new(rules::BOTH_NOT_EQUALS, |t| &t.both_not_equal),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::predicates::StringComparison;
    use crate::{rules, set};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_equal_records_current_and_expected() {
        let failed = set().equal(&Some(3), 5, "quantity");
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.rule(), Some(rules::EQUALS));
        assert_eq!(problem.extension(rules::CURRENT), Some(&json!(3)));
        assert_eq!(problem.extension(rules::EXPECTED), Some(&json!(5)));
        assert_eq!(problem.message, "The 'quantity' field must be equal to '5'");
    }

    #[test]
    fn test_absent_never_equal() {
        assert!(set().equal(&None::<i32>, 5, "quantity").has_problems());
        assert!(!set().not_equal(&None::<i32>, 5, "quantity").has_problems());
        assert!(set().not_equal(&5, 5, "quantity").has_problems());
    }

    #[test]
    fn test_equal_str_modes() {
        assert!(set().equal_str("abc", "ABC", StringComparison::Ordinal, "code").has_problems());
        assert!(
            !set()
                .equal_str("abc", "ABC", StringComparison::OrdinalIgnoreCase, "code")
                .has_problems()
        );
        assert!(
            set()
                .not_equal_str(&Some("abc".to_owned()), "ABC", StringComparison::OrdinalIgnoreCase, "code")
                .has_problems()
        );
    }

    #[test]
    fn test_both_equal_pair_extensions() {
        let password = "secret";
        let confirmation = "Secret";
        let failed = set().both_equal(password, confirmation, "password", "confirmation");

        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.property, None);
        assert_eq!(problem.rule(), Some(rules::BOTH_EQUALS));
        assert_eq!(problem.extension(rules::PROPERTIES), Some(&json!(["password", "confirmation"])));
        assert_eq!(problem.extension(rules::VALUES), Some(&json!(["secret", "Secret"])));

        assert!(
            !set()
                .both_equal_str(password, confirmation, StringComparison::OrdinalIgnoreCase, "password", "confirmation")
                .has_problems()
        );
    }

    #[test]
    fn test_both_family_absent_values() {
        assert!(!set().both_equal(&None::<i32>, &None::<i32>, "a", "b").has_problems());
        assert!(set().both_not_equal(&None::<i32>, &None::<i32>, "a", "b").has_problems());
        assert!(!set().both_not_equal(&Some(1), &2, "a", "b").has_problems());
        assert!(
            set()
                .both_not_equal_str("x", "X", StringComparison::OrdinalIgnoreCase, "a", "b")
                .has_problems()
        );
    }
}
