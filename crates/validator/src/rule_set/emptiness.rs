//! Presence and emptiness operators.

use serde::Serialize;

use super::{RuleSet, Violation, optional_json};
use crate::foundation::Emptiable;
use crate::predicates::emptiness;
use crate::rules;

impl RuleSet {
    /// Requires `value` to be present.
    pub fn not_null<T>(self, value: &Option<T>, property: &str) -> Self {
        if value.is_some() {
            return self;
        }
        self.report(property, required())
    }

    /// Requires `value` to be present and not its kind's zero value
    /// (see [`Emptiable`]).
    ///
    /// ```rust,ignore
    /// set().not_empty(&order.name, "name").not_empty(&order.items, "items")
    /// ```
    pub fn not_empty<V: Emptiable + ?Sized>(self, value: &V, property: &str) -> Self {
        if emptiness::not_empty(value) {
            return self;
        }
        self.report(property, required())
    }

    /// Accepts an absent `value`; a present one must not be empty.
    pub fn null_or_not_empty<V: Emptiable + ?Sized>(self, value: &V, property: &str) -> Self {
        if emptiness::null_or_not_empty(value) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::NULL_OR_NOT_EMPTY, |t| &t.null_or_not_empty),
        )
    }

    /// Requires both values absent or both present and not empty.
    pub fn both_null_or_not_empty<A, B>(
        self,
        first: &A,
        second: &B,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Emptiable + Serialize + ?Sized,
        B: Emptiable + Serialize + ?Sized,
    {
        if emptiness::both_null_or_not_empty(first, second) {
            return self;
        }
        self.report_pair(
            [first_property, second_property],
            [optional_json(Some(first)), optional_json(Some(second))],
            Violation::new(rules::BOTH_NULL_OR_NOT, |t| &t.both_null_or_not),
        )
    }
}

fn required() -> Violation {
    Violation::new(rules::NOT_NULL_OR_NOT_EMPTY, |t| &t.not_null_or_empty)
}

#[cfg(test)]
mod tests {
    use crate::foundation::Problem;
    use crate::{rules, set};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn only(set: &crate::RuleSet) -> &Problem {
        let problems = set.problems().expect("expected problems");
        assert_eq!(problems.len(), 1);
        &problems.as_slice()[0]
    }

    #[test]
    fn test_not_null() {
        assert!(!set().not_null(&Some(0), "code").has_problems());

        let failed = set().not_null(&None::<u8>, "code");
        let problem = only(&failed);
        assert_eq!(problem.property.as_deref(), Some("code"));
        assert_eq!(problem.rule(), Some(rules::NOT_NULL_OR_NOT_EMPTY));
        assert_eq!(problem.message, "The 'code' field must be informed");
    }

    #[test]
    fn test_not_empty_zero_values() {
        let set = set()
            .not_empty("", "name")
            .not_empty(&0_i32, "amount")
            .not_empty(&Vec::<String>::new(), "items")
            .not_empty(&Some(uuid::Uuid::nil()), "id")
            .not_empty("ok", "other");
        assert_eq!(set.problems().map(|p| p.len()), Some(4));
    }

    #[test]
    fn test_null_or_not_empty() {
        assert!(!set().null_or_not_empty(&None::<String>, "nick").has_problems());

        let failed = set().null_or_not_empty(&Some(" "), "nick");
        assert_eq!(only(&failed).rule(), Some(rules::NULL_OR_NOT_EMPTY));
    }

    #[test]
    fn test_both_null_or_not_empty_reports_pair() {
        let failed = set().both_null_or_not_empty(&Some("x"), &None::<&str>, "first", "second");
        let problem = only(&failed);
        assert_eq!(problem.property, None);
        assert_eq!(problem.extension(rules::PROPERTIES), Some(&json!(["first", "second"])));
        assert_eq!(problem.extension(rules::VALUES), Some(&json!(["x", null])));
        assert_eq!(
            problem.message,
            "Both fields 'first' and 'second' must be informed together or not informed"
        );
    }
}
