//! Custom predicate operators
//!
//! For checks outside the built-in vocabulary. The caller supplies the
//! predicate, a message formatter that receives the resolved display
//! name(s), and the rule tag recorded under `rule`.

use serde::Serialize;
use serde_json::Value;

use super::{RuleSet, to_json};
use crate::foundation::{Problem, ProblemCategory};
use crate::rules;

impl RuleSet {
    /// Fails when `predicate(value)` is false.
    ///
    /// ```rust,ignore
    /// set().must(
    ///     &order.lines,
    ///     |lines| lines.len() <= 50,
    ///     |label, lines| format!("'{label}' accepts at most 50 lines, got {}", lines.len()),
    ///     "max-lines",
    ///     "lines",
    /// )
    /// ```
    pub fn must<V>(
        self,
        value: &V,
        predicate: impl FnOnce(&V) -> bool,
        message: impl FnOnce(&str, &V) -> String,
        rule: &str,
        property: &str,
    ) -> Self
    where
        V: Serialize + ?Sized,
    {
        if predicate(value) {
            return self;
        }
        let (property, label) = self.property_and_display_name(property);
        let problem = Problem::invalid_parameter(message(&label, value), property)
            .with_extension(rules::RULE, rule)
            .with_extension(rules::CURRENT, to_json(value));
        self.push(problem)
    }

    /// [`must`](RuleSet::must) with an extra parameter, recorded under
    /// `expected`.
    pub fn must_with<V, P>(
        self,
        value: &V,
        param: P,
        predicate: impl FnOnce(&V, &P) -> bool,
        message: impl FnOnce(&str, &V, &P) -> String,
        rule: &str,
        property: &str,
    ) -> Self
    where
        V: Serialize + ?Sized,
        P: Serialize,
    {
        if predicate(value, &param) {
            return self;
        }
        let (property, label) = self.property_and_display_name(property);
        let problem = Problem::invalid_parameter(message(&label, value, &param), property)
            .with_extension(rules::RULE, rule)
            .with_extension(rules::CURRENT, to_json(value))
            .with_extension(rules::EXPECTED, to_json(&param));
        self.push(problem)
    }

    /// Fails when `predicate(first, second)` is false. Reported like the
    /// built-in two-operand rules: no primary property, both names under
    /// `properties` and both values under `values`.
    #[allow(clippy::too_many_arguments)]
    pub fn both_must<A, B>(
        self,
        first: &A,
        second: &B,
        predicate: impl FnOnce(&A, &B) -> bool,
        message: impl FnOnce(&str, &str, &A, &B) -> String,
        rule: &str,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        if predicate(first, second) {
            return self;
        }
        let (first_property, first_label) = self.property_and_display_name(first_property);
        let (second_property, second_label) = self.property_and_display_name(second_property);
        let problem = Problem::new(
            ProblemCategory::InvalidParameter,
            message(&first_label, &second_label, first, second),
        )
        .with_extension(rules::RULE, rule)
        .with_extension(rules::PROPERTIES, vec![first_property, second_property])
        .with_extension(rules::VALUES, Value::Array(vec![to_json(first), to_json(second)]));
        self.push(problem)
    }

    /// [`both_must`](RuleSet::both_must) with an extra parameter, recorded
    /// under `expected`.
    #[allow(clippy::too_many_arguments)]
    pub fn both_must_with<A, B, P>(
        self,
        first: &A,
        second: &B,
        param: P,
        predicate: impl FnOnce(&A, &B, &P) -> bool,
        message: impl FnOnce(&str, &str, &A, &B, &P) -> String,
        rule: &str,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Serialize + ?Sized,
        B: Serialize + ?Sized,
        P: Serialize,
    {
        if predicate(first, second, &param) {
            return self;
        }
        let (first_property, first_label) = self.property_and_display_name(first_property);
        let (second_property, second_label) = self.property_and_display_name(second_property);
        let problem = Problem::new(
            ProblemCategory::InvalidParameter,
            message(&first_label, &second_label, first, second, &param),
        )
        .with_extension(rules::RULE, rule)
        .with_extension(rules::PROPERTIES, vec![first_property, second_property])
        .with_extension(rules::VALUES, Value::Array(vec![to_json(first), to_json(second)]))
        .with_extension(rules::EXPECTED, to_json(&param));
        self.push(problem)
    }
}

#[cfg(test)]
mod tests {
    use crate::{rules, set};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_must_passes_without_calling_formatter() {
        let set = set().must(
            &4,
            |n| n % 2 == 0,
            |_, _| unreachable!("formatter runs only on failure"),
            "even",
            "count",
        );
        assert!(!set.has_problems());
    }

    #[test]
    fn test_must_failure() {
        let failed = set()
            .with_property_prefix("order")
            .must(&3, |n| n % 2 == 0, |label, n| format!("{label} must be even, got {n}"), "even", "order.count");

        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.property.as_deref(), Some("count"));
        assert_eq!(problem.message, "count must be even, got 3");
        assert_eq!(problem.rule(), Some("even"));
        assert_eq!(problem.extension(rules::CURRENT), Some(&json!(3)));
    }

    #[test]
    fn test_must_with_records_param() {
        let failed = set().must_with(
            "abc",
            5_usize,
            |value, min| value.len() >= *min,
            |label, _, min| format!("{label} needs {min} characters"),
            "min-length-custom",
            "code",
        );
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.message, "code needs 5 characters");
        assert_eq!(problem.extension(rules::EXPECTED), Some(&json!(5)));
    }

    #[test]
    fn test_both_must() {
        let failed = set().both_must(
            &10,
            &3,
            |total, part| part > total,
            |a, b, _, _| format!("'{b}' must exceed '{a}'"),
            "exceeds",
            "total",
            "part",
        );
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.property, None);
        assert_eq!(problem.message, "'part' must exceed 'total'");
        assert_eq!(problem.extension(rules::PROPERTIES), Some(&json!(["total", "part"])));
        assert_eq!(problem.extension(rules::VALUES), Some(&json!([10, 3])));
    }

    #[test]
    fn test_both_must_with() {
        let failed = set().both_must_with(
            &1,
            &9,
            5,
            |a, b, gap| b - a <= *gap,
            |a, b, _, _, gap| format!("'{a}' and '{b}' differ by more than {gap}"),
            "max-gap",
            "low",
            "high",
        );
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.message, "'low' and 'high' differ by more than 5");
        assert_eq!(problem.extension(rules::EXPECTED), Some(&json!(5)));
    }
}
