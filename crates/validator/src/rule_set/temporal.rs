//! Date and time operators
//!
//! The current instant is read once per check from the system clock (see
//! [`Temporal`]). Absent values fail every check here.

use serde::Serialize;

use super::{RuleSet, Template, Violation, to_json};
use crate::foundation::Operand;
use crate::predicates::{Temporal, temporal};
use crate::rules;

impl RuleSet {
    /// Requires a value strictly before now.
    pub fn in_past<V>(self, value: &V, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Temporal + Serialize + Sized,
    {
        self.relative_to_now(value, temporal::in_past, rules::IN_PAST, |t| &t.in_past, property)
    }

    /// Requires a value strictly after now.
    pub fn in_future<V>(self, value: &V, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Temporal + Serialize + Sized,
    {
        self.relative_to_now(value, temporal::in_future, rules::IN_FUTURE, |t| &t.in_future, property)
    }

    /// Requires a value on the current calendar date.
    pub fn today<V>(self, value: &V, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Temporal + Serialize + Sized,
    {
        self.relative_to_now(value, temporal::today, rules::TODAY, |t| &t.today, property)
    }

    /// Requires a value strictly after `bound`.
    ///
    /// ```rust,ignore
    /// set().after(&booking.check_out, booking.check_in, "check_out")
    /// ```
    pub fn after<V>(self, value: &V, bound: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Temporal + Serialize + Sized,
    {
        let current = value.present();
        if temporal::after(current, &bound) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::AFTER, |t| &t.after)
                .expected(to_json(&bound))
                .current(current),
        )
    }

    /// Requires a value strictly before `bound`.
    pub fn before<V>(self, value: &V, bound: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Temporal + Serialize + Sized,
    {
        let current = value.present();
        if temporal::before(current, &bound) {
            return self;
        }
        self.report(
            property,
            Violation::new(rules::BEFORE, |t| &t.before)
                .expected(to_json(&bound))
                .current(current),
        )
    }

    /// Requires a value within `start..=end`.
    pub fn between<V>(self, value: &V, start: V::Value, end: V::Value, property: &str) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Temporal + Serialize + Sized,
    {
        let current = value.present();
        if temporal::between(current, &start, &end) {
            return self;
        }
        let (start, end) = (to_json(&start), to_json(&end));
        self.report(
            property,
            Violation::new(rules::BETWEEN, |t| &t.between)
                .arg(&start)
                .arg(&end)
                .extension(rules::EXPECTED, serde_json::Value::Array(vec![start, end]))
                .current(current),
        )
    }

    fn relative_to_now<V>(
        self,
        value: &V,
        holds: fn(Option<&V::Value>) -> bool,
        rule: &'static str,
        template: Template,
        property: &str,
    ) -> Self
    where
        V: Operand + ?Sized,
        V::Value: Serialize + Sized,
    {
        let current = value.present();
        if holds(current) {
            return self;
        }
        self.report(property, Violation::new(rule, template).current(current))
    }
}

#[cfg(test)]
mod tests {
    use crate::{rules, set};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_past_future_today() {
        let now = Utc::now();
        let set = set()
            .in_past(&(now - Duration::days(1)), "a")
            .in_past(&(now + Duration::days(1)), "b")
            .in_future(&Some(now + Duration::days(1)), "c")
            .in_future(&None::<chrono::DateTime<Utc>>, "d")
            .today(&now.date_naive(), "e")
            .today(&(now.date_naive() - Duration::days(3)), "f");

        let properties: Vec<_> = set
            .problems()
            .unwrap()
            .iter()
            .filter_map(|p| p.property.as_deref())
            .collect();
        assert_eq!(properties, vec!["b", "d", "f"]);
    }

    #[test]
    fn test_between_records_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let value = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let failed = set().between(&value, start, end, "due");
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.rule(), Some(rules::BETWEEN));
        assert_eq!(problem.extension(rules::EXPECTED), Some(&json!(["2024-01-01", "2024-01-31"])));
        assert_eq!(problem.extension(rules::CURRENT), Some(&json!("2024-02-01")));
        assert_eq!(problem.message, "The 'due' field must be between '2024-01-01' and '2024-01-31'");

        assert!(!set().between(&start, start, end, "due").has_problems());
    }

    #[test]
    fn test_after_and_before_are_strict() {
        let bound = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert!(set().after(&bound, bound, "t").has_problems());
        assert!(set().before(&bound, bound, "t").has_problems());
        assert!(!set().after(&(bound + Duration::seconds(1)), bound, "t").has_problems());
        assert!(!set().before(&Some(bound - Duration::seconds(1)), bound, "t").has_problems());
    }
}
