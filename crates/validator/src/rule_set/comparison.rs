//! Two-property ordering operators
//!
//! Absent values order before every present value, so `less_than(None, 1)`
//! holds and `less_than(1, None)` does not. Two absent values are equal.

use serde::Serialize;

use super::{RuleSet, Template, Violation, optional_json};
use crate::foundation::Operand;
use crate::predicates::ordering;
use crate::rules;

impl RuleSet {
    /// Requires `first < second`.
    ///
    /// ```rust,ignore
    /// set().less_than(&range.start, &range.end, "start", "end")
    /// ```
    pub fn less_than<A, B>(self, first: &A, second: &B, first_property: &str, second_property: &str) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: PartialOrd + Serialize,
    {
        self.compare(
            first,
            second,
            [first_property, second_property],
            ordering::less_than,
            rules::LESS_THAN,
            |t| &t.less_than,
        )
    }

    /// Requires `first <= second`.
    pub fn less_than_or_equal<A, B>(
        self,
        first: &A,
        second: &B,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: PartialOrd + Serialize,
    {
        self.compare(
            first,
            second,
            [first_property, second_property],
            ordering::less_than_or_equal,
            rules::LESS_THAN_OR_EQUAL,
            |t| &t.less_than_or_equal,
        )
    }

    /// Requires `first > second`.
    pub fn greater_than<A, B>(
        self,
        first: &A,
        second: &B,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: PartialOrd + Serialize,
    {
        self.compare(
            first,
            second,
            [first_property, second_property],
            ordering::greater_than,
            rules::GREATER_THAN,
            |t| &t.greater_than,
        )
    }

    /// Requires `first >= second`.
    pub fn greater_than_or_equal<A, B>(
        self,
        first: &A,
        second: &B,
        first_property: &str,
        second_property: &str,
    ) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: PartialOrd + Serialize,
    {
        self.compare(
            first,
            second,
            [first_property, second_property],
            ordering::greater_than_or_equal,
            rules::GREATER_THAN_OR_EQUAL,
            |t| &t.greater_than_or_equal,
        )
    }

    fn compare<A, B>(
        self,
        first: &A,
        second: &B,
        properties: [&str; 2],
        holds: fn(Option<&A::Value>, Option<&A::Value>) -> bool,
        rule: &'static str,
        template: Template,
    ) -> Self
    where
        A: Operand + ?Sized,
        B: Operand<Value = A::Value> + ?Sized,
        A::Value: Serialize,
    {
        let (first, second) = (first.present(), second.present());
        if holds(first, second) {
            return self;
        }
        self.report_pair(
            properties,
            [optional_json(first), optional_json(second)],
            Violation::new(rule, template),
        )
    }
}
