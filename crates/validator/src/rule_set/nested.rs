//! Nested object and collection validation
//!
//! Two ways to bring a child's problems into the parent:
//!
//! - *prefixing* ([`nested`](RuleSet::nested), [`all_nested`](RuleSet::all_nested),
//!   [`all_validable`](RuleSet::all_validable)): `street` reported by the
//!   child of `address` becomes `address.street`, and element 2 of `items`
//!   reports `items[2].name`;
//! - *replacing* ([`validate`](RuleSet::validate),
//!   [`validate_all`](RuleSet::validate_all)): every child problem is
//!   reported against the parent property itself (`address`, `items[2]`).
//!
//! Either way the parent's own prefix is stripped as problems enter the set.

use super::{RuleSet, Violation};
use crate::foundation::{Collection, IntoProblems, Validable};
use crate::rules;

impl RuleSet {
    /// Requires `value` to be present and splices the problems of
    /// `build(value)` under `{property}.`.
    ///
    /// ```rust,ignore
    /// set().not_null_nested(order.address.as_ref(), |address| {
    ///     set_for::<Address>().not_empty(&address.street, "street")
    /// }, "address")
    /// ```
    pub fn not_null_nested<T, R>(
        self,
        value: Option<&T>,
        build: impl FnOnce(&T) -> R,
        property: &str,
    ) -> Self
    where
        T: ?Sized,
        R: IntoProblems,
    {
        match value {
            Some(value) => self.splice_chained(build(value), property),
            None => self.report(
                property,
                Violation::new(rules::NOT_NULL_OR_NOT_EMPTY, |t| &t.not_null_or_empty),
            ),
        }
    }

    /// Splices the problems of `validate(value)` under `{property}.`. An
    /// absent value is accepted without calling `validate`.
    pub fn nested<T, R>(self, value: Option<&T>, validate: impl FnOnce(&T) -> R, property: &str) -> Self
    where
        T: ?Sized,
        R: IntoProblems,
    {
        match value {
            Some(value) => self.splice_chained(validate(value), property),
            None => self,
        }
    }

    /// Validates every element; problems of element `i` are spliced under
    /// `{property}[i].`. An absent or empty collection never calls
    /// `validate`.
    ///
    /// ```rust,ignore
    /// set().all_nested(&order.lines, |line| {
    ///     set().min(&line.quantity, 1, "quantity")
    /// }, "lines")
    /// ```
    pub fn all_nested<C, R>(
        self,
        items: &C,
        mut validate: impl FnMut(&C::Item) -> R,
        property: &str,
    ) -> Self
    where
        C: Collection + ?Sized,
        R: IntoProblems,
    {
        let Some(items) = items.items() else {
            return self;
        };
        items.enumerate().fold(self, |set, (index, item)| {
            set.splice_chained(validate(item), &format!("{property}[{index}]"))
        })
    }

    /// [`all_nested`](RuleSet::all_nested) for self-validating elements.
    pub fn all_validable<C>(self, items: &C, property: &str) -> Self
    where
        C: Collection + ?Sized,
        C::Item: Validable,
    {
        self.all_nested(items, |item| item.problems(), property)
    }

    /// Reports every problem of `value` against `property` itself.
    ///
    /// ```rust,ignore
    /// set().validate(&order.address, "address")
    /// ```
    pub fn validate<T: Validable + ?Sized>(self, value: &T, property: &str) -> Self {
        match value.problems() {
            Some(problems) => self.with_problems(problems.renamed(property)),
            None => self,
        }
    }

    /// Reports every problem of element `i` against `{property}[i]`.
    pub fn validate_all<C>(self, items: &C, property: &str) -> Self
    where
        C: Collection + ?Sized,
        C::Item: Validable,
    {
        let Some(items) = items.items() else {
            return self;
        };
        items.enumerate().fold(self, |set, (index, item)| match item.problems() {
            Some(problems) => set.with_problems(problems.renamed(&format!("{property}[{index}]"))),
            None => set,
        })
    }

    fn splice_chained(self, problems: impl IntoProblems, property: &str) -> Self {
        match problems.into_problems() {
            Some(problems) => {
                tracing::trace!(property, count = problems.len(), "splicing nested problems");
                self.with_problems(problems.chained(property))
            }
            None => self,
        }
    }
}
