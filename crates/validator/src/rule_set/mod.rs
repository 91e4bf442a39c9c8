//! The rule set: an immutable accumulator threaded through a validation chain
//!
//! A [`RuleSet`] is created empty, moved through a chain of operator calls
//! and finally queried. Each operator consumes the set and returns it:
//! unchanged when its check passes, extended with exactly one [`Problem`]
//! when it fails. Checks never short-circuit one another, so the number of
//! problems equals the number of failed operators.
//!
//! Operators take the property name as their last argument (two-operand
//! operators take two). The [`check!`](crate::check) and
//! [`check_both!`](crate::check_both) macros fill those in from the
//! argument expressions.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let result = set()
//!     .not_empty(&order.name, "name")
//!     .min(&order.amount, 1, "amount")
//!     .into_result();
//! ```

mod comparison;
mod conditional;
mod custom;
mod emptiness;
mod equality;
mod nested;
mod pattern;
mod range;
mod shape;
mod temporal;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

use crate::display::{self, DisplayNamed, Subject};
use crate::foundation::problem::strip_prefix_segment;
use crate::foundation::{IntoProblems, Problem, ProblemCategory, Problems};
use crate::resources::{self, MessageTemplates};
use crate::rules;

// ============================================================================
// RULE SET
// ============================================================================

/// Immutable validation accumulator.
///
/// Holds an optional subject type (for display-name lookups), an optional
/// property prefix (stripped from reported paths) and the problems recorded
/// so far. `problems` stays `None` until the first failure, so an all-valid
/// chain never allocates a collection.
///
/// `RuleSet` is `Clone`: a chain can branch without the branches observing
/// each other's problems.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    subject: Option<Subject>,
    prefix: Option<String>,
    problems: Option<Problems>,
}

impl RuleSet {
    /// Creates an empty rule set without a subject type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty rule set for values of `T`.
    ///
    /// Labels come only from the runtime registry; use [`RuleSet::for_named`]
    /// to also consult [`DisplayNamed`] annotations.
    #[must_use]
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        Self {
            subject: Some(Subject::of::<T>()),
            ..Self::default()
        }
    }

    /// Creates an empty rule set for values of an annotated type `T`.
    #[must_use]
    pub fn for_named<T: DisplayNamed>() -> Self {
        Self {
            subject: Some(Subject::named::<T>()),
            ..Self::default()
        }
    }

    /// The subject type tag, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// The active property prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Remembers `prefix`: problems entering this set afterwards have a
    /// leading `prefix.` segment removed from their property.
    pub fn with_property_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    // ------------------------------------------------------------------------
    // Terminal queries
    // ------------------------------------------------------------------------

    /// Returns true when at least one problem was recorded.
    #[must_use]
    pub fn has_problems(&self) -> bool {
        self.problems.is_some()
    }

    /// The recorded problems; `None` when the chain is valid, never empty.
    #[must_use]
    pub fn problems(&self) -> Option<&Problems> {
        self.problems.as_ref()
    }

    /// Consumes the set, yielding its problems.
    #[must_use]
    pub fn into_problems(self) -> Option<Problems> {
        self.problems
    }

    /// Consumes the set: `Ok(())` when valid, `Err(problems)` otherwise.
    pub fn into_result(self) -> Result<(), Problems> {
        self.problems.map_or(Ok(()), Err)
    }

    // ------------------------------------------------------------------------
    // Direct problem entry
    // ------------------------------------------------------------------------

    /// Appends a pre-built problem, stripping the active prefix from its
    /// property.
    pub fn with_problem(self, mut problem: Problem) -> Self {
        if let Some(prefix) = self.prefix.as_deref() {
            problem.strip_property_prefix(prefix);
        }
        self.push(problem)
    }

    /// Appends every problem reported by `problems`, stripping the active
    /// prefix from each property.
    pub fn with_problems(self, problems: impl IntoProblems) -> Self {
        match problems.into_problems() {
            Some(problems) => problems.into_iter().fold(self, Self::with_problem),
            None => self,
        }
    }

    /// Removes the active prefix from `property` and resolves its display
    /// name against the subject type.
    ///
    /// ```rust,ignore
    /// let set = RuleSet::for_named::<Address>().with_property_prefix("addr");
    /// let (property, label) = set.property_and_display_name("addr.street");
    /// assert_eq!(property, "street");
    /// ```
    #[must_use]
    pub fn property_and_display_name(&self, property: &str) -> (String, Arc<str>) {
        let property = self
            .prefix
            .as_deref()
            .and_then(|prefix| strip_prefix_segment(property, prefix))
            .unwrap_or(property);
        let label = display::resolve(self.subject.as_ref(), Some(property));
        (property.to_owned(), label)
    }

    // ------------------------------------------------------------------------
    // Internals shared by the operator families
    // ------------------------------------------------------------------------

    /// An empty set with the same subject and prefix.
    fn fresh(&self) -> Self {
        Self {
            subject: self.subject,
            prefix: self.prefix.clone(),
            problems: None,
        }
    }

    fn push(mut self, problem: Problem) -> Self {
        tracing::trace!(
            rule = problem.rule(),
            property = problem.property.as_deref(),
            "rule failed"
        );
        self.problems.get_or_insert_with(Problems::new).push(problem);
        self
    }

    /// Reports a failed single-property rule.
    fn report(self, property: &str, violation: Violation) -> Self {
        let (property, label) = self.property_and_display_name(property);
        let message = violation.message(&[&label]);
        let problem = violation.into_problem(Problem::invalid_parameter(message, property));
        self.push(problem)
    }

    /// Reports a failed two-operand rule: no primary property, both names
    /// and values listed in the extensions.
    fn report_pair(self, properties: [&str; 2], values: [Value; 2], violation: Violation) -> Self {
        let (first, first_label) = self.property_and_display_name(properties[0]);
        let (second, second_label) = self.property_and_display_name(properties[1]);
        let message = violation.message(&[&first_label, &second_label]);
        let problem = violation
            .into_problem(Problem::new(ProblemCategory::InvalidParameter, message))
            .with_extension(rules::PROPERTIES, vec![first, second])
            .with_extension(rules::VALUES, Value::Array(values.into()));
        self.push(problem)
    }
}

/// Empty rule set without a subject type.
#[must_use]
pub fn set() -> RuleSet {
    RuleSet::new()
}

/// Empty rule set whose display names come from `T`'s annotations.
#[must_use]
pub fn set_for<T: DisplayNamed>() -> RuleSet {
    RuleSet::for_named::<T>()
}

impl IntoProblems for RuleSet {
    fn into_problems(self) -> Option<Problems> {
        self.problems
    }
}

impl From<RuleSet> for Option<Problems> {
    fn from(set: RuleSet) -> Self {
        set.problems
    }
}

impl From<RuleSet> for Result<(), Problems> {
    fn from(set: RuleSet) -> Self {
        set.into_result()
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// Selects a rule's template from the installed set.
type Template = fn(&MessageTemplates) -> &str;

/// What a failed built-in rule reports, minus the property naming.
struct Violation {
    rule: &'static str,
    template: Template,
    args: SmallVec<[String; 2]>,
    extensions: SmallVec<[(&'static str, Value); 3]>,
}

impl Violation {
    fn new(rule: &'static str, template: Template) -> Self {
        Self {
            rule,
            template,
            args: SmallVec::new(),
            extensions: SmallVec::new(),
        }
    }

    /// Adds a message argument after the display name(s).
    fn arg(mut self, arg: &Value) -> Self {
        self.args.push(display_value(arg));
        self
    }

    fn extension(mut self, key: &'static str, value: Value) -> Self {
        self.extensions.push((key, value));
        self
    }

    /// Records the checked value under `current`.
    fn current<T: Serialize + ?Sized>(self, value: Option<&T>) -> Self {
        self.extension(rules::CURRENT, optional_json(value))
    }

    /// Records `expected` and uses it as the next message argument.
    fn expected(self, expected: Value) -> Self {
        self.arg(&expected).extension(rules::EXPECTED, expected)
    }

    fn message(&self, labels: &[&Arc<str>]) -> String {
        let templates = resources::current();
        let mut args: SmallVec<[&dyn fmt::Display; 4]> = SmallVec::new();
        args.extend(labels.iter().map(|label| *label as &dyn fmt::Display));
        args.extend(self.args.iter().map(|arg| arg as &dyn fmt::Display));
        resources::format((self.template)(&templates), &args)
    }

    fn into_problem(self, mut problem: Problem) -> Problem {
        problem
            .extensions
            .insert(rules::RULE.to_owned(), Value::from(self.rule));
        for (key, value) in self.extensions {
            problem.extensions.insert(key.to_owned(), value);
        }
        problem
    }
}

// ============================================================================
// JSON HELPERS
// ============================================================================

/// Serializes an operand for the extensions map; values that cannot be
/// represented as JSON are recorded as `null`.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "operand could not be serialized, recording null");
        Value::Null
    })
}

pub(crate) fn optional_json<T: Serialize + ?Sized>(value: Option<&T>) -> Value {
    value.map_or(Value::Null, to_json)
}

/// Message rendering of an operand: strings without quotes, everything else
/// in its JSON form.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
