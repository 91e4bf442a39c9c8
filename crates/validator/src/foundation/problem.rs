//! Problem types for validation failures
//!
//! A [`Problem`] is a single structured diagnostic: the offending property
//! path, a resolved human-readable message, and an ordered map of
//! extensions (`rule`, `current`, `expected`, ...) that API consumers can
//! branch on. [`Problems`] is the insertion-ordered aggregate that rule sets
//! accumulate and nested validation splices together.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules;

// ============================================================================
// PROBLEM CATEGORY
// ============================================================================

/// Broad classification of a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemCategory {
    /// A rule evaluated false for an input value (the rule-set default).
    #[default]
    InvalidParameter,
    /// Generic validation failure not tied to a single parameter.
    ValidationFailed,
    /// A looked-up record does not exist.
    NotFound,
}

impl fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidParameter => "invalid-parameter",
            Self::ValidationFailed => "validation-failed",
            Self::NotFound => "not-found",
        })
    }
}

// ============================================================================
// PROBLEM
// ============================================================================

/// A single validation diagnostic.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::foundation::Problem;
///
/// let problem = Problem::invalid_parameter("The 'Name' field must be informed", "name")
///     .with_extension("rule", "not-null-or-not-empty");
///
/// assert_eq!(problem.property.as_deref(), Some("name"));
/// assert_eq!(problem.rule(), Some("not-null-or-not-empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Broad classification.
    pub category: ProblemCategory,

    /// Dotted/bracketed path of the offending field, relative to the root
    /// subject. Examples: "name", "address.street", "items[2].name".
    ///
    /// `None` for two-operand rules, whose operands are listed in the
    /// `properties` extension instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Resolved, human-readable text.
    pub message: String,

    /// Structured diagnostic data, in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, Value>,
}

impl Problem {
    /// Creates a problem with a category and message and no property.
    pub fn new(category: ProblemCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            property: None,
            message: message.into(),
            extensions: IndexMap::new(),
        }
    }

    /// Creates an [`InvalidParameter`](ProblemCategory::InvalidParameter)
    /// problem for `property`.
    pub fn invalid_parameter(message: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(ProblemCategory::InvalidParameter, message).with_property(property)
    }

    /// Creates a [`ValidationFailed`](ProblemCategory::ValidationFailed) problem.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ProblemCategory::ValidationFailed, message)
    }

    /// Creates a [`NotFound`](ProblemCategory::NotFound) problem.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ProblemCategory::NotFound, message)
    }

    /// Sets the property path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Adds (or replaces) an extension entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Looks up an extension by key.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// The rule tag recorded under the `rule` extension, if any.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        self.extension(rules::RULE).and_then(Value::as_str)
    }

    /// Re-roots the property under `prefix`: `x` becomes `prefix.x`, and a
    /// problem without a property takes `prefix` itself.
    pub(crate) fn chain_property(&mut self, prefix: &str) {
        self.property = Some(match self.property.take() {
            Some(property) => format!("{prefix}.{property}"),
            None => prefix.to_owned(),
        });
    }

    /// Removes a leading `prefix.` segment from the property. Properties that
    /// merely share a leading substring with `prefix` are left untouched.
    pub(crate) fn strip_property_prefix(&mut self, prefix: &str) {
        if let Some(stripped) = self
            .property
            .as_deref()
            .and_then(|property| strip_prefix_segment(property, prefix))
        {
            self.property = Some(stripped.to_owned());
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.property, self.rule()) {
            (Some(property), Some(rule)) => write!(f, "[{property}] {rule}: {}", self.message),
            (Some(property), None) => write!(f, "[{property}] {}", self.message),
            (None, Some(rule)) => write!(f, "{rule}: {}", self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

/// Returns `property` without its leading `{prefix}.` segment, or `None` when
/// the property does not start with exactly that segment.
pub(crate) fn strip_prefix_segment<'a>(property: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    property.strip_prefix(prefix)?.strip_prefix('.')
}

// ============================================================================
// PROBLEMS
// ============================================================================

/// Insertion-ordered collection of [`Problem`]s.
///
/// No deduplication is performed; the first check to fail is reported first.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed with {} problem(s)", .0.len())]
pub struct Problems(Vec<Problem>);

impl Problems {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Single [`InvalidParameter`](ProblemCategory::InvalidParameter) problem.
    pub fn invalid_parameter(message: impl Into<String>, property: impl Into<String>) -> Self {
        Problem::invalid_parameter(message, property).into()
    }

    /// Single [`ValidationFailed`](ProblemCategory::ValidationFailed) problem.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Problem::validation_failed(message).into()
    }

    /// Single [`NotFound`](ProblemCategory::NotFound) problem.
    pub fn not_found(message: impl Into<String>) -> Self {
        Problem::not_found(message).into()
    }

    /// Appends a problem.
    pub fn push(&mut self, problem: Problem) {
        self.0.push(problem);
    }

    /// Appends a problem, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, problem: Problem) -> Self {
        self.push(problem);
        self
    }

    /// Adds an extension to every problem in the collection.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extension(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        for problem in &mut self.0 {
            problem.extensions.insert(key.to_owned(), value.clone());
        }
        self
    }

    /// Appends every problem of `other`, preserving order.
    pub fn merge(&mut self, other: Problems) {
        self.0.extend(other.0);
    }

    /// Number of problems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection holds no problems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates problems in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.0.iter()
    }

    /// The problems as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Problem] {
        &self.0
    }

    /// Problems reported for exactly `property`.
    pub fn for_property<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a Problem> {
        self.0
            .iter()
            .filter(move |problem| problem.property.as_deref() == Some(property))
    }

    /// Re-roots every property under `prefix` (`x` becomes `prefix.x`).
    #[must_use = "returns the re-rooted collection"]
    pub fn chained(mut self, prefix: &str) -> Self {
        for problem in &mut self.0 {
            problem.chain_property(prefix);
        }
        self
    }

    /// Replaces every property with `property`.
    #[must_use = "returns the renamed collection"]
    pub fn renamed(mut self, property: &str) -> Self {
        for problem in &mut self.0 {
            problem.property = Some(property.to_owned());
        }
        self
    }

    /// Strips a leading `prefix.` segment from every matching property.
    #[must_use = "returns the stripped collection"]
    pub fn without_prefix(mut self, prefix: &str) -> Self {
        for problem in &mut self.0 {
            problem.strip_property_prefix(prefix);
        }
        self
    }

    /// Consumes the collection, yielding the problems.
    #[must_use]
    pub fn into_vec(self) -> Vec<Problem> {
        self.0
    }
}

impl From<Problem> for Problems {
    fn from(problem: Problem) -> Self {
        Self(vec![problem])
    }
}

impl From<Vec<Problem>> for Problems {
    fn from(problems: Vec<Problem>) -> Self {
        Self(problems)
    }
}

impl FromIterator<Problem> for Problems {
    fn from_iter<I: IntoIterator<Item = Problem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Problem> for Problems {
    fn extend<I: IntoIterator<Item = Problem>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Problems {
    type Item = Problem;
    type IntoIter = std::vec::IntoIter<Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Problems {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// INTO PROBLEMS
// ============================================================================

/// Anything that can report an optional, non-empty [`Problems`] collection.
///
/// This is the handshake used by nested validation: a nested callback may
/// return a rule set, a problem collection, a single problem, an optional
/// collection (`None` meaning valid) or a `Result<(), Problems>`.
pub trait IntoProblems {
    /// Converts into `Some(problems)` when there is at least one problem.
    fn into_problems(self) -> Option<Problems>;
}

impl IntoProblems for Problems {
    fn into_problems(self) -> Option<Problems> {
        (!self.is_empty()).then_some(self)
    }
}

impl IntoProblems for Problem {
    fn into_problems(self) -> Option<Problems> {
        Some(self.into())
    }
}

impl IntoProblems for Option<Problems> {
    fn into_problems(self) -> Option<Problems> {
        self.and_then(IntoProblems::into_problems)
    }
}

impl IntoProblems for Result<(), Problems> {
    fn into_problems(self) -> Option<Problems> {
        self.err().and_then(IntoProblems::into_problems)
    }
}

// ============================================================================
// TESTS
// ============================================================================
