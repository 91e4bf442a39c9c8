//! Entity lookup results
//!
//! [`Entry`] carries the outcome of loading a record: the entity, or the
//! problems explaining why it is unavailable. A missing entity without
//! explicit problems reports a generic `NotFound` problem built from the
//! entity's display name.

use serde::Serialize;

use crate::display::{self, Subject};
use crate::foundation::{Problem, Problems};
use crate::resources;
use crate::rule_set::{display_value, to_json};
use crate::rules;

/// A looked-up entity, or why it could not be produced.
///
/// # Examples
///
/// ```rust,ignore
/// fn find_order(id: u64) -> Entry<Order> {
///     match repository.get(id) {
///         Some(order) => Entry::found(order),
///         None => Entry::not_found_by("code", "order_code", id),
///     }
/// }
///
/// let order = find_order(7).into_result()?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    entity: Option<T>,
    problems: Option<Problems>,
}

impl<T: 'static> Entry<T> {
    /// An entity that was found.
    pub fn found(entity: T) -> Self {
        Self {
            entity: Some(entity),
            problems: None,
        }
    }

    /// A missing entity with no further detail.
    pub fn missing() -> Self {
        Self {
            entity: None,
            problems: None,
        }
    }

    /// Wraps the result of a lookup by id: `None` becomes a not-found entry
    /// recording `id`.
    pub fn with_id<I: Serialize>(entity: Option<T>, id: I) -> Self {
        match entity {
            Some(entity) => Self::found(entity),
            None => Self::not_found_by_id(id),
        }
    }

    /// A missing entity searched by `by_name`; the search value is recorded
    /// under the `property_name` extension.
    ///
    /// The message reads "The '{entity}' record with {by_name} '{value}' was
    /// not found".
    pub fn not_found_by<V: Serialize>(by_name: &str, property_name: &str, value: V) -> Self {
        let value = to_json(&value);
        let label = entity_label::<T>();
        let templates = resources::current();
        let message = resources::format(
            &templates.entity_not_found_by,
            &[&label, &by_name, &display_value(&value)],
        );
        Problem::not_found(message)
            .with_extension(rules::ENTITY, entity_name::<T>())
            .with_extension(property_name, value)
            .into()
    }

    /// A missing entity searched by id; the id is recorded under `id`.
    pub fn not_found_by_id<I: Serialize>(id: I) -> Self {
        let id = to_json(&id);
        let label = entity_label::<T>();
        let templates = resources::current();
        let message = resources::format(&templates.entity_not_found_by_id, &[&label, &display_value(&id)]);
        Problem::not_found(message)
            .with_extension(rules::ENTITY, entity_name::<T>())
            .with_extension(rules::ID, id)
            .into()
    }

    /// The entity, when found.
    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    /// Returns true when the entity is available.
    pub fn is_found(&self) -> bool {
        self.entity.is_some()
    }

    /// Yields the entity, or the problems explaining its absence.
    pub fn into_result(self) -> Result<T, Problems> {
        match self.entity {
            Some(entity) => Ok(entity),
            None => Err(self.problems.unwrap_or_else(not_found::<T>)),
        }
    }
}

impl<T> From<Problems> for Entry<T> {
    fn from(problems: Problems) -> Self {
        Self {
            entity: None,
            problems: Some(problems),
        }
    }
}

impl<T> From<Problem> for Entry<T> {
    fn from(problem: Problem) -> Self {
        Problems::from(problem).into()
    }
}

fn entity_label<T: 'static>() -> std::sync::Arc<str> {
    display::resolve_type(Some(&Subject::of::<T>()))
}

fn entity_name<T: 'static>() -> &'static str {
    Subject::of::<T>().simple_name()
}

fn not_found<T: 'static>() -> Problems {
    let label = entity_label::<T>();
    let templates = resources::current();
    tracing::debug!(entity = entity_name::<T>(), "entity not found");
    Problems::not_found(resources::format(&templates.entity_not_found, &[&label]))
        .with_extension(rules::ENTITY, entity_name::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ProblemCategory;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Invoice;

    #[test]
    fn test_found() {
        let entry = Entry::found(Invoice);
        assert!(entry.is_found());
        assert_eq!(entry.into_result(), Ok(Invoice));
    }

    #[test]
    fn test_missing_reports_generic_not_found() {
        let problems = Entry::<Invoice>::missing().into_result().unwrap_err();
        let problem = &problems.as_slice()[0];
        assert_eq!(problem.category, ProblemCategory::NotFound);
        assert_eq!(problem.message, "The 'Invoice' record was not found");
        assert_eq!(problem.extension(rules::ENTITY), Some(&json!("Invoice")));
    }

    #[test]
    fn test_not_found_by() {
        let problems = Entry::<Invoice>::not_found_by("number", "invoice_number", "INV-9")
            .into_result()
            .unwrap_err();
        let problem = &problems.as_slice()[0];
        assert_eq!(problem.message, "The 'Invoice' record with number 'INV-9' was not found");
        assert_eq!(problem.extension("invoice_number"), Some(&json!("INV-9")));
    }

    #[test]
    fn test_with_id() {
        assert!(Entry::with_id(Some(Invoice), 1).is_found());

        let problems = Entry::<Invoice>::with_id(None, 42).into_result().unwrap_err();
        let problem = &problems.as_slice()[0];
        assert_eq!(problem.message, "The 'Invoice' record with id '42' was not found");
        assert_eq!(problem.extension(rules::ID), Some(&json!(42)));
    }

    #[test]
    fn test_explicit_problems_win() {
        let entry: Entry<Invoice> = Problem::validation_failed("archived").into();
        let problems = entry.into_result().unwrap_err();
        assert_eq!(problems.as_slice()[0].message, "archived");
    }
}
