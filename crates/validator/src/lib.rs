//! # verity-validator
//!
//! Fluent, fail-soft validation for application and domain models.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! fn validate(order: &Order) -> Result<(), Problems> {
//!     set()
//!         .not_empty(&order.customer, "customer")
//!         .min(&order.quantity, 1, "quantity")
//!         .email(&order.contact_email, "contact_email")
//!         .all_nested(&order.lines, |line| line.problems(), "lines")
//!         .into_result()
//! }
//! ```
//!
//! A [`RuleSet`] is threaded through a chain of operators. Every failed
//! operator appends exactly one [`Problem`] and checks never short-circuit,
//! so callers receive all violations at once, in the order they were
//! checked.
//!
//! ## Building Blocks
//!
//! - [`rule_set`]: the accumulator and its operators (equality, ranges,
//!   patterns, shapes, dates, custom predicates, conditionals, nesting)
//! - [`foundation`]: [`Problem`], [`Problems`], the [`Validable`] contract and
//!   the operand traits that let one operator accept plain and optional
//!   values alike
//! - [`predicates`]: the pure checks behind the operators
//! - [`display`]: human-readable labels for types and properties
//! - [`resources`]: swappable message templates
//! - [`rules`]: the rule-tag vocabulary recorded on every problem
//! - [`entry`]: entity lookup results with not-found problems
//!
//! The [`check!`] and [`check_both!`] macros name properties after the
//! checked expressions; [`display_names!`] declares labels.

mod macros;

pub mod display;
pub mod entry;
pub mod foundation;
pub mod predicates;
pub mod prelude;
pub mod resources;
pub mod rule_set;
pub mod rules;

pub use display::DisplayNamed;
pub use entry::Entry;
pub use foundation::{IntoProblems, Problem, ProblemCategory, Problems, Validable, ValidateFn};
pub use predicates::StringComparison;
pub use rule_set::{RuleSet, set, set_for};
