//! Core validation types and traits
//!
//! This module contains the building blocks every rule set is made of:
//!
//! - **Problems**: [`Problem`], [`Problems`], [`ProblemCategory`], [`IntoProblems`]
//! - **Contracts**: [`Validable`], [`ValidateFn`]
//! - **Operands**: [`Operand`], [`TextOperand`], [`Collection`], [`Emptiable`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::foundation::{Problem, Problems};
//!
//! let mut problems = Problems::new();
//! problems.push(Problem::invalid_parameter("The 'Name' field must be informed", "name"));
//! assert_eq!(problems.len(), 1);
//! ```

pub mod operand;
pub mod problem;
pub mod validable;

pub use operand::{Collection, Emptiable, Operand, TextOperand};
pub use problem::{IntoProblems, Problem, ProblemCategory, Problems};
pub use validable::{Validable, ValidateFn};
