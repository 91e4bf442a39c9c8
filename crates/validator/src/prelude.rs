//! Prelude module for convenient imports.
//!
//! Provides a single `use verity_validator::prelude::*;` import that brings
//! in the rule set, the problem types and the traits needed to validate
//! nested models.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let result = set().not_empty(&name, "name").into_result();
//! ```

// ============================================================================
// RULE SET
// ============================================================================

pub use crate::rule_set::{RuleSet, set, set_for};
pub use crate::{check, check_both, display_names};

// ============================================================================
// FOUNDATION: problems and contracts
// ============================================================================

pub use crate::foundation::{
    Collection, Emptiable, IntoProblems, Operand, Problem, ProblemCategory, Problems,
    TextOperand, Validable, ValidateFn,
};

// ============================================================================
// SUPPORT
// ============================================================================

pub use crate::display::DisplayNamed;
pub use crate::entry::Entry;
pub use crate::predicates::StringComparison;
