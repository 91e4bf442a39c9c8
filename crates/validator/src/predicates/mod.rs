//! Built-in predicates
//!
//! Pure, stateless boolean functions behind the rule-set operators. Each
//! takes the operand as `Option<&T>` (absent is `None`) and returns whether
//! the check passes. They are public so custom rules built with
//! [`RuleSet::must`](crate::RuleSet::must) can reuse them.
//!
//! - [`emptiness`]: zero-value checks
//! - [`equality`]: equality with [`StringComparison`] modes
//! - [`ordering`]: inclusive bounds and two-operand ordering
//! - [`text`]: length, pattern and character-class checks
//! - [`shape`]: e-mail and URL grammar
//! - [`temporal`]: past/future/today and date bounds

pub mod emptiness;
pub mod equality;
pub mod ordering;
pub mod shape;
pub mod temporal;
pub mod text;

pub use equality::StringComparison;
pub use temporal::Temporal;
