//! The self-validation contract consumed by nested validation.

use super::{IntoProblems, Problems};

/// Trait for types that can check themselves for problems.
///
/// Nested validation ([`RuleSet::validate`](crate::RuleSet::validate),
/// [`RuleSet::all_validable`](crate::RuleSet::all_validable)) consumes this
/// polymorphically without knowing concrete types.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// struct Address { street: String }
///
/// impl Validable for Address {
///     fn problems(&self) -> Option<Problems> {
///         set().not_empty(&self.street, "street").into_problems()
///     }
/// }
/// ```
pub trait Validable {
    /// Returns `Some` with at least one problem when `self` is invalid.
    fn problems(&self) -> Option<Problems>;

    /// Returns true when [`problems`](Validable::problems) reports anything.
    fn has_problems(&self) -> bool {
        self.problems().is_some()
    }
}

impl<T: Validable + ?Sized> Validable for &T {
    fn problems(&self) -> Option<Problems> {
        (**self).problems()
    }
}

impl<T: Validable + ?Sized> Validable for Box<T> {
    fn problems(&self) -> Option<Problems> {
        (**self).problems()
    }
}

/// An absent value has nothing to report.
impl<T: Validable> Validable for Option<T> {
    fn problems(&self) -> Option<Problems> {
        self.as_ref().and_then(Validable::problems)
    }
}

// ============================================================================
// VALIDATE FN
// ============================================================================

/// Adapts an ad hoc check closure into a [`Validable`].
///
/// The closure may return anything implementing [`IntoProblems`], which
/// makes it usable wherever a self-validating value is expected.
///
/// ```rust,ignore
/// let check = ValidateFn::new(|| set().min(&quantity, 1, "quantity"));
/// assert!(check.has_problems());
/// ```
pub struct ValidateFn<F>(F);

impl<F, R> ValidateFn<F>
where
    F: Fn() -> R,
    R: IntoProblems,
{
    /// Wraps a check closure.
    pub fn new(check: F) -> Self {
        Self(check)
    }
}

impl<F, R> Validable for ValidateFn<F>
where
    F: Fn() -> R,
    R: IntoProblems,
{
    fn problems(&self) -> Option<Problems> {
        (self.0)().into_problems()
    }
}

impl<F> std::fmt::Debug for ValidateFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidateFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Problem;

    struct Named(&'static str);

    impl Validable for Named {
        fn problems(&self) -> Option<Problems> {
            self.0
                .is_empty()
                .then(|| Problems::invalid_parameter("required", "name"))
        }
    }

    #[test]
    fn test_default_has_problems() {
        assert!(Named("").has_problems());
        assert!(!Named("x").has_problems());
        assert!((&Named("")).has_problems());
        assert!(Box::new(Named("")).has_problems());
        assert!(Some(Named("")).has_problems());
        assert!(!None::<Named>.has_problems());
    }

    #[test]
    fn test_validate_fn() {
        let failing = ValidateFn::new(|| Problem::validation_failed("nope"));
        let passing = ValidateFn::new(|| Ok::<(), Problems>(()));
        assert!(failing.has_problems());
        assert!(!passing.has_problems());
    }
}
