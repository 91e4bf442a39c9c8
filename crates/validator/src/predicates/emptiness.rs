//! Zero-value checks.

use crate::foundation::Emptiable;

/// Present and not the kind's zero value.
#[inline]
pub fn not_empty<V: Emptiable + ?Sized>(value: &V) -> bool {
    !value.is_empty_value()
}

/// Absent, or present and not empty.
#[inline]
pub fn null_or_not_empty<V: Emptiable + ?Sized>(value: &V) -> bool {
    value.is_absent() || !value.is_empty_value()
}

/// Both absent, or both present and not empty. Symmetric in its operands.
#[inline]
pub fn both_null_or_not_empty<A, B>(first: &A, second: &B) -> bool
where
    A: Emptiable + ?Sized,
    B: Emptiable + ?Sized,
{
    (first.is_absent() && second.is_absent())
        || (!first.is_empty_value() && !second.is_empty_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("x"));
        assert!(!not_empty(" "));
        assert!(!not_empty(&None::<String>));
        assert!(!not_empty(&Some(0_u32)));
        assert!(not_empty(&Some(1_u32)));
    }

    #[test]
    fn test_null_or_not_empty() {
        assert!(null_or_not_empty(&None::<&str>));
        assert!(null_or_not_empty(&Some("x")));
        assert!(!null_or_not_empty(&Some("  ")));
        assert!(!null_or_not_empty(""));
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some("a"), Some("b"), true)]
    #[case(Some("a"), None, false)]
    #[case(None, Some("b"), false)]
    #[case(Some(""), None, false)]
    #[case(Some(""), Some(""), false)]
    #[case(Some(" "), Some("b"), false)]
    fn test_both_null_or_not_empty(
        #[case] first: Option<&str>,
        #[case] second: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(both_null_or_not_empty(&first, &second), expected);
        assert_eq!(both_null_or_not_empty(&second, &first), expected);
    }
}
