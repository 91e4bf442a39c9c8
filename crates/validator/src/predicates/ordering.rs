//! Inclusive bounds and two-operand ordering.
//!
//! Ordering of optional operands follows `Option`'s own order: an absent
//! value sorts before any present value, and two absent values compare
//! equal. So `less_than(None, Some(&1))` holds while `less_than(Some(&1),
//! None)` and `less_than(None, None)` do not.

/// Present and `>= min`.
#[inline]
pub fn min<T: PartialOrd + ?Sized>(value: Option<&T>, min: &T) -> bool {
    value.is_some_and(|value| value >= min)
}

/// Present and `<= max`.
#[inline]
pub fn max<T: PartialOrd + ?Sized>(value: Option<&T>, max: &T) -> bool {
    value.is_some_and(|value| value <= max)
}

/// Present and within `min..=max`.
#[inline]
pub fn min_max<T: PartialOrd + ?Sized>(value: Option<&T>, min: &T, max: &T) -> bool {
    value.is_some_and(|value| value >= min && value <= max)
}

/// Absent, or `>= min`.
#[inline]
pub fn null_or_min<T: PartialOrd + ?Sized>(value: Option<&T>, min: &T) -> bool {
    value.is_none_or(|value| value >= min)
}

/// Absent, or `<= max`.
#[inline]
pub fn null_or_max<T: PartialOrd + ?Sized>(value: Option<&T>, max: &T) -> bool {
    value.is_none_or(|value| value <= max)
}

/// Absent, or within `min..=max`.
#[inline]
pub fn null_or_min_max<T: PartialOrd + ?Sized>(value: Option<&T>, min: &T, max: &T) -> bool {
    value.is_none_or(|value| value >= min && value <= max)
}

#[inline]
pub fn less_than<T: PartialOrd + ?Sized>(first: Option<&T>, second: Option<&T>) -> bool {
    first < second
}

#[inline]
pub fn less_than_or_equal<T: PartialOrd + ?Sized>(first: Option<&T>, second: Option<&T>) -> bool {
    first <= second
}

#[inline]
pub fn greater_than<T: PartialOrd + ?Sized>(first: Option<&T>, second: Option<&T>) -> bool {
    first > second
}

#[inline]
pub fn greater_than_or_equal<T: PartialOrd + ?Sized>(first: Option<&T>, second: Option<&T>) -> bool {
    first >= second
}
