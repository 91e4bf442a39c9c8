//! Operand traits: how rule-set operators see the values they check
//!
//! Rule-set operators accept plain values, borrowed values and optional
//! values uniformly. Each trait here answers one question for a value kind:
//!
//! - [`Operand`]: is a comparable value present, and which one?
//! - [`TextOperand`]: is a string present, and which one?
//! - [`Collection`]: is a sequence present, and what are its items?
//! - [`Emptiable`]: is the value absent, and is it the kind's "zero value"?
//!
//! `Option<T>` is absent when `None`; every other kind is always present.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use uuid::Uuid;

// ============================================================================
// OPERAND
// ============================================================================

/// A value that rule-set operators compare with equality or ordering.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::foundation::Operand;
///
/// assert_eq!(5_i32.present(), Some(&5));
/// assert_eq!(Some(5_i32).present(), Some(&5));
/// assert_eq!(None::<i32>.present(), None);
/// ```
pub trait Operand {
    /// The underlying compared value.
    type Value: ?Sized;

    /// Returns the value, or `None` when it is absent.
    fn present(&self) -> Option<&Self::Value>;
}

macro_rules! self_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                type Value = $ty;

                #[inline]
                fn present(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )*
    };
}

self_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    NaiveDate, NaiveDateTime, NaiveTime, Uuid,
);

#[cfg(feature = "decimal")]
self_operand!(rust_decimal::Decimal);

impl Operand for str {
    type Value = str;

    #[inline]
    fn present(&self) -> Option<&str> {
        Some(self)
    }
}

impl<Tz: TimeZone> Operand for DateTime<Tz> {
    type Value = Self;

    #[inline]
    fn present(&self) -> Option<&Self> {
        Some(self)
    }
}

impl<T: Operand> Operand for Option<T> {
    type Value = T::Value;

    #[inline]
    fn present(&self) -> Option<&T::Value> {
        self.as_ref().and_then(Operand::present)
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    type Value = T::Value;

    #[inline]
    fn present(&self) -> Option<&T::Value> {
        (**self).present()
    }
}

impl<T: Operand + ?Sized> Operand for Box<T> {
    type Value = T::Value;

    #[inline]
    fn present(&self) -> Option<&T::Value> {
        (**self).present()
    }
}

// ============================================================================
// TEXT OPERAND
// ============================================================================

/// A value checked by the string rules (length, pattern, shape).
pub trait TextOperand {
    /// Returns the text, or `None` when it is absent.
    fn text(&self) -> Option<&str>;
}

impl TextOperand for str {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextOperand for String {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextOperand for Cow<'_, str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextOperand> TextOperand for Option<T> {
    #[inline]
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(TextOperand::text)
    }
}

impl<T: TextOperand + ?Sized> TextOperand for &T {
    #[inline]
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: TextOperand + ?Sized> TextOperand for Box<T> {
    #[inline]
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

// ============================================================================
// COLLECTION
// ============================================================================

/// An indexable sequence walked by collection nesting.
pub trait Collection {
    /// Element type.
    type Item;

    /// Returns the items in index order, or `None` when the collection is
    /// absent.
    fn items(&self) -> Option<impl Iterator<Item = &Self::Item>>;
}

impl<T> Collection for [T] {
    type Item = T;

    fn items(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn items(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn items(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn items(&self) -> Option<impl Iterator<Item = &T>> {
        Some(self.iter())
    }
}

impl<C: Collection> Collection for Option<C> {
    type Item = C::Item;

    fn items(&self) -> Option<impl Iterator<Item = &C::Item>> {
        self.as_ref().and_then(Collection::items)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn items(&self) -> Option<impl Iterator<Item = &C::Item>> {
        (**self).items()
    }
}

// ============================================================================
// EMPTIABLE
// ============================================================================

/// "Zero value" semantics used by the emptiness rules.
///
/// A value is empty when it is its kind's zero: numeric zero, the nil UUID,
/// the minimum representable date, an empty or whitespace-only string, a
/// zero-length collection. An optional value is empty when unset or when
/// set to an empty value.
pub trait Emptiable {
    /// Returns true when the value is absent or its kind's zero value.
    fn is_empty_value(&self) -> bool;

    /// Returns true when the value is absent (`None`).
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! numeric_emptiable {
    ($zero:literal => $($ty:ty),* $(,)?) => {
        $(
            impl Emptiable for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

numeric_emptiable!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_emptiable!(0.0 => f32, f64);

#[cfg(feature = "decimal")]
impl Emptiable for rust_decimal::Decimal {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_zero()
    }
}

impl Emptiable for char {
    #[inline]
    fn is_empty_value(&self) -> bool {
        *self == '\0'
    }
}

impl Emptiable for Uuid {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_nil()
    }
}

impl Emptiable for NaiveDate {
    #[inline]
    fn is_empty_value(&self) -> bool {
        *self == Self::MIN
    }
}

impl Emptiable for NaiveDateTime {
    #[inline]
    fn is_empty_value(&self) -> bool {
        *self == Self::MIN
    }
}

impl<Tz: TimeZone> Emptiable for DateTime<Tz> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.naive_utc() == NaiveDateTime::MIN
    }
}

impl Emptiable for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiable for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl Emptiable for Cow<'_, str> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_empty_value()
    }
}

macro_rules! collection_emptiable {
    ($($ty:ident < $($param:ident),+ >),* $(,)?) => {
        $(
            impl<$($param),+> Emptiable for $ty<$($param),+> {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

collection_emptiable!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>);

impl<T, S> Emptiable for HashSet<T, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiable for HashMap<K, V, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiable for indexmap::IndexMap<K, V, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiable for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiable for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T: Emptiable> Emptiable for Option<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiable::is_empty_value)
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Emptiable + ?Sized> Emptiable for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Emptiable + ?Sized> Emptiable for Box<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

// ============================================================================
// TESTS
// ============================================================================
