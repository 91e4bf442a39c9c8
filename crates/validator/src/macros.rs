//! Macros that remove the property-name boilerplate from validation chains.
//!
//! # Available Macros
//!
//! - [`check!`]: apply single-value operators, naming each property after
//!   the checked expression
//! - [`check_both!`]: the same for two-operand operators
//! - [`display_names!`]: implement [`DisplayNamed`](crate::display::DisplayNamed)
//!   from a label table
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::{check, check_both, display_names, set_for};
//!
//! display_names! {
//!     Booking as "Reservation" {
//!         "guest" => "Guest name",
//!         "check_in" => "Check-in",
//!     }
//! }
//!
//! let rules = check!(set_for::<Booking>().with_property_prefix("booking") =>
//!     not_empty(booking.guest),
//!     max_length(booking.guest, 80),
//! );
//! let rules = check_both!(rules => less_than(booking.check_in, booking.check_out));
//! ```

// ============================================================================
// CHECK
// ============================================================================

/// Applies single-value operators to a rule set, passing each checked
/// expression by reference and its source text as the property name.
///
/// `check!(set => op(value, args...))` expands to
/// `set.op(&value, args..., "value")`. Several operators are applied in
/// order.
///
/// ```rust,ignore
/// let set = check!(set() =>
///     not_empty(order.name),
///     min(order.amount, 1),
///     matches_pattern(order.code, r"^[A-Z]{3}$"),
/// );
/// // problems are reported for "order.name", "order.amount", "order.code"
/// ```
#[macro_export]
macro_rules! check {
    (
        $set:expr =>
        $( $op:ident ( $value:expr $(, $arg:expr)* $(,)? ) ),+ $(,)?
    ) => {{
        let __set = $set;
        $(
            let __set = __set.$op(&$value, $($arg,)* ::core::stringify!($value));
        )+
        __set
    }};
}

// ============================================================================
// CHECK BOTH
// ============================================================================

/// Applies two-operand operators to a rule set, naming both properties after
/// the checked expressions.
///
/// `check_both!(set => op(first, second, args...))` expands to
/// `set.op(&first, &second, args..., "first", "second")`.
///
/// ```rust,ignore
/// let set = check_both!(set() =>
///     less_than(range.start, range.end),
///     both_equal_str(form.password, form.confirmation, StringComparison::Ordinal),
/// );
/// ```
#[macro_export]
macro_rules! check_both {
    (
        $set:expr =>
        $( $op:ident ( $first:expr, $second:expr $(, $arg:expr)* $(,)? ) ),+ $(,)?
    ) => {{
        let __set = $set;
        $(
            let __set = __set.$op(
                &$first,
                &$second,
                $($arg,)*
                ::core::stringify!($first),
                ::core::stringify!($second),
            );
        )+
        __set
    }};
}

// ============================================================================
// DISPLAY NAMES
// ============================================================================

/// Implements [`DisplayNamed`](crate::display::DisplayNamed) from a table of
/// labels.
///
/// The type label is optional. Property keys are matched exactly against
/// the property names reported by operators, after prefix stripping.
///
/// ```rust,ignore
/// display_names! {
///     Address as "Delivery address" {
///         "street" => "Street",
///         "zip" => "Postal code",
///     }
/// }
///
/// display_names! {
///     Contact {
///         "email" => "E-mail",
///     }
/// }
/// ```
#[macro_export]
macro_rules! display_names {
    (@properties $($property:literal => $property_label:literal),*) => {
        fn property_display_name(property: &str) -> ::core::option::Option<&'static str> {
            match property {
                $( $property => ::core::option::Option::Some($property_label), )*
                _ => ::core::option::Option::None,
            }
        }
    };

    ($ty:ty as $label:literal { $($property:literal => $property_label:literal),* $(,)? }) => {
        impl $crate::display::DisplayNamed for $ty {
            fn type_display_name() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some($label)
            }

            $crate::display_names!(@properties $($property => $property_label),*);
        }
    };

    ($ty:ty { $($property:literal => $property_label:literal),* $(,)? }) => {
        impl $crate::display::DisplayNamed for $ty {
            $crate::display_names!(@properties $($property => $property_label),*);
        }
    };
}
