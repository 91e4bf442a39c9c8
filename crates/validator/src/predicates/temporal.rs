//! Past, future, today and bounded date checks
//!
//! "Now" always comes from the system clock in UTC, converted into the
//! value's own representation: naive values are read as UTC, zoned values
//! keep their offset. Absent values always fail.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// A point in time that can be compared with the current instant.
pub trait Temporal: PartialOrd {
    /// The current instant, in the same representation (and offset) as `self`.
    fn now_like(&self) -> Self
    where
        Self: Sized;

    /// Calendar date of the value, in its own offset.
    fn date(&self) -> NaiveDate;
}

impl Temporal for NaiveDate {
    fn now_like(&self) -> Self {
        Utc::now().date_naive()
    }

    fn date(&self) -> NaiveDate {
        *self
    }
}

impl Temporal for NaiveDateTime {
    fn now_like(&self) -> Self {
        Utc::now().naive_utc()
    }

    fn date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }
}

impl Temporal for DateTime<Utc> {
    fn now_like(&self) -> Self {
        Utc::now()
    }

    fn date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl Temporal for DateTime<FixedOffset> {
    fn now_like(&self) -> Self {
        Utc::now().with_timezone(self.offset())
    }

    fn date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl Temporal for DateTime<Local> {
    fn now_like(&self) -> Self {
        Utc::now().with_timezone(&Local)
    }

    fn date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Strictly before the current instant.
pub fn in_past<T: Temporal>(value: Option<&T>) -> bool {
    value.is_some_and(|value| *value < value.now_like())
}

/// Strictly after the current instant.
pub fn in_future<T: Temporal>(value: Option<&T>) -> bool {
    value.is_some_and(|value| *value > value.now_like())
}

/// On the current calendar date.
pub fn today<T: Temporal>(value: Option<&T>) -> bool {
    value.is_some_and(|value| value.date() == value.now_like().date())
}

/// Strictly after `bound`.
pub fn after<T: Temporal>(value: Option<&T>, bound: &T) -> bool {
    value.is_some_and(|value| value > bound)
}

/// Strictly before `bound`.
pub fn before<T: Temporal>(value: Option<&T>, bound: &T) -> bool {
    value.is_some_and(|value| value < bound)
}

/// Within `start..=end`.
pub fn between<T: Temporal>(value: Option<&T>, start: &T, end: &T) -> bool {
    value.is_some_and(|value| value >= start && value <= end)
}
