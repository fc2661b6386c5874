// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The calendar-agnostic date protocol.
//!
//! Every calendar converts to and from a single pivot: the **Rata Die** (RD),
//! a signed count of days where RD 1 is Monday, January 1 of year 1 in the
//! proleptic Gregorian calendar. A calendar only supplies the two
//! conversions; arithmetic, ordering, validity and cross-calendar conversion
//! are implemented once on the [`Calendar`] trait:
//!
//! ```text
//! Gregorian ─┐                  ┌─► Egyptian
//! Armenian  ─┼─► RD (i64) ──────┼─► JulianDay
//! Moment    ─┘                  └─► …
//! ```
//!
//! # Validity
//!
//! Calendar fields are never range-checked at construction; `Gregorian::new(2001, 13, 40)`
//! is a legal value. A date is *valid* when it survives the round trip through
//! the pivot unchanged, see [`Calendar::is_valid`].

use std::cmp::Ordering;
use std::fmt;

use crate::weekday::Weekday;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar trait
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar system that converts to and from the Rata Die pivot.
///
/// Implementors provide [`to_rata_die`](Self::to_rata_die) and
/// [`from_rata_die`](Self::from_rata_die). For every representable `rd`,
/// `Self::from_rata_die(rd).to_rata_die() == rd` must hold.
pub trait Calendar: Copy + fmt::Debug + PartialEq + Sized {
    /// Display label used by the `Display` implementations.
    const LABEL: &'static str;

    /// The Rata Die day this date falls on.
    fn to_rata_die(&self) -> i64;

    /// The date of this calendar that falls on Rata Die day `rd`.
    fn from_rata_die(rd: i64) -> Self;

    /// The pivot value as a [`RataDie`].
    #[inline]
    fn rata_die(&self) -> RataDie {
        RataDie::new(self.to_rata_die())
    }

    /// Build this calendar's date from a date of any other calendar.
    #[inline]
    fn from_date<D: Calendar>(date: &D) -> Self {
        Self::from_rata_die(date.to_rata_die())
    }

    /// Convert this date into another calendar, routing through the pivot.
    ///
    /// ```
    /// use ratadie::{Calendar, Egyptian, Gregorian};
    ///
    /// let egyptian: Egyptian = Gregorian::new(-586, 7, 24).to::<Egyptian>();
    /// assert_eq!(egyptian, Egyptian::new(161, 7, 15));
    /// ```
    #[inline]
    fn to<T: Calendar>(&self) -> T {
        T::from_rata_die(self.to_rata_die())
    }

    /// The date `n` days later (earlier for negative `n`).
    #[inline]
    fn add_days(&self, n: i64) -> Self {
        Self::from_rata_die(self.to_rata_die() + n)
    }

    /// The date `n` days earlier.
    #[inline]
    fn minus_days(&self, n: i64) -> Self {
        Self::from_rata_die(self.to_rata_die() - n)
    }

    /// Number of days from `other` to `self`, across calendars.
    #[inline]
    fn difference_in_days<D: Calendar>(&self, other: &D) -> i64 {
        self.to_rata_die() - other.to_rata_die()
    }

    /// Chronological ordering against a date of any calendar.
    ///
    /// Two dates are equal under this ordering when they fall on the same
    /// Rata Die day, even if their fields differ (a `Moment` at 06:00 and one
    /// at 18:00 of the same day compare equal).
    #[inline]
    fn compare<D: Calendar>(&self, other: &D) -> Ordering {
        self.to_rata_die().cmp(&other.to_rata_die())
    }

    /// Whether the date survives the round trip through the pivot.
    ///
    /// This is the only validity check in the crate: `Gregorian::new(1900, 2, 29)`
    /// maps to March 1 and back, so it is not valid.
    #[inline]
    fn is_valid(&self) -> bool {
        *self == Self::from_rata_die(self.to_rata_die())
    }

    /// Day of the week this date falls on.
    #[inline]
    fn day_of_week(&self) -> Weekday {
        crate::weekday::day_of_week(self.to_rata_die())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RataDie — the pivot itself
// ═══════════════════════════════════════════════════════════════════════════

/// A fixed day number: the identity calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RataDie(i64);

impl RataDie {
    /// Day zero of the count; RD 1 is Monday, January 1, 1 (proleptic
    /// Gregorian).
    pub const EPOCH: i64 = 0;

    #[inline]
    pub const fn new(rd: i64) -> Self {
        Self(rd)
    }

    /// The raw day count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Calendar for RataDie {
    const LABEL: &'static str = "RD";

    #[inline(always)]
    fn to_rata_die(&self) -> i64 {
        self.0
    }

    #[inline(always)]
    fn from_rata_die(rd: i64) -> Self {
        Self(rd)
    }
}

impl fmt::Display for RataDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::LABEL, self.0)
    }
}

impl From<i64> for RataDie {
    #[inline]
    fn from(rd: i64) -> Self {
        Self(rd)
    }
}

impl From<RataDie> for i64 {
    #[inline]
    fn from(rd: RataDie) -> Self {
        rd.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Day arithmetic operators
// ═══════════════════════════════════════════════════════════════════════════

/// `date + n`, `date - n` (both yield a date) and `date - date` (yields days).
macro_rules! impl_day_arithmetic {
    ($($calendar:ty),+ $(,)?) => {
        $(
            impl ::std::ops::Add<i64> for $calendar {
                type Output = Self;
                #[inline]
                fn add(self, days: i64) -> Self::Output {
                    $crate::Calendar::add_days(&self, days)
                }
            }

            impl ::std::ops::Sub<i64> for $calendar {
                type Output = Self;
                #[inline]
                fn sub(self, days: i64) -> Self::Output {
                    $crate::Calendar::minus_days(&self, days)
                }
            }

            impl ::std::ops::Sub for $calendar {
                type Output = i64;
                #[inline]
                fn sub(self, other: Self) -> Self::Output {
                    $crate::Calendar::difference_in_days(&self, &other)
                }
            }
        )+
    };
}

pub(crate) use impl_day_arithmetic;

impl_day_arithmetic!(RataDie);

// ═══════════════════════════════════════════════════════════════════════════
// Cross-calendar From/Into (generated by macro)
// ═══════════════════════════════════════════════════════════════════════════

/// Generate pairwise `From<A> for B` implementations routed through the pivot.
macro_rules! impl_date_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$first> for $rest {
                #[inline]
                fn from(date: $first) -> Self {
                    <$first as $crate::Calendar>::to::<$rest>(&date)
                }
            }

            impl From<$rest> for $first {
                #[inline]
                fn from(date: $rest) -> Self {
                    <$rest as $crate::Calendar>::to::<$first>(&date)
                }
            }
        )+

        impl_date_conversions!($($rest),+);
    };
}

impl_date_conversions!(
    RataDie,
    crate::JulianDay,
    crate::ModifiedJulianDay,
    crate::Egyptian,
    crate::Armenian,
    crate::Gregorian,
    crate::Moment,
);
