// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Egyptian and Armenian calendars.
//!
//! Both use twelve 30-day months followed by five epagomenal days, giving a
//! fixed 365-day year with no leap rule. The epagomenae are month 13. The
//! Armenian calendar is the Egyptian one with a later epoch.

use std::fmt;

use crate::calendar::{impl_day_arithmetic, Calendar};

/// A date in the Egyptian calendar (era of Nabonassar).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Egyptian {
    year: i64,
    month: i64,
    day: i64,
}

impl Egyptian {
    /// RD of 1 Thoth, year 1: February 26, 747 BCE (Julian).
    pub const EPOCH: i64 = -272_787;

    /// Days in a year.
    pub const YEAR_LENGTH: i64 = 365;

    /// Days in each of the twelve regular months.
    pub const MONTH_LENGTH: i64 = 30;

    #[inline]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i64 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// Days since the epoch of 1 Thoth, year 1, widened so that any field
    /// values are accepted.
    #[inline]
    const fn day_count(&self) -> i128 {
        let (year, month, day) = (self.year as i128, self.month as i128, self.day as i128);
        Self::YEAR_LENGTH as i128 * (year - 1) + Self::MONTH_LENGTH as i128 * (month - 1) + day - 1
    }

    fn from_day_count(days: i128) -> Self {
        let (year_length, month_length) = (Self::YEAR_LENGTH as i128, Self::MONTH_LENGTH as i128);
        let year = days.div_euclid(year_length) + 1;
        let month = days.rem_euclid(year_length).div_euclid(month_length) + 1;
        let day = days - year_length * (year - 1) - month_length * (month - 1) + 1;
        Self::new(year as i64, month as i64, day as i64)
    }
}

impl Calendar for Egyptian {
    const LABEL: &'static str = "Egyptian";

    /// Wraps around outside the `i64` range, see [`Calendar::is_valid`].
    #[inline]
    fn to_rata_die(&self) -> i64 {
        (i128::from(Self::EPOCH) + self.day_count()) as i64
    }

    #[inline]
    fn from_rata_die(rd: i64) -> Self {
        Self::from_day_count(i128::from(rd) - i128::from(Self::EPOCH))
    }
}

/// A date in the Armenian calendar.
///
/// Same structure as [`Egyptian`], counted from July 11, 552 CE (Julian).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armenian {
    year: i64,
    month: i64,
    day: i64,
}

impl Armenian {
    /// RD of 1 Nawasardi, year 1.
    pub const EPOCH: i64 = 201_443;

    #[inline]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i64 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i64 {
        self.day
    }

    #[inline]
    const fn as_egyptian(&self) -> Egyptian {
        Egyptian::new(self.year, self.month, self.day)
    }
}

impl Calendar for Armenian {
    const LABEL: &'static str = "Armenian";

    #[inline]
    fn to_rata_die(&self) -> i64 {
        (i128::from(Self::EPOCH) + self.as_egyptian().day_count()) as i64
    }

    #[inline]
    fn from_rata_die(rd: i64) -> Self {
        let e = Egyptian::from_day_count(i128::from(rd) - i128::from(Self::EPOCH));
        Self::new(e.year, e.month, e.day)
    }
}

macro_rules! impl_ymd_display {
    ($($calendar:ty),+) => {
        $(
            impl fmt::Display for $calendar {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(
                        f,
                        "{} {}-{:02}-{:02}",
                        Self::LABEL,
                        self.year,
                        self.month,
                        self.day
                    )
                }
            }
        )+
    };
}

impl_ymd_display!(Egyptian, Armenian);
impl_day_arithmetic!(Egyptian, Armenian);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::RataDie;
    use proptest::prelude::*;

    const SAMPLES: [(i64, (i64, i64, i64), (i64, i64, i64)); 6] = [
        (-214_193, (161, 7, 15), (-1138, 4, 10)),
        (25_469, (818, 2, 22), (-482, 11, 22)),
        (210_155, (1324, 2, 18), (24, 11, 18)),
        (601_716, (2396, 11, 29), (1097, 8, 24)),
        (727_274, (2740, 11, 27), (1441, 8, 22)),
        (764_652, (2843, 4, 20), (1544, 1, 15)),
    ];

    #[test]
    fn egyptian_from_rata_die() {
        for (rd, (y, m, d), _) in SAMPLES {
            assert_eq!(Egyptian::from_rata_die(rd), Egyptian::new(y, m, d), "RD {rd}");
            assert_eq!(Egyptian::new(y, m, d).to_rata_die(), rd);
        }
    }

    #[test]
    fn armenian_from_rata_die() {
        for (rd, _, (y, m, d)) in SAMPLES {
            assert_eq!(Armenian::from_rata_die(rd), Armenian::new(y, m, d), "RD {rd}");
            assert_eq!(Armenian::new(y, m, d).to_rata_die(), rd);
        }
    }

    #[test]
    fn epochs_are_day_one() {
        assert_eq!(Egyptian::new(1, 1, 1).to_rata_die(), Egyptian::EPOCH);
        assert_eq!(Armenian::new(1, 1, 1).to_rata_die(), Armenian::EPOCH);
        assert_eq!(Egyptian::from_rata_die(Egyptian::EPOCH - 1), Egyptian::new(0, 13, 5));
    }

    #[test]
    fn epagomenal_days_are_month_thirteen() {
        let last = Egyptian::new(2000, 13, 5);
        assert!(last.is_valid());
        assert_eq!(last + 1, Egyptian::new(2001, 1, 1));
        assert!(!Egyptian::new(2000, 13, 6).is_valid());
        assert!(!Egyptian::new(2000, 1, 31).is_valid());
    }

    #[test]
    fn armenian_is_shifted_egyptian() {
        let rd = 500_000;
        let e = Egyptian::from_rata_die(rd);
        let a = Armenian::from_rata_die(rd + Armenian::EPOCH - Egyptian::EPOCH);
        assert_eq!((a.year(), a.month(), a.day()), (e.year(), e.month(), e.day()));
    }

    #[test]
    fn difference_and_display() {
        let a = Egyptian::new(2843, 4, 20);
        let b = Egyptian::new(2842, 4, 20);
        assert_eq!(a - b, 365);
        assert_eq!(a.to_string(), "Egyptian 2843-04-20");
        assert_eq!(Armenian::new(-1138, 4, 10).to_string(), "Armenian -1138-04-10");
        assert_eq!(RataDie::from(a).value(), 764_652);
    }

    #[test]
    fn extreme_fields_do_not_overflow() {
        assert!(!Egyptian::new(i64::MAX, 1, 1).is_valid());
        assert!(!Armenian::new(i64::MIN, 13, 5).is_valid());
        for rd in [i64::MAX, i64::MIN] {
            assert_eq!(Egyptian::from_rata_die(rd).to_rata_die(), rd);
            assert_eq!(Armenian::from_rata_die(rd).to_rata_die(), rd);
        }
    }

    proptest! {
        #[test]
        fn round_trip_through_pivot(rd in -2_000_000i64..=2_000_000) {
            let e = Egyptian::from_rata_die(rd);
            prop_assert_eq!(e.to_rata_die(), rd);
            prop_assert!((1..=13).contains(&e.month()));
            prop_assert!(e.is_valid());
            prop_assert_eq!(Armenian::from_rata_die(rd).to_rata_die(), rd);
        }
    }
}
