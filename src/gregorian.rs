// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The proleptic Gregorian calendar.
//!
//! Years are astronomical: year 0 is 1 BCE, year −1 is 2 BCE. The calendar
//! is extended backwards indefinitely with the same leap rule.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::calendar::{impl_day_arithmetic, Calendar};

const DAYS_IN_400_YEARS: i128 = 146_097;
const DAYS_IN_100_YEARS: i128 = 36_524;
const DAYS_IN_4_YEARS: i128 = 1_461;
const DAYS_IN_YEAR: i128 = 365;

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gregorian {
    year: i64,
    month: i64,
    day: i64,
}

/// Whether `year` has a February 29.
///
/// Divisible by 4, except centuries not divisible by 400.
#[inline]
pub fn leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && !matches!(year.rem_euclid(400), 100 | 200 | 300)
}

impl Gregorian {
    /// RD of January 1, year 1.
    pub const EPOCH: i64 = 1;

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

    /// Whether this date's year is a leap year.
    #[inline]
    pub fn is_leap(&self) -> bool {
        leap_year(self.year)
    }

    /// RD of January 1 of `year`.
    #[inline]
    pub fn new_year(year: i64) -> i64 {
        Self::new(year, 1, 1).to_rata_die()
    }

    /// RD of December 31 of `year`.
    #[inline]
    pub fn year_end(year: i64) -> i64 {
        Self::new(year, 12, 31).to_rata_die()
    }

    /// Ordinal day within the year, January 1 being 1.
    #[inline]
    pub fn day_number(&self) -> i64 {
        self.to_rata_die() - Self::year_end(self.year - 1)
    }

    /// Days left in the year after this one.
    #[inline]
    pub fn days_remaining(&self) -> i64 {
        Self::year_end(self.year) - self.to_rata_die()
    }

    /// Gregorian year containing Rata Die day `rd`.
    pub fn year_from_rata_die(rd: i64) -> i64 {
        year_from_fixed(i128::from(rd))
    }

    /// Build from a `chrono::NaiveDate`.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::new(date.year() as i64, date.month() as i64, date.day() as i64)
    }

    /// Convert to a `chrono::NaiveDate`.
    ///
    /// Returns `None` for dates that are not valid or lie outside chrono's
    /// representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month as u32, self.day as u32)
    }
}

impl Calendar for Gregorian {
    const LABEL: &'static str = "Gregorian";

    /// Dates whose day count leaves the `i64` range wrap around, so they
    /// fail [`Calendar::is_valid`] instead of overflowing.
    fn to_rata_die(&self) -> i64 {
        fixed_from_ymd(self.year, self.month, self.day) as i64
    }

    fn from_rata_die(rd: i64) -> Self {
        let rd = i128::from(rd);
        let year = year_from_fixed(rd);
        let prior_days = rd - fixed_from_ymd(year, 1, 1);
        let correction = if rd < fixed_from_ymd(year, 3, 1) {
            0
        } else if leap_year(year) {
            1
        } else {
            2
        };
        let month = ((12 * (prior_days + correction) + 373).div_euclid(367)) as i64;
        let day = (1 + rd - fixed_from_ymd(year, month, 1)) as i64;
        Self::new(year, month, day)
    }
}

/// Day count of a year/month/day triple, widened so that any field values
/// are accepted.
fn fixed_from_ymd(year: i64, month: i64, day: i64) -> i128 {
    let prior_years = i128::from(year) - 1;
    let month = i128::from(month);
    let correction = if month <= 2 {
        0
    } else if leap_year(year) {
        -1
    } else {
        -2
    };
    i128::from(Gregorian::EPOCH) - 1
        + DAYS_IN_YEAR * prior_years
        + prior_years.div_euclid(4)
        - prior_years.div_euclid(100)
        + prior_years.div_euclid(400)
        + (367 * month - 362).div_euclid(12)
        + correction
        + i128::from(day)
}

fn year_from_fixed(rd: i128) -> i64 {
    let d0 = rd - i128::from(Gregorian::EPOCH);
    let n400 = d0.div_euclid(DAYS_IN_400_YEARS);
    let d1 = d0.rem_euclid(DAYS_IN_400_YEARS);
    let n100 = d1.div_euclid(DAYS_IN_100_YEARS);
    let d2 = d1.rem_euclid(DAYS_IN_100_YEARS);
    let n4 = d2.div_euclid(DAYS_IN_4_YEARS);
    let d3 = d2.rem_euclid(DAYS_IN_4_YEARS);
    let n1 = d3.div_euclid(DAYS_IN_YEAR);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // Dec 31 of a leap year closes the cycle without starting a new one.
    let year = if n100 == 4 || n1 == 4 { year } else { year + 1 };
    year as i64
}

impl fmt::Display for Gregorian {
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

impl From<NaiveDate> for Gregorian {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

impl_day_arithmetic!(Gregorian);
