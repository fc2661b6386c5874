// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Days of the week and "k-day" arithmetic on bare Rata Die numbers.
//!
//! RD 0 is a Sunday, so the day of the week is simply `rd mod 7`. The
//! helpers below find the nearest occurrence of a weekday relative to a
//! given day:
//!
//! | Function | Result |
//! |----------|--------|
//! | [`on_or_before`] | latest `day` at or before `rd` |
//! | [`on_or_after`] | earliest `day` at or after `rd` |
//! | [`nearest`] | `day` closest to `rd` |
//! | [`before`] | latest `day` strictly before `rd` |
//! | [`after`] | earliest `day` strictly after `rd` |

use std::fmt;

use crate::math::modulo;

/// A day of the week, numbered from Sunday = 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All seven days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday for any integer, taken modulo 7.
    #[inline]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[modulo(index, 7) as usize]
    }

    /// Numeric value, `0..=6`.
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }

    #[inline]
    pub fn on_or_before(self, rd: i64) -> i64 {
        on_or_before(self, rd)
    }

    #[inline]
    pub fn on_or_after(self, rd: i64) -> i64 {
        on_or_after(self, rd)
    }

    #[inline]
    pub fn nearest(self, rd: i64) -> i64 {
        nearest(self, rd)
    }

    #[inline]
    pub fn before(self, rd: i64) -> i64 {
        before(self, rd)
    }

    #[inline]
    pub fn after(self, rd: i64) -> i64 {
        after(self, rd)
    }

    const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of the week of Rata Die day `rd`.
#[inline]
pub fn day_of_week(rd: i64) -> Weekday {
    Weekday::from_index(rd)
}

/// The `day` falling on or before `rd`.
#[inline]
pub fn on_or_before(day: Weekday, rd: i64) -> i64 {
    rd - day_of_week(rd - day.index()).index()
}

/// The `day` falling on or after `rd`.
#[inline]
pub fn on_or_after(day: Weekday, rd: i64) -> i64 {
    on_or_before(day, rd + 6)
}

/// The `day` nearest to `rd`.
#[inline]
pub fn nearest(day: Weekday, rd: i64) -> i64 {
    on_or_before(day, rd + 3)
}

/// The `day` strictly before `rd`.
#[inline]
pub fn before(day: Weekday, rd: i64) -> i64 {
    on_or_before(day, rd - 1)
}

/// The `day` strictly after `rd`.
#[inline]
pub fn after(day: Weekday, rd: i64) -> i64 {
    on_or_before(day, rd + 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Weekday::*;

    /// November 11, 2011.
    const FRIDAY_RD: i64 = 734_452;

    fn expect_offsets(f: fn(Weekday, i64) -> i64, offsets: [i64; 7]) {
        for (day, offset) in Weekday::ALL.into_iter().zip(offsets) {
            assert_eq!(f(day, FRIDAY_RD), FRIDAY_RD + offset, "{day}");
        }
    }

    #[test]
    fn day_of_week_of_reference_day() {
        assert_eq!(day_of_week(FRIDAY_RD), Friday);
        assert_eq!(day_of_week(0), Sunday);
        assert_eq!(day_of_week(1), Monday);
        assert_eq!(day_of_week(-1), Saturday);
        assert_eq!(day_of_week(-7), Sunday);
        assert_eq!(day_of_week(i64::MIN), day_of_week(i64::MIN.rem_euclid(7)));
    }

    #[test]
    fn on_or_before_each_day() {
        expect_offsets(on_or_before, [-5, -4, -3, -2, -1, 0, -6]);
        assert_eq!(on_or_before(Sunday, FRIDAY_RD), 734_447);
    }

    #[test]
    fn on_or_after_each_day() {
        expect_offsets(on_or_after, [2, 3, 4, 5, 6, 0, 1]);
    }

    #[test]
    fn nearest_each_day() {
        expect_offsets(nearest, [2, 3, -3, -2, -1, 0, 1]);
    }

    #[test]
    fn before_each_day() {
        expect_offsets(before, [-5, -4, -3, -2, -1, -7, -6]);
    }

    #[test]
    fn after_each_day() {
        expect_offsets(after, [2, 3, 4, 5, 6, 7, 1]);
        assert_eq!(after(Friday, FRIDAY_RD), 734_459);
    }

    #[test]
    fn method_forms_agree() {
        assert_eq!(Friday.after(FRIDAY_RD), after(Friday, FRIDAY_RD));
        assert_eq!(Sunday.nearest(FRIDAY_RD), nearest(Sunday, FRIDAY_RD));
        assert_eq!(Monday.on_or_after(FRIDAY_RD), on_or_after(Monday, FRIDAY_RD));
    }

    #[test]
    fn index_and_display() {
        assert_eq!(Weekday::from_index(13), Saturday);
        assert_eq!(Weekday::from_index(-8), Saturday);
        assert_eq!(Wednesday.index(), 3);
        assert_eq!(Thursday.to_string(), "Thursday");
    }
}
