// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time of day as whole hours, minutes and seconds.

use std::fmt;

use qtty::{Day, Days, Seconds};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A time of day: `(hour, minute, second)`.
///
/// Components are not range-checked; `Clock::new(25, 0, 0)` simply maps to
/// a day fraction above one.
///
/// Ordering is lexicographic over the three components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    hour: i64,
    minute: i64,
    second: i64,
}

impl Clock {
    /// Midnight.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    #[inline]
    pub const fn hour(&self) -> i64 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> i64 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> i64 {
        self.second
    }

    /// Fraction of a day elapsed since midnight.
    #[inline]
    pub fn to_day_fraction(&self) -> f64 {
        (self.hour as f64 + (self.minute as f64 + self.second as f64 / 60.0) / 60.0) / 24.0
    }

    /// Clock reading for a day fraction, rounded to the nearest second.
    ///
    /// Fractions that round up to a full day give `24:00:00`.
    pub fn from_day_fraction(fraction: f64) -> Self {
        let total = (fraction * SECONDS_PER_DAY).round() as i64;
        Self::new(
            total.div_euclid(3600),
            total.rem_euclid(3600).div_euclid(60),
            total.rem_euclid(60),
        )
    }

    /// Elapsed time since midnight.
    #[inline]
    pub fn total_seconds(&self) -> Seconds {
        Seconds::new((self.hour * 3600 + self.minute * 60 + self.second) as f64)
    }

    /// Elapsed time since midnight, in days.
    #[inline]
    pub fn duration(&self) -> Days {
        self.total_seconds().to::<Day>()
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl From<Seconds> for Clock {
    /// Clock reading after the given time since midnight.
    fn from(elapsed: Seconds) -> Self {
        Self::from_day_fraction(elapsed.to::<Day>().value())
    }
}

impl From<Clock> for Seconds {
    fn from(clock: Clock) -> Self {
        clock.total_seconds()
    }
}
