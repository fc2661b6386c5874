// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fractional instants on the Rata Die axis.
//!
//! A [`Moment`] is a Rata Die day plus the fraction of that day elapsed
//! since midnight: `764652.75` is 18:00 on RD 764652. The integer part is
//! the calendar date, the fractional part is the [`Clock`] reading.

use std::fmt;

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Second, Seconds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{impl_day_arithmetic, Calendar};
use crate::clock::Clock;

/// RD of 1970-01-01, the Unix epoch.
const UNIX_EPOCH_RD: Days = Days::new(719_163.0);

/// An instant expressed as fractional Rata Die days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Moment {
    quantity: Days,
}

impl Moment {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Fraction of the day elapsed since midnight, in `[0, 1)`.
    ///
    /// Negative moments still yield a non-negative fraction: `-0.25` is
    /// 18:00 on RD −1.
    #[inline]
    pub fn time_of_day(&self) -> f64 {
        let fraction = self.value().rem_euclid(1.0);
        // rem_euclid rounds tiny negative values up to exactly 1.0.
        if fraction >= 1.0 {
            0.0
        } else {
            fraction
        }
    }

    /// [`time_of_day`](Self::time_of_day) as a typed quantity.
    #[inline]
    pub fn day_fraction(&self) -> Days {
        Days::new(self.time_of_day())
    }

    /// Clock reading, rounded to the nearest second.
    ///
    /// Moments within half a second of the next midnight read `24:00:00`.
    #[inline]
    pub fn to_clock(&self) -> Clock {
        Clock::from_day_fraction(self.time_of_day())
    }

    /// The moment `n` days later, keeping the time of day.
    ///
    /// [`Calendar::add_days`] instead lands on midnight of the target day.
    #[inline]
    pub fn shift_days(&self, n: i64) -> Self {
        Self::from_days(self.quantity + Days::new(n as f64))
    }

    /// The moment `clock` into the day `date` falls on.
    pub fn from_date_and_clock<D: Calendar>(date: &D, clock: &Clock) -> Self {
        Self::new(date.to_rata_die() as f64 + clock.to_day_fraction())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.quantity - UNIX_EPOCH_RD).to::<Second>().value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos.min(999_999_999))
    }

    /// Build a moment from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(UNIX_EPOCH_RD + (seconds_since_epoch + nanos).to::<Day>())
    }
}

impl Calendar for Moment {
    const LABEL: &'static str = "Moment";

    #[inline]
    fn to_rata_die(&self) -> i64 {
        self.value().floor() as i64
    }

    #[inline]
    fn from_rata_die(rd: i64) -> Self {
        Self::new(rd as f64)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::LABEL, self.value())
    }
}

impl From<Days> for Moment {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<DateTime<Utc>> for Moment {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Moment {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Moment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl_day_arithmetic!(Moment);
