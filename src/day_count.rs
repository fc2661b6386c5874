// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Continuous day counts with their own epochs.
//!
//! | Type | Epoch (RD) | Relation |
//! |------|------------|----------|
//! | [`JulianDay`] | −1 721 424.5 | `RD = floor(JD + epoch)` |
//! | [`ModifiedJulianDay`] | 678 576 | `RD = MJD + epoch` |
//!
//! The Julian Day starts at noon, hence the half-day epoch: every midnight
//! on the Rata Die axis is a `.5` Julian Day.

use std::fmt;

use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{impl_day_arithmetic, Calendar};
use crate::moment::Moment;

// ═══════════════════════════════════════════════════════════════════════════
// Julian Day
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Day — days since noon, January 1, 4713 BC (proleptic Julian).
///
/// Stores a fractional day count. Conversion to the pivot floors to the
/// containing Rata Die day, so only values ending in `.5` are valid dates.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// Rata Die of Julian Day 0.
    pub const EPOCH: Days = Days::new(-1_721_424.5);

    /// J2000.0: 2000-01-01T12:00.
    pub const J2000: Self = Self::new(2_451_545.0);

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

    /// The underlying scalar value in days.
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Exact instant on the Rata Die axis, keeping the time of day.
    #[inline]
    pub fn to_moment(&self) -> Moment {
        Moment::from_days(self.quantity + Self::EPOCH)
    }

    /// Julian Day of an instant given on the Rata Die axis.
    #[inline]
    pub fn from_moment(moment: Moment) -> Self {
        Self::from_days(moment.quantity() - Self::EPOCH)
    }
}

impl Calendar for JulianDay {
    const LABEL: &'static str = "JD";

    #[inline]
    fn to_rata_die(&self) -> i64 {
        (self.quantity + Self::EPOCH).value().floor() as i64
    }

    #[inline]
    fn from_rata_die(rd: i64) -> Self {
        Self::from_days(Days::new(rd as f64) - Self::EPOCH)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::LABEL, self.value())
    }
}

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Modified Julian Day
// ═══════════════════════════════════════════════════════════════════════════

/// Modified Julian Day — `JD − 2 400 000.5`, an integer day count starting
/// at midnight, November 17, 1858.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModifiedJulianDay(i64);

impl ModifiedJulianDay {
    /// Rata Die of MJD 0.
    pub const EPOCH: i64 = 678_576;

    #[inline]
    pub const fn new(mjd: i64) -> Self {
        Self(mjd)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Calendar for ModifiedJulianDay {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_rata_die(&self) -> i64 {
        self.0 + Self::EPOCH
    }

    #[inline(always)]
    fn from_rata_die(rd: i64) -> Self {
        Self(rd - Self::EPOCH)
    }
}

impl fmt::Display for ModifiedJulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::LABEL, self.0)
    }
}

impl_day_arithmetic!(JulianDay, ModifiedJulianDay);
