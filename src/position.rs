// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic positions and great-circle bearings.

use qtty::Degrees;

use crate::clock::Clock;
use crate::math::{atan2_deg, cos_deg, sin_deg, tan_deg};

/// A point on the Earth's surface.
///
/// Latitude and longitude are in degrees (east positive), elevation in
/// meters, and the timezone offset from UTC as a fraction of a day.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    latitude: f64,
    longitude: f64,
    elevation: f64,
    timezone: f64,
}

impl Position {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64, elevation: f64, timezone: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            timezone,
        }
    }

    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation above sea level, in meters.
    #[inline]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Offset from UTC, as a fraction of a day.
    #[inline]
    pub const fn timezone(&self) -> f64 {
        self.timezone
    }

    /// The timezone offset as a clock reading.
    ///
    /// Western offsets carry the sign on every component, so UTC−5:30 reads
    /// `(-5, -30, 0)`.
    pub fn timezone_clock(&self) -> Clock {
        let clock = Clock::from_day_fraction(self.timezone.abs());
        if self.timezone < 0.0 {
            Clock::new(-clock.hour(), -clock.minute(), -clock.second())
        } else {
            clock
        }
    }

    /// Initial great-circle bearing from `self` towards `focus`, in degrees
    /// clockwise from north within `[0, 360)`.
    ///
    /// A focus at the North Pole, or one that coincides with `self`, gives 0;
    /// a focus at the South Pole gives 180.
    ///
    /// Precision degrades when `focus` nearly coincides with `self` or
    /// approaches its antipode; the bearing there can be meaningless.
    pub fn direction(&self, focus: &Position) -> f64 {
        let y = sin_deg(focus.longitude - self.longitude);
        let x = cos_deg(self.latitude) * tan_deg(focus.latitude)
            - sin_deg(self.latitude) * cos_deg(self.longitude - focus.longitude);
        if (x == 0.0 && y == 0.0) || focus.latitude == 90.0 {
            0.0
        } else if focus.latitude == -90.0 {
            180.0
        } else {
            atan2_deg(y, x)
        }
    }

    /// [`direction`](Self::direction) as a typed angle.
    #[inline]
    pub fn bearing_to(&self, focus: &Position) -> Degrees {
        Degrees::new(self.direction(focus))
    }
}
