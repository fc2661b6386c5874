// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal angles.

use std::fmt;

use qtty::Degrees;

/// An angle as whole `(degree, arcminute, arcsecond)`.
///
/// Negative angles carry the sign on every component: −12.76389° is
/// `(-12, -45, -50)`. This is a convention, not something [`Angle::new`]
/// enforces.
///
/// Ordering is lexicographic over the three components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    degree: i64,
    arcminute: i64,
    arcsecond: i64,
}

impl Angle {
    #[inline]
    pub const fn new(degree: i64, arcminute: i64, arcsecond: i64) -> Self {
        Self {
            degree,
            arcminute,
            arcsecond,
        }
    }

    /// Whole degrees, no minutes or seconds.
    #[inline]
    pub const fn from_degrees(degree: i64) -> Self {
        Self::new(degree, 0, 0)
    }

    #[inline]
    pub const fn degree(&self) -> i64 {
        self.degree
    }

    #[inline]
    pub const fn arcminute(&self) -> i64 {
        self.arcminute
    }

    #[inline]
    pub const fn arcsecond(&self) -> i64 {
        self.arcsecond
    }

    /// Split a decimal angle into whole degrees, arcminutes and arcseconds.
    ///
    /// Each component is truncated from what remains after the coarser
    /// units are taken out.
    pub fn from_decimal_degree(angle: f64) -> Self {
        let x = angle.abs();
        let degree = x.floor() as i64;
        let arcminute = (60.0 * x.rem_euclid(1.0)).floor() as i64;
        let arcsecond = (3600.0 * x).rem_euclid(60.0).floor() as i64;
        if angle < 0.0 {
            Self::new(-degree, -arcminute, -arcsecond)
        } else {
            Self::new(degree, arcminute, arcsecond)
        }
    }

    #[inline]
    pub fn to_decimal_degree(&self) -> f64 {
        self.degree as f64 + (self.arcminute as f64 + self.arcsecond as f64 / 60.0) / 60.0
    }

    /// The angle as a typed quantity.
    #[inline]
    pub fn to_degrees(&self) -> Degrees {
        Degrees::new(self.to_decimal_degree())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}′{}″", self.degree, self.arcminute, self.arcsecond)
    }
}

impl From<Degrees> for Angle {
    #[inline]
    fn from(angle: Degrees) -> Self {
        Self::from_decimal_degree(angle.value())
    }
}

impl From<Angle> for Degrees {
    #[inline]
    fn from(angle: Angle) -> Self {
        angle.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_decimal_degree() {
        assert_eq!(Angle::from_decimal_degree(12.76389), Angle::new(12, 45, 50));
        assert_eq!(Angle::from_decimal_degree(-12.76389), Angle::new(-12, -45, -50));
        assert_eq!(Angle::from_decimal_degree(30.0), Angle::from_degrees(30));
    }

    #[test]
    fn to_decimal_degree() {
        assert!((Angle::new(12, 45, 50).to_decimal_degree() - 12.763_888_9).abs() < 1e-6);
        assert!((Angle::new(-12, -45, -50).to_decimal_degree() + 12.763_888_9).abs() < 1e-6);
        assert!((Angle::new(21, 25, 24).to_degrees().value() - 21.4233).abs() < 1e-4);
    }

    #[test]
    fn degrees_round_trip() {
        let angle = Angle::new(39, 49, 24);
        let back = Angle::from(Degrees::from(angle) + Degrees::new(1e-9));
        assert_eq!(back, angle);
    }

    #[test]
    fn lexicographic_order() {
        assert!(Angle::new(10, 59, 59) < Angle::new(11, 0, 0));
        assert!(Angle::new(-1, 0, 0) < Angle::new(0, 0, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Angle::new(12, 45, 50).to_string(), "12°45′50″");
    }
}
