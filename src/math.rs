// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Numeric helpers shared by the calendar and position modules.
//!
//! Calendrical arithmetic needs a few operations that the standard library
//! spells differently:
//!
//! - [`modulo`] / [`modulo_f64`]: *floor* modulo, whose result takes the sign
//!   of the divisor (`-9 mod 5 = 1`). Rust's `%` truncates instead.
//! - [`amod`]: adjusted modulo, mapping a zero remainder to the divisor so
//!   that "month 0" comes out as "month 12".
//! - Degree-domain trigonometry. All angles go through [`qtty::Degrees`] so the
//!   unit conversion lives in one place.
//!
//! # Degree arctangent
//!
//! [`atan2_deg`] returns a bearing-style angle in `[0, 360)`. When both
//! arguments are zero the direction is undefined and the result is `NaN`;
//! the function never panics so it can be mapped over whole arrays.

use qtty::{Degree, Degrees, Radian, Radians};

/// Three-way sign: `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f64::signum`], zero maps to `0.0`. `NaN` propagates.
#[inline]
pub fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x * 0.0
    }
}

/// Floor modulo on integers: `x - y * floor(x / y)`.
///
/// The result has the sign of `y`. Panics if `y == 0`, like `%`.
#[inline]
pub fn modulo(x: i64, y: i64) -> i64 {
    let r = x % y;
    if r != 0 && ((r < 0) != (y < 0)) {
        r + y
    } else {
        r
    }
}

/// Floor modulo on reals: `x - y * floor(x / y)`.
#[inline]
pub fn modulo_f64(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Adjusted modulo: like [`modulo`] but a zero result becomes `y`.
///
/// For positive `y` the result lies in `1..=y`.
#[inline]
pub fn amod(x: i64, y: i64) -> i64 {
    y + modulo(x, -y)
}

/// Degrees → radians.
#[inline]
pub fn deg_to_rad(x: f64) -> f64 {
    Degrees::new(x).to::<Radian>().value()
}

/// Radians → degrees.
#[inline]
pub fn rad_to_deg(x: f64) -> f64 {
    Radians::new(x).to::<Degree>().value()
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(x: f64) -> f64 {
    Degrees::new(x).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(x: f64) -> f64 {
    Degrees::new(x).cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(x: f64) -> f64 {
    Degrees::new(x).tan()
}

/// Arcsine, in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

/// Arccosine, in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

/// Four-quadrant arctangent of `y / x`, in degrees within `[0, 360)`.
///
/// - `x == 0, y != 0` yields `signum(y) * 90` (so `-90` wraps to `270`).
/// - `x < 0` shifts the principal value by `180`.
/// - `x == 0, y == 0` yields `NaN`.
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    let angle = if x == 0.0 && y != 0.0 {
        signum(y) * 90.0
    } else if x >= 0.0 {
        rad_to_deg((y / x).atan())
    } else {
        rad_to_deg((y / x).atan()) + 180.0
    };
    // Adding zero turns a wrapped -0.0 into +0.0.
    Degrees::new(angle).wrap_pos().value() + 0.0
}
