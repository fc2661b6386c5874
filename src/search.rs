// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic search and summation primitives.
//!
//! These solve the "find `x` such that `f(x) = y`" problems that recur in
//! calendrical and astronomical computation:
//!
//! | Function | Domain | Result |
//! |----------|--------|--------|
//! | [`sum_while`] | integers | `Σ f(i)` while `pred(i)` holds |
//! | [`first_satisfying`] | integers | smallest `i ≥ start` with `pred(i)` |
//! | [`last_satisfying`] | integers | last `i` of the run starting at `start` |
//! | [`binary_search`] | reals | bisection with caller-supplied predicates |
//! | [`invert_astronomical`] | reals | inverse of a degree-valued function |
//!
//! # Termination
//!
//! The unbounded routines terminate only if their predicates eventually
//! flip. A predicate that never does so makes them loop forever; this is a
//! caller obligation, not something detected at runtime.
//!
//! Callers that evaluate untrusted predicates should use the `try_*`
//! variants, which stop after [`SearchLimits::max_iterations`] steps and
//! return [`Error::SearchExhausted`].

use crate::error::{Error, Result};
use crate::math::modulo_f64;

/// Bisection tolerance used by [`invert_astronomical`], in domain units.
pub const ASTRONOMICAL_PRECISION: f64 = 1e-5;

/// Iteration cap and tolerance for the bounded `try_*` search routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    /// Maximum number of predicate evaluations before giving up.
    pub max_iterations: usize,
    /// Interval width at which [`try_invert_astronomical`] stops.
    pub precision: f64,
}

impl SearchLimits {
    /// Default cap: one million steps.
    pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

    /// Limits with the given iteration cap and the astronomical precision.
    pub const fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            precision: ASTRONOMICAL_PRECISION,
        }
    }

    /// Same cap, different bisection tolerance.
    pub const fn with_precision(self, precision: f64) -> Self {
        Self {
            max_iterations: self.max_iterations,
            precision,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ITERATIONS)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Integer searches
// ═══════════════════════════════════════════════════════════════════════════

/// Sum of `f(i)` for `i = start, start + 1, …` while `pred(i)` holds.
///
/// Returns `0.0` when `pred(start)` is already false.
pub fn sum_while<F, P>(mut f: F, start: i64, mut pred: P) -> f64
where
    F: FnMut(i64) -> f64,
    P: FnMut(i64) -> bool,
{
    let mut acc = 0.0;
    let mut i = start;
    while pred(i) {
        acc += f(i);
        i += 1;
    }
    acc
}

/// Smallest integer `i >= start` such that `pred(i)` holds.
///
/// Scans upwards one integer at a time.
pub fn first_satisfying<P>(mut pred: P, start: i64) -> i64
where
    P: FnMut(i64) -> bool,
{
    let mut i = start;
    while !pred(i) {
        i += 1;
    }
    i
}

/// Last integer of the run of `pred`-satisfying integers beginning at `start`.
///
/// Returns `start - 1` when `pred(start)` is false.
pub fn last_satisfying<P>(mut pred: P, start: i64) -> i64
where
    P: FnMut(i64) -> bool,
{
    let mut i = start;
    while pred(i) {
        i += 1;
    }
    i - 1
}

/// [`first_satisfying`] with an iteration cap.
pub fn try_first_satisfying<P>(mut pred: P, start: i64, limits: &SearchLimits) -> Result<i64>
where
    P: FnMut(i64) -> bool,
{
    let mut i = start;
    for step in 0..limits.max_iterations {
        if pred(i) {
            tracing::debug!(start, result = i, steps = step + 1, "first_satisfying converged");
            return Ok(i);
        }
        i += 1;
    }
    exhausted(limits)
}

/// [`last_satisfying`] with an iteration cap.
pub fn try_last_satisfying<P>(mut pred: P, start: i64, limits: &SearchLimits) -> Result<i64>
where
    P: FnMut(i64) -> bool,
{
    let mut i = start;
    for step in 0..limits.max_iterations {
        if !pred(i) {
            tracing::debug!(start, result = i - 1, steps = step + 1, "last_satisfying converged");
            return Ok(i - 1);
        }
        i += 1;
    }
    exhausted(limits)
}

// ═══════════════════════════════════════════════════════════════════════════
// Bisection
// ═══════════════════════════════════════════════════════════════════════════

/// Bisection over the continuous interval `[lo, hi]`.
///
/// At each step the midpoint `x = (lo + hi) / 2` is computed. If
/// `precision_ok(lo, hi)` holds, `x` is returned; otherwise the interval
/// shrinks to `[lo, x]` when `go_left(x)` holds and to `[x, hi]` otherwise.
///
/// There is no iteration cap: `precision_ok` must eventually hold. A
/// threshold finer than the floating-point spacing around the answer never
/// does.
pub fn binary_search<P, G>(mut lo: f64, mut hi: f64, mut precision_ok: P, mut go_left: G) -> f64
where
    P: FnMut(f64, f64) -> bool,
    G: FnMut(f64) -> bool,
{
    loop {
        let x = (lo + hi) / 2.0;
        if precision_ok(lo, hi) {
            return x;
        }
        if go_left(x) {
            hi = x;
        } else {
            lo = x;
        }
    }
}

/// [`binary_search`] with an iteration cap.
///
/// Rejects reversed or non-finite bounds with [`Error::EmptyInterval`].
pub fn try_binary_search<P, G>(
    mut lo: f64,
    mut hi: f64,
    mut precision_ok: P,
    mut go_left: G,
    limits: &SearchLimits,
) -> Result<f64>
where
    P: FnMut(f64, f64) -> bool,
    G: FnMut(f64) -> bool,
{
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(Error::EmptyInterval { lo, hi });
    }
    for step in 0..limits.max_iterations {
        let x = (lo + hi) / 2.0;
        tracing::trace!(step, lo, hi, mid = x, "bisection step");
        if precision_ok(lo, hi) {
            tracing::debug!(result = x, steps = step + 1, "bisection converged");
            return Ok(x);
        }
        if go_left(x) {
            hi = x;
        } else {
            lo = x;
        }
    }
    exhausted(limits)
}

/// Whether `x` lies past the point where `f` reaches `target`, measured
/// along the shorter arc of the circle.
#[inline]
fn ahead_of_target<F>(f: &mut F, target: f64, x: f64) -> bool
where
    F: FnMut(f64) -> f64,
{
    modulo_f64(f(x) - target, 360.0) < 180.0
}

/// Solves `f(x) = target` on `[lo, hi]` for a degree-valued function `f`.
///
/// Bisects until the interval is narrower than [`ASTRONOMICAL_PRECISION`],
/// moving left whenever `(f(x) - target) mod 360 < 180`. Comparing on the
/// circle instead of on the real line resolves the wrap-around at 360°.
/// `f` must increase through `target` exactly once on the interval.
pub fn invert_astronomical<F>(mut f: F, target: f64, lo: f64, hi: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    binary_search(
        lo,
        hi,
        |l, h| h - l < ASTRONOMICAL_PRECISION,
        |x| ahead_of_target(&mut f, target, x),
    )
}

/// [`invert_astronomical`] with an iteration cap and a configurable tolerance.
pub fn try_invert_astronomical<F>(
    mut f: F,
    target: f64,
    lo: f64,
    hi: f64,
    limits: &SearchLimits,
) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    let precision = limits.precision;
    if !precision.is_finite() || precision <= 0.0 {
        return Err(Error::InvalidPrecision(precision));
    }
    try_binary_search(
        lo,
        hi,
        |l, h| h - l < precision,
        |x| ahead_of_target(&mut f, target, x),
        limits,
    )
}

fn exhausted<T>(limits: &SearchLimits) -> Result<T> {
    tracing::warn!(limit = limits.max_iterations, "search exhausted its iteration cap");
    Err(Error::SearchExhausted {
        limit: limits.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sin_deg;
    use std::f64::consts::PI;

    fn square(n: i64) -> f64 {
        (n * n) as f64
    }

    fn in_10_to_25(i: i64) -> bool {
        (10..=25).contains(&i)
    }

    #[test]
    fn sum_while_accumulates_until_predicate_fails() {
        assert_eq!(sum_while(square, 0, |i| i < 5), 30.0);
        assert_eq!(sum_while(square, 4, |i| i < 5), 16.0);
        assert_eq!(sum_while(square, 5, |i| i < 5), 0.0);
    }

    #[test]
    fn first_satisfying_scans_upwards() {
        assert_eq!(first_satisfying(in_10_to_25, 0), 10);
        assert_eq!(first_satisfying(in_10_to_25, 10), 10);
        assert_eq!(first_satisfying(in_10_to_25, -7), 10);
    }

    #[test]
    fn last_satisfying_returns_end_of_run() {
        assert_eq!(last_satisfying(in_10_to_25, 10), 25);
        assert_eq!(last_satisfying(in_10_to_25, 25), 25);
        assert_eq!(last_satisfying(in_10_to_25, 0), -1);
    }

    #[test]
    fn binary_search_finds_square_root() {
        let y = PI * PI;
        let result = binary_search(
            3.0,
            4.0,
            |lo, hi| (((lo + hi) / 2.0).powi(2) - y).abs() <= 1e-5,
            |x| x * x - y > 0.0,
        );
        assert!((result - PI).abs() < 1e-5);
    }

    #[test]
    fn invert_astronomical_sine_in_degrees() {
        let result = invert_astronomical(sin_deg, sin_deg(30.0), 0.0, 90.0);
        assert!((result - 30.0).abs() < 1e-5, "got {result}");
    }

    #[test]
    fn invert_astronomical_sine_in_radians() {
        let result = invert_astronomical(f64::sin, (PI / 6.0).sin(), 0.0, PI / 2.0);
        assert!((result - PI / 6.0).abs() < 1e-5);
    }

    #[test]
    fn invert_astronomical_across_wraparound() {
        // A longitude-like function that crosses 360° → 0° inside the interval.
        let longitude = |t: f64| modulo_f64(350.0 + t, 360.0);
        let result = invert_astronomical(longitude, 5.0, 0.0, 30.0);
        assert!((result - 15.0).abs() < 1e-5, "got {result}");
    }

    #[test]
    fn bounded_integer_searches() {
        let limits = SearchLimits::new(100);
        assert_eq!(try_first_satisfying(in_10_to_25, 0, &limits), Ok(10));
        assert_eq!(try_last_satisfying(in_10_to_25, 12, &limits), Ok(25));
        assert_eq!(
            try_first_satisfying(|_| false, 0, &limits),
            Err(Error::SearchExhausted { limit: 100 })
        );
        assert_eq!(
            try_last_satisfying(|_| true, 0, &limits),
            Err(Error::SearchExhausted { limit: 100 })
        );
    }

    #[test]
    fn bounded_bisection_matches_unbounded() {
        let limits = SearchLimits::default();
        let bounded =
            try_invert_astronomical(sin_deg, sin_deg(30.0), 0.0, 90.0, &limits).expect("converges");
        let unbounded = invert_astronomical(sin_deg, sin_deg(30.0), 0.0, 90.0);
        assert_eq!(bounded, unbounded);
    }

    #[test]
    fn bounded_bisection_rejects_degenerate_input() {
        let limits = SearchLimits::default();
        assert_eq!(
            try_binary_search(2.0, 1.0, |_, _| true, |_| true, &limits),
            Err(Error::EmptyInterval { lo: 2.0, hi: 1.0 })
        );
        assert_eq!(
            try_invert_astronomical(sin_deg, 0.5, 0.0, 90.0, &limits.with_precision(0.0)),
            Err(Error::InvalidPrecision(0.0))
        );
    }

    #[test]
    fn bounded_bisection_stops_on_unreachable_precision() {
        let limits = SearchLimits::new(64);
        assert_eq!(
            try_binary_search(0.0, 1.0, |_, _| false, |_| true, &limits),
            Err(Error::SearchExhausted { limit: 64 })
        );
    }
}
