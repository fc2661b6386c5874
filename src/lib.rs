// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendrical calculations around a Rata Die pivot.
//!
//! Every calendar in this crate converts to and from one integer day count,
//! the **Rata Die** (RD 1 = January 1, year 1, proleptic Gregorian). Any
//! conversion `A → B` is `B::from_rata_die(a.to_rata_die())`, available as
//! [`Calendar::to`] or through `From`/`Into`.
//!
//! # Core types
//!
//! - [`Calendar`] — trait implemented by every calendar (pivot conversions,
//!   day arithmetic, ordering, validity).
//! - [`RataDie`] — the pivot itself.
//! - [`Moment`] — fractional RD with a time of day.
//! - [`Clock`] — hour/minute/second time of day.
//! - [`Angle`] — degree/arcminute/arcsecond angle.
//! - [`Position`] — geographic point with great-circle [`direction`](Position::direction).
//! - [`Weekday`] — day of the week and "k-day on or before" arithmetic.
//!
//! # Calendars
//!
//! | Type | Calendar | Epoch (RD) |
//! |------|----------|------------|
//! | [`RataDie`] | fixed day number | 0 |
//! | [`Gregorian`] | proleptic Gregorian | 1 |
//! | [`Egyptian`] | Egyptian (Nabonassar) | −272 787 |
//! | [`Armenian`] | Armenian | 201 443 |
//! | [`JulianDay`] | Julian Day | −1 721 424.5 |
//! | [`ModifiedJulianDay`] | Modified Julian Day | 678 576 |
//! | [`Moment`] | fractional RD | 0 |
//!
//! # Numeric helpers
//!
//! [`math`] holds floor modulo and degree trigonometry; [`search`] holds the
//! integer scans, bisection and the inversion of angle-valued functions. The
//! bounded `try_*` searches return [`Error`] instead of looping forever.
//!
//! ```
//! use ratadie::{Calendar, Egyptian, Gregorian, Weekday};
//!
//! let date = Gregorian::new(1945, 11, 12);
//! let egyptian: Egyptian = date.to();
//! assert_eq!(egyptian.to::<Gregorian>(), date);
//! assert_eq!(date.day_of_week(), Weekday::Monday);
//! assert_eq!(date + 30, Gregorian::new(1945, 12, 12));
//! ```

mod angle;
mod calendar;
mod clock;
mod day_count;
mod egyptian;
mod error;
mod gregorian;
pub mod math;
mod moment;
mod position;
pub mod search;
pub mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::Angle;
pub use calendar::{Calendar, RataDie};
pub use clock::Clock;
pub use day_count::{JulianDay, ModifiedJulianDay};
pub use egyptian::{Armenian, Egyptian};
pub use error::{Error, Result};
pub use gregorian::{leap_year, Gregorian};
pub use moment::Moment;
pub use position::Position;
pub use search::{SearchLimits, ASTRONOMICAL_PRECISION};
pub use weekday::Weekday;
