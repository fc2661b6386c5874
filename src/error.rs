// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the bounded search API.
//!
//! Calendar conversions, weekday arithmetic and the degree helpers are total
//! functions and never fail. Only the opt-in `try_*` search routines in
//! [`search`](crate::search) report errors.

use thiserror::Error;

/// Errors reported by the bounded search routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The predicate did not settle within the configured iteration cap.
    #[error("search exhausted after {limit} iterations")]
    SearchExhausted { limit: usize },

    /// The bisection tolerance was zero, negative or not finite.
    #[error("invalid bisection precision: {0}")]
    InvalidPrecision(f64),

    /// The bisection bounds were reversed or not finite.
    #[error("invalid search interval: [{lo}, {hi}]")]
    EmptyInterval { lo: f64, hi: f64 },
}

/// Convenience alias used by the fallible search routines.
pub type Result<T> = std::result::Result<T, Error>;
