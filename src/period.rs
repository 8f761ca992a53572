// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic half-open interval over any [`TimeInstant`]
//! - [`UtcPeriod`]: alias for `Interval<DateTime<Utc>>`, the type every
//!   calendar-aware operation works on

use super::TimeInstant;
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the half-open interval `[start, end)` between two instants.
///
/// The instant `end` itself is not part of the interval, so two intervals
/// where one ends exactly when the other starts do not overlap. Zero-length
/// intervals (`start == end`) are valid values but contain no instant.
///
/// Intervals order lexicographically by `(start, end)`.
///
/// # Examples
///
/// ```
/// use tempslot::Interval;
///
/// let morning = Interval::new(9_i64, 12);
/// assert!(morning.contains(9));
/// assert!(!morning.contains(12));
/// assert_eq!(morning.duration(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two time instants.
    ///
    /// No check is made that `start <= end`.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the interval as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// `true` when the interval contains no instant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open membership: `start <= instant < end`.
    #[inline]
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl fmt::Display for Interval<i64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.start, self.end)
    }
}

/// `(start -> end)[N minutes]`, minutes with six decimals.
impl fmt::Display for Interval<DateTime<Utc>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} -> {})[{:.6} minutes]",
            self.start,
            self.end,
            self.duration_minutes()
        )
    }
}

// Specific implementation for UTC periods
impl Interval<DateTime<Utc>> {
    /// Returns the duration in days as a typed quantity.
    pub fn duration_days(&self) -> Days {
        const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;
        const SECONDS_PER_DAY: f64 = 86_400.0;

        let duration = self.duration();
        match duration.num_nanoseconds() {
            Some(ns) => Days::new(ns as f64 / NANOS_PER_DAY),
            // Spans beyond ~292 years overflow i64 nanoseconds.
            None => Days::new(duration.num_seconds() as f64 / SECONDS_PER_DAY),
        }
    }

    /// Returns the duration in minutes, including the fractional part.
    pub fn duration_minutes(&self) -> f64 {
        const MILLIS_PER_MINUTE: f64 = 60_000.0;
        self.duration().num_milliseconds() as f64 / MILLIS_PER_MINUTE
    }
}
