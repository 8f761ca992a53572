// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points on the timeline.
//!
//! [`TimeInstant`] is the only thing the sweep needs from a time value: a
//! total order plus duration arithmetic. The production timeline is
//! `chrono::DateTime<Utc>`; a bare `i64` tick counter is also accepted, which
//! keeps minute-level reasoning (and callers with their own epoch) free of
//! calendar concerns.

use chrono::{DateTime, Utc};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as endpoints of an
/// [`Interval<T>`](crate::Interval) and fed through the sweep. The ordering
/// must be total: ties between endpoints are resolved on top of it.
pub trait TimeInstant: Copy + Clone + Ord + fmt::Debug + Sized {
    /// The duration type used for arithmetic operations.
    type Duration;

    /// Compute the difference between two time instants.
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Add a duration to this time instant.
    fn add_duration(&self, duration: Self::Duration) -> Self;

    /// Subtract a duration from this time instant.
    fn sub_duration(&self, duration: Self::Duration) -> Self;
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}

/// Raw ticks on a caller-defined epoch and unit.
impl TimeInstant for i64 {
    type Duration = i64;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
