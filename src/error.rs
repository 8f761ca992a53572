// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use chrono::{DateTime, Utc};
use qtty::Days;
use thiserror::Error;

/// Rejection of a day range passed to
/// [`intervals_for_each_day_in_range`](crate::intervals_for_each_day_in_range).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// The first day lies after the last day.
    #[error("start day {start} is after end day {end}")]
    StartAfterEnd {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// The range spans more than [`MAX_RANGE_DAYS`](crate::MAX_RANGE_DAYS).
    #[error("range from {start} to {end} spans {requested}, more than {max_days} days")]
    RangeTooLarge {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        requested: Days,
        max_days: i64,
    },
}

pub type Result<T, E = RangeError> = std::result::Result<T, E>;
