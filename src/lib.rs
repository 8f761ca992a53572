// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Availability windows on a UTC timeline.
//!
//! This crate computes when a resource is free given the windows in which it
//! is available and the windows in which it is blocked, and reshapes the
//! result into views a scheduling UI needs.
//!
//! All intervals are half-open: `[start, end)` contains `start` but not `end`.
//!
//! # Core types
//!
//! - [`Interval<T>`] — a half-open interval over any [`TimeInstant`].
//! - [`UtcPeriod`] — `Interval<DateTime<Utc>>`, used by every calendar-aware
//!   operation.
//! - [`TimeInstant`] — trait for points in time usable with [`Interval`];
//!   implemented for `chrono::DateTime<Utc>` and raw `i64` ticks.
//! - [`DayIntervals`] — the pieces of one UTC day within a range.
//! - [`RangeError`] — why a day range was rejected.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`subtract_blocked`] | `⋃available \ ⋃blocked`, ordered and disjoint |
//! | [`merge_non_overlapping`] | union of possibly overlapping intervals, ordered and disjoint |
//! | [`intervals_by_day`] | pieces grouped by UTC day, split at midnight |
//! | [`intervals_for_each_day_in_range`] | one [`DayIntervals`] per day of an inclusive range |
//! | [`split_into_fixed_intervals`] | fixed-width slots, remainders dropped |
//! | [`normalize_date`] | midnight UTC of an instant's day |
//! | [`same_day`] | whether two instants share a UTC day |
//! | [`end_of_day`] | next midnight minus one millisecond |
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempslot::{split_into_fixed_intervals, subtract_blocked, UtcPeriod};
//!
//! let at = |h, m| Utc.with_ymd_and_hms(2018, 4, 10, h, m, 0).unwrap();
//!
//! let opening_hours = [UtcPeriod::new(at(9, 0), at(12, 0))];
//! let meetings = [UtcPeriod::new(at(10, 0), at(10, 45))];
//!
//! let free = subtract_blocked(&opening_hours, &meetings);
//! assert_eq!(free, vec![UtcPeriod::new(at(9, 0), at(10, 0)), UtcPeriod::new(at(10, 45), at(12, 0))]);
//!
//! let slots = split_into_fixed_intervals(&free, 30);
//! assert_eq!(slots.len(), 4);
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`Interval`] and [`DayIntervals`].

mod calendar;
mod day;
mod error;
pub(crate) mod instant;
mod period;
mod slice;
mod sweep;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{end_of_day, normalize_date, same_day};
pub use day::{intervals_by_day, intervals_for_each_day_in_range, DayIntervals, MAX_RANGE_DAYS};
pub use error::{RangeError, Result};
pub use instant::TimeInstant;
pub use period::{Interval, UtcPeriod};
pub use slice::split_into_fixed_intervals;
pub use sweep::{merge_non_overlapping, subtract_blocked};
