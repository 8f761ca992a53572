// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-width slots.

use super::{Interval, UtcPeriod};
use chrono::Duration;

/// Chops every period into consecutive slots of `width_minutes` minutes.
///
/// Slots start at each period's `start` and never extend past its `end`; a
/// trailing remainder shorter than the width is dropped. Periods are processed
/// in the order given, so the output is only globally ordered when the input
/// is ordered and disjoint. A width of zero yields no slots.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempslot::{split_into_fixed_intervals, UtcPeriod};
///
/// let start = Utc.with_ymd_and_hms(2018, 4, 7, 12, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2018, 4, 7, 13, 10, 0).unwrap();
///
/// let slots = split_into_fixed_intervals(&[UtcPeriod::new(start, end)], 30);
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[1].end, Utc.with_ymd_and_hms(2018, 4, 7, 13, 0, 0).unwrap());
/// ```
pub fn split_into_fixed_intervals(intervals: &[UtcPeriod], width_minutes: u32) -> Vec<UtcPeriod> {
    if width_minutes == 0 {
        return Vec::new();
    }
    let width = Duration::minutes(i64::from(width_minutes));

    let mut slots = Vec::new();
    for period in intervals {
        let mut cursor = period.start;
        while let Some(next) = cursor.checked_add_signed(width) {
            if next > period.end {
                break;
            }
            slots.push(Interval::new(cursor, next));
            cursor = next;
        }
    }
    slots
}
