// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-day views of a list of UTC periods.
//!
//! - [`intervals_by_day`] cuts every period at each midnight it crosses and
//!   groups the pieces by day.
//! - [`intervals_for_each_day_in_range`] turns that grouping into one
//!   [`DayIntervals`] record per day of an inclusive range, empty days
//!   included.
//!
//! Pieces that run to the end of their day stop at [`end_of_day`], one
//! millisecond before the next midnight, not at the midnight itself.
//!
//! Neither function sorts or merges: feed them the output of
//! [`merge_non_overlapping`](crate::merge_non_overlapping) or
//! [`subtract_blocked`](crate::subtract_blocked) to get ordered, disjoint
//! pieces per day.

use super::calendar::next_midnight;
use super::{end_of_day, normalize_date, same_day, Interval, RangeError, Result, UtcPeriod};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest range, in days, accepted by [`intervals_for_each_day_in_range`].
pub const MAX_RANGE_DAYS: i64 = 365;

/// The periods of one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayIntervals {
    /// Midnight UTC opening the day.
    pub date: DateTime<Utc>,
    /// Zero-based position of the day within the requested range.
    pub index_since_first: usize,
    /// Pieces lying within `[date, date + 24h)`, in the order they were produced.
    pub ordered_disjoint_intervals: Vec<UtcPeriod>,
}

/// Cuts `period` at every midnight it crosses.
///
/// A trailing piece that would start and end on the same midnight is dropped.
fn day_pieces(period: UtcPeriod) -> Vec<UtcPeriod> {
    let Interval { start, end } = period;
    if same_day(start, end) {
        return vec![period];
    }

    let mut pieces = vec![Interval::new(start, end_of_day(start))];
    let last_day = normalize_date(end);

    let mut day = next_midnight(start);
    while let Some(midnight) = day.filter(|d| *d < last_day) {
        pieces.push(Interval::new(midnight, end_of_day(midnight)));
        day = next_midnight(midnight);
    }

    if last_day < end {
        pieces.push(Interval::new(last_day, end));
    }
    pieces
}

/// Groups `intervals` by UTC day, splitting those that cross midnight.
///
/// Keys are midnights. Within a day, pieces keep the order of `intervals`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use tempslot::{intervals_by_day, UtcPeriod};
///
/// let evening = Utc.with_ymd_and_hms(2018, 4, 10, 17, 0, 0).unwrap();
/// let morning = Utc.with_ymd_and_hms(2018, 4, 11, 5, 0, 0).unwrap();
/// let midnight = Utc.with_ymd_and_hms(2018, 4, 11, 0, 0, 0).unwrap();
///
/// let days = intervals_by_day(&[UtcPeriod::new(evening, morning)]);
///
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[&(midnight - Duration::days(1))][0].end, midnight - Duration::milliseconds(1));
/// assert_eq!(days[&midnight][0], UtcPeriod::new(midnight, morning));
/// ```
pub fn intervals_by_day(intervals: &[UtcPeriod]) -> BTreeMap<DateTime<Utc>, Vec<UtcPeriod>> {
    let mut days: BTreeMap<DateTime<Utc>, Vec<UtcPeriod>> = BTreeMap::new();
    for period in intervals {
        for piece in day_pieces(*period) {
            days.entry(normalize_date(piece.start))
                .or_default()
                .push(piece);
        }
    }
    days
}

/// One [`DayIntervals`] per day from `start_day` to `end_day`, both inclusive.
///
/// Both bounds may carry a time of day; the first record is the midnight of
/// `start_day`. Days without any piece get an empty list.
///
/// # Errors
///
/// - [`RangeError::StartAfterEnd`] when `start_day > end_day`.
/// - [`RangeError::RangeTooLarge`] when `end_day - start_day` exceeds
///   [`MAX_RANGE_DAYS`] days. The check uses the bounds as given, before
///   they are truncated to midnight.
pub fn intervals_for_each_day_in_range(
    intervals: &[UtcPeriod],
    start_day: DateTime<Utc>,
    end_day: DateTime<Utc>,
) -> Result<Vec<DayIntervals>> {
    if start_day > end_day {
        debug!(%start_day, %end_day, "rejecting day range: start after end");
        return Err(RangeError::StartAfterEnd {
            start: start_day,
            end: end_day,
        });
    }

    let requested = UtcPeriod::new(start_day, end_day);
    if requested.duration() > Duration::days(MAX_RANGE_DAYS) {
        debug!(%start_day, %end_day, "rejecting day range: too wide");
        return Err(RangeError::RangeTooLarge {
            start: start_day,
            end: end_day,
            requested: requested.duration_days(),
            max_days: MAX_RANGE_DAYS,
        });
    }

    let mut by_day = intervals_by_day(intervals);
    let mut days = Vec::new();
    let mut day = Some(normalize_date(start_day));
    while let Some(date) = day.filter(|d| *d <= end_day) {
        days.push(DayIntervals {
            date,
            index_since_first: days.len(),
            ordered_disjoint_intervals: by_day.remove(&date).unwrap_or_default(),
        });
        day = next_midnight(date);
    }

    debug!(days = days.len(), "materialized day range");
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// April 10th 2018 plus whole days and hours.
    fn dh(days: i64, hours: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 4, 10, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::hours(hours)
    }

    fn period(d_start: i64, h_start: i64, d_end: i64, h_end: i64) -> UtcPeriod {
        UtcPeriod::new(dh(d_start, h_start), dh(d_end, h_end))
    }

    fn until_end_of_day(d_start: i64, h_start: i64, d_end: i64) -> UtcPeriod {
        UtcPeriod::new(dh(d_start, h_start), dh(d_end, 0) - Duration::milliseconds(1))
    }

    #[test]
    fn same_day_period_is_kept_whole() {
        let days = intervals_by_day(&[period(0, 3, 0, 7)]);

        assert_eq!(days.len(), 1);
        assert_eq!(days[&dh(0, 0)], vec![period(0, 3, 0, 7)]);
    }

    #[test]
    fn overnight_period_is_split_at_midnight() {
        let days = intervals_by_day(&[period(0, 17, 1, 5)]);

        assert_eq!(days.len(), 2);
        assert_eq!(days[&dh(0, 0)], vec![until_end_of_day(0, 17, 1)]);
        assert_eq!(days[&dh(1, 0)], vec![period(1, 0, 1, 5)]);
    }

    #[test]
    fn multi_day_period_gets_full_days_in_between() {
        let days = intervals_by_day(&[period(2, 8, 4, 9)]);

        assert_eq!(days.len(), 3);
        assert_eq!(days[&dh(2, 0)], vec![until_end_of_day(2, 8, 3)]);
        assert_eq!(days[&dh(3, 0)], vec![until_end_of_day(3, 0, 4)]);
        assert_eq!(days[&dh(4, 0)], vec![period(4, 0, 4, 9)]);
    }

    #[test]
    fn period_ending_at_midnight_has_no_empty_tail() {
        let days = intervals_by_day(&[period(0, 17, 2, 0)]);

        assert_eq!(days.len(), 2);
        assert_eq!(days[&dh(0, 0)], vec![until_end_of_day(0, 17, 1)]);
        assert_eq!(days[&dh(1, 0)], vec![until_end_of_day(1, 0, 2)]);
    }

    #[test]
    fn pieces_keep_input_order_within_a_day() {
        let late = period(0, 13, 0, 15);
        let early = period(0, 8, 0, 9);
        let days = intervals_by_day(&[late, early]);

        assert_eq!(days[&dh(0, 0)], vec![late, early]);
    }

    #[test]
    fn pieces_stay_within_their_day() {
        let days = intervals_by_day(&[period(0, 3, 5, 1), period(1, 23, 2, 1)]);

        for (date, pieces) in &days {
            for piece in pieces {
                assert!(*date <= piece.start);
                assert!(piece.end <= *date + Duration::days(1) - Duration::milliseconds(1));
            }
        }
    }

    #[test]
    fn range_rejects_start_after_end() {
        let err = intervals_for_each_day_in_range(&[], dh(3, 0), dh(2, 0)).unwrap_err();

        assert_eq!(
            err,
            RangeError::StartAfterEnd {
                start: dh(3, 0),
                end: dh(2, 0)
            }
        );
    }

    #[test]
    fn range_accepts_a_single_day() {
        let days = intervals_for_each_day_in_range(&[], dh(0, 9), dh(0, 9)).unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, dh(0, 0));
        assert_eq!(days[0].index_since_first, 0);
        assert!(days[0].ordered_disjoint_intervals.is_empty());
    }

    #[test]
    fn range_limit_uses_raw_bounds() {
        // Exactly 365 days between the raw bounds is accepted and covers
        // 366 calendar days.
        let days = intervals_for_each_day_in_range(&[], dh(0, 12), dh(365, 12)).unwrap();
        assert_eq!(days.len(), 366);

        // One hour more is rejected even though the normalized days are the same.
        let err = intervals_for_each_day_in_range(&[], dh(0, 12), dh(365, 13)).unwrap_err();
        assert!(matches!(err, RangeError::RangeTooLarge { max_days: 365, .. }));
    }

    #[test]
    fn range_too_large_reports_requested_span() {
        let err = intervals_for_each_day_in_range(&[], dh(0, 0), dh(400, 0)).unwrap_err();

        match err {
            RangeError::RangeTooLarge { requested, .. } => {
                assert_eq!(requested, qtty::Days::new(400.0));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("365"));
    }

    #[test]
    fn range_ending_on_the_last_representable_instant() {
        let end_day = DateTime::<Utc>::MAX_UTC;
        let start_day = normalize_date(end_day) - Duration::days(2);

        let days = intervals_for_each_day_in_range(&[], start_day, end_day).unwrap();

        assert_eq!(days.len(), 3);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.index_since_first, i);
            assert_eq!(day.date, start_day + Duration::days(i as i64));
            assert_eq!(normalize_date(day.date), day.date);
        }
    }

    #[test]
    fn bucket_period_running_into_the_last_day() {
        let last_midnight = normalize_date(DateTime::<Utc>::MAX_UTC);
        let start = last_midnight - Duration::hours(30);
        let end = last_midnight + Duration::hours(5);

        let days = intervals_by_day(&[UtcPeriod::new(start, end)]);

        assert_eq!(days.len(), 3);
        assert_eq!(days[&last_midnight], vec![UtcPeriod::new(last_midnight, end)]);
    }
}
