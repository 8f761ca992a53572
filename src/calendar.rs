// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC calendar-day helpers.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Truncates `instant` to 00:00:00 UTC of its calendar day.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempslot::normalize_date;
///
/// let t = Utc.with_ymd_and_hms(2018, 4, 10, 17, 30, 0).unwrap();
/// assert_eq!(normalize_date(t), Utc.with_ymd_and_hms(2018, 4, 10, 0, 0, 0).unwrap());
/// ```
pub fn normalize_date(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// `true` when both instants fall on the same UTC calendar day.
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Last millisecond of the UTC day containing `instant`: the following
/// midnight minus one millisecond.
///
/// This is the `end` of every day piece produced by
/// [`intervals_by_day`](crate::intervals_by_day) that runs to the end of its
/// day.
pub fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    normalize_date(instant)
        .checked_add_signed(Duration::days(1) - Duration::milliseconds(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Midnight UTC of the day after `instant`, or `None` on the last day chrono
/// can represent.
pub(crate) fn next_midnight(instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    normalize_date(instant).checked_add_signed(Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalize_drops_time_of_day() {
        let t = Utc.with_ymd_and_hms(2018, 4, 10, 23, 59, 59).unwrap() + Duration::milliseconds(999);
        assert_eq!(
            normalize_date(t),
            Utc.with_ymd_and_hms(2018, 4, 10, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn normalize_is_idempotent_at_midnight() {
        let midnight = Utc.with_ymd_and_hms(2018, 4, 11, 0, 0, 0).unwrap();
        assert_eq!(normalize_date(midnight), midnight);
    }

    #[test]
    fn same_day_compares_calendar_dates() {
        let evening = Utc.with_ymd_and_hms(2018, 4, 10, 17, 0, 0).unwrap();
        let morning = Utc.with_ymd_and_hms(2018, 4, 10, 3, 0, 0).unwrap();
        let next = Utc.with_ymd_and_hms(2018, 4, 11, 0, 0, 0).unwrap();

        assert!(same_day(morning, evening));
        assert!(!same_day(evening, next));
        assert!(same_day(next - Duration::milliseconds(1), evening));
    }

    #[test]
    fn end_of_day_is_one_millisecond_before_midnight() {
        let t = Utc.with_ymd_and_hms(2018, 4, 10, 17, 0, 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 4, 11, 0, 0, 0).unwrap() - Duration::milliseconds(1);

        assert_eq!(end_of_day(t), expected);
        assert!(same_day(end_of_day(t), t));
    }

    #[test]
    fn next_midnight_crosses_month_and_year() {
        let t = Utc.with_ymd_and_hms(2018, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(
            next_midnight(t),
            Some(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn next_midnight_stops_at_the_last_day() {
        assert_eq!(next_midnight(DateTime::<Utc>::MAX_UTC), None);
    }

    #[test]
    fn end_of_day_on_the_last_day_keeps_the_sentinel() {
        let last = DateTime::<Utc>::MAX_UTC;
        let expected = normalize_date(last) + (Duration::days(1) - Duration::milliseconds(1));

        assert_eq!(end_of_day(last), expected);
        assert!(same_day(end_of_day(last), last));
    }
}
