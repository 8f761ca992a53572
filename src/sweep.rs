// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sweep-line interval arithmetic.
//!
//! Both public operations reduce to a single left-to-right pass over the
//! endpoints of every input interval:
//!
//! - [`subtract_blocked`] computes `⋃available \ ⋃blocked`.
//! - [`merge_non_overlapping`] is the same pass with nothing blocked.
//!
//! # Output
//!
//! The result is always *canonical*: sorted by start, pairwise disjoint with
//! a positive gap between neighbours, and free of zero-length entries.
//! Intervals that touch at a single instant are fused.
//!
//! # Endpoint order
//!
//! Endpoints are visited by ascending time and, on equal times, every `Open`
//! before any `Close`. An interval opening at `t` is therefore already
//! counted when another one closes at `t`, so `[1, 3)` and `[3, 5)` produce
//! `[1, 5)` rather than two pieces. The relative order of two endpoints with
//! the same time and side does not affect the result.

use super::{Interval, TimeInstant};
use tracing::{debug, trace};

// ═══════════════════════════════════════════════════════════════════════════
// Endpoint stream
// ═══════════════════════════════════════════════════════════════════════════

/// Role of the interval an endpoint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntervalKind {
    Available,
    Blocked,
}

/// Which side of its interval an endpoint is. `Open` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy)]
struct Endpoint<T: TimeInstant> {
    kind: IntervalKind,
    side: Side,
    time: T,
}

/// Tags every input interval with its role and returns both endpoints of
/// each, sorted by `(time, side)`.
///
/// Empty intervals (`start >= end`) contain no instant and contribute no
/// endpoints, so a zero-length block never splits a free run.
fn build_endpoints<T: TimeInstant>(
    available: &[Interval<T>],
    blocked: &[Interval<T>],
) -> Vec<Endpoint<T>> {
    let mut endpoints = Vec::with_capacity(2 * (available.len() + blocked.len()));

    let tagged = available
        .iter()
        .map(|interval| (IntervalKind::Available, interval))
        .chain(blocked.iter().map(|interval| (IntervalKind::Blocked, interval)));

    for (kind, interval) in tagged.filter(|(_, interval)| !interval.is_empty()) {
        endpoints.push(Endpoint {
            kind,
            side: Side::Open,
            time: interval.start,
        });
        endpoints.push(Endpoint {
            kind,
            side: Side::Close,
            time: interval.end,
        });
    }

    endpoints.sort_by(|a, b| a.time.cmp(&b.time).then(a.side.cmp(&b.side)));
    endpoints
}

// ═══════════════════════════════════════════════════════════════════════════
// Sweep state
// ═══════════════════════════════════════════════════════════════════════════

/// Number of currently open intervals of each kind.
///
/// Every close is preceded by the open of the same (non-empty) interval, so
/// neither count can drop below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OpenCounts {
    available: usize,
    blocked: usize,
}

impl OpenCounts {
    /// Counts after visiting `endpoint`.
    fn apply<T: TimeInstant>(self, endpoint: &Endpoint<T>) -> Self {
        let counter = match endpoint.kind {
            IntervalKind::Available => self.available,
            IntervalKind::Blocked => self.blocked,
        };
        let counter = match endpoint.side {
            Side::Open => counter + 1,
            Side::Close => counter - 1,
        };
        match endpoint.kind {
            IntervalKind::Available => Self {
                available: counter,
                ..self
            },
            IntervalKind::Blocked => Self {
                blocked: counter,
                ..self
            },
        }
    }

    /// The instant just after the current endpoint belongs to the output.
    #[inline]
    fn is_free(&self) -> bool {
        self.available > 0 && self.blocked == 0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Public operations
// ═══════════════════════════════════════════════════════════════════════════

/// Returns the parts of `available` not covered by any interval in `blocked`.
///
/// Neither input needs to be sorted or disjoint; duplicates and zero-length
/// entries are accepted. The output is canonical (see the [module
/// docs](self)). Runs in `O((n + m) log(n + m))` time.
///
/// # Examples
///
/// ```
/// use tempslot::{subtract_blocked, Interval};
///
/// let available = [Interval::new(9_i64, 17)];
/// let blocked = [Interval::new(12_i64, 13)];
///
/// assert_eq!(
///     subtract_blocked(&available, &blocked),
///     vec![Interval::new(9, 12), Interval::new(13, 17)]
/// );
/// ```
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(available = available.len(), blocked = blocked.len())
)]
pub fn subtract_blocked<T: TimeInstant>(
    available: &[Interval<T>],
    blocked: &[Interval<T>],
) -> Vec<Interval<T>> {
    if available.is_empty() {
        return Vec::new();
    }

    let mut free = Vec::new();
    let mut counts = OpenCounts::default();
    let mut candidate: Option<T> = None;

    for endpoint in build_endpoints(available, blocked) {
        let next = counts.apply(&endpoint);

        match (counts.is_free(), next.is_free()) {
            (true, false) => {
                // Simultaneous endpoints can close the candidate at the
                // instant it opened.
                if let Some(start) = candidate.take() {
                    if start < endpoint.time {
                        trace!(start = ?start, end = ?endpoint.time, "emit free interval");
                        free.push(Interval::new(start, endpoint.time));
                    }
                }
            }
            (false, true) => candidate = Some(endpoint.time),
            _ => {}
        }

        counts = next;
    }

    debug!(intervals = free.len(), "sweep finished");
    free
}

/// Merges possibly overlapping intervals into a canonical list.
///
/// Equivalent to [`subtract_blocked`] with nothing blocked.
///
/// # Examples
///
/// ```
/// use tempslot::{merge_non_overlapping, Interval};
///
/// let merged = merge_non_overlapping(&[
///     Interval::new(6_i64, 7),
///     Interval::new(2, 4),
///     Interval::new(1, 3),
///     Interval::new(5, 8),
/// ]);
/// assert_eq!(merged, vec![Interval::new(1, 4), Interval::new(5, 8)]);
/// ```
pub fn merge_non_overlapping<T: TimeInstant>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    subtract_blocked(intervals, &[])
}
