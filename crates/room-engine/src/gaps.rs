//! Free-interval computation -- the complement of a room's bookings within the
//! daily operating window.
//!
//! Bookings are clipped to the window and sorted by start time, then swept
//! with a cursor that only ever moves forward (`cursor = max(cursor, end)`),
//! so overlapping, nested and duplicate bookings never produce spurious gaps.

use chrono::NaiveTime;

use crate::config::SchedulerConfig;
use crate::index::{AvailabilityIndex, BookedInterval, RoomKey};

/// A free time span of one room on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i64,
}

impl FreeInterval {
    fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// A free interval together with the room and day it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomFreeInterval {
    pub room: RoomKey,
    pub day: String,
    pub interval: FreeInterval,
}

/// Find the free spans of at least `min_free_minutes` within
/// `[window_start, window_end)`, given a day's bookings in any order.
///
/// Returns free intervals in chronological order.
pub fn find_gaps(
    booked: &[BookedInterval],
    window_start: NaiveTime,
    window_end: NaiveTime,
    min_free_minutes: i64,
) -> Vec<FreeInterval> {
    let mut intervals: Vec<(NaiveTime, NaiveTime)> = booked
        .iter()
        .filter(|b| b.start < window_end && b.end > window_start)
        .map(|b| (b.start.max(window_start), b.end.min(window_end)))
        .collect();
    // Stable, so equal starts keep insertion order and output is deterministic.
    intervals.sort_by_key(|&(start, _)| start);

    let mut gaps = Vec::new();
    let mut push_if_usable = |start: NaiveTime, end: NaiveTime| {
        let gap = FreeInterval::new(start, end);
        if gap.duration_minutes >= min_free_minutes {
            gaps.push(gap);
        }
    };

    let mut cursor = window_start;
    for (busy_start, busy_end) in intervals {
        if cursor < busy_start {
            push_if_usable(cursor, busy_start);
        }
        cursor = cursor.max(busy_end);
    }

    if cursor < window_end {
        push_if_usable(cursor, window_end);
    }

    gaps
}

/// Compute free intervals for every indexed room on every configured day.
///
/// A room with no bookings on a day is free for the whole operating window.
/// Days not listed in the configuration are not reported.
pub fn compute_free_intervals(
    index: &AvailabilityIndex,
    config: &SchedulerConfig,
) -> Vec<RoomFreeInterval> {
    let mut result = Vec::new();

    for room in index.rooms() {
        for day in &config.days {
            let gaps = find_gaps(
                index.bookings(room, day),
                config.operating_start,
                config.operating_end,
                config.min_free_minutes,
            );
            result.extend(gaps.into_iter().map(|interval| RoomFreeInterval {
                room: room.clone(),
                day: day.clone(),
                interval,
            }));
        }
    }

    result
}
