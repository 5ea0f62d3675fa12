//! Per-room, per-day aggregation of booked intervals.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{SchedulerConfig, CLOCK_FORMAT};
use crate::expander::ExpandedRecord;

/// A physical room: building prefix plus the room number that follows it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomKey {
    pub building: String,
    pub room: String,
}

impl RoomKey {
    pub fn new(building: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            building: building.into(),
            room: room.into(),
        }
    }

    /// Split a room string such as `"B동201"` into building and number.
    ///
    /// Returns `None` when no configured building prefix matches or nothing
    /// remains after the prefix.
    pub fn resolve(room: &str, config: &SchedulerConfig) -> Option<Self> {
        let building = config.building_of(room)?;
        let number = room[building.len()..].trim();
        if number.is_empty() {
            return None;
        }
        Some(Self::new(building, number))
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.building, self.room)
    }
}

/// A half-open span `[start, end)` during which a room is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Booked intervals keyed by `(room, day)`, each list in insertion order.
///
/// Built once from the expanded records of a run and then only read.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    slots: BTreeMap<(RoomKey, String), Vec<BookedInterval>>,
}

impl AvailabilityIndex {
    /// Aggregate expanded records into booked intervals.
    ///
    /// Rooms with no known building prefix are skipped silently. A record whose
    /// times do not parse as `HH:MM`, or whose end is not after its start, is
    /// logged and skipped for that room only.
    pub fn build(records: &[ExpandedRecord], config: &SchedulerConfig) -> Self {
        let mut index = Self::default();

        for record in records {
            for room in record.rooms() {
                let Some(key) = RoomKey::resolve(room, config) else {
                    debug!(row = record.row, room, "unknown building, not indexed");
                    continue;
                };

                let Some(interval) = parse_interval(&record.start_time, &record.end_time) else {
                    warn!(
                        row = record.row,
                        room,
                        start = %record.start_time,
                        end = %record.end_time,
                        "malformed lecture time, skipping"
                    );
                    continue;
                };

                index.insert(key, &record.day, interval);
            }
        }

        index
    }

    /// Append a booking for `room` on `day`.
    pub fn insert(&mut self, room: RoomKey, day: &str, interval: BookedInterval) {
        self.slots
            .entry((room, day.to_string()))
            .or_default()
            .push(interval);
    }

    /// Bookings of `room` on `day`, in insertion order. Empty if there are none.
    pub fn bookings(&self, room: &RoomKey, day: &str) -> &[BookedInterval] {
        self.slots
            .get(&(room.clone(), day.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every indexed room, in ascending order, each listed once.
    pub fn rooms(&self) -> Vec<&RoomKey> {
        let mut rooms: Vec<&RoomKey> = self.slots.keys().map(|(room, _)| room).collect();
        rooms.dedup();
        rooms
    }

    /// Iterate over `((room, day), bookings)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RoomKey, &str, &[BookedInterval])> {
        self.slots
            .iter()
            .map(|((room, day), bookings)| (room, day.as_str(), bookings.as_slice()))
    }

    /// Number of `(room, day)` entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn parse_interval(start: &str, end: &str) -> Option<BookedInterval> {
    let start = NaiveTime::parse_from_str(start, CLOCK_FORMAT).ok()?;
    let end = NaiveTime::parse_from_str(end, CLOCK_FORMAT).ok()?;
    (start < end).then_some(BookedInterval { start, end })
}
