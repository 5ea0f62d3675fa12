//! Lookups over an exported free-room table.
//!
//! This is what the chatbot layer asks: "which rooms are free on 월 from
//! 09:30 to 18:00, optionally only in B동?"

use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::export::{parse_time, ExportRow};
use crate::index::RoomKey;

/// Rooms free on `day` for the whole of `[from, to]`, optionally in one building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomQuery {
    pub day: String,
    pub from: NaiveTime,
    pub to: NaiveTime,
    pub building: Option<String>,
}

impl RoomQuery {
    /// True if the row's free interval covers the requested span.
    ///
    /// Rows whose times cannot be read never match.
    pub fn matches(&self, row: &ExportRow) -> bool {
        if row.day != self.day {
            return false;
        }
        if self.building.as_ref().is_some_and(|b| *b != row.building) {
            return false;
        }
        match (parse_time(&row.free_from), parse_time(&row.free_to)) {
            (Ok(free_from), Ok(free_to)) => free_from <= self.from && free_to >= self.to,
            _ => false,
        }
    }

    /// Matching rows, in table order.
    pub fn apply<'a>(&self, rows: &'a [ExportRow]) -> Vec<&'a ExportRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

/// Group rows by room, keeping each room's `(free_from, free_to)` pairs in table order.
pub fn group_by_room<'a>(
    rows: impl IntoIterator<Item = &'a ExportRow>,
) -> BTreeMap<RoomKey, Vec<(String, String)>> {
    let mut grouped: BTreeMap<RoomKey, Vec<(String, String)>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(RoomKey::new(row.building.as_str(), row.room.as_str()))
            .or_default()
            .push((row.free_from.clone(), row.free_to.clone()));
    }
    grouped
}
