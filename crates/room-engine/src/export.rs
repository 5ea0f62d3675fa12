//! Flat table of free intervals, sorted and ready for persistence.
//!
//! Times are written as zero-padded 24-hour `HHMM` strings (`0930`, `2200`).
//! The CSV rendering here is pure; writing it anywhere is the caller's job.

use chrono::NaiveTime;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};
use crate::gaps::RoomFreeInterval;

/// Compact time format used in the exported table.
pub const TABLE_TIME_FORMAT: &str = "%H%M";

/// Column headers of the exported table, in order.
pub const HEADERS: [&str; 5] = ["Building", "Room Number", "Day", "Free From", "Free To"];

/// One row of the exported table.
///
/// The derived ordering is the table's sort order: building, room, day, then times.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Building")]
    pub building: String,
    #[serde(rename = "Room Number")]
    pub room: String,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Free From")]
    pub free_from: String,
    #[serde(rename = "Free To")]
    pub free_to: String,
}

impl From<&RoomFreeInterval> for ExportRow {
    fn from(free: &RoomFreeInterval) -> Self {
        Self {
            building: free.room.building.clone(),
            room: free.room.room.clone(),
            day: free.day.clone(),
            free_from: format_time(free.interval.start),
            free_to: format_time(free.interval.end),
        }
    }
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TABLE_TIME_FORMAT).to_string()
}

/// Parse a table or query time: `HHMM`, `HMM` (`930`) or `HH:MM`.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    let parsed = if raw.contains(':') {
        NaiveTime::parse_from_str(raw, "%H:%M")
    } else if raw.len() <= 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        NaiveTime::parse_from_str(&format!("{raw:0>4}"), TABLE_TIME_FORMAT)
    } else {
        return Err(RoomError::InvalidTime(raw.to_string()));
    };
    parsed.map_err(|_| RoomError::InvalidTime(raw.to_string()))
}

/// Flatten free intervals into table rows sorted by
/// (building, room, day, free_from, free_to).
pub fn export_rows(free: &[RoomFreeInterval]) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = free.iter().map(ExportRow::from).collect();
    rows.sort();
    rows
}

/// Render rows as CSV with a header line. An empty slice yields only the header.
///
/// # Errors
/// Returns `RoomError::Csv` if a row cannot be serialized.
pub fn to_csv(rows: &[ExportRow]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read back a table produced by [`to_csv`].
///
/// # Errors
/// Returns `RoomError::InvalidTable` if the header is missing or a record
/// does not have exactly five fields.
pub fn from_csv(text: &str) -> Result<Vec<ExportRow>> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());

    let headers = reader.headers().map_err(table_error)?;
    let found = headers.iter().map(|h| h.trim_start_matches('\u{feff}'));
    if !found.eq(HEADERS) {
        return Err(RoomError::InvalidTable {
            line: 1,
            message: format!("expected header {}", HEADERS.join(",")),
        });
    }

    reader
        .deserialize()
        .map(|record| record.map_err(table_error))
        .collect()
}

fn table_error(err: csv::Error) -> RoomError {
    let line = err.position().map_or(1, |p| p.line() as usize);
    RoomError::InvalidTable {
        line,
        message: err.to_string(),
    }
}
