//! Row expansion -- turns one timetable row into one record per time segment.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::error::{Result, RoomError};
use crate::parser::{parse_description, TimeRoomToken};

/// One row of the lecture timetable as loaded from the spreadsheet export.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScheduleRow {
    /// Position of the row in its source, used in diagnostics.
    pub index: usize,
    /// The free-text time/room description.
    pub description: String,
    /// Every column of the row (course name, professor, ...), passed through untouched.
    pub fields: Map<String, Value>,
}

impl RawScheduleRow {
    /// Build a row from a JSON object, reading the description from `description_field`.
    ///
    /// Returns `None` if the description is missing, `null`, blank or not text.
    pub fn from_object(
        index: usize,
        fields: Map<String, Value>,
        description_field: &str,
    ) -> Option<Self> {
        let description = fields
            .get(description_field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|d| !d.is_empty())?
            .to_string();
        Some(Self {
            index,
            description,
            fields,
        })
    }
}

/// A raw row merged with exactly one parsed segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedRecord {
    /// Index of the source row.
    pub row: usize,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room_a: Option<String>,
    pub room_b: Option<String>,
}

impl ExpandedRecord {
    fn new(row: &RawScheduleRow, token: TimeRoomToken) -> Self {
        Self {
            row: row.index,
            fields: row.fields.clone(),
            day: token.day,
            start_time: token.start_time,
            end_time: token.end_time,
            room_a: token.room_a,
            room_b: token.room_b,
        }
    }

    /// The rooms this record occupies, skipping unset slots.
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        [self.room_a.as_deref(), self.room_b.as_deref()]
            .into_iter()
            .flatten()
    }
}

/// Parse a JSON array of row objects into raw rows.
///
/// Rows without a usable description are dropped, mirroring empty
/// lecture-time cells in the spreadsheet.
///
/// # Errors
/// Returns `RoomError::Json` on malformed JSON and `RoomError::InvalidRows` if
/// the document is not an array of objects.
pub fn rows_from_json(json: &str, config: &SchedulerConfig) -> Result<Vec<RawScheduleRow>> {
    let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
        return Err(RoomError::InvalidRows("expected a JSON array of rows".into()));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(RoomError::InvalidRows(format!("row {index} is not an object")));
        };
        match RawScheduleRow::from_object(index, fields, &config.description_field) {
            Some(row) => rows.push(row),
            None => debug!(
                row = index,
                field = %config.description_field,
                "no description, dropping row"
            ),
        }
    }
    Ok(rows)
}

/// Expand one row into a record per parsed segment.
///
/// # Errors
/// Propagates the parser's `RoomError::TooManyRooms`, wrapped in
/// `RoomError::Row` to name the offending row.
pub fn expand_row(row: &RawScheduleRow, config: &SchedulerConfig) -> Result<Vec<ExpandedRecord>> {
    let tokens = parse_description(&row.description, config).map_err(|e| RoomError::Row {
        row: row.index,
        source: Box::new(e),
    })?;
    Ok(tokens
        .into_iter()
        .map(|token| ExpandedRecord::new(row, token))
        .collect())
}

/// Expand every row, stopping at the first malformed one.
pub fn expand_rows(
    rows: &[RawScheduleRow],
    config: &SchedulerConfig,
) -> Result<Vec<ExpandedRecord>> {
    let mut records = Vec::new();
    for row in rows {
        records.extend(expand_row(row, config)?);
    }
    Ok(records)
}
