//! Error types for room-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    /// A room-list segment named more than two rooms. Fatal for the batch.
    #[error("room list names {count} rooms, at most 2 allowed: ({rooms})")]
    TooManyRooms { rooms: String, count: usize },

    /// A fatal error raised while processing one source row.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<RoomError>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid raw rows: {0}")]
    InvalidRows(String),

    /// A persisted export table could not be read back.
    /// Includes the 1-based line number where the error was detected.
    #[error("Table parse error at line {line}: {message}")]
    InvalidTable { line: usize, message: String },

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, RoomError>;
