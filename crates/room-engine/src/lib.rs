//! # room-engine
//!
//! Computes when each classroom is free, starting from raw lecture-timetable rows.
//!
//! Each row carries a description such as `월[1~2] 09:00~10:15 (B동201, B동202)`.
//! The engine parses it into day/time segments, aggregates bookings per room
//! and day, and complements them against the daily operating window
//! (09:30-22:00 by default), keeping gaps of at least 30 minutes.
//!
//! ## Quick start
//!
//! ```rust
//! use room_engine::{find_empty_rooms, rows_from_json, SchedulerConfig};
//!
//! let config = SchedulerConfig::default();
//! let rows = rows_from_json(
//!     r#"[{"교과목명": "자료구조", "강의시간": "월[1~2] 09:30~12:00 (B동201)"}]"#,
//!     &config,
//! ).unwrap();
//! let table = find_empty_rooms(&rows, &config).unwrap();
//!
//! // Monday: free after the lecture; the other five days: free all day.
//! assert_eq!(table.len(), 6);
//! assert_eq!(table[0].day, "금");
//! let monday = table.iter().find(|r| r.day == "월").unwrap();
//! assert_eq!((monday.free_from.as_str(), monday.free_to.as_str()), ("1200", "2200"));
//! ```
//!
//! ## Modules
//!
//! - [`config`] -- operating window, building prefixes, weekdays, exclusion keywords
//! - [`parser`] -- description string → time/room tokens
//! - [`expander`] -- raw row → one record per time segment
//! - [`index`] -- records → booked intervals per (room, day)
//! - [`gaps`] -- booked intervals → free intervals within the operating window
//! - [`export`] -- free intervals → sorted `HHMM` table, CSV rendering
//! - [`query`] -- day/time/building lookups over an exported table
//! - [`pipeline`] -- all of the above in one call
//! - [`error`] -- Error types

pub mod config;
pub mod error;
pub mod expander;
pub mod export;
pub mod gaps;
pub mod index;
pub mod parser;
pub mod pipeline;
pub mod query;

pub use config::SchedulerConfig;
pub use error::RoomError;
pub use expander::{expand_row, expand_rows, rows_from_json, ExpandedRecord, RawScheduleRow};
pub use export::{export_rows, from_csv, to_csv, ExportRow};
pub use gaps::{compute_free_intervals, find_gaps, FreeInterval, RoomFreeInterval};
pub use index::{AvailabilityIndex, BookedInterval, RoomKey};
pub use parser::{parse_description, TimeRoomToken};
pub use pipeline::find_empty_rooms;
pub use query::{group_by_room, RoomQuery};
