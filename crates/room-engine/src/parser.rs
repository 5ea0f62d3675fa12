//! Time/room description parsing.
//!
//! A lecture-time cell looks like `월[1~2] 09:00~10:15 수[3] 11:00~12:15 (B동201, B동202)`:
//! one or more day/time segments followed by a single trailing room list that
//! applies to every segment. Each segment becomes one [`TimeRoomToken`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::error::{Result, RoomError};

/// Rooms a single room list may name.
pub const MAX_ROOMS: usize = 2;

/// `<day>[<period index>] HH:MM~HH:MM`, the bracketed period index being optional.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<day>\p{L}+)\s*(?:\[\d+(?:~\d*)?\])?\s*",
        r"(?P<start>\d{2}:\d{2})\s*~\s*(?P<end>\d{2}:\d{2})",
    ))
    .expect("segment pattern is valid")
});

/// Trailing `(<room>, <room>)` group, from the first `(` to the final `)`,
/// so rooms like `B동201(실습실)` keep their inner parentheses.
static ROOM_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((?P<rooms>.+)\)\s*$").expect("room list pattern is valid")
});

/// One parsed day/time segment with the rooms it takes place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRoomToken {
    pub day: String,
    /// Start time exactly as written (`HH:MM`), validated later by the index builder.
    pub start_time: String,
    pub end_time: String,
    pub room_a: Option<String>,
    pub room_b: Option<String>,
}

/// Parse a raw description into one token per day/time segment.
///
/// Returns an empty list when the room list names an excluded category
/// (online, unassigned, private research room). A description without a room
/// list still yields its segments, with both room fields unset.
///
/// # Errors
/// Returns `RoomError::TooManyRooms` if the room list names more than
/// [`MAX_ROOMS`] rooms.
pub fn parse_description(
    description: &str,
    config: &SchedulerConfig,
) -> Result<Vec<TimeRoomToken>> {
    let description = description.trim();

    let mut tokens: Vec<TimeRoomToken> = SEGMENT
        .captures_iter(description)
        .map(|caps| TimeRoomToken {
            day: caps["day"].to_string(),
            start_time: caps["start"].to_string(),
            end_time: caps["end"].to_string(),
            room_a: None,
            room_b: None,
        })
        .collect();

    let Some(caps) = ROOM_LIST.captures(description) else {
        return Ok(tokens);
    };
    let room_list = caps["rooms"].trim();

    if config.is_excluded(room_list) {
        debug!(room_list, "excluded room category, dropping all segments");
        return Ok(Vec::new());
    }

    let (room_a, room_b) = split_rooms(room_list)?;
    for token in &mut tokens {
        token.room_a = room_a.clone();
        token.room_b = room_b.clone();
    }

    Ok(tokens)
}

/// Split a room list on commas into at most two trimmed, non-blank rooms.
fn split_rooms(room_list: &str) -> Result<(Option<String>, Option<String>)> {
    let entries: Vec<&str> = room_list.split(',').map(str::trim).collect();
    if entries.len() > MAX_ROOMS {
        return Err(RoomError::TooManyRooms {
            rooms: room_list.to_string(),
            count: entries.len(),
        });
    }

    let room = |i: usize| {
        entries
            .get(i)
            .filter(|r| !r.is_empty())
            .map(|r| r.to_string())
    };
    Ok((room(0), room(1)))
}
