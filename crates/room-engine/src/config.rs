//! Fixed constants of the free-room computation, bundled as one injectable value.
//!
//! The parser, the index builder and the gap calculator all take a
//! [`SchedulerConfig`] instead of reading global lists, so alternate operating
//! windows or building sets can be exercised without code changes.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};

/// Wall-clock format used for booked times and for the operating window.
pub const CLOCK_FORMAT: &str = "%H:%M";

const OPENING: NaiveTime = clock_time(9, 30);
const CLOSING: NaiveTime = clock_time(22, 0);

const fn clock_time(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid clock constant"),
    }
}

/// Configuration shared by every stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Start of the daily window in which rooms are schedulable at all.
    #[serde(with = "clock")]
    pub operating_start: NaiveTime,
    /// End of the daily window (exclusive).
    #[serde(with = "clock")]
    pub operating_end: NaiveTime,
    /// Gaps shorter than this are not reported.
    pub min_free_minutes: i64,
    /// Known building-name prefixes, matched longest-first against room strings.
    pub buildings: Vec<String>,
    /// Weekday symbols swept by the gap calculator, in output order.
    pub days: Vec<String>,
    /// A room list containing any of these marks the whole row as roomless.
    pub excluded_keywords: Vec<String>,
    /// Raw-row column holding the time/room description.
    pub description_field: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            operating_start: OPENING,
            operating_end: CLOSING,
            min_free_minutes: 30,
            buildings: to_strings(&[
                "A동", "B동", "C동", "D동", "E동", "F동", "G동", "종합", "TIP", "산융", "비즈",
            ]),
            days: to_strings(&["월", "화", "수", "목", "금", "토"]),
            excluded_keywords: to_strings(&["온라인", "미배정", "연구실"]),
            description_field: "강의시간".to_string(),
        }
    }
}

impl SchedulerConfig {
    /// Load a configuration from JSON. Fields not present keep their defaults.
    ///
    /// # Errors
    /// Returns `RoomError::Json` on malformed JSON and `RoomError::InvalidConfig`
    /// if the resulting configuration fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.operating_start >= self.operating_end {
            return Err(RoomError::InvalidConfig(format!(
                "operating window start {} is not before end {}",
                self.operating_start.format(CLOCK_FORMAT),
                self.operating_end.format(CLOCK_FORMAT)
            )));
        }
        if self.min_free_minutes < 0 {
            return Err(RoomError::InvalidConfig(format!(
                "minimum free duration must not be negative, got {}",
                self.min_free_minutes
            )));
        }
        if self.days.is_empty() {
            return Err(RoomError::InvalidConfig("no weekday symbols configured".into()));
        }
        let mut seen = HashSet::new();
        if let Some(day) = self.days.iter().find(|d| !seen.insert(d.as_str())) {
            return Err(RoomError::InvalidConfig(format!(
                "weekday symbol {day} listed more than once"
            )));
        }
        if self.buildings.iter().all(|b| b.is_empty()) {
            return Err(RoomError::InvalidConfig("no building prefixes configured".into()));
        }
        Ok(())
    }

    /// Resolve the building a room string belongs to by longest matching prefix.
    ///
    /// Returns `None` when no known prefix matches; such rooms are simply not indexed.
    pub fn building_of(&self, room: &str) -> Option<&str> {
        self.buildings
            .iter()
            .filter(|b| !b.is_empty() && room.starts_with(b.as_str()))
            .max_by_key(|b| b.len())
            .map(String::as_str)
    }

    /// True if the room-list text names an excluded category (online, unassigned, ...).
    pub fn is_excluded(&self, room_list: &str) -> bool {
        self.excluded_keywords
            .iter()
            .any(|k| !k.is_empty() && room_list.contains(k.as_str()))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `"HH:MM"` serde representation for [`NaiveTime`].
mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CLOCK_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(CLOCK_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, CLOCK_FORMAT).map_err(serde::de::Error::custom)
    }
}
