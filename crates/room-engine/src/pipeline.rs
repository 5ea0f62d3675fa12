//! End-to-end computation: raw rows in, sorted free-room table out.

use tracing::info;

use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::expander::{expand_rows, RawScheduleRow};
use crate::export::{export_rows, ExportRow};
use crate::gaps::compute_free_intervals;
use crate::index::AvailabilityIndex;

/// Run every stage over `rows` and return the sorted table.
///
/// # Errors
/// Returns `RoomError::InvalidConfig` for an invalid configuration and
/// `RoomError::Row` for the first row whose room list is malformed.
pub fn find_empty_rooms(
    rows: &[RawScheduleRow],
    config: &SchedulerConfig,
) -> Result<Vec<ExportRow>> {
    config.validate()?;

    let records = expand_rows(rows, config)?;
    info!(rows = rows.len(), records = records.len(), "expanded time segments");

    let index = AvailabilityIndex::build(&records, config);
    info!(entries = index.len(), rooms = index.rooms().len(), "indexed bookings");

    let table = export_rows(&compute_free_intervals(&index, config));
    info!(rows = table.len(), "computed free intervals");
    Ok(table)
}
