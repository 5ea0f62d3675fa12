//! Tests for free-room lookups.

use chrono::NaiveTime;
use room_engine::{group_by_room, ExportRow, RoomKey, RoomQuery};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn row(building: &str, room: &str, day: &str, from: &str, to: &str) -> ExportRow {
    ExportRow {
        building: building.into(),
        room: room.into(),
        day: day.into(),
        free_from: from.into(),
        free_to: to.into(),
    }
}

fn table() -> Vec<ExportRow> {
    vec![
        row("A동", "301", "월", "0930", "2200"),
        row("B동", "201", "월", "0930", "1000"),
        row("B동", "201", "월", "1200", "2200"),
        row("B동", "202", "월", "1300", "2200"),
        row("B동", "201", "화", "0930", "2200"),
    ]
}

fn query(day: &str, from: NaiveTime, to: NaiveTime, building: Option<&str>) -> RoomQuery {
    RoomQuery {
        day: day.to_string(),
        from,
        to,
        building: building.map(String::from),
    }
}

#[test]
fn interval_must_cover_requested_span() {
    let table = table();
    let hits = query("월", t(12, 0), t(18, 0), None).apply(&table);

    let rooms: Vec<(&str, &str)> = hits
        .iter()
        .map(|r| (r.building.as_str(), r.room.as_str()))
        .collect();
    assert_eq!(rooms, vec![("A동", "301"), ("B동", "201")]);
}

#[test]
fn building_filter_narrows_results() {
    let table = table();
    let hits = query("월", t(13, 0), t(14, 0), Some("B동")).apply(&table);

    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|r| r.building == "B동"));
}

#[test]
fn other_days_never_match() {
    let table = table();
    assert!(query("수", t(9, 30), t(10, 0), None).apply(&table).is_empty());
}

#[test]
fn boundaries_are_inclusive() {
    let table = table();
    let hits = query("월", t(9, 30), t(10, 0), Some("B동")).apply(&table);
    assert_eq!(hits, vec![&table[1]]);
}

#[test]
fn unreadable_times_never_match() {
    let broken = vec![row("A동", "301", "월", "soon", "2200")];
    assert!(query("월", t(10, 0), t(11, 0), None).apply(&broken).is_empty());
}

#[test]
fn grouping_keeps_table_order_per_room() {
    let table = table();
    let grouped = group_by_room(table.iter().filter(|r| r.day == "월"));

    assert_eq!(grouped.len(), 3);
    assert_eq!(
        grouped[&RoomKey::new("B동", "201")],
        vec![
            ("0930".to_string(), "1000".to_string()),
            ("1200".to_string(), "2200".to_string()),
        ]
    );
}
