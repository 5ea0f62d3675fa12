//! End-to-end tests: raw rows in, sorted table out.

use room_engine::{
    find_empty_rooms, rows_from_json, to_csv, ExportRow, RoomError, SchedulerConfig,
};

const ROWS: &str = r#"[
    {"교과목명": "자료구조", "강의시간": "월[1~2] 09:30~11:20 수[1~2] 09:30~11:20 (B동201)"},
    {"교과목명": "운영체제", "강의시간": "월[3~4] 11:00~12:50 (B동201, E동320)"},
    {"교과목명": "캡스톤디자인", "강의시간": "화[5~8] 13:30~17:20 (온라인)"},
    {"교과목명": "세미나", "강의시간": "목[1] 10:00~10:50 (H동101)"},
    {"교과목명": "미정", "강의시간": null}
]"#;

fn rows_for(table: &[ExportRow], building: &str, room: &str, day: &str) -> Vec<(String, String)> {
    table
        .iter()
        .filter(|r| r.building == building && r.room == room && r.day == day)
        .map(|r| (r.free_from.clone(), r.free_to.clone()))
        .collect()
}

fn pair(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
}

#[test]
fn lecture_rows_become_free_room_table() {
    let config = SchedulerConfig::default();
    let rows = rows_from_json(ROWS, &config).unwrap();
    let table = find_empty_rooms(&rows, &config).unwrap();

    // Two known rooms, six days each; E동320 has two gaps on Monday.
    assert_eq!(rows_for(&table, "B동", "201", "월"), vec![pair("1250", "2200")]);
    assert_eq!(rows_for(&table, "B동", "201", "수"), vec![pair("1120", "2200")]);
    assert_eq!(
        rows_for(&table, "E동", "320", "월"),
        vec![pair("0930", "1100"), pair("1250", "2200")]
    );
    assert_eq!(rows_for(&table, "B동", "201", "화"), vec![pair("0930", "2200")]);
    assert_eq!(table.len(), 13);
    assert!(table.iter().all(|r| r.building != "H동"));
}

#[test]
fn output_is_sorted_and_repeatable() {
    let config = SchedulerConfig::default();
    let rows = rows_from_json(ROWS, &config).unwrap();

    let first = find_empty_rooms(&rows, &config).unwrap();
    let second = find_empty_rooms(&rows, &config).unwrap();

    assert_eq!(to_csv(&first).unwrap(), to_csv(&second).unwrap());
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
}

#[test]
fn room_with_inner_parentheses_is_booked() {
    let config = SchedulerConfig::default();
    let rows = rows_from_json(
        r#"[{"강의시간": "월[1~2] 09:30~21:30 (B동201(실습실))"}]"#,
        &config,
    )
    .unwrap();

    let table = find_empty_rooms(&rows, &config).unwrap();

    // Booked until 21:30 on Monday leaves only 30 minutes; other days are free all day.
    assert_eq!(table.len(), 6);
    assert_eq!(
        rows_for(&table, "B동", "201(실습실)", "월"),
        vec![pair("2130", "2200")]
    );
}

#[test]
fn empty_input_gives_empty_table() {
    let config = SchedulerConfig::default();
    let table = find_empty_rooms(&[], &config).unwrap();
    assert!(table.is_empty());
}

#[test]
fn malformed_room_list_halts_the_batch() {
    let config = SchedulerConfig::default();
    let rows = rows_from_json(
        r#"[
            {"강의시간": "월[1] 09:00~09:50 (B동201)"},
            {"강의시간": "화[1] 09:00~09:50 (A동101, A동102, A동103)"}
        ]"#,
        &config,
    )
    .unwrap();

    let err = find_empty_rooms(&rows, &config).unwrap_err();
    assert!(matches!(err, RoomError::Row { row: 1, .. }));
}

#[test]
fn duplicate_days_are_rejected_before_computing() {
    let config = SchedulerConfig {
        days: vec!["월".to_string(), "월".to_string()],
        ..SchedulerConfig::default()
    };
    let rows = rows_from_json(ROWS, &SchedulerConfig::default()).unwrap();
    assert!(matches!(
        find_empty_rooms(&rows, &config),
        Err(RoomError::InvalidConfig(_))
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let config = SchedulerConfig {
        days: Vec::new(),
        ..SchedulerConfig::default()
    };
    assert!(matches!(
        find_empty_rooms(&[], &config),
        Err(RoomError::InvalidConfig(_))
    ));
}
