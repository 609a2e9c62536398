//! End-to-end: CSV on disk -> cleaner -> room filter -> timetable grid.

use room_schedule::data::{load_catalog, read_csv, write_csv, LoaderError, RecordCleaner, RoomKey};
use room_schedule::timetable::{build_grid, DayCode, GridOptions, TimeSlot, TimetableError, PLACEHOLDER};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "Class,Section,Instructor,Location,Day,Time";

fn write_courses(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn slot(h: u16, m: u16) -> TimeSlot {
    TimeSlot::from_minutes(h * 60 + m)
}

#[test]
fn test_single_course_end_to_end() {
    let file = write_courses(&[
        "CS 101,A,Smith,101 Loomis Laboratory,MWF,09:00AM - 09:50AM",
        "CS 225,AL1,Jones,1404 Siebel Center,TR,11:00AM - 12:15PM",
        "CS 199,ONL,Lee,ONLINE,MW,01:00PM - 01:50PM",
    ]);

    let loaded = load_catalog(file.path(), true).unwrap();
    assert_eq!(loaded.raw_rows, 3);
    assert_eq!(loaded.catalog.len(), 2);
    assert_eq!(
        loaded.catalog.buildings(),
        vec!["Loomis Laboratory".to_string(), "Siebel Center".to_string()]
    );

    let key = RoomKey::new("101", "Loomis Laboratory");
    let records = loaded.catalog.records_for_room(&key);
    let grid = build_grid(records, &GridOptions::default()).unwrap();

    assert_eq!(grid.slots().len(), 30);
    for (row, (slot_start, cells)) in grid.rows().enumerate() {
        for day in DayCode::ALL {
            let expected = matches!(slot_start.to_string().as_str(), "09:00" | "09:30")
                && matches!(day, DayCode::Monday | DayCode::Wednesday | DayCode::Friday);
            let text = &cells[day.index()];
            if expected {
                assert_eq!(text, "CS 101 A · Smith", "row {row} day {day}");
            } else {
                assert_eq!(text, PLACEHOLDER, "row {row} day {day}");
            }
        }
    }
}

#[test]
fn test_unknown_room_yields_no_records() {
    let file = write_courses(&["CS 101,A,Smith,101 Loomis Laboratory,MWF,09:00AM - 09:50AM"]);
    let loaded = load_catalog(file.path(), true).unwrap();
    assert!(loaded
        .catalog
        .records_for_room(&RoomKey::new("141", "Loomis Laboratory"))
        .is_empty());
}

#[test]
fn test_bad_time_fails_only_that_room() {
    let file = write_courses(&[
        "CS 101,A,Smith,101 Loomis Laboratory,MWF,9-10",
        "CS 225,AL1,Jones,1404 Siebel Center,TR,11:00AM - 12:15PM",
    ]);
    let loaded = load_catalog(file.path(), true).unwrap();
    let options = GridOptions::default();

    let broken = loaded
        .catalog
        .records_for_room(&RoomKey::new("101", "Loomis Laboratory"));
    assert!(matches!(
        build_grid(broken, &options),
        Err(TimetableError::TimeParse { row: 0, .. })
    ));

    let fine = loaded
        .catalog
        .records_for_room(&RoomKey::new("1404", "Siebel Center"));
    let grid = build_grid(fine, &options).unwrap();
    assert_eq!(grid.cell_at(slot(12, 0), DayCode::Thursday), Some("CS 225 AL1 · Jones"));
}

#[test]
fn test_raw_load_keeps_every_row() {
    let file = write_courses(&[
        "CS 101,A,Smith,101 Loomis Laboratory,MWF,09:00AM - 09:50AM",
        "CS 199,ONL,Lee,ONLINE,MW,01:00PM - 01:50PM",
        "CS 100,B,,N/A,,",
    ]);
    let loaded = load_catalog(file.path(), false).unwrap();
    assert!(loaded.report.is_none());
    assert_eq!(loaded.catalog.len(), 3);
}

#[test]
fn test_clean_then_write_round_trip() {
    let file = write_courses(&[
        "CS 101,A,Smith,  101 Loomis Laboratory ,MWF,09:00AM - 09:50AM",
        "CS 199,ONL,Lee,Online,MW,01:00PM - 01:50PM",
        "CS 100,B,n/a,2 NAB,na,10:00AM - 10:50AM",
        "CS 173,C,N/A,3 NAB,TR,10:00AM - 10:50AM",
    ]);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clean.csv");

    let raw = read_csv(file.path()).unwrap();
    let (cleaned, report) = RecordCleaner::clean_with_report(&raw).unwrap();
    write_csv(&cleaned, &out).unwrap();

    assert_eq!(report.raw_rows, 4);
    assert_eq!(report.kept_rows, 2);

    let loaded = load_catalog(&out, false).unwrap();
    let locations: Vec<_> = loaded
        .catalog
        .records()
        .iter()
        .map(|r| r.location.clone().unwrap_or_default())
        .collect();
    assert_eq!(locations, vec!["101 Loomis Laboratory", "3 NAB"]);
    assert_eq!(loaded.catalog.records()[1].instructor, None);

    // A cleaned file goes through the cleaner unchanged.
    let again = load_catalog(&out, true).unwrap();
    assert_eq!(again.report.map(|r| r.kept_rows), Some(2));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("SP25_UIUC_courses.csv");
    let err = load_catalog(&missing, true).unwrap_err();
    assert!(matches!(err, LoaderError::FileNotFound(_)));
    assert!(err.to_string().starts_with("Input file not found:"));
}
