//! Room Schedule - course CSV cleaning and weekly room timetables
//!
//! The library holds the two pipeline stages (record cleaning and timetable
//! building) plus the glue both binaries share: CSV I/O, the room catalog and
//! viewer configuration.

pub mod config;
pub mod data;
pub mod timetable;

pub use data::{CleanReport, CourseCatalog, CourseRecord, RecordCleaner, RoomKey};
pub use timetable::{build_grid, DayCode, GridOptions, TimeSlot, TimetableGrid};
