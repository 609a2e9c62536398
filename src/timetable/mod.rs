//! Timetable module - time slots and weekly grid building

pub mod grid;
pub mod slot;

pub use grid::{build_grid, DuplicateDays, GridOptions, SlotAlignment, TimetableError, TimetableGrid, PLACEHOLDER};
pub use slot::{parse_clock, DayCode, MeetingTime, TimeParseError, TimeSlot, SLOTS_PER_DAY};
