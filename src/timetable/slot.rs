//! Time slots, day codes and 12-hour clock parsing.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use thiserror::Error;

/// Minutes per grid row.
pub const SLOT_MINUTES: u16 = 30;
/// First grid row starts at 07:00.
pub const GRID_START_MINUTES: u16 = 7 * 60;
/// Grid ends at 22:00 (exclusive).
pub const GRID_END_MINUTES: u16 = 22 * 60;
/// Number of rows in every grid.
pub const SLOTS_PER_DAY: usize = ((GRID_END_MINUTES - GRID_START_MINUTES) / SLOT_MINUTES) as usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("no time given")]
    Missing,
    #[error("expected '<start> - <end>', got {0:?}")]
    Range(String),
    #[error("invalid clock time {0:?}, expected H:MM followed by AM or PM")]
    Clock(String),
}

/// Weekday column of the timetable, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayCode {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayCode {
    pub const ALL: [DayCode; 7] = [
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
        DayCode::Friday,
        DayCode::Saturday,
        DayCode::Sunday,
    ];

    /// Parse one of `M T W R F S U`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(DayCode::Monday),
            'T' => Some(DayCode::Tuesday),
            'W' => Some(DayCode::Wednesday),
            'R' => Some(DayCode::Thursday),
            'F' => Some(DayCode::Friday),
            'S' => Some(DayCode::Saturday),
            'U' => Some(DayCode::Sunday),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            DayCode::Monday => 'M',
            DayCode::Tuesday => 'T',
            DayCode::Wednesday => 'W',
            DayCode::Thursday => 'R',
            DayCode::Friday => 'F',
            DayCode::Saturday => 'S',
            DayCode::Sunday => 'U',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DayCode::Monday => "Monday",
            DayCode::Tuesday => "Tuesday",
            DayCode::Wednesday => "Wednesday",
            DayCode::Thursday => "Thursday",
            DayCode::Friday => "Friday",
            DayCode::Saturday => "Saturday",
            DayCode::Sunday => "Sunday",
        }
    }

    /// Column index in [`DayCode::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A half-hour row start, stored as minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    minutes: u16,
}

impl TimeSlot {
    pub fn from_minutes(minutes: u16) -> Self {
        Self { minutes }
    }

    pub fn from_time(time: NaiveTime) -> Self {
        Self::from_minutes((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.minutes
    }

    /// The fixed grid rows, 07:00 through 21:30.
    pub fn grid() -> impl Iterator<Item = TimeSlot> {
        (GRID_START_MINUTES..GRID_END_MINUTES)
            .step_by(SLOT_MINUTES as usize)
            .map(TimeSlot::from_minutes)
    }

    /// Row index when this slot starts exactly on a grid row.
    pub fn row_index(self) -> Option<usize> {
        let offset = self.minutes.checked_sub(GRID_START_MINUTES)?;
        (self.minutes < GRID_END_MINUTES && offset % SLOT_MINUTES == 0)
            .then_some((offset / SLOT_MINUTES) as usize)
    }

    /// Index of the grid row containing this time.
    pub fn enclosing_row_index(self) -> Option<usize> {
        let offset = self.minutes.checked_sub(GRID_START_MINUTES)?;
        (self.minutes < GRID_END_MINUTES).then_some((offset / SLOT_MINUTES) as usize)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

/// Parse `"9:00AM"` / `"09:00PM"`. The AM/PM marker is case-sensitive.
pub fn parse_clock(text: &str) -> Result<NaiveTime, TimeParseError> {
    let invalid = || TimeParseError::Clock(text.to_string());
    let trimmed = text.trim();

    // %p accepts any case, so the marker is checked first.
    let clock = trimmed
        .strip_suffix("AM")
        .or_else(|| trimmed.strip_suffix("PM"))
        .ok_or_else(invalid)?;
    let (_, minute) = clock.split_once(':').ok_or_else(invalid)?;
    if minute.len() != 2 {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(trimmed, "%I:%M%p").map_err(|_| invalid())
}

/// A parsed `"<start> - <end>"` meeting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingTime {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl MeetingTime {
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let parts: Vec<&str> = text.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return Err(TimeParseError::Range(text.to_string()));
        };
        Ok(Self {
            start: parse_clock(start)?,
            end: parse_clock(end)?,
        })
    }

    /// Half-hour steps from the meeting's own start while before its end.
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        let start = TimeSlot::from_time(self.start).minutes();
        let end = TimeSlot::from_time(self.end).minutes();
        (start..end)
            .step_by(SLOT_MINUTES as usize)
            .map(TimeSlot::from_minutes)
    }
}
