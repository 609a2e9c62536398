//! Timetable Builder Module
//! Expands course meetings into a fixed 30-row by 7-day weekly grid.

use crate::data::record::CourseRecord;
use crate::timetable::slot::{DayCode, MeetingTime, TimeParseError, TimeSlot, SLOTS_PER_DAY};
use serde::Deserialize;
use thiserror::Error;

/// Text shown in a cell no class occupies.
pub const PLACEHOLDER: &str = " ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Could not parse time for record {row}: {source}")]
    TimeParse {
        row: usize,
        #[source]
        source: TimeParseError,
    },
}

/// How meeting slots are placed on grid rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotAlignment {
    /// Slots step from the meeting's own start; only those landing on a row are shown.
    #[default]
    Exact,
    /// Each slot is placed on the row that contains it.
    SnapDown,
}

/// What to do with a day letter repeated within one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateDays {
    /// One label line per letter occurrence.
    #[default]
    Repeat,
    /// Each day at most once per record.
    Collapse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub alignment: SlotAlignment,
    pub duplicate_days: DuplicateDays,
}

/// Weekly timetable for one room: rows are [`TimeSlot::grid`], columns [`DayCode::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableGrid {
    slots: Vec<TimeSlot>,
    cells: Vec<[String; 7]>,
}

impl TimetableGrid {
    fn empty() -> Self {
        Self {
            slots: TimeSlot::grid().collect(),
            cells: vec![Default::default(); SLOTS_PER_DAY],
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn days(&self) -> &'static [DayCode; 7] {
        &DayCode::ALL
    }

    /// Cell text at `row` (0 = 07:00) for `day`.
    pub fn cell(&self, row: usize, day: DayCode) -> Option<&str> {
        self.cells.get(row).map(|r| r[day.index()].as_str())
    }

    /// Cell text for a slot label, `None` when the slot is not a grid row.
    pub fn cell_at(&self, slot: TimeSlot, day: DayCode) -> Option<&str> {
        self.cell(slot.row_index()?, day)
    }

    pub fn is_free(&self, row: usize, day: DayCode) -> bool {
        self.cell(row, day).is_some_and(|text| text == PLACEHOLDER)
    }

    /// `(slot, cells)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (TimeSlot, &[String; 7])> {
        self.slots.iter().copied().zip(self.cells.iter())
    }

    /// Every `(slot, day, text)` that is not a placeholder.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (TimeSlot, DayCode, &str)> {
        self.rows().flat_map(|(slot, cells)| {
            DayCode::ALL
                .into_iter()
                .zip(cells.iter())
                .filter(|(_, text)| text.as_str() != PLACEHOLDER)
                .map(move |(day, text)| (slot, day, text.as_str()))
        })
    }
}

/// Build the grid for records already filtered to one room.
///
/// Any record whose Time cannot be parsed aborts the whole build. Meetings
/// outside 07:00-22:00 and unknown day letters are left off the grid.
pub fn build_grid<'a, I>(records: I, options: &GridOptions) -> Result<TimetableGrid, TimetableError>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut grid = TimetableGrid::empty();
    let mut placed = 0usize;

    for (row, record) in records.into_iter().enumerate() {
        let label = record.label();
        let meeting = record
            .time
            .as_deref()
            .ok_or(TimeParseError::Missing)
            .and_then(MeetingTime::parse)
            .map_err(|source| TimetableError::TimeParse { row, source })?;

        let days = meeting_days(record.day.as_deref().unwrap_or_default(), options.duplicate_days);
        for day in days {
            for slot in meeting.slots() {
                let target = match options.alignment {
                    SlotAlignment::Exact => slot.row_index(),
                    SlotAlignment::SnapDown => slot.enclosing_row_index(),
                };
                let Some(target) = target else {
                    continue;
                };
                let cell = &mut grid.cells[target][day.index()];
                cell.push_str(&label);
                cell.push('\n');
                placed += 1;
            }
        }
    }

    for cell in grid.cells.iter_mut().flat_map(|r| r.iter_mut()) {
        if cell.is_empty() {
            cell.push_str(PLACEHOLDER);
        } else {
            let trimmed = cell.trim_end_matches('\n').len();
            cell.truncate(trimmed);
        }
    }

    tracing::debug!(labels = placed, "built timetable grid");
    Ok(grid)
}

fn meeting_days(letters: &str, duplicates: DuplicateDays) -> Vec<DayCode> {
    let mut days = Vec::new();
    for letter in letters.chars().filter(|c| !c.is_whitespace()) {
        let Some(day) = DayCode::from_letter(letter) else {
            tracing::warn!(%letter, day = letters, "skipping unknown day letter");
            continue;
        };
        if duplicates == DuplicateDays::Collapse && days.contains(&day) {
            continue;
        }
        days.push(day);
    }
    days
}
