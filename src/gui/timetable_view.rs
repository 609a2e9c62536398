//! Timetable Viewer Widget
//! Central panel showing the weekly grid for the selected room.

use egui::{Color32, RichText, ScrollArea};
use room_schedule::{RoomKey, TimetableGrid};

const ROW_HEIGHT: f32 = 22.0;
const MAX_TABLE_HEIGHT: f32 = 800.0;
const DAY_COLUMN_WIDTH: f32 = 150.0;

/// What the central panel currently shows.
enum ViewState {
    Prompt,
    NoMatch(RoomKey),
    Failed { key: RoomKey, message: String },
    Grid { key: RoomKey, grid: TimetableGrid },
}

/// Scrollable timetable display for one room.
pub struct TimetableView {
    state: ViewState,
}

impl Default for TimetableView {
    fn default() -> Self {
        Self {
            state: ViewState::Prompt,
        }
    }
}

impl TimetableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.state = ViewState::Prompt;
    }

    pub fn set_grid(&mut self, key: RoomKey, grid: TimetableGrid) {
        self.state = ViewState::Grid { key, grid };
    }

    pub fn set_no_match(&mut self, key: RoomKey) {
        self.state = ViewState::NoMatch(key);
    }

    pub fn set_error(&mut self, key: RoomKey, message: String) {
        self.state = ViewState::Failed { key, message };
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        match &self.state {
            ViewState::Prompt => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Select a building and room number, then press Show schedule.")
                            .size(16.0),
                    );
                });
            }
            ViewState::NoMatch(key) => {
                ui.label(
                    RichText::new(format!(
                        "⚠ No classes found for room {} in {}.",
                        key.room, key.building
                    ))
                    .size(16.0)
                    .color(Color32::from_rgb(255, 193, 7)),
                );
            }
            ViewState::Failed { key, message } => {
                ui.label(RichText::new(format!("Room {} – {}", key.room, key.building)).size(20.0).strong());
                ui.add_space(8.0);
                ui.label(
                    RichText::new(message)
                        .size(14.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            }
            ViewState::Grid { key, grid } => {
                ui.label(RichText::new(format!("Room {} – {}", key.room, key.building)).size(20.0).strong());
                ui.add_space(8.0);
                Self::draw_grid(ui, grid);
            }
        }
    }

    fn draw_grid(ui: &mut egui::Ui, grid: &TimetableGrid) {
        let height = MAX_TABLE_HEIGHT.min(ROW_HEIGHT * grid.slots().len() as f32 + 35.0);

        ScrollArea::both()
            .max_height(height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("timetable")
                    .striped(true)
                    .min_col_width(DAY_COLUMN_WIDTH)
                    .min_row_height(ROW_HEIGHT)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Time").strong());
                        for day in grid.days() {
                            ui.label(RichText::new(day.name()).strong());
                        }
                        ui.end_row();

                        for (slot, cells) in grid.rows() {
                            ui.label(RichText::new(slot.to_string()).monospace());
                            for text in cells {
                                ui.label(text);
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
