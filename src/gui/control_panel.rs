//! Control Panel Widget
//! Left side panel with the data source, building/room selectors and status.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Current selection in the side panel.
#[derive(Default, Clone)]
pub struct Selection {
    pub building: String,
    pub room: String,
}

/// Left side control panel with file selection and room search controls.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub selection: Selection,
    pub buildings: Vec<String>,
    pub rooms: Vec<String>,
    pub status: String,
    pub is_error: bool,
    pub loading: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            selection: Selection::default(),
            buildings: Vec::new(),
            rooms: Vec::new(),
            status: "Ready".to_string(),
            is_error: false,
            loading: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the building list, selecting `preferred` when present, else the first.
    pub fn update_buildings(&mut self, buildings: Vec<String>, preferred: Option<&str>) {
        self.selection.building = preferred
            .and_then(|p| buildings.iter().find(|b| b.as_str() == p))
            .or_else(|| buildings.first())
            .cloned()
            .unwrap_or_default();
        self.buildings = buildings;
    }

    /// Replace the room list for the selected building, selecting the first.
    pub fn update_rooms(&mut self, rooms: Vec<String>) {
        self.selection.room = rooms.first().cloned().unwrap_or_default();
        self.rooms = rooms;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = true;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏫 Room Schedule")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.loading, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Search Section =====
        ui.label(RichText::new("🔍 Search").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 90.0;
        let combo_width = 180.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Building:"));
            ComboBox::from_id_salt("building")
                .width(combo_width)
                .selected_text(&self.selection.building)
                .show_ui(ui, |ui| {
                    for building in &self.buildings {
                        if ui
                            .selectable_label(self.selection.building == *building, building)
                            .clicked()
                            && self.selection.building != *building
                        {
                            self.selection.building = building.clone();
                            action = ControlPanelAction::BuildingChanged;
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Room number:"));
            ComboBox::from_id_salt("room")
                .width(combo_width)
                .selected_text(&self.selection.room)
                .show_ui(ui, |ui| {
                    for room in &self.rooms {
                        if ui.selectable_label(self.selection.room == *room, room).clicked() {
                            self.selection.room = room.clone();
                        }
                    }
                });
        });

        ui.add_space(15.0);

        ui.vertical_centered(|ui| {
            let enabled = !self.loading && !self.selection.room.is_empty();
            ui.add_enabled_ui(enabled, |ui| {
                let button = egui::Button::new(RichText::new("▶ Show schedule").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ShowSchedule;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        if self.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));
            });
        } else {
            let status_color = if self.is_error {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        }

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    BuildingChanged,
    ShowSchedule,
}
