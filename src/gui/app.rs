//! Room Schedule Main Application
//! Main window with control panel and timetable viewer.

use crate::gui::{ControlPanel, ControlPanelAction, TimetableView};
use egui::SidePanel;
use room_schedule::config::ViewerConfig;
use room_schedule::data::{load_catalog, CourseCatalog, LoadedCatalog, RoomKey};
use room_schedule::timetable::build_grid;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete(LoadedCatalog),
    Error(String),
}

/// Main application window.
pub struct RoomScheduleApp {
    config: ViewerConfig,
    catalog: Option<Arc<CourseCatalog>>,
    control_panel: ControlPanel,
    timetable_view: TimetableView,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl RoomScheduleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        let mut app = Self {
            config,
            catalog: None,
            control_panel: ControlPanel::new(),
            timetable_view: TimetableView::new(),
            load_rx: None,
            is_loading: false,
        };
        let path = app.config.csv_path.clone();
        app.start_loading(path);
        app
    }

    /// Load `path` in a background thread; the catalog replaces the current one when done.
    fn start_loading(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }

        self.timetable_view.clear();
        self.control_panel.csv_path = Some(path.clone());
        self.control_panel.loading = true;
        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let clean = self.config.clean_on_load;

        thread::spawn(move || {
            let result = match load_catalog(&path, clean) {
                Ok(loaded) => LoadResult::Complete(loaded),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(loaded)) => {
                let status = match loaded.report {
                    Some(report) => format!(
                        "Loaded {} of {} rows ({} online, {} incomplete removed)",
                        report.kept_rows,
                        report.raw_rows,
                        report.online_removed,
                        report.incomplete_removed
                    ),
                    None => format!("Loaded {} rows", loaded.raw_rows),
                };
                let catalog = Arc::new(loaded.catalog);
                self.control_panel
                    .update_buildings(catalog.buildings(), self.config.default_building.as_deref());
                self.catalog = Some(catalog);
                self.handle_building_changed();
                self.control_panel.set_status(&status);
                self.finish_loading();
            }
            Ok(LoadResult::Error(error)) => {
                tracing::error!(%error, "failed to load course CSV");
                self.catalog = None;
                self.control_panel.update_buildings(Vec::new(), None);
                self.control_panel.update_rooms(Vec::new());
                self.control_panel.set_error(&format!("Error: {}", error));
                self.finish_loading();
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => self.load_rx = Some(rx),
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.control_panel.set_error("Error: loader thread stopped");
                self.finish_loading();
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.loading = false;
    }

    /// Building selection changed - refresh the room list
    fn handle_building_changed(&mut self) {
        let rooms = self
            .catalog
            .as_ref()
            .map(|c| c.rooms_in(&self.control_panel.selection.building))
            .unwrap_or_default();
        self.control_panel.update_rooms(rooms);
    }

    /// Build a fresh grid for the selected room from the shared catalog
    fn handle_show_schedule(&mut self) {
        let Some(catalog) = self.catalog.clone() else {
            self.control_panel.set_error("No data loaded");
            return;
        };

        let selection = &self.control_panel.selection;
        let key = RoomKey::new(selection.room.clone(), selection.building.clone());
        let records = catalog.records_for_room(&key);

        if records.is_empty() {
            tracing::info!(room = %key, "no classes found");
            self.timetable_view.set_no_match(key);
            return;
        }

        match build_grid(records.iter().copied(), &self.config.grid) {
            Ok(grid) => {
                tracing::debug!(room = %key, classes = records.len(), "showing timetable");
                self.timetable_view.set_grid(key, grid);
            }
            Err(e) => {
                tracing::warn!(room = %key, error = %e, "timetable build failed");
                self.timetable_view.set_error(key, e.to_string());
            }
        }
    }
}

impl eframe::App for RoomScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::BuildingChanged => self.handle_building_changed(),
                        ControlPanelAction::ShowSchedule => self.handle_show_schedule(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.timetable_view.show(ui);
        });
    }
}
