//! GUI module - User interface components

mod app;
mod control_panel;
mod timetable_view;

pub use app::RoomScheduleApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use timetable_view::TimetableView;
