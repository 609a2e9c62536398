//! Room Schedule - weekly timetable viewer for university rooms
//!
//! Loads a course CSV once, then shows the 07:00-22:00 week of any room.

mod gui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use gui::RoomScheduleApp;
use room_schedule::config::{ViewerConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Browse the weekly schedule of a room from a course CSV.
#[derive(Parser)]
#[command(name = "room-schedule", version)]
struct Cli {
    /// Course CSV to load (overrides the config file)
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Viewer config file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let mut config = ViewerConfig::load(&cli.config).context("loading viewer config")?;
    if let Some(csv) = cli.csv {
        config.csv_path = csv;
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Room Schedule Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Room Schedule Viewer",
        options,
        Box::new(|cc| Ok(Box::new(RoomScheduleApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
