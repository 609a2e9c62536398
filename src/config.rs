//! Viewer configuration loaded from `room_schedule.toml`.
//!
//! The file is optional; every field falls back to a default.
//!
//! ```toml
//! csv_path = "SP25_UIUC_courses.csv"
//! default_building = "Loomis Laboratory"
//! clean_on_load = true
//!
//! [grid]
//! alignment = "exact"        # or "snap_down"
//! duplicate_days = "repeat"  # or "collapse"
//! ```

use crate::timetable::GridOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "room_schedule.toml";
pub const DEFAULT_CSV_PATH: &str = "SP25_UIUC_courses.csv";
pub const DEFAULT_BUILDING: &str = "Loomis Laboratory";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Course CSV loaded on startup.
    pub csv_path: PathBuf,
    /// Building pre-selected when present in the data.
    pub default_building: Option<String>,
    /// Run the record cleaner over the CSV before building the catalog.
    pub clean_on_load: bool,
    pub grid: GridOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            default_building: Some(DEFAULT_BUILDING.to_string()),
            clean_on_load: true,
            grid: GridOptions::default(),
        }
    }
}

impl ViewerConfig {
    /// Load `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
