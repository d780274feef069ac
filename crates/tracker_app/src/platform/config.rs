use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracker_logging::{tracker_info, tracker_warn};

use super::logging::{LogDestination, LogLevel};

pub const CONFIG_FILENAME: &str = "job_tracker.ron";

/// Session configuration, read from `job_tracker.ron` in the working directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding one file per storage key.
    pub storage_dir: PathBuf,
    /// External catalog; the embedded demo catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
    pub saved_jobs_key: String,
    pub preferences_key: String,
    /// Per-value byte limit for the file store.
    pub storage_quota_bytes: Option<usize>,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    /// Path the session opens on start.
    pub initial_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./.job_tracker"),
            catalog_path: None,
            saved_jobs_key: "jobTrackerSavedJobs".to_string(),
            preferences_key: "jobTrackerPreferences".to_string(),
            storage_quota_bytes: None,
            log_destination: LogDestination::File,
            log_level: LogLevel::Info,
            initial_path: "/".to_string(),
        }
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Missing file yields defaults; a malformed one is reported and ignored.
    ///
    /// Runs before the logger exists, so problems are returned as a warning
    /// for the caller to log once logging is up.
    pub fn load(path: &Path) -> (Self, Option<String>) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return (Self::default(), None);
            }
            Err(err) => {
                return (
                    Self::default(),
                    Some(format!("Failed to read config {:?}: {}", path, err)),
                );
            }
        };

        match Self::parse(&text) {
            Ok(config) => (config, None),
            Err(err) => (
                Self::default(),
                Some(format!("Failed to parse config {:?}: {}", path, err)),
            ),
        }
    }

    pub fn log_summary(&self, warning: Option<&str>) {
        if let Some(warning) = warning {
            tracker_warn!("{}; using defaults", warning);
        }
        tracker_info!(
            "Config: storage_dir={:?} catalog={:?} initial_path={}",
            self.storage_dir,
            self.catalog_path,
            self.initial_path
        );
    }
}
