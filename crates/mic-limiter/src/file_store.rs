//! TOML-backed settings store.
//!
//! One blob at a fixed per-user path, self-describing key/value encoding so
//! the schema can grow without a coordinated reader/writer version bump, and
//! atomic write operations.

use crate::{AppError, AppResult};

use mic_limiter_core::{CoreResult, LimiterError, LoadOutcome, Settings, SettingsStore};

use std::{fs, io::Write, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// File-backed [`SettingsStore`] holding one TOML blob.
pub(crate) struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Opens the store at the per-user config location, creating the config
    /// directory if needed.
    #[track_caller]
    #[instrument]
    pub(crate) fn open_default() -> AppResult<Self> {
        let proj_dirs =
            ProjectDirs::from("com", "mic-limiter", "Mic Limiter").ok_or_else(|| {
                AppError::ConfigDir {
                    reason: "Failed to resolve config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| AppError::ConfigDir {
                reason: format!("Failed to create config directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(Self::at(config_dir.join("settings.toml")))
    }

    /// Opens the store at an explicit path.
    pub(crate) fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for FileSettingsStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> LoadOutcome {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return LoadOutcome::Absent,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Failed to read settings blob");
                return LoadOutcome::Malformed;
            }
        };

        match toml::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!(path = ?self.path, "Settings loaded");
                LoadOutcome::Loaded(settings)
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Settings blob is malformed, will be regenerated");
                LoadOutcome::Malformed
            }
        }
    }

    /// Save settings using the atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames, so a concurrent
    /// reader never observes a partially written blob.
    fn save(&self, settings: &Settings) -> CoreResult<()> {
        let contents =
            toml::to_string_pretty(settings).map_err(|e| LimiterError::StorageFailed {
                reason: format!("Failed to serialize settings: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let temp_path = self.path.with_extension("toml.tmp");

        let mut temp_file =
            fs::File::create(&temp_path).map_err(|e| LimiterError::StorageFailed {
                reason: format!("Failed to create temp settings file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| LimiterError::StorageFailed {
                reason: format!("Failed to write temp settings file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| LimiterError::StorageFailed {
            reason: format!("Failed to sync temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| LimiterError::StorageFailed {
            reason: format!("Failed to rename temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(path = ?self.path, "Settings saved (atomic write)");

        Ok(())
    }
}
