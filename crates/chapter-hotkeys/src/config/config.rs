//! Configuration management for chapter-hotkeys.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{CHAPTER_LOG_NAME, LocaleConfig, SAVE_FILE_NAME, StorageConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use chapter_hotkeys_core::Locale;
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Save file and chapter log locations.
    pub storage: StorageConfig,
    /// Display string settings.
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Config {
    /// Load configuration from `path`, or from the platform config directory
    /// when no path is given, creating a default file if none exists.
    ///
    /// Defaults for an explicit path keep the data files next to it.
    #[track_caller]
    #[instrument]
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            let data_dir = match path {
                Some(p) => p.parent().map(Path::to_path_buf).unwrap_or_default(),
                None => Self::data_dir()?,
            };
            let config = Self::defaults_in(&data_dir);
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Parse the configuration file at `path`.
    #[track_caller]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Default configuration keeping all data files in `data_dir`.
    pub fn defaults_in(data_dir: &Path) -> Self {
        Config {
            storage: StorageConfig {
                save_file: data_dir.join(SAVE_FILE_NAME),
                chapter_log: data_dir.join(CHAPTER_LOG_NAME),
            },
            locale: LocaleConfig::default(),
        }
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Built-in strings, with the configured locale file layered on top.
    ///
    /// An unreadable or malformed locale file is logged and skipped.
    #[track_caller]
    pub fn locale(&self) -> AppResult<Locale> {
        let builtin = Locale::builtin()?;

        let Some(path) = &self.locale.path else {
            return Ok(builtin);
        };

        let overrides = fs::read_to_string(path)
            .map_err(AppError::from)
            .and_then(|source| Locale::parse(&source).map_err(AppError::from));

        match overrides {
            Ok(overrides) => {
                debug!(locale_path = ?path, "Locale loaded");
                Ok(builtin.merged(overrides))
            }
            Err(e) => {
                warn!(locale_path = ?path, error = ?e, "Using built-in strings");
                Ok(builtin)
            }
        }
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "chapter-hotkeys", "Chapter-Hotkeys").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn data_dir() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }
}
