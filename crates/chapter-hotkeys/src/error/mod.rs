use chapter_hotkeys_core::ChapterError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the chapter-hotkeys binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from chapter-hotkeys-core.
    #[error("Chapter hotkey error: {source} {location}")]
    Chapter {
        /// The underlying chapter error.
        #[source]
        source: ChapterError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to create the hotkey manager.
    #[error("Hotkey registration failed: {reason} {location}")]
    HotkeyRegistrationFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// A hotkey given on the command line could not be parsed.
    #[error("Invalid hotkey {hotkey:?}: {reason} {location}")]
    InvalidHotkey {
        /// The hotkey as typed.
        hotkey: String,
        /// Parser message.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// No chapter matches the given id or name.
    #[error("No chapter matches {chapter:?} {location}")]
    ChapterNotFound {
        /// The id or name that was looked up.
        chapter: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Save file reading or writing error.
    #[error("Save file error: {reason} {location}")]
    SaveFileError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<ChapterError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<ChapterError> for AppError {
    #[track_caller]
    fn from(source: ChapterError) -> Self {
        AppError::Chapter {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
