use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Chapter hotkey errors with source location tracking.
#[derive(Error, Debug)]
pub enum ChapterError {
    /// The `chapter_hotkeys` sub-object of the host save data is malformed.
    #[error("Invalid chapter hotkey save data: {source} {location}")]
    SaveDataInvalid {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A locale file could not be parsed.
    #[error("Invalid locale: {reason} {location}")]
    LocaleInvalid {
        /// Description of the parse failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for ChapterError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ChapterError::SaveDataInvalid {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`ChapterError`].
pub type Result<T> = std::result::Result<T, ChapterError>;
