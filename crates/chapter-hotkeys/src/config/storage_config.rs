use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where chapter data lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the host save data, chapter hotkeys included.
    pub save_file: PathBuf,

    /// Text file that receives one line per chapter marker during `run`.
    pub chapter_log: PathBuf,
}
