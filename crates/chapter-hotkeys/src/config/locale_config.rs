use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display string configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale file layered over the built-in English strings (None = built-in only).
    #[serde(default)]
    pub path: Option<PathBuf>,
}
