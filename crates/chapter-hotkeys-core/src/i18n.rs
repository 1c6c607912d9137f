//! Display strings.
//!
//! Locale files use the host's line format: one `Key="Value"` per line, `#`
//! and `;` start comments, and a later line for the same key wins. Keys are
//! taken verbatim, so `A.B` and `A.B.C` can both carry strings. Quoted values
//! are read as TOML basic strings, which covers the host's `\"` and `\n`
//! escapes.

use crate::{ChapterError, CoreResult, Translator};

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use toml::{Table, Value};
use tracing::debug;

/// Translation keys used by this component.
pub mod keys {
    /// Tools menu action label.
    pub const MENU_ACTION: &str = "ChapterHotkeys";
    /// Hotkey label template; `%1` is the chapter name.
    pub const HOTKEY_NAME: &str = "ChapterHotkey.Name";
    /// Add prompt title.
    pub const ADD_TITLE: &str = "ChapterHotkey.AddDialog.Title";
    /// Add prompt text.
    pub const ADD_TEXT: &str = "ChapterHotkey.AddDialog.Text";
    /// Rename prompt title.
    pub const RENAME_TITLE: &str = "ChapterHotkey.RenameDialog.Title";
    /// Rename prompt text.
    pub const RENAME_TEXT: &str = "ChapterHotkey.RenameDialog.Text";
}

const EN_US: &str = include_str!("locale/en-US.ini");

/// Substitution slot in templates.
const SLOT: &str = "%1";

/// Fill the `%1` slot of a template with a chapter name.
pub fn format_label(template: &str, name: &str) -> String {
    template.replace(SLOT, name)
}

/// Flat table of display strings.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    strings: HashMap<String, String>,
}

impl Locale {
    /// Built-in `en-US` strings.
    #[track_caller]
    pub fn builtin() -> CoreResult<Self> {
        Self::parse(EN_US)
    }

    /// Parse a locale file.
    ///
    /// Lines without `=` are skipped; a quoted value that does not close is
    /// an error naming the line.
    #[track_caller]
    pub fn parse(source: &str) -> CoreResult<Self> {
        let mut strings = HashMap::new();

        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let Some((key, raw)) = line.split_once('=') else {
                debug!(line = index + 1, "Skipping locale line without '='");
                continue;
            };

            let value = parse_value(raw.trim()).map_err(|reason| ChapterError::LocaleInvalid {
                reason: format!("line {}: {}", index + 1, reason),
                location: ErrorLocation::from(Location::caller()),
            })?;

            strings.insert(key.trim().to_string(), value);
        }

        debug!(count = strings.len(), "Locale parsed");

        Ok(Self { strings })
    }

    /// Layer `overrides` on top of these strings.
    pub fn merged(mut self, overrides: Locale) -> Self {
        self.strings.extend(overrides.strings);
        self
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

impl Translator for Locale {
    fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

const VALUE_SLOT: &str = "value";

/// Unquoted values are taken as written.
fn parse_value(raw: &str) -> Result<String, String> {
    if !raw.starts_with('"') {
        return Ok(raw.to_string());
    }

    let mut table: Table =
        toml::from_str(&format!("{VALUE_SLOT} = {raw}")).map_err(|e| e.to_string())?;

    match table.remove(VALUE_SLOT) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(format!("not a string: {raw}")),
    }
}
