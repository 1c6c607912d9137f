//! Persisted layout of the chapter list inside the host save data.
//!
//! ```json
//! "chapter_hotkeys": {
//!     "chapter_hotkey_<uuid>": { "name": "Intro", "bindings": [ ... ] }
//! }
//! ```

use crate::{ChapterId, CoreResult, HotkeyBindings, SaveData};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Key of the chapter list inside the host save data.
pub const SAVE_KEY: &str = "chapter_hotkeys";

/// One persisted chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SavedHotkey {
    /// Chapter name.
    pub name: String,
    /// Key bindings as produced by the host registry.
    pub bindings: HotkeyBindings,
}

impl SavedHotkey {
    /// Read one stored chapter field by field.
    ///
    /// A name that is not a string reads as empty and bindings that are not
    /// an array read as none, so one bad field never costs the whole chapter.
    fn from_value(id: &str, item: &Value) -> Self {
        let name = match item.get("name") {
            Some(Value::String(name)) => name.clone(),
            None => String::new(),
            Some(other) => {
                warn!(id = %id, found = %other, "Chapter name is not a string");
                String::new()
            }
        };

        let bindings = match item.get("bindings") {
            Some(Value::Array(descriptors)) => HotkeyBindings::new(descriptors.clone()),
            None => HotkeyBindings::empty(),
            Some(other) => {
                warn!(id = %id, found = %other, "Chapter bindings are not an array");
                HotkeyBindings::empty()
            }
        };

        Self { name, bindings }
    }
}

/// Persisted chapter list, keyed by chapter id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SavedHotkeys {
    entries: BTreeMap<ChapterId, SavedHotkey>,
}

impl SavedHotkeys {
    /// Store with no chapters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a chapter.
    pub fn insert(&mut self, id: ChapterId, hotkey: SavedHotkey) {
        self.entries.insert(id, hotkey);
    }

    /// Look up a chapter.
    pub fn get(&self, id: &ChapterId) -> Option<&SavedHotkey> {
        self.entries.get(id)
    }

    /// Iterate chapters in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ChapterId, &SavedHotkey)> {
        self.entries.iter()
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no chapters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every chapter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Write `store` under [`SAVE_KEY`], replacing anything there.
pub fn write_into(save_data: &mut SaveData, store: &SavedHotkeys) -> CoreResult<()> {
    save_data.insert(SAVE_KEY.to_string(), serde_json::to_value(store)?);
    Ok(())
}

/// Read the store under [`SAVE_KEY`]; `None` when the key is absent.
///
/// Only a value that is not an object is an error. Each chapter inside it is
/// read on its own and malformed fields fall back to empty.
#[track_caller]
pub fn read_from(save_data: &SaveData) -> CoreResult<Option<SavedHotkeys>> {
    let value = match save_data.get(SAVE_KEY) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let items = Map::<String, Value>::deserialize(value)?;

    let mut store = SavedHotkeys::new();
    for (id, item) in &items {
        store.insert(ChapterId::from(id.as_str()), SavedHotkey::from_value(id, item));
    }

    Ok(Some(store))
}
