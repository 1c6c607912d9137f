//! Host save data kept in a JSON file.
//!
//! Loading runs every save callback in load mode with the file's contents;
//! saving starts from the file's current contents so keys owned by other
//! components survive, runs the callbacks in save mode and writes the result
//! atomically.

use crate::{AppError, AppResult};

use std::{
    cell::RefCell,
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use chapter_hotkeys_core::{Frontend, MenuCallback, SaveCallback, SaveData, SaveMode};
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// File-backed frontend: tools menu actions plus save callbacks.
pub struct SaveFile {
    path: PathBuf,
    menu_actions: RefCell<Vec<(String, MenuCallback)>>,
    save_callbacks: RefCell<Vec<SaveCallback>>,
}

impl SaveFile {
    /// Frontend persisting to `path`. Nothing is read until [`SaveFile::load`].
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            menu_actions: RefCell::new(Vec::new()),
            save_callbacks: RefCell::new(Vec::new()),
        }
    }

    /// Read the save file and hand it to every save callback.
    ///
    /// A missing file loads as empty save data.
    #[track_caller]
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn load(&self) -> AppResult<()> {
        let mut save_data = self.read()?;

        for callback in self.save_callbacks.borrow_mut().iter_mut() {
            callback(&mut save_data, SaveMode::Loading);
        }

        debug!(keys = save_data.len(), "Save data loaded");

        Ok(())
    }

    /// Collect state from every save callback and write the save file.
    #[track_caller]
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn save(&self) -> AppResult<()> {
        let mut save_data = self.read()?;

        for callback in self.save_callbacks.borrow_mut().iter_mut() {
            callback(&mut save_data, SaveMode::Saving);
        }

        self.write(&save_data)?;

        info!(keys = save_data.len(), "Save data written (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn read(&self) -> AppResult<SaveData> {
        if !self.path.exists() {
            return Ok(SaveData::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| AppError::SaveFileError {
            reason: format!("Failed to read save file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        serde_json::from_str(&contents).map_err(|e| AppError::SaveFileError {
            reason: format!("Failed to parse save file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn write(&self, save_data: &SaveData) -> AppResult<()> {
        let contents =
            serde_json::to_string_pretty(save_data).map_err(|e| AppError::SaveFileError {
                reason: format!("Failed to serialize save data: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("json.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::SaveFileError {
            reason: format!("Failed to create temp save file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .and_then(|_| temp_file.sync_all())
            .map_err(|e| AppError::SaveFileError {
                reason: format!("Failed to write temp save file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        fs::rename(&temp_path, &self.path).map_err(|e| AppError::SaveFileError {
            reason: format!("Failed to rename temp save file to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(())
    }
}

impl Frontend for SaveFile {
    fn add_tools_menu_action(&self, label: &str, on_triggered: MenuCallback) {
        // No menu bar in the standalone host; the action is kept but never shown.
        self.menu_actions
            .borrow_mut()
            .push((label.to_string(), on_triggered));
        debug!(label = %label, "Tools menu action added");
    }

    fn add_save_callback(&self, callback: SaveCallback) {
        self.save_callbacks.borrow_mut().push(callback);
    }
}
