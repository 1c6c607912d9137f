//! Chapter hotkey list dialog.
//!
//! Holds the live entries in display order and the dialog's UI state
//! (visibility, selection, row being edited). Rendering is left to
//! [`crate::rows`].

use crate::{
    ChapterHotkeyEntry, ChapterId, HostServices, NameRequest, SavedHotkey, SavedHotkeys,
    ask_for_name, keys, trim_name,
};

use tracing::{debug, info, instrument};

/// Visibility of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Not shown.
    Hidden,
    /// Shown.
    Visible,
}

/// List of chapter hotkeys with add, remove, rename, load and save.
pub struct ChapterHotkeyDialog {
    services: HostServices,
    entries: Vec<ChapterHotkeyEntry>,
    selected: Option<ChapterId>,
    editing: Option<ChapterId>,
    state: DialogState,
}

impl ChapterHotkeyDialog {
    /// Empty, hidden dialog.
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            entries: Vec::new(),
            selected: None,
            editing: None,
            state: DialogState::Hidden,
        }
    }

    /// Show the dialog if hidden, hide it if shown.
    #[instrument(skip(self))]
    pub fn show_hide(&mut self) {
        self.state = match self.state {
            DialogState::Hidden => DialogState::Visible,
            DialogState::Visible => DialogState::Hidden,
        };
        debug!(state = ?self.state, "Dialog toggled");
    }

    /// Current visibility.
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[ChapterHotkeyEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the given id.
    pub fn entry(&self, id: &ChapterId) -> Option<&ChapterHotkeyEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Id of the selected entry.
    pub fn selected(&self) -> Option<&ChapterId> {
        self.selected.as_ref()
    }

    /// Id of the entry currently editable in place.
    pub fn editing(&self) -> Option<&ChapterId> {
        self.editing.as_ref()
    }

    /// Select an entry by id. Returns whether it exists.
    pub fn select(&mut self, id: &ChapterId) -> bool {
        let found = self.entry(id).is_some();
        self.selected = found.then(|| id.clone());
        found
    }

    /// Select the first entry, in display order, with the given name.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        self.selected = self
            .entries
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.id().clone());
        self.selected.is_some()
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Ask for a name and add a chapter with no bindings.
    ///
    /// Cancelling or entering a blank name leaves the list unchanged. Returns
    /// the id of the new chapter, which also becomes the selection.
    #[instrument(skip(self))]
    pub fn add(&mut self) -> Option<ChapterId> {
        let translator = &self.services.translator;
        let request = NameRequest::new(
            translator.text(keys::ADD_TITLE),
            translator.text(keys::ADD_TEXT),
        );

        let name = ask_for_name(self.services.prompt.as_ref(), &request)?;
        if name.is_empty() {
            debug!("Blank chapter name, nothing added");
            return None;
        }

        let id = ChapterId::generate();
        let entry = ChapterHotkeyEntry::new(id.clone(), &name, None, &self.services);
        self.entries.push(entry);
        self.sort();
        self.selected = Some(id.clone());

        info!(id = %id, chapter = %name, "Chapter hotkey added");

        Some(id)
    }

    /// Remove the selected chapter and release its hotkey.
    ///
    /// Returns `false` when nothing is selected.
    #[instrument(skip(self))]
    pub fn remove_selected(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            debug!("Nothing selected, nothing removed");
            return false;
        };

        let Some(index) = self.entries.iter().position(|e| e.id() == &id) else {
            return false;
        };

        let entry = self.entries.remove(index);
        let name = entry.name();
        drop(entry);

        if self.editing.as_ref() == Some(&id) {
            self.editing = None;
        }
        self.sort();

        info!(id = %id, chapter = %name, "Chapter hotkey removed");

        true
    }

    /// Make the selected row editable in place.
    ///
    /// Returns the current name to seed the editor, or `None` when nothing is
    /// selected.
    pub fn begin_rename(&mut self) -> Option<String> {
        let id = self.selected.clone()?;
        let name = self.entry(&id)?.name();
        self.editing = Some(id);
        Some(name)
    }

    /// End in-place editing. `Some` applies the trimmed name unless it is
    /// blank; `None` discards the edit. Returns whether a rename happened.
    #[instrument(skip(self))]
    pub fn finish_rename(&mut self, edited: Option<String>) -> bool {
        let Some(id) = self.editing.take() else {
            return false;
        };

        let Some(name) = edited.map(|n| trim_name(&n).to_string()) else {
            return false;
        };
        if name.is_empty() {
            debug!("Blank chapter name, rename discarded");
            return false;
        }

        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == &id) else {
            return false;
        };
        entry.rename(&name);
        self.sort();

        info!(id = %id, chapter = %name, "Chapter hotkey renamed");

        true
    }

    /// Rename the selected chapter through the name prompt, pre-filled with
    /// its current name.
    pub fn rename_selected(&mut self) -> bool {
        let Some(current) = self.begin_rename() else {
            return false;
        };

        let translator = &self.services.translator;
        let request = NameRequest::new(
            translator.text(keys::RENAME_TITLE),
            translator.text(keys::RENAME_TEXT),
        )
        .with_placeholder(current);

        let edited = ask_for_name(self.services.prompt.as_ref(), &request);
        self.finish_rename(edited)
    }

    /// Replace every entry with the chapters in `store`.
    #[instrument(skip(self, store), fields(count = store.len()))]
    pub fn load(&mut self, store: &SavedHotkeys) {
        // Old registrations go before new ones are made; ids may repeat.
        self.entries.clear();
        self.selected = None;
        self.editing = None;

        for (id, saved) in store.iter() {
            let entry = ChapterHotkeyEntry::new(
                id.clone(),
                &saved.name,
                Some(&saved.bindings),
                &self.services,
            );
            self.entries.push(entry);
        }
        self.sort();

        info!(count = self.entries.len(), "Chapter hotkeys loaded");
    }

    /// Snapshot every entry, with bindings read live from the host.
    #[instrument(skip(self))]
    pub fn save(&self) -> SavedHotkeys {
        let mut store = SavedHotkeys::new();

        for entry in &self.entries {
            let record = entry.record();
            store.insert(
                record.id,
                SavedHotkey {
                    name: record.name,
                    bindings: record.bindings,
                },
            );
        }

        debug!(count = store.len(), "Chapter hotkeys saved");

        store
    }

    fn sort(&mut self) {
        self.entries.sort_by_cached_key(|e| (e.name(), e.id().clone()));
    }
}
