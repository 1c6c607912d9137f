//! Chapter Hotkeys Core Library
//!
//! Named chapter markers bound to host-managed keyboard shortcuts. Each
//! chapter owns one hotkey registration in the host's registry; pressing the
//! bound keys asks the host to insert a chapter marker into the active
//! recording. The list is persisted in the host's save data under
//! [`SAVE_KEY`].
//!
//! Every host service is a trait bundled in [`HostServices`] and injected
//! explicitly; nothing is reached through global state.
//!
//! # Example
//!
//! ```no_run
//! use chapter_hotkeys_core::{ChapterHotkeysPlugin, Frontend, HostServices};
//!
//! fn start(frontend: &dyn Frontend, services: HostServices) {
//!     let plugin = ChapterHotkeysPlugin::init(frontend, services);
//!     plugin.dialog().borrow_mut().add();
//! }
//! ```

mod dialog;
mod entry;
mod error;
mod host;
mod i18n;
mod model;
mod name_prompt;
mod plugin;
mod store;
mod view;

pub use {
    dialog::{ChapterHotkeyDialog, DialogState},
    entry::ChapterHotkeyEntry,
    error::{ChapterError, Result as CoreResult},
    host::{
        ChapterRecorder, Frontend, HostServices, HotkeyCallback, HotkeyId, HotkeyRegistry,
        MenuCallback, SaveCallback, SaveData, SaveMode, Translator,
    },
    i18n::{Locale, format_label, keys},
    model::{ChapterHotkey, ChapterId, HotkeyBindings},
    name_prompt::{NamePrompt, NameRequest, ask_for_name, trim_name},
    plugin::ChapterHotkeysPlugin,
    store::{SAVE_KEY, SavedHotkey, SavedHotkeys, read_from, write_into},
    view::{ChapterHotkeyRow, rows},
};

#[cfg(test)]
mod tests;
