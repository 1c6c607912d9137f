//! One invocation of the standalone host: the plugin wired to file-backed
//! services, plus the editing commands.

use crate::{
    AppError, AppResult,
    config::Config,
    host::{ChapterLog, GlobalHotkeyRegistry, SaveFile, hotkey_descriptor},
};

use std::{panic::Location, rc::Rc};

use chapter_hotkeys_core::{
    ChapterHotkeyDialog, ChapterHotkeysPlugin, ChapterId, HostServices, HotkeyBindings,
    HotkeyRegistry, NamePrompt,
};
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// The plugin running inside the standalone host.
pub struct Session {
    pub(crate) save_file: Rc<SaveFile>,
    pub(crate) registry: Rc<GlobalHotkeyRegistry>,
    pub(crate) plugin: ChapterHotkeysPlugin,
}

impl Session {
    /// Wire the plugin to the host services and load the save file.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn open(
        config: &Config,
        registry: GlobalHotkeyRegistry,
        prompt: Rc<dyn NamePrompt>,
    ) -> AppResult<Self> {
        let save_file = Rc::new(SaveFile::new(&config.storage.save_file));
        let registry = Rc::new(registry);

        let services = HostServices {
            hotkeys: registry.clone(),
            recorder: Rc::new(ChapterLog::new(&config.storage.chapter_log)),
            translator: Rc::new(config.locale()?),
            prompt,
        };

        let plugin = ChapterHotkeysPlugin::init(save_file.as_ref(), services);
        save_file.load()?;

        Ok(Self {
            save_file,
            registry,
            plugin,
        })
    }

    /// `(id, name, hotkeys)` of every chapter, in display order.
    pub fn list(&self) -> Vec<(ChapterId, String, Vec<String>)> {
        let dialog = self.plugin.dialog().borrow();
        dialog
            .entries()
            .iter()
            .map(|entry| {
                let hotkeys = entry
                    .bindings()
                    .descriptors()
                    .iter()
                    .map(|d| match d.get("hotkey").and_then(|h| h.as_str()) {
                        Some(hotkey) => hotkey.to_string(),
                        None => d.to_string(),
                    })
                    .collect();
                (entry.id().clone(), entry.name(), hotkeys)
            })
            .collect()
    }

    /// Add a chapter named through the prompt. `None` when nothing was added.
    #[track_caller]
    pub fn add(&self) -> AppResult<Option<ChapterId>> {
        let added = self.plugin.dialog().borrow_mut().add();
        if added.is_some() {
            self.save_file.save()?;
        }
        Ok(added)
    }

    /// Remove a chapter by id or name.
    #[track_caller]
    pub fn remove(&self, chapter: &str) -> AppResult<()> {
        {
            let mut dialog = self.plugin.dialog().borrow_mut();
            select(&mut dialog, chapter)?;
            dialog.remove_selected();
        }
        self.save_file.save()
    }

    /// Rename a chapter through the prompt. Returns whether it was renamed.
    #[track_caller]
    pub fn rename(&self, chapter: &str) -> AppResult<bool> {
        let renamed = {
            let mut dialog = self.plugin.dialog().borrow_mut();
            select(&mut dialog, chapter)?;
            dialog.rename_selected()
        };
        if renamed {
            self.save_file.save()?;
        }
        Ok(renamed)
    }

    /// Replace a chapter's bindings, as the host's hotkey settings would.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn bind(&self, chapter: &str, hotkeys: &[String]) -> AppResult<()> {
        let descriptors = hotkeys
            .iter()
            .map(|h| hotkey_descriptor(h))
            .collect::<AppResult<Vec<_>>>()?;

        {
            let mut dialog = self.plugin.dialog().borrow_mut();
            select(&mut dialog, chapter)?;
            let Some(entry) = dialog.selected().and_then(|id| dialog.entry(id)) else {
                return Err(not_found(chapter));
            };
            self.registry
                .load_bindings(entry.hotkey_id(), &HotkeyBindings::new(descriptors));
            info!(chapter = %entry.name(), "Hotkeys bound");
        }

        self.save_file.save()
    }
}

#[track_caller]
fn select(dialog: &mut ChapterHotkeyDialog, chapter: &str) -> AppResult<()> {
    if dialog.select(&ChapterId::from(chapter)) || dialog.select_by_name(chapter) {
        Ok(())
    } else {
        Err(not_found(chapter))
    }
}

#[track_caller]
fn not_found(chapter: &str) -> AppError {
    AppError::ChapterNotFound {
        chapter: chapter.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
