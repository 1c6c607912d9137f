use crate::{
    ChapterHotkey, ChapterId, ChapterRecorder, HostServices, HotkeyBindings, HotkeyId,
    HotkeyRegistry, Translator, format_label, keys,
};

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, info, instrument};

/// RAII guard that owns one host hotkey registration.
///
/// The registration is released exactly once, when the guard drops, whichever
/// way the owning entry goes away.
struct HotkeyRegistration {
    registry: Rc<dyn HotkeyRegistry>,
    id: HotkeyId,
}

impl Drop for HotkeyRegistration {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
        debug!(hotkey_id = self.id.0, "Hotkey unregistered");
    }
}

/// One chapter bound to one host hotkey action.
pub struct ChapterHotkeyEntry {
    id: ChapterId,
    // Shared with the hotkey callback so presses after a rename use the new name.
    name: Rc<RefCell<String>>,
    translator: Rc<dyn Translator>,
    registration: HotkeyRegistration,
}

impl ChapterHotkeyEntry {
    /// Register the hotkey action for a chapter and load its initial bindings.
    #[instrument(skip(id, services, bindings), fields(id = %id))]
    pub fn new(
        id: ChapterId,
        name: &str,
        bindings: Option<&HotkeyBindings>,
        services: &HostServices,
    ) -> Self {
        let shared_name = Rc::new(RefCell::new(name.to_string()));
        let label = hotkey_label(services.translator.as_ref(), name);

        let callback = {
            let name = Rc::clone(&shared_name);
            let recorder = Rc::clone(&services.recorder);
            Box::new(move |pressed: bool| {
                if pressed {
                    on_pressed(recorder.as_ref(), &name.borrow());
                }
            })
        };

        let hotkey_id = services.hotkeys.register(id.as_str(), &label, callback);

        if let Some(bindings) = bindings {
            services.hotkeys.load_bindings(hotkey_id, bindings);
        }

        debug!(hotkey_id = hotkey_id.0, "Hotkey registered");

        Self {
            id,
            name: shared_name,
            translator: Rc::clone(&services.translator),
            registration: HotkeyRegistration {
                registry: Rc::clone(&services.hotkeys),
                id: hotkey_id,
            },
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    /// Current chapter name.
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Handle of the host hotkey action.
    pub fn hotkey_id(&self) -> HotkeyId {
        self.registration.id
    }

    /// Bindings as currently configured in the host; never cached.
    pub fn bindings(&self) -> HotkeyBindings {
        self.registration.registry.save_bindings(self.registration.id)
    }

    /// Rename the chapter and relabel its host action.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn rename(&mut self, name: &str) {
        let label = hotkey_label(self.translator.as_ref(), name);

        *self.name.borrow_mut() = name.to_string();
        self.registration
            .registry
            .set_description(self.registration.id, &label);

        debug!(label = %label, "Chapter renamed");
    }

    /// Snapshot as a plain record, with live bindings.
    pub fn record(&self) -> ChapterHotkey {
        ChapterHotkey {
            id: self.id.clone(),
            name: self.name(),
            bindings: self.bindings(),
        }
    }
}

fn hotkey_label(translator: &dyn Translator, name: &str) -> String {
    format_label(&translator.text(keys::HOTKEY_NAME), name)
}

fn on_pressed(recorder: &dyn ChapterRecorder, name: &str) {
    recorder.add_chapter(name);
    info!(chapter = %name, "Chapter marker requested");
}
