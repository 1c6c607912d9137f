//! Contracts of the services the surrounding host application provides.
//!
//! All calls are synchronous and happen on the host's UI thread, so shared
//! handles are `Rc` and implementations use interior mutability where they
//! need it. Host calls are assumed to succeed; an implementation that can
//! fail internally logs and carries on.

use crate::{HotkeyBindings, NamePrompt};

use std::rc::Rc;

use serde_json::{Map, Value};

/// Handle of a hotkey action registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HotkeyId(pub u64);

/// Invoked by the host on every edge of a bound key; `true` means pressed.
pub type HotkeyCallback = Box<dyn Fn(bool)>;

/// Invoked by the host when a menu action is triggered.
pub type MenuCallback = Box<dyn FnMut()>;

/// Structured key/value save data owned by the host.
pub type SaveData = Map<String, Value>;

/// Invoked by the host when it saves or loads its save data.
pub type SaveCallback = Box<dyn FnMut(&mut SaveData, SaveMode)>;

/// Direction of a save callback invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// The host is writing its save data; callbacks add their state.
    Saving,
    /// The host has read its save data; callbacks restore their state.
    Loading,
}

/// Host-owned hotkey registry.
pub trait HotkeyRegistry {
    /// Register a hotkey action. `name` is the stable action name, `description`
    /// the human-readable label shown in the host's hotkey settings.
    fn register(&self, name: &str, description: &str, callback: HotkeyCallback) -> HotkeyId;

    /// Remove a hotkey action and its bindings. Its callback never fires again.
    fn unregister(&self, id: HotkeyId);

    /// Replace the key bindings of an action.
    fn load_bindings(&self, id: HotkeyId, bindings: &HotkeyBindings);

    /// Current key bindings of an action, as configured right now.
    fn save_bindings(&self, id: HotkeyId) -> HotkeyBindings;

    /// Change the human-readable label of an action.
    fn set_description(&self, id: HotkeyId, description: &str);
}

/// Host recording control.
pub trait ChapterRecorder {
    /// Insert a chapter marker into the active recording. Fire-and-forget.
    fn add_chapter(&self, name: &str);
}

/// Host translation lookup.
pub trait Translator {
    /// Display string for a symbolic key.
    fn text(&self, key: &str) -> String;
}

/// Host menu and lifecycle integration.
pub trait Frontend {
    /// Add an action to the host's tools menu.
    fn add_tools_menu_action(&self, label: &str, on_triggered: MenuCallback);

    /// Register a callback run on every save and load of the host save data.
    fn add_save_callback(&self, callback: SaveCallback);
}

/// Host services injected into the dialog and its entries.
#[derive(Clone)]
pub struct HostServices {
    /// Hotkey registry.
    pub hotkeys: Rc<dyn HotkeyRegistry>,
    /// Recording control for chapter markers.
    pub recorder: Rc<dyn ChapterRecorder>,
    /// Display string lookup.
    pub translator: Rc<dyn Translator>,
    /// Modal single-line text prompt.
    pub prompt: Rc<dyn NamePrompt>,
}
