//! Hotkey registry backed by `global-hotkey`.
//!
//! Binding descriptors have the form `{ "hotkey": "ctrl+shift+KeyM" }`. They
//! are stored verbatim so a save returns exactly what was loaded; descriptors
//! that do not parse are kept but never trigger.
//!
//! Several actions may share a key. The OS registration is made by the first
//! action to hold it and released by the last.

use crate::{AppError, AppResult};

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    panic::Location,
    rc::Rc,
    str::FromStr,
};

use chapter_hotkeys_core::{HotkeyBindings, HotkeyCallback, HotkeyId, HotkeyRegistry};
use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

const DESCRIPTOR_KEY: &str = "hotkey";

struct Action {
    name: String,
    description: String,
    callback: Rc<dyn Fn(bool)>,
    descriptors: HotkeyBindings,
    hotkeys: Vec<HotKey>,
}

/// Hotkey registry for the standalone host.
///
/// Without a [`GlobalHotKeyManager`] (offline) bindings are only stored,
/// which is all the editing commands need.
pub struct GlobalHotkeyRegistry {
    manager: Option<GlobalHotKeyManager>,
    next_id: Cell<u64>,
    actions: RefCell<BTreeMap<HotkeyId, Action>>,
}

impl GlobalHotkeyRegistry {
    /// Registry that stores bindings without touching the OS.
    pub fn offline() -> Self {
        Self {
            manager: None,
            next_id: Cell::new(0),
            actions: RefCell::new(BTreeMap::new()),
        }
    }

    /// Registry that registers bindings as system-wide hotkeys.
    ///
    /// Must be called on the thread that runs the event loop.
    #[track_caller]
    #[instrument]
    pub fn online() -> AppResult<Self> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Global hotkey manager created");

        Ok(Self {
            manager: Some(manager),
            ..Self::offline()
        })
    }

    /// Route an OS hotkey event to the actions bound to it.
    ///
    /// Callbacks run after the action table is released, so they may call
    /// back into the registry. Returns whether any action matched.
    pub fn dispatch(&self, event: &GlobalHotKeyEvent) -> bool {
        let pressed = matches!(event.state, HotKeyState::Pressed);

        let callbacks: Vec<Rc<dyn Fn(bool)>> = self
            .actions
            .borrow()
            .values()
            .filter(|action| action.hotkeys.iter().any(|hk| hk.id() == event.id))
            .map(|action| {
                debug!(
                    action = %action.name,
                    description = %action.description,
                    pressed,
                    "Hotkey event"
                );
                Rc::clone(&action.callback)
            })
            .collect();

        for callback in &callbacks {
            callback(pressed);
        }

        !callbacks.is_empty()
    }

    /// Remove an action, returning its name and the keys no remaining action
    /// holds.
    pub(crate) fn release(&self, id: HotkeyId) -> Option<(String, Vec<HotKey>)> {
        let mut actions = self.actions.borrow_mut();
        let action = actions.remove(&id)?;
        let released = action
            .hotkeys
            .iter()
            .copied()
            .filter(|hk| !held_by_other(&actions, id, hk))
            .collect();

        Some((action.name, released))
    }

    /// Number of registered actions.
    pub fn action_count(&self) -> usize {
        self.actions.borrow().len()
    }

    fn os_register(&self, name: &str, hotkeys: &[HotKey]) {
        let Some(manager) = &self.manager else {
            return;
        };
        for hotkey in hotkeys {
            if let Err(e) = manager.register(*hotkey) {
                warn!(action = %name, error = %e, "Failed to register hotkey");
            }
        }
    }

    fn os_unregister(&self, name: &str, hotkeys: &[HotKey]) {
        let Some(manager) = &self.manager else {
            return;
        };
        for hotkey in hotkeys {
            if let Err(e) = manager.unregister(*hotkey) {
                warn!(action = %name, error = %e, "Failed to unregister hotkey");
            }
        }
    }
}

impl HotkeyRegistry for GlobalHotkeyRegistry {
    fn register(&self, name: &str, description: &str, callback: HotkeyCallback) -> HotkeyId {
        let id = HotkeyId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.actions.borrow_mut().insert(
            id,
            Action {
                name: name.to_string(),
                description: description.to_string(),
                callback: Rc::from(callback),
                descriptors: HotkeyBindings::empty(),
                hotkeys: Vec::new(),
            },
        );

        id
    }

    fn unregister(&self, id: HotkeyId) {
        if let Some((name, released)) = self.release(id) {
            self.os_unregister(&name, &released);
        }
    }

    fn load_bindings(&self, id: HotkeyId, bindings: &HotkeyBindings) {
        let mut actions = self.actions.borrow_mut();
        let Some(action) = actions.get_mut(&id) else {
            return;
        };
        let name = action.name.clone();

        let hotkeys: Vec<HotKey> = bindings
            .descriptors()
            .iter()
            .filter_map(|d| match parse_descriptor(d) {
                Ok(hotkey) => Some(hotkey),
                Err(e) => {
                    warn!(action = %name, error = ?e, "Skipping binding");
                    None
                }
            })
            .collect();
        let previous = std::mem::replace(&mut action.hotkeys, hotkeys.clone());
        action.descriptors = bindings.clone();

        let released: Vec<HotKey> = previous
            .iter()
            .copied()
            .filter(|hk| !hotkeys.contains(hk) && !held_by_other(&actions, id, hk))
            .collect();
        let claimed: Vec<HotKey> = hotkeys
            .iter()
            .copied()
            .filter(|hk| !previous.contains(hk) && !held_by_other(&actions, id, hk))
            .collect();
        drop(actions);

        self.os_unregister(&name, &released);
        self.os_register(&name, &claimed);
    }

    fn save_bindings(&self, id: HotkeyId) -> HotkeyBindings {
        self.actions
            .borrow()
            .get(&id)
            .map(|a| a.descriptors.clone())
            .unwrap_or_default()
    }

    fn set_description(&self, id: HotkeyId, description: &str) {
        if let Some(action) = self.actions.borrow_mut().get_mut(&id) {
            action.description = description.to_string();
        }
    }
}

fn held_by_other(actions: &BTreeMap<HotkeyId, Action>, id: HotkeyId, hotkey: &HotKey) -> bool {
    actions
        .iter()
        .any(|(other, action)| *other != id && action.hotkeys.contains(hotkey))
}

/// Build a binding descriptor from a hotkey string such as `ctrl+shift+KeyM`.
#[track_caller]
pub fn hotkey_descriptor(hotkey: &str) -> AppResult<Value> {
    let hotkey = hotkey.trim();
    HotKey::from_str(hotkey).map_err(|e| AppError::InvalidHotkey {
        hotkey: hotkey.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(json!({ DESCRIPTOR_KEY: hotkey }))
}

#[track_caller]
fn parse_descriptor(descriptor: &Value) -> AppResult<HotKey> {
    let text = descriptor
        .get(DESCRIPTOR_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InvalidHotkey {
            hotkey: descriptor.to_string(),
            reason: format!("missing \"{}\" string", DESCRIPTOR_KEY),
            location: ErrorLocation::from(Location::caller()),
        })?;

    HotKey::from_str(text).map_err(|e| AppError::InvalidHotkey {
        hotkey: text.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
