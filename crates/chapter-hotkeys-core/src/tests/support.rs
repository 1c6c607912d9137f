//! In-memory host used by the tests.

use crate::{
    ChapterRecorder, Frontend, HostServices, HotkeyBindings, HotkeyCallback, HotkeyId,
    HotkeyRegistry, Locale, MenuCallback, NamePrompt, NameRequest, SaveCallback, SaveData,
    SaveMode,
};

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, VecDeque},
    rc::Rc,
};

use serde_json::json;

pub(crate) struct Registered {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) bindings: HotkeyBindings,
    callback: HotkeyCallback,
}

#[derive(Default)]
pub(crate) struct MockRegistry {
    next_id: Cell<u64>,
    actions: RefCell<BTreeMap<HotkeyId, Registered>>,
    unregistered: RefCell<Vec<String>>,
}

impl MockRegistry {
    pub(crate) fn live_count(&self) -> usize {
        self.actions.borrow().len()
    }

    pub(crate) fn description_of(&self, name: &str) -> Option<String> {
        self.actions
            .borrow()
            .values()
            .find(|a| a.name == name)
            .map(|a| a.description.clone())
    }

    pub(crate) fn unregistered(&self) -> Vec<String> {
        self.unregistered.borrow().clone()
    }

    /// Simulate the user binding keys in the host's settings.
    pub(crate) fn bind(&self, name: &str, key: &str) -> bool {
        let mut actions = self.actions.borrow_mut();
        match actions.values_mut().find(|a| a.name == name) {
            Some(action) => {
                action.bindings = HotkeyBindings::new(vec![json!({ "key": key })]);
                true
            }
            None => false,
        }
    }

    /// Fire the callback of every action with this name. Returns how many fired.
    pub(crate) fn fire(&self, name: &str, pressed: bool) -> usize {
        let actions = self.actions.borrow();
        let mut fired = 0;
        for action in actions.values().filter(|a| a.name == name) {
            (action.callback)(pressed);
            fired += 1;
        }
        fired
    }
}

impl HotkeyRegistry for MockRegistry {
    fn register(&self, name: &str, description: &str, callback: HotkeyCallback) -> HotkeyId {
        let id = HotkeyId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.actions.borrow_mut().insert(
            id,
            Registered {
                name: name.to_string(),
                description: description.to_string(),
                bindings: HotkeyBindings::empty(),
                callback,
            },
        );
        id
    }

    fn unregister(&self, id: HotkeyId) {
        if let Some(action) = self.actions.borrow_mut().remove(&id) {
            self.unregistered.borrow_mut().push(action.name);
        }
    }

    fn load_bindings(&self, id: HotkeyId, bindings: &HotkeyBindings) {
        if let Some(action) = self.actions.borrow_mut().get_mut(&id) {
            action.bindings = bindings.clone();
        }
    }

    fn save_bindings(&self, id: HotkeyId) -> HotkeyBindings {
        self.actions
            .borrow()
            .get(&id)
            .map(|a| a.bindings.clone())
            .unwrap_or_default()
    }

    fn set_description(&self, id: HotkeyId, description: &str) {
        if let Some(action) = self.actions.borrow_mut().get_mut(&id) {
            action.description = description.to_string();
        }
    }
}

#[derive(Default)]
pub(crate) struct MockRecorder {
    pub(crate) chapters: RefCell<Vec<String>>,
}

impl ChapterRecorder for MockRecorder {
    fn add_chapter(&self, name: &str) {
        self.chapters.borrow_mut().push(name.to_string());
    }
}

/// Answers prompts from a queue; an exhausted queue cancels.
#[derive(Default)]
pub(crate) struct ScriptedPrompt {
    answers: RefCell<VecDeque<Option<String>>>,
    pub(crate) requests: RefCell<Vec<NameRequest>>,
}

impl ScriptedPrompt {
    pub(crate) fn answer(&self, text: &str) {
        self.answers.borrow_mut().push_back(Some(text.to_string()));
    }

    pub(crate) fn cancel(&self) {
        self.answers.borrow_mut().push_back(None);
    }
}

impl NamePrompt for ScriptedPrompt {
    fn ask(&self, request: &NameRequest) -> Option<String> {
        self.requests.borrow_mut().push(request.clone());
        self.answers.borrow_mut().pop_front().flatten()
    }
}

#[derive(Default)]
pub(crate) struct MockFrontend {
    menu: RefCell<Vec<(String, MenuCallback)>>,
    save_callbacks: RefCell<Vec<SaveCallback>>,
}

impl MockFrontend {
    pub(crate) fn menu_labels(&self) -> Vec<String> {
        self.menu.borrow().iter().map(|(l, _)| l.clone()).collect()
    }

    pub(crate) fn trigger(&self, label: &str) -> bool {
        let mut menu = self.menu.borrow_mut();
        match menu.iter_mut().find(|(l, _)| l == label) {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub(crate) fn run_save_callbacks(&self, save_data: &mut SaveData, mode: SaveMode) {
        for callback in self.save_callbacks.borrow_mut().iter_mut() {
            callback(save_data, mode);
        }
    }
}

impl Frontend for MockFrontend {
    fn add_tools_menu_action(&self, label: &str, on_triggered: MenuCallback) {
        self.menu.borrow_mut().push((label.to_string(), on_triggered));
    }

    fn add_save_callback(&self, callback: SaveCallback) {
        self.save_callbacks.borrow_mut().push(callback);
    }
}

pub(crate) struct TestHost {
    pub(crate) registry: Rc<MockRegistry>,
    pub(crate) recorder: Rc<MockRecorder>,
    pub(crate) prompt: Rc<ScriptedPrompt>,
    pub(crate) services: HostServices,
}

#[allow(clippy::unwrap_used)]
pub(crate) fn test_host() -> TestHost {
    let registry = Rc::new(MockRegistry::default());
    let recorder = Rc::new(MockRecorder::default());
    let prompt = Rc::new(ScriptedPrompt::default());
    let locale = Rc::new(Locale::builtin().unwrap());

    let services = HostServices {
        hotkeys: registry.clone(),
        recorder: recorder.clone(),
        translator: locale,
        prompt: prompt.clone(),
    };

    TestHost {
        registry,
        recorder,
        prompt,
        services,
    }
}
