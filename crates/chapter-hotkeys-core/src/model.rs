use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

const ID_PREFIX: &str = "chapter_hotkey_";

/// Stable identifier of a chapter hotkey.
///
/// Generated once when the chapter is created and never changed afterwards.
/// It doubles as the host hotkey action name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(String);

impl ChapterId {
    /// Generate a fresh random identifier (`chapter_hotkey_<uuid>`).
    pub fn generate() -> Self {
        Self(format!("{ID_PREFIX}{}", Uuid::new_v4().hyphenated()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Ids read back from save data are kept verbatim, whatever their shape.
impl From<String> for ChapterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ChapterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized key bindings of one hotkey action.
///
/// The descriptors are opaque here: the host registry produces and
/// interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotkeyBindings(Vec<Value>);

impl HotkeyBindings {
    /// Bindings with no descriptors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap host-produced binding descriptors.
    pub fn new(descriptors: Vec<Value>) -> Self {
        Self(descriptors)
    }

    /// The binding descriptors, in host order.
    pub fn descriptors(&self) -> &[Value] {
        &self.0
    }

    /// Whether no key is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Plain chapter hotkey record.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterHotkey {
    /// Stable identifier.
    pub id: ChapterId,
    /// User-facing chapter name, also the inserted marker name.
    pub name: String,
    /// Key bindings as last reported by the host.
    pub bindings: HotkeyBindings,
}
