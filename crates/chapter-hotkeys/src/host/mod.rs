//! Standalone implementations of the host services.

mod chapter_log;
mod prompt;
mod registry;
mod save_file;

pub(crate) use {
    chapter_log::ChapterLog,
    prompt::{PresetPrompt, StdinPrompt},
    registry::{GlobalHotkeyRegistry, hotkey_descriptor},
    save_file::SaveFile,
};

#[cfg(test)]
pub(crate) use {chapter_log::format_elapsed, prompt::read_answer};
