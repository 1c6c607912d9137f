use crate::{ChapterHotkeyDialog, ChapterId};

/// Display row of one chapter hotkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterHotkeyRow {
    /// Chapter the row stands for.
    pub id: ChapterId,
    /// Text shown in the list.
    pub text: String,
    /// Whether the row is the current selection.
    pub selected: bool,
    /// Whether the row is open for in-place editing.
    pub editable: bool,
}

/// Rows of the dialog's list, in display order.
pub fn rows(dialog: &ChapterHotkeyDialog) -> Vec<ChapterHotkeyRow> {
    dialog
        .entries()
        .iter()
        .map(|entry| ChapterHotkeyRow {
            id: entry.id().clone(),
            text: entry.name(),
            selected: dialog.selected() == Some(entry.id()),
            editable: dialog.editing() == Some(entry.id()),
        })
        .collect()
}
