use crate::{
    ChapterHotkeyDialog, ChapterId, DialogState, HotkeyBindings, SavedHotkey, SavedHotkeys, rows,
    tests::support::{TestHost, test_host},
};

use serde_json::json;

#[allow(clippy::unwrap_used)]
fn dialog_with(host: &TestHost, names: &[&str]) -> ChapterHotkeyDialog {
    let mut dialog = ChapterHotkeyDialog::new(host.services.clone());
    for name in names {
        host.prompt.answer(name);
        dialog.add().unwrap();
    }
    dialog
}

fn names(dialog: &ChapterHotkeyDialog) -> Vec<String> {
    dialog.entries().iter().map(|e| e.name()).collect()
}

/// WHAT: Adding a named chapter creates a fresh entry with no bindings
/// WHY: Core add flow
#[test]
#[allow(clippy::unwrap_used)]
fn given_name_when_adding_then_entry_created_and_selected() {
    // Given: An empty dialog and a prompt answering with a padded name
    let host = test_host();
    let mut dialog = ChapterHotkeyDialog::new(host.services.clone());
    host.prompt.answer("  Intro\t");

    // When: Adding
    let id = dialog.add().unwrap();

    // Then: One trimmed entry with a generated id, registered and selected
    assert_eq!(names(&dialog), vec!["Intro"]);
    assert!(id.as_str().starts_with("chapter_hotkey_"));
    assert_eq!(dialog.selected(), Some(&id));
    assert!(dialog.entry(&id).unwrap().bindings().is_empty());
    assert_eq!(host.registry.live_count(), 1);

    let request = &host.prompt.requests.borrow()[0];
    assert_eq!(request.title, "Add Chapter Hotkey");
    assert!(request.placeholder.is_empty());
}

/// WHAT: Cancelling the add prompt leaves the list unchanged
/// WHY: Cancel is a silent no-op
#[test]
fn given_cancelled_prompt_when_adding_then_count_unchanged() {
    let host = test_host();
    let mut dialog = dialog_with(&host, &["A"]);
    host.prompt.cancel();

    let result = dialog.add();

    assert!(result.is_none());
    assert_eq!(dialog.len(), 1);
    assert_eq!(host.registry.live_count(), 1);
}

/// WHAT: A whitespace-only name leaves the list unchanged
/// WHY: Blank chapter names are rejected after trimming
#[test]
fn given_blank_name_when_adding_then_count_unchanged() {
    let host = test_host();
    let mut dialog = dialog_with(&host, &["A"]);
    host.prompt.answer("   ");

    let result = dialog.add();

    assert!(result.is_none());
    assert_eq!(dialog.len(), 1);
}

/// WHAT: Entries are kept sorted by name
/// WHY: The list displays chapters alphabetically
#[test]
fn given_unsorted_adds_when_listing_then_sorted_by_name() {
    let host = test_host();

    let dialog = dialog_with(&host, &["Outro", "Break", "Intro"]);

    assert_eq!(names(&dialog), vec!["Break", "Intro", "Outro"]);
}

/// WHAT: Every added chapter gets a distinct id
/// WHY: Ids key the persisted store
#[test]
fn given_same_name_twice_when_adding_then_distinct_ids() {
    let host = test_host();

    let dialog = dialog_with(&host, &["Same", "Same"]);

    let ids: Vec<_> = dialog.entries().iter().map(|e| e.id().clone()).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

/// WHAT: Removing the selection drops exactly one entry and its registration
/// WHY: Removed chapters must never fire again
#[test]
#[allow(clippy::unwrap_used)]
fn given_selection_when_removing_then_entry_and_registration_released() {
    // Given: Two chapters, one selected
    let host = test_host();
    let mut dialog = dialog_with(&host, &["Keep", "Drop"]);
    assert!(dialog.select_by_name("Drop"));
    let removed = dialog.selected().unwrap().clone();

    // When: Removing
    assert!(dialog.remove_selected());

    // Then: Count drops by one, the registration is gone, no callback fires
    assert_eq!(names(&dialog), vec!["Keep"]);
    assert!(dialog.entry(&removed).is_none());
    assert_eq!(host.registry.live_count(), 1);
    assert_eq!(host.registry.unregistered(), vec![removed.to_string()]);
    assert_eq!(host.registry.fire(removed.as_str(), true), 0);
    assert!(host.recorder.chapters.borrow().is_empty());
    assert!(dialog.selected().is_none());
}

/// WHAT: Remove without a selection is a no-op
/// WHY: The toolbar button may be pressed with nothing selected
#[test]
fn given_no_selection_when_removing_then_nothing_changes() {
    let host = test_host();
    let mut dialog = dialog_with(&host, &["A"]);
    dialog.clear_selection();

    assert!(!dialog.remove_selected());
    assert_eq!(dialog.len(), 1);
    assert_eq!(host.registry.live_count(), 1);
}

/// WHAT: Renaming changes the name but keeps the id, and re-sorts
/// WHY: Ids stay stable so saved bindings follow the chapter
#[test]
#[allow(clippy::unwrap_used)]
fn given_selection_when_renaming_then_id_kept_and_list_resorted() {
    // Given: Two chapters with "B" selected
    let host = test_host();
    let mut dialog = dialog_with(&host, &["A", "B"]);
    dialog.select_by_name("B");
    let id = dialog.selected().unwrap().clone();
    host.prompt.answer(" 0 first ");

    // When: Renaming
    assert!(dialog.rename_selected());

    // Then: Same id, new name, sorted first, prompt pre-filled with old name
    assert_eq!(names(&dialog), vec!["0 first", "A"]);
    assert_eq!(dialog.entries()[0].id(), &id);
    assert!(dialog.editing().is_none());

    let requests = host.prompt.requests.borrow();
    let request = requests.last().unwrap();
    assert_eq!(request.placeholder, "B");
    assert_eq!(request.title, "Rename Chapter Hotkey");
}

/// WHAT: Cancelled or blank rename keeps the old name
/// WHY: Rename aborts silently like add
#[test]
fn given_cancel_or_blank_when_renaming_then_name_unchanged() {
    let host = test_host();
    let mut dialog = dialog_with(&host, &["A"]);
    dialog.select_by_name("A");

    host.prompt.cancel();
    assert!(!dialog.rename_selected());
    host.prompt.answer("\t ");
    assert!(!dialog.rename_selected());

    assert_eq!(names(&dialog), vec!["A"]);
    assert!(dialog.editing().is_none());
}

/// WHAT: Rows mark the row under in-place edit as editable
/// WHY: The view adapter renders edit state without touching the record
#[test]
#[allow(clippy::unwrap_used)]
fn given_begin_rename_when_rendering_then_row_editable_until_finished() {
    let host = test_host();
    let mut dialog = dialog_with(&host, &["A", "B"]);
    dialog.select_by_name("A");

    assert_eq!(dialog.begin_rename().as_deref(), Some("A"));
    let editing = rows(&dialog);
    assert!(editing[0].editable && editing[0].selected);
    assert!(!editing[1].editable && !editing[1].selected);

    assert!(dialog.finish_rename(Some("C".to_string())));
    let done = rows(&dialog);
    assert!(done.iter().all(|r| !r.editable));
    assert_eq!(
        done.iter().map(|r| r.text.as_str()).collect::<Vec<_>>(),
        vec!["B", "C"]
    );
}

/// WHAT: Save then load into a fresh dialog restores ids, names and bindings
/// WHY: Chapters and their keys survive a host restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_list_when_loading_into_fresh_dialog_then_round_trips() {
    // Given: Three chapters, one bound in the host settings, one renamed
    let host = test_host();
    let mut dialog = dialog_with(&host, &["Intro", "Middle", "Outro"]);
    dialog.select_by_name("Middle");
    let renamed = dialog.selected().unwrap().clone();
    host.prompt.answer("Halftime");
    assert!(dialog.rename_selected());
    let intro = dialog.entries().iter().find(|e| e.name() == "Intro").unwrap();
    host.registry.bind(intro.id().as_str(), "OBS_KEY_F1");
    let before: Vec<_> = dialog.entries().iter().map(|e| e.record()).collect();

    // When: Saving, then loading into a fresh dialog on a fresh host
    let store = dialog.save();
    let fresh_host = test_host();
    let mut fresh = ChapterHotkeyDialog::new(fresh_host.services.clone());
    fresh.load(&store);

    // Then: Same records, and the rename is kept under the same id
    let after: Vec<_> = fresh.entries().iter().map(|e| e.record()).collect();
    assert_eq!(after, before);
    assert_eq!(fresh.entry(&renamed).unwrap().name(), "Halftime");
    assert_eq!(fresh_host.registry.live_count(), 3);
}

/// WHAT: Loading replaces the current entries and releases their hotkeys
/// WHY: Load is a full replacement, not a merge
#[test]
#[allow(clippy::unwrap_used)]
fn given_existing_entries_when_loading_then_replaced() {
    let host = test_host();
    let mut dialog = dialog_with(&host, &["Old1", "Old2"]);
    let mut store = SavedHotkeys::new();
    store.insert(
        ChapterId::from("kept"),
        SavedHotkey {
            name: "New".to_string(),
            bindings: HotkeyBindings::new(vec![json!({ "key": "OBS_KEY_N" })]),
        },
    );

    dialog.load(&store);

    assert_eq!(names(&dialog), vec!["New"]);
    assert_eq!(host.registry.live_count(), 1);
    assert_eq!(host.registry.unregistered().len(), 2);
    assert_eq!(
        dialog.entry(&ChapterId::from("kept")).unwrap().bindings(),
        store.get(&ChapterId::from("kept")).unwrap().bindings
    );
}

/// WHAT: The dialog toggles between hidden and visible
/// WHY: The menu action is a show/hide toggle
#[test]
fn given_hidden_dialog_when_toggled_twice_then_hidden_again() {
    let host = test_host();
    let mut dialog = ChapterHotkeyDialog::new(host.services.clone());
    assert_eq!(dialog.state(), DialogState::Hidden);

    dialog.show_hide();
    assert_eq!(dialog.state(), DialogState::Visible);

    dialog.show_hide();
    assert_eq!(dialog.state(), DialogState::Hidden);
}

/// WHAT: Dropping the dialog releases every registration
/// WHY: Unloading the plugin must not leave host actions behind
#[test]
fn given_dialog_with_entries_when_dropped_then_all_unregistered() {
    let host = test_host();
    let dialog = dialog_with(&host, &["A", "B", "C"]);

    drop(dialog);

    assert_eq!(host.registry.live_count(), 0);
}
