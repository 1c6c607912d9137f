//! Host lifecycle integration: tools menu toggle and save/load callback.

use crate::{
    ChapterHotkeyDialog, Frontend, HostServices, SaveData, SaveMode, keys, read_from, write_into,
};

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, info, instrument, warn};

/// Chapter hotkeys wired into a host.
///
/// The dialog is shared by `Rc` with the menu and save callbacks handed to
/// the host; dropping the plugin alone does not tear it down.
pub struct ChapterHotkeysPlugin {
    dialog: Rc<RefCell<ChapterHotkeyDialog>>,
}

impl ChapterHotkeysPlugin {
    /// Create the dialog, add the tools menu toggle and register the save
    /// callback.
    #[instrument(skip_all)]
    pub fn init(frontend: &dyn Frontend, services: HostServices) -> Self {
        let label = services.translator.text(keys::MENU_ACTION);
        let dialog = Rc::new(RefCell::new(ChapterHotkeyDialog::new(services)));

        let menu_dialog = Rc::clone(&dialog);
        frontend.add_tools_menu_action(
            &label,
            Box::new(move || menu_dialog.borrow_mut().show_hide()),
        );

        let save_dialog = Rc::clone(&dialog);
        frontend.add_save_callback(Box::new(move |save_data: &mut SaveData, mode: SaveMode| {
            on_save(&mut save_dialog.borrow_mut(), save_data, mode)
        }));

        info!(menu_action = %label, "Chapter hotkeys initialized");

        Self { dialog }
    }

    /// The shared dialog.
    pub fn dialog(&self) -> &Rc<RefCell<ChapterHotkeyDialog>> {
        &self.dialog
    }
}

/// Save the chapter list into, or restore it from, the host save data.
///
/// On load, a missing or malformed chapter list leaves the dialog as it is.
pub(crate) fn on_save(
    dialog: &mut ChapterHotkeyDialog,
    save_data: &mut SaveData,
    mode: SaveMode,
) {
    match mode {
        SaveMode::Saving => {
            let store = dialog.save();
            if let Err(e) = write_into(save_data, &store) {
                warn!(error = ?e, "Failed to write chapter hotkeys");
            }
        }
        SaveMode::Loading => match read_from(save_data) {
            Ok(Some(store)) => dialog.load(&store),
            Ok(None) => debug!("No chapter hotkeys in save data"),
            Err(e) => warn!(error = ?e, "Ignoring malformed chapter hotkeys"),
        },
    }
}
