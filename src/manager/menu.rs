//! The interactive main menu.

use crate::config::{Component, ConfigStore};
use crate::error::{ManagerError, Result};
use crate::shell::CommandRunner;
use crate::ui::{Prompt, UserInterface};

use super::{Manager, MenuAction};

/// Menu banner.
pub const MENU_TITLE: &str = "GNS3 Manager - Version Selection";

/// Prompt key for the main menu.
pub const MENU_PROMPT_KEY: &str = "menu";

/// Run the menu until the user exits or input ends.
///
/// Failed actions are reported and the menu is shown again.
pub fn run_menu<R: CommandRunner>(
    manager: &mut Manager<R>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let prompt = Prompt::new(MENU_PROMPT_KEY, "Enter your choice");

    loop {
        display_menu(manager.store(), ui);

        let answer = ui.prompt(&prompt)?;
        let Some(choice) = answer.as_str() else {
            ui.message("\nGoodbye!");
            return Ok(());
        };

        match MenuAction::from_choice(choice) {
            None => ui.warning("Invalid choice. Please try again."),
            Some(MenuAction::Exit) => {
                ui.message("Goodbye!");
                return Ok(());
            }
            Some(action) => {
                if let Err(e) = manager.perform(action, ui) {
                    report_error(&e, ui);
                }
            }
        }
    }
}

/// Show an error from a menu action.
pub fn report_error(error: &ManagerError, ui: &mut dyn UserInterface) {
    tracing::warn!("{}", error);
    match error {
        ManagerError::CommandFailed { .. } => ui.error(&format!("Error: {}", error)),
        _ => ui.error(&error.to_string()),
    }
}

/// Print the pinned defaults, `N/A` where unset.
pub fn show_defaults(store: &ConfigStore, ui: &mut dyn UserInterface) {
    ui.message("\nCurrent defaults:");
    for component in Component::ALL {
        let value = store.config().default_for(component).unwrap_or("N/A");
        ui.message(&format!("  {}: {}", component.label(), value));
    }
}

fn display_menu(store: &ConfigStore, ui: &mut dyn UserInterface) {
    ui.show_header(MENU_TITLE);
    show_defaults(store, ui);

    ui.message("\nOptions:");
    for (i, action) in MenuAction::ALL.iter().enumerate() {
        ui.message(&format!("{}. {}", i + 1, action.label()));
    }
    ui.message("");
}
