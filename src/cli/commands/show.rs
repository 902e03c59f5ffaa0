//! Show command implementation.
//!
//! The `gns3-manager show` command prints pinned and available versions.

use crate::config::Component;
use crate::error::Result;
use crate::manager::{show_defaults, Manager};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand<R: CommandRunner> {
    manager: Manager<R>,
}

impl<R: CommandRunner> ShowCommand<R> {
    /// Create a new show command.
    pub fn new(manager: Manager<R>) -> Self {
        Self { manager }
    }
}

impl<R: CommandRunner> Command for ShowCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.manager.store();
        ui.show_header(&format!("GNS3 Manager - {}", store.path().display()));
        show_defaults(store, ui);

        ui.message("\nAvailable versions:");
        for component in Component::ALL {
            let versions = store.config().versions_for(component);
            let listed = if versions.is_empty() {
                "none".to_string()
            } else {
                versions.join(", ")
            };
            ui.message(&format!("  {}: {}", component.label(), listed));
        }

        Ok(CommandResult::success())
    }
}
