//! Select command implementation.
//!
//! `gns3-manager select <component>` runs the version picker for one
//! component and exits.

use crate::cli::args::SelectArgs;
use crate::error::Result;
use crate::manager::Manager;
use crate::selector::Selection;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The select command implementation.
pub struct SelectCommand<R: CommandRunner> {
    manager: Manager<R>,
    args: SelectArgs,
}

impl<R: CommandRunner> SelectCommand<R> {
    /// Create a new select command.
    pub fn new(manager: Manager<R>, args: SelectArgs) -> Self {
        Self { manager, args }
    }
}

impl<R: CommandRunner> Command for SelectCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.manager.select_version(self.args.component, ui)? {
            Selection::NoneAvailable => Ok(CommandResult::failure(1)),
            Selection::Chosen(_) | Selection::Cancelled => Ok(CommandResult::success()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Component, ConfigStore, Configuration, Settings};
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    #[test]
    fn nothing_to_select_fails() {
        let store = ConfigStore::from_parts("config.json", Configuration::default());
        let manager = Manager::new(store, Settings::default(), MockRunner::new());
        let mut ui = MockUI::new();

        let result = SelectCommand::new(
            manager,
            SelectArgs {
                component: Component::Qemu,
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("No versions available for qemu"));
    }
}
