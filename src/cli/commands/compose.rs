//! Compose command implementations.
//!
//! `gns3-manager up`, `down` and `logs` run the matching compose operation
//! against the rendered compose file.

use crate::docker::ComposeAction;
use crate::error::Result;
use crate::manager::Manager;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The compose command implementation.
pub struct ComposeCommand<R: CommandRunner> {
    manager: Manager<R>,
    action: ComposeAction,
}

impl<R: CommandRunner> ComposeCommand<R> {
    /// Create a new compose command.
    pub fn new(manager: Manager<R>, action: ComposeAction) -> Self {
        Self { manager, action }
    }
}

impl<R: CommandRunner> Command for ComposeCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.manager.compose(self.action, ui)?;
        Ok(CommandResult::success())
    }
}
