//! Generate command implementation.
//!
//! `gns3-manager generate` renders the compose file from the pinned
//! versions.

use crate::error::Result;
use crate::manager::Manager;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand<R: CommandRunner> {
    manager: Manager<R>,
}

impl<R: CommandRunner> GenerateCommand<R> {
    /// Create a new generate command.
    pub fn new(manager: Manager<R>) -> Self {
        Self { manager }
    }
}

impl<R: CommandRunner> Command for GenerateCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.manager.generate(ui)?;
        Ok(CommandResult::success())
    }
}
