//! Build command implementation.
//!
//! `gns3-manager build` runs `docker build` for the pinned versions.

use crate::error::Result;
use crate::manager::Manager;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand<R: CommandRunner> {
    manager: Manager<R>,
}

impl<R: CommandRunner> BuildCommand<R> {
    /// Create a new build command.
    pub fn new(manager: Manager<R>) -> Self {
        Self { manager }
    }
}

impl<R: CommandRunner> Command for BuildCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.manager.build(ui)?;
        Ok(CommandResult::success())
    }
}
