//! Menu command implementation.
//!
//! `gns3-manager` with no subcommand (or `gns3-manager menu`) runs the
//! interactive loop.

use crate::error::Result;
use crate::manager::{run_menu, Manager};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The menu command implementation.
pub struct MenuCommand<R: CommandRunner> {
    manager: Manager<R>,
}

impl<R: CommandRunner> MenuCommand<R> {
    /// Create a new menu command.
    pub fn new(manager: Manager<R>) -> Self {
        Self { manager }
    }
}

impl<R: CommandRunner> Command for MenuCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_menu(&mut self.manager, ui)?;
        Ok(CommandResult::success())
    }
}
