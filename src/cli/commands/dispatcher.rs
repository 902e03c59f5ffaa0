//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::{ConfigStore, Settings};
use crate::docker::ComposeAction;
use crate::error::Result;
use crate::manager::Manager;
use crate::shell::{CommandRunner, ProcessRunner};
use crate::ui::UserInterface;

use super::build::BuildCommand;
use super::completions::CompletionsCommand;
use super::compose::ComposeCommand;
use super::generate::GenerateCommand;
use super::menu::MenuCommand;
use super::select::SelectCommand;
use super::set::SetCommand;
use super::show::ShowCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the given runtime settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the runtime settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command using real processes.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.dispatch_with(cli, ProcessRunner::new(), ui)
    }

    /// Dispatch and execute a command with an explicit runner.
    ///
    /// Everything except `completions` needs the config; a config that
    /// can't be loaded fails here before any file is touched.
    pub fn dispatch_with<R: CommandRunner>(
        &self,
        cli: &Cli,
        runner: R,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            None | Some(Commands::Menu) => MenuCommand::new(self.manager(runner)?).execute(ui),
            Some(Commands::Show) => ShowCommand::new(self.manager(runner)?).execute(ui),
            Some(Commands::Set(args)) => {
                SetCommand::new(self.manager(runner)?, args.clone()).execute(ui)
            }
            Some(Commands::Select(args)) => {
                SelectCommand::new(self.manager(runner)?, args.clone()).execute(ui)
            }
            Some(Commands::Generate) => GenerateCommand::new(self.manager(runner)?).execute(ui),
            Some(Commands::Build) => BuildCommand::new(self.manager(runner)?).execute(ui),
            Some(Commands::Up) => {
                ComposeCommand::new(self.manager(runner)?, ComposeAction::Up).execute(ui)
            }
            Some(Commands::Down) => {
                ComposeCommand::new(self.manager(runner)?, ComposeAction::Down).execute(ui)
            }
            Some(Commands::Logs) => {
                ComposeCommand::new(self.manager(runner)?, ComposeAction::Logs).execute(ui)
            }
        }
    }

    fn manager<R: CommandRunner>(&self, runner: R) -> Result<Manager<R>> {
        let store = ConfigStore::load(&self.settings.config_path)?;
        tracing::debug!("Loaded config from {}", store.path().display());
        Ok(Manager::new(store, self.settings.clone(), runner))
    }
}
