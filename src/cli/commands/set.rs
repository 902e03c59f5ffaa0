//! Set command implementation.
//!
//! `gns3-manager set <component> <version>` pins a listed version without
//! prompting.

use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::manager::Manager;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The set command implementation.
pub struct SetCommand<R: CommandRunner> {
    manager: Manager<R>,
    args: SetArgs,
}

impl<R: CommandRunner> SetCommand<R> {
    /// Create a new set command.
    pub fn new(manager: Manager<R>, args: SetArgs) -> Self {
        Self { manager, args }
    }
}

impl<R: CommandRunner> Command for SetCommand<R> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.manager
            .set_version(self.args.component, &self.args.version, ui)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_file, Component, ConfigStore, Settings};
    use crate::error::ManagerError;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn command(temp: &TempDir, version: &str) -> SetCommand<MockRunner> {
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"available_versions": {"gns3_server": ["2.2.40", "2.2.44"]}}"#)
            .unwrap();
        let store = ConfigStore::load(&path).unwrap();
        SetCommand::new(
            Manager::new(store, Settings::default(), MockRunner::new()),
            SetArgs {
                component: Component::Gns3Server,
                version: version.to_string(),
            },
        )
    }

    #[test]
    fn pins_listed_version() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, "2.2.44").execute(&mut ui).unwrap();

        assert!(result.success);
        let saved = load_config_file(&temp.path().join("config.json")).unwrap();
        assert_eq!(saved.default_for(Component::Gns3Server), Some("2.2.44"));
    }

    #[test]
    fn rejects_unlisted_version() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = command(&temp, "3.0.0").execute(&mut ui).unwrap_err();

        assert!(matches!(err, ManagerError::VersionNotAvailable { .. }));
    }
}
