//! The version-pinning workflow.
//!
//! [`Manager`] owns the [`ConfigStore`], the runtime [`Settings`] and a
//! [`CommandRunner`], and performs one [`MenuAction`] at a time. The
//! interactive loop lives in [`menu`]; the subcommands call the same
//! operations directly.

pub mod action;
pub mod menu;

pub use action::MenuAction;
pub use menu::{report_error, run_menu, show_defaults};

use crate::config::{Component, ConfigStore, Settings};
use crate::docker::{BuildPlan, ComposeAction};
use crate::error::{ManagerError, Result};
use crate::selector::{self, Selection};
use crate::shell::{CommandLine, CommandRunner, RunMode, RunOutcome};
use crate::template::{self, RenderedFile, Substitutions};
use crate::ui::UserInterface;

/// Owner of the config and the entry point for every operation.
pub struct Manager<R: CommandRunner> {
    store: ConfigStore,
    settings: Settings,
    runner: R,
}

impl<R: CommandRunner> Manager<R> {
    /// Create a manager from a loaded store.
    pub fn new(store: ConfigStore, settings: Settings, runner: R) -> Self {
        Self {
            store,
            settings,
            runner,
        }
    }

    /// The config store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Runtime settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Perform one menu action. `Exit` does nothing here.
    pub fn perform(&mut self, action: MenuAction, ui: &mut dyn UserInterface) -> Result<()> {
        tracing::debug!("Performing {:?}", action);
        match action {
            MenuAction::Select(component) => self.select_version(component, ui).map(|_| ()),
            MenuAction::Generate => self.generate(ui).map(|_| ()),
            MenuAction::Build => self.build(ui).map(|_| ()),
            MenuAction::Compose(compose) => self.compose(compose, ui).map(|_| ()),
            MenuAction::Exit => Ok(()),
        }
    }

    /// Let the user pick a version and pin it.
    ///
    /// Cancelling leaves the config untouched.
    pub fn select_version(
        &mut self,
        component: Component,
        ui: &mut dyn UserInterface,
    ) -> Result<Selection> {
        let selection = selector::select(component, self.store.get_available_versions(), ui)?;

        match &selection {
            Selection::Chosen(version) => self.pin(component, version, ui)?,
            Selection::NoneAvailable => {
                ui.message(&format!("No versions available for {}", component));
            }
            Selection::Cancelled => {
                tracing::debug!("Selection for {} cancelled", component);
            }
        }

        Ok(selection)
    }

    /// Pin `version` without prompting.
    ///
    /// The version must be one of the component's available versions.
    pub fn set_version(
        &mut self,
        component: Component,
        version: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let known = self
            .store
            .config()
            .versions_for(component)
            .iter()
            .any(|v| v == version);
        if !known {
            return Err(ManagerError::VersionNotAvailable {
                component: component.to_string(),
                version: version.to_string(),
            });
        }
        self.pin(component, version, ui)
    }

    fn pin(&mut self, component: Component, version: &str, ui: &mut dyn UserInterface) -> Result<()> {
        self.store.set_default(component, version)?;
        ui.success(&format!(
            "Updated default {} version to {}",
            component, version
        ));
        Ok(())
    }

    /// Render the compose file from the pinned versions.
    pub fn generate(&mut self, ui: &mut dyn UserInterface) -> Result<RenderedFile> {
        let substitutions = Substitutions::for_components(self.store.config());
        let rendered = template::render(
            &self.settings.template_path,
            &self.settings.output_path,
            &substitutions,
        )?;

        ui.success(&format!(
            "Generated {} with:",
            rendered.output_path.display()
        ));
        for component in [Component::Qemu, Component::Gns3Server] {
            if let Some(value) = rendered.substitutions.get(component.placeholder()) {
                ui.message(&format!("  {} version: {}", component.label(), value));
            }
        }
        if !rendered.unresolved.is_empty() {
            ui.warning(&format!(
                "Left unreplaced: {}",
                rendered
                    .unresolved
                    .iter()
                    .map(|name| template::placeholder_token(name))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        Ok(rendered)
    }

    /// Build the image for the pinned versions.
    pub fn build(&mut self, ui: &mut dyn UserInterface) -> Result<BuildPlan> {
        let plan = BuildPlan::new(&self.settings, self.store.config());

        ui.message(&format!("\nBuilding Docker image: {}", plan.image));
        ui.message(&format!("  QEMU: {}", plan.qemu_version));
        ui.message(&format!("  GNS3 Server: {}", plan.server_version));

        match self.run(&plan.command, plan.mode(), ui)? {
            RunOutcome::Interrupted => ui.message("\nCancelled."),
            _ => ui.success(&format!("Successfully built {}", plan.image)),
        }
        Ok(plan)
    }

    /// Run a compose operation against the rendered compose file.
    ///
    /// Refuses to run until the compose file has been generated.
    pub fn compose(
        &mut self,
        action: ComposeAction,
        ui: &mut dyn UserInterface,
    ) -> Result<RunOutcome> {
        if !self.settings.output_path.exists() {
            return Err(ManagerError::ComposeFileMissing {
                path: self.settings.output_path.clone(),
            });
        }

        let command = action
            .command(&self.settings)
            .ok_or_else(|| ManagerError::ToolNotFound {
                tool: "compose command".to_string(),
            })?;

        let outcome = self.run(&command, action.mode(), ui)?;
        match (&outcome, action) {
            (RunOutcome::Interrupted, ComposeAction::Logs) => {
                ui.message("\nStopped viewing logs.")
            }
            (RunOutcome::Interrupted, _) => ui.message("\nCancelled."),
            _ => {
                if let Some(msg) = action.success_message() {
                    ui.success(msg);
                }
            }
        }
        Ok(outcome)
    }

    fn run(
        &mut self,
        command: &CommandLine,
        mode: RunMode,
        ui: &mut dyn UserInterface,
    ) -> Result<RunOutcome> {
        ui.show_command(&command.to_string());
        let outcome = self.runner.run(command, mode)?;
        tracing::info!("{} finished: {:?}", command, outcome);
        outcome.into_result(command)
    }
}
