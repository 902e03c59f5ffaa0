//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{
    Component, Settings, DEFAULT_CONFIG_PATH, DEFAULT_IMAGE_FAMILY, DEFAULT_OUTPUT_PATH,
    DEFAULT_TEMPLATE_PATH,
};
use crate::ui::OutputMode;

/// GNS3 Manager - pin GNS3 server and QEMU versions and drive docker-compose.
#[derive(Debug, Parser)]
#[command(name = "gns3-manager")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the version config file
    #[arg(short, long, global = true, env = "GNS3_MANAGER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Path to the compose template
    #[arg(long, global = true, env = "GNS3_MANAGER_TEMPLATE", default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Where the rendered compose file is written
    #[arg(short, long, global = true, env = "GNS3_MANAGER_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Docker executable
    #[arg(long, global = true, env = "GNS3_MANAGER_DOCKER", default_value = "docker")]
    pub docker: String,

    /// Compose command, e.g. "docker-compose" or "docker compose"
    #[arg(long, global = true, env = "GNS3_MANAGER_COMPOSE", default_value = "docker-compose")]
    pub compose: String,

    /// Repository name for built images
    #[arg(long, global = true, env = "GNS3_MANAGER_IMAGE_FAMILY", default_value = DEFAULT_IMAGE_FAMILY)]
    pub image_family: String,

    /// Build context directory for `docker build`
    #[arg(long, global = true, default_value = ".")]
    pub build_context: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Runtime settings from the global flags.
    pub fn settings(&self) -> Settings {
        Settings {
            config_path: self.config.clone(),
            template_path: self.template.clone(),
            output_path: self.output.clone(),
            docker: self.docker.clone(),
            image_family: self.image_family.clone(),
            build_context: self.build_context.clone(),
            ..Settings::default()
        }
        .with_compose_command(&self.compose)
    }

    /// Output mode from `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive menu (default if no command specified)
    Menu,

    /// Show pinned and available versions
    Show,

    /// Pin a version without prompting
    Set(SetArgs),

    /// Pick a version for one component interactively
    Select(SelectArgs),

    /// Render the compose file from the pinned versions
    Generate,

    /// Build the Docker image for the pinned versions
    Build,

    /// Start services (compose up -d)
    Up,

    /// Stop services (compose down)
    Down,

    /// Follow service logs until Ctrl-C
    Logs,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Component to pin (gns3_server or qemu)
    pub component: Component,

    /// Version to pin; must be listed in available_versions
    #[arg(id = "version_value", value_name = "VERSION")]
    pub version: String,
}

/// Arguments for the `select` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SelectArgs {
    /// Component to pick a version for (gns3_server or qemu)
    pub component: Component,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
