//! Docker and compose command lines.
//!
//! Only the command lines are built here; running them is the
//! [`CommandRunner`](crate::shell::CommandRunner)'s job.

use crate::config::{Component, Configuration, Settings};
use crate::shell::{CommandLine, RunMode};

/// Image tag for a version pair: `<family>:<qemu>-server-<server>`.
pub fn image_tag(family: &str, qemu_version: &str, server_version: &str) -> String {
    format!("{}:{}-server-{}", family, qemu_version, server_version)
}

/// A `docker build` for the currently pinned versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// QEMU version passed as a build arg.
    pub qemu_version: String,
    /// GNS3 server version passed as a build arg.
    pub server_version: String,
    /// Tag of the resulting image.
    pub image: String,
    /// The full command line.
    pub command: CommandLine,
}

impl BuildPlan {
    /// Plan a build from pinned versions, using fallbacks where unset.
    pub fn new(settings: &Settings, config: &Configuration) -> Self {
        let qemu_version = config.resolved_version(Component::Qemu).to_string();
        let server_version = config.resolved_version(Component::Gns3Server).to_string();
        let image = image_tag(&settings.image_family, &qemu_version, &server_version);

        let command = CommandLine::new(settings.docker.clone())
            .arg("build")
            .arg("--build-arg")
            .arg(format!("{}={}", Component::Qemu.placeholder(), qemu_version))
            .arg("--build-arg")
            .arg(format!(
                "{}={}",
                Component::Gns3Server.placeholder(),
                server_version
            ))
            .arg("-t")
            .arg(image.clone())
            .arg(settings.build_context.to_string_lossy().into_owned());

        Self {
            qemu_version,
            server_version,
            image,
            command,
        }
    }

    /// Builds are checked: a failing build is reported.
    pub fn mode(&self) -> RunMode {
        RunMode::Checked
    }
}

/// Compose operations on the rendered compose file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    /// Start services detached.
    Up,
    /// Stop and remove services.
    Down,
    /// Follow service logs until interrupted.
    Logs,
}

impl ComposeAction {
    /// Arguments appended to the compose command.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Up => &["up", "-d"],
            Self::Down => &["down"],
            Self::Logs => &["logs", "-f"],
        }
    }

    /// How the runner should treat the exit.
    pub fn mode(&self) -> RunMode {
        match self {
            Self::Up | Self::Down => RunMode::Checked,
            Self::Logs => RunMode::Streaming,
        }
    }

    /// The full command line, or `None` if no compose command is configured.
    ///
    /// Always points compose at the rendered file with `-f`.
    pub fn command(&self, settings: &Settings) -> Option<CommandLine> {
        CommandLine::from_words(&settings.compose).map(|cmd| {
            cmd.arg("-f")
                .arg(settings.output_path.to_string_lossy().into_owned())
                .args(self.args().iter().copied())
        })
    }

    /// Message shown after a successful run.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::Up => Some("Services started successfully"),
            Self::Down => Some("Services stopped successfully"),
            Self::Logs => None,
        }
    }
}
