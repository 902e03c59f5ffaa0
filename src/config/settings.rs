//! Runtime settings: file locations and external tool names.
//!
//! These come from command-line flags (or their environment variables) and
//! never live in `config.json`.

use std::path::PathBuf;

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default compose template path.
pub const DEFAULT_TEMPLATE_PATH: &str = "docker-compose.template.yml";

/// Default rendered compose file path.
pub const DEFAULT_OUTPUT_PATH: &str = "docker-compose.yml";

/// Default image repository name for built images.
pub const DEFAULT_IMAGE_FAMILY: &str = "gns3-qemu";

/// Where files live and which external tools to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of `config.json`.
    pub config_path: PathBuf,
    /// Path of the compose template.
    pub template_path: PathBuf,
    /// Path the rendered compose file is written to.
    pub output_path: PathBuf,
    /// Docker CLI executable.
    pub docker: String,
    /// Compose command, split into words (`docker-compose` or `docker compose`).
    pub compose: Vec<String>,
    /// Repository part of the built image tag.
    pub image_family: String,
    /// Build context directory passed to `docker build`.
    pub build_context: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            docker: "docker".to_string(),
            compose: vec!["docker-compose".to_string()],
            image_family: DEFAULT_IMAGE_FAMILY.to_string(),
            build_context: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Set the compose command from a possibly multi-word string.
    ///
    /// Blank input keeps the current command.
    pub fn with_compose_command(mut self, command: &str) -> Self {
        let words: Vec<String> = command.split_whitespace().map(String::from).collect();
        if !words.is_empty() {
            self.compose = words;
        }
        self
    }

    /// Resolve every relative path against `root`.
    pub fn rooted_at(mut self, root: &std::path::Path) -> Self {
        for path in [
            &mut self.config_path,
            &mut self.template_path,
            &mut self.output_path,
            &mut self.build_context,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}
