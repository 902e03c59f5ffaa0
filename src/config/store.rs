//! Config file loading, saving and the owning store.
//!
//! [`ConfigStore`] owns the single in-memory [`Configuration`]. Other parts
//! of the program borrow it read-only; [`ConfigStore::set_default`] is the
//! only way to change it and every change is written straight back to disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{Component, Configuration};
use crate::error::{ManagerError, Result};

/// Load a config file and parse it into [`Configuration`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_config_file(path: &Path) -> Result<Configuration> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManagerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ManagerError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse JSON content into [`Configuration`].
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<Configuration> {
    serde_json::from_str(content).map_err(|e| ManagerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a configuration and replace the file at `path`.
///
/// Output is pretty-printed with two-space indentation. The content goes to
/// a sibling temp file first and is renamed over the target, so a crash
/// mid-write never leaves a truncated config behind.
pub fn save_config_file(path: &Path, config: &Configuration) -> Result<()> {
    let mut content = serde_json::to_string_pretty(config)
        .map_err(|e| ManagerError::Other(anyhow::Error::new(e).context("serializing config")))?;
    content.push('\n');

    let write_err = |source: std::io::Error| ManagerError::ConfigWriteError {
        path: path.to_path_buf(),
        source,
    };

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &content).map_err(write_err)?;
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_err(e)
    })?;

    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

/// Owner of the loaded configuration and its backing file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: Configuration,
}

impl ConfigStore {
    /// Load the config at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = load_config_file(&path)?;
        tracing::debug!(
            "Loaded config from {} ({} defaults, {} components with versions)",
            path.display(),
            config.defaults.len(),
            config.available_versions.len()
        );
        Ok(Self { path, config })
    }

    /// Wrap an already-parsed configuration bound to `path`.
    pub fn from_parts(path: impl Into<PathBuf>, config: Configuration) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Path of the backing config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the whole configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Write the current configuration back to its file.
    pub fn save(&self) -> Result<()> {
        save_config_file(&self.path, &self.config)
    }

    /// Pinned versions, keyed `<component>_version`.
    pub fn get_defaults(&self) -> &BTreeMap<String, String> {
        &self.config.defaults
    }

    /// Candidate versions per component name.
    pub fn get_available_versions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.config.available_versions
    }

    /// Pinned version for `component`, or its fallback.
    pub fn resolved_version(&self, component: Component) -> &str {
        self.config.resolved_version(component)
    }

    /// Pin `component` to `version` and persist immediately.
    ///
    /// The in-memory value is updated even when the save fails; the error
    /// is returned so the caller can report it.
    pub fn set_default(&mut self, component: Component, version: &str) -> Result<()> {
        self.config
            .defaults
            .insert(component.defaults_key(), version.to_string());
        tracing::info!("Pinned {} to {}", component, version);
        self.save()
    }
}
