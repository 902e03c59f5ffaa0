//! Error types for gns3-manager operations.
//!
//! This module defines [`ManagerError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Config errors at startup are fatal; everything else is reported by the
//!   menu loop and the loop keeps going
//! - Use `anyhow::Error` (via `ManagerError::Other`) for unexpected errors
//! - Cancellation is a value (`Selection::Cancelled`, `RunOutcome::Interrupted`),
//!   never an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gns3-manager operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Configuration file not found at expected location.
    #[error("Config file {path} not found!")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not valid JSON of the expected shape.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration could not be written back to disk.
    #[error("Failed to write config to {path}: {source}")]
    ConfigWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template file does not exist.
    #[error("Template file {path} not found!")]
    TemplateNotFound { path: PathBuf },

    /// Compose file has not been generated yet.
    #[error("{path} not found. Generate it first (option 3).")]
    ComposeFileMissing { path: PathBuf },

    /// External tool is not installed or not on PATH.
    #[error("{tool} not found. Please install {tool}.")]
    ToolNotFound { tool: String },

    /// External command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Component name is not one the manager knows how to pin.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    /// Requested version is not listed in `available_versions`.
    #[error("Version {version} is not available for {component}")]
    VersionNotAvailable { component: String, version: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ManagerError {
    /// Whether this error should stop the program before the menu starts.
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for gns3-manager operations.
pub type Result<T> = std::result::Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ManagerError::ConfigNotFound {
            path: PathBuf::from("/foo/config.json"),
        };
        assert!(err.to_string().contains("/foo/config.json"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ManagerError::ConfigParseError {
            path: PathBuf::from("config.json"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn config_write_error_keeps_source() {
        let err = ManagerError::ConfigWriteError {
            path: PathBuf::from("config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(err.to_string().contains("read-only"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn tool_not_found_names_tool() {
        let err = ManagerError::ToolNotFound {
            tool: "docker-compose".into(),
        };
        assert!(err.to_string().contains("docker-compose"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = ManagerError::CommandFailed {
            command: "docker build .".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker build ."));
        assert!(msg.contains('2'));
    }

    #[test]
    fn compose_file_missing_hints_at_generate() {
        let err = ManagerError::ComposeFileMissing {
            path: PathBuf::from("docker-compose.yml"),
        };
        assert!(err.to_string().contains("Generate it first"));
    }

    #[test]
    fn only_config_load_errors_are_fatal() {
        assert!(ManagerError::ConfigNotFound {
            path: PathBuf::from("x")
        }
        .is_fatal_at_startup());
        assert!(ManagerError::ConfigParseError {
            path: PathBuf::from("x"),
            message: String::new(),
        }
        .is_fatal_at_startup());
        assert!(!ManagerError::TemplateNotFound {
            path: PathBuf::from("x")
        }
        .is_fatal_at_startup());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ManagerError = io_err.into();
        assert!(matches!(err, ManagerError::Io(_)));
    }
}
