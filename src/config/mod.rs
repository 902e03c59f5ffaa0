//! Configuration loading, saving and runtime settings.
//!
//! This module handles:
//! - The `config.json` schema in [`schema`]
//! - Loading, saving and the owning [`ConfigStore`] in [`store`]
//! - File locations and tool names in [`settings`]
//!
//! # Example
//!
//! ```
//! use gns3_manager::config::{Component, ConfigStore};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.json");
//! fs::write(&path, r#"{"available_versions": {"qemu": ["4.2.1", "6.2.0"]}}"#).unwrap();
//!
//! let mut store = ConfigStore::load(&path).unwrap();
//! store.set_default(Component::Qemu, "6.2.0").unwrap();
//! assert_eq!(store.resolved_version(Component::Qemu), "6.2.0");
//! ```

pub mod schema;
pub mod settings;
pub mod store;

pub use schema::{Component, Configuration};
pub use settings::{
    Settings, DEFAULT_CONFIG_PATH, DEFAULT_IMAGE_FAMILY, DEFAULT_OUTPUT_PATH,
    DEFAULT_TEMPLATE_PATH,
};
pub use store::{load_config_file, parse_config, save_config_file, ConfigStore};
