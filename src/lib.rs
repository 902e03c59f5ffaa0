//! GNS3 Manager - pin GNS3 server and QEMU versions for a dockerised lab.
//!
//! The manager keeps the chosen versions in a small JSON config, renders a
//! `docker-compose.yml` from a template with those versions, and drives
//! `docker build` and `docker-compose` from an interactive menu.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Config document, store and runtime settings
//! - [`docker`] - Docker and compose command lines
//! - [`error`] - Error types and result aliases
//! - [`manager`] - The workflow and the interactive menu
//! - [`selector`] - Numbered version picker
//! - [`shell`] - External command execution and Ctrl-C handling
//! - [`template`] - Compose template rendering
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use gns3_manager::config::Configuration;
//! use gns3_manager::template::{render_str, Substitutions};
//!
//! let subs = Substitutions::for_components(&Configuration::default());
//! let yaml = render_str("image: gns3-qemu:${QEMU_VERSION}-server-${GNS3_SERVER_VERSION}", &subs);
//! assert_eq!(yaml, "image: gns3-qemu:4.2.1-server-2.2.40");
//! ```

pub mod cli;
pub mod config;
pub mod docker;
pub mod error;
pub mod manager;
pub mod selector;
pub mod shell;
pub mod template;
pub mod ui;

pub use error::{ManagerError, Result};
