//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the config
//! once and routes CLI subcommands to their implementations:
//! - `menu` (the default) runs the interactive loop
//! - every other subcommand performs one menu action and exits

pub mod build;
pub mod completions;
pub mod compose;
pub mod dispatcher;
pub mod generate;
pub mod menu;
pub mod select;
pub mod set;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
