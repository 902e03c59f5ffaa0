//! External command execution and Ctrl-C handling.

pub mod command;
pub mod interrupt;
pub mod mock;

pub use command::{CommandLine, CommandRunner, ExitInfo, ProcessRunner, RunMode, RunOutcome};
pub use interrupt::{install_handler, CommandGuard};
pub use mock::MockRunner;
