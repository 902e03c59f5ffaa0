//! Recording command runner for tests.
//!
//! # Example
//!
//! ```
//! use gns3_manager::shell::{CommandLine, CommandRunner, MockRunner, RunMode, RunOutcome};
//!
//! let mut runner = MockRunner::new();
//! runner.queue_outcome(RunOutcome::ToolNotFound);
//!
//! let cmd = CommandLine::new("docker").arg("build");
//! assert_eq!(runner.run(&cmd, RunMode::Checked).unwrap(), RunOutcome::ToolNotFound);
//! assert_eq!(runner.run(&cmd, RunMode::Checked).unwrap(), RunOutcome::Success);
//! assert_eq!(runner.invocations().len(), 2);
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::command::{CommandLine, CommandRunner, RunMode, RunOutcome};

/// Command runner that records invocations and replays scripted outcomes.
///
/// Once the script is exhausted every command succeeds.
#[derive(Debug, Default)]
pub struct MockRunner {
    invocations: Vec<(CommandLine, RunMode)>,
    outcomes: VecDeque<RunOutcome>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next unanswered invocation.
    pub fn queue_outcome(&mut self, outcome: RunOutcome) {
        self.outcomes.push_back(outcome);
    }

    /// Every command run so far, with its mode.
    pub fn invocations(&self) -> &[(CommandLine, RunMode)] {
        &self.invocations
    }

    /// Rendered command lines run so far.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(|(c, _)| c.to_string()).collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, command: &CommandLine, mode: RunMode) -> Result<RunOutcome> {
        self.invocations.push((command.clone(), mode));
        Ok(self.outcomes.pop_front().unwrap_or(RunOutcome::Success))
    }
}
