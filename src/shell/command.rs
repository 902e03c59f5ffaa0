//! External command execution.
//!
//! Commands are run directly (program + argument list, no shell) with the
//! operator's terminal attached, so build output and logs stream straight
//! through. The runner only classifies how the process ended.

use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{ManagerError, Result};

use super::interrupt::CommandGuard;

/// A resolved program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Executable name or path.
    pub program: String,
    /// Arguments, passed verbatim.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build from a program followed by its leading arguments.
    ///
    /// Returns `None` for an empty list.
    pub fn from_words(words: &[String]) -> Option<Self> {
        let (program, rest) = words.split_first()?;
        Some(Self::new(program.clone()).args(rest.iter().cloned()))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// How the runner treats the process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// A non-zero exit is a failure.
    Checked,
    /// The exit status is ignored.
    Unchecked,
    /// Like `Unchecked`, for open-ended output the operator stops with Ctrl-C.
    Streaming,
}

/// Exit details of a failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitInfo {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,
    /// How long the command ran.
    pub duration: Duration,
}

/// How a command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The command completed (or its status was not checked).
    Success,
    /// A checked command exited unsuccessfully.
    Failure(ExitInfo),
    /// The program could not be found.
    ToolNotFound,
    /// The operator stopped the command with Ctrl-C.
    Interrupted,
}

impl RunOutcome {
    /// Whether the command completed without failure.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Convert failure outcomes into errors for `command`.
    ///
    /// `Success` and `Interrupted` are both `Ok`; interruption is a
    /// cancellation, not an error.
    pub fn into_result(self, command: &CommandLine) -> Result<RunOutcome> {
        match self {
            Self::Failure(info) => Err(ManagerError::CommandFailed {
                command: command.to_string(),
                code: info.code,
            }),
            Self::ToolNotFound => Err(ManagerError::ToolNotFound {
                tool: command.program.clone(),
            }),
            other => Ok(other),
        }
    }
}

/// Executes external commands.
pub trait CommandRunner {
    /// Run `command` to completion and classify the result.
    ///
    /// Errors are reserved for launch failures other than "not found".
    fn run(&mut self, command: &CommandLine, mode: RunMode) -> Result<RunOutcome>;
}

/// Runs commands as child processes sharing the terminal.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a runner; children inherit the current directory.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command: &CommandLine, mode: RunMode) -> Result<RunOutcome> {
        let start = Instant::now();

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!("Running {} ({:?})", command, mode);

        let guard = CommandGuard::enter();

        let status = match cmd.status() {
            Ok(status) => status,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found on PATH", command.program);
                return Ok(RunOutcome::ToolNotFound);
            }
            Err(e) => {
                return Err(ManagerError::Other(
                    anyhow::Error::new(e).context(format!("failed to launch {}", command.program)),
                ));
            }
        };

        let duration = start.elapsed();
        tracing::debug!("{} exited with {:?} after {:?}", command, status.code(), duration);

        if guard.interrupted() {
            tracing::info!("{} interrupted by Ctrl-C", command);
            return Ok(RunOutcome::Interrupted);
        }

        match mode {
            RunMode::Checked if !status.success() => Ok(RunOutcome::Failure(ExitInfo {
                code: status.code(),
                duration,
            })),
            _ => Ok(RunOutcome::Success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::interrupt::{command_running, record_interrupt, serial};
    use std::thread;

    fn sh(script: &str) -> CommandLine {
        CommandLine::new("sh").args(["-c", script])
    }

    /// Simulate Ctrl-C once the next command has started.
    fn interrupt_when_running() -> thread::JoinHandle<bool> {
        thread::spawn(|| {
            let deadline = Instant::now() + Duration::from_secs(5);
            while !command_running() && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(5));
            }
            record_interrupt()
        })
    }

    #[test]
    fn command_line_display_quotes_spaces() {
        let cmd = CommandLine::new("docker")
            .arg("build")
            .arg("--label")
            .arg("a b");
        assert_eq!(cmd.to_string(), "docker build --label 'a b'");
    }

    #[test]
    fn from_words_splits_program() {
        let words = vec!["docker".to_string(), "compose".to_string()];
        let cmd = CommandLine::from_words(&words).unwrap().arg("up");
        assert_eq!(cmd.program, "docker");
        assert_eq!(cmd.args, vec!["compose", "up"]);
        assert!(CommandLine::from_words(&[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn checked_success() {
        let _serial = serial();
        let outcome = ProcessRunner::new().run(&sh("exit 0"), RunMode::Checked).unwrap();
        assert_eq!(outcome, RunOutcome::Success);
    }

    #[cfg(unix)]
    #[test]
    fn checked_failure_reports_exit_code() {
        let _serial = serial();
        let outcome = ProcessRunner::new().run(&sh("exit 3"), RunMode::Checked).unwrap();
        match outcome {
            RunOutcome::Failure(info) => assert_eq!(info.code, Some(3)),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn unchecked_ignores_exit_code() {
        let _serial = serial();
        let outcome = ProcessRunner::new().run(&sh("exit 3"), RunMode::Unchecked).unwrap();
        assert_eq!(outcome, RunOutcome::Success);
    }

    #[cfg(unix)]
    #[test]
    fn streaming_ignores_exit_code() {
        let _serial = serial();
        let outcome = ProcessRunner::new().run(&sh("exit 3"), RunMode::Streaming).unwrap();
        assert_eq!(outcome, RunOutcome::Success);
    }

    #[cfg(unix)]
    #[test]
    fn ctrl_c_during_streaming_is_interrupted() {
        let _serial = serial();
        let trigger = interrupt_when_running();

        let outcome = ProcessRunner::new()
            .run(&sh("sleep 1"), RunMode::Streaming)
            .unwrap();

        assert!(trigger.join().unwrap());
        assert_eq!(outcome, RunOutcome::Interrupted);
        assert!(!command_running());
    }

    #[cfg(unix)]
    #[test]
    fn ctrl_c_during_checked_run_is_interrupted_not_failure() {
        let _serial = serial();
        let trigger = interrupt_when_running();

        let outcome = ProcessRunner::new()
            .run(&sh("sleep 1; exit 130"), RunMode::Checked)
            .unwrap();

        assert!(trigger.join().unwrap());
        assert_eq!(outcome, RunOutcome::Interrupted);
    }

    #[test]
    fn missing_program_is_tool_not_found() {
        let _serial = serial();
        let cmd = CommandLine::new("gns3-manager-definitely-not-installed");
        let outcome = ProcessRunner::new().run(&cmd, RunMode::Checked).unwrap();
        assert_eq!(outcome, RunOutcome::ToolNotFound);
        assert!(!command_running());
    }

    #[test]
    fn into_result_maps_failures() {
        let cmd = CommandLine::new("docker-compose").arg("down");

        let failed = RunOutcome::Failure(ExitInfo {
            code: Some(1),
            duration: Duration::ZERO,
        })
        .into_result(&cmd);
        assert!(matches!(
            failed,
            Err(ManagerError::CommandFailed { code: Some(1), .. })
        ));

        let missing = RunOutcome::ToolNotFound.into_result(&cmd);
        assert!(matches!(missing, Err(ManagerError::ToolNotFound { tool }) if tool == "docker-compose"));

        assert_eq!(
            RunOutcome::Interrupted.into_result(&cmd).unwrap(),
            RunOutcome::Interrupted
        );
    }
}
