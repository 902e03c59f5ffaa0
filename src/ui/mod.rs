//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped stdin and headless runs
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use gns3_manager::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("menu", vec!["3"]);
//!
//! let answer = ui.prompt(&Prompt::new("menu", "Enter your choice")).unwrap();
//! assert_eq!(answer.as_str(), Some("3"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_line;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ManagerTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask for one line of input.
    ///
    /// Ctrl-C and end of input come back as [`PromptResult::Interrupted`].
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Echo an external command line before it runs.
    fn show_command(&mut self, command: &str);
}

/// A line-input prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Stable key identifying the prompt (used by mocks).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Create a prompt.
    pub fn new(key: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// The line the user entered, surrounding whitespace removed.
    String(String),
    /// The user pressed Ctrl-C or input ended.
    Interrupted,
}

impl PromptResult {
    /// Entered text, unless interrupted.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Interrupted => None,
        }
    }
}
