//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers are queued per prompt
//! key; once a key's queue is empty the prompt reports an interruption, so
//! retry loops under test always terminate.
//!
//! # Example
//!
//! ```
//! use gns3_manager::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("version.qemu", vec!["5", "1"]);
//!
//! ui.message("Available qemu versions:");
//! let first = ui.prompt(&Prompt::new("version.qemu", "Select")).unwrap();
//! assert_eq!(first.as_str(), Some("5"));
//! assert!(ui.has_message("Available qemu"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// Sentinel response that makes a queued prompt report an interruption.
pub const INTERRUPT: &str = "\u{3}";

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    commands: Vec<String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for a prompt key, returned in order.
    ///
    /// Use [`INTERRUPT`] as an answer to simulate Ctrl-C.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        self.prompt_queues
            .entry(key.to_string())
            .or_default()
            .extend(responses.into_iter().map(String::from));
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all echoed command lines.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.commands.clear();
        self.prompts_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let next = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(VecDeque::pop_front);

        Ok(match next {
            Some(response) if response != INTERRUPT => {
                PromptResult::String(response.trim().to_string())
            }
            _ => PromptResult::Interrupted,
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn mock_ui_returns_queued_responses_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("menu", vec!["1", "8"]);
        let prompt = Prompt::new("menu", "Enter your choice");

        assert_eq!(ui.prompt(&prompt).unwrap().as_str(), Some("1"));
        assert_eq!(ui.prompt(&prompt).unwrap().as_str(), Some("8"));
        assert_eq!(ui.prompts_shown(), &["menu", "menu"]);
    }

    #[test]
    fn mock_ui_interrupts_when_queue_exhausted() {
        let mut ui = MockUI::new();
        let result = ui.prompt(&Prompt::new("menu", "Enter")).unwrap();
        assert_eq!(result, PromptResult::Interrupted);
    }

    #[test]
    fn mock_ui_interrupt_sentinel() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("menu", vec![INTERRUPT, "1"]);
        let prompt = Prompt::new("menu", "Enter");

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Interrupted);
        assert_eq!(ui.prompt(&prompt).unwrap().as_str(), Some("1"));
    }

    #[test]
    fn mock_ui_queues_are_per_key() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("a", vec!["x"]);
        ui.queue_prompt_responses("b", vec!["y"]);

        assert_eq!(ui.prompt(&Prompt::new("b", "?")).unwrap().as_str(), Some("y"));
        assert_eq!(ui.prompt(&Prompt::new("a", "?")).unwrap().as_str(), Some("x"));
    }

    #[test]
    fn mock_ui_captures_headers_and_commands() {
        let mut ui = MockUI::new();
        ui.show_header("GNS3 Manager");
        ui.show_command("docker build .");

        assert_eq!(ui.headers(), &["GNS3 Manager"]);
        assert_eq!(ui.commands(), &["docker build ."]);
    }

    #[test]
    fn mock_ui_clear() {
        let mut ui = MockUI::new();
        ui.message("test");
        ui.error("err");
        ui.clear();
        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn mock_ui_output_mode_is_normal() {
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
    }
}
