//! Line-oriented UI for piped stdin and headless runs.
//!
//! Prompts are printed and answered one line at a time from the input
//! stream, so the menu can be driven by a script. End of input counts as an
//! interruption, which makes every prompt loop terminate.

use std::io::{BufRead, BufReader, Write};

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(BufReader::new(std::io::stdin())))
    }

    /// Create with an explicit input stream (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self { mode, input }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        print!("{}: ", prompt.question);
        std::io::stdout().flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                println!();
                Ok(PromptResult::Interrupted)
            }
            Ok(_) => {
                let answer = line.trim().to_string();
                println!("{}", answer);
                Ok(PromptResult::String(answer))
            }
            Err(e) if super::prompts::is_interruption(&e) => Ok(PromptResult::Interrupted),
            Err(e) => Err(e.into()),
        }
    }

    fn show_header(&mut self, title: &str) {
        let rule = "=".repeat(50);
        println!("\n{}\n{}\n{}", rule, title, rule);
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_command_output() {
            println!("$ {}", command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ui_with(input: &str) -> NonInteractiveUI {
        NonInteractiveUI::with_input(OutputMode::Normal, Box::new(Cursor::new(input.to_string())))
    }

    #[test]
    fn prompt_reads_lines_in_order() {
        let mut ui = ui_with("1\n  q  \n");
        let prompt = Prompt::new("menu", "Enter your choice");

        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("1".into())
        );
        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("q".into())
        );
    }

    #[test]
    fn end_of_input_is_interruption() {
        let mut ui = ui_with("");
        let result = ui.prompt(&Prompt::new("menu", "Enter your choice")).unwrap();
        assert_eq!(result, PromptResult::Interrupted);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut ui = ui_with("8");
        let result = ui.prompt(&Prompt::new("menu", "Enter your choice")).unwrap();
        assert_eq!(result.as_str(), Some("8"));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
