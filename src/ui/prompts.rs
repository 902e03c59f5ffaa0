//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{ManagerError, Result};

use super::{Prompt, PromptResult};

/// Convert dialoguer errors, surfacing Ctrl-C as an interruption.
fn map_dialoguer_err(e: dialoguer::Error) -> std::result::Result<PromptResult, ManagerError> {
    let io_err: std::io::Error = e.into();
    if is_interruption(&io_err) {
        Ok(PromptResult::Interrupted)
    } else {
        Err(ManagerError::Io(io_err))
    }
}

/// Whether an input error means the operator gave up on the prompt.
pub(crate) fn is_interruption(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof
    )
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask for one line of input on the terminal.
pub fn prompt_line(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let answer = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term);

    match answer {
        Ok(line) => Ok(PromptResult::String(line.trim().to_string())),
        Err(e) => {
            term.show_cursor().ok();
            map_dialoguer_err(e)
        }
    }
}
