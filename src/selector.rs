//! Interactive version selection.
//!
//! The selector lists a component's candidate versions (numbered from 1) and
//! keeps asking until it gets a valid number, `q`, or an interruption. Bad
//! input is reported and asked again; it never ends the loop.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::Component;
use crate::error::Result;
use crate::ui::{Prompt, PromptResult, UserInterface};

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked this version.
    Chosen(String),
    /// The user quit or pressed Ctrl-C.
    Cancelled,
    /// The component has no candidate versions configured.
    NoneAvailable,
}

/// A parsed answer to the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the candidate list.
    Index(usize),
    /// The quit keyword.
    Quit,
}

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Invalid input. Please enter a number or 'q' to quit")]
    NotANumber,

    #[error("Invalid choice. Please enter a number between 1 and {max}")]
    OutOfRange { max: usize },
}

/// Interpret one answer against a list of `count` candidates.
///
/// Accepts a 1-based number in `[1, count]` or `q`/`Q`.
pub fn parse_choice(input: &str, count: usize) -> std::result::Result<Choice, ChoiceError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(Choice::Quit);
    }

    let number: i64 = input.parse().map_err(|_| ChoiceError::NotANumber)?;
    if number >= 1 && (number as u64) <= count as u64 {
        Ok(Choice::Index(number as usize - 1))
    } else {
        Err(ChoiceError::OutOfRange { max: count })
    }
}

/// Prompt key used for a component's selection prompt.
pub fn prompt_key(component: Component) -> String {
    format!("version.{}", component.name())
}

/// Let the user pick one of `component`'s available versions.
///
/// Returns [`Selection::NoneAvailable`] without prompting when the list is
/// empty or missing; the caller decides how to report that.
pub fn select(
    component: Component,
    available: &BTreeMap<String, Vec<String>>,
    ui: &mut dyn UserInterface,
) -> Result<Selection> {
    let versions = match available.get(component.name()) {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(Selection::NoneAvailable),
    };

    ui.message(&format!("\nAvailable {} versions:", component));
    for (i, version) in versions.iter().enumerate() {
        ui.message(&format!("  {}. {}", i + 1, version));
    }

    let prompt = Prompt::new(
        prompt_key(component),
        format!(
            "Select {} version (1-{}) or 'q' to quit",
            component,
            versions.len()
        ),
    );

    loop {
        let answer = match ui.prompt(&prompt)? {
            PromptResult::String(answer) => answer,
            PromptResult::Interrupted => {
                ui.message("\nCancelled.");
                return Ok(Selection::Cancelled);
            }
        };

        match parse_choice(&answer, versions.len()) {
            Ok(Choice::Index(idx)) => {
                let selected = versions[idx].clone();
                ui.message(&format!("Selected: {}", selected));
                return Ok(Selection::Chosen(selected));
            }
            Ok(Choice::Quit) => return Ok(Selection::Cancelled),
            Err(e) => {
                tracing::debug!("Rejected selection input {:?}: {}", answer, e);
                ui.warning(&e.to_string());
            }
        }
    }
}
