//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.

use std::io::{BufRead, IsTerminal, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Whether stdin is attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Interpret a yes/no answer. A blank answer takes the default.
fn parse_answer(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "s" | "sim" => Some(true),
        "n" | "no" | "nao" | "não" => Some(false),
        _ => None,
    }
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they decline.
/// Returns `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let stdin = std::io::stdin();
    loop {
        eprint!("{} {} ", message, hint);
        std::io::stderr()
            .flush()
            .map_err(|e| PromptError::IoError(e.to_string()))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        if read == 0 {
            return Err(PromptError::Cancelled);
        }
        if let Some(answer) = parse_answer(&line, default) {
            return Ok(answer);
        }
    }
}

/// Prompt for masked input (e.g., passwords).
///
/// The input is not echoed to the terminal.
pub fn password(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    rpassword::prompt_password(message).map_err(|e| PromptError::IoError(e.to_string()))
}
