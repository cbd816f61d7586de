//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, ScaffoldError};

use super::theme::Theme;
use super::{Banner, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Environment prefix for answering prompts without a terminal.
///
/// `CREATE_SMITHERY_PROMPT_PROJECTNAME=my-app` answers the `projectName` prompt.
pub const PROMPT_ENV_PREFIX: &str = "CREATE_SMITHERY_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `CREATE_SMITHERY_PROMPT_*` environment
/// variables or the prompt's default, and still pass through the prompt's
/// validator. Output is plain text without spinners or colors.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
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
        println!("✔ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✖ {}", msg);
    }

    fn command(&mut self, cmd: &str) {
        if self.mode.shows_commands() {
            println!("  $ {}", cmd);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());

        let value = match self.env_overrides.get(&env_key) {
            Some(value) => value.clone(),
            None => prompt.default.clone().ok_or_else(|| {
                ScaffoldError::validation(format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ))
            })?,
        };

        if let Some(validator) = &prompt.validator {
            validator
                .check(&value)
                .map_err(|message| ScaffoldError::validation(format!("{}: {}", message, value)))?;
        }

        Ok(value)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(LineSpinner)
    }

    fn show_banner(&mut self, banner: &Banner) {
        println!();
        println!("{}", banner.title);
        println!();
        for line in banner.lines(&Theme::plain()) {
            println!("{}", line);
        }
        println!();

        if let Some(warning) = &banner.beta_warning {
            println!("{}\n", warning);
        }
    }
}

/// Spinner that prints its final state as a single line.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("✔ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✖ {}", msg);
    }
}
