//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - Prompts, spinners and the closing banner
//!
//! # Example
//!
//! ```
//! use create_smithery::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.message("Scaffolding my-app");
//! ui.success("Repository cloned");
//! ```

pub mod banner;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use banner::Banner;
pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::{with_spinner, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

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

    /// Echo the shell-equivalent of a command about to run.
    fn command(&mut self, cmd: &str);

    /// Show a single prompt and get the answer.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Ask several questions in one interaction.
    ///
    /// Answers are keyed by [`Prompt::key`].
    fn prompt_batch(&mut self, prompts: &[Prompt]) -> Result<Answers> {
        let mut answers = Answers::default();
        for prompt in prompts {
            let value = self.prompt(prompt)?;
            answers.insert(&prompt.key, value);
        }
        Ok(answers)
    }

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show the closing banner.
    fn show_banner(&mut self, banner: &Banner);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Synchronous input check run on every submission.
///
/// Returns `Err` with a user-facing message to reject the input.
#[derive(Clone)]
pub struct PromptValidator(Arc<dyn Fn(&str) -> std::result::Result<(), String> + Send + Sync>);

impl PromptValidator {
    /// Wrap a validation function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<(), String> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Run the check against an input.
    pub fn check(&self, input: &str) -> std::result::Result<(), String> {
        (self.0)(input)
    }
}

impl fmt::Debug for PromptValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PromptValidator(..)")
    }
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in [`Answers`]).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
    /// Optional check applied to free-text input.
    pub validator: Option<PromptValidator>,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Answers collected from a batch of prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashMap<String, String>);

impl Answers {
    /// Record an answer.
    pub fn insert(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    /// Look up an answer by prompt key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no answers were collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
