//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{Result, ScaffoldError};

use super::{Prompt, PromptOption, PromptType};

/// Convert dialoguer errors to ScaffoldError.
///
/// Ctrl-C inside a prompt comes back as an interrupted I/O error, which
/// [`ScaffoldError::is_cancellation`] recognises.
fn map_dialoguer_err(e: dialoguer::Error) -> ScaffoldError {
    ScaffoldError::Io(e.into())
}

/// Dialoguer theme with a cyan `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).cyan().bold(),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match &prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(&prompt.question);

    if let Some(default) = &prompt.default {
        input = input.default(default.clone());
    }

    if let Some(validator) = prompt.validator.clone() {
        input = input.validate_with(move |value: &String| validator.check(value));
    }

    input.interact_on(term).map_err(map_dialoguer_err)
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<String> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = default_index(prompt, options);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    options
        .get(selection)
        .map(|o| o.value.clone())
        .ok_or_else(|| ScaffoldError::validation(format!("Invalid selection for {}", prompt.key)))
}

/// Index of the option matching the prompt default, or the first option.
fn default_index(prompt: &Prompt, options: &[PromptOption]) -> usize {
    prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0)
}
