//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::operation::OperationResult;

use super::theme::Theme;
use super::{SpinnerHandle, UserInterface};

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: Theme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: Theme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("✶✸✹✺✹✷ ")
            .template("{spinner:.yellow} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

/// Run `action` under a spinner.
///
/// The spinner is purely cosmetic: the phase's result is returned unchanged
/// whether it succeeded or failed.
pub fn with_spinner<F>(
    ui: &mut dyn UserInterface,
    start: &str,
    end: &str,
    action: F,
) -> OperationResult
where
    F: FnOnce() -> OperationResult,
{
    let mut spinner = ui.start_spinner(start);
    let result = action();
    if result.success {
        spinner.finish_success(end);
    } else {
        spinner.finish_error(end);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::ui::{MockUI, SpinnerStatus};

    #[test]
    fn spinner_creation() {
        let spinner = ProgressSpinner::new("Testing...", Theme::plain());
        drop(spinner);
    }

    #[test]
    fn spinner_finish_success() {
        let mut spinner = ProgressSpinner::new("Testing...", Theme::plain());
        spinner.finish_success("Done");
    }

    #[test]
    fn spinner_finish_error() {
        let mut spinner = ProgressSpinner::new("Testing...", Theme::plain());
        spinner.finish_error("Failed");
    }

    #[test]
    fn with_spinner_returns_action_value() {
        let mut ui = MockUI::new();
        let result = with_spinner(&mut ui, "Working...", "Worked", || {
            OperationResult::success("done")
        });

        assert!(result.success);
        assert_eq!(result.message, "done");
        assert_eq!(ui.spinners(), ["Working..."]);
        assert_eq!(ui.spinner_outcomes(), [("Worked".to_string(), SpinnerStatus::Success)]);
    }

    #[test]
    fn with_spinner_marks_failed_operation_result() {
        let mut ui = MockUI::new();
        let result = with_spinner(&mut ui, "Cloning repository...", "Repository cloned", || {
            OperationResult::failure("clone failed", ScaffoldError::validation("x"))
        });

        assert!(!result.success);
        assert_eq!(ui.spinner_outcomes()[0].1, SpinnerStatus::Error);
    }
}
