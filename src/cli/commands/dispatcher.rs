//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI to a command

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::create::CreateCommand;
use super::list::ListTemplatesCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Process exit status. Codes outside `0..=255` become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches the parsed CLI to a command implementation.
pub struct CommandDispatcher {
    base_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher creating projects under `base_dir`.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Dispatch and execute using real subprocesses.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.dispatch_with(cli, &SystemRunner, ui)
    }

    /// Dispatch and execute with an explicit command runner.
    ///
    /// `--completions` and `--list-templates` take precedence over
    /// scaffolding.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return CompletionsCommand::new(shell).execute(ui);
        }

        if cli.list_templates {
            return ListTemplatesCommand::new().execute(ui);
        }

        CreateCommand::new(
            &self.base_dir,
            runner,
            cli.resolve_args(),
            cli.template_repo.clone(),
        )
        .execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::fake::FakeRunner;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn exit_status_keeps_small_codes() {
        assert_eq!(CommandResult::success().exit_status(), 0);
        assert_eq!(CommandResult::failure(1).exit_status(), 1);
        assert_eq!(CommandResult::failure(130).exit_status(), 130);
    }

    #[test]
    fn exit_status_never_wraps_to_success() {
        assert_eq!(CommandResult::failure(256).exit_status(), 1);
        assert_eq!(CommandResult::failure(-1).exit_status(), 1);
    }

    #[test]
    fn list_templates_runs_no_commands() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new();
        let mut ui = MockUI::new();
        let cli = Cli::parse_from(["create-smithery", "my-app", "--list-templates"]);

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch_with(&cli, &runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(runner.calls().is_empty());
        assert!(ui.has_message("gpt"));
    }

    #[test]
    fn scaffolds_by_default() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new().fail("git", 128, "fatal: not found");
        let mut ui = MockUI::new();
        let cli = Cli::parse_from(["create-smithery", "my-app", "-t", "http", "-p", "npm"]);

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch_with(&cli, &runner, &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(runner.calls_to("git"), 1);
    }
}
