//! The default command: scaffold a new project.

use std::path::{Path, PathBuf};

use crate::config::ResolveArgs;
use crate::error::Result;
use crate::scaffold::Scaffolder;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs the scaffolding pipeline.
pub struct CreateCommand<'a> {
    base_dir: PathBuf,
    runner: &'a dyn CommandRunner,
    args: ResolveArgs,
    template_repo: Option<String>,
}

impl<'a> CreateCommand<'a> {
    pub fn new(
        base_dir: &Path,
        runner: &'a dyn CommandRunner,
        args: ResolveArgs,
        template_repo: Option<String>,
    ) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            runner,
            args,
            template_repo,
        }
    }
}

impl Command for CreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scaffolder = Scaffolder::new(&self.base_dir, self.runner, self.template_repo.clone());
        let outcome = scaffolder.run(&self.args, ui)?;

        if outcome.success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code))
        }
    }
}
