//! Dependency installation for a freshly materialized project.

use std::path::Path;

use crate::config::PackageManager;
use crate::error::ScaffoldError;
use crate::operation::OperationResult;
use crate::shell::{CommandRunner, Invocation};

/// Builds the `<pm> install` invocation for `project_dir`.
pub fn install_invocation(project_dir: &Path, package_manager: PackageManager) -> Invocation {
    Invocation::new(package_manager.program())
        .args(["install"])
        .current_dir(project_dir)
}

/// Runs the selected package manager's install command.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Install dependencies in `project_dir`. No retries.
    pub fn install(&self, project_dir: &Path, package_manager: PackageManager) -> OperationResult {
        let invocation = install_invocation(project_dir, package_manager);

        let failure = match self.runner.run(&invocation) {
            Ok(result) if result.success => None,
            Ok(result) => Some(result.failure_detail()),
            Err(e) => Some(e.to_string()),
        };

        match failure {
            None => OperationResult::success(format!(
                "Installed packages in {} with {}",
                project_dir.display(),
                package_manager
            )),
            Some(message) => {
                tracing::warn!("{} install failed: {}", package_manager, message);
                OperationResult::failure(
                    format!("Failed to install packages in {}", project_dir.display()),
                    ScaffoldError::Install {
                        package_manager: package_manager.to_string(),
                        message,
                    },
                )
            }
        }
    }
}
