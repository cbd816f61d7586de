//! End-to-end scaffolding pipeline.
//!
//! [`Scaffolder`] runs the phases in order: resolve configuration, look up
//! the template, clone it, install dependencies, then show the banner. Each
//! phase starts only after the previous one succeeded.

use std::path::PathBuf;

use crate::config::{ConfigResolver, ResolveArgs, ResolvedConfig};
use crate::error::Result;
use crate::installer::Installer;
use crate::materialize::Materializer;
use crate::operation::OperationResult;
use crate::registry::lookup;
use crate::shell::CommandRunner;
use crate::ui::{with_spinner, Banner, UserInterface};

/// Where to publish a finished server.
pub const PUBLISH_URL: &str = "https://smithery.ai/new";

/// Where to report problems with the scaffolder.
pub const REPORT_ISSUES_URL: &str = "https://github.com/smithery-ai/create-smithery/issues/new";

/// Example request to try against the generated server.
pub const SUGGESTION: &str = "Say hello to John";

/// How a scaffolding run ended (validation errors are returned as `Err`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Whether every phase succeeded.
    pub success: bool,
    /// Process exit code for this outcome.
    pub exit_code: i32,
    /// Directory the project was (or was being) created in.
    pub project_dir: PathBuf,
}

impl ScaffoldOutcome {
    fn completed(project_dir: PathBuf) -> Self {
        Self {
            success: true,
            exit_code: 0,
            project_dir,
        }
    }

    fn failed(project_dir: PathBuf) -> Self {
        Self {
            success: false,
            exit_code: 1,
            project_dir,
        }
    }
}

/// Sequences the scaffolding phases.
pub struct Scaffolder<'a> {
    base_dir: PathBuf,
    runner: &'a dyn CommandRunner,
    template_repo: Option<String>,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder that creates projects under `base_dir`.
    ///
    /// `template_repo` replaces the registry's repository URL when set.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        runner: &'a dyn CommandRunner,
        template_repo: Option<String>,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            runner,
            template_repo,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Configuration problems and cancelled prompts are returned as `Err`.
    /// Clone and install failures are reported through `ui` and produce an
    /// unsuccessful outcome with exit code 1.
    pub fn run(&self, args: &ResolveArgs, ui: &mut dyn UserInterface) -> Result<ScaffoldOutcome> {
        let config = ConfigResolver::new(&self.base_dir).resolve(args, ui)?;
        let template = lookup(&config);
        let url = self
            .template_repo
            .as_deref()
            .unwrap_or(template.repository_url);
        let project_dir = self.base_dir.join(&config.project_name);

        tracing::debug!(
            "Scaffolding {} from {} ({:?})",
            project_dir.display(),
            url,
            template.key
        );

        ui.command(&format!(
            "git clone --depth 1 '{}' {}",
            url, config.project_name
        ));
        let cloned = with_spinner(ui, "Cloning repository...", "Repository cloned", || {
            Materializer::new(self.runner).materialize(url, &project_dir, template.extract_path())
        });
        if !cloned.success {
            ui.error(&format!("Clone failed: {}", cloned.error_detail()));
            return Ok(ScaffoldOutcome::failed(project_dir));
        }
        report_detail(ui, &cloned);

        ui.command(&format!("{} install", config.package_manager));
        let installed = with_spinner(ui, "Installing packages...", "Packages installed", || {
            Installer::new(self.runner).install(&project_dir, config.package_manager)
        });
        if !installed.success {
            ui.error(&format!("Install failed: {}", installed.error_detail()));
            return Ok(ScaffoldOutcome::failed(project_dir));
        }
        report_detail(ui, &installed);

        ui.show_banner(&success_banner(&config));

        Ok(ScaffoldOutcome::completed(project_dir))
    }
}

fn report_detail(ui: &mut dyn UserInterface, result: &OperationResult) {
    if ui.output_mode().shows_details() {
        ui.message(&result.message);
    }
}

/// Banner shown once the project is ready.
pub fn success_banner(config: &ResolvedConfig) -> Banner {
    Banner {
        title: format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        next_step: format!(
            "cd {} && {}",
            config.project_name,
            config.package_manager.dev_command()
        ),
        suggestion: SUGGESTION.to_string(),
        links: vec![
            ("To publish".to_string(), PUBLISH_URL.to_string()),
            ("Report issues".to_string(), REPORT_ISSUES_URL.to_string()),
        ],
        beta_warning: config.beta_warning.clone(),
    }
}
