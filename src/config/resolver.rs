//! Reconciles command-line values with interactive answers.
//!
//! Precedence per field: explicit argument > prompted answer > built-in
//! default. All missing fields are asked for in a single batched prompt.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::registry::TemplateKey;
use crate::ui::{Answers, Prompt, PromptOption, PromptType, PromptValidator, UserInterface};

use super::schema::{PackageManager, ResolvedConfig, Transport};

/// Default project name offered by the prompt.
pub const DEFAULT_PROJECT_NAME: &str = "my-smithery-app";

/// Prompt key for the project name.
pub const PROJECT_NAME_KEY: &str = "projectName";
/// Prompt key for the package manager.
pub const PACKAGE_MANAGER_KEY: &str = "packageManager";
/// Prompt key for the transport.
pub const TRANSPORT_KEY: &str = "transport";

/// Values supplied on the command line (or via environment defaults).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveArgs {
    pub project_name: Option<String>,
    pub transport: Option<Transport>,
    pub gpt: bool,
    pub package_manager: Option<PackageManager>,
}

/// Builds a [`ResolvedConfig`] from arguments and prompts.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    base_dir: PathBuf,
}

impl ConfigResolver {
    /// Create a resolver that checks project names against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a complete configuration.
    ///
    /// Conflicts in the explicit arguments are rejected before any prompt
    /// is shown.
    pub fn resolve(&self, args: &ResolveArgs, ui: &mut dyn UserInterface) -> Result<ResolvedConfig> {
        if let Some(name) = &args.project_name {
            check_project_name(&self.base_dir, name).map_err(ScaffoldError::validation)?;
        }

        if args.gpt {
            if let Some(transport) = args.transport {
                if transport != Transport::Http {
                    return Err(ScaffoldError::validation(format!(
                        "ChatGPT apps only support the http transport (got {})",
                        transport
                    )));
                }
            }
        }

        let prompts = self.missing_prompts(args);
        let answers = if prompts.is_empty() {
            Answers::default()
        } else {
            tracing::debug!("Prompting for {} missing value(s)", prompts.len());
            ui.prompt_batch(&prompts)?
        };

        let project_name = match &args.project_name {
            Some(name) => name.trim().to_string(),
            None => {
                let name = answers
                    .get(PROJECT_NAME_KEY)
                    .unwrap_or(DEFAULT_PROJECT_NAME)
                    .trim()
                    .to_string();
                check_project_name(&self.base_dir, &name).map_err(ScaffoldError::validation)?;
                name
            }
        };

        let package_manager = match (args.package_manager, answers.get(PACKAGE_MANAGER_KEY)) {
            (Some(pm), _) => pm,
            (None, Some(answer)) => answer.parse()?,
            (None, None) => PackageManager::default(),
        };

        let transport = if args.gpt {
            Transport::Http
        } else {
            match (args.transport, answers.get(TRANSPORT_KEY)) {
                (Some(t), _) => t,
                (None, Some(answer)) => Transport::from_str_lossy(answer),
                (None, None) => Transport::default(),
            }
        };

        let beta_warning = TemplateKey::select(args.gpt, transport)
            .descriptor()
            .beta_warning
            .map(String::from);

        let config = ResolvedConfig {
            project_name,
            transport,
            package_manager,
            gpt: args.gpt,
            beta_warning,
        };
        tracing::debug!("Resolved configuration: {:?}", config);

        Ok(config)
    }

    /// Questions for every field the arguments leave open, in display order.
    fn missing_prompts(&self, args: &ResolveArgs) -> Vec<Prompt> {
        let mut prompts = Vec::new();

        if args.project_name.is_none() {
            let base_dir = self.base_dir.clone();
            prompts.push(Prompt {
                key: PROJECT_NAME_KEY.to_string(),
                question: "What is your project name?".to_string(),
                prompt_type: PromptType::Input,
                default: Some(DEFAULT_PROJECT_NAME.to_string()),
                validator: Some(PromptValidator::new(move |input| {
                    check_project_name(&base_dir, input)
                })),
            });
        }

        if args.package_manager.is_none() {
            prompts.push(Prompt {
                key: PACKAGE_MANAGER_KEY.to_string(),
                question: "Select a package manager:".to_string(),
                prompt_type: PromptType::Select {
                    options: PackageManager::all()
                        .iter()
                        .map(|pm| PromptOption::new(pm.program(), pm.program()))
                        .collect(),
                },
                default: Some(PackageManager::default().to_string()),
                validator: None,
            });
        }

        // The ChatGPT template only runs over HTTP, so there is nothing to ask.
        if args.transport.is_none() && !args.gpt {
            prompts.push(Prompt {
                key: TRANSPORT_KEY.to_string(),
                question: "Select the transport you want to use:".to_string(),
                prompt_type: PromptType::Select {
                    options: vec![
                        PromptOption::new("HTTP (runs on a server)", Transport::Http.as_str()),
                        PromptOption::new(
                            "STDIO (runs on the user's machine)",
                            Transport::Stdio.as_str(),
                        ),
                    ],
                },
                default: Some(Transport::default().to_string()),
                validator: None,
            });
        }

        prompts
    }
}

/// Reject empty names and names that already exist under `base_dir`.
fn check_project_name(base_dir: &Path, name: &str) -> std::result::Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }
    // symlink_metadata also catches dangling symlinks.
    if base_dir.join(name).symlink_metadata().is_ok() {
        return Err(format!(
            "Directory '{}' already exists. Please choose a different name",
            name
        ));
    }
    Ok(())
}
