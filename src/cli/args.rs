//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use clap_complete::Shell;

use crate::config::{PackageManager, ResolveArgs, Transport};
use crate::ui::OutputMode;

/// Scaffold a new Smithery MCP server from a template.
#[derive(Debug, Parser)]
#[command(name = "create-smithery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project directory to create
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Transport the server uses
    #[arg(short, long, value_enum)]
    pub transport: Option<Transport>,

    /// Create a ChatGPT app (beta, http transport only)
    #[arg(long)]
    pub gpt: bool,

    /// Package manager used to install dependencies
    #[arg(short, long, value_enum, env = "CREATE_SMITHERY_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Clone templates from this repository instead of the default
    #[arg(
        long,
        value_name = "URL",
        env = "CREATE_SMITHERY_TEMPLATE_REPO",
        hide = true
    )]
    pub template_repo: Option<String>,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// List available templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the global flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Arguments for configuration resolution.
    pub fn resolve_args(&self) -> ResolveArgs {
        ResolveArgs {
            project_name: self.name.clone(),
            transport: self.transport,
            gpt: self.gpt,
            package_manager: self.package_manager,
        }
    }
}
