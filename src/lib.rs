//! create-smithery - scaffold Smithery MCP servers from templates.
//!
//! The CLI resolves a project configuration (prompting for whatever the
//! command line leaves open), clones the matching template out of the
//! Smithery SDK repository, installs its dependencies and prints next
//! steps.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration resolution and value types
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Dependency installation
//! - [`materialize`] - Cloning, subtree extraction and cleanup
//! - [`operation`] - Phase outcome values
//! - [`registry`] - Template registry
//! - [`scaffold`] - The end-to-end pipeline
//! - [`shell`] - Process execution and signal handling
//! - [`ui`] - Interactive prompts, spinners and terminal output
//!
//! # Example
//!
//! ```
//! use create_smithery::config::{PackageManager, ResolvedConfig, Transport};
//! use create_smithery::registry::lookup;
//!
//! let config = ResolvedConfig {
//!     project_name: "my-app".to_string(),
//!     transport: Transport::Stdio,
//!     package_manager: PackageManager::Npm,
//!     gpt: false,
//!     beta_warning: None,
//! };
//! assert_eq!(lookup(&config).subdirectory, "examples/local-filesystem");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod materialize;
pub mod operation;
pub mod registry;
pub mod scaffold;
pub mod shell;
pub mod ui;

pub use error::{Result, ScaffoldError};
