//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. There are no
//! subcommands: [`CommandDispatcher`] picks a command from the top-level
//! flags and falls back to scaffolding.

pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
