//! Error types for scaffolding operations.
//!
//! This module defines [`ScaffoldError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems surface as `Validation` before any side effect
//! - Clone, extraction and install failures are carried inside an
//!   [`OperationResult`](crate::operation::OperationResult) rather than
//!   propagated, so the orchestrator decides how to report them
//! - `Cancelled` (and interrupted I/O) is not a failure; the CLI exits 0

use thiserror::Error;

/// Core error type for scaffolding operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Bad or conflicting configuration.
    #[error("{message}")]
    Validation { message: String },

    /// The shallow clone of the template repository failed.
    #[error("Failed to clone {url}: {message}")]
    Clone { url: String, message: String },

    /// Promoting the template subdirectory failed after a successful clone.
    #[error("Failed to extract template: {message}")]
    Extraction { message: String },

    /// The package manager failed to install dependencies.
    #[error("{package_manager} install failed: {message}")]
    Install {
        package_manager: String,
        message: String,
    },

    /// A program could not be found or started.
    #[error("Failed to run {command}: {message}")]
    SpawnFailed { command: String, message: String },

    /// The user aborted an interactive prompt.
    #[error("Cancelled")]
    Cancelled,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScaffoldError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error represents the user cancelling rather than a failure.
    ///
    /// A Ctrl-C inside a raw-mode prompt arrives as an interrupted read.
    pub fn is_cancellation(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            _ => false,
        }
    }
}

/// Result type alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
