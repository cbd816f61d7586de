//! Outcome of a materialize or install phase.

use crate::error::ScaffoldError;

/// Result of one pipeline phase, consumed once by the orchestrator.
///
/// Phases never return `Err`; every failure is folded into a failed
/// `OperationResult` carrying the underlying error.
#[derive(Debug)]
pub struct OperationResult {
    /// Whether the phase completed.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Underlying error for failed phases.
    pub error: Option<ScaffoldError>,
}

impl OperationResult {
    /// Create a successful result.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    /// Create a failed result carrying its cause.
    pub fn failure(message: impl Into<String>, error: ScaffoldError) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error),
        }
    }

    /// Description of the failure: the underlying error if present,
    /// otherwise the message.
    pub fn error_detail(&self) -> String {
        match &self.error {
            Some(e) => e.to_string(),
            None => self.message.clone(),
        }
    }
}
