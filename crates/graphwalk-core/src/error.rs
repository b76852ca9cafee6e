//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success, including ladder searches rejected for bad words
//! - 1: Any fatal failure (bad arguments, unreadable or malformed input)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::ladder::LadderError;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Usage, load, or other fatal failure (1)
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphwalkError {
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid graph at line {line}: {reason}")]
    InvalidGraph { line: usize, reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error(transparent)]
    Ladder(#[from] LadderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl GraphwalkError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphwalkError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a graph parse error anchored to a 1-based line number
    pub fn invalid_graph(line: usize, reason: impl Into<String>) -> Self {
        GraphwalkError::InvalidGraph {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::Failure
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidGraph { .. } => "invalid_graph",
            GraphwalkError::InvalidConfig { .. } => "invalid_config",
            GraphwalkError::Ladder(err) => err.error_type(),
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;
