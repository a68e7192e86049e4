//! Unified error handling at the process boundary.
//!
//! Wraps domain rejections together with the I/O and decoding failures of
//! the collaborator around the core, and decides how each is reported.

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    // Credential faults
    #[error("Password hashing failed")]
    Hashing(String),

    // Configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // External
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON")]
    Json(#[from] serde_json::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

/// Error report body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Hashing(_) => "HASHING_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code (sysexits-style)
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::Json(_) => 65,
            AppError::Io(_) => 74,
            AppError::Config(_) => 78,
            AppError::Hashing(_) | AppError::Internal(_) => 70,
        }
    }

    /// Whether the caller can fix the input and retry
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Json(_))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
            AppError::Json(e) => format!("Malformed JSON: {}", e),

            // Hide details for internal errors
            AppError::Hashing(msg) => {
                tracing::error!("Hashing error: {}", msg);
                "Password could not be stored".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An I/O error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Structured report for machine consumers
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { reason, .. } => AppError::Validation(reason),
            DomainError::Hashing(msg) => AppError::Hashing(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
