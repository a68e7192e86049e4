//! Domain-level errors.
//!
//! These errors represent rejected entities and credential failures.
//! They are independent of how a caller reports them.

use thiserror::Error;

/// Domain-specific errors raised while admitting an entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed one of its rules; the entity is rejected as a whole.
    #[error("{reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason, never empty
        reason: String,
    },

    /// The hashing primitive failed. Signals an environment fault, not bad input.
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a validation error for a field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }

    /// Field that caused a validation failure, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { field, .. } => Some(field),
            DomainError::Hashing(_) => None,
        }
    }

    /// Whether the caller can recover by fixing its input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
