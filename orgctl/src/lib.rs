//! orgctl - command-line collaborator around the admission core.
//!
//! Reads candidate entities, runs them through [`domain::Admission`] and
//! prints the admitted result as JSON.
//!
//! # CLI Usage
//!
//! ```bash
//! # Admit the demo company and user
//! orgctl seed
//!
//! # Admit a user read from a file
//! orgctl admit user candidate.json
//!
//! # Check a password
//! orgctl verify --hash '$argon2id$...' --password 'hello world!!'
//! ```

pub mod cli;
pub mod commands;

use std::sync::Arc;

use common::{AppError, AppResult, ServiceConfig};
use domain::{Admission, Argon2Hasher};

/// Log a failed command and render its JSON report.
///
/// Client errors are logged at `warn`, everything else at `error`.
pub fn report_failure(err: &AppError) -> String {
    if err.is_client_error() {
        tracing::warn!(code = err.code(), "Command rejected: {}", err);
    } else {
        tracing::error!(code = err.code(), "Command failed: {}", err);
    }

    let response = err.to_response();
    serde_json::to_string(&response).unwrap_or_else(|_| response.error.message)
}

/// Build the admission service from configuration.
pub fn build_admission(config: &ServiceConfig) -> AppResult<Admission> {
    let hasher = Argon2Hasher::new(config.hash_cost).map_err(|e| AppError::config(e.to_string()))?;
    Ok(Admission::new(Arc::new(hasher)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn test_report_failure_json() {
        let err = AppError::from(DomainError::validation("city", "must provide a city"));
        let body: serde_json::Value = serde_json::from_str(&report_failure(&err)).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "must provide a city");
    }

    #[test]
    fn test_report_failure_hides_internals() {
        let err = AppError::from(DomainError::hashing("entropy source unavailable"));
        let out = report_failure(&err);
        assert!(out.contains("HASHING_ERROR"));
        assert!(!out.contains("entropy"));
    }
}
