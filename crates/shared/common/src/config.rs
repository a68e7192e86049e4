//! Shared configuration structures.

use std::env;

use domain::HashCost;
use serde::{Deserialize, Serialize};

/// Default log level when neither `LOG_LEVEL` nor `RUST_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default service name used in logs
pub const DEFAULT_SERVICE_NAME: &str = "orgctl";

/// Base service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
    /// Password hashing cost
    pub hash_cost: HashCost,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            hash_cost: HashCost::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |key: &str, fallback: u32| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(fallback)
        };

        Self {
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            hash_cost: HashCost {
                memory_kib: number("HASH_MEMORY_KIB", defaults.hash_cost.memory_kib),
                iterations: number("HASH_ITERATIONS", defaults.hash_cost.iterations),
                parallelism: number("HASH_PARALLELISM", defaults.hash_cost.parallelism),
            },
        }
    }
}
