//! Common utilities shared by the workspace binaries.
//!
//! This crate provides:
//! - Error handling at the process boundary
//! - Configuration structures
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
