//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Organization entity admission tool
#[derive(Parser, Debug)]
#[command(name = "orgctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra env file to load before reading configuration
    #[arg(long, global = true, env = "ORGCTL_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Admit the demo company, its departments and a user
    Seed,

    /// Validate and admit a candidate entity read as JSON
    Admit(AdmitArgs),

    /// Check a password against a stored hash
    Verify(VerifyArgs),
}

/// Entity kinds accepted by `admit`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Address,
    Company,
    Department,
    User,
}

/// Arguments for the admit command
#[derive(Parser, Debug)]
pub struct AdmitArgs {
    /// Kind of entity in the input
    #[arg(value_enum)]
    pub kind: EntityKind,

    /// JSON file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Stored PHC hash string
    #[arg(long)]
    pub hash: String,

    /// Candidate password
    #[arg(long, env = "ORGCTL_PASSWORD", hide_env_values = true)]
    pub password: String,
}
