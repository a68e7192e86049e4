//! orgctl - application entry point
//!
//! CLI-based entry point that dispatches to the admission commands.

use clap::Parser;

use common::{init_tracing, AppError, AppResult, ServiceConfig};
use orgctl_lib::{
    build_admission,
    cli::{Cli, Commands},
    commands, report_failure,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Explicit env file first, so its values win over `.env`
    let env_file = cli
        .env_file
        .as_deref()
        .map(|path| dotenvy::from_path(path).map_err(|e| (path.display().to_string(), e)));

    // Load configuration
    let config = ServiceConfig::from_env();
    init_tracing(&config.log_level, cli.verbose);
    tracing::debug!(service = %config.service_name, "Configuration loaded");

    let result = match env_file {
        Some(Err((path, e))) => Err(AppError::config(format!("cannot load {}: {}", path, e))),
        _ => run(cli.command, &config),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{}", report_failure(&e));
        std::process::exit(e.exit_code());
    }
}

fn run(command: Commands, config: &ServiceConfig) -> AppResult<()> {
    let admission = build_admission(config)?;

    let output = match command {
        Commands::Seed => serde_json::to_value(commands::seed::execute(&admission)?)?,
        Commands::Admit(args) => commands::admit::execute(args, &admission)?,
        Commands::Verify(args) => {
            serde_json::Value::Bool(commands::verify::execute(args, &admission))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
