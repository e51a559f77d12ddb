use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod errors;

use crate::commands::config_cmd::ConfigCommands;

/// lt CLI: project tooling with cascading configuration
#[derive(Parser)]
#[command(name = "lt")]
#[command(about = "Project tooling with cascading configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("LT_LOG"))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Config(cmd) => {
            if let Err(e) = crate::commands::config_cmd::execute(cmd) {
                error!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("lt version {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
