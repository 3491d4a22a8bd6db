//! VidHub CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let command = cli.command.name();
    tracing::debug!(command, env = %cli.env, "Dispatching command");

    if let Err(e) = cli.execute().await {
        tracing::error!(command, kind = %e.kind, error = %e, "Command failed");
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
