//! plantd CLI - Plant inventory HTTP API
//!
//! Entry point for the plantd command-line tool, which provides:
//! - HTTP API server for the plants table (`serve` subcommand)
//! - Standalone schema migration (`migrate` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "plantd",
    author,
    version,
    about = "REST API for a SQLite-backed plant inventory",
    long_about = "Serve the plants table over HTTP: list the collection, create \
                  plants with validated fields, and fetch individual plants by id."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Apply database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    }
}
