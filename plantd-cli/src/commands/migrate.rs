//! Standalone migration command
//!
//! Applies the schema and exits; useful before first deploy or in CI.

use anyhow::{Context, Result};
use clap::Parser;

use plantd_server::db::{create_pool, migrations};

use super::resolve_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides DATABASE_URL environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run migrations and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = resolve_database_url(args.database_url);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Database ready at {}", database_url);
    Ok(())
}
