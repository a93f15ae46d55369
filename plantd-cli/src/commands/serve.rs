//! HTTP server command for the plantd API
//!
//! Runs migrations, then serves the plant routes until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use plantd_server::db::{create_pool, migrations};
use plantd_server::server::{run_server, ServerConfig};

use super::resolve_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5555)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5555")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides DATABASE_URL environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = resolve_database_url(args.database_url);

    tracing::info!("Starting plantd server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    // Schema must exist before the first request lands
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
