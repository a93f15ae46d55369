//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-file SQLite storage.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// The database file is created if it doesn't exist yet.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://plants.db`)
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://plants.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
