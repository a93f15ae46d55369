//! Database migrations for the plants table

use sqlx::SqlitePool;

/// Run all migrations
///
/// Idempotent: safe to run on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS plants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            image TEXT NOT NULL,
            price REAL NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_plants_name ON plants(name)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
