//! Plant repository
//!
//! Handles plant persistence:
//! - create: INSERT with RETURNING (single round trip)
//! - list: full scan in id order
//! - get: primary-key lookup, typed NotFound on miss

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::models::NewPlant;

/// Plant record from database
#[derive(Debug, Clone, FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Plant repository
pub struct PlantRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PlantRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a plant, returning the stored row with its assigned id.
    pub async fn create(&self, plant: NewPlant) -> Result<Plant, DbError> {
        let created = sqlx::query_as::<_, Plant>(
            r#"
            INSERT INTO plants (name, image, price, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, image, price, created_at
            "#,
        )
        .bind(plant.name.as_str())
        .bind(plant.image.as_str())
        .bind(plant.price.value())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// List all plants in insertion order.
    pub async fn list(&self) -> Result<Vec<Plant>, DbError> {
        let plants = sqlx::query_as::<_, Plant>(
            r#"
            SELECT id, name, image, price, created_at
            FROM plants
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(plants)
    }

    /// Get a single plant by id.
    pub async fn get(&self, id: i64) -> Result<Plant, DbError> {
        sqlx::query_as::<_, Plant>(
            r#"
            SELECT id, name, image, price, created_at
            FROM plants
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "plant",
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;
    use crate::db::pool::create_pool_with_options;
    use crate::models::{ImageRef, PlantName, Price};

    async fn test_pool() -> SqlitePool {
        // Single connection so the in-memory database is shared
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    fn aloe() -> NewPlant {
        NewPlant {
            name: PlantName::new("Aloe").unwrap(),
            image: ImageRef::new("./images/aloe.jpg").unwrap(),
            price: Price::new(11.50).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let pool = test_pool().await;
        let repo = PlantRepo::new(&pool);

        let first = repo.create(aloe()).await.expect("create");
        let second = repo.create(aloe()).await.expect("create");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, "Aloe");
        assert_eq!(first.price, 11.50);
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let pool = test_pool().await;
        let repo = PlantRepo::new(&pool);

        repo.create(aloe()).await.expect("create");
        let mut fern = aloe();
        fern.name = PlantName::new("Fern").unwrap();
        repo.create(fern).await.expect("create");

        let plants = repo.list().await.expect("list");
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].name, "Aloe");
        assert_eq!(plants[1].name, "Fern");
    }

    #[tokio::test]
    async fn list_empty_table() {
        let pool = test_pool().await;
        let plants = PlantRepo::new(&pool).list().await.expect("list");
        assert!(plants.is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let err = PlantRepo::new(&pool).get(42).await.unwrap_err();

        assert!(matches!(
            err,
            DbError::NotFound { resource: "plant", .. }
        ));
    }

    #[tokio::test]
    async fn get_round_trips_created_row() {
        let pool = test_pool().await;
        let repo = PlantRepo::new(&pool);

        let created = repo.create(aloe()).await.expect("create");
        let fetched = repo.get(created.id).await.expect("get");

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.image, "./images/aloe.jpg");
        assert_eq!(fetched.created_at, created.created_at);
    }
}
