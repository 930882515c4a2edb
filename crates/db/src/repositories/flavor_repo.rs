//! Repository for the `flavors` table.

use flavors_core::types::DbId;
use sqlx::PgPool;

use crate::models::flavor::{CreateFlavor, Flavor, UpdateFlavor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_favorite, updated_at";

/// Provides CRUD operations for flavors. Each method issues exactly one
/// statement.
pub struct FlavorRepo;

impl FlavorRepo {
    /// List all flavors in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Flavor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flavors ORDER BY id");
        sqlx::query_as::<_, Flavor>(&query).fetch_all(pool).await
    }

    /// Find a flavor by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flavor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flavors WHERE id = $1");
        sqlx::query_as::<_, Flavor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new flavor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFlavor) -> Result<Flavor, sqlx::Error> {
        let query = format!(
            "INSERT INTO flavors (name, is_favorite)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flavor>(&query)
            .bind(&input.name)
            .bind(input.is_favorite)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a flavor's mutable fields and stamp `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFlavor,
    ) -> Result<Option<Flavor>, sqlx::Error> {
        let query = format!(
            "UPDATE flavors SET
                name = $2,
                is_favorite = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flavor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_favorite)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a flavor by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flavors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
