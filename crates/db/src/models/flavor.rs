//! Flavor entity model and DTOs.

use flavors_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A flavor row from the `flavors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flavor {
    pub id: DbId,
    pub name: String,
    pub is_favorite: bool,
    #[serde(serialize_with = "flavors_core::timestamp::serialize")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new flavor.
///
/// Both fields are optional here so that a missing value reaches the
/// table, whose `NOT NULL` constraints reject it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFlavor {
    pub name: Option<String>,
    pub is_favorite: Option<bool>,
}

/// DTO for overwriting a flavor. Absent fields are written as `NULL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFlavor {
    pub name: Option<String>,
    pub is_favorite: Option<bool>,
}
