//! Sub-breed entity model and DTOs.

use breedbook_core::breed::normalize_name;
use breedbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `sub_breeds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubBreed {
    pub id: DbId,
    pub name: String,
    pub breed_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a single sub-breed. The owning breed comes from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubBreed {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "crate::models::validate::name")
    )]
    pub name: String,
}

impl CreateSubBreed {
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_name(&self.name),
        }
    }
}
