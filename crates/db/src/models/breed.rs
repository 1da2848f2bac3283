//! Breed entity model and DTOs.
//!
//! A breed owns zero or more sub-breeds (see [`super::sub_breed`]). The
//! `subBreeds` list is never stored on the row; reads attach it through
//! [`BreedWithSubBreeds`].

use breedbook_core::breed::{clean_sub_breed_names, normalize_name};
use breedbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::sub_breed::SubBreed;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `breeds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A breed enriched with its sub-breeds, ordered by name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedWithSubBreeds {
    #[serde(flatten)]
    pub breed: Breed,
    pub sub_breeds: Vec<SubBreed>,
}

impl BreedWithSubBreeds {
    /// Sub-breed names in their stored order.
    pub fn sub_breed_names(&self) -> Vec<&str> {
        self.sub_breeds.iter().map(|s| s.name.as_str()).collect()
    }
}

/// One page of breeds plus the number of breeds matching the filter.
#[derive(Debug, Clone, Serialize)]
pub struct BreedPage {
    pub breeds: Vec<BreedWithSubBreeds>,
    pub total: i64,
}

/// Row counts across both tables.
#[derive(Debug, Clone, Copy, FromRow, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreedStats {
    pub total_breeds: i64,
    pub total_sub_breeds: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new breed.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBreed {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "crate::models::validate::name")
    )]
    pub name: String,
    #[validate(custom(function = "crate::models::validate::text"))]
    pub description: Option<String>,
    /// Initial sub-breed names. Blank entries are dropped by [`Self::normalized`].
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate::sub_breed_names"))]
    pub sub_breeds: Vec<String>,
}

impl CreateBreed {
    /// Trim the name and clean the sub-breed list before it reaches storage.
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_name(&self.name),
            description: self.description,
            sub_breeds: clean_sub_breed_names(self.sub_breeds),
        }
    }
}

/// DTO for updating an existing breed. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_description"))]
pub struct UpdateBreed {
    /// May be omitted but not `null`.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(
        length(min = 1, max = 255),
        custom(function = "crate::models::validate::name")
    )]
    pub name: Option<String>,
    /// Absent leaves the description alone, `null` clears it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    /// If `Some`, replaces every sub-breed (an empty list removes them all).
    /// If absent, existing sub-breeds are left untouched. `null` is rejected
    /// rather than read as either of those.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(custom(function = "crate::models::validate::sub_breed_names"))]
    pub sub_breeds: Option<Vec<String>>,
}

impl UpdateBreed {
    /// Trim the name and clean the replacement sub-breed list, if any.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.as_deref().map(normalize_name),
            description: self.description,
            sub_breeds: self.sub_breeds.map(clean_sub_breed_names),
        }
    }
}

/// Query parameters for `GET /api/breeds`.
///
/// Empty values (`?limit=&offset=`) count as absent and fall back to the
/// defaults; anything else must parse as an integer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreedListParams {
    /// Case-insensitive substring filter on name. Blank means no filter.
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
}

fn validate_update_description(input: &UpdateBreed) -> Result<(), ValidationError> {
    match input.description {
        Some(Some(ref text)) => crate::models::validate::text(text),
        _ => Ok(()),
    }
}

/// Distinguish a JSON `null` from an absent field.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Parse an optional integer query value, treating a blank value as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
