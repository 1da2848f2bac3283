//! Handlers for sub-breeds: added under a breed, deleted on their own.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use breedbook_core::error::CoreError;
use breedbook_core::types::DbId;
use breedbook_db::models::sub_breed::{CreateSubBreed, SubBreed};
use breedbook_db::repositories::{BreedRepo, SubBreedRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/breeds/{id}/sub-breeds
pub async fn create(
    State(state): State<AppState>,
    ApiPath(breed_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateSubBreed>,
) -> AppResult<(StatusCode, Json<SubBreed>)> {
    if !BreedRepo::exists(&state.pool, breed_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Breed",
            id: breed_id,
        }));
    }

    let input = input.normalized();
    let sub_breed = SubBreedRepo::create(&state.pool, breed_id, &input.name).await?;
    tracing::info!(%breed_id, sub_breed_id = %sub_breed.id, "Sub-breed created");
    Ok((StatusCode::CREATED, Json(sub_breed)))
}

/// DELETE /api/sub-breeds/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if SubBreedRepo::delete(&state.pool, id).await? {
        tracing::info!(sub_breed_id = %id, "Sub-breed deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SubBreed",
            id,
        }))
    }
}
