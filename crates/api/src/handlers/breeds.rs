//! Handlers for the `/breeds` resource.
//!
//! Every response carries the breed with its sub-breeds attached.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use breedbook_core::breed::{clamp_limit, clamp_offset, normalize_search, DEFAULT_PAGE_LIMIT};
use breedbook_core::error::CoreError;
use breedbook_core::types::DbId;
use breedbook_db::models::breed::{
    BreedListParams, BreedPage, BreedWithSubBreeds, CreateBreed, UpdateBreed,
};
use breedbook_db::repositories::BreedRepo;
use breedbook_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::state::AppState;

/// GET /api/breeds?search=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<BreedListParams>,
) -> AppResult<Json<BreedPage>> {
    let search = normalize_search(params.search.as_deref());
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, state.config.max_page_limit);
    let offset = clamp_offset(params.offset);

    let page = BreedRepo::list(&state.pool, search.as_deref(), limit, offset).await?;
    Ok(Json(page))
}

/// GET /api/breeds/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<BreedWithSubBreeds>> {
    let breed = BreedRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Breed", id }))?;
    Ok(Json(breed))
}

/// POST /api/breeds
///
/// Blank sub-breed names are dropped. Returns 400 if the name is taken.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBreed>,
) -> AppResult<(StatusCode, Json<BreedWithSubBreeds>)> {
    let input = input.normalized();
    ensure_name_available(&state.pool, &input.name, None).await?;

    let breed = BreedRepo::create(&state.pool, &input).await?;
    tracing::info!(
        breed_id = %breed.breed.id,
        sub_breeds = breed.sub_breeds.len(),
        "Breed created"
    );
    Ok((StatusCode::CREATED, Json(breed)))
}

/// PUT /api/breeds/{id}
///
/// A `subBreeds` array replaces every existing sub-breed; omitting it
/// leaves them alone.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBreed>,
) -> AppResult<Json<BreedWithSubBreeds>> {
    let input = input.normalized();
    if let Some(ref name) = input.name {
        ensure_name_available(&state.pool, name, Some(id)).await?;
    }

    let breed = BreedRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Breed", id }))?;
    tracing::info!(
        breed_id = %id,
        replaced_sub_breeds = input.sub_breeds.is_some(),
        "Breed updated"
    );
    Ok(Json(breed))
}

/// DELETE /api/breeds/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BreedRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(breed_id = %id, "Breed deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Breed", id }))
    }
}

/// Reject `name` if another breed already uses it.
///
/// This is a friendly pre-check only. Two concurrent requests can both
/// pass it; the loser then hits `uq_breeds_name`, which maps to the same
/// `DUPLICATE_NAME` response.
async fn ensure_name_available(pool: &DbPool, name: &str, except: Option<DbId>) -> AppResult<()> {
    match BreedRepo::find_by_name(pool, name).await? {
        Some(existing) if Some(existing.breed.id) != except => {
            Err(AppError::Core(CoreError::DuplicateName {
                entity: "breed",
                name: name.to_string(),
            }))
        }
        _ => Ok(()),
    }
}
