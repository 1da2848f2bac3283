use axum::extract::State;
use axum::Json;
use breedbook_db::models::breed::BreedStats;
use breedbook_db::repositories::BreedRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> AppResult<Json<BreedStats>> {
    let stats = BreedRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
