pub mod breeds;
pub mod health;
pub mod stats;
pub mod sub_breeds;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /breeds                          list (?search, limit, offset), create
/// /breeds/{id}                     get, update, delete
/// /breeds/{id}/sub-breeds          add a sub-breed (POST)
///
/// /sub-breeds/{id}                 delete
///
/// /stats                           breed and sub-breed totals
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Breeds, with sub-breed creation nested under a breed.
        .nest("/breeds", breeds::router())
        // Sub-breeds addressed by their own id.
        .nest("/sub-breeds", sub_breeds::router())
        // Totals for the dashboard header.
        .merge(stats::router())
}
