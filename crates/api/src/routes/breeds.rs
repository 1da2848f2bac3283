//! Route definitions for the `/breeds` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{breeds, sub_breeds};
use crate::state::AppState;

/// Routes mounted at `/breeds`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/sub-breeds   -> sub_breeds::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(breeds::list).post(breeds::create))
        .route(
            "/{id}",
            get(breeds::get_by_id)
                .put(breeds::update)
                .delete(breeds::delete),
        )
        .route("/{id}/sub-breeds", post(sub_breeds::create))
}
