use axum::routing::delete;
use axum::Router;

use crate::handlers::sub_breeds;
use crate::state::AppState;

/// Routes mounted at `/sub-breeds`.
///
/// ```text
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(sub_breeds::delete))
}
