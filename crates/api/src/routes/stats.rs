use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// `GET /stats`, merged at the `/api` level.
pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats::get))
}
