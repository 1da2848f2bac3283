use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use breedbook_db::SchemaStatus;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    /// The database answered and both tables are present.
    pub db_healthy: bool,
    /// Per-table presence; `null` when the database could not be reached.
    pub tables: Option<SchemaStatus>,
}

/// GET /health
///
/// 200 when breeds and sub-breeds can be served, 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let tables = match breedbook_db::schema_status(&state.pool).await {
        Ok(tables) => Some(tables),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    let db_healthy = tables.is_some_and(|t| t.is_complete());

    let (code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        tables,
    };
    (code, Json(report))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
