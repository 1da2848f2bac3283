//! PostgreSQL persistence for breeds and sub-breeds.
//!
//! Connection handling lives here; row models and DTOs are in [`models`],
//! queries in [`repositories`]. Repositories are stateless: every call
//! takes the pool (or an open transaction) it should run against.

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Which of the service's tables exist in the connected database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaStatus {
    pub breeds: bool,
    pub sub_breeds: bool,
}

impl SchemaStatus {
    pub fn is_complete(&self) -> bool {
        self.breeds && self.sub_breeds
    }
}

/// Look up both tables through the current `search_path`.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let (breeds, sub_breeds): (bool, bool) = sqlx::query_as(
        "SELECT to_regclass('breeds') IS NOT NULL, to_regclass('sub_breeds') IS NOT NULL",
    )
    .fetch_one(pool)
    .await?;
    Ok(SchemaStatus { breeds, sub_breeds })
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("../../db/migrations");
    tracing::debug!(count = migrator.iter().count(), "Running migrations");
    migrator.run(pool).await
}
