//! `breedbook-seed` -- loads a breed JSON file into the database.
//!
//! # Usage
//!
//! ```text
//! breedbook-seed [PATH]        # PATH defaults to dogs.json
//! ```
//!
//! | Variable       | Required | Default | Description                 |
//! |----------------|----------|---------|-----------------------------|
//! | `DATABASE_URL` | yes      | --      | PostgreSQL connection string |

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SEED_FILE: &str = "dogs.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "breedbook_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE));

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let data = breedbook_seed::read_seed_file(&path)?;
    tracing::info!(path = %path.display(), breeds = data.len(), "Seeding database with breeds");

    let pool = breedbook_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    breedbook_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let report = breedbook_seed::seed(&pool, &data).await?;
    tracing::info!(
        breeds_created = report.breeds_created,
        breeds_existing = report.breeds_existing,
        sub_breeds_created = report.sub_breeds_created,
        "Seeding complete"
    );

    pool.close().await;
    Ok(())
}
