//! Idempotent bulk loader for breed data.
//!
//! The input is a JSON object mapping each breed name to its sub-breed
//! names:
//!
//! ```json
//! { "bulldog": ["boston", "english", "french"], "beagle": [] }
//! ```
//!
//! Existing breeds (exact name) are reused and only missing sub-breeds are
//! inserted, so running the loader again over the same file adds nothing.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use breedbook_core::breed::{clean_sub_breed_names, is_blank, normalize_name};
use breedbook_db::models::breed::CreateBreed;
use breedbook_db::repositories::{BreedRepo, SubBreedRepo};
use breedbook_db::DbPool;

/// Breed name to sub-breed names, in file order per breed.
pub type SeedData = BTreeMap<String, Vec<String>>;

/// What a single seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub breeds_created: usize,
    pub breeds_existing: usize,
    pub sub_breeds_created: usize,
}

/// Read and parse a seed file.
pub fn read_seed_file(path: &Path) -> anyhow::Result<SeedData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed_data(&raw)
}

/// Parse seed JSON. Anything other than an object of string arrays is
/// rejected.
pub fn parse_seed_data(raw: &str) -> anyhow::Result<SeedData> {
    serde_json::from_str(raw).context("Seed data must be an object of breed -> [sub-breed]")
}

/// Insert every breed and sub-breed from `data` that is not already stored.
///
/// Blank breed names are skipped with a warning. Sub-breed names are
/// trimmed and blanks dropped, as on the API.
pub async fn seed(pool: &DbPool, data: &SeedData) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    for (raw_name, raw_subs) in data {
        if is_blank(raw_name) {
            tracing::warn!("Skipping breed with a blank name");
            continue;
        }
        let name = normalize_name(raw_name);
        let sub_breeds = clean_sub_breed_names(raw_subs.iter().map(String::as_str));

        let breed_id = match BreedRepo::find_by_name(pool, &name).await? {
            Some(existing) => {
                report.breeds_existing += 1;
                existing.breed.id
            }
            None => {
                let input = CreateBreed {
                    name: name.clone(),
                    description: None,
                    sub_breeds: Vec::new(),
                };
                let created = BreedRepo::create(pool, &input)
                    .await
                    .with_context(|| format!("Failed to create breed '{name}'"))?;
                tracing::debug!(breed_id = %created.breed.id, breed = %name, "Breed created");
                report.breeds_created += 1;
                created.breed.id
            }
        };

        for sub in &sub_breeds {
            if SubBreedRepo::find_by_name_in_breed(pool, breed_id, sub)
                .await?
                .is_some()
            {
                continue;
            }
            SubBreedRepo::create(pool, breed_id, sub)
                .await
                .with_context(|| format!("Failed to create sub-breed '{sub}' of '{name}'"))?;
            report.sub_breeds_created += 1;
        }
    }

    Ok(report)
}
