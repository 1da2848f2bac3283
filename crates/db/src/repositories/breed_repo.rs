//! Repository for the `breeds` table and the breed + sub-breed aggregate.

use breedbook_core::breed::contains_pattern;
use breedbook_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::breed::{
    Breed, BreedPage, BreedStats, BreedWithSubBreeds, CreateBreed, UpdateBreed,
};
use crate::repositories::SubBreedRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Optional case-insensitive substring filter. `$1` is NULL for "no filter".
const SEARCH_FILTER: &str = "($1::text IS NULL OR name ILIKE $1 ESCAPE '\\')";

/// Provides CRUD operations for breeds, always returning them with their
/// sub-breeds attached.
pub struct BreedRepo;

impl BreedRepo {
    /// List breeds newest-first with their sub-breeds.
    ///
    /// `search` must already be normalized (blank means `None`). `total`
    /// counts every breed matching the filter, not just this page. The
    /// limit is used as given; callers decide the cap.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<BreedPage, sqlx::Error> {
        let pattern = search.map(contains_pattern);
        let mut conn = pool.acquire().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM breeds \
             WHERE {SEARCH_FILTER} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        let breeds = sqlx::query_as::<_, Breed>(&query)
            .bind(pattern.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM breeds WHERE {SEARCH_FILTER}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(pattern.as_deref())
            .fetch_one(&mut *conn)
            .await?;

        let ids: Vec<DbId> = breeds.iter().map(|b| b.id).collect();
        let mut grouped = SubBreedRepo::list_grouped_by_breeds_inner(&mut conn, &ids).await?;

        let breeds = breeds
            .into_iter()
            .map(|breed| {
                let sub_breeds = grouped.remove(&breed.id).unwrap_or_default();
                BreedWithSubBreeds { breed, sub_breeds }
            })
            .collect();

        Ok(BreedPage { breeds, total })
    }

    /// Find a breed by its ID, with sub-breeds.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BreedWithSubBreeds>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_by_id_inner(&mut conn, id).await
    }

    /// Returns `true` if a breed with this ID exists. Does not load sub-breeds.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM breeds WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a breed by exact (case-sensitive) name, with sub-breeds.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<BreedWithSubBreeds>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("SELECT {COLUMNS} FROM breeds WHERE name = $1");
        let Some(breed) = sqlx::query_as::<_, Breed>(&query)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let sub_breeds = SubBreedRepo::list_by_breed_inner(&mut conn, breed.id).await?;
        Ok(Some(BreedWithSubBreeds { breed, sub_breeds }))
    }

    /// Insert a breed and its initial sub-breeds in one transaction.
    ///
    /// `input` should be normalized first. Name uniqueness is left to the
    /// `uq_breeds_name` constraint; a clash surfaces as a database error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBreed,
    ) -> Result<BreedWithSubBreeds, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO breeds (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let breed = sqlx::query_as::<_, Breed>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        SubBreedRepo::insert_many_inner(&mut tx, breed.id, &input.sub_breeds).await?;
        let sub_breeds = SubBreedRepo::list_by_breed_inner(&mut tx, breed.id).await?;

        tx.commit().await?;
        Ok(BreedWithSubBreeds { breed, sub_breeds })
    }

    /// Update a breed. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always refreshed.
    ///
    /// If `input.sub_breeds` is `Some`, the sub-breed list is replaced
    /// wholesale. The result is re-read inside the same transaction.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBreed,
    ) -> Result<Option<BreedWithSubBreeds>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let description = input.description.as_ref().and_then(|d| d.as_deref());
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE breeds SET \
                name = COALESCE($2, name), \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.description.is_some())
        .bind(description)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(ref names) = input.sub_breeds {
            SubBreedRepo::replace_for_breed_inner(&mut tx, id, names).await?;
        }

        let breed = Self::find_by_id_inner(&mut tx, id).await?;
        tx.commit().await?;
        Ok(breed)
    }

    /// Delete a breed by ID. Sub-breeds go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM breeds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count rows in both tables.
    pub async fn stats(pool: &PgPool) -> Result<BreedStats, sqlx::Error> {
        sqlx::query_as::<_, BreedStats>(
            "SELECT \
                (SELECT COUNT(*) FROM breeds) AS total_breeds, \
                (SELECT COUNT(*) FROM sub_breeds) AS total_sub_breeds",
        )
        .fetch_one(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Load one breed with its sub-breeds on an open connection.
    async fn find_by_id_inner(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<BreedWithSubBreeds>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds WHERE id = $1");
        let Some(breed) = sqlx::query_as::<_, Breed>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let sub_breeds = SubBreedRepo::list_by_breed_inner(conn, id).await?;
        Ok(Some(BreedWithSubBreeds { breed, sub_breeds }))
    }
}
