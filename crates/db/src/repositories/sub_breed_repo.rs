//! Repository for the `sub_breeds` table.

use std::collections::HashMap;

use breedbook_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::sub_breed::SubBreed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, breed_id, created_at, updated_at";

/// Provides CRUD operations for sub-breeds.
pub struct SubBreedRepo;

impl SubBreedRepo {
    /// Insert a sub-breed under `breed_id` and bump the parent's `updated_at`.
    ///
    /// The breed is not looked up first; an unknown `breed_id` fails with a
    /// foreign-key violation from the database.
    pub async fn create(pool: &PgPool, breed_id: DbId, name: &str) -> Result<SubBreed, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO sub_breeds (name, breed_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let sub_breed = sqlx::query_as::<_, SubBreed>(&query)
            .bind(name)
            .bind(breed_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE breeds SET updated_at = NOW() WHERE id = $1")
            .bind(breed_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(sub_breed)
    }

    /// Find a sub-breed by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SubBreed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sub_breeds WHERE id = $1");
        sqlx::query_as::<_, SubBreed>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first sub-breed of a breed with exactly this name.
    pub async fn find_by_name_in_breed(
        pool: &PgPool,
        breed_id: DbId,
        name: &str,
    ) -> Result<Option<SubBreed>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sub_breeds \
             WHERE breed_id = $1 AND name = $2 \
             ORDER BY created_at, id \
             LIMIT 1"
        );
        sqlx::query_as::<_, SubBreed>(&query)
            .bind(breed_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List the sub-breeds of one breed ordered by name.
    pub async fn list_by_breed(pool: &PgPool, breed_id: DbId) -> Result<Vec<SubBreed>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::list_by_breed_inner(&mut conn, breed_id).await
    }

    /// Delete a sub-breed by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sub_breeds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Connection-scoped helpers
    // -----------------------------------------------------------------------

    /// List the sub-breeds of one breed ordered by name, on an open connection.
    pub(crate) async fn list_by_breed_inner(
        conn: &mut PgConnection,
        breed_id: DbId,
    ) -> Result<Vec<SubBreed>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sub_breeds WHERE breed_id = $1 ORDER BY name, id"
        );
        sqlx::query_as::<_, SubBreed>(&query)
            .bind(breed_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Fetch the sub-breeds of several breeds in one query, grouped by breed.
    ///
    /// Each group is ordered by name. Breeds without sub-breeds are absent
    /// from the map.
    pub(crate) async fn list_grouped_by_breeds_inner(
        conn: &mut PgConnection,
        breed_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<SubBreed>>, sqlx::Error> {
        if breed_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM sub_breeds \
             WHERE breed_id = ANY($1) \
             ORDER BY breed_id, name, id"
        );
        let rows = sqlx::query_as::<_, SubBreed>(&query)
            .bind(breed_ids)
            .fetch_all(&mut *conn)
            .await?;

        let mut grouped: HashMap<DbId, Vec<SubBreed>> = HashMap::new();
        for row in rows {
            grouped.entry(row.breed_id).or_default().push(row);
        }
        Ok(grouped)
    }

    /// Bulk-insert one row per name under `breed_id`.
    pub(crate) async fn insert_many_inner(
        conn: &mut PgConnection,
        breed_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        if names.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO sub_breeds (name, breed_id) \
             SELECT n, $2 FROM UNNEST($1::varchar[]) AS n",
        )
        .bind(names)
        .bind(breed_id)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Replace every sub-breed of `breed_id` with `names`.
    ///
    /// Deletes existing rows, then inserts the new set. No diffing.
    pub(crate) async fn replace_for_breed_inner(
        conn: &mut PgConnection,
        breed_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM sub_breeds WHERE breed_id = $1")
            .bind(breed_id)
            .execute(&mut *conn)
            .await?;

        Self::insert_many_inner(conn, breed_id, names).await
    }
}
