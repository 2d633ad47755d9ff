//! Repository for the `pets` table.

use petgram_core::slug::pet_slug;
use petgram_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{CreatePet, Pet, UpdatePet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, species, date_of_birth, slug, created_at, updated_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet owned by `owner_id`, returning the created row.
    ///
    /// The slug embeds the assigned id (`"{name-stem}-{id}"`), so it is
    /// set in a second statement inside the same transaction. No row with
    /// a NULL slug is ever visible outside the transaction.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreatePet,
    ) -> Result<Pet, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO pets (user_id, name, species, date_of_birth)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(owner_id)
        .bind(&input.name)
        .bind(&input.species)
        .bind(input.date_of_birth)
        .fetch_one(&mut *tx)
        .await?;

        let slug = pet_slug(&input.name, id);
        let query = format!("UPDATE pets SET slug = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let pet = sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&slug)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(pet)
    }

    /// Find a pet by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE slug = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List a user's pets ordered by most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pets WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a pet. Only non-`None` fields in `input` are applied; the
    /// owner and slug columns are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = COALESCE($2, name),
                species = COALESCE($3, species),
                date_of_birth = COALESCE($4, date_of_birth),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(input.date_of_birth)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Returns `true` if a row was removed.
    ///
    /// Tag rows referencing the pet go with it (FK cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
