//! Read-side repository for the `photos` table and its relations.
//!
//! The pet detail page needs every photo the pet is tagged on, each with
//! its tagged pets and likes. Relations are loaded in one batched query
//! per table rather than per photo.

use std::collections::HashMap;

use petgram_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::photo::{Like, Photo, PhotoWithRelations, TaggedPet};

/// One tag row joined with the tagged pet's display fields.
#[derive(FromRow)]
struct TagRow {
    photo_id: DbId,
    id: DbId,
    name: String,
    slug: String,
}

/// Provides read access to photos with their relations pre-loaded.
pub struct PhotoRepo;

impl PhotoRepo {
    /// List every photo the pet is tagged on, newest first, with tagged
    /// pets and likes attached.
    pub async fn list_for_pet_with_relations(
        pool: &PgPool,
        pet_id: DbId,
    ) -> Result<Vec<PhotoWithRelations>, sqlx::Error> {
        let photos: Vec<Photo> = sqlx::query_as(
            "SELECT p.id, p.user_id, p.image_url, p.description, p.created_at
             FROM photos p
             JOIN photo_tags pt ON pt.photo_id = p.id
             WHERE pt.pet_id = $1
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .bind(pet_id)
        .fetch_all(pool)
        .await?;

        if photos.is_empty() {
            return Ok(Vec::new());
        }

        let photo_ids: Vec<DbId> = photos.iter().map(|p| p.id).collect();

        let tag_rows: Vec<TagRow> = sqlx::query_as(
            "SELECT pt.photo_id, pe.id, pe.name, pe.slug
             FROM photo_tags pt
             JOIN pets pe ON pe.id = pt.pet_id
             WHERE pt.photo_id = ANY($1)
             ORDER BY pe.name, pe.id",
        )
        .bind(&photo_ids)
        .fetch_all(pool)
        .await?;

        let likes: Vec<Like> = sqlx::query_as(
            "SELECT id, user_id, photo_id, created_at
             FROM likes
             WHERE photo_id = ANY($1)
             ORDER BY created_at, id",
        )
        .bind(&photo_ids)
        .fetch_all(pool)
        .await?;

        let mut tags_by_photo: HashMap<DbId, Vec<TaggedPet>> = HashMap::new();
        for row in tag_rows {
            tags_by_photo.entry(row.photo_id).or_default().push(TaggedPet {
                id: row.id,
                name: row.name,
                slug: row.slug,
            });
        }

        let mut likes_by_photo: HashMap<DbId, Vec<Like>> = HashMap::new();
        for like in likes {
            likes_by_photo.entry(like.photo_id).or_default().push(like);
        }

        Ok(photos
            .into_iter()
            .map(|photo| {
                let tagged_pets = tags_by_photo.remove(&photo.id).unwrap_or_default();
                let likes = likes_by_photo.remove(&photo.id).unwrap_or_default();
                PhotoWithRelations {
                    photo,
                    tagged_pets,
                    likes,
                }
            })
            .collect())
    }
}
