//! Photo entity model and read-side relation views.
//!
//! The photo/like subsystems are written elsewhere; this crate only reads
//! them to assemble the pet detail context.

use petgram_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `photos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Photo {
    pub id: DbId,
    pub user_id: DbId,
    pub image_url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A pet tagged on a photo, reduced to the fields the detail page renders.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TaggedPet {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// A row from the `likes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub photo_id: DbId,
    pub created_at: Timestamp,
}

/// A photo with its tag and like relations pre-loaded, so rendering needs
/// no further lookups.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoWithRelations {
    pub photo: Photo,
    pub tagged_pets: Vec<TaggedPet>,
    pub likes: Vec<Like>,
}
