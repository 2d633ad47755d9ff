//! Pet entity model and DTOs.

use chrono::NaiveDate;
use petgram_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `pets` table.
///
/// The owner (`user_id`) is assigned at creation from the authenticated
/// principal and is immutable afterwards; no update path touches it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pet {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub species: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pet {
    /// Capability check backing the edit/delete authorization guard.
    pub fn is_owned_by(&self, user_id: DbId) -> bool {
        self.user_id == user_id
    }
}

/// DTO for creating a new pet. Deliberately has no owner field: the owner
/// comes from the session principal, never from client input.
#[derive(Debug)]
pub struct CreatePet {
    pub name: String,
    pub species: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// DTO for updating a pet. Only non-`None` fields are applied; the slug is
/// never regenerated.
#[derive(Debug)]
pub struct UpdatePet {
    pub name: Option<String>,
    pub species: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
