//! Ownership guard for pet mutation routes.
//!
//! Edit and delete share one authorization policy, composed before the
//! handler body: authenticate, resolve the pet by slug, then require the
//! principal to be the owner.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use petgram_core::error::CoreError;
use petgram_db::models::pet::Pet;
use petgram_db::repositories::PetRepo;
use serde::Deserialize;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Path parameters of the pet detail/edit/delete routes.
#[derive(Debug, Clone, Deserialize)]
pub struct PetPath {
    pub username: String,
    pub slug: String,
}

/// A pet resolved from the route's slug whose owner is the authenticated
/// principal.
///
/// Check order: no session -> redirect to login (before the slug is even
/// resolved), unknown slug -> 404 regardless of who asks, foreign owner ->
/// 403. A repeated rejected request performs no writes, so retrying a
/// failed authorization is always side-effect free.
#[derive(Debug)]
pub struct OwnedPet {
    pub pet: Pet,
    pub user: AuthUser,
    /// Route parameters, kept so handlers can build redirect targets from
    /// the URL that was requested rather than from post-edit record state.
    pub path: PetPath,
}

impl FromRequestParts<AppState> for OwnedPet {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let Path(path) = Path::<PetPath>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::Internal("OwnedPet used on a route without {username}/{slug}".into())
            })?;

        let pet = PetRepo::find_by_slug(&state.pool, &path.slug)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "Pet",
                    key: path.slug.clone(),
                })
            })?;

        if !pet.is_owned_by(user.user_id) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only the owner may modify this pet".into(),
            )));
        }

        Ok(OwnedPet { pet, user, path })
    }
}
