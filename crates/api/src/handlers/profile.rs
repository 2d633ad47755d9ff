//! Handlers for public user profiles.

use axum::extract::{Path, State};
use axum::Json;
use petgram_core::error::CoreError;
use petgram_db::models::user::UserResponse;
use petgram_db::repositories::{PetRepo, UserRepo};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users/{username}
///
/// Public profile context: the user's safe fields and their pets, newest
/// first. Also the redirect target after create/delete.
pub async fn details(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Value>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                key: username.clone(),
            })
        })?;

    let pets = PetRepo::list_for_user(&state.pool, user.id).await?;

    Ok(Json(json!({
        "user": UserResponse::from(user),
        "pets": pets,
    })))
}
