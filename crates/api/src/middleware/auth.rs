//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use petgram_core::types::DbId;
use petgram_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Requests without a live session are redirected to the
/// login page before the handler body runs:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's username, used to build profile redirect targets.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::AuthenticationRequired)?;

        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(AppError::AuthenticationRequired)?;

        let session =
            SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(&token))
                .await?
                .ok_or(AppError::AuthenticationRequired)?;

        // A session row can outlive its user only briefly (FK cascade), but
        // treat that window as unauthenticated rather than a server error.
        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or(AppError::AuthenticationRequired)?;

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        })
    }
}
