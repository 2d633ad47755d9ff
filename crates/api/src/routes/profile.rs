//! Route definitions for user profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes.
///
/// ```text
/// GET /users/{username} -> details (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{username}", get(profile::details))
}
