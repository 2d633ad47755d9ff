pub mod auth;
pub mod health;
pub mod pet;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately by the
/// router builder).
///
/// Route hierarchy:
///
/// ```text
/// /login                                    login form (public; redirect target)
/// /auth/register                            register (public)
/// /auth/login                               login (public)
/// /auth/logout                              logout (requires session)
///
/// /pets/add                                 creation form + create (auth)
///
/// /users/{username}                         profile details (public)
/// /users/{username}/pets/{slug}             pet detail (public)
/// /users/{username}/pets/{slug}/edit        edit form + update (auth + owner)
/// /users/{username}/pets/{slug}/delete      confirm form + delete (auth + owner)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(pet::router())
        .merge(profile::router())
}
