//! Route definitions for pet profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::pet;
use crate::state::AppState;

/// Pet CRUD routes.
///
/// ```text
/// GET  /pets/add                              -> add_form (auth)
/// POST /pets/add                              -> create (auth)
/// GET  /users/{username}/pets/{slug}          -> details (public)
/// GET  /users/{username}/pets/{slug}/edit     -> edit_form (auth + owner)
/// POST /users/{username}/pets/{slug}/edit     -> update (auth + owner)
/// GET  /users/{username}/pets/{slug}/delete   -> delete_form (auth + owner)
/// POST /users/{username}/pets/{slug}/delete   -> delete (auth + owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pets/add", get(pet::add_form).post(pet::create))
        .route("/users/{username}/pets/{slug}", get(pet::details))
        .route(
            "/users/{username}/pets/{slug}/edit",
            get(pet::edit_form).post(pet::update),
        )
        .route(
            "/users/{username}/pets/{slug}/delete",
            get(pet::delete_form).post(pet::delete),
        )
}
