//! Handlers for pet profile CRUD.
//!
//! Writes follow the POST/redirect/GET contract; the GET variant of each
//! write route returns the form's render context. Detail is public and
//! read-only.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::NaiveDate;
use petgram_core::error::CoreError;
use petgram_db::models::pet::{CreatePet, UpdatePet};
use petgram_db::repositories::{PetRepo, PhotoRepo};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::forms::empty_string_as_none;
use crate::handlers::comment_form;
use crate::middleware::auth::AuthUser;
use crate::middleware::owner::{OwnedPet, PetPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

/// Form schema shared by create and edit.
///
/// There is deliberately no owner field: ownership is bound server-side
/// from the session principal, and unknown submitted fields are dropped at
/// deserialization, so a forged owner value in the body never reaches the
/// database.
#[derive(Debug, Deserialize, Validate)]
pub struct PetForm {
    #[validate(length(min = 1, max = 30, message = "name must be 1-30 characters"))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 50, message = "species must be at most 50 characters"))]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Render context for a pet form with the given initial values.
fn form_context(name: &str, species: Option<&str>, date_of_birth: Option<NaiveDate>) -> Value {
    json!({
        "form": {
            "name": name,
            "species": species,
            "date_of_birth": date_of_birth,
        }
    })
}

fn pet_not_found(slug: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Pet",
        key: slug.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /pets/add
///
/// Unbound creation form context. Requires authentication.
pub async fn add_form(_user: AuthUser) -> Json<Value> {
    Json(form_context("", None, None))
}

/// POST /pets/add
///
/// Create a pet owned by the session principal, then redirect to the
/// principal's own profile.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<PetForm>,
) -> AppResult<Redirect> {
    form.validate()?;

    let input = CreatePet {
        name: form.name,
        species: form.species,
        date_of_birth: form.date_of_birth,
    };
    let pet = PetRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(pet_id = pet.id, owner = %user.username, slug = %pet.slug, "pet created");
    Ok(Redirect::to(&format!("/users/{}", user.username)))
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /users/{username}/pets/{slug}
///
/// Public read context: the record, an unbound comment form, and every
/// photo the pet is tagged on with tag and like relations pre-loaded.
pub async fn details(
    State(state): State<AppState>,
    Path(path): Path<PetPath>,
) -> AppResult<Json<Value>> {
    let pet = PetRepo::find_by_slug(&state.pool, &path.slug)
        .await?
        .ok_or_else(|| pet_not_found(&path.slug))?;

    let all_photos = PhotoRepo::list_for_pet_with_relations(&state.pool, pet.id).await?;

    Ok(Json(json!({
        "pet": pet,
        "comment_form": comment_form::unbound(),
        "all_photos": all_photos,
    })))
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /users/{username}/pets/{slug}/edit
///
/// Edit form context bound to the record's current values. Owner only.
pub async fn edit_form(owned: OwnedPet) -> Json<Value> {
    let pet = &owned.pet;
    Json(form_context(
        &pet.name,
        pet.species.as_deref(),
        pet.date_of_birth,
    ))
}

/// POST /users/{username}/pets/{slug}/edit
///
/// Apply validated updates, then redirect to the detail URL built from the
/// route's own username/slug parameters -- not from post-edit record
/// state, so the target always matches the URL that was edited.
pub async fn update(
    owned: OwnedPet,
    State(state): State<AppState>,
    Form(form): Form<PetForm>,
) -> AppResult<Redirect> {
    form.validate()?;

    let input = UpdatePet {
        name: Some(form.name),
        species: form.species,
        date_of_birth: form.date_of_birth,
    };
    PetRepo::update(&state.pool, owned.pet.id, &input)
        .await?
        .ok_or_else(|| pet_not_found(&owned.path.slug))?;

    tracing::info!(pet_id = owned.pet.id, editor = %owned.user.username, "pet updated");
    Ok(Redirect::to(&format!(
        "/users/{}/pets/{}",
        owned.path.username, owned.path.slug
    )))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /users/{username}/pets/{slug}/delete
///
/// Confirmation context. The form's initial data is the entire current
/// record, so the page can redisplay what is about to be removed.
pub async fn delete_form(owned: OwnedPet) -> AppResult<Json<Value>> {
    let initial = serde_json::to_value(&owned.pet)
        .map_err(|e| AppError::Internal(format!("serializing pet record: {e}")))?;
    Ok(Json(json!({ "form": initial })))
}

/// POST /users/{username}/pets/{slug}/delete
///
/// Remove the record and redirect to the principal's profile. The POST
/// body is not re-validated: the confirmation form is backed by the
/// record's own values, so an authorized submission is the confirmation.
pub async fn delete(owned: OwnedPet, State(state): State<AppState>) -> AppResult<Redirect> {
    let deleted = PetRepo::delete(&state.pool, owned.pet.id).await?;
    if !deleted {
        return Err(pet_not_found(&owned.path.slug));
    }

    tracing::info!(pet_id = owned.pet.id, owner = %owned.user.username, "pet deleted");
    Ok(Redirect::to(&format!("/users/{}", owned.user.username)))
}
