//! Handlers for registration, login, and logout.

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use petgram_core::error::CoreError;
use petgram_core::types::DbId;
use petgram_db::models::session::CreateSession;
use petgram_db::models::user::CreateUser;
use petgram_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{generate_session_token, hash_session_token, SESSION_COOKIE};
use crate::error::{AppError, AppResult, LOGIN_PATH};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

/// Form body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 3, max = 30, message = "username must be 3-30 characters"))]
    pub username: String,
    #[validate(email(message = "enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Form body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /login
///
/// Unbound login form context; also the redirect target for requests that
/// arrive without a session.
pub async fn login_form() -> Json<Value> {
    Json(json!({ "form": { "username": "", "password": "" } }))
}

/// POST /auth/register
///
/// Create an account and log it straight in. Duplicate usernames/emails
/// surface as 409 via the unique-constraint classifier.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> AppResult<(CookieJar, Redirect)> {
    form.validate()?;

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: form.username,
            email: form.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    start_session(&state, jar, user.id, &user.username).await
}

/// POST /auth/login
///
/// Verify credentials and mint a session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let user = UserRepo::find_by_username(&state.pool, &form.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&form.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    tracing::info!(user_id = user.id, username = %user.username, "login");
    start_session(&state, jar, user.id, &user.username).await
}

/// POST /auth/logout
///
/// Revoke the current session and clear the cookie.
pub async fn logout(
    _user: AuthUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        SessionRepo::revoke_by_token_hash(&state.pool, &hash_session_token(cookie.value()))
            .await?;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    Ok((jar, Redirect::to(LOGIN_PATH)))
}

// The same message for "no such user" and "wrong password", so login
// probing cannot enumerate accounts.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// Mint a session for the user, set the cookie, and point the browser at
/// their own profile.
async fn start_session(
    state: &AppState,
    jar: CookieJar,
    user_id: DbId,
    username: &str,
) -> AppResult<(CookieJar, Redirect)> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + Duration::days(state.config.session_ttl_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Redirect::to(&format!("/users/{username}"))))
}
