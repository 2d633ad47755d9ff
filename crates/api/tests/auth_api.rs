//! HTTP-level integration tests for the session lifecycle.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, get, get_as, location, post_form, post_form_as, register,
    session_cookie,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_logs_in_and_redirects_to_profile(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/auth/register",
        &[
            ("username", "carol"),
            ("email", "carol@example.com"),
            ("password", "correct-horse-battery"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/users/carol");

    // The fresh session grants access to authenticated routes.
    let cookie = session_cookie(&response);
    let app = build_test_app(pool.clone());
    let response = get_as(app, "/pets/add", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    register(&pool, "carol").await;

    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/auth/register",
        &[
            ("username", "carol"),
            ("email", "other@example.com"),
            ("password", "correct-horse-battery"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_invalid_fields_annotated(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/auth/register",
        &[
            ("username", "x"),
            ("email", "not-an-email"),
            ("password", "short"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["username"].is_array());
    assert!(json["fields"]["email"].is_array());
    assert!(json["fields"]["password"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_and_logout_roundtrip(pool: PgPool) {
    register(&pool, "carol").await;

    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/auth/login",
        &[("username", "carol"), ("password", "correct-horse-battery")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/users/carol");
    let cookie = session_cookie(&response);

    let app = build_test_app(pool.clone());
    let response = post_form_as(app, "/auth/logout", &cookie, &[]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    // The revoked session no longer authenticates.
    let app = build_test_app(pool.clone());
    let response = get_as(app, "/pets/add", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_unauthorized(pool: PgPool) {
    register(&pool, "carol").await;

    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/auth/login",
        &[("username", "carol"), ("password", "wrong-password")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user_same_error_as_wrong_password(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/auth/login",
        &[("username", "nobody"), ("password", "whatever-password")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_form_context(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["form"]["username"], "");
    assert_eq!(json["form"]["password"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_forged_session_cookie_rejected(pool: PgPool) {
    register(&pool, "carol").await;

    let app = build_test_app(pool.clone());
    let response = get_as(app, "/pets/add", "petgram_session=not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}
