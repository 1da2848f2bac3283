//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved unless a real constraint violation is needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use breedbook_api::error::AppError;
use breedbook_core::error::CoreError;
use breedbook_db::models::breed::CreateBreed;
use breedbook_db::repositories::{BreedRepo, SubBreedRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn new_breed(name: &str) -> CreateBreed {
    CreateBreed {
        name: name.to_string(),
        description: None,
        sub_breeds: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Test: CoreError variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let id = Uuid::nil();
    let err = AppError::Core(CoreError::NotFound { entity: "Breed", id });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Breed with id {id} not found"));
}

#[tokio::test]
async fn duplicate_name_error_returns_400() {
    let err = AppError::Core(CoreError::DuplicateName {
        entity: "breed",
        name: "Labrador".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE_NAME");
    assert_eq!(json["error"], "A breed named 'Labrador' already exists");
}

// ---------------------------------------------------------------------------
// Test: request shape errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Invalid UUID".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid UUID");
}

#[tokio::test]
async fn validation_errors_include_field_detail() {
    let errors = new_breed("").validate().unwrap_err();
    let err = AppError::from(errors);
    assert_matches!(err, AppError::Validation(_));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid input data");
    assert!(json["errors"]["name"].is_array());
}

// ---------------------------------------------------------------------------
// Test: database errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn other_database_errors_return_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(
        !json.to_string().contains("timed out"),
        "Internal error response must not leak details"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_on_breed_name_maps_to_duplicate_name(pool: PgPool) {
    BreedRepo::create(&pool, &new_breed("Akita")).await.unwrap();
    let db_err = BreedRepo::create(&pool, &new_breed("Akita"))
        .await
        .unwrap_err();

    let err = AppError::from(db_err);
    assert_matches!(err, AppError::Database(sqlx::Error::Database(_)));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE_NAME");
    assert_eq!(json["error"], "A breed with this name already exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_key_violation_maps_to_404(pool: PgPool) {
    let db_err = SubBreedRepo::create(&pool, Uuid::new_v4(), "Orphan")
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::from(db_err)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}
