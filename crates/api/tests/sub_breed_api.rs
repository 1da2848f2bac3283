//! HTTP-level integration tests for sub-breed creation and deletion.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Create a breed and return its id.
async fn create_breed(pool: &PgPool, name: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/breeds",
        json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Test: POST /api/breeds/{id}/sub-breeds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_sub_breed_returns_201(pool: PgPool) {
    let breed_id = create_breed(&pool, "Retriever").await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/breeds/{breed_id}/sub-breeds"),
        json!({ "name": "  Golden " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Golden");
    assert_eq!(json["breedId"], breed_id.as_str());
    assert!(json["id"].is_string());

    let breed = body_json(get(build_test_app(pool), &format!("/api/breeds/{breed_id}")).await).await;
    assert_eq!(breed["subBreeds"][0]["id"], json["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_sub_breed_to_missing_breed_returns_404(pool: PgPool) {
    let uri = format!("/api/breeds/{}/sub-breeds", uuid::Uuid::new_v4());
    let response = post_json(build_test_app(pool.clone()), &uri, json!({ "name": "Golden" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sub_breeds")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_blank_sub_breed_returns_validation_error(pool: PgPool) {
    let breed_id = create_breed(&pool, "Retriever").await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/breeds/{breed_id}/sub-breeds"),
        json!({ "name": " " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_sub_breed_with_nul_returns_validation_error(pool: PgPool) {
    let breed_id = create_breed(&pool, "Retriever").await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/breeds/{breed_id}/sub-breeds"),
        json!({ "name": "Gol\u{0}den" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_duplicate_sub_breed_name_is_allowed(pool: PgPool) {
    let breed_id = create_breed(&pool, "Terrier").await;
    let uri = format!("/api/breeds/{breed_id}/sub-breeds");

    for _ in 0..2 {
        let response = post_json(build_test_app(pool.clone()), &uri, json!({ "name": "Irish" })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let stats = body_json(get(build_test_app(pool), "/api/stats").await).await;
    assert_eq!(stats["totalSubBreeds"], 2);
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/sub-breeds/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_sub_breed(pool: PgPool) {
    let breed_id = create_breed(&pool, "Mastiff").await;
    let created = body_json(
        post_json(
            build_test_app(pool.clone()),
            &format!("/api/breeds/{breed_id}/sub-breeds"),
            json!({ "name": "Tibetan" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/api/sub-breeds/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let breed = body_json(get(build_test_app(pool.clone()), &format!("/api/breeds/{breed_id}")).await).await;
    assert_eq!(breed["subBreeds"], json!([]));

    let response = delete(build_test_app(pool), &format!("/api/sub-breeds/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_sub_breed_malformed_id_returns_400(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/sub-breeds/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
