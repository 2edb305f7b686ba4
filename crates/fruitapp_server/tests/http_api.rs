use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use fruitapp_core::db::open_db_in_memory;
use fruitapp_core::{FruitService, SqliteFruitRepository};
use fruitapp_server::router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let conn = open_db_in_memory().unwrap();
    router(FruitService::new(SqliteFruitRepository::new(conn)))
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_response(response).await
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Extractor rejections produce plain-text bodies; normalize those to null.
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn listing_an_empty_store_returns_empty_array() {
    let app = app();
    let (status, body) = get(&app, "/api/fruits").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_then_list_roundtrip() {
    let app = app();

    let (status, created) = post_json(&app, "/api/fruits", json!({ "name": "Apple" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Apple");
    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let (status, listed) = get(&app, "/api/fruits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([{ "id": id, "name": "Apple" }]));
}

#[tokio::test]
async fn two_creations_yield_distinct_ids_and_both_are_listed() {
    let app = app();

    let (_, apple) = post_json(&app, "/api/fruits", json!({ "name": "Apple" })).await;
    let (_, banana) = post_json(&app, "/api/fruits", json!({ "name": "Banana" })).await;
    assert_ne!(apple["id"], banana["id"]);

    let (status, listed) = get(&app, "/api/fruits").await;
    assert_eq!(status, StatusCode::OK);
    let items = listed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.contains(&apple));
    assert!(items.contains(&banana));
}

#[tokio::test]
async fn missing_name_is_rejected_before_persistence() {
    let app = app();

    let (status, _) = post_json(&app, "/api/fruits", json!({})).await;
    assert!(status.is_client_error());

    let (_, listed) = get(&app, "/api/fruits").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn empty_name_returns_400_with_error_body() {
    let app = app();

    let (status, body) = post_json(&app, "/api/fruits", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let (_, listed) = get(&app, "/api/fruits").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn resubmitting_an_existing_id_overwrites_the_row() {
    let app = app();

    let (_, created) = post_json(&app, "/api/fruits", json!({ "name": "Apple" })).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) =
        post_json(&app, "/api/fruits", json!({ "id": id, "name": "Green Apple" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": id, "name": "Green Apple" }));

    let (_, listed) = get(&app, "/api/fruits").await;
    assert_eq!(listed, json!([{ "id": id, "name": "Green Apple" }]));
}

#[tokio::test]
async fn resubmitting_unchanged_data_is_idempotent() {
    let app = app();

    let (_, created) = post_json(&app, "/api/fruits", json!({ "name": "Cherry" })).await;
    let (status, resaved) = post_json(&app, "/api/fruits", created.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resaved, created);

    let (_, listed) = get(&app, "/api/fruits").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_by_id_returns_the_record_or_404() {
    let app = app();

    let (_, created) = post_json(&app, "/api/fruits", json!({ "name": "Apple" })).await;
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = get(&app, &format!("/api/fruits/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = get(
        &app,
        "/api/fruits/00000000-0000-4000-8000-000000000001",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn malformed_id_in_path_is_a_client_error() {
    let app = app();

    let (status, _) = get(&app, "/api/fruits/not-a-uuid").await;
    assert!(status.is_client_error());
}
