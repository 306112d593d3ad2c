//! End-to-end CRUD contract tests, driven through the real router without
//! sockets.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use momo_api::auth::{Credential, CredentialTable};
use momo_api::server::{AppState, HttpConfig, HttpServer};
use momo_api::store::{Fields, Record, TransactionStore};

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn seed() -> Vec<Record> {
    vec![
        Record::new(1, fields(json!({"address": "M-Money", "amount": 2000}))),
        Record::new(2, fields(json!({"address": "M-Money", "amount": 500}))),
        Record::new(5, fields(json!({"amount": 10, "status": "A"}))),
    ]
}

fn test_router(records: Vec<Record>) -> Router {
    let store = TransactionStore::from_records(records);
    let credentials = CredentialTable::new(vec![
        Credential {
            username: "admin".to_string(),
            password: "password123".to_string(),
        },
        Credential {
            username: "user".to_string(),
            password: "momo2024".to_string(),
        },
    ]);
    let state = Arc::new(AppState::new(store, credentials));
    HttpServer::with_config(HttpConfig::default(), state).router()
}

fn basic_auth() -> String {
    format!(
        "Basic {}",
        base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            "admin:password123",
        )
    )
}

fn authed(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_returns_count_and_order() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/transactions", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["transactions"][0]["id"], 1);
    assert_eq!(body["transactions"][1]["id"], 2);
    assert_eq!(body["transactions"][2]["id"], 5);
}

#[tokio::test]
async fn test_list_accepts_trailing_slash() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/transactions/", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_returns_bare_record() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/transactions/2", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["amount"], 500);
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/transactions/99", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Transaction not found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/transactions/abc", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid transaction ID");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/unknown", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_extra_path_segment_is_unmatched_route() {
    let router = test_router(seed());

    let response = send(&router, authed("GET", "/transactions/1/extra", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_unlisted_method_on_matched_path_is_404() {
    let router = test_router(seed());

    let post_to_id = send(
        &router,
        authed("POST", "/transactions/5", Body::from(r#"{"amount": 1}"#)),
    )
    .await;
    let put_to_collection = send(
        &router,
        authed("PUT", "/transactions", Body::from(r#"{"amount": 1}"#)),
    )
    .await;

    assert_eq!(post_to_id.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(post_to_id).await["error"], "Endpoint not found");
    assert_eq!(put_to_collection.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let router = test_router(seed());

    let response = send(
        &router,
        authed(
            "POST",
            "/transactions",
            Body::from(r#"{"amount": 30}"#),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Transaction created successfully");
    assert_eq!(body["id"], 6);
    assert_eq!(body["transaction"]["id"], 6);
    assert_eq!(body["transaction"]["amount"], 30);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let router = test_router(seed());

    let response = send(
        &router,
        authed(
            "POST",
            "/transactions",
            Body::from(r#"{"id": 42, "amount": 30}"#),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 6);
}

#[tokio::test]
async fn test_creates_on_empty_store_start_at_one() {
    let router = test_router(Vec::new());

    let first = send(
        &router,
        authed("POST", "/transactions", Body::from(r#"{"amount": 10}"#)),
    )
    .await;
    let second = send(
        &router,
        authed("POST", "/transactions", Body::from(r#"{"amount": 20}"#)),
    )
    .await;

    assert_eq!(body_json(first).await["id"], 1);
    assert_eq!(body_json(second).await["id"], 2);

    let list = send(&router, authed("GET", "/transactions", Body::empty())).await;
    let body = body_json(list).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["transactions"][0]["id"], 1);
    assert_eq!(body["transactions"][1]["id"], 2);
}

#[tokio::test]
async fn test_post_empty_body_is_400() {
    let router = test_router(seed());

    let response = send(&router, authed("POST", "/transactions", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_post_unparseable_body_is_400() {
    let router = test_router(seed());

    let response = send(
        &router,
        authed("POST", "/transactions", Body::from("not json")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_post_non_object_body_is_400() {
    let router = test_router(seed());

    let response = send(&router, authed("POST", "/transactions", Body::from("5"))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_update_shallow_merges_and_preserves_id() {
    let router = test_router(seed());

    let response = send(
        &router,
        authed(
            "PUT",
            "/transactions/5",
            Body::from(r#"{"id": 99, "status": "B"}"#),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Transaction updated successfully");
    assert_eq!(body["transaction"]["id"], 5);
    assert_eq!(body["transaction"]["amount"], 10);
    assert_eq!(body["transaction"]["status"], "B");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let router = test_router(seed());

    let response = send(
        &router,
        authed("PUT", "/transactions/99", Body::from(r#"{"status": "B"}"#)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_non_numeric_id_is_400() {
    let router = test_router(seed());

    let response = send(
        &router,
        authed("PUT", "/transactions/abc", Body::from(r#"{"status": "B"}"#)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid transaction ID");
}

#[tokio::test]
async fn test_update_empty_body_is_400() {
    let router = test_router(seed());

    let response = send(&router, authed("PUT", "/transactions/5", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_delete_returns_contents_then_get_is_404() {
    let router = test_router(seed());

    let response = send(&router, authed("DELETE", "/transactions/2", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Transaction deleted successfully");
    assert_eq!(body["deleted_transaction"]["id"], 2);
    assert_eq!(body["deleted_transaction"]["amount"], 500);

    let get = send(&router, authed("GET", "/transactions/2", Body::empty())).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_non_numeric_id_is_400() {
    let router = test_router(seed());

    let response = send(&router, authed("DELETE", "/transactions/x9", Body::empty())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_header_on_success() {
    let router = test_router(seed());

    let mut request = authed("GET", "/transactions", Body::empty());
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://example.com".parse().unwrap());

    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
