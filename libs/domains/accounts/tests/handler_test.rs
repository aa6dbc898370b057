//! Handler tests for Accounts domain
//!
//! These tests drive the accounts router over the in-memory repository:
//! - Request deserialization and field validation
//! - Status codes for created / found / missing / rejected input
//! - Error response bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_accounts::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt; // For oneshot()

/// Fast deterministic hasher so tests do not pay for Argon2
#[derive(Default)]
struct SequenceHasher {
    calls: AtomicUsize,
}

impl PasswordHasher for SequenceHasher {
    fn hash(&self, _plaintext: &str) -> AccountResult<String> {
        Ok(format!("hash-{}", self.calls.fetch_add(1, Ordering::SeqCst)))
    }
}

fn app(repo: InMemoryAccountRepository) -> Router {
    handlers::router(AccountService::with_hasher(repo, SequenceHasher::default()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn raw_json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed(repo: &InMemoryAccountRepository) -> Account {
    repo.save(Account::new(
        "John Doe".to_string(),
        "john@example.com".to_string(),
        "stored-hash".to_string(),
    ))
    .await
    .unwrap()
}

#[tokio::test]
async fn test_create_account_returns_201() {
    let repo = InMemoryAccountRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "password": "Password123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john@example.com");
    assert!(body.get("password").is_none());

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.password, "hash-0");
}

#[tokio::test]
async fn test_create_account_weak_password_returns_400() {
    let repo = InMemoryAccountRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "password": "short"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Password must contain at least one uppercase letter, one lowercase letter, and one digit"
    );
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_account_empty_password_returns_400() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "password": ""
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Password cannot be empty");
}

#[tokio::test]
async fn test_create_account_null_body_returns_400() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(json_request("POST", "/", Value::Null))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_account_validates_fields() {
    let repo = InMemoryAccountRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "x".repeat(51),
                "email": "not-an-email",
                "password": "Password123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"].get("name").is_some());
    assert!(body["details"].get("email").is_some());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_account_missing_name_returns_400() {
    let repo = InMemoryAccountRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "email": "john@example.com", "password": "Password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["name"][0]["message"], "Name is mandatory");
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_account_malformed_json_returns_json_400() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(raw_json_request("POST", "/", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], 1003);
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_get_account_returns_200() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo).oneshot(empty_request("GET", "/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "John Doe");
}

#[tokio::test]
async fn test_get_unknown_account_returns_404() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(empty_request("GET", "/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_account_invalid_id_returns_400() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(empty_request("GET", "/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_accounts() {
    let repo = InMemoryAccountRepository::new();

    let response = app(repo.clone())
        .oneshot(empty_request("GET", "/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));

    seed(&repo).await;
    seed(&repo).await;

    let response = app(repo).oneshot(empty_request("GET", "/")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_account_keeps_password() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({
                "name": "Jane",
                "email": "jane@x.com",
                "password": "IgnoredPass1"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Jane");
    assert_eq!(body["email"], "jane@x.com");

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.password, "stored-hash");
}

#[tokio::test]
async fn test_update_unknown_account_returns_404() {
    let repo = InMemoryAccountRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            "/7",
            json!({ "name": "Jane", "email": "jane@x.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_account_validates_fields() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo)
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({ "name": "  ", "email": "jane@x.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_account_missing_email_returns_400() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(json_request("PUT", "/1", json!({ "name": "Jane" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["details"]["email"][0]["message"], "Email is mandatory");

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.email, "john@example.com");
}

#[tokio::test]
async fn test_patch_account_replaces_password_only() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(json_request(
            "PATCH",
            "/1",
            json!({ "password": "NewPass123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.password, "hash-0");
    assert_eq!(stored.name, "John Doe");
    assert_eq!(stored.email, "john@example.com");
}

#[tokio::test]
async fn test_patch_account_weak_password_returns_400() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(json_request("PATCH", "/1", json!({ "password": "weak" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.password, "stored-hash");
}

#[tokio::test]
async fn test_patch_account_without_password_returns_400() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(json_request("PATCH", "/1", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["message"], "Password cannot be empty");

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.password, "stored-hash");
}

#[tokio::test]
async fn test_patch_account_malformed_json_returns_json_400() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(raw_json_request("PATCH", "/1", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.password, "stored-hash");
}

#[tokio::test]
async fn test_patch_unknown_account_returns_404() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(json_request(
            "PATCH",
            "/3",
            json!({ "password": "NewPass123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_account_then_get_returns_404() {
    let repo = InMemoryAccountRepository::new();
    seed(&repo).await;

    let response = app(repo.clone())
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Account Successfully Deleted");

    let response = app(repo).oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_account_is_ok() {
    let response = app(InMemoryAccountRepository::new())
        .oneshot(empty_request("DELETE", "/42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_with_argon2_hasher() {
    let repo = InMemoryAccountRepository::new();
    let router = handlers::router(AccountService::new(repo.clone()));

    let response = router
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "password": "Password123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_ne!(stored.password, "Password123");
    assert!(stored.password.starts_with("$argon2id$"));
}
