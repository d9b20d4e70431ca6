//! Integration tests for the auth gate, CORS and the fallback routes.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::json;

use helpers::{TestApp, USER_EMAIL};
use sweetshop_auth::jwt::{JwtEncoder, SigningKey};
use sweetshop_entity::user::UserRole;

fn sweet_body() -> serde_json::Value {
    json!({
        "name": "Kalakand",
        "category": "Indian",
        "price": 22.0,
        "quantity": 2,
    })
}

#[tokio::test]
async fn test_garbage_token_ignored_on_public_reads() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/sweets", None, Some("definitely.not.a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_garbage_token_is_treated_as_anonymous() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let sweet = app.add_sweet(&admin_token, "Kalakand", "Indian", 22.0, 2).await;
    let path = format!("/api/sweets/{}/purchase", sweet["id"]);

    let purchase = app.request("PUT", &path, None, Some("garbage")).await;
    assert_eq!(purchase.status, StatusCode::UNAUTHORIZED);

    let add = app
        .request("POST", "/api/sweets", Some(sweet_body()), Some("garbage"))
        .await;
    let anonymous_add = app
        .request("POST", "/api/sweets", Some(sweet_body()), None)
        .await;
    assert_eq!(add.status, StatusCode::FORBIDDEN);
    assert_eq!(add.body, anonymous_add.body);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let sweet = app.add_sweet(&admin_token, "Kalakand", "Indian", 22.0, 2).await;
    let path = format!("/api/sweets/{}/purchase", sweet["id"]);

    let expired = JwtEncoder::new(&app.signing_key(), 60)
        .issue_at(USER_EMAIL, UserRole::User, Utc::now() - Duration::hours(2))
        .expect("issue token");

    let response = app.request("PUT", &path, None, Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_seconds_past_expiry_is_rejected() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let sweet = app.add_sweet(&admin_token, "Kalakand", "Indian", 22.0, 2).await;
    let path = format!("/api/sweets/{}/purchase", sweet["id"]);

    let ttl_minutes = app.config.auth.token_ttl_minutes;
    let issued_at = Utc::now() - Duration::minutes(ttl_minutes as i64) - Duration::seconds(3);
    let token = JwtEncoder::new(&app.signing_key(), ttl_minutes)
        .issue_at(USER_EMAIL, UserRole::User, issued_at)
        .expect("issue token");

    let response = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let list = app.request("GET", "/api/sweets", None, None).await;
    assert_eq!(list.body[0]["quantity"], 2);
}

#[tokio::test]
async fn test_token_from_another_key_is_anonymous() {
    let app = TestApp::new();
    let foreign = JwtEncoder::new(&SigningKey::generate(), 60)
        .issue("intruder@shop.test", UserRole::Admin)
        .expect("issue token");

    let response = app
        .request("POST", "/api/sweets", Some(sweet_body()), Some(&foreign))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.sweets.len(), 0);
}

#[tokio::test]
async fn test_valid_token_reaches_guards() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let user_token = app.user_token().await;
    let sweet = app.add_sweet(&admin_token, "Kalakand", "Indian", 22.0, 2).await;
    let path = format!("/api/sweets/{}/purchase", sweet["id"]);

    let response = app.request("PUT", &path, None, Some(&user_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quantity"], 1);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::new();

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/sweets/1/purchase")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/nothing-here", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}
