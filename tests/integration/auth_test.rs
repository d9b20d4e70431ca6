//! Integration tests for registration and login.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use helpers::{TestApp, USER_EMAIL, USER_PASSWORD};
use sweetshop_auth::jwt::JwtDecoder;
use sweetshop_entity::user::UserRole;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app.register("asha", USER_EMAIL, USER_PASSWORD).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("asha", USER_EMAIL, USER_PASSWORD).await;

    let response = app
        .register("asha2", "  ASHA@shop.test", USER_PASSWORD)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(response.body["message"], "Email already registered");
}

#[tokio::test]
async fn test_register_validation_errors_are_per_field() {
    let app = TestApp::new();

    let response = app.register("asha", "not-an-email", USER_PASSWORD).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["email"].is_array());

    let long_email = format!("asha@{}shop.test", format!("{}.", "x".repeat(60)).repeat(4));
    let response = app.register("asha", &long_email, USER_PASSWORD).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["email"].is_array());

    let response = app.register("asha", USER_EMAIL, "abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["password"].is_array());
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = TestApp::new();

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"username\": "))
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_cannot_choose_role() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "sneaky",
                "email": "sneaky@shop.test",
                "password": USER_PASSWORD,
                "role": "ADMIN",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "sneaky@shop.test", "password": USER_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.body["user"]["role"], "USER");
}

#[tokio::test]
async fn test_login_returns_token_with_stored_role() {
    let app = TestApp::new();
    app.register("asha", USER_EMAIL, USER_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "Asha@Shop.Test", "password": USER_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], USER_EMAIL);
    assert_eq!(response.body["user"]["username"], "asha");
    assert!(response.body["user"].get("passwordHash").is_none());
    assert!(response.body["user"].get("password_hash").is_none());

    let token = response.body["token"].as_str().expect("token");
    let identity = JwtDecoder::new(&app.signing_key())
        .verify(token)
        .expect("token should verify");
    assert_eq!(identity.email, USER_EMAIL);
    assert_eq!(identity.role, UserRole::User);
}

#[tokio::test]
async fn test_admin_login_carries_admin_role() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let identity = JwtDecoder::new(&app.signing_key())
        .verify(&token)
        .expect("token should verify");
    assert_eq!(identity.role, UserRole::Admin);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new();
    app.register("asha", USER_EMAIL, USER_PASSWORD).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": USER_EMAIL, "password": "wrong-password" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@shop.test", "password": USER_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}
