//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use sweetshop_auth::jwt::SigningKey;
use sweetshop_auth::password::PasswordHasher;
use sweetshop_core::config::AppConfig;
use sweetshop_database::memory::{MemorySweetStore, MemoryUserStore};
use sweetshop_database::store::UserStore;
use sweetshop_entity::user::{CreateUser, UserRole};

pub const ADMIN_EMAIL: &str = "root@shop.test";
pub const ADMIN_PASSWORD: &str = "kaju-katli-42";
pub const USER_EMAIL: &str = "asha@shop.test";
pub const USER_PASSWORD: &str = "rasmalai-42";

/// Test application context backed by in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Credential store, for seeding accounts directly
    pub users: Arc<MemoryUserStore>,
    /// Catalog store
    pub sweets: Arc<MemorySweetStore>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig::for_tests();
        let users = Arc::new(MemoryUserStore::new());
        let sweets = Arc::new(MemorySweetStore::new());

        let state = sweetshop_api::build_state(config.clone(), users.clone(), sweets.clone())
            .expect("Failed to build state");

        Self {
            router: sweetshop_api::build_app(state),
            config,
            users,
            sweets,
        }
    }

    /// The key the app signs tokens with.
    pub fn signing_key(&self) -> SigningKey {
        SigningKey::from_config(&self.config.auth).expect("Failed to build signing key")
    }

    /// Seed an ADMIN account, bypassing the HTTP surface.
    pub async fn create_admin(&self, email: &str, password: &str) {
        let password_hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");
        self.users
            .create(&CreateUser {
                username: "root".to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::Admin,
            })
            .await
            .expect("Failed to create admin");
    }

    /// POST /api/auth/register
    pub async fn register(&self, username: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("login response has no token")
            .to_string()
    }

    /// Token for a freshly seeded admin.
    pub async fn admin_token(&self) -> String {
        self.create_admin(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Token for a freshly registered customer.
    pub async fn user_token(&self) -> String {
        let response = self.register("asha", USER_EMAIL, USER_PASSWORD).await;
        assert_eq!(response.status, StatusCode::CREATED);
        self.login(USER_EMAIL, USER_PASSWORD).await
    }

    /// Add a sweet as admin and return the created body.
    pub async fn add_sweet(
        &self,
        admin_token: &str,
        name: &str,
        category: &str,
        price: f64,
        quantity: i32,
    ) -> Value {
        let response = self
            .request(
                "POST",
                "/api/sweets",
                Some(json!({
                    "name": name,
                    "category": category,
                    "price": price,
                    "quantity": quantity,
                })),
                Some(admin_token),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "add failed: {:?}", response.body);
        response.body
    }

    /// Make a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        TestResponse::from_response(self.send(req).await).await
    }

    /// Send a fully built request.
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}

impl TestResponse {
    async fn from_response(response: Response<Body>) -> Self {
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        Self { status, body }
    }
}
