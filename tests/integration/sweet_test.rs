//! Integration tests for the catalog and purchasing.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

fn id_of(sweet: &Value) -> i64 {
    sweet["id"].as_i64().expect("sweet id")
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|s| s["name"].as_str().expect("name").to_string())
        .collect()
}

#[tokio::test]
async fn test_list_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/sweets", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_only_admin_can_add() {
    let app = TestApp::new();
    let body = json!({
        "name": "Gulab jamun",
        "category": "Indian",
        "price": 25.0,
        "quantity": 10,
    });

    let anonymous = app
        .request("POST", "/api/sweets", Some(body.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);

    let user_token = app.user_token().await;
    let customer = app
        .request("POST", "/api/sweets", Some(body.clone()), Some(&user_token))
        .await;
    assert_eq!(customer.status, StatusCode::FORBIDDEN);
    assert_eq!(customer.body["error"], "FORBIDDEN");

    let admin_token = app.admin_token().await;
    let created = app
        .request("POST", "/api/sweets", Some(body), Some(&admin_token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["name"], "Gulab jamun");
    assert_eq!(created.body["quantity"], 10);

    let list = app.request("GET", "/api/sweets", None, None).await;
    assert_eq!(names(&list.body), vec!["Gulab jamun"]);
}

#[tokio::test]
async fn test_add_rejects_invalid_fields() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/sweets",
            Some(json!({
                "name": "Barfi",
                "category": "Indian",
                "price": 0,
                "quantity": -1,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["price"].is_array());
    assert!(response.body["details"]["quantity"].is_array());
    assert_eq!(app.sweets.len(), 0);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let sweet = app.add_sweet(&token, "Peda", "Indian", 12.0, 4).await;
    let path = format!("/api/sweets/{}", id_of(&sweet));

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "name": "Kesar peda",
                "category": "Indian",
                "price": 15.5,
                "quantity": 8,
                "description": "Saffron milk fudge",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], sweet["id"]);
    assert_eq!(response.body["name"], "Kesar peda");
    assert_eq!(response.body["price"], 15.5);
    assert_eq!(response.body["description"], "Saffron milk fudge");
}

#[tokio::test]
async fn test_update_unknown_or_unauthorized() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let user_token = app.user_token().await;
    let sweet = app.add_sweet(&admin_token, "Peda", "Indian", 12.0, 4).await;
    let body = json!({
        "name": "Peda",
        "category": "Indian",
        "price": 1.0,
        "quantity": 1,
    });

    let missing = app
        .request("PUT", "/api/sweets/9999", Some(body.clone()), Some(&admin_token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let path = format!("/api/sweets/{}", id_of(&sweet));
    let forbidden = app
        .request("PUT", &path, Some(body), Some(&user_token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let list = app.request("GET", "/api/sweets", None, None).await;
    assert_eq!(list.body[0]["price"], 12.0);
}

#[tokio::test]
async fn test_delete_then_gone() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let sweet = app.add_sweet(&token, "Rasgulla", "Indian", 20.0, 3).await;
    let path = format!("/api/sweets/{}", id_of(&sweet));

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/sweets", None, None).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_purchase_decrements_stock() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let user_token = app.user_token().await;
    let sweet = app.add_sweet(&admin_token, "Jalebi", "Indian", 30.0, 5).await;
    let path = format!("/api/sweets/{}/purchase", id_of(&sweet));

    let anonymous = app.request("PUT", &path, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let bought = app.request("PUT", &path, None, Some(&user_token)).await;
    assert_eq!(bought.status, StatusCode::OK);
    assert_eq!(bought.body["quantity"], 4);
}

#[tokio::test]
async fn test_purchase_out_of_stock_conflicts() {
    let app = TestApp::new();
    let admin_token = app.admin_token().await;
    let user_token = app.user_token().await;
    let sweet = app.add_sweet(&admin_token, "Halwa", "Indian", 18.0, 1).await;
    let path = format!("/api/sweets/{}/purchase", id_of(&sweet));

    let first = app.request("PUT", &path, None, Some(&user_token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["quantity"], 0);

    let second = app.request("PUT", &path, None, Some(&user_token)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Sweet out of stock");

    let list = app.request("GET", "/api/sweets", None, None).await;
    assert_eq!(list.body[0]["quantity"], 0);
}

#[tokio::test]
async fn test_purchase_unknown_sweet() {
    let app = TestApp::new();
    let token = app.user_token().await;

    let response = app
        .request("PUT", "/api/sweets/4242/purchase", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Sweet 4242 not found");
}

#[tokio::test]
async fn test_search_filters() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.add_sweet(&token, "Besan ladoo", "Indian", 10.0, 5).await;
    app.add_sweet(&token, "Motichoor Ladoo", "Indian", 20.0, 5).await;
    app.add_sweet(&token, "Dark truffle", "Chocolate", 35.0, 5).await;
    app.add_sweet(&token, "Milk bar", "Chocolate Bars", 20.5, 5).await;

    let by_name = app
        .request("GET", "/api/sweets/search?name=LADOO&category=Chocolate", None, None)
        .await;
    assert_eq!(by_name.status, StatusCode::OK);
    assert_eq!(names(&by_name.body), vec!["Besan ladoo", "Motichoor Ladoo"]);

    let by_category = app
        .request("GET", "/api/sweets/search?category=chocolate", None, None)
        .await;
    assert_eq!(names(&by_category.body), vec!["Dark truffle"]);

    let by_price = app
        .request("GET", "/api/sweets/search?minPrice=10&maxPrice=20", None, None)
        .await;
    assert_eq!(names(&by_price.body), vec!["Besan ladoo", "Motichoor Ladoo"]);

    let blank = app
        .request("GET", "/api/sweets/search?name=&minPrice=", None, None)
        .await;
    assert_eq!(blank.status, StatusCode::OK);
    assert_eq!(blank.body.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_bad_ids_and_params_are_rejected() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let bad_id = app
        .request("DELETE", "/api/sweets/not-a-number", None, Some(&token))
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["error"], "VALIDATION_ERROR");

    let bad_price = app
        .request("GET", "/api/sweets/search?minPrice=cheap&maxPrice=5", None, None)
        .await;
    assert_eq!(bad_price.status, StatusCode::BAD_REQUEST);
}
