//! HTTP-level tests for authentication and request validation.
//!
//! Every request here is rejected before a query is issued, so the router runs
//! over a pool that never connects and no database is needed.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::{app_without_database, send, token_for};
use market_back::{config::AuthConfig, utils::jwt};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_health() {
    let app = app_without_database();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_protected_routes_require_authorization_header() {
    let app = app_without_database();

    for (method, uri) in [
        (Method::GET, "/user"),
        (Method::GET, "/user/cart"),
        (Method::POST, "/user/cart"),
        (Method::DELETE, "/user/cart/6a2f4c1e-9a4b-4c8e-8f7a-1d2e3f4a5b6c"),
        (Method::GET, "/user/orders"),
        (Method::POST, "/user/orders"),
        (Method::POST, "/buy-now"),
        (Method::PUT, "/user/payment-method"),
        (Method::GET, "/user/payment-methods"),
        (Method::GET, "/user/locations"),
        (Method::POST, "/products"),
        (Method::POST, "/api/events/add"),
    ] {
        let (status, body) = send(&app, method.clone(), uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["error"], "Authorization header missing or malformed");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let app = app_without_database();
    let request = Request::builder()
        .uri("/user/cart")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = app_without_database();
    let (status, body) = send(&app, Method::GET, "/user/cart", Some("garbage"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let app = app_without_database();
    let foreign = AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        token_ttl_seconds: 3600,
        bcrypt_cost: 4,
    };
    let token = jwt::generate_token(&foreign, Uuid::new_v4(), "a@b.com").unwrap();

    let (status, _) = send(&app, Method::GET, "/user/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_place_order_without_quantity() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/orders",
        Some(&token),
        Some(json!({
            "productId": Uuid::new_v4(),
            "shippingAddress": "12 Market Rd",
            "paymentMethod": "Visa",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required.");
}

#[tokio::test]
async fn test_buy_now_missing_fields_message() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::POST,
        "/buy-now",
        Some(&token),
        Some(json!({ "productId": Uuid::new_v4(), "quantity": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn test_place_order_with_malformed_product_id() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    for uri in ["/user/orders", "/buy-now"] {
        let (status, body) = send(
            &app,
            Method::POST,
            uri,
            Some(&token),
            Some(json!({
                "productId": "12345",
                "shippingAddress": "12 Market Rd",
                "paymentMethod": "Visa",
                "quantity": 2,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Invalid product ID format");
    }
}

#[tokio::test]
async fn test_place_order_with_zero_quantity() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/orders",
        Some(&token),
        Some(json!({
            "productId": Uuid::new_v4(),
            "shippingAddress": "12 Market Rd",
            "paymentMethod": "Visa",
            "quantity": 0,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Quantity must be at least 1");
}

#[tokio::test]
async fn test_cart_input_validation() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(&app, Method::POST, "/user/cart", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product ID is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/cart",
        Some(&token),
        Some(json!({ "productId": "not-an-id" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid product ID format");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/user/cart/not-an-id",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid product ID format");
}

#[tokio::test]
async fn test_payment_method_requires_all_fields() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user/payment-method",
        Some(&token),
        Some(json!({ "cardNumber": "4242424242424242", "expDate": "12/29", "country": "US" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All payment method fields are required");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/user/orders")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"productId\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_wrong_json_type_is_a_validation_error() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/orders",
        Some(&token),
        Some(json!({
            "productId": Uuid::new_v4(),
            "shippingAddress": "12 Market Rd",
            "paymentMethod": "Visa",
            "quantity": "lots",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = app_without_database();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .body(Body::from(r#"{"email":"a@b.com","password":"x"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validation() {
    let app = app_without_database();

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        None,
        Some(json!({
            "firstName": "Invalid",
            "lastName": "Email",
            "email": "invalid-email",
            "password": "password123",
            "phone": "1234567890",
            "address": "789 Test St",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        None,
        Some(json!({ "firstName": "Only", "email": "only@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required except for the image");
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let app = app_without_database();

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "email": "test@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn test_profile_input_validation() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user/theme",
        Some(&token),
        Some(json!({ "theme": " " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Theme value is required");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user/change-password",
        Some(&token),
        Some(json!({ "oldPassword": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Both old and new passwords are required");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user/location",
        Some(&token),
        Some(json!({ "city": "New City" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "City and radius are required");
}

#[tokio::test]
async fn test_profile_update_rejects_malformed_email() {
    let app = app_without_database();
    let token = token_for(Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user",
        Some(&token),
        Some(json!({ "firstName": "Renamed", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
}

#[tokio::test]
async fn test_get_product_with_malformed_id() {
    let app = app_without_database();
    let (status, body) = send(&app, Method::GET, "/products/abc", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid product ID format");
}
