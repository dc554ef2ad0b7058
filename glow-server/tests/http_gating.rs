//! HTTP-level tests: session cookie issue and endpoint gating
//!
//! Drives the assembled router directly with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use glow_server::auth::{JwtConfig, JwtService};
use glow_server::core::{Config, Server, ServerState};
use glow_server::db::DbService;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _tmp: tempfile::TempDir,
}

async fn test_app() -> TestApp {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);

    let db = DbService::open(&tmp.path().join("glow.db"))
        .await
        .expect("Failed to open test database");
    let jwt = Arc::new(JwtService::with_config(JwtConfig {
        secret: "http-test-secret-key-0123456789abcdef".to_string(),
        ttl_days: 365,
    }));

    let state = ServerState::new(config, db.db, jwt);
    TestApp {
        router: Server::build_router(state),
        _tmp: tmp,
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = router
        .clone()
        .oneshot(req)
        .await
        .expect("Request dispatch failed");
    let status = res.status();
    let bytes = res
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response was not JSON")
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

fn json_request_with_cookie(method: &str, uri: &str, cookie: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie.to_string())
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Issue a session cookie via POST /jwt and return the "token=..." pair
async fn login(router: &Router, email: &str) -> String {
    let res = router
        .clone()
        .oneshot(json_request("POST", "/jwt", json!({ "email": email })))
        .await
        .expect("Request dispatch failed");
    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .expect("Missing Set-Cookie header")
        .to_str()
        .expect("Set-Cookie is not valid UTF-8")
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));

    set_cookie
        .split(';')
        .next()
        .expect("Empty Set-Cookie header")
        .to_string()
}

#[tokio::test]
async fn jwt_requires_email() {
    let app = test_app().await;

    let (status, body) = send(&app.router, json_request("POST", "/jwt", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn jwt_sets_http_only_cookie() {
    let app = test_app().await;

    let cookie = login(&app.router, "a@x.com").await;
    assert!(cookie.starts_with("token="));

    // The issued cookie passes the session gate
    let (status, body) = send(
        &app.router,
        json_request_with_cookie("GET", "/customer-order/a@x.com", &cookie, Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn gated_endpoints_reject_missing_token() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        Request::builder()
            .method("GET")
            .uri("/customer-order/a@x.com")
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn gated_endpoints_reject_garbage_token() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        json_request_with_cookie(
            "GET",
            "/customer-order/a@x.com",
            "token=not-a-jwt",
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");
}

#[tokio::test]
async fn bearer_header_is_accepted_as_fallback() {
    let app = test_app().await;

    let cookie = login(&app.router, "a@x.com").await;
    let token = cookie.trim_start_matches("token=");

    let req = Request::builder()
        .method("GET")
        .uri("/customer-order/a@x.com")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("Failed to build request");

    let (status, _) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn public_catalog_needs_no_session() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        Request::builder()
            .method("GET")
            .uri("/products")
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_product_is_distinct_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app.router,
        Request::builder()
            .method("GET")
            .uri("/product/doesnotexist")
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn full_order_flow_over_http() {
    let app = test_app().await;
    let cookie = login(&app.router, "a@x.com").await;

    // Register the customer (public)
    let (status, user) = send(
        &app.router,
        json_request("POST", "/users/a@x.com", json!({ "name": "Ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["role"], "customer");

    // Create a product (public)
    let (status, product) = send(
        &app.router,
        json_request(
            "POST",
            "/products",
            json!({
                "productName": "Serum A",
                "image": "https://img.example/serum-a.png",
                "category": "skincare",
                "quantity": 10,
                "price": 19.5
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let product_id = product["id"].as_str().expect("Missing product id").to_string();

    // Place an order (gated)
    let (status, order) = send(
        &app.router,
        json_request_with_cookie(
            "POST",
            "/order",
            &cookie,
            json!({
                "customer": { "email": "a@x.com" },
                "productId": product_id,
                "status": "pending",
                "quantity": 2,
                "price": 39.0
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order_id = order["id"].as_str().expect("Missing order id").to_string();

    // Stock decrement is a separate, gated call
    let (status, adjusted) = send(
        &app.router,
        json_request_with_cookie(
            "PATCH",
            &format!("/products/quantity/{product_id}"),
            &cookie,
            json!({ "quantityToUpdate": 2 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(adjusted["quantity"], 8);

    // Enriched listing carries the product's display fields, no nested product
    let (status, listed) = send(
        &app.router,
        json_request_with_cookie("GET", "/customer-order/a@x.com", &cookie, Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = listed.as_array().expect("Listing was not an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Serum A");
    assert_eq!(entries[0]["category"], "skincare");
    assert!(entries[0].get("product_ref").is_none());

    // Cancel, then the listing is empty again
    let (status, _) = send(
        &app.router,
        json_request_with_cookie("DELETE", &format!("/order/{order_id}"), &cookie, Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(
        &app.router,
        json_request_with_cookie("GET", "/customer-order/a@x.com", &cookie, Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn delivered_order_delete_conflicts_over_http() {
    let app = test_app().await;
    let cookie = login(&app.router, "d@x.com").await;

    let (_, product) = send(
        &app.router,
        json_request(
            "POST",
            "/products",
            json!({ "productName": "Serum B", "category": "skincare", "quantity": 1 }),
        ),
    )
    .await;
    let product_id = product["id"].as_str().expect("Missing product id").to_string();

    let (_, order) = send(
        &app.router,
        json_request_with_cookie(
            "POST",
            "/order",
            &cookie,
            json!({
                "customer": { "email": "d@x.com" },
                "productId": product_id,
                "status": "delivered"
            }),
        ),
    )
    .await;
    let order_id = order["id"].as_str().expect("Missing order id").to_string();

    let (status, body) = send(
        &app.router,
        json_request_with_cookie("DELETE", &format!("/order/{order_id}"), &cookie, Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    // Deleting an unknown order is a distinct 404
    let (status, _) = send(
        &app.router,
        json_request_with_cookie("DELETE", "/order/doesnotexist", &cookie, Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
