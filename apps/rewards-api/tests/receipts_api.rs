//! End-to-end tests for the receipt routes.
//!
//! These drive the router directly with `tower::ServiceExt::oneshot`, so the
//! full request path (deserialization, validation, storage, scoring,
//! response shaping) is exercised without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use rewards_api::{router, ReceiptStore};

fn app() -> Router {
    router(ReceiptStore::new())
}

fn post_receipt(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

/// Full round trip: process stores the receipt, points scores it.
async fn process_then_points(receipt: Value) -> u64 {
    let app = app();

    let response = app.clone().oneshot(post_receipt(&receipt)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let id = body["id"].as_str().expect("id should be a string");
    assert!(!id.is_empty());

    let response = app
        .oneshot(get(&format!("/receipts/{id}/points")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["points"]
        .as_u64()
        .expect("points should be an integer")
}

#[tokio::test]
async fn target_receipt_scores_28() {
    assert_eq!(process_then_points(target_receipt()).await, 28);
}

#[tokio::test]
async fn corner_market_receipt_scores_109() {
    assert_eq!(process_then_points(corner_market_receipt()).await, 109);
}

#[tokio::test]
async fn each_process_mints_a_fresh_id() {
    let app = app();

    let first = body_json(app.clone().oneshot(post_receipt(&target_receipt())).await.unwrap()).await;
    let second =
        body_json(app.clone().oneshot(post_receipt(&target_receipt())).await.unwrap()).await;

    assert_ne!(first["id"], second["id"]);

    // Both ids resolve independently.
    for body in [first, second] {
        let id = body["id"].as_str().unwrap();
        let response = app
            .clone()
            .oneshot(get(&format!("/receipts/{id}/points")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let mut receipt = target_receipt();
    receipt.as_object_mut().unwrap().remove("total");

    let response = app().oneshot(post_receipt(&receipt)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "The receipt is invalid");
}

#[tokio::test]
async fn empty_receipt_is_rejected() {
    let response = app().oneshot(post_receipt(&json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn off_format_total_is_rejected() {
    for bad in ["125", "125.0", "125.000", ".25"] {
        let mut receipt = target_receipt();
        receipt["total"] = json!(bad);

        let response = app().oneshot(post_receipt(&receipt)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "total {bad:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn wrong_typed_field_is_rejected_as_invalid() {
    let mut receipt = target_receipt();
    receipt["retailer"] = json!(42);

    let response = app().oneshot(post_receipt(&receipt)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "The receipt is invalid");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let response = app()
        .oneshot(get("/receipts/no-such-id/points"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "No receipt found for that id");
}

#[tokio::test]
async fn rejected_receipt_is_not_stored() {
    let store = ReceiptStore::new();
    let app = router(store.clone());

    let mut receipt = target_receipt();
    receipt["total"] = json!("not-money");

    let response = app.oneshot(post_receipt(&receipt)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
