#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn interaction_request(merchant_trans_id: &str, payment_type: &str) -> serde_json::Value {
    json!({
        "amount": 10.0,
        "currency": "USD",
        "merchantTransId": merchant_trans_id,
        "paymentType": payment_type,
        "returnUrl": "https://shop.test/return",
        "webhookUrl": "https://shop.test/api/v1/payment/webhook"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let response = common::get(common::router(common::demo_config()), "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = common::get(common::router(common::demo_config()), "/health").await;
    let request_id = response
        .headers
        .get("x-request-id")
        .expect("request id should be propagated");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn catalog_endpoints_wrap_data_in_success_envelope() {
    let countries = common::get(common::router(common::demo_config()), "/api/v1/countries").await;
    assert_eq!(countries.status, StatusCode::OK);
    let body = countries.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"][0]["code"], "GLOBAL");

    let scenarios = common::get(common::router(common::demo_config()), "/api/v1/scenarios").await;
    let body = scenarios.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["type"], "linkpay");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn config_endpoint_reports_demo_mode() {
    let response = common::get(common::router(common::demo_config()), "/api/v1/config").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["environment"], "development");
    assert_eq!(body["data"]["apiUrl"], "https://sandbox.evonetonline.com");
    assert_eq!(body["data"]["mode"], "demo");
}

#[tokio::test]
async fn linkpay_interaction_returns_demo_session_and_link() {
    let response = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/interaction",
        interaction_request("m1", "linkpay"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["merchantTransId"], "m1");
    assert_eq!(body["status"], "pending");
    assert_eq!(
        body["message"],
        "Demo mode: Payment interaction created successfully"
    );

    let session_id = body["sessionId"].as_str().unwrap();
    assert!(session_id.starts_with("demo_session_"));
    let link_url = body["linkUrl"].as_str().unwrap();
    assert!(link_url.starts_with("https://demo.linkpay.com/payment?session="));
    assert!(link_url.ends_with(session_id));
}

#[tokio::test]
async fn dropin_interaction_has_no_link() {
    let body = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/interaction",
        interaction_request("m3", "dropin"),
    )
    .await
    .json();

    assert_eq!(body["success"], true);
    assert!(body["sessionId"].as_str().is_some());
    assert!(body.get("linkUrl").is_none());
}

#[tokio::test]
async fn interaction_rejects_card_data() {
    let mut request = interaction_request("m4", "linkpay");
    request["cardInfo"] = common::card_info();

    let response = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/interaction",
        request,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Invalid request parameters");
}

#[tokio::test]
async fn direct_payment_is_captured_in_demo_mode() {
    let response = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/direct",
        json!({
            "amount": 25.5,
            "currency": "HKD",
            "merchantTransId": "m2",
            "paymentType": "directapi",
            "cardInfo": common::card_info()
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["merchantTransId"], "m2");
    assert_eq!(body["status"], "captured");
    assert_eq!(body["message"], "Demo mode: Payment completed successfully");
}

#[tokio::test]
async fn direct_payment_without_card_is_a_bad_request() {
    let response = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/direct",
        json!({
            "amount": 25.5,
            "currency": "HKD",
            "merchantTransId": "m2",
            "paymentType": "directapi"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request parameters");
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let response = common::post_raw(
        common::router(common::demo_config()),
        "/api/v1/payment/direct",
        "{ not json".to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request parameters");
    assert!(body["error"].as_str().is_some());

    let missing_amount = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/interaction",
        json!({ "currency": "USD", "merchantTransId": "m1", "paymentType": "linkpay" }),
    )
    .await;
    assert_eq!(missing_amount.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn payment_status_is_deterministic_per_identifier() {
    // Identifier byte length modulo 3 picks captured, pending, failed.
    let cases = [
        ("abc", "captured", 300.0),
        ("abcd", "pending", 289.97),
        ("abcde", "failed", 289.97),
    ];

    for (id, status, amount) in cases {
        for _ in 0..2 {
            let response = common::get(
                common::router(common::demo_config()),
                &format!("/api/v1/payment/{id}"),
            )
            .await;
            assert_eq!(response.status, StatusCode::OK);
            let body = response.json();
            assert_eq!(body["success"], true);
            assert_eq!(body["data"]["merchantTransId"], id);
            assert_eq!(body["data"]["status"], status);
            assert_eq!(body["data"]["amount"], amount);
            assert_eq!(body["data"]["currency"], "USD");
        }
    }
}

#[tokio::test]
async fn interaction_status_matches_payment_status() {
    let interaction = common::get(
        common::router(common::demo_config()),
        "/api/v1/interaction/order-12",
    )
    .await
    .json();
    let payment = common::get(
        common::router(common::demo_config()),
        "/api/v1/payment/order-12",
    )
    .await
    .json();

    assert_eq!(interaction["data"]["status"], payment["data"]["status"]);
    assert_eq!(interaction["data"]["merchantTransId"], "order-12");
}

#[tokio::test]
async fn webhook_is_acknowledged() {
    let response = common::post_json(
        common::router(common::demo_config()),
        "/api/v1/payment/webhook",
        json!({
            "eventCode": "PAYMENT_CAPTURED",
            "payment": { "merchantTransId": "m2", "status": "captured" }
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "SUCCESS");
}

#[tokio::test]
async fn unparsable_webhook_is_rejected() {
    let response = common::post_raw(
        common::router(common::demo_config()),
        "/api/v1/payment/webhook",
        "garbage".to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({ "success": false, "message": "Invalid webhook data" })
    );
}
