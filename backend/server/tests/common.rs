#![allow(clippy::expect_used, dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use payment_server::configs::Config;
use tower::ServiceExt;

pub const KEY_ID: &str = "kid_integration";
pub const SIGN_KEY: &str = "sk_integration";

fn config_from_toml(contents: &str) -> Config {
    let config = config::Config::builder()
        .add_source(config::File::from_str(contents, config::FileFormat::Toml))
        .build()
        .expect("test config should build");
    config
        .try_deserialize()
        .expect("test config should deserialize")
}

/// Configuration without credentials, so every operation answers from demo mode.
pub fn demo_config() -> Config {
    config_from_toml(
        r#"
        [common]
        environment = "development"

        [server]
        host = "127.0.0.1"
        port = 8080

        [log.console]
        enabled = false

        [connectors.evonet]
        base_url = "https://sandbox.evonetonline.com"
        "#,
    )
}

/// Configuration with credentials pointing the provider calls at `base_url`.
pub fn live_config(base_url: &str) -> Config {
    config_from_toml(&format!(
        r#"
        [common]
        environment = "sandbox"

        [server]
        host = "127.0.0.1"
        port = 8080

        [log.console]
        enabled = false

        [connectors.evonet]
        base_url = "{base_url}"
        key_id = "{KEY_ID}"
        sign_key = "{SIGN_KEY}"
        "#
    ))
}

pub fn router(config: Config) -> Router {
    payment_server::app::router(Arc::new(config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body should be UTF-8")
    }
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router
        .oneshot(request)
        .await
        .expect("router should not fail");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: Router, uri: &str, body: String) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request should build");
    send(router, request).await
}

pub fn card_info() -> serde_json::Value {
    serde_json::json!({
        "cardNumber": "4111111111111111",
        "expiryDate": "12/30",
        "cvv": "123",
        "holderName": "Jane Doe"
    })
}
