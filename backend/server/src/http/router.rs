use axum::{
    routing::{get, post},
    Router,
};

use super::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/countries", get(handlers::catalog::countries))
        .route("/scenarios", get(handlers::catalog::scenarios))
        .route("/config", get(handlers::catalog::config))
        .route(
            "/payment/interaction",
            post(handlers::payments::create_interaction),
        )
        .route("/payment/direct", post(handlers::payments::create_direct_payment))
        .route("/payment/webhook", post(handlers::webhooks::payment_webhook))
        .route(
            "/payment/{merchant_trans_id}",
            get(handlers::payments::get_payment_status),
        )
        .route(
            "/interaction/{merchant_order_id}",
            get(handlers::interactions::get_interaction_status),
        );

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/v1", api_v1)
        .with_state(state)
}
