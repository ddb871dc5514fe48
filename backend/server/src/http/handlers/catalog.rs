use api_models::{
    catalog::{self, Country, GatewayConfigInfo, PaymentScenario},
    ApiResponse,
};
use axum::{extract::State, Json};

use crate::http::state::AppState;

pub async fn countries() -> Json<ApiResponse<Vec<Country>>> {
    Json(ApiResponse::success(catalog::supported_countries()))
}

pub async fn scenarios() -> Json<ApiResponse<Vec<PaymentScenario>>> {
    Json(ApiResponse::success(catalog::payment_scenarios()))
}

pub async fn config(State(state): State<AppState>) -> Json<ApiResponse<GatewayConfigInfo>> {
    Json(ApiResponse::success(state.payments_service.gateway_config()))
}
