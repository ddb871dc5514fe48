use api_models::{ApiResponse, Payment, PaymentRequest, PaymentResponse};
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ReportSwitchExt,
    http::{error::HttpError, state::AppState, utils::ValidatedJson},
};

pub async fn create_interaction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PaymentRequest>,
) -> Result<Json<PaymentResponse>, HttpError> {
    state
        .payments_service
        .create_interaction(payload)
        .await
        .switch()
        .map(Json)
        .map_err(|report| {
            HttpError::from_application_error(
                report.current_context(),
                "Failed to create payment interaction",
            )
        })
}

pub async fn create_direct_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PaymentRequest>,
) -> Result<Json<PaymentResponse>, HttpError> {
    state
        .payments_service
        .create_direct_payment(payload)
        .await
        .switch()
        .map(Json)
        .map_err(|report| {
            HttpError::from_application_error(
                report.current_context(),
                "Failed to create direct payment",
            )
        })
}

pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(merchant_trans_id): Path<String>,
) -> Result<Json<ApiResponse<Payment>>, HttpError> {
    if merchant_trans_id.trim().is_empty() {
        return Err(HttpError::bad_request("merchantTransId is required", None));
    }

    state
        .payments_service
        .get_payment_status(&merchant_trans_id)
        .await
        .switch()
        .map(|payment| Json(ApiResponse::success(payment)))
        .map_err(|report| {
            HttpError::from_application_error(
                report.current_context(),
                "Failed to get payment status",
            )
        })
}
