use api_models::{ApiResponse, Payment};
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ReportSwitchExt,
    http::{error::HttpError, state::AppState},
};

pub async fn get_interaction_status(
    State(state): State<AppState>,
    Path(merchant_order_id): Path<String>,
) -> Result<Json<ApiResponse<Payment>>, HttpError> {
    if merchant_order_id.trim().is_empty() {
        return Err(HttpError::bad_request("merchantOrderId is required", None));
    }

    state
        .payments_service
        .get_interaction_status(&merchant_order_id)
        .await
        .switch()
        .map(|payment| Json(ApiResponse::success(payment)))
        .map_err(|report| {
            HttpError::from_application_error(
                report.current_context(),
                "Failed to get interaction status",
            )
        })
}
