use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_types::errors::ApplicationErrorResponse;
use serde::Serialize;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request parameters";

/// Failure answered to the caller as `{"success": false, "message": .., "error": ..}`.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            error,
            details: None,
        }
    }

    /// Map an application error, using `failure_message` for server side failures.
    ///
    /// Bad requests always answer with the generic invalid-request message and carry the
    /// validation detail in `error`.
    pub fn from_application_error(
        error: &ApplicationErrorResponse,
        failure_message: &str,
    ) -> Self {
        let api_error = error.get_api_error();
        match error {
            ApplicationErrorResponse::BadRequest(_) => Self::bad_request(
                INVALID_REQUEST_MESSAGE,
                Some(api_error.error_message.clone()),
            ),
            ApplicationErrorResponse::InternalServerError(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: failure_message.to_string(),
                error: Some(api_error.error_message.clone()),
                details: api_error.error_object.clone(),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            message: self.message,
            error: self.error,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
