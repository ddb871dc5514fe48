use domain_types::errors::{ApiError, ApplicationErrorResponse, ConnectorError, ValidationError};

/// Allows [error_stack::Report] to change between error contexts
/// using the dependent [ErrorSwitch] trait to define relations & mappings between traits
pub trait ReportSwitchExt<T, U> {
    /// Switch to the intended report by calling switch
    /// requires error switch to be already implemented on the error type
    fn switch(self) -> Result<T, error_stack::Report<U>>;
}

impl<T, U, V> ReportSwitchExt<T, U> for Result<T, error_stack::Report<V>>
where
    V: ErrorSwitch<U> + error_stack::Context,
    U: error_stack::Context,
{
    #[track_caller]
    fn switch(self) -> Result<T, error_stack::Report<U>> {
        match self {
            Ok(i) => Ok(i),
            Err(er) => {
                let new_c = er.current_context().switch();
                Err(er.change_context(new_c))
            }
        }
    }
}

/// Allow [error_stack::Report] to convert between error types
/// This auto-implements [ReportSwitchExt] for the corresponding errors
pub trait ErrorSwitch<T> {
    /// Get the next error type that the source error can be escalated into
    /// This does not consume the source error since we need to keep it in context
    fn switch(&self) -> T;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn bad_request(sub_code: &str, error_message: String) -> ApplicationErrorResponse {
    ApplicationErrorResponse::BadRequest(ApiError {
        sub_code: sub_code.to_string(),
        error_identifier: 400,
        error_message,
        error_object: None,
    })
}

fn internal_server_error(
    sub_code: &str,
    error_message: String,
    error_object: Option<serde_json::Value>,
) -> ApplicationErrorResponse {
    ApplicationErrorResponse::InternalServerError(ApiError {
        sub_code: sub_code.to_string(),
        error_identifier: 500,
        error_message,
        error_object,
    })
}

impl ErrorSwitch<ApplicationErrorResponse> for ConnectorError {
    fn switch(&self) -> ApplicationErrorResponse {
        match self {
            Self::MissingCardInfo => bad_request("MISSING_CARD_INFO", self.to_string()),
            Self::InvalidRequestData { .. } => bad_request("BAD_REQUEST", self.to_string()),
            Self::TransportFailed => {
                internal_server_error("TRANSPORT_ERROR", self.to_string(), None)
            }
            Self::ProviderHttpError { status_code, body } => internal_server_error(
                "PROVIDER_HTTP_ERROR",
                self.to_string(),
                Some(serde_json::json!({ "status": status_code, "body": body })),
            ),
            Self::ResponseDeserializationFailed => {
                internal_server_error("PROVIDER_PARSE_ERROR", self.to_string(), None)
            }
            Self::ProviderBusinessError { code, message } => internal_server_error(
                "PROVIDER_BUSINESS_ERROR",
                self.to_string(),
                Some(serde_json::json!({ "code": code, "message": message })),
            ),
            Self::FailedToObtainAuthType
            | Self::RequestEncodingFailed
            | Self::FailedToObtainIntegrationUrl => {
                internal_server_error("INTERNAL_SERVER_ERROR", self.to_string(), None)
            }
        }
    }
}

impl ErrorSwitch<ApplicationErrorResponse> for ValidationError {
    fn switch(&self) -> ApplicationErrorResponse {
        bad_request("INVALID_REQUEST", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_mistakes_are_bad_requests() {
        assert!(matches!(
            ConnectorError::MissingCardInfo.switch(),
            ApplicationErrorResponse::BadRequest(_)
        ));
        let validation = ValidationError::MissingRequiredField {
            field_name: "merchantTransId".to_string(),
        };
        let switched: ApplicationErrorResponse = validation.switch();
        assert_eq!(switched.get_api_error().error_identifier, 400);
    }

    #[test]
    fn provider_failures_are_internal_errors_with_detail() {
        let switched = ConnectorError::ProviderHttpError {
            status_code: 503,
            body: "maintenance".to_string(),
        }
        .switch();
        let api_error = switched.get_api_error();
        assert_eq!(api_error.error_identifier, 500);
        assert_eq!(
            api_error.error_object,
            Some(serde_json::json!({ "status": 503, "body": "maintenance" }))
        );

        let switched = ConnectorError::ProviderBusinessError {
            code: "B0012".to_string(),
            message: "Card declined".to_string(),
        }
        .switch();
        assert_eq!(
            switched.get_api_error().error_message,
            "Provider error: B0012 - Card declined"
        );
    }

    #[test]
    fn report_switch_keeps_the_original_context() {
        let result: Result<(), error_stack::Report<ConnectorError>> =
            Err(error_stack::report!(ConnectorError::TransportFailed));
        let switched = result.switch().unwrap_err();
        assert!(matches!(
            switched.current_context(),
            ApplicationErrorResponse::InternalServerError(_)
        ));
        assert!(switched.contains::<ConnectorError>());
    }
}
