pub use common_utils::errors::{CustomResult, ParsingError, ValidationError};


#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ApiClientError {
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Client construction failed")]
    ClientConstructionFailed,
    #[error("URL encoding of request payload failed")]
    UrlEncodingFailed,
    #[error("Failed to send request to connector {0}")]
    RequestNotSent(String),
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
    #[error("Unexpected state reached/Invariants conflicted")]
    UnexpectedServerResponse,
}

#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ConnectorError {
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Card information is required for direct payment")]
    MissingCardInfo,
    #[error("Invalid request data: {message}")]
    InvalidRequestData { message: String },
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to obtain integration url")]
    FailedToObtainIntegrationUrl,
    #[error("Failed to send request to the provider")]
    TransportFailed,
    #[error("Provider request failed with status {status_code}: {body}")]
    ProviderHttpError { status_code: u16, body: String },
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Provider error: {code} - {message}")]
    ProviderBusinessError { code: String, message: String },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ApiError {
    pub sub_code: String,
    pub error_identifier: u16,
    pub error_message: String,
    pub error_object: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApplicationErrorResponse {
    #[error("Bad request: {}", .0.error_message)]
    BadRequest(ApiError),
    #[error("Internal server error: {}", .0.error_message)]
    InternalServerError(ApiError),
}

impl ApplicationErrorResponse {
    pub fn get_api_error(&self) -> &ApiError {
        match self {
            Self::BadRequest(error) | Self::InternalServerError(error) => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_render_code_and_message() {
        let error = ConnectorError::ProviderBusinessError {
            code: "B0012".to_string(),
            message: "Card declined".to_string(),
        };
        assert_eq!(error.to_string(), "Provider error: B0012 - Card declined");
    }
}
