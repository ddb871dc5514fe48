use common_utils::consts;
use hyperswitch_masking::{PeekInterface, Secret};

use crate::types::ConnectorParams;

/// Credentials presented to the provider.
///
/// `NoKey` means the gateway runs without a provider account and every operation is
/// answered by the demo responder.
#[derive(Default, Debug, Clone)]
pub enum ConnectorAuthType {
    SignatureKey {
        key_id: Secret<String>,
        sign_key: Secret<String>,
    },
    #[default]
    NoKey,
}

impl ConnectorAuthType {
    /// Live credentials need both the key id and the signing key.
    pub fn has_live_credentials(&self) -> bool {
        match self {
            Self::SignatureKey { key_id, sign_key } => {
                !key_id.peek().is_empty() && !sign_key.peek().is_empty()
            }
            Self::NoKey => false,
        }
    }
}

impl From<&ConnectorParams> for ConnectorAuthType {
    fn from(params: &ConnectorParams) -> Self {
        if params.key_id.peek().is_empty() || params.sign_key.peek().is_empty() {
            Self::NoKey
        } else {
            Self::SignatureKey {
                key_id: params.key_id.clone(),
                sign_key: params.sign_key.clone(),
            }
        }
    }
}

/// Well-formed failure reported by the provider in a successful HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// HTTP status of the exchange that carried the failure.
    pub status_code: u16,
}

impl Default for ErrorResponse {
    fn default() -> Self {
        Self {
            code: consts::NO_ERROR_CODE.to_string(),
            message: consts::NO_ERROR_MESSAGE.to_string(),
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        }
    }
}
