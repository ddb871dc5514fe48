use std::collections::HashMap;

use common_enums::{PaymentStatus, PaymentType};
use common_utils::{errors::CustomResult, ValidationError};
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Payment initiation request sent by the storefront.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in major units of `currency`.
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "merchantTransId")]
    pub merchant_trans_id: String,
    pub payment_type: PaymentType,
    /// Restricts the hosted page to a single payment method when present.
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub return_url: String,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub card_info: Option<CardInfo>,
}

/// Card details for the direct flow. Held only for the lifetime of the request.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub card_number: Secret<String>,
    pub expiry_date: Secret<String>,
    #[serde(default)]
    pub cvv: Secret<String>,
    pub holder_name: Secret<String>,
}

impl PaymentRequest {
    /// Checks shared by every creation flow.
    pub fn validate(&self) -> CustomResult<(), ValidationError> {
        if self.merchant_trans_id.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field_name: "merchantTransId".to_string(),
            }
            .into());
        }

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ValidationError::IncorrectValueProvided {
                field_name: "amount",
                message: "must be a non-negative number".to_string(),
            }
            .into());
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::IncorrectValueProvided {
                field_name: "currency",
                message: format!("`{}` is not a three letter currency code", self.currency),
            }
            .into());
        }

        Ok(())
    }

    /// Hosted interactions collect card data on the provider's page, never here.
    pub fn validate_for_interaction(&self) -> CustomResult<(), ValidationError> {
        self.validate()?;
        if self.card_info.is_some() {
            return Err(ValidationError::InvalidValue {
                message: "cardInfo must not be sent for hosted payment interactions".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Outcome of a payment creation call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(rename = "merchantTransId")]
    pub merchant_trans_id: String,
    pub status: PaymentStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionInfo>,
}

/// Extra client-side step demanded by the provider, such as a 3-D Secure challenge.
///
/// `data` is keyed by the provider's blob names (`threeDSData`, `redirectData`, ...) and is
/// interpreted by the caller according to `action_type`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionInfo {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

/// Current state of a transaction, rebuilt on every status query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "merchantTransId", default)]
    pub merchant_trans_id: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(with = "time::serde::rfc3339", default = "unix_epoch")]
    pub created_at: OffsetDateTime,
}

fn unix_epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

/// `{"success": true, "data": ...}` envelope used by the read endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
