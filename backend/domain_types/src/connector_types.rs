use std::collections::HashMap;

use common_enums::{PaymentStatus, PaymentType};
use time::OffsetDateTime;

use crate::{payment_method_data::Card, types::Connectors};

/// Data shared by every payment flow of a single call.
#[derive(Debug, Clone)]
pub struct PaymentFlowData {
    pub connectors: Connectors,
}

impl PaymentFlowData {
    pub fn new(connectors: Connectors) -> Self {
        Self { connectors }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionCreateData {
    pub merchant_order_id: String,
    pub amount: f64,
    pub currency: String,
    pub payment_type: PaymentType,
    pub payment_method: Option<String>,
    pub return_url: String,
    pub webhook_url: String,
}

#[derive(Debug, Clone)]
pub struct DirectPaymentData {
    pub merchant_trans_id: String,
    pub amount: f64,
    pub currency: String,
    pub card: Option<Card>,
    pub return_url: String,
    pub webhook_url: String,
}

#[derive(Debug, Clone)]
pub struct PaymentsSyncData {
    pub merchant_trans_id: String,
}

#[derive(Debug, Clone)]
pub struct InteractionSyncData {
    pub merchant_order_id: String,
}

/// Normalized outcome of a creation flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentsResponseData {
    pub success: bool,
    pub session_id: Option<String>,
    pub link_url: Option<String>,
    pub merchant_trans_id: String,
    pub status: PaymentStatus,
    pub message: String,
    pub connector_metadata: Option<HashMap<String, serde_json::Value>>,
    pub next_action: Option<NextActionData>,
}

/// Client step the provider asks for before the payment can complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NextActionData {
    pub action_type: String,
    pub data: HashMap<String, serde_json::Value>,
}

/// Normalized answer of a status query.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatusData {
    pub merchant_trans_id: String,
    pub status: PaymentStatus,
    pub amount: f64,
    pub currency: String,
    pub created_at: OffsetDateTime,
}

impl From<api_models::PaymentRequest> for InteractionCreateData {
    fn from(request: api_models::PaymentRequest) -> Self {
        Self {
            merchant_order_id: request.merchant_trans_id,
            amount: request.amount,
            currency: request.currency,
            payment_type: request.payment_type,
            payment_method: request
                .payment_method
                .filter(|method| !method.trim().is_empty()),
            return_url: request.return_url,
            webhook_url: request.webhook_url,
        }
    }
}

impl From<api_models::PaymentRequest> for DirectPaymentData {
    fn from(request: api_models::PaymentRequest) -> Self {
        Self {
            merchant_trans_id: request.merchant_trans_id,
            amount: request.amount,
            currency: request.currency,
            card: request.card_info.map(Card::from),
            return_url: request.return_url,
            webhook_url: request.webhook_url,
        }
    }
}

impl From<PaymentsResponseData> for api_models::PaymentResponse {
    fn from(response: PaymentsResponseData) -> Self {
        Self {
            success: response.success,
            session_id: response.session_id,
            link_url: response.link_url,
            merchant_trans_id: response.merchant_trans_id,
            status: response.status,
            message: response.message,
            data: response.connector_metadata,
            action: response.next_action.map(|action| api_models::ActionInfo {
                action_type: action.action_type,
                data: action.data,
            }),
        }
    }
}

impl From<PaymentStatusData> for api_models::Payment {
    fn from(status: PaymentStatusData) -> Self {
        Self {
            merchant_trans_id: status.merchant_trans_id,
            status: status.status,
            amount: status.amount,
            currency: status.currency,
            created_at: status.created_at,
        }
    }
}
