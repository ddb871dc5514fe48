use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::payments::Payment;

/// Asynchronous notification pushed by the provider.
///
/// Only the envelope is checked. The notification's business outcome is never acted on.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotification {
    #[serde(default)]
    pub event_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}

/// Literal body acknowledging receipt of a notification.
pub const WEBHOOK_ACKNOWLEDGEMENT: &str = "SUCCESS";
