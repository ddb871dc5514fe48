use api_models::webhooks::{WebhookNotification, WEBHOOK_ACKNOWLEDGEMENT};
use axum::{extract::rejection::JsonRejection, Json};

use crate::http::error::HttpError;

/// Acknowledge a provider notification.
///
/// Any body that parses is acknowledged with the literal `SUCCESS`; the notification is
/// logged and otherwise ignored.
pub async fn payment_webhook(
    payload: Result<Json<WebhookNotification>, JsonRejection>,
) -> Result<&'static str, HttpError> {
    let Json(notification) = payload.map_err(|rejection| {
        tracing::warn!(%rejection, "unparsable webhook notification");
        HttpError::bad_request("Invalid webhook data", None)
    })?;

    tracing::info!(
        event_code = %notification.event_code,
        merchant_trans_id = ?notification.payment.as_ref().map(|payment| &payment.merchant_trans_id),
        "received payment webhook"
    );

    Ok(WEBHOOK_ACKNOWLEDGEMENT)
}
