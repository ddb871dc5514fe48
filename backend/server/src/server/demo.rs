//! Deterministic stand-ins for provider calls, used while no live credentials are configured.

use common_enums::{PaymentStatus, PaymentType};
use common_utils::{consts, date_time};
use domain_types::connector_types::{
    DirectPaymentData, InteractionCreateData, PaymentStatusData, PaymentsResponseData,
};
use time::{Duration, OffsetDateTime};

pub const INTERACTION_CREATED_MESSAGE: &str = "Demo mode: Payment interaction created successfully";
pub const PAYMENT_COMPLETED_MESSAGE: &str = "Demo mode: Payment completed successfully";

const SESSION_ID_PREFIX: &str = "demo_session_";
const LINK_PAY_BASE_URL: &str = "https://demo.linkpay.com/payment?session=";
const CAPTURED_AMOUNT: f64 = 300.0;
const OTHER_AMOUNT: f64 = 289.97;
const CREATED_BEFORE_QUERY: Duration = Duration::minutes(5);

pub fn create_interaction(request: &InteractionCreateData) -> PaymentsResponseData {
    let session_id = format!(
        "{SESSION_ID_PREFIX}{}",
        common_utils::generate_idempotency_key()
    );
    let link_url = (request.payment_type == PaymentType::LinkPay)
        .then(|| format!("{LINK_PAY_BASE_URL}{session_id}"));

    PaymentsResponseData {
        success: true,
        session_id: Some(session_id),
        link_url,
        merchant_trans_id: request.merchant_order_id.clone(),
        status: PaymentStatus::Pending,
        message: INTERACTION_CREATED_MESSAGE.to_string(),
        connector_metadata: None,
        next_action: None,
    }
}

pub fn create_direct_payment(request: &DirectPaymentData) -> PaymentsResponseData {
    PaymentsResponseData {
        success: true,
        merchant_trans_id: request.merchant_trans_id.clone(),
        status: PaymentStatus::Captured,
        message: PAYMENT_COMPLETED_MESSAGE.to_string(),
        ..Default::default()
    }
}

/// Status chosen by the byte length of `id` modulo 3 over captured, pending, failed, so a
/// given id always reports the same status.
pub fn status_for(id: &str) -> PaymentStatus {
    match id.len() % 3 {
        0 => PaymentStatus::Captured,
        1 => PaymentStatus::Pending,
        _ => PaymentStatus::Failed,
    }
}

/// Answer for both status queries.
pub fn payment_status(id: &str, now: OffsetDateTime) -> PaymentStatusData {
    let status = status_for(id);
    let amount = if status == PaymentStatus::Captured {
        CAPTURED_AMOUNT
    } else {
        OTHER_AMOUNT
    };

    PaymentStatusData {
        merchant_trans_id: id.to_string(),
        status,
        amount,
        currency: consts::DEFAULT_CURRENCY.to_string(),
        created_at: now - CREATED_BEFORE_QUERY,
    }
}

pub fn payment_status_now(id: &str) -> PaymentStatusData {
    payment_status(id, date_time::now())
}
