use std::collections::HashMap;

use common_enums::PaymentStatus;
use common_utils::{consts, date_time, types::StringWholeUnit};
use domain_types::{
    connector_flow::{CreateInteraction, DirectPayment, InteractionSync, PSync},
    connector_types::{
        DirectPaymentData, InteractionCreateData, InteractionSyncData, NextActionData,
        PaymentFlowData, PaymentStatusData, PaymentsResponseData, PaymentsSyncData,
    },
    errors,
    router_data::{ConnectorAuthType, ErrorResponse},
    router_data_v2::RouterDataV2,
};
use error_stack::ResultExt;
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::ResponseRouterData;

/// Result code of a successfully created interaction.
const INTERACTION_SUCCESS_CODE: &str = "S0000";
/// Result category of a well-formed provider error.
const ERROR_CATEGORY: &str = "E";
/// Result code reported when the queried order does not exist.
const ORDER_NOT_FOUND_CODE: &str = "C0004";
/// Capture immediately after authorization.
const IMMEDIATE_CAPTURE_HOURS: &str = "0";

pub const SIGN_TYPE_KEY_BASED: &str = "Key-based";

pub struct EvonetAuthType {
    pub key_id: Secret<String>,
    pub sign_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for EvonetAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::SignatureKey { key_id, sign_key } => Ok(Self {
                key_id: key_id.to_owned(),
                sign_key: sign_key.to_owned(),
            }),
            ConnectorAuthType::NoKey => Err(errors::ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

/// Collapse the provider's status vocabulary into [`PaymentStatus`].
///
/// Matching ignores case. Values outside the vocabulary are kept verbatim; `unknown` is
/// never produced here.
pub fn normalize_status(status: &str) -> PaymentStatus {
    match status.to_lowercase().as_str() {
        "success" | "completed" | "paid" | "captured" => PaymentStatus::Captured,
        "pending" | "processing" | "authorized" => PaymentStatus::Pending,
        "failed" | "declined" | "rejected" | "error" => PaymentStatus::Failed,
        "cancelled" | "canceled" | "voided" => PaymentStatus::Cancelled,
        _ => {
            tracing::warn!(status, "unmapped provider payment status");
            PaymentStatus::Unrecognized(status.to_string())
        }
    }
}

// ===== REQUESTS =====

#[derive(Debug, Serialize)]
pub struct EvonetTransAmount {
    pub currency: String,
    pub value: StringWholeUnit,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvonetMerchantOrderInfo {
    #[serde(rename = "merchantOrderID")]
    pub merchant_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_payment_method: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvonetInteractionRequest {
    pub merchant_order_info: EvonetMerchantOrderInfo,
    pub trans_amount: EvonetTransAmount,
    #[serde(rename = "returnURL")]
    pub return_url: String,
    pub webhook: String,
}

impl TryFrom<&RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>>
    for EvonetInteractionRequest
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<
            CreateInteraction,
            PaymentFlowData,
            InteractionCreateData,
            PaymentsResponseData,
        >,
    ) -> Result<Self, Self::Error> {
        let request = &item.request;
        Ok(Self {
            merchant_order_info: EvonetMerchantOrderInfo {
                merchant_order_id: request.merchant_order_id.clone(),
                enabled_payment_method: request
                    .payment_method
                    .as_ref()
                    .map(|method| vec![method.clone()]),
            },
            trans_amount: EvonetTransAmount {
                currency: request.currency.clone(),
                value: StringWholeUnit::from_major_unit(request.amount),
            },
            return_url: request.return_url.clone(),
            webhook: request.webhook_url.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvonetMerchantTransInfo {
    #[serde(rename = "merchantTransID")]
    pub merchant_trans_id: String,
    pub merchant_trans_time: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvonetPaymentMethodType {
    Card,
}

/// Card as sent to the provider. The CVV is not part of the payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvonetCardInfo {
    pub card_number: Secret<String>,
    pub expiry_date: Secret<String>,
    pub holder_name: Secret<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvonetCard {
    pub card_info: EvonetCardInfo,
}

#[derive(Debug, Serialize)]
pub struct EvonetPaymentMethod {
    #[serde(rename = "type")]
    pub method_type: EvonetPaymentMethodType,
    pub card: EvonetCard,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvonetPaymentRequest {
    pub merchant_trans_info: EvonetMerchantTransInfo,
    pub trans_amount: EvonetTransAmount,
    pub payment_method: EvonetPaymentMethod,
    pub capture_after_hours: String,
    pub allow_authentication: bool,
    #[serde(rename = "returnURL")]
    pub return_url: String,
    pub webhook: String,
}

impl EvonetPaymentRequest {
    /// Build the direct payment payload with `merchantTransTime` taken from `now`.
    pub fn try_from_router_data(
        item: &RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
        now: OffsetDateTime,
    ) -> Result<Self, error_stack::Report<errors::ConnectorError>> {
        let request = &item.request;
        let card = request
            .card
            .as_ref()
            .ok_or(errors::ConnectorError::MissingCardInfo)?;

        let merchant_trans_time = date_time::provider_timestamp(now)
            .change_context(errors::ConnectorError::RequestEncodingFailed)
            .attach_printable("failed to format merchantTransTime")?;

        Ok(Self {
            merchant_trans_info: EvonetMerchantTransInfo {
                merchant_trans_id: request.merchant_trans_id.clone(),
                merchant_trans_time,
            },
            trans_amount: EvonetTransAmount {
                currency: request.currency.clone(),
                value: StringWholeUnit::from_major_unit(request.amount),
            },
            payment_method: EvonetPaymentMethod {
                method_type: EvonetPaymentMethodType::Card,
                card: EvonetCard {
                    card_info: EvonetCardInfo {
                        card_number: card.card_number.clone(),
                        expiry_date: card.card_exp.clone(),
                        holder_name: card.card_holder_name.clone(),
                    },
                },
            },
            capture_after_hours: IMMEDIATE_CAPTURE_HOURS.to_string(),
            allow_authentication: true,
            return_url: request.return_url.clone(),
            webhook: request.webhook_url.clone(),
        })
    }
}

impl TryFrom<&RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>>
    for EvonetPaymentRequest
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
    ) -> Result<Self, Self::Error> {
        Self::try_from_router_data(item, date_time::now())
    }
}

// ===== RESPONSES =====

/// Reads an explicit `null` the same way as a missing field: as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EvonetResult {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

impl EvonetResult {
    fn is_error(&self) -> bool {
        self.category == ERROR_CATEGORY
    }

    fn is_order_not_found(&self) -> bool {
        self.is_error() && self.code == ORDER_NOT_FOUND_CODE
    }

    fn to_error_response(&self, http_code: u16) -> ErrorResponse {
        ErrorResponse {
            code: self.code.clone(),
            message: self.message.clone(),
            status_code: http_code,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetInteractionResponse {
    #[serde(rename = "sessionID", deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(rename = "merchantOrderInfo")]
    pub merchant_order_info: Option<serde_json::Value>,
    #[serde(rename = "linkUrl", deserialize_with = "null_as_default")]
    pub link_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub result: EvonetResult,
}

impl
    TryFrom<
        ResponseRouterData<
            EvonetInteractionResponse,
            RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
        >,
    > for RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<
            EvonetInteractionResponse,
            RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
        >,
    ) -> Result<Self, Self::Error> {
        let response = item.response;
        let merchant_trans_id = item.router_data.request.merchant_order_id.clone();

        Ok(Self {
            response: Ok(PaymentsResponseData {
                success: response.result.code == INTERACTION_SUCCESS_CODE,
                session_id: Some(response.session_id).filter(|id| !id.is_empty()),
                link_url: Some(response.link_url).filter(|url| !url.is_empty()),
                merchant_trans_id,
                // A new interaction always waits for the shopper.
                status: PaymentStatus::Pending,
                message: response.result.message,
                connector_metadata: response
                    .merchant_order_info
                    .map(|info| HashMap::from([("merchantOrderInfo".to_string(), info)])),
                next_action: None,
            }),
            ..item.router_data
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetMerchantTransRef {
    #[serde(rename = "merchantTransID", deserialize_with = "null_as_default")]
    pub merchant_trans_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvonetPaymentInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_trans_info: EvonetMerchantTransRef,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetAction {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub action_type: String,
    #[serde(rename = "threeDSData")]
    pub three_ds_data: Option<serde_json::Value>,
    #[serde(rename = "redirectData")]
    pub redirect_data: Option<serde_json::Value>,
    #[serde(flatten)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

impl From<EvonetAction> for NextActionData {
    fn from(action: EvonetAction) -> Self {
        let mut data = action.additional_data;
        if let Some(three_ds_data) = action.three_ds_data {
            data.insert("threeDSData".to_string(), three_ds_data);
        }
        if let Some(redirect_data) = action.redirect_data {
            data.insert("redirectData".to_string(), redirect_data);
        }
        Self {
            action_type: action.action_type,
            data,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetPaymentResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub payment: EvonetPaymentInfo,
    pub action: Option<EvonetAction>,
    #[serde(deserialize_with = "null_as_default")]
    pub result: EvonetResult,
}

impl
    TryFrom<
        ResponseRouterData<
            EvonetPaymentResponse,
            RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
        >,
    > for RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<
            EvonetPaymentResponse,
            RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
        >,
    ) -> Result<Self, Self::Error> {
        let response = item.response;
        let echoed_id = response.payment.merchant_trans_info.merchant_trans_id;
        let merchant_trans_id = if echoed_id.is_empty() {
            item.router_data.request.merchant_trans_id.clone()
        } else {
            echoed_id
        };

        Ok(Self {
            response: Ok(PaymentsResponseData {
                // Any "S" prefixed code is a success; an empty code is not.
                success: response.result.code.starts_with('S'),
                session_id: None,
                link_url: None,
                merchant_trans_id,
                status: normalize_status(&response.payment.status),
                message: response.result.message,
                connector_metadata: None,
                next_action: response.action.map(NextActionData::from),
            }),
            ..item.router_data
        })
    }
}

/// Status reported for an order the provider has no record of.
fn order_not_found(merchant_trans_id: &str) -> PaymentStatusData {
    PaymentStatusData {
        merchant_trans_id: merchant_trans_id.to_string(),
        status: PaymentStatus::Unknown,
        amount: 0.0,
        currency: consts::DEFAULT_CURRENCY.to_string(),
        created_at: date_time::now(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvonetSyncPayment {
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_trans_info: EvonetMerchantTransRef,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub amount: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetPaymentSyncResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result: EvonetResult,
    #[serde(deserialize_with = "null_as_default")]
    pub payment: EvonetSyncPayment,
}

impl
    TryFrom<
        ResponseRouterData<
            EvonetPaymentSyncResponse,
            RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>,
        >,
    > for RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<
            EvonetPaymentSyncResponse,
            RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>,
        >,
    ) -> Result<Self, Self::Error> {
        let response = item.response;
        let result = &response.result;

        let status = if result.is_order_not_found() {
            Ok(order_not_found(&item.router_data.request.merchant_trans_id))
        } else if result.is_error() {
            Err(result.to_error_response(item.http_code))
        } else {
            Ok(PaymentStatusData {
                merchant_trans_id: response.payment.merchant_trans_info.merchant_trans_id,
                status: normalize_status(&response.payment.status),
                amount: response
                    .payment
                    .amount
                    .filter(|amount| amount.is_finite())
                    .unwrap_or_default(),
                currency: response.payment.currency,
                // The provider does not report when the payment was created.
                created_at: date_time::now(),
            })
        };

        Ok(Self {
            response: status,
            ..item.router_data
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetOrderInfo {
    #[serde(rename = "merchantOrderID", deserialize_with = "null_as_default")]
    pub merchant_order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvonetStringAmount {
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: StringWholeUnit,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvonetTransactionInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub trans_amount: EvonetStringAmount,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvonetInteractionSyncResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result: EvonetResult,
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_order_info: EvonetOrderInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_info: EvonetTransactionInfo,
}

impl EvonetInteractionSyncResponse {
    /// The transaction level status is the more accurate one when the provider sends it.
    fn effective_status(&self) -> &str {
        if self.transaction_info.status.is_empty() {
            &self.merchant_order_info.status
        } else {
            &self.transaction_info.status
        }
    }
}

impl
    TryFrom<
        ResponseRouterData<
            EvonetInteractionSyncResponse,
            RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>,
        >,
    > for RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<
            EvonetInteractionSyncResponse,
            RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>,
        >,
    ) -> Result<Self, Self::Error> {
        let response = item.response;
        let result = &response.result;

        let status = if result.is_order_not_found() {
            Ok(order_not_found(&item.router_data.request.merchant_order_id))
        } else if result.is_error() {
            Err(result.to_error_response(item.http_code))
        } else {
            Ok(PaymentStatusData {
                status: normalize_status(response.effective_status()),
                amount: response.transaction_info.trans_amount.value.to_major_unit_lossy(),
                merchant_trans_id: response.merchant_order_info.merchant_order_id,
                currency: response.transaction_info.trans_amount.currency,
                created_at: date_time::now(),
            })
        };

        Ok(Self {
            response: status,
            ..item.router_data
        })
    }
}

#[cfg(test)]
mod tests {
    use common_enums::PaymentType;
    use domain_types::{payment_method_data::Card, types::Connectors};
    use hyperswitch_masking::PeekInterface;
    use time::macros::datetime;

    use super::*;

    fn router_data<F, Req, Resp>(request: Req) -> RouterDataV2<F, PaymentFlowData, Req, Resp> {
        RouterDataV2::new(
            PaymentFlowData::new(Connectors::default()),
            ConnectorAuthType::NoKey,
            request,
        )
    }

    fn interaction_data(payment_method: Option<&str>) -> InteractionCreateData {
        InteractionCreateData {
            merchant_order_id: "order-1".to_string(),
            amount: 1000.0,
            currency: "USD".to_string(),
            payment_type: PaymentType::LinkPay,
            payment_method: payment_method.map(str::to_string),
            return_url: "https://shop.test/return".to_string(),
            webhook_url: "https://shop.test/hook".to_string(),
        }
    }

    fn direct_data(card: Option<Card>) -> DirectPaymentData {
        DirectPaymentData {
            merchant_trans_id: "m2".to_string(),
            amount: 289.97,
            currency: "USD".to_string(),
            card,
            return_url: "https://shop.test/return".to_string(),
            webhook_url: "https://shop.test/hook".to_string(),
        }
    }

    fn card() -> Card {
        Card {
            card_number: Secret::new("4111111111111111".to_string()),
            card_exp: Secret::new("12/30".to_string()),
            card_cvc: Secret::new("123".to_string()),
            card_holder_name: Secret::new("Jane Roe".to_string()),
        }
    }

    #[test]
    fn normalizes_provider_vocabulary() {
        for raw in ["success", "COMPLETED", "Paid", "captured"] {
            assert_eq!(normalize_status(raw), PaymentStatus::Captured, "{raw}");
        }
        for raw in ["pending", "Processing", "AUTHORIZED"] {
            assert_eq!(normalize_status(raw), PaymentStatus::Pending, "{raw}");
        }
        for raw in ["failed", "Declined", "rejected", "ERROR"] {
            assert_eq!(normalize_status(raw), PaymentStatus::Failed, "{raw}");
        }
        for raw in ["cancelled", "Canceled", "voided"] {
            assert_eq!(normalize_status(raw), PaymentStatus::Cancelled, "{raw}");
        }
    }

    #[test]
    fn unmapped_status_passes_through_unchanged() {
        assert_eq!(
            normalize_status("Refunded"),
            PaymentStatus::Unrecognized("Refunded".to_string())
        );
        assert_eq!(
            normalize_status("unknown"),
            PaymentStatus::Unrecognized("unknown".to_string())
        );
        assert_eq!(normalize_status(""), PaymentStatus::Unrecognized(String::new()));
    }

    #[test]
    fn interaction_request_uses_whole_unit_amount() {
        let data = router_data::<CreateInteraction, _, PaymentsResponseData>(interaction_data(None));
        let body = serde_json::to_value(EvonetInteractionRequest::try_from(&data).unwrap()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "merchantOrderInfo": { "merchantOrderID": "order-1" },
                "transAmount": { "currency": "USD", "value": "1000" },
                "returnURL": "https://shop.test/return",
                "webhook": "https://shop.test/hook"
            })
        );
    }

    #[test]
    fn interaction_request_lists_payment_method_hint() {
        let data =
            router_data::<CreateInteraction, _, PaymentsResponseData>(interaction_data(Some("alipay")));
        let body = serde_json::to_value(EvonetInteractionRequest::try_from(&data).unwrap()).unwrap();
        assert_eq!(
            body["merchantOrderInfo"]["enabledPaymentMethod"],
            serde_json::json!(["alipay"])
        );
    }

    #[test]
    fn direct_request_requires_card() {
        let data = router_data::<DirectPayment, _, PaymentsResponseData>(direct_data(None));
        let error = EvonetPaymentRequest::try_from(&data).unwrap_err();
        assert_eq!(
            error.current_context(),
            &errors::ConnectorError::MissingCardInfo
        );
    }

    #[test]
    fn direct_request_omits_cvv() {
        let data = router_data::<DirectPayment, _, PaymentsResponseData>(direct_data(Some(card())));
        let request =
            EvonetPaymentRequest::try_from_router_data(&data, datetime!(2024-03-01 23:30:05 UTC))
                .unwrap();

        assert_eq!(request.payment_method.card.card_info.card_number.peek(), "4111111111111111");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["merchantTransInfo"]["merchantTransID"], "m2");
        assert_eq!(
            body["merchantTransInfo"]["merchantTransTime"],
            "2024-03-02T07:30:05+08:00"
        );
        assert_eq!(body["transAmount"]["value"], "290");
        assert_eq!(body["paymentMethod"]["type"], "card");
        assert_eq!(body["captureAfterHours"], "0");
        assert_eq!(body["allowAuthentication"], true);
        let card_info = &body["paymentMethod"]["card"]["cardInfo"];
        assert_eq!(card_info["holderName"], "Jane Roe");
        assert!(card_info.get("cvv").is_none());
        assert!(!body.to_string().contains("123\""));
    }

    #[test]
    fn interaction_response_success_needs_exact_code() {
        let parse = |code: &str| {
            let response: EvonetInteractionResponse = serde_json::from_value(serde_json::json!({
                "sessionID": "sess_1",
                "linkUrl": "https://pay.provider.test/sess_1",
                "merchantOrderInfo": { "merchantOrderID": "order-1" },
                "result": { "code": code, "message": "done" }
            }))
            .unwrap();
            RouterDataV2::try_from(ResponseRouterData {
                response,
                router_data: router_data::<CreateInteraction, _, PaymentsResponseData>(
                    interaction_data(None),
                ),
                http_code: 200,
            })
            .unwrap()
            .response
            .unwrap()
        };

        let ok = parse("S0000");
        assert!(ok.success);
        assert_eq!(ok.session_id.as_deref(), Some("sess_1"));
        assert_eq!(ok.link_url.as_deref(), Some("https://pay.provider.test/sess_1"));
        assert_eq!(ok.merchant_trans_id, "order-1");
        assert_eq!(ok.status, PaymentStatus::Pending);
        assert!(ok.connector_metadata.unwrap().contains_key("merchantOrderInfo"));

        let not_ok = parse("S0001");
        assert!(!not_ok.success);
        assert_eq!(not_ok.status, PaymentStatus::Pending);
    }

    fn parse_direct(body: serde_json::Value) -> PaymentsResponseData {
        let response: EvonetPaymentResponse = serde_json::from_value(body).unwrap();
        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: router_data::<DirectPayment, _, PaymentsResponseData>(direct_data(Some(card()))),
            http_code: 200,
        })
        .unwrap()
        .response
        .unwrap()
    }

    #[test]
    fn direct_response_success_uses_code_prefix() {
        let response = parse_direct(serde_json::json!({
            "payment": { "merchantTransInfo": { "merchantTransID": "m2" }, "status": "Captured" },
            "result": { "code": "S0003", "message": "Approved" }
        }));
        assert!(response.success);
        assert_eq!(response.status, PaymentStatus::Captured);
        assert_eq!(response.message, "Approved");
        assert!(response.next_action.is_none());

        let declined = parse_direct(serde_json::json!({
            "payment": { "merchantTransInfo": { "merchantTransID": "m2" }, "status": "Declined" },
            "result": { "code": "B0012", "message": "Declined" }
        }));
        assert!(!declined.success);
        assert_eq!(declined.status, PaymentStatus::Failed);
    }

    #[test]
    fn direct_response_with_empty_code_is_not_a_success() {
        let response = parse_direct(serde_json::json!({ "result": { "code": "" } }));
        assert!(!response.success);
        assert_eq!(response.merchant_trans_id, "m2");
    }

    #[test]
    fn direct_response_carries_three_ds_action() {
        let response = parse_direct(serde_json::json!({
            "payment": { "merchantTransInfo": { "merchantTransID": "m2" }, "status": "pending" },
            "action": {
                "type": "threeDSRedirect",
                "threeDSData": { "url": "https://acs.test/challenge" },
                "redirectData": { "method": "GET" }
            },
            "result": { "code": "S0000", "message": "Authentication required" }
        }));

        let action = response.next_action.unwrap();
        assert_eq!(action.action_type, "threeDSRedirect");
        assert_eq!(action.data["threeDSData"]["url"], "https://acs.test/challenge");
        assert_eq!(action.data["redirectData"]["method"], "GET");
    }

    fn payment_sync(
        body: serde_json::Value,
    ) -> Result<PaymentStatusData, ErrorResponse> {
        let response: EvonetPaymentSyncResponse = serde_json::from_value(body).unwrap();
        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: router_data::<PSync, _, PaymentStatusData>(PaymentsSyncData {
                merchant_trans_id: "m9".to_string(),
            }),
            http_code: 200,
        })
        .unwrap()
        .response
    }

    fn interaction_sync(
        body: serde_json::Value,
    ) -> Result<PaymentStatusData, ErrorResponse> {
        let response: EvonetInteractionSyncResponse = serde_json::from_value(body).unwrap();
        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: router_data::<InteractionSync, _, PaymentStatusData>(InteractionSyncData {
                merchant_order_id: "order-9".to_string(),
            }),
            http_code: 200,
        })
        .unwrap()
        .response
    }

    #[test]
    fn payment_sync_maps_status_and_amount() {
        let payment = payment_sync(serde_json::json!({
            "result": { "code": "S0000", "message": "Success", "category": "S" },
            "payment": {
                "merchantTransInfo": { "merchantTransID": "m9" },
                "status": "Paid",
                "amount": 1000,
                "currency": "KRW"
            }
        }))
        .unwrap();

        assert_eq!(payment.merchant_trans_id, "m9");
        assert_eq!(payment.status, PaymentStatus::Captured);
        assert_eq!(payment.amount, 1000.0);
        assert_eq!(payment.currency, "KRW");
    }

    #[test]
    fn order_not_found_yields_unknown_for_both_queries() {
        let not_found = serde_json::json!({
            "result": { "code": "C0004", "message": "Order not found", "category": "E" }
        });

        let payment = payment_sync(not_found.clone()).unwrap();
        assert_eq!(payment.status, PaymentStatus::Unknown);
        assert_eq!(payment.merchant_trans_id, "m9");
        assert_eq!(payment.amount, 0.0);
        assert_eq!(payment.currency, "USD");

        let interaction = interaction_sync(not_found).unwrap();
        assert_eq!(interaction.status, PaymentStatus::Unknown);
        assert_eq!(interaction.merchant_trans_id, "order-9");
        assert_eq!(interaction.amount, 0.0);
        assert_eq!(interaction.currency, "USD");
    }

    #[test]
    fn other_error_category_is_a_business_error() {
        let error = payment_sync(serde_json::json!({
            "result": { "code": "B0001", "message": "Invalid merchant", "category": "E" }
        }))
        .unwrap_err();
        assert_eq!(error.code, "B0001");
        assert_eq!(error.message, "Invalid merchant");
        assert_eq!(error.status_code, 200);

        let not_an_error = interaction_sync(serde_json::json!({
            "result": { "code": "C0004", "message": "Not found", "category": "S" },
            "transactionInfo": { "status": "paid" }
        }))
        .unwrap();
        assert_eq!(not_an_error.status, PaymentStatus::Captured);
    }

    #[test]
    fn interaction_sync_prefers_transaction_status() {
        let payment = interaction_sync(serde_json::json!({
            "result": { "code": "S0000", "category": "S" },
            "merchantOrderInfo": { "merchantOrderID": "order-9", "status": "pending" },
            "transactionInfo": {
                "transAmount": { "currency": "JPY", "value": "1000" },
                "status": "captured"
            }
        }))
        .unwrap();
        assert_eq!(payment.status, PaymentStatus::Captured);
        assert_eq!(payment.amount, 1000.0);
        assert_eq!(payment.currency, "JPY");

        let fallback = interaction_sync(serde_json::json!({
            "result": { "code": "S0000", "category": "S" },
            "merchantOrderInfo": { "merchantOrderID": "order-9", "status": "Cancelled" },
            "transactionInfo": { "transAmount": { "currency": "JPY", "value": "abc" } }
        }))
        .unwrap();
        assert_eq!(fallback.status, PaymentStatus::Cancelled);
        assert_eq!(fallback.amount, 0.0);
    }

    #[test]
    fn null_fields_read_as_zero_values() {
        let dropin: EvonetInteractionResponse = serde_json::from_value(serde_json::json!({
            "sessionID": "s1",
            "linkUrl": null,
            "merchantOrderInfo": null,
            "result": { "code": "S0000", "message": null, "category": null }
        }))
        .unwrap();
        let dropin = RouterDataV2::try_from(ResponseRouterData {
            response: dropin,
            router_data: router_data::<CreateInteraction, _, PaymentsResponseData>(
                interaction_data(None),
            ),
            http_code: 200,
        })
        .unwrap()
        .response
        .unwrap();
        assert!(dropin.success);
        assert_eq!(dropin.session_id.as_deref(), Some("s1"));
        assert!(dropin.link_url.is_none());
        assert_eq!(dropin.message, "");

        let direct = parse_direct(serde_json::json!({
            "payment": { "merchantTransInfo": null, "status": "captured" },
            "action": null,
            "result": { "code": "S0000", "message": null }
        }));
        assert!(direct.success);
        assert_eq!(direct.merchant_trans_id, "m2");
        assert_eq!(direct.status, PaymentStatus::Captured);
        assert!(direct.next_action.is_none());

        let direct = parse_direct(serde_json::json!({ "payment": null, "result": null }));
        assert!(!direct.success);

        let payment = payment_sync(serde_json::json!({
            "result": { "code": "S0000", "message": null, "category": "S" },
            "payment": {
                "merchantTransInfo": { "merchantTransID": null },
                "status": "paid",
                "amount": null,
                "currency": null
            }
        }))
        .unwrap();
        assert_eq!(payment.status, PaymentStatus::Captured);
        assert_eq!(payment.merchant_trans_id, "");
        assert_eq!(payment.amount, 0.0);
        assert_eq!(payment.currency, "");

        let interaction = interaction_sync(serde_json::json!({
            "result": { "code": "S0000", "category": "S" },
            "merchantOrderInfo": { "merchantOrderID": "order-9", "status": "pending" },
            "transactionInfo": {
                "transAmount": { "currency": null, "value": null },
                "status": null
            }
        }))
        .unwrap();
        assert_eq!(interaction.status, PaymentStatus::Pending);
        assert_eq!(interaction.merchant_trans_id, "order-9");
        assert_eq!(interaction.amount, 0.0);

        let interaction = interaction_sync(serde_json::json!({
            "result": { "code": "C0004", "message": null, "category": "E" },
            "merchantOrderInfo": null,
            "transactionInfo": null
        }))
        .unwrap();
        assert_eq!(interaction.status, PaymentStatus::Unknown);
    }
}
