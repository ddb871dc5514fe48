pub mod transformers;

use common_utils::{
    date_time,
    errors::CustomResult,
    ext_traits::BytesExt,
    request::{Method, RequestContent},
};
use domain_types::{
    connector_flow::{CreateInteraction, DirectPayment, InteractionSync, PSync},
    connector_types::{
        DirectPaymentData, InteractionCreateData, InteractionSyncData, PaymentFlowData,
        PaymentStatusData, PaymentsResponseData, PaymentsSyncData,
    },
    errors,
    router_data::ConnectorAuthType,
    router_data_v2::RouterDataV2,
    router_response_types::Response,
    types::Connectors,
};
use error_stack::ResultExt;
use hyperswitch_masking::{Mask, Maskable, PeekInterface};
use interfaces::{api::ConnectorCommon, connector_integration_v2::ConnectorIntegrationV2};
use time::OffsetDateTime;
use transformers::{
    self as evonet, EvonetInteractionRequest, EvonetInteractionResponse,
    EvonetInteractionSyncResponse, EvonetPaymentRequest, EvonetPaymentResponse,
    EvonetPaymentSyncResponse,
};

use crate::types::ResponseRouterData;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const DATE_TIME: &str = "DateTime";
    pub(crate) const KEY_ID: &str = "KeyID";
    pub(crate) const SIGN_TYPE: &str = "SignType";
    pub(crate) const AUTHORIZATION: &str = "Authorization";
    pub(crate) const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Evonet;

impl Evonet {
    pub const fn new() -> &'static Self {
        &Self
    }

    /// Every header of one outbound call, stamped with `now` and a fresh idempotency key.
    ///
    /// The signing key travels as-is in `Authorization` (`SignType: Key-based`); no
    /// digest is computed over the request.
    pub fn build_headers_at(
        &self,
        auth_type: &ConnectorAuthType,
        now: OffsetDateTime,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let date_time = date_time::provider_timestamp(now)
            .change_context(errors::ConnectorError::RequestEncodingFailed)
            .attach_printable("failed to format DateTime header")?;

        let mut header = vec![
            (
                headers::CONTENT_TYPE.to_string(),
                self.common_get_content_type().to_string().into(),
            ),
            (headers::DATE_TIME.to_string(), date_time.into()),
            (
                headers::SIGN_TYPE.to_string(),
                evonet::SIGN_TYPE_KEY_BASED.to_string().into(),
            ),
            (
                headers::IDEMPOTENCY_KEY.to_string(),
                common_utils::generate_idempotency_key().into(),
            ),
        ];
        let mut auth_header = self.get_auth_header(auth_type)?;
        header.append(&mut auth_header);
        Ok(header)
    }

    pub fn build_headers<F, Req, Res>(
        &self,
        req: &RouterDataV2<F, PaymentFlowData, Req, Res>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers_at(&req.connector_auth_type, date_time::now())
    }

    pub fn connector_base_url_payments<'a, F, Req, Res>(
        &self,
        req: &'a RouterDataV2<F, PaymentFlowData, Req, Res>,
    ) -> &'a str {
        self.base_url(&req.resource_common_data.connectors)
    }
}

/// Checks that a caller supplied identifier can stand as a single segment of the
/// provider path. Anything that could move the request elsewhere is refused.
pub fn ensure_path_id(id: &str, field_name: &str) -> CustomResult<(), errors::ConnectorError> {
    if id.trim().is_empty() {
        return Err(errors::ConnectorError::InvalidRequestData {
            message: format!("{field_name} is required"),
        })
        .attach_printable("empty identifier in provider path");
    }
    if id.contains(['/', '\\', '?', '#']) || id.contains("..") {
        return Err(errors::ConnectorError::InvalidRequestData {
            message: format!("{field_name} contains invalid characters"),
        })
        .attach_printable_lazy(|| format!("identifier {id:?} is not a single path segment"));
    }
    Ok(())
}

impl ConnectorCommon for Evonet {
    fn id(&self) -> &'static str {
        "evonet"
    }

    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.evonet.base_url.trim_end_matches('/')
    }

    fn get_auth_header(
        &self,
        auth_type: &ConnectorAuthType,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let auth = evonet::EvonetAuthType::try_from(auth_type)
            .change_context(errors::ConnectorError::FailedToObtainAuthType)?;
        Ok(vec![
            (
                headers::KEY_ID.to_string(),
                auth.key_id.peek().to_string().into(),
            ),
            (
                headers::AUTHORIZATION.to_string(),
                auth.sign_key.peek().to_string().into_masked(),
            ),
        ])
    }
}

// Create interaction (LinkPay / Drop-in)
impl
    ConnectorIntegrationV2<
        CreateInteraction,
        PaymentFlowData,
        InteractionCreateData,
        PaymentsResponseData,
    > for Evonet
{
    fn get_headers(
        &self,
        req: &RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers(req)
    }

    fn get_url(
        &self,
        req: &RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!("{}/interaction", self.connector_base_url_payments(req)))
    }

    fn get_request_body(
        &self,
        req: &RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        let connector_req = EvonetInteractionRequest::try_from(req)?;
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response_v2(
        &self,
        data: &RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
        res: Response,
    ) -> CustomResult<
        RouterDataV2<CreateInteraction, PaymentFlowData, InteractionCreateData, PaymentsResponseData>,
        errors::ConnectorError,
    > {
        let response: EvonetInteractionResponse = res
            .response
            .parse_struct("EvonetInteractionResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: data.clone(),
            http_code: res.status_code,
        })
    }
}

// Direct card payment
impl ConnectorIntegrationV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>
    for Evonet
{
    fn get_headers(
        &self,
        req: &RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers(req)
    }

    fn get_url(
        &self,
        req: &RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!("{}/payment", self.connector_base_url_payments(req)))
    }

    fn get_request_body(
        &self,
        req: &RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        let connector_req = EvonetPaymentRequest::try_from(req)?;
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response_v2(
        &self,
        data: &RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
        res: Response,
    ) -> CustomResult<
        RouterDataV2<DirectPayment, PaymentFlowData, DirectPaymentData, PaymentsResponseData>,
        errors::ConnectorError,
    > {
        let response: EvonetPaymentResponse = res
            .response
            .parse_struct("EvonetPaymentResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: data.clone(),
            http_code: res.status_code,
        })
    }
}

// Payment status (Direct API)
impl ConnectorIntegrationV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>
    for Evonet
{
    fn get_headers(
        &self,
        req: &RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers(req)
    }

    fn get_http_method(&self) -> Method {
        Method::Get
    }

    fn get_url(
        &self,
        req: &RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>,
    ) -> CustomResult<String, errors::ConnectorError> {
        let merchant_trans_id = &req.request.merchant_trans_id;
        ensure_path_id(merchant_trans_id, "merchantTransId")?;
        Ok(format!(
            "{}/payment/{}",
            self.connector_base_url_payments(req),
            merchant_trans_id
        ))
    }

    fn handle_response_v2(
        &self,
        data: &RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>,
        res: Response,
    ) -> CustomResult<
        RouterDataV2<PSync, PaymentFlowData, PaymentsSyncData, PaymentStatusData>,
        errors::ConnectorError,
    > {
        let response: EvonetPaymentSyncResponse = res
            .response
            .parse_struct("EvonetPaymentSyncResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: data.clone(),
            http_code: res.status_code,
        })
    }
}

// Interaction status (LinkPay / Drop-in)
impl ConnectorIntegrationV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>
    for Evonet
{
    fn get_headers(
        &self,
        req: &RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers(req)
    }

    fn get_http_method(&self) -> Method {
        Method::Get
    }

    fn get_url(
        &self,
        req: &RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>,
    ) -> CustomResult<String, errors::ConnectorError> {
        let merchant_order_id = &req.request.merchant_order_id;
        ensure_path_id(merchant_order_id, "merchantOrderId")?;
        Ok(format!(
            "{}/interaction/{}",
            self.connector_base_url_payments(req),
            merchant_order_id
        ))
    }

    fn handle_response_v2(
        &self,
        data: &RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>,
        res: Response,
    ) -> CustomResult<
        RouterDataV2<InteractionSync, PaymentFlowData, InteractionSyncData, PaymentStatusData>,
        errors::ConnectorError,
    > {
        let response: EvonetInteractionSyncResponse = res
            .response
            .parse_struct("EvonetInteractionSyncResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        RouterDataV2::try_from(ResponseRouterData {
            response,
            router_data: data.clone(),
            http_code: res.status_code,
        })
    }
}
