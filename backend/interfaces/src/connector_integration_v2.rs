//! Per-flow contract between the transport and a provider integration.

use common_utils::{
    errors::CustomResult,
    request::{Method, Request, RequestBuilder, RequestContent},
};
use domain_types::{
    errors::ConnectorError, router_data_v2::RouterDataV2, router_response_types::Response,
};
use hyperswitch_masking::Maskable;

use crate::api::ConnectorCommon;

pub type BoxedConnectorIntegrationV2<'a, Flow, ResourceCommonData, Req, Resp> =
    Box<&'a (dyn ConnectorIntegrationV2<Flow, ResourceCommonData, Req, Resp> + Send + Sync)>;

/// Builds the outbound request of one flow and turns the provider's reply back into
/// router data.
///
/// The transport only calls `build_request_v2` and `handle_response_v2`; the remaining
/// methods are the pieces the default `build_request_v2` is assembled from. Replies with an
/// HTTP status of 400 or above never reach `handle_response_v2`.
pub trait ConnectorIntegrationV2<Flow, ResourceCommonData, Req, Resp>:
    ConnectorCommon + Send + Sync
{
    fn get_headers(
        &self,
        _req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(vec![])
    }

    fn get_content_type(&self) -> &'static str {
        self.common_get_content_type()
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_url(
        &self,
        _req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<String, ConnectorError> {
        Err(ConnectorError::FailedToObtainIntegrationUrl.into())
    }

    fn get_request_body(
        &self,
        _req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        Ok(None)
    }

    /// `None` means the flow needs no provider call.
    fn build_request_v2(
        &self,
        req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<Option<Request>, ConnectorError> {
        let request = RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req)?)
            .headers(self.get_headers(req)?)
            .set_optional_body(self.get_request_body(req)?)
            .build();
        Ok(Some(request))
    }

    fn handle_response_v2(
        &self,
        data: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
        res: Response,
    ) -> CustomResult<RouterDataV2<Flow, ResourceCommonData, Req, Resp>, ConnectorError>;
}
