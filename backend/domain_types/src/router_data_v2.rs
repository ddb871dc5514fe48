use std::marker::PhantomData;

use crate::router_data::{ConnectorAuthType, ErrorResponse};

#[derive(Debug, Clone)]
pub struct RouterDataV2<Flow, ResourceCommonData, FlowSpecificRequest, FlowSpecificResponse> {
    pub flow: PhantomData<Flow>,
    pub resource_common_data: ResourceCommonData,
    pub connector_auth_type: ConnectorAuthType,
    /// Contains flow-specific data required to construct a request and send it to the connector.
    pub request: FlowSpecificRequest,
    /// Contains flow-specific data that the connector responds with.
    pub response: Result<FlowSpecificResponse, ErrorResponse>,
}

impl<Flow, ResourceCommonData, FlowSpecificRequest, FlowSpecificResponse>
    RouterDataV2<Flow, ResourceCommonData, FlowSpecificRequest, FlowSpecificResponse>
{
    /// Router data for a call that has not reached the connector yet.
    pub fn new(
        resource_common_data: ResourceCommonData,
        connector_auth_type: ConnectorAuthType,
        request: FlowSpecificRequest,
    ) -> Self {
        Self {
            flow: PhantomData,
            resource_common_data,
            connector_auth_type,
            request,
            response: Err(ErrorResponse::default()),
        }
    }
}
