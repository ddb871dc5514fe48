use std::{fmt::Debug, sync::Arc};

use api_models::{
    catalog::{GatewayConfigInfo, GatewayMode},
    Payment, PaymentRequest, PaymentResponse,
};
use common_utils::errors::CustomResult;
use connector_integration::connectors::{evonet::ensure_path_id, Evonet};
use domain_types::{
    connector_flow::{CreateInteraction, DirectPayment, InteractionSync, PSync},
    connector_types::{
        DirectPaymentData, InteractionCreateData, InteractionSyncData, PaymentFlowData,
        PaymentStatusData, PaymentsResponseData, PaymentsSyncData,
    },
    errors::ConnectorError,
    router_data::ConnectorAuthType,
    router_data_v2::RouterDataV2,
};
use error_stack::report;
use interfaces::{
    api::ConnectorCommon,
    connector_integration_v2::{BoxedConnectorIntegrationV2, ConnectorIntegrationV2},
};

use crate::{configs::Config, server::demo};

fn connector_integration<F, Req, Resp>(
) -> BoxedConnectorIntegrationV2<'static, F, PaymentFlowData, Req, Resp>
where
    Evonet: ConnectorIntegrationV2<F, PaymentFlowData, Req, Resp>,
    F: 'static,
    Req: 'static,
    Resp: 'static,
{
    let connector: &'static (dyn ConnectorIntegrationV2<F, PaymentFlowData, Req, Resp>
                  + Send
                  + Sync) = Evonet::new();
    Box::new(connector)
}

/// Entry point of the four payment operations.
///
/// Each operation resolves the mode from the configured credentials when it is called:
/// without both a key id and a signing key it answers from [`demo`], otherwise it calls
/// the provider.
#[derive(Clone, Debug)]
pub struct Payments {
    config: Arc<Config>,
}

impl Payments {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn connector_auth_type(&self) -> ConnectorAuthType {
        ConnectorAuthType::from(&self.config.connectors.evonet)
    }

    pub fn mode(&self) -> GatewayMode {
        if self.connector_auth_type().has_live_credentials() {
            GatewayMode::Live
        } else {
            GatewayMode::Demo
        }
    }

    /// Publicly visible slice of the configuration.
    pub fn gateway_config(&self) -> GatewayConfigInfo {
        GatewayConfigInfo {
            environment: self.config.common.environment.to_string(),
            api_url: Evonet::new()
                .base_url(&self.config.connectors)
                .to_string(),
            mode: self.mode(),
        }
    }

    #[tracing::instrument(skip_all, fields(merchant_trans_id = %request.merchant_trans_id))]
    pub async fn create_interaction(
        &self,
        request: PaymentRequest,
    ) -> CustomResult<PaymentResponse, ConnectorError> {
        request.validate_for_interaction().map_err(|report| {
            let message = report.current_context().to_string();
            report.change_context(ConnectorError::InvalidRequestData { message })
        })?;

        let data = InteractionCreateData::from(request);
        let auth_type = self.connector_auth_type();
        if !auth_type.has_live_credentials() {
            tracing::info!("no provider credentials configured, answering from demo mode");
            return Ok(demo::create_interaction(&data).into());
        }

        let response = self
            .execute::<CreateInteraction, _, PaymentsResponseData>(auth_type, data)
            .await?;
        Ok(response.into())
    }

    #[tracing::instrument(skip_all, fields(merchant_trans_id = %request.merchant_trans_id))]
    pub async fn create_direct_payment(
        &self,
        request: PaymentRequest,
    ) -> CustomResult<PaymentResponse, ConnectorError> {
        request.validate().map_err(|report| {
            let message = report.current_context().to_string();
            report.change_context(ConnectorError::InvalidRequestData { message })
        })?;

        let data = DirectPaymentData::from(request);
        if data.card.is_none() {
            return Err(report!(ConnectorError::MissingCardInfo));
        }

        let auth_type = self.connector_auth_type();
        if !auth_type.has_live_credentials() {
            tracing::info!("no provider credentials configured, answering from demo mode");
            return Ok(demo::create_direct_payment(&data).into());
        }

        let response = self
            .execute::<DirectPayment, _, PaymentsResponseData>(auth_type, data)
            .await?;
        Ok(response.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_payment_status(
        &self,
        merchant_trans_id: &str,
    ) -> CustomResult<Payment, ConnectorError> {
        ensure_path_id(merchant_trans_id, "merchantTransId")?;

        let auth_type = self.connector_auth_type();
        if !auth_type.has_live_credentials() {
            return Ok(demo::payment_status_now(merchant_trans_id).into());
        }

        let status = self
            .execute::<PSync, _, PaymentStatusData>(
                auth_type,
                PaymentsSyncData {
                    merchant_trans_id: merchant_trans_id.to_string(),
                },
            )
            .await?;
        Ok(status.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_interaction_status(
        &self,
        merchant_order_id: &str,
    ) -> CustomResult<Payment, ConnectorError> {
        ensure_path_id(merchant_order_id, "merchantOrderId")?;

        let auth_type = self.connector_auth_type();
        if !auth_type.has_live_credentials() {
            return Ok(demo::payment_status_now(merchant_order_id).into());
        }

        let status = self
            .execute::<InteractionSync, _, PaymentStatusData>(
                auth_type,
                InteractionSyncData {
                    merchant_order_id: merchant_order_id.to_string(),
                },
            )
            .await?;
        Ok(status.into())
    }

    /// Send one flow to the provider and unwrap its outcome.
    ///
    /// A well-formed provider error left on the router data becomes
    /// [`ConnectorError::ProviderBusinessError`].
    async fn execute<F, Req, Resp>(
        &self,
        auth_type: ConnectorAuthType,
        request: Req,
    ) -> CustomResult<Resp, ConnectorError>
    where
        Evonet: ConnectorIntegrationV2<F, PaymentFlowData, Req, Resp>,
        F: Clone + 'static,
        Req: Clone + Debug + 'static,
        Resp: Clone + Debug + 'static,
    {
        let router_data = RouterDataV2::<F, _, _, Resp>::new(
            PaymentFlowData::new(self.config.connectors.clone()),
            auth_type,
            request,
        );

        let router_data = external_services::service::execute_connector_processing_step(
            &self.config.proxy,
            connector_integration::<F, Req, Resp>(),
            router_data,
            Evonet::new().id(),
        )
        .await
        .inspect_err(|error| tracing::error!(?error, "provider call failed"))?;

        router_data.response.map_err(|error| {
            tracing::warn!(
                code = %error.code,
                message = %error.message,
                status_code = error.status_code,
                "provider reported an error"
            );
            report!(ConnectorError::ProviderBusinessError {
                code: error.code,
                message: error.message,
            })
        })
    }
}
