use std::{str::FromStr, time::Duration};

use common_utils::{
    consts,
    errors::CustomResult,
    request::{Headers, Method, Request, RequestContent},
};
use domain_types::{
    errors::{ApiClientError, ConnectorError},
    router_data_v2::RouterDataV2,
    router_response_types::Response,
    types::Proxy,
};
use error_stack::{report, Report, ResultExt};
use interfaces::connector_integration_v2::BoxedConnectorIntegrationV2;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::field::Empty;

/// Run one provider call end to end: build, send, and hand the reply back to the connector.
///
/// A reply with HTTP status 400 or above fails with [`ConnectorError::ProviderHttpError`]
/// carrying the body, network failures (timeouts included) with
/// [`ConnectorError::TransportFailed`]. Anything else is given to `handle_response_v2`.
#[tracing::instrument(
    name = "execute_connector_processing_step",
    skip_all,
    fields(
        connector = connector_name,
        request.headers = Empty,
        request.body = Empty,
        request.url = Empty,
        request.method = Empty,
        response.body = Empty,
        response.status_code = Empty,
        response.error_message = Empty,
        message_ = "Golden Log Line (outgoing)",
        latency = Empty,
    )
)]
pub async fn execute_connector_processing_step<F, ResourceCommonData, Req, Resp>(
    proxy: &Proxy,
    connector: BoxedConnectorIntegrationV2<'static, F, ResourceCommonData, Req, Resp>,
    router_data: RouterDataV2<F, ResourceCommonData, Req, Resp>,
    connector_name: &str,
) -> CustomResult<RouterDataV2<F, ResourceCommonData, Req, Resp>, ConnectorError>
where
    F: Clone + 'static,
    Req: Clone + std::fmt::Debug + 'static,
    Resp: Clone + std::fmt::Debug + 'static,
    ResourceCommonData: Clone + 'static,
{
    let start = tokio::time::Instant::now();
    let connector_request = connector.build_request_v2(&router_data)?;

    let Some(request) = connector_request else {
        return Ok(router_data);
    };

    let masked_headers = request.get_masked_headers();
    tracing::Span::current().record("request.headers", tracing::field::display(&masked_headers));
    let masked_request = request
        .body
        .as_ref()
        .map(RequestContent::masked_value)
        .unwrap_or(Value::Null);
    tracing::info!(request = %masked_request, "request of connector");
    tracing::Span::current().record("request.body", tracing::field::display(&masked_request));
    tracing::Span::current().record("request.url", tracing::field::display(&request.url));
    tracing::Span::current().record("request.method", tracing::field::display(request.method));

    let response = call_connector_api(proxy, request).await;

    let result = match response {
        Ok(Ok(body)) => {
            tracing::Span::current()
                .record("response.status_code", tracing::field::display(body.status_code));
            record_response_body(&body);
            connector.handle_response_v2(&router_data, body)
        }
        Ok(Err(body)) => {
            let status_code = body.status_code;
            let error_body = body.body_text();
            tracing::Span::current()
                .record("response.status_code", tracing::field::display(status_code));
            tracing::Span::current()
                .record("response.error_message", tracing::field::display(&error_body));
            error_log(
                "CONNECTOR_HTTP_ERROR",
                &json!({ "status_code": status_code, "body": error_body }),
            );
            Err(report!(ConnectorError::ProviderHttpError {
                status_code,
                body: error_body,
            }))
        }
        Err(error) => Err(transport_failure(error)),
    };

    tracing::Span::current().record("latency", start.elapsed().as_millis());
    tracing::info!(tag = "OutgoingApi", log_type = "api", "Outgoing Request completed");
    result
}

/// A call that never produced a reply, timeouts included, surfaces as a transport failure.
fn transport_failure(error: Report<ApiClientError>) -> Report<ConnectorError> {
    error_log(
        "NETWORK_ERROR",
        &json!(format!(
            "Failed getting response from connector. Error: {:?}",
            error
        )),
    );
    error.change_context(ConnectorError::TransportFailed)
}

fn record_response_body(body: &Response) {
    let logged = serde_json::from_slice::<Value>(&body.response)
        .unwrap_or_else(|_| Value::String(body.body_text()));
    tracing::Span::current().record("response.body", tracing::field::display(logged));
}

/// Send `request` and sort the reply by status: `Ok(Ok(_))` below 400, `Ok(Err(_))` for
/// 400 to 599.
pub async fn call_connector_api(
    proxy: &Proxy,
    request: Request,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

    let should_bypass_proxy = proxy.bypass_proxy_urls.contains(&url.to_string());

    let client = get_base_client(proxy, should_bypass_proxy)?;
    send_request(&client, url, request).await
}

async fn send_request(
    client: &Client,
    url: reqwest::Url,
    request: Request,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let headers = request.headers.construct_header_map()?;

    let request = match request.method {
        Method::Get => client.get(url),
        Method::Post => {
            let client = client.post(url);
            match request.body {
                Some(RequestContent::Json(payload)) => client.json(&payload),
                None => client,
            }
        }
    }
    .headers(headers);

    let response = request.send().await.map_err(|error| {
        let api_error = match error {
            error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
            error => ApiClientError::RequestNotSent(error.to_string()),
        };
        info_log(
            "REQUEST_FAILURE",
            &json!("Unable to send request to connector."),
        );
        report!(api_error)
    })?;

    handle_response(response).await
}

static NON_PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();
static PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();

/// Client shared by every call; the timeout is fixed when it is first built.
fn get_base_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    Ok(if proxy_config.is_proxy_configured(should_bypass_proxy) {
        &PROXIED_CLIENT
    } else {
        &NON_PROXIED_CLIENT
    }
    .get_or_try_init(|| {
        get_client_builder(proxy_config, should_bypass_proxy)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .inspect_err(|err| {
                info_log(
                    "ERROR",
                    &json!(format!("Failed to construct base client. Error: {:?}", err)),
                );
            })
    })?
    .clone())
}

fn get_client_builder(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let mut client_builder = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(consts::CONNECTOR_REQUEST_TIMEOUT_SECS))
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or_default(),
        ));

    if should_bypass_proxy {
        return Ok(client_builder);
    }

    // Proxy all HTTPS traffic through the configured HTTPS proxy
    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTPS proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    // Proxy all HTTP traffic through the configured HTTP proxy
    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTP proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    Ok(client_builder)
}

async fn handle_response(
    resp: reqwest::Response,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let status_code = resp.status().as_u16();
    let headers = Some(resp.headers().to_owned());
    match status_code {
        200..=399 => {
            let response = resp
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)?;
            Ok(Ok(Response {
                headers,
                response,
                status_code,
            }))
        }
        400..=599 => {
            let response = resp
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)?;
            Ok(Err(Response {
                headers,
                response,
                status_code,
            }))
        }
        _ => {
            info_log(
                "UNEXPECTED_RESPONSE",
                &json!("Unexpected response from server."),
            );
            Err(report!(ApiClientError::UnexpectedServerResponse))
        }
    }
}

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

#[inline]
pub fn info_log(action: &str, message: &Value) {
    tracing::info!(tags = %action, json_value= %message);
}

#[inline]
pub fn error_log(action: &str, message: &Value) {
    tracing::error!(tags = %action, json_value= %message);
}
