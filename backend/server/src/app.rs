use std::{future::Future, sync::Arc};

use axum::{extract::Request, http};
use common_utils::consts;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::oneshot,
};
use tower_http::{request_id::MakeRequestUuid, trace as tower_trace};

use crate::{configs, error::ConfigurationError, logger, utils};

pub async fn server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let server_config = config.server.clone();
    // Signal handler
    let mut sig_int = signal(SignalKind::interrupt())?;
    let mut sig_term = signal(SignalKind::terminate())?;
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        tokio::select! {
            _ = sig_int.recv() => {
                logger::info!("Received SIGINT");
            }
            _ = sig_term.recv() => {
                logger::info!("Received SIGTERM");
            }
        }
        if tx.send(()).is_err() {
            logger::error!("shutdown signal receiver dropped");
        }
    });

    let shutdown_signal = async move {
        if rx.await.is_err() {
            logger::error!("shutdown signal sender dropped");
        }
        logger::info!("Shutdown signal received");
    };

    let base_config = Arc::new(config);

    logger::info!(
        host = %server_config.host,
        port = %server_config.port,
        mode = ?crate::server::payments::Payments::new(Arc::clone(&base_config)).mode(),
        "starting payment gateway"
    );

    let listener = server_config.tcp_listener().await?;
    http_server(base_config, listener, shutdown_signal).await
}

/// Router with request id and trace layers, as served on the socket.
pub fn router(base_config: Arc<configs::Config>) -> axum::Router {
    let logging_layer = tower_trace::TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| utils::record_fields_from_header(request))
        .on_request(tower_trace::DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(
            tower_trace::DefaultOnResponse::new()
                .level(tracing::Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Micros),
        )
        .on_failure(
            tower_trace::DefaultOnFailure::new()
                .latency_unit(tower_http::LatencyUnit::Micros)
                .level(tracing::Level::ERROR),
        );

    let request_id_layer = tower_http::request_id::SetRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
        MakeRequestUuid,
    );

    let propagate_request_id_layer = tower_http::request_id::PropagateRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
    );

    let app_state = crate::http::AppState::new(base_config);
    crate::http::create_router(app_state)
        .layer(logging_layer)
        .layer(propagate_request_id_layer)
        .layer(request_id_layer)
}

pub async fn http_server(
    base_config: Arc<configs::Config>,
    listener: tokio::net::TcpListener,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ConfigurationError> {
    let router = router(base_config);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}
