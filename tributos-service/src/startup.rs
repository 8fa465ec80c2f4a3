//! Application startup and lifecycle management.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use service_core::error::AppError;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::services::{get_metrics, init_metrics, NotasClient, TributoRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notas: NotasClient,
    pub repository: TributoRepository,
}

/// Health check endpoint for liveness probes.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "tributos-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint.
async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}

/// Prometheus metrics endpoint.
async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration. The listener is
    /// bound here so a configured port of 0 resolves before serving starts.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        init_metrics();

        let notas = NotasClient::new(config.source.base_url.clone());
        let repository = TributoRepository::new(config.database.url.clone());

        let state = AppState {
            config: config.clone(),
            notas,
            repository,
        };

        let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind listener on port {}: {}",
                    config.server.port,
                    e
                );
                AppError::InternalError(e.into())
            })?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::InternalError(e.into()))?
            .port();

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/ready", get(readiness_check))
            .route("/metrics", get(metrics_endpoint))
            // The trigger accepts GET and POST, both without parameters.
            .route(
                "/calcular-tributos",
                get(handlers::calcular_tributos).post(handlers::calcular_tributos),
            )
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .with_state(state);

        tracing::info!("tributos-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
