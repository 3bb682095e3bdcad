// cardiorisk/src/server/mod.rs
//! The HTTP service.
//!
//! One logical endpoint, `/calculate-risk`: `GET` returns reference data,
//! `POST` scores a patient record. Scoring is stateless, so the shared state
//! is just the engine behind an `Arc`.

pub mod error;
pub mod handlers;
pub mod middleware;

use anyhow::{bail, Context, Result};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use log::info;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use cardiorisk_core::{CalculatorConfig, RiskEngine};

pub const ENDPOINT: &str = "/calculate-risk";
pub const ENDPOINT_SEGMENT: &str = "calculate-risk";

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn RiskEngine>,
}

impl AppState {
    pub fn new(engine: impl RiskEngine + 'static) -> Self {
        Self { engine: Arc::new(engine) }
    }
}

/// Builds the CORS policy from configuration.
pub fn cors_layer(config: &CalculatorConfig) -> Result<CorsLayer> {
    let origin = match config.allow_origin() {
        "*" => AllowOrigin::from(Any),
        origin => AllowOrigin::exact(
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin '{}'", origin))?,
        ),
    };
    // Header names are only checked here, against the parser axum itself uses.
    let mut headers = Vec::new();
    let mut invalid = Vec::new();
    for name in config.allow_headers() {
        match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header) => headers.push(header),
            Err(_) => invalid.push(format!("'{}'", name)),
        }
    }
    if !invalid.is_empty() {
        bail!("`cors.allow_headers` contains invalid header names: {}", invalid.join(", "));
    }

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(headers))
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            ENDPOINT,
            get(handlers::reference)
                .post(handlers::calculate)
                .options(handlers::preflight)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::fallback)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run_server(config: &CalculatorConfig, state: AppState) -> Result<()> {
    let app = build_router(state, cors_layer(config)?);
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}{}", listener.local_addr()?, ENDPOINT);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received.");
}
