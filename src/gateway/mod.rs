//! Axum HTTP API over the evaluator.
//!
//! - Request body size limit (64KB max)
//! - Request timeout covering one page fetch plus one LLM call
//! - CORS from `[gateway] allowed_origins`
//! - Refuses public binds unless explicitly allowed

mod handlers;
pub mod wire;

use handlers::{handle_evaluate, handle_feedback, handle_health, handle_status};

use crate::config::{Config, GatewayConfig, LinkConfig};
use crate::feedback::DeepFeedback;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (90s); deep feedback alone may take 60s
pub const REQUEST_TIMEOUT_SECS: u64 = 90;

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkConfig>,
    pub feedback: Arc<DeepFeedback>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            links: Arc::new(config.links.clone()),
            feedback: Arc::new(DeepFeedback::from_config(config)),
        }
    }
}

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the HTTP API on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the API would be reachable from other machines.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(host, listener, config).await
}

/// Run the HTTP API from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();

    let state = AppState::from_config(&config);
    if !config.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) {
        tracing::warn!(
            provider = state.feedback.provider_name(),
            "no API key configured; POST /feedback will fail"
        );
    }

    print_gateway_banner(&format!("{host}:{actual_port}"));
    tracing::info!(host, port = actual_port, "gateway listening");

    let app = build_app(state, &config.gateway);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str) {
    println!("Gateway listening on {display_addr}");
    println!("  GET  /        GET /test");
    println!("  GET  /health");
    println!("  POST /evaluar");
    println!("  POST /feedback");
    println!("  Press Ctrl+C to stop\n");
}

fn cors_layer(gateway: &GatewayConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if gateway.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = gateway
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

pub fn build_app(state: AppState, gateway: &GatewayConfig) -> Router {
    Router::new()
        .route("/", get(handle_status))
        .route("/test", get(handle_status))
        .route("/health", get(handle_health))
        .route("/evaluar", post(handle_evaluate))
        .route("/feedback", post(handle_feedback))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(cors_layer(gateway))
}
