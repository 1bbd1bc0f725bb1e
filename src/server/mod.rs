//! HTTP server - routes and lifecycle
//!
//! Exposes the test listing UI, the run redirect and the result
//! endpoint, and shuts down gracefully on SIGINT/SIGTERM.

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::commands::ServeArgs;
use crate::common::config::Config;
use crate::common::Result;
use crate::report::ReportRecorder;

/// Shared state for request handlers
///
/// Both fields are immutable after startup; handlers never mutate
/// process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recorder: Arc<ReportRecorder>,
}

impl AppState {
    /// Build the shared state from a loaded configuration
    pub fn new(config: Config) -> Self {
        let recorder = ReportRecorder::from_config(&config);
        Self {
            config: Arc::new(config),
            recorder: Arc::new(recorder),
        }
    }
}

/// Build the router with all harness routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tests", get(handlers::list_tests))
        .route("/tests/run", get(handlers::run_test))
        .route("/tests/result", post(handlers::record_result))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
///
/// Entry point for the `serve` subcommand: loads configuration, applies
/// CLI overrides and serves until interrupted.
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = Config::load(args.app_root.as_deref(), args.config.as_deref())?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }

    let addr = config.server.addr;
    let state = AppState::new(config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = ?state.config.mode,
        "Starting qunit harness"
    );
    tracing::info!(
        "Serving test pages from {}",
        state.config.test_root().display()
    );
    if state.recorder.is_enabled() {
        tracing::info!(
            "Result recording enabled, reports go to {}",
            state.recorder.report_dir().display()
        );
    } else {
        tracing::info!("Result recording disabled");
    }

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolve once the process receives a shutdown signal
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to create SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM, shutting down gracefully");
        }
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Received Ctrl+C, shutting down gracefully");
    }
}
