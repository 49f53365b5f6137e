//! HTTP service around the Sankhya numerology engine.
//!
//! The engine itself does no I/O; this crate adds:
//! - An axum router exposing analysis, reading and lookup endpoints
//! - In-memory key-value storage of computed analyses
//! - A chat-completions client that turns an analysis into a prose reading
//! - Configuration loading (TOML + environment) and tracing setup

pub mod config;
pub mod error;
pub mod logging;
pub mod reading;
pub mod routes;
pub mod storage;

use std::sync::Arc;

pub use config::{ReadingConfig, ServiceConfig};
pub use error::{ApiError, ConfigError, ReadingError};
pub use reading::{ReadingClient, SYSTEM_PROMPT, reading_prompt};
pub use routes::{ANALYSIS_ID_HEADER, AppState, router};
pub use storage::{AnalysisStore, MemoryStore, NewAnalysis, StoredAnalysis};

/// Build the default application state from `config`.
pub fn app_state(config: &ServiceConfig) -> Result<AppState, ReadingError> {
    let reading = ReadingClient::new(config.reading.clone())?;
    Ok(AppState::new(Arc::new(MemoryStore::new()), reading))
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> std::io::Result<()> {
    let state = app_state(&config).map_err(std::io::Error::other)?;
    if !state.reading.is_configured() {
        tracing::warn!("no reading API key configured; AI readings will be refused");
    }

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "sankhya server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
