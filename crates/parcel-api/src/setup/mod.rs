//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod lambda;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use parcel_core::{Config, SystemClock};
use std::sync::Arc;

/// Build the handler state: signer from configuration, system clock.
pub async fn initialize_state(config: &Config) -> Result<Arc<AppState>> {
    let signer = storage::setup_signer(config).await?;

    if config.uploads_bucket().is_none() {
        tracing::warn!("UPLOADS_BUCKET is not set; upload URL requests will fail");
    }

    Ok(Arc::new(AppState::new(
        signer,
        Arc::new(SystemClock),
        config.uploads_bucket.clone(),
        config.key_policy,
    )))
}

/// Initialize the entire application
///
/// Returns the router matching the runtime: the single-function router inside Lambda,
/// the full server router otherwise.
pub async fn initialize_app(config: &Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        lambda = config.lambda_runtime,
        key_policy = ?config.key_policy,
        "Configuration loaded"
    );

    let state = initialize_state(config).await?;

    let router = if config.lambda_runtime {
        routes::function_router(state.clone())
    } else {
        routes::server_router(state.clone())
    };

    Ok((state, router))
}
