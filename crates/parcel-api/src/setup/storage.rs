//! Signer setup and initialization

use anyhow::Result;
use parcel_core::Config;
use parcel_storage::{create_signer, UrlSigner};
use std::sync::Arc;

pub async fn setup_signer(config: &Config) -> Result<Arc<dyn UrlSigner>> {
    tracing::info!("Initializing URL signer...");
    let signer = create_signer(config).await?;
    tracing::info!(
        backend = %signer.backend_type(),
        bucket = ?config.uploads_bucket(),
        "URL signer initialized successfully"
    );
    Ok(signer)
}
