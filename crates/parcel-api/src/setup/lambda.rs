//! Lambda runtime entry point

use anyhow::Result;
use axum::Router;

/// Serve the router through the Lambda runtime API until the runtime shuts us down.
pub async fn run_function(app: Router) -> Result<()> {
    tracing::info!("Starting Lambda function");

    lambda_http::run(app)
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime error: {}", e))
}
