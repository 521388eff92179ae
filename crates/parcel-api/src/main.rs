use parcel_api::setup::{self, lambda, server};
use parcel_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, signer, routes)
    let (_state, router) = setup::initialize_app(&config).await?;

    if config.lambda_runtime {
        lambda::run_function(router).await
    } else {
        server::start_server(&config, router).await
    }
}
