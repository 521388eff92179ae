#[cfg(feature = "signer-object-store")]
use crate::ObjectStoreSigner;
#[cfg(feature = "signer-aws-sdk")]
use crate::S3Signer;
use crate::{SignerBackend, StorageResult, UrlSigner};
#[cfg(not(all(feature = "signer-aws-sdk", feature = "signer-object-store")))]
use crate::StorageError;
use parcel_core::Config;
use std::sync::Arc;

/// Create a signing backend based on configuration
pub async fn create_signer(config: &Config) -> StorageResult<Arc<dyn UrlSigner>> {
    let region = config.aws_region().map(String::from);
    let endpoint = config.s3_endpoint().map(String::from);

    tracing::debug!(
        backend = %config.signer_backend,
        region = ?region,
        endpoint = ?endpoint,
        "Creating URL signer"
    );

    match config.signer_backend {
        #[cfg(feature = "signer-aws-sdk")]
        SignerBackend::AwsSdk => Ok(Arc::new(S3Signer::new(region, endpoint).await)),

        #[cfg(not(feature = "signer-aws-sdk"))]
        SignerBackend::AwsSdk => Err(StorageError::Config(
            "aws-sdk signer not available (signer-aws-sdk feature not enabled)".to_string(),
        )),

        #[cfg(feature = "signer-object-store")]
        SignerBackend::ObjectStore => Ok(Arc::new(ObjectStoreSigner::new(region, endpoint))),

        #[cfg(not(feature = "signer-object-store"))]
        SignerBackend::ObjectStore => Err(StorageError::Config(
            "object-store signer not available (signer-object-store feature not enabled)"
                .to_string(),
        )),
    }
}
