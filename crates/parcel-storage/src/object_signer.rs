use crate::traits::{PresignRequest, StorageError, StorageResult, UrlSigner};
use crate::SignerBackend;
use async_trait::async_trait;
use http::Method;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::signer::Signer;

const DEFAULT_REGION: &str = "us-east-1";

/// Signer backed by the `object_store` AWS implementation
///
/// One `AmazonS3` store is built per request because the bucket is a request parameter
/// here, while `object_store` binds a store to a single bucket.
#[derive(Clone, Debug)]
pub struct ObjectStoreSigner {
    base: AmazonS3Builder,
}

impl ObjectStoreSigner {
    /// Create a new ObjectStoreSigner
    ///
    /// Credentials come from the environment (`AWS_ACCESS_KEY_ID`, ...).
    ///
    /// # Arguments
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    pub fn new(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.unwrap_or_else(|| DEFAULT_REGION.to_string()));

        if let Some(endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        Self::from_builder(builder)
    }

    pub fn from_builder(base: AmazonS3Builder) -> Self {
        Self { base }
    }

    fn store_for(&self, bucket: &str) -> StorageResult<AmazonS3> {
        self.base
            .clone()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| StorageError::Config(e.to_string()))
    }
}

#[async_trait]
impl UrlSigner for ObjectStoreSigner {
    #[tracing::instrument(skip(self, request), fields(bucket = %request.bucket, key = %request.key))]
    async fn presigned_put_url(&self, request: &PresignRequest) -> StorageResult<String> {
        let store = self.store_for(&request.bucket)?;
        let location = Path::from(request.key.clone());

        let url = store
            .signed_url(Method::PUT, &location, request.expires_in)
            .await
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        Ok(url.to_string())
    }

    fn backend_type(&self) -> SignerBackend {
        SignerBackend::ObjectStore
    }
}
