use crate::traits::{PresignRequest, StorageError, StorageResult, UrlSigner};
use crate::SignerBackend;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

/// S3 signer backed by `aws-sdk-s3`
#[derive(Clone, Debug)]
pub struct S3Signer {
    client: Client,
}

impl S3Signer {
    /// Create a new S3Signer from the default AWS credential chain
    ///
    /// # Arguments
    /// * `region` - AWS region; falls back to the chain's region when `None`
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO). Enables path-style addressing.
    pub async fn new(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::from_client(Client::from_conf(builder.build()))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UrlSigner for S3Signer {
    #[tracing::instrument(skip(self, request), fields(bucket = %request.bucket, key = %request.key))]
    async fn presigned_put_url(&self, request: &PresignRequest) -> StorageResult<String> {
        let presigning = PresigningConfig::expires_in(request.expires_in)
            .map_err(|e| StorageError::Config(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&request.bucket)
            .key(&request.key)
            .content_type(&request.content_type)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign(DisplayErrorContext(e).to_string()))?;

        Ok(presigned.uri().to_string())
    }

    fn backend_type(&self) -> SignerBackend {
        SignerBackend::AwsSdk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::Credentials;
    use std::time::Duration;

    fn offline_signer() -> S3Signer {
        let credentials = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI", None, None, "static");
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .build();
        S3Signer::from_client(Client::from_conf(conf))
    }

    fn request() -> PresignRequest {
        PresignRequest {
            bucket: "test-uploads-bucket".to_string(),
            key: "1234567890-test-file.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            expires_in: Duration::from_secs(300),
        }
    }

    #[tokio::test]
    async fn signs_put_for_bucket_and_key() {
        let url = offline_signer()
            .presigned_put_url(&request())
            .await
            .unwrap();

        assert!(url.starts_with("https://"));
        assert!(url.contains("test-uploads-bucket"));
        assert!(url.contains("1234567890-test-file.jpg"));
        assert!(url.contains("X-Amz-Expires=300"));
        assert!(url.contains("X-Amz-Signature="));
    }

    #[tokio::test]
    async fn content_type_is_a_signed_header() {
        let url = offline_signer()
            .presigned_put_url(&request())
            .await
            .unwrap();

        let signed_headers = url
            .split('&')
            .find(|p| p.starts_with("X-Amz-SignedHeaders="))
            .unwrap();
        assert!(signed_headers.contains("content-type"));
    }

    #[tokio::test]
    async fn expiry_beyond_a_week_is_rejected() {
        let mut req = request();
        req.expires_in = Duration::from_secs(8 * 24 * 3600);
        let err = offline_signer().presigned_put_url(&req).await.unwrap_err();
        assert!(matches!(err, StorageError::Config(_)));
    }
}
