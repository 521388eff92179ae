use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Signing backend types
///
/// Selects which client library produces pre-signed PUT URLs. It's defined in core
/// because it's part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignerBackend {
    /// `aws-sdk-s3` presigned `PutObject`; binds the content type into the signature.
    #[default]
    AwsSdk,
    /// `object_store` AWS signer; works against any S3-compatible endpoint.
    ObjectStore,
}

impl FromStr for SignerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws-sdk" | "aws_sdk" | "sdk" => Ok(SignerBackend::AwsSdk),
            "object-store" | "object_store" => Ok(SignerBackend::ObjectStore),
            _ => Err(anyhow::anyhow!("Invalid signer backend: {}", s)),
        }
    }
}

impl Display for SignerBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SignerBackend::AwsSdk => write!(f, "aws-sdk"),
            SignerBackend::ObjectStore => write!(f, "object-store"),
        }
    }
}
