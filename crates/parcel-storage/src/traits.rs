//! Signing abstraction trait
//!
//! This module defines the UrlSigner trait that all signing backends must implement.

use crate::SignerBackend;
use async_trait::async_trait;
use parcel_core::AppError;
use std::time::Duration;
use thiserror::Error;

/// Signing operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Presign failed: {0}")]
    Presign(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for signing operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Presign(msg) => AppError::Signing(msg),
            StorageError::Config(msg) => AppError::Configuration(msg),
        }
    }
}

/// Everything a pre-signed PUT URL is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub expires_in: Duration,
}

/// Pre-signed URL abstraction trait
///
/// The URL-issuing handler only talks to this trait, which keeps it independent of the
/// client library used for signing and lets tests substitute a recording mock.
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Generate a pre-signed PUT URL for `request.key` in `request.bucket`.
    ///
    /// The returned URL authorizes exactly one HTTP PUT of that object until
    /// `request.expires_in` has elapsed.
    async fn presigned_put_url(&self, request: &PresignRequest) -> StorageResult<String>;

    /// Get the signing backend type
    fn backend_type(&self) -> SignerBackend;
}
