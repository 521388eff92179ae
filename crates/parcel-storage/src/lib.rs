//! Parcel Storage Library
//!
//! Pre-signed PUT URL generation for direct-to-bucket uploads. The [`UrlSigner`] trait is
//! the only seam the URL-issuing function depends on; two implementations are provided:
//!
//! - [`S3Signer`] (`signer-aws-sdk`): `aws-sdk-s3` presigned `PutObject`. The content type
//!   is part of the signature, so the client must send the same `Content-Type`.
//! - [`ObjectStoreSigner`] (`signer-object-store`): `object_store` AWS signer, usable
//!   against any S3-compatible endpoint. Does not bind the content type.
//!
//! Signing is a local computation over credentials; no request reaches the bucket.

pub mod factory;
#[cfg(feature = "signer-object-store")]
pub mod object_signer;
#[cfg(feature = "signer-aws-sdk")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_signer;
#[cfg(feature = "signer-object-store")]
pub use object_signer::ObjectStoreSigner;
pub use parcel_core::SignerBackend;
#[cfg(feature = "signer-aws-sdk")]
pub use s3::S3Signer;
pub use traits::{PresignRequest, StorageError, StorageResult, UrlSigner};
