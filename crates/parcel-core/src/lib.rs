//! Parcel Core Library
//!
//! This crate provides the domain models, error types, configuration and storage key
//! generation shared by the URL-issuing function and the upload client.

pub mod config;
pub mod constants;
pub mod error;
pub mod keys;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use keys::{generate_file_key, Clock, FixedClock, KeyPolicy, SystemClock};
pub use models::{ErrorBody, SignedUrlGrant, UploadRequest};
pub use storage_types::SignerBackend;
