//! Wire-level constants shared by the function and the client.

/// Validity window of every issued upload URL.
pub const PRESIGNED_URL_EXPIRY_SECS: u64 = 300;

/// Message returned with a 400 when `fileName` or `fileType` is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "fileName and fileType are required";

/// Message returned with every 500. The real cause only goes to the logs.
pub const SIGNING_FAILED_MESSAGE: &str = "Failed to generate pre-signed URL";

pub const HEADER_ALLOW_ORIGIN_VALUE: &str = "*";
pub const HEADER_ALLOW_CREDENTIALS_VALUE: &str = "true";
