use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Request for a pre-signed upload URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Original file name; becomes the tail of the storage key
    pub file_name: String,
    /// MIME type the client will send as `Content-Type` on the PUT
    pub file_type: String,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_type: file_type.into(),
        }
    }

    /// Parse and validate a raw request body.
    ///
    /// A body that is not JSON (or is JSON `null`) is a [`AppError::MalformedBody`]. A
    /// parsed body whose `fileName` or `fileType` is absent, not a string, or empty is
    /// [`AppError::MissingFields`].
    pub fn from_json_slice(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)?;

        if value.is_null() {
            return Err(AppError::MalformedBody("request body is null".to_string()));
        }

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        match (field("fileName"), field("fileType")) {
            (Some(file_name), Some(file_type)) => Ok(Self {
                file_name,
                file_type,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}

/// Pre-signed PUT URL and the key it is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlGrant {
    pub upload_url: String,
    pub file_key: String,
}

/// Error body returned by the function: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
