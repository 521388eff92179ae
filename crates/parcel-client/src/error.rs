//! Client error types.
//!
//! `Display` of each [`UploadError`] is the detail shown to the user after
//! `"Upload failed: "`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select a file first.")]
    NoFileSelected,

    /// Non-2xx from the URL-issuing function; carries its response body
    #[error("Failed to get pre-signed URL: {0}")]
    GrantRejected(String),

    #[error("Invalid pre-signed URL response")]
    InvalidGrant,

    /// Non-2xx from object storage
    #[error("HTTP Error: {0}")]
    TransferRejected(u16),

    #[error("Network error occurred")]
    Network,

    /// The file could not be read while its bytes were being sent
    #[error("Upload aborted")]
    Aborted,

    #[error("Cannot read file: {0}")]
    File(String),

    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}

/// An event that the current state does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid transition: {event} while {state}")]
pub struct InvalidTransition {
    pub state: &'static str,
    pub event: &'static str,
}
