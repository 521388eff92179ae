//! Application state shared by handlers.

use parcel_core::{Clock, KeyPolicy};
use parcel_storage::UrlSigner;
use std::sync::Arc;

/// Dependencies of the URL-issuing handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub signer: Arc<dyn UrlSigner>,
    pub clock: Arc<dyn Clock>,
    /// Checked per request so a missing bucket yields a 500 rather than a failed cold start.
    pub uploads_bucket: Option<String>,
    pub key_policy: KeyPolicy,
}

impl AppState {
    pub fn new(
        signer: Arc<dyn UrlSigner>,
        clock: Arc<dyn Clock>,
        uploads_bucket: Option<String>,
        key_policy: KeyPolicy,
    ) -> Self {
        Self {
            signer,
            clock,
            uploads_bucket,
            key_policy,
        }
    }
}
