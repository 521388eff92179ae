use async_trait::async_trait;
use parcel_storage::{PresignRequest, SignerBackend, StorageError, StorageResult, UrlSigner};
use std::sync::Mutex;

/// Signer double that records every request and returns a canned result.
pub struct RecordingSigner {
    calls: Mutex<Vec<PresignRequest>>,
    outcome: Result<String, String>,
}

impl RecordingSigner {
    pub fn returning(url: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Ok(url.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Err(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<PresignRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlSigner for RecordingSigner {
    async fn presigned_put_url(&self, request: &PresignRequest) -> StorageResult<String> {
        self.calls.lock().unwrap().push(request.clone());
        self.outcome.clone().map_err(StorageError::Presign)
    }

    fn backend_type(&self) -> SignerBackend {
        SignerBackend::AwsSdk
    }
}
