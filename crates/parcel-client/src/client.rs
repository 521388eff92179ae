//! HTTP side of an upload: the grant request and the direct PUT.

use crate::error::UploadError;
use crate::file::SelectedFile;
use anyhow::{Context, Result};
use futures::TryStreamExt;
use parcel_core::{SignedUrlGrant, UploadRequest};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::io::ReaderStream;

/// HTTP client for the URL-issuing function and the object store.
///
/// No request timeout is set; the grant's own expiry is the only time bound.
#[derive(Clone, Debug)]
pub struct UploadClient {
    client: Client,
    endpoint: String,
}

impl UploadClient {
    /// `endpoint` is the full URL of the URL-issuing function.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Ask the function for a pre-signed PUT URL for `file`.
    #[tracing::instrument(skip(self, file), fields(file_name = %file.name()))]
    pub async fn request_grant(&self, file: &SelectedFile) -> Result<SignedUrlGrant, UploadError> {
        let body = UploadRequest::new(file.name(), file.content_type());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Grant request could not be sent");
                UploadError::Network
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, body = %error_text, "Grant request rejected");
            return Err(UploadError::GrantRejected(error_text));
        }

        response.json::<SignedUrlGrant>().await.map_err(|e| {
            tracing::warn!(error = %e, "Grant response did not parse");
            UploadError::InvalidGrant
        })
    }

    /// PUT the file's bytes to `grant.upload_url`.
    ///
    /// The file is streamed from disk. After each chunk is handed to the transport the
    /// cumulative byte count is sent on `progress`; the sender is dropped when the body
    /// is finished, which closes the channel.
    #[tracing::instrument(skip(self, file, grant, progress), fields(file_key = %grant.file_key))]
    pub async fn put_object(
        &self,
        file: &SelectedFile,
        grant: &SignedUrlGrant,
        progress: UnboundedSender<u64>,
    ) -> Result<(), UploadError> {
        let handle = tokio::fs::File::open(file.path())
            .await
            .map_err(|e| UploadError::File(format!("{}: {}", file.path().display(), e)))?;

        self.put_stream(
            handle,
            file.size(),
            file.content_type(),
            &grant.upload_url,
            progress,
        )
        .await
    }

    /// Stream `reader` as the PUT body, declaring `size` bytes.
    ///
    /// A read error mid-body is reported as [`UploadError::Aborted`].
    async fn put_stream<R>(
        &self,
        reader: R,
        size: u64,
        content_type: &str,
        upload_url: &str,
        progress: UnboundedSender<u64>,
    ) -> Result<(), UploadError>
    where
        R: AsyncRead + Send + 'static,
    {
        let read_failed = Arc::new(AtomicBool::new(false));
        let read_failed_flag = read_failed.clone();
        let mut sent: u64 = 0;

        let stream = ReaderStream::new(reader)
            .inspect_ok(move |chunk| {
                sent += chunk.len() as u64;
                // Receiver gone means nobody is watching; the upload continues.
                let _ = progress.send(sent);
            })
            .inspect_err(move |e| {
                tracing::warn!(error = %e, "File read failed mid-transfer");
                read_failed_flag.store(true, Ordering::SeqCst);
            });

        let response = self
            .client
            .put(upload_url)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, size)
            .body(Body::wrap_stream(stream))
            .send()
            .await
            .map_err(|e| {
                if read_failed.load(Ordering::SeqCst) {
                    UploadError::Aborted
                } else {
                    tracing::warn!(error = %e, "Upload request failed");
                    UploadError::Network
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Object store rejected upload");
            return Err(UploadError::TransferRejected(status.as_u16()));
        }

        tracing::debug!(bytes = size, "Upload accepted");
        Ok(())
    }
}
