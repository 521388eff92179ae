use crate::constants::{PREFLIGHT_ALLOW_HEADERS, PREFLIGHT_ALLOW_METHODS};
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{rejection::BytesRejection, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
        StatusCode,
    },
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use parcel_core::constants::PRESIGNED_URL_EXPIRY_SECS;
use parcel_core::{generate_file_key, AppError, SignedUrlGrant, UploadRequest};
use parcel_storage::PresignRequest;
use std::sync::Arc;
use std::time::Duration;

/// Issue a pre-signed PUT URL and its storage key
///
/// The body is taken raw rather than through `Json<T>` so that unparseable JSON is an
/// internal failure (500) while missing fields are a validation failure (400). A body
/// that cannot be buffered (over the default limit) is also an internal failure.
#[tracing::instrument(
    skip(state, body),
    fields(
        body_len = body.as_ref().map_or(0, |b| b.len()),
        operation = "issue_upload_url"
    )
)]
pub async fn issue_upload_url(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let body = body.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
    let request = UploadRequest::from_json_slice(&body)?;

    let bucket = state
        .uploads_bucket
        .clone()
        .ok_or_else(|| AppError::Configuration("UPLOADS_BUCKET is not set".to_string()))?;

    let file_key = generate_file_key(
        state.clock.now_millis(),
        &request.file_name,
        state.key_policy,
    );

    let presign = PresignRequest {
        bucket,
        key: file_key.clone(),
        content_type: request.file_type,
        expires_in: Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS),
    };

    let upload_url = state.signer.presigned_put_url(&presign).await?;

    tracing::info!(
        file_key = %file_key,
        content_type = %presign.content_type,
        backend = %state.signer.backend_type(),
        "Issued pre-signed upload URL"
    );

    Ok((
        StatusCode::OK,
        Json(SignedUrlGrant {
            upload_url,
            file_key,
        }),
    ))
}

/// CORS preflight for the upload endpoint
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, PREFLIGHT_ALLOW_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, PREFLIGHT_ALLOW_HEADERS),
        ],
    )
}
