//! End-to-end upload flow against mock servers.
//!
//! Run with: `cargo test -p parcel-client --test upload_flow_test`

use parcel_client::{
    RecordingObserver, SelectedFile, StatusKind, UploadClient, UploadController, UploadError,
    UploadState,
};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FILE_SIZE: usize = 256 * 1024;

async fn write_file(dir: &TempDir, name: &str) -> SelectedFile {
    let file_path = dir.path().join(name);
    let contents: Vec<u8> = (0..FILE_SIZE).map(|i| (i % 251) as u8).collect();
    tokio::fs::write(&file_path, contents).await.unwrap();
    SelectedFile::from_path(Path::new(&file_path)).await.unwrap()
}

async fn controller_for(server: &MockServer) -> UploadController<RecordingObserver> {
    let client = UploadClient::new(format!("{}/upload-url", server.uri())).unwrap();
    UploadController::new(client, RecordingObserver::default())
}

async fn mount_grant(server: &MockServer, file_name: &str, file_type: &str) {
    Mock::given(method("POST"))
        .and(path("/upload-url"))
        .and(body_json(json!({ "fileName": file_name, "fileType": file_type })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploadUrl": format!("{}/bucket/1234567890-{}", server.uri(), file_name),
            "fileKey": format!("1234567890-{}", file_name),
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_successful_upload_reports_progress_and_resets() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "test-file.jpg").await;

    mount_grant(&server, "test-file.jpg", "image/jpeg").await;
    Mock::given(method("PUT"))
        .and(path("/bucket/1234567890-test-file.jpg"))
        .and(header("content-type", "image/jpeg"))
        .and(header("content-length", FILE_SIZE.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file)).unwrap();
    assert!(controller.panel().upload_enabled);
    assert_eq!(controller.panel().file_label, "test-file.jpg");

    let key = controller.upload().await.unwrap();
    assert_eq!(key, "1234567890-test-file.jpg");
    assert_eq!(controller.state(), &UploadState::Idle);

    let panel = controller.panel();
    assert_eq!(panel.file_label, "No file chosen");
    assert!(!panel.upload_enabled);
    assert_eq!(panel.progress_percent, 100);
    let status = panel.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, "File \"test-file.jpg\" uploaded successfully!");

    let observer = controller.into_observer();
    let upload_frames: Vec<u8> = observer
        .frames
        .iter()
        .skip_while(|f| !f.progress_visible)
        .map(|f| f.progress_percent)
        .collect();
    assert_eq!(upload_frames.first(), Some(&0));
    assert_eq!(upload_frames.last(), Some(&100));
    assert!(upload_frames.windows(2).all(|w| w[0] <= w[1]));

    let received = server.received_requests().await.unwrap();
    let put = received.iter().find(|r| r.method.as_str() == "PUT").unwrap();
    assert_eq!(put.body.len(), FILE_SIZE);
}

#[tokio::test]
async fn test_grant_failure_keeps_selection() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "notes.txt").await;

    Mock::given(method("POST"))
        .and(path("/upload-url"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(r#"{"error":"Failed to generate pre-signed URL"}"#),
        )
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file.clone())).unwrap();

    let err = controller.upload().await.unwrap_err();
    assert!(matches!(err, UploadError::GrantRejected(_)));
    assert_eq!(controller.state().selected_file(), Some(&file));

    let panel = controller.panel();
    assert_eq!(panel.file_label, "notes.txt");
    assert!(panel.upload_enabled);
    let status = panel.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(
        status.text,
        r#"Upload failed: Failed to get pre-signed URL: {"error":"Failed to generate pre-signed URL"}"#
    );

    let received = server.received_requests().await.unwrap();
    assert!(received.iter().all(|r| r.method.as_str() != "PUT"));
}

#[tokio::test]
async fn test_rejected_put_reports_status_and_allows_retry() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "test-file.jpg").await;

    Mock::given(method("POST"))
        .and(path("/upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploadUrl": format!("{}/bucket/key", server.uri()),
            "fileKey": "1234567890-test-file.jpg",
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/bucket/key"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file)).unwrap();

    let err = controller.upload().await.unwrap_err();
    assert_eq!(err, UploadError::TransferRejected(403));
    assert!(matches!(controller.state(), UploadState::Failed { .. }));
    assert_eq!(
        controller.panel().status.clone().unwrap().text,
        "Upload failed: HTTP Error: 403"
    );
    assert!(controller.panel().upload_enabled);

    // Retry goes back through the grant request.
    let err = controller.upload().await.unwrap_err();
    assert_eq!(err, UploadError::TransferRejected(403));
    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received
            .iter()
            .filter(|r| r.method.as_str() == "POST")
            .count(),
        2
    );
}

#[tokio::test]
async fn test_unparseable_grant_is_reported() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "a.bin").await;

    Mock::given(method("POST"))
        .and(path("/upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file)).unwrap();

    let err = controller.upload().await.unwrap_err();
    assert_eq!(err, UploadError::InvalidGrant);
}

#[tokio::test]
async fn test_unreachable_function_is_a_network_error() {
    let endpoint = closed_port_url("/upload-url");

    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "a.bin").await;

    let client = UploadClient::new(endpoint).unwrap();
    let mut controller = UploadController::new(client, RecordingObserver::default());
    controller.select_file(Some(file)).unwrap();

    let err = controller.upload().await.unwrap_err();
    assert_eq!(err, UploadError::Network);
    assert_eq!(
        controller.panel().status.clone().unwrap().text,
        "Upload failed: Network error occurred"
    );
}

fn closed_port_url(path: &str) -> String {
    // Nothing listens on a port that was bound and released.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}{}", listener.local_addr().unwrap(), path);
    drop(listener);
    url
}

#[tokio::test]
async fn test_unreachable_object_store_fails_transfer() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "test-file.jpg").await;

    Mock::given(method("POST"))
        .and(path("/upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploadUrl": closed_port_url("/bucket/key"),
            "fileKey": "1234567890-test-file.jpg",
        })))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file.clone())).unwrap();

    let err = controller.upload().await.unwrap_err();
    assert_eq!(err, UploadError::Network);
    assert!(matches!(controller.state(), UploadState::Failed { .. }));
    assert_eq!(controller.state().selected_file(), Some(&file));

    let panel = controller.panel();
    assert!(panel.upload_enabled);
    assert_eq!(panel.file_label, "test-file.jpg");
    assert_eq!(
        panel.status.clone().unwrap().text,
        "Upload failed: Network error occurred"
    );
}

#[tokio::test]
async fn test_file_removed_after_selection_keeps_selection() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "gone.bin").await;

    Mock::given(method("POST"))
        .and(path("/upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploadUrl": format!("{}/bucket/key", server.uri()),
            "fileKey": "1234567890-gone.bin",
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file.clone())).unwrap();
    tokio::fs::remove_file(file.path()).await.unwrap();

    let err = controller.upload().await.unwrap_err();
    assert!(matches!(err, UploadError::File(_)));
    assert!(matches!(controller.state(), UploadState::Failed { .. }));
    assert_eq!(controller.state().selected_file(), Some(&file));
    assert!(controller.panel().upload_enabled);
    assert!(controller
        .panel()
        .status
        .clone()
        .unwrap()
        .text
        .starts_with("Upload failed: Cannot read file: "));
}

#[tokio::test]
async fn test_upload_without_selection_prompts_user() {
    let server = MockServer::start().await;
    let mut controller = controller_for(&server).await;

    let err = controller.upload().await.unwrap_err();
    assert_eq!(err, UploadError::NoFileSelected);

    let status = controller.panel().status.clone().unwrap();
    assert_eq!(status.text, "Please select a file first.");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clearing_selection_disables_upload() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "a.bin").await;

    let mut controller = controller_for(&server).await;
    controller.select_file(Some(file)).unwrap();
    controller.select_file(None).unwrap();

    assert_eq!(controller.state(), &UploadState::Idle);
    assert_eq!(controller.panel().file_label, "No file chosen");
    assert!(!controller.panel().upload_enabled);
}
