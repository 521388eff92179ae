//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p parcel-api`.

pub mod signer;

use axum_test::TestServer;
use parcel_api::setup::routes;
use parcel_api::state::AppState;
use parcel_core::{FixedClock, KeyPolicy};
use signer::RecordingSigner;
use std::sync::Arc;

pub const TEST_BUCKET: &str = "test-uploads-bucket";
pub const TEST_TIMESTAMP: i64 = 1234567890;
pub const MOCK_UPLOAD_URL: &str = "https://example.com/presigned-url";

/// Test application: server plus handles on the injected fakes.
pub struct TestApp {
    pub server: TestServer,
    pub signer: Arc<RecordingSigner>,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Options for building a test app
pub struct TestAppOptions {
    pub signer: RecordingSigner,
    pub bucket: Option<&'static str>,
    pub key_policy: KeyPolicy,
    pub function_mode: bool,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            signer: RecordingSigner::returning(MOCK_UPLOAD_URL),
            bucket: Some(TEST_BUCKET),
            key_policy: KeyPolicy::Timestamp,
            function_mode: false,
        }
    }
}

/// Server-mode app with a working signer, a bucket and the clock at `TEST_TIMESTAMP`.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(TestAppOptions::default())
}

pub fn setup_test_app_with(options: TestAppOptions) -> TestApp {
    let signer = Arc::new(options.signer);
    let clock = Arc::new(FixedClock::new(TEST_TIMESTAMP));

    let state = Arc::new(AppState::new(
        signer.clone(),
        clock.clone(),
        options.bucket.map(String::from),
        options.key_policy,
    ));

    let router = if options.function_mode {
        routes::function_router(state)
    } else {
        routes::server_router(state)
    };

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        signer,
        clock,
    }
}
