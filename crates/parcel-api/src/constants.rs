//! API constants

/// Route serving upload URL grants in server mode
pub const UPLOAD_URL_PATH: &str = "/upload-url";

/// Liveness probe route in server mode
pub const HEALTH_PATH: &str = "/health";

/// Methods advertised in CORS preflight responses
pub const PREFLIGHT_ALLOW_METHODS: &str = "POST, OPTIONS";

/// Request headers advertised in CORS preflight responses
pub const PREFLIGHT_ALLOW_HEADERS: &str = "Content-Type";

pub const DEFAULT_LOG_FILTER: &str = "parcel=debug,tower_http=debug";
