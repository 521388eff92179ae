use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use parcel_core::constants::{HEADER_ALLOW_CREDENTIALS_VALUE, HEADER_ALLOW_ORIGIN_VALUE};

/// Cross-origin headers middleware
/// Stamps `Access-Control-Allow-Origin: *` and `Access-Control-Allow-Credentials: true`
/// on every response, errors and fallbacks included.
///
/// `tower_http::cors::CorsLayer` refuses a wildcard origin combined with credentials, so
/// the headers are inserted directly.
pub async fn cors_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(HEADER_ALLOW_ORIGIN_VALUE),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static(HEADER_ALLOW_CREDENTIALS_VALUE),
    );

    response
}
