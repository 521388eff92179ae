//! Parcel API Library
//!
//! The URL-issuing function: handler, CORS middleware and application setup for both the
//! Lambda entry point and the standalone server.

// Module declarations
mod handlers;
mod middleware;
mod telemetry;

// Public modules
pub mod constants;
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
pub use telemetry::init_telemetry;
