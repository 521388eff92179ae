//! Data models for the application
//!
//! Wire types exchanged between the upload client and the URL-issuing function.

pub mod upload;

pub use upload::*;
