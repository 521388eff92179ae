//! Upload client for Parcel.
//!
//! Requests a pre-signed PUT URL from the URL-issuing function, then streams the file
//! straight to object storage while reporting progress. The workflow is driven by
//! [`UploadController`], which moves an explicit [`UploadState`] machine and renders an
//! [`UploadPanel`] view model through a [`PanelObserver`] after every change.

pub mod client;
pub mod controller;
pub mod error;
pub mod file;
pub mod panel;
pub mod state;

pub use client::UploadClient;
pub use controller::UploadController;
pub use error::{InvalidTransition, UploadError};
pub use file::SelectedFile;
pub use panel::{PanelObserver, RecordingObserver, StatusKind, StatusMessage, UploadPanel};
pub use state::{UploadEvent, UploadState};
