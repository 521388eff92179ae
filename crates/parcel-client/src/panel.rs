//! View model for an upload widget.

use crate::error::UploadError;
use crate::file::SelectedFile;

pub const NO_FILE_LABEL: &str = "No file chosen";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Everything a front end needs to draw the upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPanel {
    pub file_label: String,
    pub upload_enabled: bool,
    pub progress_visible: bool,
    pub progress_percent: u8,
    pub status: Option<StatusMessage>,
}

impl Default for UploadPanel {
    fn default() -> Self {
        Self {
            file_label: NO_FILE_LABEL.to_string(),
            upload_enabled: false,
            progress_visible: false,
            progress_percent: 0,
            status: None,
        }
    }
}

impl UploadPanel {
    pub fn show_selection(&mut self, file: &SelectedFile) {
        self.file_label = file.name().to_string();
        self.upload_enabled = true;
        self.reset_feedback();
    }

    pub fn clear_selection(&mut self) {
        self.file_label = NO_FILE_LABEL.to_string();
        self.upload_enabled = false;
    }

    /// Grant request started: progress shown at 0%, upload locked.
    pub fn begin_upload(&mut self) {
        self.reset_feedback();
        self.upload_enabled = false;
        self.progress_visible = true;
    }

    pub fn set_progress(&mut self, percent: u8) {
        self.progress_percent = percent.min(100);
    }

    pub fn show_success(&mut self, file_name: &str) {
        self.status = Some(StatusMessage {
            text: format!("File \"{}\" uploaded successfully!", file_name),
            kind: StatusKind::Success,
        });
    }

    /// Upload failed; the selection stays so the user can retry.
    pub fn show_failure(&mut self, error: &UploadError) {
        self.status = Some(StatusMessage {
            text: format!("Upload failed: {}", error),
            kind: StatusKind::Error,
        });
        self.upload_enabled = true;
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    fn reset_feedback(&mut self) {
        self.progress_percent = 0;
        self.status = None;
    }
}

/// Receives the panel after every change.
pub trait PanelObserver {
    fn render(&mut self, panel: &UploadPanel);
}

/// Keeps every rendered frame; useful for tests and replay.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub frames: Vec<UploadPanel>,
}

impl PanelObserver for RecordingObserver {
    fn render(&mut self, panel: &UploadPanel) {
        self.frames.push(panel.clone());
    }
}
