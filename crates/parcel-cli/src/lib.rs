use parcel_client::{PanelObserver, StatusKind, StatusMessage, UploadPanel};
use std::io::Write;

const BAR_WIDTH: usize = 30;

/// Draw a progress bar like `[#########.....................]  30%`.
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Renders the upload panel on stderr: a bar redrawn in place, then the status line.
#[derive(Debug, Default)]
pub struct TerminalObserver {
    last_percent: Option<u8>,
    last_status: Option<StatusMessage>,
}

impl PanelObserver for TerminalObserver {
    fn render(&mut self, panel: &UploadPanel) {
        let mut stderr = std::io::stderr().lock();

        if panel.progress_visible && self.last_percent != Some(panel.progress_percent) {
            let _ = write!(stderr, "\r{}", progress_bar(panel.progress_percent));
            self.last_percent = Some(panel.progress_percent);
        }

        if panel.status != self.last_status {
            if let Some(status) = &panel.status {
                if self.last_percent.is_some() {
                    let _ = writeln!(stderr);
                }
                let prefix = match status.kind {
                    StatusKind::Success => "ok",
                    StatusKind::Error => "error",
                };
                let _ = writeln!(stderr, "{}: {}", prefix, status.text);
                self.last_percent = None;
            }
            self.last_status = panel.status.clone();
        }

        let _ = stderr.flush();
    }
}


/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
