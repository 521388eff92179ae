use crate::client::UploadClient;
use crate::error::UploadError;
use crate::file::SelectedFile;
use crate::panel::{PanelObserver, UploadPanel};
use crate::state::{UploadEvent, UploadState};
use tokio::sync::mpsc;

/// Drives one upload widget: owns the state machine and the panel, and renders the panel
/// through the observer after every change.
///
/// `upload` takes `&mut self` for its whole duration, so a controller never has two
/// operations in flight.
pub struct UploadController<O: PanelObserver> {
    client: UploadClient,
    state: UploadState,
    panel: UploadPanel,
    observer: O,
}

impl<O: PanelObserver> UploadController<O> {
    pub fn new(client: UploadClient, observer: O) -> Self {
        let mut controller = Self {
            client,
            state: UploadState::default(),
            panel: UploadPanel::default(),
            observer,
        };
        controller.render();
        controller
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn panel(&self) -> &UploadPanel {
        &self.panel
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    fn render(&mut self) {
        self.observer.render(&self.panel);
    }

    fn transition(&mut self, event: UploadEvent) -> Result<(), UploadError> {
        self.state.apply(event).map_err(|e| {
            tracing::error!(error = %e, "Rejected state transition");
            UploadError::from(e)
        })
    }

    /// Select a file, or clear the selection with `None`.
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> Result<(), UploadError> {
        match &file {
            Some(file) => self.panel.show_selection(file),
            None => self.panel.clear_selection(),
        }
        self.transition(UploadEvent::FileSelected(file))?;
        self.render();
        Ok(())
    }

    /// Upload the selected file. Returns the storage key on success.
    ///
    /// On failure the selection is kept and upload re-enabled.
    pub async fn upload(&mut self) -> Result<String, UploadError> {
        let Some(file) = self.state.selected_file().cloned() else {
            let error = UploadError::NoFileSelected;
            self.panel.show_error(error.to_string());
            self.render();
            return Err(error);
        };

        self.transition(UploadEvent::UploadRequested)?;
        self.panel.begin_upload();
        self.render();

        let grant = match self.client.request_grant(&file).await {
            Ok(grant) => grant,
            Err(error) => {
                self.transition(UploadEvent::GrantFailed(error.clone()))?;
                return Err(self.fail(error));
            }
        };
        self.transition(UploadEvent::GrantReceived(grant.clone()))?;

        let total = file.size();
        let client = self.client.clone();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let result = {
            let transfer = client.put_object(&file, &grant, tx);
            tokio::pin!(transfer);

            loop {
                tokio::select! {
                    Some(sent) = rx.recv() => self.on_progress(sent, total)?,
                    result = &mut transfer => break result,
                }
            }
        };
        while let Ok(sent) = rx.try_recv() {
            self.on_progress(sent, total)?;
        }

        match result {
            Ok(()) => {
                self.transition(UploadEvent::TransferSucceeded)?;
                self.panel.set_progress(100);
                self.panel.show_success(file.name());
                self.transition(UploadEvent::Reset)?;
                self.panel.clear_selection();
                self.render();
                tracing::info!(file_key = %grant.file_key, "Upload complete");
                Ok(grant.file_key)
            }
            Err(error) => {
                self.transition(UploadEvent::TransferFailed(error.clone()))?;
                Err(self.fail(error))
            }
        }
    }

    fn on_progress(&mut self, sent: u64, total: u64) -> Result<(), UploadError> {
        self.transition(UploadEvent::Progress { sent, total })?;
        if let Some(percent) = self.state.percent() {
            if percent != self.panel.progress_percent {
                self.panel.set_progress(percent);
                self.render();
            }
        }
        Ok(())
    }

    fn fail(&mut self, error: UploadError) -> UploadError {
        tracing::warn!(error = %error, "Upload failed");
        self.panel.show_failure(&error);
        self.render();
        error
    }
}
