//! Upload workflow state machine.
//!
//! ```text
//! Idle ──select──▶ FileChosen ──upload──▶ RequestingUrl ──grant──▶ Uploading ──2xx──▶ Succeeded
//!                      ▲                        │                      │                 │
//!                      └──────── upload ─── Failed ◀──── error ────────┘        reset ──▶ Idle
//! ```
//!
//! Exactly one asynchronous operation is outstanding while in `RequestingUrl` or
//! `Uploading`; every other state is at rest.

use crate::error::{InvalidTransition, UploadError};
use crate::file::SelectedFile;
use parcel_core::SignedUrlGrant;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    FileChosen(SelectedFile),
    RequestingUrl(SelectedFile),
    Uploading {
        file: SelectedFile,
        grant: SignedUrlGrant,
        percent: u8,
    },
    Succeeded {
        file_name: String,
    },
    Failed {
        file: SelectedFile,
        error: UploadError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    FileSelected(Option<SelectedFile>),
    UploadRequested,
    GrantReceived(SignedUrlGrant),
    GrantFailed(UploadError),
    /// Cumulative bytes handed to the transport out of `total`
    Progress { sent: u64, total: u64 },
    TransferSucceeded,
    TransferFailed(UploadError),
    Reset,
}

impl UploadEvent {
    fn name(&self) -> &'static str {
        match self {
            UploadEvent::FileSelected(_) => "FileSelected",
            UploadEvent::UploadRequested => "UploadRequested",
            UploadEvent::GrantReceived(_) => "GrantReceived",
            UploadEvent::GrantFailed(_) => "GrantFailed",
            UploadEvent::Progress { .. } => "Progress",
            UploadEvent::TransferSucceeded => "TransferSucceeded",
            UploadEvent::TransferFailed(_) => "TransferFailed",
            UploadEvent::Reset => "Reset",
        }
    }
}

/// Whole percent of `sent` out of `total`, rounded down and capped at 100.
pub fn percent_of(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = (u128::from(sent) * 100) / u128::from(total);
    percent.min(100) as u8
}

impl UploadState {
    pub fn name(&self) -> &'static str {
        match self {
            UploadState::Idle => "Idle",
            UploadState::FileChosen(_) => "FileChosen",
            UploadState::RequestingUrl(_) => "RequestingUrl",
            UploadState::Uploading { .. } => "Uploading",
            UploadState::Succeeded { .. } => "Succeeded",
            UploadState::Failed { .. } => "Failed",
        }
    }

    /// True while a grant request or a transfer is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            UploadState::RequestingUrl(_) | UploadState::Uploading { .. }
        )
    }

    /// File that an upload would send, if any.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            UploadState::FileChosen(file)
            | UploadState::RequestingUrl(file)
            | UploadState::Uploading { file, .. }
            | UploadState::Failed { file, .. } => Some(file),
            UploadState::Idle | UploadState::Succeeded { .. } => None,
        }
    }

    /// Progress of the transfer in flight, if any.
    pub fn percent(&self) -> Option<u8> {
        match self {
            UploadState::Uploading { percent, .. } => Some(*percent),
            _ => None,
        }
    }

    /// Apply `event`. On an invalid pair the state is left unchanged.
    pub fn apply(&mut self, event: UploadEvent) -> Result<(), InvalidTransition> {
        use UploadEvent as E;
        use UploadState as S;

        let current = std::mem::take(self);
        let next = match (current, event) {
            (
                S::Idle | S::FileChosen(_) | S::Succeeded { .. } | S::Failed { .. },
                E::FileSelected(selection),
            ) => match selection {
                Some(file) => S::FileChosen(file),
                None => S::Idle,
            },

            (S::FileChosen(file) | S::Failed { file, .. }, E::UploadRequested) => {
                S::RequestingUrl(file)
            }

            (S::RequestingUrl(file), E::GrantReceived(grant)) => S::Uploading {
                file,
                grant,
                percent: 0,
            },
            (S::RequestingUrl(file), E::GrantFailed(error)) => S::Failed { file, error },

            (
                S::Uploading {
                    file,
                    grant,
                    percent,
                },
                E::Progress { sent, total },
            ) => S::Uploading {
                file,
                grant,
                percent: percent.max(percent_of(sent, total)),
            },
            (S::Uploading { file, .. }, E::TransferSucceeded) => S::Succeeded {
                file_name: file.name().to_string(),
            },
            (S::Uploading { file, .. }, E::TransferFailed(error)) => S::Failed { file, error },

            (S::Succeeded { .. }, E::Reset) => S::Idle,

            (current, event) => {
                let err = InvalidTransition {
                    state: current.name(),
                    event: event.name(),
                };
                *self = current;
                return Err(err);
            }
        };

        *self = next;
        Ok(())
    }
}
