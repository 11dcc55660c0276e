use serde::Serialize;

use super::wire::UploadReceipt;

/// Lifecycle of one uploaded file.
///
/// `Queued → Uploading { progress } → Processing → Complete | Error`.
/// `Complete` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum UploadState {
    #[default]
    Queued,
    Uploading {
        /// 0–100, never decreasing.
        progress: u8,
    },
    /// Body fully sent; waiting for the server's extraction result.
    Processing,
    Complete(UploadReceipt),
    Error(String),
}

/// What happened to an upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// Percentage of the body handed to the transport.
    Progress(u8),
    /// The whole body was sent.
    Sent,
    Finished(UploadReceipt),
    Failed(String),
}

impl UploadState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::Error(_))
    }

    /// Upload progress as shown to a user; 100 once the body is sent.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        match self {
            Self::Queued => 0,
            Self::Uploading { progress } => *progress,
            Self::Processing | Self::Complete(_) => 100,
            Self::Error(_) => 0,
        }
    }

    /// Short label of the current stage.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Uploading { .. } => "uploading",
            Self::Processing => "processing",
            Self::Complete(_) => "complete",
            Self::Error(_) => "error",
        }
    }

    /// Advance the state by one event. Returns `false` if the event was ignored.
    ///
    /// Events after a terminal state are ignored, as are progress values that
    /// would move the bar backwards and progress reported after the body was sent.
    pub fn apply(&mut self, event: UploadEvent) -> bool {
        if self.is_terminal() {
            return false;
        }
        let next = match (&*self, event) {
            (Self::Queued, UploadEvent::Progress(p)) => Self::Uploading {
                progress: p.min(100),
            },
            (Self::Uploading { progress }, UploadEvent::Progress(p)) => {
                let p = p.min(100);
                if p <= *progress {
                    return false;
                }
                Self::Uploading { progress: p }
            }
            (Self::Processing, UploadEvent::Progress(_) | UploadEvent::Sent) => return false,
            (_, UploadEvent::Sent) => Self::Processing,
            (_, UploadEvent::Finished(receipt)) => Self::Complete(receipt),
            (_, UploadEvent::Failed(reason)) => Self::Error(reason),
            // Complete/Error were handled above.
            (_, UploadEvent::Progress(_)) => return false,
        };
        *self = next;
        true
    }
}
