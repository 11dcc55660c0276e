//! Invoice and document upload.
//!
//! Each file in an [`UploadBatch`] moves through [`UploadState`] as its request
//! progresses. Files upload concurrently and fail independently.

mod api;
mod state;
mod wire;

pub use state::{UploadEvent, UploadState};
pub use wire::{ExtractedField, UploadReceipt};

use futures::stream::{FuturesUnordered, StreamExt};
use std::path::Path;
use tokio::sync::mpsc;

use crate::core::{EntryId, VsmeClient, VsmeError};

/// File extensions the extraction service accepts.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

/// Lower-cased extension of `name`, if it is one of [`ALLOWED_EXTENSIONS`].
fn allowed_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Human-readable size: bytes, KB or MB with one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// One file in an upload batch.
#[derive(Debug, Clone)]
pub struct UploadJob {
    pub id: EntryId,
    pub name: String,
    pub size: u64,
    pub state: UploadState,
    data: Vec<u8>,
}

impl UploadJob {
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// The file list of an upload session.
#[derive(Debug, Default)]
pub struct UploadBatch {
    jobs: Vec<UploadJob>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an in-memory file.
    pub fn add(&mut self, name: impl Into<String>, data: Vec<u8>) -> EntryId {
        let id = EntryId::generate();
        self.jobs.push(UploadJob {
            id: id.clone(),
            name: name.into(),
            size: data.len() as u64,
            state: UploadState::Queued,
            data,
        });
        id
    }

    /// Read a file from disk and queue it under its file name.
    ///
    /// # Errors
    ///
    /// Returns `VsmeError::Io` if the file cannot be read and
    /// `VsmeError::InvalidParams` if the path has no file name.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<EntryId, VsmeError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| VsmeError::InvalidParams(format!("no file name in {}", path.display())))?
            .to_string();
        let data = std::fs::read(path)?;
        Ok(self.add(name, data))
    }

    /// Drop a file from the list; no-op if absent.
    pub fn remove(&mut self, id: &EntryId) {
        self.jobs.retain(|j| &j.id != id);
    }

    pub fn jobs(&self) -> &[UploadJob] {
        &self.jobs
    }

    pub fn job(&self, id: &EntryId) -> Option<&UploadJob> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Upload every queued file. Returns how many were attempted.
    pub async fn run(&mut self, client: &VsmeClient) -> usize {
        self.run_with(client, |_| {}).await
    }

    /// As [`UploadBatch::run`], calling `observe` after every state change.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(files = self.jobs.len())))]
    pub async fn run_with<F>(&mut self, client: &VsmeClient, mut observe: F) -> usize
    where
        F: FnMut(&UploadJob),
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<(EntryId, UploadEvent)>();
        let mut uploads = FuturesUnordered::new();
        let mut attempted = 0;

        for job in self.jobs.iter_mut().filter(|j| j.state == UploadState::Queued) {
            attempted += 1;
            let Some(ext) = allowed_extension(&job.name) else {
                #[cfg(feature = "tracing")]
                tracing::warn!(file = %job.name, "unsupported file type");
                job.state.apply(UploadEvent::Failed(format!(
                    "File type not supported. Allowed: {}",
                    ALLOWED_EXTENSIONS.join(", ")
                )));
                observe(job);
                continue;
            };

            let tx = tx.clone();
            let id = job.id.clone();
            let name = job.name.clone();
            let data = job.data.clone();
            uploads.push(async move {
                let outcome = api::upload_invoice(client, id.clone(), &name, &ext, data, tx.clone()).await;
                let event = match outcome {
                    Ok(receipt) => UploadEvent::Finished(receipt),
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(file = %name, error = %e, "upload failed");
                        UploadEvent::Failed(e.to_string())
                    }
                };
                let _ = tx.send((id, event));
            });
        }
        drop(tx);

        let drive = async { while uploads.next().await.is_some() {} };
        let apply = async {
            while let Some((id, event)) = rx.recv().await {
                if let Some(job) = self.jobs.iter_mut().find(|j| j.id == id)
                    && job.state.apply(event)
                {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(file = %job.name, state = job.state.label(), "upload state changed");
                    observe(job);
                }
            }
        };
        tokio::join!(drive, apply);

        attempted
    }
}
