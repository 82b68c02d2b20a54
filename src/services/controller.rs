use crate::config::UploadConfig;
use crate::error::AppError;
use crate::models::UploadedFileRecord;
use crate::services::history::HistoryStore;
use crate::services::signing::SigningClient;
use crate::services::transfer::{ProgressSender, TransferClient};
use crate::utils::format::{file_icon, format_size};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

/// Phases of one upload attempt.
///
/// `Idle → RequestingUrl → Uploading → Succeeded | Failed → Idle`. Exactly
/// one upload may be in flight; the trigger is inert while one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    RequestingUrl,
    Uploading,
    Succeeded,
    Failed,
}

/// Orchestrates the three-step flow (request signed URL, stream bytes to
/// storage, record completion) and renders the history list.
pub struct UploadController {
    signing: SigningClient,
    transfer: TransferClient,
    store: HistoryStore,
    files: Vec<UploadedFileRecord>,
    state: UploadState,
}

impl UploadController {
    pub fn new(config: &UploadConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::new();
        let store = HistoryStore::new(&config.history_dir);
        let files = store.load()?;

        Ok(Self {
            signing: SigningClient::new(http.clone(), config.api_endpoint.clone()),
            transfer: TransferClient::new(http, config.chunk_size),
            store,
            files,
            state: UploadState::Idle,
        })
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn files(&self) -> &[UploadedFileRecord] {
        &self.files
    }

    /// Runs one complete upload attempt.
    ///
    /// Returns `None` without doing anything when another upload is in
    /// flight (no queuing). Whatever the outcome, the controller is back in
    /// `Idle` when this returns and the next attempt may start.
    pub async fn upload(
        &mut self,
        path: &Path,
        content_type: &str,
        progress: ProgressSender,
    ) -> Option<Result<UploadedFileRecord, AppError>> {
        if self.state != UploadState::Idle {
            warn!("Upload already in flight, ignoring trigger");
            return None;
        }

        let outcome = self.run_attempt(path, content_type, progress).await;
        self.state = terminal_state(&outcome);
        tracing::debug!("Upload attempt finished: {:?}", self.state);
        // The terminal state collapses straight back to idle: the trigger is
        // re-enabled unconditionally, success or failure.
        self.state = UploadState::Idle;
        Some(outcome)
    }

    async fn run_attempt(
        &mut self,
        path: &Path,
        content_type: &str,
        progress: ProgressSender,
    ) -> Result<UploadedFileRecord, AppError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("not a file path: {}", path.display()),
                ))
            })?;

        self.state = UploadState::RequestingUrl;
        info!("Generating pre-signed URL for {name}...");
        let presigned = self.signing.request_upload_url(&name, content_type).await?;

        self.state = UploadState::Uploading;
        let bytes = tokio::fs::metadata(path).await?.len();
        self.transfer
            .put_file(&presigned.upload_url, content_type, path, progress)
            .await?;

        // Records are persisted only for completed uploads; a failure above
        // leaves the history untouched.
        let record = UploadedFileRecord {
            name,
            key: presigned.key,
            size: format_size(bytes),
            content_type: content_type.to_string(),
            uploaded_at: Utc::now(),
        };
        self.files.push(record.clone());
        self.store.save(&self.files)?;

        info!("✅ File uploaded successfully ({})", record.size);
        Ok(record)
    }

    /// Renders the history list.
    ///
    /// Every render re-sorts the full in-memory list by upload time, newest
    /// first; the printed indices are the ones `delete` expects.
    pub fn render(&mut self) -> String {
        if self.files.is_empty() {
            return "No files uploaded yet".to_string();
        }

        self.sort_for_display();
        let mut out = String::new();
        for (index, file) in self.files.iter().enumerate() {
            out.push_str(&format!(
                "[{index}] {} {}  {} • {}\n",
                file_icon(&file.content_type),
                file.name,
                file.size,
                file.uploaded_at.with_timezone(&chrono::Local).format("%c"),
            ));
        }
        out
    }

    /// Deletes the record at the given display index and persists.
    ///
    /// Returns the removed record, or `None` when the index is out of range.
    pub fn delete(&mut self, index: usize) -> Result<Option<UploadedFileRecord>, AppError> {
        self.sort_for_display();
        if index >= self.files.len() {
            return Ok(None);
        }
        let removed = self.files.remove(index);
        self.store.save(&self.files)?;
        info!("🗑️ Removed {} from history", removed.name);
        Ok(Some(removed))
    }

    // Stable sort, so records sharing a timestamp keep their relative order.
    fn sort_for_display(&mut self) {
        self.files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    }

    #[cfg(test)]
    fn set_state(&mut self, state: UploadState) {
        self.state = state;
    }
}

/// Maps an attempt outcome to its terminal state.
fn terminal_state<T, E>(outcome: &Result<T, E>) -> UploadState {
    match outcome {
        Ok(_) => UploadState::Succeeded,
        Err(_) => UploadState::Failed,
    }
}
