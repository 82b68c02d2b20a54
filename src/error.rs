use thiserror::Error;

/// Errors surfaced by the upload flow.
///
/// `Signing` and `Upload` are the two recoverable kinds: each terminates the
/// current attempt only, and the payload is the exact message shown to the
/// user. Recovery is identical for both (back to idle, manual retry).
#[derive(Error, Debug)]
pub enum AppError {
    /// The signing request failed or returned a non-success status.
    #[error("{0}")]
    Signing(String),

    /// The storage PUT was rejected or the transport reported a failure.
    #[error("{0}")]
    Upload(String),

    /// Local file or history-store I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The history blob exists but is not a valid record array.
    #[error("History store is corrupt: {0}")]
    CorruptHistory(#[from] serde_json::Error),
}

impl AppError {
    /// The dismissable status line shown when an upload attempt fails.
    pub fn status_line(&self) -> String {
        format!("Upload failed: {self}")
    }
}
