use crate::error::AppError;
use async_stream::stream;
use futures::StreamExt;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::path::Path;
use tokio::sync::mpsc;
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

/// Progress events are integer percentages, 0 to 100.
pub type ProgressSender = mpsc::UnboundedSender<u8>;

/// Client for the storage side of the flow: a single PUT of the raw file
/// bytes against a pre-signed URL.
pub struct TransferClient {
    http: reqwest::Client,
    chunk_size: usize,
}

impl TransferClient {
    pub fn new(http: reqwest::Client, chunk_size: usize) -> Self {
        Self { http, chunk_size }
    }

    /// PUTs the file at `path` to a pre-signed URL.
    ///
    /// Progress is reported once per body chunk as it is handed to the
    /// transport: values never decrease, and the final `100` is sent before
    /// this call resolves successfully. A zero-length body reports nothing,
    /// since no meaningful percentage exists. Any 2xx status is success; a
    /// rejection and a transport failure both map to [`AppError::Upload`],
    /// distinguished only by message text.
    pub async fn put_file(
        &self,
        upload_url: &str,
        content_type: &str,
        path: &Path,
        progress: ProgressSender,
    ) -> Result<(), AppError> {
        let file = tokio::fs::File::open(path).await?;
        let total = file.metadata().await?.len();
        let chunk_size = self.chunk_size;

        let body = stream! {
            let mut reader = ReaderStream::with_capacity(file, chunk_size);
            let mut loaded: u64 = 0;
            while let Some(chunk) = reader.next().await {
                if let Ok(bytes) = &chunk {
                    loaded += bytes.len() as u64;
                    if total > 0 {
                        let percent = ((loaded as f64 / total as f64) * 100.0).round() as u8;
                        let _ = progress.send(percent);
                    }
                }
                yield chunk;
            }
        };

        let response = self
            .http
            .put(upload_url)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, total)
            .body(reqwest::Body::wrap_stream(body))
            .send()
            .await
            .map_err(|e| {
                warn!("Storage PUT transport failure: {e}");
                AppError::Upload("Network error occurred".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Storage PUT rejected with status {status}");
            return Err(AppError::Upload(format!("HTTP Error: {}", status.as_u16())));
        }

        debug!("Uploaded {total} bytes to storage");
        Ok(())
    }
}
