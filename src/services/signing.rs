use crate::error::AppError;
use crate::models::{PresignErrorBody, PresignRequest, PresignResponse};
use tracing::{debug, warn};

/// Message used when the signing endpoint fails without a usable error body.
const GENERIC_SIGNING_ERROR: &str = "Failed to get pre-signed URL";

/// Client for the external signing endpoint that issues pre-signed upload
/// URLs. One POST per upload attempt, nothing else.
pub struct SigningClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SigningClient {
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// Requests a pre-signed PUT URL for one file.
    ///
    /// A non-success status maps to [`AppError::Signing`] carrying the
    /// response body's `error` field when present, else a generic message.
    pub async fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<PresignResponse, AppError> {
        let request = PresignRequest {
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Signing request could not be sent: {e}");
                AppError::Signing(GENERIC_SIGNING_ERROR.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<PresignErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_SIGNING_ERROR.to_string());
            warn!("Signing endpoint returned {status}: {message}");
            return Err(AppError::Signing(message));
        }

        let presigned = response.json::<PresignResponse>().await.map_err(|e| {
            warn!("Signing response was not valid JSON: {e}");
            AppError::Signing(GENERIC_SIGNING_ERROR.to_string())
        })?;

        debug!("Received pre-signed URL for key {}", presigned.key);
        Ok(presigned)
    }
}
