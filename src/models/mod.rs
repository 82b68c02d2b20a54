use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed upload, as persisted in the history blob.
///
/// Field names on disk match the storage schema (`type`, `uploadedAt`), so
/// history written by older clients stays readable. A record exists if and
/// only if the corresponding upload completed successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFileRecord {
    pub name: String,
    /// Opaque object key issued by the signing endpoint.
    pub key: String,
    /// Human-readable size, precomputed at record creation.
    pub size: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

/// Body of the POST to the signing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignRequest {
    pub file_name: String,
    pub file_type: String,
}

/// Success response from the signing endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResponse {
    pub upload_url: String,
    pub key: String,
}

/// Failure response from the signing endpoint.
#[derive(Debug, Deserialize)]
pub struct PresignErrorBody {
    pub error: Option<String>,
}
