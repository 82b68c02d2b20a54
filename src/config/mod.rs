use std::env;
use std::path::PathBuf;

/// Client configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Signing endpoint that issues pre-signed upload URLs.
    pub api_endpoint: String,

    /// Directory holding the upload history blob.
    pub history_dir: PathBuf,

    /// Body chunk size in bytes; also the progress reporting granularity
    /// (default: 64 KB).
    pub chunk_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            api_endpoint:
                "https://your-api-endpoint.execute-api.region.amazonaws.com/dev/generate-presigned-url"
                    .to_string(),
            history_dir: PathBuf::from("."),
            chunk_size: 64 * 1024, // 64 KB
        }
    }
}

impl UploadConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            api_endpoint: env::var("API_ENDPOINT").unwrap_or(default.api_endpoint),

            history_dir: env::var("FILEDROP_HISTORY_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.history_dir),

            chunk_size: env::var("FILEDROP_CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default.chunk_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert!(config.api_endpoint.contains("generate-presigned-url"));
        assert_eq!(config.history_dir, PathBuf::from("."));
        assert_eq!(config.chunk_size, 64 * 1024);
    }
}
