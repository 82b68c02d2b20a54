use std::path::Path;
use tokio::io::AsyncReadExt;

/// Determines the MIME type to send for a file: content sniffing on the
/// leading bytes, falling back to a generic binary type.
pub async fn detect_content_type(path: &Path) -> std::io::Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut head = [0u8; 8192];
    let n = file.read(&mut head).await?;

    Ok(match infer::get(&head[..n]) {
        Some(kind) => kind.mime_type().to_string(),
        None => mime::APPLICATION_OCTET_STREAM.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detects_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        // PNG signature followed by padding
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&[0u8; 64]);
        std::fs::write(&path, data).unwrap();

        assert_eq!(detect_content_type(&path).await.unwrap(), "image/png");
    }

    #[tokio::test]
    async fn test_unknown_content_falls_back_to_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text, no magic bytes").unwrap();

        assert_eq!(
            detect_content_type(&path).await.unwrap(),
            "application/octet-stream"
        );
    }
}
