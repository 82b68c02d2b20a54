/// Formats a byte count with base-1024 units and up to two decimal places.
///
/// The unit is chosen by `floor(log_1024(bytes))`; trailing zeros are
/// trimmed, so 1536 renders as "1.5 KB" and 2097152 as "2 MB".
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    let exponent = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut rendered = format!("{value:.2}");
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, UNITS[exponent])
}

/// Picks a display icon from a MIME type by prefix/substring matching.
pub fn file_icon(content_type: &str) -> &'static str {
    if content_type.starts_with("image/") {
        return "🖼️";
    }
    if content_type.starts_with("video/") {
        return "🎬";
    }
    if content_type.starts_with("audio/") {
        return "🎵";
    }
    if content_type.contains("pdf") {
        return "📄";
    }
    if content_type.contains("word") || content_type.contains("document") {
        return "📝";
    }
    if content_type.contains("excel") || content_type.contains("spreadsheet") {
        return "📊";
    }
    if content_type.contains("zip") || content_type.contains("compressed") {
        return "🗜️";
    }
    "📁"
}
