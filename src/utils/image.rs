//! Image file ingestion for new posts.
//!
//! Converts a user-selected file into a self-contained `data:` URL that the
//! API stores as the post image, and renders short labels for post images
//! since the terminal cannot show them inline.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Errors that can occur when encoding an image file.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The file could not be read
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the file and return it as a base64 `data:` URL whose media type is
/// guessed from the file extension.
///
pub async fn encode_data_url(path: &Path) -> Result<String, ImageError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    log::debug!(
        "Encoded {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        mime.essence_str()
    );
    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        BASE64.encode(&bytes)
    ))
}

/// Match the `data:` URL header, compiled on first use.
///
fn data_url_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(r"^data:([^;,]*)(;base64)?,") {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("Failed to compile data URL pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Return a one-line label describing a post image reference.
///
pub fn describe_image(reference: &str) -> String {
    let Some(re) = data_url_pattern() else {
        return String::from("[image]");
    };
    match re.captures(reference) {
        Some(caps) => {
            let mime = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .unwrap_or("text/plain");
            let payload = &reference[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
            let size = if caps.get(2).is_some() {
                // Decoded size from base64 length, ignoring padding.
                payload.trim_end_matches('=').len() * 3 / 4
            } else {
                payload.len()
            };
            format!("[image: {}, {}]", mime, format_size(size))
        }
        None => format!("[image: {}]", reference),
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn encodes_png_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let url = encode_data_url(file.path()).await.unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn unknown_extension_falls_back_to_octet_stream() {
        let mut file = tempfile::Builder::new().suffix(".zzq").tempfile().unwrap();
        file.write_all(b"hi").unwrap();

        let url = encode_data_url(file.path()).await.unwrap();
        assert_eq!(url, "data:application/octet-stream;base64,aGk=");
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let err = encode_data_url(&path).await.unwrap_err();
        assert!(matches!(err, ImageError::Read { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn describes_data_url() {
        assert_eq!(
            describe_image("data:image/png;base64,iVBORw=="),
            "[image: image/png, 4 B]"
        );
        let big = format!("data:image/jpeg;base64,{}", "A".repeat(4096));
        assert_eq!(describe_image(&big), "[image: image/jpeg, 3.0 KiB]");
    }

    #[test]
    fn describes_remote_url() {
        assert_eq!(
            describe_image("https://example.com/cat.png"),
            "[image: https://example.com/cat.png]"
        );
    }

    #[test]
    fn data_url_pattern_is_compiled_once() {
        let first = data_url_pattern().unwrap();
        let second = data_url_pattern().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_match("data:image/png;base64,AAAA"));
    }
}
