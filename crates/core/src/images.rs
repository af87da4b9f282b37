//! Inline image payload handling.
//!
//! Clients submit room photos inside JSON bodies as data-URI strings
//! (`data:image/png;base64,...`). Payloads are decoded, format-sniffed, and
//! written under the configured image directory with a generated file name;
//! only the file name is stored on the entity. An image list entry that does
//! not carry the data-URI marker is treated as an already-stored reference.

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::error::CoreError;
use crate::types::DbId;

/// Marker prefix distinguishing a new inline payload from a stored reference.
const DATA_URI_PREFIX: &str = "data:image";

/// Returns true if the value is an inline data-URI payload rather than a
/// stored file reference.
pub fn is_inline_image(value: &str) -> bool {
    value.starts_with(DATA_URI_PREFIX)
}

/// A decoded inline image payload.
#[derive(Debug)]
pub struct InlineImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Parse and decode a `data:image/...;base64,<payload>` string.
///
/// The file extension is sniffed from the decoded bytes rather than trusted
/// from the URI header.
pub fn parse_data_uri(value: &str) -> Result<InlineImage, CoreError> {
    let encoded = value
        .split_once(',')
        .map(|(_, rest)| rest)
        .ok_or_else(|| CoreError::Validation("Malformed image data URI".into()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| CoreError::Validation(format!("Invalid base64 image payload: {e}")))?;

    let extension = match image::guess_format(&bytes) {
        Ok(image::ImageFormat::Png) => "png",
        Ok(image::ImageFormat::Jpeg) => "jpg",
        Ok(image::ImageFormat::WebP) => "webp",
        _ => return Err(CoreError::Validation("Unsupported image format".into())),
    };

    Ok(InlineImage { bytes, extension })
}

/// Public URL path for a stored file name (`images/<name>`).
pub fn public_path(file_name: &str) -> String {
    format!("images/{file_name}")
}

/// Writes decoded images into a flat directory and hands back generated
/// file names.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decode and persist one inline payload, returning the stored file name.
    pub async fn save(&self, data_uri: &str, actor: DbId) -> Result<String, CoreError> {
        let image = parse_data_uri(data_uri)?;
        let file_name = generated_file_name(actor, image.extension);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(write_error)?;
        tokio::fs::write(self.dir.join(&file_name), &image.bytes)
            .await
            .map_err(write_error)?;

        Ok(file_name)
    }
}

fn write_error(e: std::io::Error) -> CoreError {
    CoreError::Internal(format!("image write failed: {e}"))
}

/// `<UTC yyyyMMdd_HHmmss>_<actor>_<uuid8>.<ext>` — the uuid fragment rules
/// out collisions between concurrent uploads in the same second.
fn generated_file_name(actor: DbId, extension: &str) -> String {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let unique = uuid::Uuid::new_v4().simple().to_string();
    format!("{stamp}_{actor}_{}.{extension}", &unique[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1x1 transparent PNG.
    const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    fn png_data_uri() -> String {
        format!("data:image/png;base64,{PNG_1X1}")
    }

    #[test]
    fn test_inline_marker_detection() {
        assert!(is_inline_image("data:image/png;base64,abc"));
        assert!(!is_inline_image("20240101_120000_1_abcd1234.png"));
    }

    #[test]
    fn test_parse_valid_png() {
        let parsed = parse_data_uri(&png_data_uri()).unwrap();
        assert_eq!(parsed.extension, "png");
        assert!(!parsed.bytes.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_payload_separator() {
        assert!(parse_data_uri("data:image/png;base64").is_err());
    }

    #[test]
    fn test_parse_rejects_non_image_payload() {
        let not_an_image =
            format!("data:image/png;base64,{}", base64::engine::general_purpose::STANDARD.encode(b"hello"));
        assert!(parse_data_uri(&not_an_image).is_err());
    }

    #[test]
    fn test_generated_file_name_shape() {
        let name = generated_file_name(42, "png");
        // 15-char timestamp, actor, 8-char unique fragment, extension.
        let parts: Vec<&str> = name.split('_').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[2], "42");
        assert!(name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let file_name = store.save(&png_data_uri(), 7).await.unwrap();
        let written = tokio::fs::read(dir.path().join(&file_name)).await.unwrap();
        assert!(!written.is_empty());
        assert_eq!(public_path(&file_name), format!("images/{file_name}"));
    }

    #[tokio::test]
    async fn test_save_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        assert!(store.save("data:image/png;base64,!!!", 7).await.is_err());
    }
}
