//! Upload checks
//!
//! Run before the serving layer persists an uploaded representation:
//! format whitelists first, then a structural check of the bytes.

pub mod content;
pub mod guards;

pub use content::{validate_file_content, validate_file_content_async};
pub use guards::{is_valid_content_type, is_valid_extension};

use crate::error::UploadError;
use crate::logger;
use hyper::body::Bytes;
use std::path::Path;

/// One fully buffered file from a multipart upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name from the content-disposition, e.g. `images/logo.png`
    pub file_name: String,
    /// Declared part content-type, if any
    pub content_type: Option<String>,
    pub content: Bytes,
}

/// Check an uploaded file and return its lowercase extension
pub fn check_upload(file: &UploadedFile) -> Result<String, UploadError> {
    let result = check(file);
    if let Err(err) = &result {
        logger::log_upload_rejected(&file.file_name, err);
    }
    result
}

fn check(file: &UploadedFile) -> Result<String, UploadError> {
    let extension = Path::new(&file.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if !is_valid_extension(extension) {
        return Err(UploadError::UnsupportedExtension {
            file_name: file.file_name.clone(),
            extension: extension.to_string(),
        });
    }

    if let Some(content_type) = &file.content_type {
        if !is_valid_content_type(content_type) {
            return Err(UploadError::UnsupportedContentType(content_type.clone()));
        }
    }

    let extension = extension.to_ascii_lowercase();
    validate_file_content(&extension, &file.content)?;
    Ok(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(file_name: &str, content_type: Option<&str>, content: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: file_name.to_string(),
            content_type: content_type.map(ToString::to_string),
            content: Bytes::from_static(content),
        }
    }

    #[test]
    fn test_accepts_image() {
        let file = upload("images/logo.png", Some("image/png"), b"\x89PNG");
        assert_eq!(check_upload(&file), Ok("png".to_string()));
    }

    #[test]
    fn test_accepts_turtle_without_declared_type() {
        let file = upload("dcat-ap-no.TTL", None, b"<http://a> <http://b> \"c\" .");
        assert_eq!(check_upload(&file), Ok("ttl".to_string()));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let file = upload("files/model.eap", Some("application/octet-stream"), b"");
        assert!(matches!(
            check_upload(&file),
            Err(UploadError::UnsupportedExtension { extension, .. }) if extension == "eap"
        ));
    }

    #[test]
    fn test_rejects_missing_extension() {
        let file = upload("README", None, b"");
        assert!(matches!(
            check_upload(&file),
            Err(UploadError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_content_type() {
        let file = upload("index.html", Some("application/xhtml+xml"), b"<html/>");
        assert_eq!(
            check_upload(&file),
            Err(UploadError::UnsupportedContentType("application/xhtml+xml".to_string()))
        );
    }

    #[test]
    fn test_rejects_broken_turtle() {
        let file = upload("vocab.ttl", Some("text/turtle"), b"@prefix : <http://x/> .\n:a :b");
        assert!(matches!(
            check_upload(&file),
            Err(UploadError::InvalidContent(_))
        ));
    }
}
