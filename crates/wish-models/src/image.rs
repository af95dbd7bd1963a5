//! Encoded image payloads.
//!
//! A capture session produces exactly one [`ImageData`]; generated images
//! travel as self-describing data URIs so display code needs no extra
//! metadata.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// An opaque encoded-image payload: base64 bytes plus their MIME type.
///
/// Produced once per capture session and consumed by the orchestrator.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// MIME type of the encoded bytes (e.g. "image/jpeg")
    pub mime_type: String,
    /// Base64-encoded image bytes, without any data-URI prefix
    pub data: String,
}

impl ImageData {
    /// Create a payload from already-encoded base64 data.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Create a payload from raw encoded bytes, base64-encoding them.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, BASE64.encode(bytes))
    }

    /// Create a JPEG payload, the format the camera collaborator yields.
    pub fn jpeg(data: impl Into<String>) -> Self {
        Self::new("image/jpeg", data)
    }

    /// Create a PNG payload, the format generated images come back as.
    pub fn png(data: impl Into<String>) -> Self {
        Self::new("image/png", data)
    }

    /// Render as a self-describing data URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Parse a data URI, or treat the input as bare base64 PNG data.
    ///
    /// Gallery elements are stored as data URIs; the generation API wants
    /// the bare base64 payload, so edits strip the prefix when present.
    pub fn from_data_uri(input: &str) -> Self {
        if let Some(rest) = input.strip_prefix("data:") {
            if let Some((mime, data)) = rest.split_once(";base64,") {
                return Self::new(mime, data);
            }
        }
        Self::png(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_round_trip() {
        let image = ImageData::png("aGVsbG8=");
        let uri = image.to_data_uri();
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
        assert_eq!(ImageData::from_data_uri(&uri), image);
    }

    #[test]
    fn test_bare_base64_is_treated_as_png() {
        let image = ImageData::from_data_uri("aGVsbG8=");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn test_from_bytes_encodes() {
        let image = ImageData::from_bytes("image/jpeg", b"hello");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn test_jpeg_constructor() {
        let image = ImageData::jpeg("Zm9v");
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,Zm9v");
    }
}
