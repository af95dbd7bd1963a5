//! Generation outcomes.

use serde::{Deserialize, Serialize};

/// A produced artifact from a generation request.
///
/// Absence (a well-formed response with no usable payload) is modeled as
/// `Option<Artifact>` at the call site, distinct from a transport error.
/// No partial or streaming results exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Artifact {
    /// A displayable image as a self-describing data URI.
    Image(String),
    /// Generated text.
    Text(String),
    /// A fetchable video reference URL (access credential already appended).
    Video(String),
}

impl Artifact {
    /// The image data URI, if this artifact is an image.
    pub fn as_image(&self) -> Option<&str> {
        match self {
            Artifact::Image(uri) => Some(uri),
            _ => None,
        }
    }

    /// The text content, if this artifact is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Artifact::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The video URL, if this artifact is a video.
    pub fn as_video(&self) -> Option<&str> {
        match self {
            Artifact::Video(url) => Some(url),
            _ => None,
        }
    }
}
