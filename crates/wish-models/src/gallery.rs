//! Gallery state for the celebrate flow.
//!
//! The gallery holds the images currently on display for one celebration
//! session. Each element carries a stable synthetic id assigned at creation,
//! and edits replace elements by that id. Keying by payload value would
//! misfire if two generated images ever came back byte-identical.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One displayed image with its stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Stable synthetic identifier, assigned when the element enters the
    /// gallery and unchanged by edits.
    pub id: Uuid,
    /// Self-describing data URI of the current payload.
    pub url: String,
    /// When the element entered the gallery.
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    /// Create a gallery element with a fresh id.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}

/// The set of currently displayed images for the active session.
///
/// Mutable only by initial population from a completed fan-out batch and by
/// single-element replacement when an edit succeeds. Lives for the duration
/// of one celebration session; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    /// Create an empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from an ordered batch of generated image URIs, assigning
    /// each a fresh id. Replaces any previous contents.
    pub fn populate(&mut self, urls: impl IntoIterator<Item = String>) {
        self.images = urls.into_iter().map(GalleryImage::new).collect();
    }

    /// Replace the payload of the element with the given id.
    ///
    /// A stale id (element no longer present) is a silent no-op: returns
    /// `false`, never errors, never duplicates. Order is preserved either
    /// way.
    pub fn replace(&mut self, id: Uuid, new_url: impl Into<String>) -> bool {
        match self.images.iter_mut().find(|img| img.id == id) {
            Some(img) => {
                img.url = new_url.into();
                true
            }
            None => false,
        }
    }

    /// The elements in display order.
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// The current payloads in display order.
    pub fn urls(&self) -> Vec<&str> {
        self.images.iter().map(|img| img.url.as_str()).collect()
    }

    /// Look up an element by id.
    pub fn get(&self, id: Uuid) -> Option<&GalleryImage> {
        self.images.iter().find(|img| img.id == id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Drop all elements (session teardown).
    pub fn clear(&mut self) {
        self.images.clear();
    }
}
