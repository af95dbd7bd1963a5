//! Generation request variants.
//!
//! A [`GenerationRequest`] is an immutable value describing one unit of work
//! submitted to the generation client, either alone or as part of a fan-out
//! batch.

use serde::{Deserialize, Serialize};

use crate::image::ImageData;

/// One unit of generation work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationRequest {
    /// Produce one festive image from a captured face. Submitted four at a
    /// time to harvest varied outputs from a non-deterministic generator.
    FaceBatch { image: ImageData },
    /// Apply a free-text instruction to an existing image.
    Edit { image: ImageData, instruction: String },
    /// High-fidelity single image from a text prompt. Paid tier.
    ProImage { prompt: String, size: ImageSize },
    /// Animate an image into a short video. Paid tier, long-running.
    Video {
        image: ImageData,
        prompt: String,
        aspect_ratio: VideoAspectRatio,
    },
    /// Text generation, two tool variants.
    Text { prompt: String, variant: TextVariant },
}

/// Output size for pro image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aspect ratio for video generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VideoAspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl VideoAspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoAspectRatio::Landscape => "16:9",
            VideoAspectRatio::Portrait => "9:16",
        }
    }
}

impl std::fmt::Display for VideoAspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which text tool a text request serves.
///
/// The two variants differ in model profile and failure policy fallback
/// strings, not in transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextVariant {
    /// Short heartwarming birthday wish.
    Wishes,
    /// Detailed party itinerary (thinking-budget model).
    Planner,
}
