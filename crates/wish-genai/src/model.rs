//! Model capability profiles.

use serde::{Deserialize, Serialize};

/// The five fixed capability profiles the service exposes.
///
/// Each maps to an opaque model identifier on the wire. FlashImage serves
/// both the face batch and image edits; ProImage and VideoFast require the
/// paid-tier capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelProfile {
    /// Image-from-image generation and edits.
    FlashImage,
    /// Lightweight text generation (wishes).
    FlashLite,
    /// High-fidelity single image. Paid tier.
    ProImage,
    /// Text generation with a thinking budget (party planner).
    ProThinking,
    /// Video-from-image. Paid tier, long-running.
    VideoFast,
}

impl ModelProfile {
    /// The wire identifier for this profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProfile::FlashImage => "gemini-2.5-flash-image",
            ModelProfile::FlashLite => "gemini-2.5-flash-lite",
            ModelProfile::ProImage => "gemini-3-pro-image-preview",
            ModelProfile::ProThinking => "gemini-3-pro-preview",
            ModelProfile::VideoFast => "veo-3.1-fast-generate-preview",
        }
    }

    /// Check if this profile requires the paid-tier capability.
    pub fn requires_paid_tier(&self) -> bool {
        matches!(self, ModelProfile::ProImage | ModelProfile::VideoFast)
    }
}

impl std::fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_tier_profiles() {
        assert!(ModelProfile::ProImage.requires_paid_tier());
        assert!(ModelProfile::VideoFast.requires_paid_tier());
        assert!(!ModelProfile::FlashImage.requires_paid_tier());
        assert!(!ModelProfile::FlashLite.requires_paid_tier());
        assert!(!ModelProfile::ProThinking.requires_paid_tier());
    }

    #[test]
    fn test_wire_identifiers() {
        assert_eq!(ModelProfile::FlashImage.as_str(), "gemini-2.5-flash-image");
        assert_eq!(ModelProfile::VideoFast.to_string(), "veo-3.1-fast-generate-preview");
    }
}
