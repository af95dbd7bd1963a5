//! Flow error types.
//!
//! No error here is fatal to the process: every failure is scoped to the
//! current user action and leaves the rest of the flow usable.

use std::time::Duration;

use thiserror::Error;

pub type FlowResult<T> = Result<T, FlowError>;

#[derive(Debug, Error)]
pub enum FlowError {
    /// Transport or service failure from the generation client.
    #[error("Generation request failed: {0}")]
    GenAi(#[from] wish_genai::GenAiError),

    /// A fan-out batch where every slot came back empty. Routes the user
    /// back to capture instead of forward to display.
    #[error("No images were generated")]
    NoResults,

    /// Paid-tier check failed and the user declined or could not grant it.
    /// The requested operation was never attempted.
    #[error("Paid tier capability is not available")]
    CapabilityMissing,

    /// A video job exceeded its polling deadline.
    #[error("Video generation timed out after {waited:?}")]
    Timeout { waited: Duration },

    /// The caller cancelled a video job while it was being polled.
    #[error("Video generation was cancelled")]
    Cancelled,

    /// The video operation reported a terminal error.
    #[error("Video generation failed: {0}")]
    VideoFailed(String),

    /// The camera collaborator failed to produce a frame.
    #[error("Camera capture failed: {0}")]
    Camera(String),
}

impl FlowError {
    pub fn video_failed(msg: impl Into<String>) -> Self {
        Self::VideoFailed(msg.into())
    }

    pub fn camera(msg: impl Into<String>) -> Self {
        Self::Camera(msg.into())
    }

    /// Check if this is the distinguishable "nothing generated" condition.
    pub fn is_no_results(&self) -> bool {
        matches!(self, FlowError::NoResults)
    }

    /// Check if the paid-tier precondition failed.
    pub fn is_capability_missing(&self) -> bool {
        matches!(self, FlowError::CapabilityMissing)
    }

    /// Check if this error came from the transport or service side.
    pub fn is_transport(&self) -> bool {
        matches!(self, FlowError::GenAi(e) if e.is_transport())
    }
}
