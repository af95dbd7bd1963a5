//! Video job states and operation handles.
//!
//! Long-running video generation returns an opaque operation handle that is
//! polled until a terminal state. The states here back the polling loop in
//! the flow crate.

use serde::{Deserialize, Serialize};

/// Opaque token for a long-running video generation operation.
///
/// Wraps the operation name returned by the submit call; re-submitted to the
/// status-check endpoint until the job reports done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationHandle(pub String);

impl OperationHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of an asynchronous video generation job.
///
/// `Submitted → Pending* → Complete | Failed`, transitions driven by
/// polling. Complete holds the result reference when the job produced one;
/// a job can finish with nothing to show, which is terminal but not a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VideoJobState {
    /// Submitted, no status response seen yet.
    Submitted,
    /// At least one status query answered "not done".
    Pending,
    /// Terminal: job finished; `uri` is absent when it produced no video.
    Complete { uri: Option<String> },
    /// Terminal: job failed.
    Failed { error: String },
}

impl VideoJobState {
    /// Check if this is a terminal state (no more polling expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, VideoJobState::Complete { .. } | VideoJobState::Failed { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoJobState::Submitted => "submitted",
            VideoJobState::Pending => "pending",
            VideoJobState::Complete { .. } => "complete",
            VideoJobState::Failed { .. } => "failed",
        }
    }
}

impl std::fmt::Display for VideoJobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!VideoJobState::Submitted.is_terminal());
        assert!(!VideoJobState::Pending.is_terminal());
        assert!(VideoJobState::Complete { uri: None }.is_terminal());
        assert!(VideoJobState::Failed { error: "boom".into() }.is_terminal());
    }

    #[test]
    fn test_complete_without_uri_is_not_failed() {
        // Done-but-empty is a distinct terminal outcome.
        let state = VideoJobState::Complete { uri: None };
        assert!(state.is_terminal());
        assert_eq!(state.as_str(), "complete");
    }
}
