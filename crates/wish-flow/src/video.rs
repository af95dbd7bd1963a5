//! Video job polling state machine.
//!
//! A submitted video operation moves `Submitted → Pending* → Complete |
//! Failed`, driven by strictly sequential status queries: one outstanding
//! query at a time, the next issued only after the previous resolves plus a
//! fixed delay. The loop is bounded by a deadline and a cancellation signal,
//! so a job that never completes cannot hold the caller suspended forever.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use wish_genai::GenAiClient;
use wish_models::{OperationHandle, VideoJobState};

use crate::error::{FlowError, FlowResult};

/// One asynchronous video generation job.
///
/// Only one job is polled per call; overlapping submissions from the same
/// caller are not modeled.
pub struct VideoJob {
    handle: OperationHandle,
    state: VideoJobState,
    polls: u32,
}

impl VideoJob {
    /// Track a freshly submitted operation.
    pub fn new(handle: OperationHandle) -> Self {
        Self {
            handle,
            state: VideoJobState::Submitted,
            polls: 0,
        }
    }

    pub fn state(&self) -> &VideoJobState {
        &self.state
    }

    /// Number of status queries issued so far.
    pub fn polls(&self) -> u32 {
        self.polls
    }

    /// Poll the operation to a terminal state.
    ///
    /// Returns the playable-media URI with the access credential appended,
    /// or `Ok(None)` when the job finished without producing a video, a
    /// terminal "done but empty" outcome distinct from failure. Exceeding
    /// `timeout` yields [`FlowError::Timeout`]; a `true` on the cancellation
    /// channel yields [`FlowError::Cancelled`].
    pub async fn run(
        &mut self,
        client: &GenAiClient,
        poll_interval: Duration,
        timeout: Duration,
        mut cancel: watch::Receiver<bool>,
    ) -> FlowResult<Option<String>> {
        let started = Instant::now();
        let deadline = started + timeout;

        loop {
            let operation = match client.poll_video_operation(&self.handle).await {
                Ok(op) => {
                    self.polls += 1;
                    op
                }
                Err(e) => {
                    self.polls += 1;
                    self.state = VideoJobState::Failed {
                        error: e.to_string(),
                    };
                    return Err(e.into());
                }
            };

            if let Some(err) = operation.error.as_ref() {
                warn!(handle = %self.handle, code = err.code, "Video operation failed");
                self.state = VideoJobState::Failed {
                    error: err.message.clone(),
                };
                return Err(FlowError::video_failed(err.message.clone()));
            }

            if operation.done {
                let uri = operation
                    .first_video_uri()
                    .map(|u| client.with_video_credential(u));
                self.state = VideoJobState::Complete { uri: uri.clone() };
                info!(
                    handle = %self.handle,
                    polls = self.polls,
                    produced = uri.is_some(),
                    "Video operation complete"
                );
                return Ok(uri);
            }

            self.state = VideoJobState::Pending;
            debug!(handle = %self.handle, polls = self.polls, "Video operation still pending");

            if Instant::now() + poll_interval > deadline {
                self.state = VideoJobState::Failed {
                    error: "timed out".into(),
                };
                return Err(FlowError::Timeout {
                    waited: started.elapsed(),
                });
            }

            tokio::select! {
                _ = tokio::time::sleep(poll_interval) => {}
                res = cancel.wait_for(|cancelled| *cancelled) => {
                    if res.is_ok() {
                        self.state = VideoJobState::Failed { error: "cancelled".into() };
                        return Err(FlowError::Cancelled);
                    }
                    // Sender dropped without cancelling; keep the cadence
                    tokio::time::sleep(poll_interval).await;
                }
            }
        }
    }
}
