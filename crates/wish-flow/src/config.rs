//! Flow configuration.
//!
//! The timing literals here are policy, not architecture; every one can be
//! overridden from the environment.

use std::time::Duration;

/// Flow configuration.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Number of parallel face-batch requests per capture
    pub fan_out_size: usize,
    /// Delay between video job status queries
    pub poll_interval: Duration,
    /// Maximum total wait for a video job before giving up
    pub video_timeout: Duration,
    /// How long each slideshow image stays on screen
    pub image_rotation: Duration,
    /// Slideshow countdown tick
    pub countdown_tick: Duration,
    /// Total slideshow length in countdown ticks
    pub slideshow_seconds: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            fan_out_size: 4,
            poll_interval: Duration::from_secs(5),
            video_timeout: Duration::from_secs(600), // 10 minutes
            image_rotation: Duration::from_secs(3),
            countdown_tick: Duration::from_secs(1),
            slideshow_seconds: 30,
        }
    }
}

impl FlowConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            fan_out_size: std::env::var("FLOW_FAN_OUT_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),
            poll_interval: Duration::from_secs(
                std::env::var("FLOW_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            video_timeout: Duration::from_secs(
                std::env::var("FLOW_VIDEO_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600),
            ),
            image_rotation: Duration::from_secs(
                std::env::var("FLOW_IMAGE_ROTATION_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3),
            ),
            countdown_tick: Duration::from_secs(
                std::env::var("FLOW_COUNTDOWN_TICK_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
            ),
            slideshow_seconds: std::env::var("FLOW_SLIDESHOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
