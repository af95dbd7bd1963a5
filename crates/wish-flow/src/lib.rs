//! Celebration flow orchestration.
//!
//! This crate drives the capture → generate → animate → gallery → edit flow:
//! fan-out batch execution against the generation client, single-shot edit
//! and tool requests, the polling state machine for long-running video jobs,
//! and the per-session state the views render from.

pub mod camera;
pub mod capability;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod session;
pub mod video;

pub use camera::{CameraDevice, CameraLease};
pub use capability::{AlwaysGranted, CapabilityGate, CapabilityProbe, NeverGranted, PromptOnceGate};
pub use config::FlowConfig;
pub use error::{FlowError, FlowResult};
pub use orchestrator::Orchestrator;
pub use session::{CelebrateSession, CelebrateStep, Slideshow};
pub use video::VideoJob;
