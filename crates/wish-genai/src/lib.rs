//! Generative-language API client.
//!
//! This crate wraps the hosted multimodal model service behind a thin
//! request/response client: synchronous `generateContent` calls for image
//! and text generation, and long-running operations for video generation
//! that callers poll until done.

pub mod client;
pub mod error;
pub mod model;
pub mod types;

pub use client::GenAiClient;
pub use error::{GenAiError, GenAiResult};
pub use model::ModelProfile;
pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData, Part, ThinkingConfig, VideoGenerationRequest, VideoImage, VideoInstance,
    VideoOperation, VideoParameters,
};
