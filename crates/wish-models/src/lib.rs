//! Shared data models for the WishLink backend.
//!
//! This crate provides Serde-serializable types for:
//! - Captured and generated image payloads
//! - Generation requests and artifacts
//! - Gallery state for the celebrate flow
//! - Video job states and operation handles
//! - Route resolution and share-link construction

pub mod artifact;
pub mod gallery;
pub mod image;
pub mod job;
pub mod request;
pub mod route;

// Re-export common types
pub use artifact::Artifact;
pub use gallery::{Gallery, GalleryImage};
pub use image::ImageData;
pub use job::{OperationHandle, VideoJobState};
pub use request::{GenerationRequest, ImageSize, TextVariant, VideoAspectRatio};
pub use route::AppRoute;
