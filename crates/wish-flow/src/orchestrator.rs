//! Job orchestrator.
//!
//! Submits generation requests on behalf of the celebrate flow and the
//! tools panel: the four-way fan-out over one captured face, single-shot
//! edit and pro-image requests, never-fail text tools, and video jobs with
//! their polling loop.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::watch;
use tracing::{info, warn};

use wish_genai::{GenAiClient, GenerateContentRequest, GenerationConfig, ModelProfile};
use wish_genai::{VideoGenerationRequest, VideoImage, VideoInstance, VideoParameters};
use wish_models::{Artifact, GenerationRequest, ImageData, ImageSize, TextVariant, VideoAspectRatio};

use crate::capability::CapabilityGate;
use crate::config::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::video::VideoJob;

const FACE_PROMPT: &str = "A festive, happy birthday photo featuring this person. \
They are wearing a party hat, surrounded by colorful balloons, confetti, and a \
birthday cake. High quality, photorealistic, 4k.";

const WISHES_EMPTY_FALLBACK: &str = "Happy Birthday!";
const WISHES_ERROR_FALLBACK: &str = "Wishing you a fantastic day!";
const PLAN_EMPTY_FALLBACK: &str = "Could not generate plan.";
const PLAN_ERROR_FALLBACK: &str = "Error generating plan. Please try again.";

const PLANNER_THINKING_BUDGET: u32 = 32_768;
const VIDEO_RESOLUTION: &str = "720p";

/// Drives generation requests for one flow instance.
pub struct Orchestrator {
    client: GenAiClient,
    gate: Arc<dyn CapabilityGate>,
    config: FlowConfig,
}

impl Orchestrator {
    /// Create an orchestrator with an injected capability gate.
    pub fn new(client: GenAiClient, gate: Arc<dyn CapabilityGate>, config: FlowConfig) -> Self {
        Self {
            client,
            gate,
            config,
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// The fan-out batch for one captured face: identical requests against
    /// a non-deterministic generator, submitted together for varied output.
    pub fn face_batch(&self, face: &ImageData) -> Vec<GenerationRequest> {
        (0..self.config.fan_out_size)
            .map(|_| GenerationRequest::FaceBatch {
                image: face.clone(),
            })
            .collect()
    }

    /// Submit an ordered batch of independent image requests concurrently
    /// and reduce partial failures into a best-effort result set.
    ///
    /// All requests run concurrently; a thrown error or empty response for
    /// one slot becomes an absence for that slot, never a batch failure.
    /// Survivors keep submission order. A batch that is entirely empty is
    /// the distinguishable [`FlowError::NoResults`] so the caller can route
    /// the user back to capture. No automatic retries. Variants that are
    /// not batchable (gated or long-running) resolve to absence.
    pub async fn run_fan_out(&self, requests: &[GenerationRequest]) -> FlowResult<Vec<Artifact>> {
        let slots = requests.iter().enumerate().map(|(slot, request)| async move {
            let Some((model, wire)) = Self::content_request(request) else {
                warn!(slot, "Request variant not batchable, dropping slot");
                return None;
            };
            match self.client.generate_content(model, &wire).await {
                Ok(response) => response
                    .first_inline_data()
                    .map(|d| Artifact::Image(format!("data:{};base64,{}", d.mime_type, d.data))),
                Err(e) => {
                    warn!(slot, error = %e, "Fan-out slot failed");
                    None
                }
            }
        });

        let results: Vec<Option<Artifact>> = join_all(slots).await;
        let artifacts: Vec<Artifact> = results.into_iter().flatten().collect();

        if artifacts.is_empty() {
            return Err(FlowError::NoResults);
        }
        info!(
            requested = requests.len(),
            produced = artifacts.len(),
            "Fan-out batch complete"
        );
        Ok(artifacts)
    }

    /// Run one request to a single result.
    ///
    /// Image and video variants keep their propagation rules (transport
    /// errors surface, empty payloads are `Ok(None)`); text variants never
    /// fail. The cancellation signal only matters for video requests.
    pub async fn run_single(
        &self,
        request: &GenerationRequest,
        cancel: watch::Receiver<bool>,
    ) -> FlowResult<Option<Artifact>> {
        match request {
            GenerationRequest::FaceBatch { image } => {
                let wire = GenerateContentRequest::image_and_text(image, FACE_PROMPT);
                let response = self
                    .client
                    .generate_content(ModelProfile::FlashImage, &wire)
                    .await?;
                Ok(response
                    .first_inline_data()
                    .map(|d| Artifact::Image(format!("data:{};base64,{}", d.mime_type, d.data))))
            }
            GenerationRequest::Edit { image, instruction } => Ok(self
                .edit_image(&image.to_data_uri(), instruction)
                .await?
                .map(Artifact::Image)),
            GenerationRequest::ProImage { prompt, size } => Ok(self
                .generate_pro_image(prompt, *size)
                .await?
                .map(Artifact::Image)),
            GenerationRequest::Video {
                image,
                prompt,
                aspect_ratio,
            } => Ok(self
                .generate_video(image, prompt, *aspect_ratio, cancel)
                .await?
                .map(Artifact::Video)),
            GenerationRequest::Text { prompt, variant } => {
                let text = match variant {
                    TextVariant::Wishes => self.generate_wishes(prompt).await,
                    TextVariant::Planner => self.plan_party(prompt).await,
                };
                Ok(Some(Artifact::Text(text)))
            }
        }
    }

    /// Fan out the face-batch requests for one capture and keep the image
    /// payloads of the survivors.
    pub async fn generate_celebration_images(&self, face: &ImageData) -> FlowResult<Vec<String>> {
        let batch = self.face_batch(face);
        let artifacts = self.run_fan_out(&batch).await?;
        Ok(artifacts
            .into_iter()
            .filter_map(|a| match a {
                Artifact::Image(uri) => Some(uri),
                _ => None,
            })
            .collect())
    }

    /// Map a batchable request to its wire form. Only the free-tier
    /// image-producing variants batch; gated and long-running variants go
    /// through [`Self::run_single`].
    fn content_request(
        request: &GenerationRequest,
    ) -> Option<(ModelProfile, GenerateContentRequest)> {
        match request {
            GenerationRequest::FaceBatch { image } => Some((
                ModelProfile::FlashImage,
                GenerateContentRequest::image_and_text(image, FACE_PROMPT),
            )),
            GenerationRequest::Edit { image, instruction } => Some((
                ModelProfile::FlashImage,
                GenerateContentRequest::image_and_text(image, instruction),
            )),
            _ => None,
        }
    }

    /// Apply a free-text instruction to an existing image.
    ///
    /// Accepts a data URI or bare base64; returns the edited image as a
    /// data URI, or `Ok(None)` when the response carried no payload.
    /// Transport errors propagate.
    pub async fn edit_image(
        &self,
        image: &str,
        instruction: &str,
    ) -> FlowResult<Option<String>> {
        let source = ImageData::from_data_uri(image);
        let request = GenerateContentRequest::image_and_text(&source, instruction);

        let response = self
            .client
            .generate_content(ModelProfile::FlashImage, &request)
            .await?;

        Ok(response
            .first_inline_data()
            .map(|d| format!("data:{};base64,{}", d.mime_type, d.data)))
    }

    /// High-fidelity single image from a text prompt. Paid tier.
    pub async fn generate_pro_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> FlowResult<Option<String>> {
        self.require_paid_tier().await?;

        let request = GenerateContentRequest::text(prompt)
            .with_config(GenerationConfig::image(size.as_str(), "1:1"));

        let response = self
            .client
            .generate_content(ModelProfile::ProImage, &request)
            .await?;

        Ok(response
            .first_inline_data()
            .map(|d| format!("data:{};base64,{}", d.mime_type, d.data)))
    }

    /// Animate an image into a short video. Paid tier, long-running.
    ///
    /// Submits the job and polls it to a terminal state under the
    /// configured interval and deadline. The caller may flip the
    /// cancellation signal to abort between polls.
    pub async fn generate_video(
        &self,
        image: &ImageData,
        prompt: &str,
        aspect_ratio: VideoAspectRatio,
        cancel: watch::Receiver<bool>,
    ) -> FlowResult<Option<String>> {
        self.require_paid_tier().await?;

        let request = VideoGenerationRequest {
            instances: vec![VideoInstance {
                prompt: prompt.to_string(),
                image: Some(VideoImage::from_image(image)),
            }],
            parameters: VideoParameters {
                aspect_ratio: aspect_ratio.as_str().to_string(),
                resolution: VIDEO_RESOLUTION.to_string(),
                sample_count: 1,
            },
        };

        let handle = self
            .client
            .start_video_generation(ModelProfile::VideoFast, &request)
            .await?;
        info!(handle = %handle, "Video job submitted");

        let mut job = VideoJob::new(handle);
        job.run(
            &self.client,
            self.config.poll_interval,
            self.config.video_timeout,
            cancel,
        )
        .await
    }

    /// Short heartwarming birthday wish for a topic.
    ///
    /// Never fails: empty responses and transport errors both collapse to a
    /// fixed fallback string, so the text tool always renders something.
    pub async fn generate_wishes(&self, topic: &str) -> String {
        let prompt = format!("Write a short, heartwarming birthday wish about: {}", topic);
        let request = GenerateContentRequest::text(prompt);

        match self
            .client
            .generate_content(ModelProfile::FlashLite, &request)
            .await
        {
            Ok(response) => response
                .first_text()
                .unwrap_or(WISHES_EMPTY_FALLBACK)
                .to_string(),
            Err(e) => {
                warn!(error = %e, "Wishes generation failed, using fallback");
                WISHES_ERROR_FALLBACK.to_string()
            }
        }
    }

    /// Detailed party itinerary from free-text requirements.
    ///
    /// Same never-fail policy as [`Self::generate_wishes`].
    pub async fn plan_party(&self, requirements: &str) -> String {
        let prompt = format!(
            "Plan a detailed birthday party itinerary based on these requirements: {}",
            requirements
        );
        let request = GenerateContentRequest::text(prompt)
            .with_config(GenerationConfig::thinking(PLANNER_THINKING_BUDGET));

        match self
            .client
            .generate_content(ModelProfile::ProThinking, &request)
            .await
        {
            Ok(response) => response
                .first_text()
                .unwrap_or(PLAN_EMPTY_FALLBACK)
                .to_string(),
            Err(e) => {
                warn!(error = %e, "Party plan generation failed, using fallback");
                PLAN_ERROR_FALLBACK.to_string()
            }
        }
    }

    /// Paid-tier precondition. A no-op when the capability is already
    /// present; a denial means the operation is never attempted.
    async fn require_paid_tier(&self) -> FlowResult<()> {
        if self.gate.ensure_paid_tier().await {
            Ok(())
        } else {
            Err(FlowError::CapabilityMissing)
        }
    }
}
