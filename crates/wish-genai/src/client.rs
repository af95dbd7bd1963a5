//! HTTP client for the generative-language service.

use reqwest::Client;
use tracing::{debug, warn};

use wish_models::OperationHandle;

use crate::error::{GenAiError, GenAiResult};
use crate::model::ModelProfile;
use crate::types::{
    GenerateContentRequest, GenerateContentResponse, VideoGenerationRequest, VideoOperation,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Generative-language API client.
///
/// One instance per injected access credential; cheap to clone (the inner
/// reqwest client is reference-counted).
#[derive(Debug, Clone)]
pub struct GenAiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GenAiClient {
    /// Create a new client with the given access credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> GenAiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenAiError::config("GEMINI_API_KEY not set"))?;
        Ok(Self::new(api_key))
    }

    /// Override the service base URL. Used by tests against a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Submit a synchronous `generateContent` request.
    pub async fn generate_content(
        &self,
        model: ModelProfile,
        request: &GenerateContentRequest,
    ) -> GenAiResult<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        );
        debug!(model = %model, "Submitting generateContent request");

        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }

    /// Start a long-running video generation operation.
    ///
    /// Returns the operation handle to poll with [`Self::poll_video_operation`].
    pub async fn start_video_generation(
        &self,
        model: ModelProfile,
        request: &VideoGenerationRequest,
    ) -> GenAiResult<OperationHandle> {
        let url = format!(
            "{}/v1beta/models/{}:predictLongRunning?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        );
        debug!(model = %model, "Starting video generation");

        let response = self.client.post(&url).json(request).send().await?;
        let operation: VideoOperation = Self::decode(response).await?;
        Ok(OperationHandle::new(operation.name))
    }

    /// Query the status of a long-running video operation.
    pub async fn poll_video_operation(
        &self,
        handle: &OperationHandle,
    ) -> GenAiResult<VideoOperation> {
        let url = format!(
            "{}/v1beta/{}?key={}",
            self.base_url,
            handle.name(),
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    /// Append the access credential to a returned media URI so it is
    /// independently fetchable.
    pub fn with_video_credential(&self, uri: &str) -> String {
        let separator = if uri.contains('?') { '&' } else { '?' };
        format!("{}{}key={}", uri, separator, self.api_key)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> GenAiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "API request failed");
            return Err(GenAiError::api(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GenAiError::decode(format!("unexpected response shape: {}", e)))
    }
}
