use crate::{TextToImageRequest, TextToImageResponse};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use scriptorium_error::{ImageError, ImageErrorKind, ScriptoriumResult};
use scriptorium_interface::ImageDriver;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default API root.
pub const DEFAULT_STABILITY_HOST: &str = "https://api.stability.ai";
/// Default engine identifier.
pub const DEFAULT_STABILITY_ENGINE: &str = "stable-diffusion-xl-beta-v2-2-2";
/// Environment variable holding the API key.
pub const STABILITY_API_KEY_VAR: &str = "STABILITY_API_KEY";

/// Stability text-to-image client.
#[derive(Debug, Clone)]
pub struct StabilityClient {
    client: Client,
    api_key: String,
    host: String,
    engine: String,
}

impl StabilityClient {
    /// Creates a client for the default host and engine.
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new Stability client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            host: DEFAULT_STABILITY_HOST.to_string(),
            engine: DEFAULT_STABILITY_ENGINE.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different engine.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Apply a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ImageError> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ImageError::new(ImageErrorKind::Transport(e.to_string())))?;
        Ok(self)
    }

    /// Engine identifier in use.
    pub fn engine(&self) -> &str {
        &self.engine
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/generation/{}/text-to-image",
            self.host, self.engine
        )
    }

    /// Request an image and decode the last returned artifact.
    #[instrument(skip(self, request), fields(engine = %self.engine))]
    pub async fn text_to_image(&self, request: &TextToImageRequest) -> Result<Vec<u8>, ImageError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Stability API");
                ImageError::new(ImageErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Stability API returned error");
            return Err(ImageError::new(ImageErrorKind::Upstream {
                status: status.as_u16(),
                message: body,
            }));
        }

        let parsed: TextToImageResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::MissingArtifact(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        // The last artifact wins when several are returned
        let artifact = parsed.artifacts().last().ok_or_else(|| {
            ImageError::new(ImageErrorKind::MissingArtifact(
                "response contained no artifacts".to_string(),
            ))
        })?;

        let bytes = STANDARD
            .decode(artifact.base64.trim())
            .map_err(|e| ImageError::new(ImageErrorKind::Base64Decode(e.to_string())))?;

        debug!(
            artifacts = parsed.artifacts().len(),
            size = bytes.len(),
            "Decoded image artifact"
        );
        Ok(bytes)
    }
}

#[async_trait]
impl ImageDriver for StabilityClient {
    async fn generate_image(&self, prompt: &str) -> ScriptoriumResult<Vec<u8>> {
        let request = TextToImageRequest::cover(prompt);
        Ok(self.text_to_image(&request).await?)
    }

    fn provider_name(&self) -> &'static str {
        "stability"
    }
}
