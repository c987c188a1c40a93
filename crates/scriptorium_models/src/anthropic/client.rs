use crate::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scriptorium_core::{CompletionRequest, CompletionResponse};
use scriptorium_error::{GenerationError, GenerationErrorKind, ScriptoriumResult};
use scriptorium_interface::TextDriver;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Default API root; requests go to `{base}/v1/messages`.
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com";
/// Model used when neither configuration nor the request names one.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-haiku-20240307";
/// Environment variable holding the API key.
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-haiku-20240307")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_ANTHROPIC_URL.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Apply a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the HTTP client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, GenerationError> {
        self.client = Client::builder().timeout(timeout).build().map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(self)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn convert_request(&self, request: &CompletionRequest) -> Result<AnthropicRequest, GenerationError> {
        let model = request.model().clone().unwrap_or_else(|| self.model.clone());

        AnthropicRequest::builder()
            .model(model)
            .max_tokens(*request.max_tokens())
            .temperature(*request.temperature())
            .system(request.system().clone())
            .messages(vec![AnthropicMessage::user(request.prompt().clone())])
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                    "Failed to build request: {}",
                    e
                )))
            })
    }

    /// Sends a request to the Anthropic API.
    ///
    /// HTTP 429 maps to `RateLimited`; any other non-success status maps to
    /// `Upstream`.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send(&self, request: &AnthropicRequest) -> Result<AnthropicResponse, GenerationError> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            warn!(body = %body, "Anthropic API rate limited the request");
            return Err(GenerationError::new(GenerationErrorKind::RateLimited(body)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Upstream {
                status: status.as_u16(),
                message: body,
            }));
        }

        let body = response.text().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let parsed: AnthropicResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = %parsed.id(), "Received response from Anthropic");
        Ok(parsed)
    }

    /// Extract trimmed text from the first content block.
    fn convert_response(response: &AnthropicResponse) -> Result<CompletionResponse, GenerationError> {
        let text = response.first_text().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(
                "response has no text content block".to_string(),
            ))
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        }

        Ok(CompletionResponse::new(text))
    }
}

#[async_trait]
impl TextDriver for AnthropicClient {
    #[instrument(skip(self, request), fields(provider = "anthropic", model = %self.model))]
    async fn complete(&self, request: &CompletionRequest) -> ScriptoriumResult<CompletionResponse> {
        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.send(&anthropic_request).await?;
        Ok(Self::convert_response(&anthropic_response)?)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
