//! Retrying text generation.

use scriptorium_core::CompletionRequest;
use scriptorium_error::{
    GenerationError, GenerationErrorKind, RetryableError, ScriptoriumResult,
};
use scriptorium_interface::TextDriver;
use scriptorium_rate_limit::{RateLimiter, RetryPolicy};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// System instruction sent with every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a world-class author. Write the requested content with great skill and attention to detail.";

/// Sends prompts to a [`TextDriver`], retrying when the upstream rate limits.
///
/// Cloning shares the driver and the rate limiter.
#[derive(Clone)]
pub struct TextGenerator {
    driver: Arc<dyn TextDriver>,
    policy: RetryPolicy,
    limiter: Option<RateLimiter>,
    max_tokens: u32,
    temperature: f32,
}

impl TextGenerator {
    /// Create a generator with the default retry policy and sampling.
    pub fn new(driver: Arc<dyn TextDriver>) -> Self {
        Self {
            driver,
            policy: RetryPolicy::default(),
            limiter: None,
            max_tokens: 3000,
            temperature: 0.7,
        }
    }

    /// Use a different retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pace every attempt through a shared limiter.
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Default token budget and temperature for [`complete`](Self::complete).
    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    /// Retry policy in effect.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generate with the configured sampling defaults.
    pub async fn complete(&self, prompt: &str) -> ScriptoriumResult<String> {
        self.generate(prompt, self.max_tokens, self.temperature).await
    }

    /// Generate text for `prompt`.
    ///
    /// Rate-limited attempts are retried with capped exponential waits;
    /// every other failure is returned at once. Running out of attempts
    /// yields `RetriesExhausted`.
    #[instrument(
        skip(self, prompt),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            prompt_len = prompt.len(),
        )
    )]
    pub async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> ScriptoriumResult<String> {
        let request = CompletionRequest::builder()
            .prompt(prompt)
            .system(Some(SYSTEM_INSTRUCTION.to_string()))
            .max_tokens(max_tokens)
            .temperature(temperature)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                    "Failed to build completion request: {}",
                    e
                )))
            })?;

        let result = self
            .policy
            .execute(self.limiter.as_ref(), || self.driver.complete(&request))
            .await;

        match result {
            Ok(response) => {
                debug!(chars = response.text.len(), "Generated text");
                Ok(response.text)
            }
            Err(e) if e.is_retryable() => {
                let attempts = *self.policy.max_attempts();
                warn!(attempts, error = %e, "Retries exhausted");
                Err(GenerationError::new(GenerationErrorKind::RetriesExhausted { attempts }).into())
            }
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for TextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("policy", &self.policy)
            .field("limiter", &self.limiter)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}
