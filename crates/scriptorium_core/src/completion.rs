//! Request and response types for a single text completion.

use serde::{Deserialize, Serialize};

/// One prompt sent to a text model.
///
/// # Examples
///
/// ```
/// use scriptorium_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .prompt("Write a haiku about ink")
///     .max_tokens(200u32)
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.max_tokens(), &200);
/// assert!(request.system().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// User prompt text
    prompt: String,
    /// System instruction framing the model
    #[builder(default)]
    system: Option<String>,
    /// Maximum number of tokens to generate
    #[builder(default = "3000")]
    max_tokens: u32,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default = "0.7")]
    temperature: f32,
    /// Model identifier override
    #[builder(default)]
    model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// Text produced by a completion call, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text
    pub text: String,
}

impl CompletionResponse {
    /// Wrap generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
