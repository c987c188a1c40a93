//! Text and image provider clients for Scriptorium.
//!
//! - [`AnthropicClient`] implements [`TextDriver`](scriptorium_interface::TextDriver)
//!   against the Anthropic messages API.
//! - [`StabilityClient`] implements [`ImageDriver`](scriptorium_interface::ImageDriver)
//!   against the Stability text-to-image API.
//!
//! Both clients take a configurable base URL so they can be pointed at a
//! local mock server.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod stability;

pub use anthropic::{
    ANTHROPIC_API_KEY_VAR, AnthropicClient, AnthropicContent, AnthropicMessage, AnthropicRequest,
    AnthropicResponse, DEFAULT_ANTHROPIC_URL, DEFAULT_ANTHROPIC_MODEL,
};
pub use stability::{
    DEFAULT_STABILITY_ENGINE, DEFAULT_STABILITY_HOST, ImageArtifact, STABILITY_API_KEY_VAR,
    StabilityClient, TextPrompt, TextToImageRequest, TextToImageResponse,
};
