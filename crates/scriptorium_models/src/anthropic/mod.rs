//! Anthropic messages API.

mod client;
mod dto;

pub use client::{
    ANTHROPIC_API_KEY_VAR, AnthropicClient, DEFAULT_ANTHROPIC_MODEL, DEFAULT_ANTHROPIC_URL,
};
pub use dto::{AnthropicContent, AnthropicMessage, AnthropicRequest, AnthropicResponse};
