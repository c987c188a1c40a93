//! Stability text-to-image API.

mod client;
mod dto;

pub use client::{
    DEFAULT_STABILITY_ENGINE, DEFAULT_STABILITY_HOST, STABILITY_API_KEY_VAR, StabilityClient,
};
pub use dto::{ImageArtifact, TextPrompt, TextToImageRequest, TextToImageResponse};
