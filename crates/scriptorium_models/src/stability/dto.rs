//! Stability text-to-image data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A weighted text prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPrompt {
    /// Prompt text
    pub text: String,
}

/// Request body for `POST /v1/generation/{engine}/text-to-image`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TextToImageRequest {
    text_prompts: Vec<TextPrompt>,
    cfg_scale: u32,
    clip_guidance_preset: String,
    height: u32,
    width: u32,
    samples: u32,
    steps: u32,
}

impl TextToImageRequest {
    /// A single portrait-format cover request for `prompt`.
    pub fn cover(prompt: impl Into<String>) -> Self {
        Self {
            text_prompts: vec![TextPrompt {
                text: prompt.into(),
            }],
            cfg_scale: 7,
            clip_guidance_preset: "FAST_BLUE".to_string(),
            height: 768,
            width: 512,
            samples: 1,
            steps: 30,
        }
    }
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageArtifact {
    /// Base64-encoded PNG
    pub base64: String,
    /// Seed used
    #[serde(default)]
    pub seed: Option<u64>,
    /// "SUCCESS", "CONTENT_FILTERED", ...
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

/// Response body of the text-to-image endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TextToImageResponse {
    #[serde(default)]
    artifacts: Vec<ImageArtifact>,
}
