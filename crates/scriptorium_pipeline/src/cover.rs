//! Best-effort cover image generation.

use crate::{CoverSettings, TextGenerator, cover_prompt};
use scriptorium_error::{ImageError, ImageErrorKind};
use scriptorium_interface::ImageDriver;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Describes a cover from the plot, then renders it.
///
/// Failures never fail the book; they are logged and the book goes
/// without a cover.
#[derive(Clone)]
pub struct CoverGenerator {
    text: TextGenerator,
    image: Arc<dyn ImageDriver>,
    settings: CoverSettings,
}

impl CoverGenerator {
    /// Create a cover generator.
    pub fn new(text: TextGenerator, image: Arc<dyn ImageDriver>, settings: CoverSettings) -> Self {
        Self {
            text,
            image,
            settings,
        }
    }

    /// Screen a cover description before it is sent to the image model.
    pub fn check_prompt(&self, prompt: &str) -> Result<(), ImageError> {
        let reject = |reason: String| Err(ImageError::new(ImageErrorKind::PromptRejected(reason)));

        if prompt.trim().is_empty() {
            return reject("description is empty".to_string());
        }

        let chars = prompt.chars().count();
        if chars > self.settings.max_prompt_chars {
            return reject(format!(
                "description is {} characters, limit is {}",
                chars, self.settings.max_prompt_chars
            ));
        }

        let lowered = prompt.to_lowercase();
        if let Some(term) = self
            .settings
            .disallowed_terms
            .iter()
            .find(|term| !term.is_empty() && lowered.contains(&term.to_lowercase()))
        {
            return reject(format!("description contains disallowed term '{}'", term));
        }

        Ok(())
    }

    /// PNG bytes of a cover for this plot, or `None` on any failure.
    #[instrument(skip_all, fields(provider = self.image.provider_name()))]
    pub async fn generate_cover(&self, description: &str) -> Option<Vec<u8>> {
        let prompt = match self.text.complete(&cover_prompt(description)).await {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(error = %e, "Cover description failed, continuing without cover");
                return None;
            }
        };

        if let Err(e) = self.check_prompt(&prompt) {
            warn!(error = %e, "Cover description rejected, continuing without cover");
            return None;
        }

        match self.image.generate_image(&prompt).await {
            Ok(bytes) => {
                info!(size = bytes.len(), "Generated cover image");
                Some(bytes)
            }
            Err(e) => {
                warn!(error = %e, "Cover image failed, continuing without cover");
                None
            }
        }
    }
}

impl std::fmt::Debug for CoverGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverGenerator")
            .field("provider", &self.image.provider_name())
            .field("settings", &self.settings)
            .finish()
    }
}
