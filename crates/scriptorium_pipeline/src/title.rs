//! Title generation.

use crate::{TextGenerator, title_prompt};
use scriptorium_error::{GenerationError, GenerationErrorKind, ScriptoriumResult};
use tracing::{info, instrument};

/// Drop a leading "Here is ...:" line, then trim and unquote.
///
/// Models often answer with a preamble line before the title. The first
/// line is dropped only when the text starts with "Here" and that line,
/// trimmed, ends with a colon.
///
/// # Examples
///
/// ```
/// use scriptorium_pipeline::strip_preamble;
///
/// assert_eq!(strip_preamble("Here is a title:\nThe Last Ember"), "The Last Ember");
/// assert_eq!(strip_preamble("\"The Last Ember\""), "The Last Ember");
/// assert_eq!(strip_preamble("Hereafter"), "Hereafter");
/// ```
pub fn strip_preamble(text: &str) -> String {
    let body = match text.split_once('\n') {
        Some((first, rest)) if text.starts_with("Here") && first.trim().ends_with(':') => rest,
        None if text.starts_with("Here") && text.trim().ends_with(':') => "",
        _ => text,
    };

    let trimmed = body.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

/// Asks the model for a book title.
#[derive(Debug, Clone)]
pub struct TitleGenerator {
    text: TextGenerator,
}

impl TitleGenerator {
    /// Create a title generator.
    pub fn new(text: TextGenerator) -> Self {
        Self { text }
    }

    /// Title for a book with this plot.
    ///
    /// # Errors
    ///
    /// Propagates generation failures; a reply that is empty once the
    /// preamble is removed yields `EmptyResponse`.
    #[instrument(skip_all)]
    pub async fn generate_title(&self, description: &str) -> ScriptoriumResult<String> {
        let raw = self.text.complete(&title_prompt(description)).await?;
        let title = strip_preamble(&raw);
        if title.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        info!(title = %title, "Generated title");
        Ok(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_without_preamble() {
        assert_eq!(strip_preamble("  The Last Ember \n"), "The Last Ember");
    }

    #[test]
    fn keeps_here_line_without_colon() {
        assert_eq!(
            strip_preamble("Here Be Dragons\nsecond line"),
            "Here Be Dragons\nsecond line"
        );
    }

    #[test]
    fn strips_preamble_then_quotes() {
        assert_eq!(
            strip_preamble("Here's a great title:  \n\n\"Salt and Iron\"\n"),
            "Salt and Iron"
        );
    }

    #[test]
    fn lone_preamble_is_empty() {
        assert_eq!(strip_preamble("Here is the title:"), "");
    }
}
