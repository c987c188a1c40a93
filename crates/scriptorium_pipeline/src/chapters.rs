//! Per-chapter generation with word-count regeneration.

use crate::{ContentValidator, PipelineSettings, ShortContentPolicy, TextGenerator, chapter_prompt};
use futures::stream::{self, StreamExt, TryStreamExt};
use scriptorium_core::{ChapterDraft, GenerationRequest};
use scriptorium_error::{GenerationError, GenerationErrorKind, ScriptoriumResult};
use tracing::{info, instrument, warn};

/// Writes every chapter of a book, in order.
#[derive(Debug, Clone)]
pub struct ChapterPipeline {
    text: TextGenerator,
    validator: ContentValidator,
    settings: PipelineSettings,
}

impl ChapterPipeline {
    /// Create a pipeline over a text generator.
    pub fn new(text: TextGenerator, settings: PipelineSettings) -> Self {
        Self {
            text,
            validator: ContentValidator::new(settings.min_words),
            settings,
        }
    }

    /// Settings in effect.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Bodies of `drafts`, in order.
    pub fn bodies(drafts: &[ChapterDraft]) -> Vec<String> {
        drafts.iter().map(|draft| draft.body.clone()).collect()
    }

    /// One draft per chapter title of `request`, in the same order.
    pub async fn generate_for(&self, request: &GenerationRequest) -> ScriptoriumResult<Vec<ChapterDraft>> {
        self.generate_chapters(
            &request.writing_style,
            &request.chapter_titles,
            &request.chapter_elaborations,
        )
        .await
    }

    /// One draft per title, in the same order.
    ///
    /// Elaborations are matched to titles by index; a shorter list leaves
    /// the remaining chapters without a note.
    #[instrument(skip_all, fields(chapters = titles.len(), concurrency = self.settings.chapter_concurrency))]
    pub async fn generate_chapters(
        &self,
        style: &str,
        titles: &[String],
        elaborations: &[String],
    ) -> ScriptoriumResult<Vec<ChapterDraft>> {
        let note = |index: usize| {
            elaborations
                .get(index)
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
        };

        if self.settings.chapter_concurrency > 1 {
            let chapters: Vec<_> = titles
                .iter()
                .enumerate()
                .map(|(index, title)| self.generate_chapter(index, title, style, note(index)))
                .collect();

            // buffered() yields in input order regardless of completion order
            return stream::iter(chapters)
                .buffered(self.settings.chapter_concurrency)
                .try_collect()
                .await;
        }

        let mut drafts = Vec::with_capacity(titles.len());
        for (index, title) in titles.iter().enumerate() {
            drafts.push(self.generate_chapter(index, title, style, note(index)).await?);

            if index + 1 < titles.len() && !self.settings.pacing_delay().is_zero() {
                tokio::time::sleep(self.settings.pacing_delay()).await;
            }
        }
        Ok(drafts)
    }

    async fn generate_chapter(
        &self,
        index: usize,
        title: &str,
        style: &str,
        elaboration: Option<&str>,
    ) -> ScriptoriumResult<ChapterDraft> {
        info!(chapter = index + 1, title, "Generating chapter");

        let mut draft = ChapterDraft::new(title);
        for subsection in 1..=self.settings.subsections_per_chapter.max(1) {
            let prompt = chapter_prompt(
                subsection,
                title,
                style,
                self.settings.prompt_min_words,
                elaboration,
            );
            let (section, accepted) = self.generate_section(&prompt, title, subsection).await?;
            draft.push_section(section, accepted);
        }

        info!(
            chapter = index + 1,
            title,
            accepted = draft.accepted,
            words = ContentValidator::word_count(&draft.body),
            "Chapter complete"
        );
        Ok(draft)
    }

    /// Generate until the validator accepts or attempts run out.
    async fn generate_section(
        &self,
        prompt: &str,
        title: &str,
        subsection: usize,
    ) -> ScriptoriumResult<(String, bool)> {
        let max_attempts = self.settings.max_attempts.max(1);
        let mut last = String::new();

        for attempt in 1..=max_attempts {
            last = self.text.complete(prompt).await?;
            if self.validator.is_acceptable(&last) {
                return Ok((last, true));
            }

            warn!(
                title,
                subsection,
                attempt,
                words = ContentValidator::word_count(&last),
                required = self.validator.min_words(),
                "Insufficient content, regenerating"
            );
        }

        match self.settings.short_content_policy {
            ShortContentPolicy::AcceptLast => {
                warn!(title, subsection, "Keeping short content after final attempt");
                Ok((last, false))
            }
            ShortContentPolicy::Fail => Err(GenerationError::new(
                GenerationErrorKind::ContentTooShort {
                    words: ContentValidator::word_count(&last),
                    required: self.validator.min_words(),
                },
            )
            .into()),
        }
    }
}
