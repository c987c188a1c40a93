//! End-to-end book generation.

use crate::{ChapterPipeline, CoverGenerator, PipelineSettings, TextGenerator, TitleGenerator};
use scriptorium_core::{BookDocument, ChapterDraft, GenerationRequest, StoredBook};
use scriptorium_document::DocumentAssembler;
use scriptorium_error::ScriptoriumResult;
use scriptorium_interface::BookStorage;
use tracing::{info, instrument};

/// A generated, assembled, not yet persisted book.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GeneratedBook {
    /// Generated title
    title: String,
    /// DOCX bytes
    document: Vec<u8>,
    /// Chapter drafts in order
    chapters: Vec<ChapterDraft>,
}

impl GeneratedBook {
    /// True when every chapter met the word threshold.
    pub fn fully_accepted(&self) -> bool {
        self.chapters.iter().all(|draft| draft.accepted)
    }
}

/// Orchestrates chapters, title, cover, assembly, and persistence.
#[derive(Debug, Clone)]
pub struct BookGenerator {
    chapters: ChapterPipeline,
    title: TitleGenerator,
    cover: Option<CoverGenerator>,
    assembler: DocumentAssembler,
    author: String,
}

impl BookGenerator {
    /// Create a generator without cover images.
    pub fn new(text: TextGenerator, settings: PipelineSettings) -> Self {
        let author = settings.author.clone();
        Self {
            chapters: ChapterPipeline::new(text.clone(), settings),
            title: TitleGenerator::new(text),
            cover: None,
            assembler: DocumentAssembler::new(),
            author,
        }
    }

    /// Generate covers with `cover`.
    pub fn with_cover(mut self, cover: CoverGenerator) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Whether cover generation is enabled.
    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    /// Validate the request, then write, title, and assemble the book.
    ///
    /// Validation runs before any model call, so an incomplete request
    /// costs nothing upstream.
    #[instrument(skip_all, fields(chapters = request.chapter_titles.len()))]
    pub async fn generate_book(&self, request: &GenerationRequest) -> ScriptoriumResult<GeneratedBook> {
        request.validate()?;

        let drafts = self.chapters.generate_for(request).await?;
        let title = self.title.generate_title(&request.book_description).await?;

        let cover = match &self.cover {
            Some(cover) => cover.generate_cover(&request.book_description).await,
            None => None,
        };

        let author = request
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(&self.author);

        let book = BookDocument::new(
            title.clone(),
            author,
            &request.chapter_titles,
            ChapterPipeline::bodies(&drafts),
            cover,
        );
        let document = self.assembler.assemble(&book)?;

        info!(title = %title, size = document.len(), "Book generated");
        Ok(GeneratedBook {
            title,
            document,
            chapters: drafts,
        })
    }

    /// Generate a book and save it; nothing is saved if generation fails.
    #[instrument(skip_all, fields(backend = storage.backend_name()))]
    pub async fn generate_and_store(
        &self,
        request: &GenerationRequest,
        storage: &dyn BookStorage,
    ) -> ScriptoriumResult<StoredBook> {
        let book = self.generate_book(request).await?;
        let stored = storage.save(&book.title, book.document).await?;

        info!(id = %stored.id, title = %stored.title, "Book stored");
        Ok(stored)
    }
}
