//! Trait definitions for generation backends and book persistence.

use async_trait::async_trait;
use scriptorium_core::{BookSummary, CompletionRequest, CompletionResponse, Page, StoredBook};
use scriptorium_error::ScriptoriumResult;

/// Core trait that all text generation backends must implement.
///
/// A single call sends one prompt and returns one completion. Retry and
/// pacing live above this trait, in the text generator.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate a completion for the request.
    async fn complete(&self, req: &CompletionRequest) -> ScriptoriumResult<CompletionResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-haiku-20240307").
    fn model_name(&self) -> &str;
}

/// Backends that turn a text prompt into an image.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Generate one image and return its encoded bytes (PNG).
    async fn generate_image(&self, prompt: &str) -> ScriptoriumResult<Vec<u8>>;

    /// Provider name (e.g., "stability").
    fn provider_name(&self) -> &'static str;
}

/// Pluggable persistence for finished documents.
///
/// Stored books are never modified after `save`.
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// Persist document bytes under a fresh identifier.
    ///
    /// # Arguments
    ///
    /// * `title` - Book title recorded with the document
    /// * `content` - Serialized document bytes
    async fn save(&self, title: &str, content: Vec<u8>) -> ScriptoriumResult<StoredBook>;

    /// Load a stored book by its identifier.
    ///
    /// Unknown or malformed identifiers produce a not-found storage error.
    async fn load(&self, id: &str) -> ScriptoriumResult<StoredBook>;

    /// List stored books, newest first.
    async fn list(&self, page: Page) -> ScriptoriumResult<Vec<BookSummary>>;

    /// Check if a book exists.
    async fn exists(&self, id: &str) -> ScriptoriumResult<bool>;

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}
