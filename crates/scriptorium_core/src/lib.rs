//! Core data types for the Scriptorium book generation service.
//!
//! This crate provides the types that flow between the pipeline, the document
//! assembler, the storage backends, and the HTTP surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod completion;
mod draft;
mod page;
mod request;

pub use book::{BookDocument, BookSummary, Chapter, StoredBook, docx_filename};
pub use completion::{CompletionRequest, CompletionRequestBuilder, CompletionResponse};
pub use draft::ChapterDraft;
pub use page::Page;
pub use request::GenerationRequest;
