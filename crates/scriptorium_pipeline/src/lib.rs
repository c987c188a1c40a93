//! Book generation pipeline.
//!
//! The pipeline turns a [`GenerationRequest`](scriptorium_core::GenerationRequest)
//! into a finished document:
//!
//! 1. [`ChapterPipeline`] writes each chapter through the [`TextGenerator`],
//!    regenerating sections the [`ContentValidator`] rejects as too short.
//! 2. [`TitleGenerator`] asks for a title and strips any preamble.
//! 3. [`CoverGenerator`] optionally produces a cover image, best effort.
//! 4. [`BookGenerator`] assembles the DOCX and persists it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod chapters;
mod cover;
mod prompts;
mod settings;
mod text;
mod title;
mod validator;

pub use book::{BookGenerator, GeneratedBook};
pub use chapters::ChapterPipeline;
pub use cover::CoverGenerator;
pub use prompts::{chapter_prompt, cover_prompt, title_prompt};
pub use settings::{CoverSettings, PipelineSettings, ShortContentPolicy};
pub use text::{SYSTEM_INSTRUCTION, TextGenerator};
pub use title::{TitleGenerator, strip_preamble};
pub use validator::ContentValidator;
