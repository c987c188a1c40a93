//! DOCX assembly for Scriptorium books.
//!
//! [`DocumentAssembler`] turns a [`BookDocument`](scriptorium_core::BookDocument)
//! into the bytes of a word-processing document: an optional cover page,
//! the title and author, then one heading and body per chapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod png;

pub use assembler::{DOCX_MIME_TYPE, DocumentAssembler, SUBTITLE_COLOR};
pub use png::PngDimensions;
