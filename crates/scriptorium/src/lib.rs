//! Scriptorium - book generation as a service
//!
//! Scriptorium turns a writing style, a plot description and a list of
//! chapter titles into a finished Word document. A text model writes each
//! chapter and the title, an optional image model paints the cover, and the
//! result is stored for download.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scriptorium::{GenerationRequest, ScriptoriumConfig, Secrets, services};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScriptoriumConfig::load(None)?;
//!     let secrets = Secrets::from_env()?;
//!     let generator = services::book_generator(&config, &secrets)?;
//!
//!     let request = GenerationRequest::new(
//!         "Wry and warm",
//!         "A lighthouse keeper's last winter",
//!         vec!["Arrival".to_string(), "Storm".to_string()],
//!         vec![],
//!     );
//!     let book = generator.generate_book(&request).await?;
//!     std::fs::write("book.docx", book.document())?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `scriptorium_error` - Error types
//! - `scriptorium_core` - Request, chapter and stored book types
//! - `scriptorium_interface` - Driver and storage traits
//! - `scriptorium_rate_limit` - Rate limiting and retry
//! - `scriptorium_models` - Anthropic and Stability clients
//! - `scriptorium_document` - DOCX assembly
//! - `scriptorium_storage` - Filesystem and in-memory book storage
//! - `scriptorium_pipeline` - Chapter, title and cover generation
//! - `scriptorium_server` - HTTP API
//!
//! This crate re-exports everything and adds configuration loading.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod logging;
mod outline;
pub mod services;

pub use config::{
    CoverConfig, ENV_PREFIX, ScriptoriumConfig, Secrets, ServerSettings, StorageSettings,
    TextSettings,
};
pub use logging::init_logging;
pub use outline::{read_outline, write_document};

pub use scriptorium_core::*;
pub use scriptorium_document::*;
pub use scriptorium_error::*;
pub use scriptorium_interface::*;
pub use scriptorium_models::*;
pub use scriptorium_pipeline::*;
pub use scriptorium_rate_limit::*;
pub use scriptorium_server::{ApiError, AppState, build_router, serve};
pub use scriptorium_storage::{
    BookMetadata, FileSystemBookStorage, InMemoryBookStorage, StorageBackend, open_storage,
};
