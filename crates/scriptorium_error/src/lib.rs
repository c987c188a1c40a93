//! Error types for the Scriptorium service.
//!
//! This crate provides the error types shared by every Scriptorium crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scriptorium_error::{ScriptoriumResult, HttpError};
//!
//! fn fetch_data() -> ScriptoriumResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod generation;
mod http;
mod image;
mod request;
mod storage;

pub use config::ConfigError;
pub use document::DocumentError;
pub use error::{ScriptoriumError, ScriptoriumErrorKind, ScriptoriumResult};
pub use generation::{GenerationError, GenerationErrorKind, RetryableError};
pub use http::HttpError;
pub use image::{ImageError, ImageErrorKind};
pub use request::{RequestError, RequestErrorKind};
pub use storage::{StorageError, StorageErrorKind};
