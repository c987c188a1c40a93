//! Trait definitions for the Scriptorium book generation service.
//!
//! The pipeline talks to language models, image models, and persistence
//! only through the traits in this crate, so each can be swapped for a
//! mock in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{BookStorage, ImageDriver, TextDriver};
