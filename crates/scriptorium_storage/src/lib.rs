//! Book persistence backends for Scriptorium.
//!
//! Finished documents are stored as opaque byte blobs keyed by a UUID v4
//! retrieval identifier.
//!
//! # Example
//!
//! ```rust
//! use scriptorium_interface::BookStorage;
//! use scriptorium_storage::InMemoryBookStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryBookStorage::new();
//! let stored = storage.save("The Last Ember", b"PK...".to_vec()).await?;
//!
//! let loaded = storage.load(&stored.id.to_string()).await?;
//! assert_eq!(loaded.content, stored.content);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod filesystem;
mod memory;

pub use backend::{StorageBackend, open_storage};
pub use filesystem::{BookMetadata, FileSystemBookStorage};
pub use memory::InMemoryBookStorage;
pub use scriptorium_error::{StorageError, StorageErrorKind};

use uuid::Uuid;

/// Parse a retrieval identifier, treating malformed input as not found.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(id.trim())
        .map_err(|_| StorageError::new(StorageErrorKind::NotFound(id.to_string())))
}
