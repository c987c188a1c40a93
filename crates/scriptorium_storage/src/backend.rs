//! Backend selection.

use crate::{FileSystemBookStorage, InMemoryBookStorage};
use scriptorium_error::ScriptoriumResult;
use scriptorium_interface::BookStorage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Which storage backend to use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorageBackend {
    /// Documents and metadata under a directory
    #[default]
    Filesystem,
    /// Process memory only
    Memory,
}

/// Open the configured backend.
///
/// `path` is only used by the filesystem backend.
pub fn open_storage(
    backend: StorageBackend,
    path: impl AsRef<Path>,
) -> ScriptoriumResult<Arc<dyn BookStorage>> {
    let storage: Arc<dyn BookStorage> = match backend {
        StorageBackend::Filesystem => Arc::new(FileSystemBookStorage::new(path.as_ref())?),
        StorageBackend::Memory => Arc::new(InMemoryBookStorage::new()),
    };
    tracing::info!(backend = %backend, "Opened book storage");
    Ok(storage)
}
