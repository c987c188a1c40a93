//! Filesystem-based book storage.
//!
//! Each book is two files in the base directory:
//!
//! ```text
//! /var/scriptorium/books/
//! ├── 6f1c...e2.docx   (document bytes)
//! └── 6f1c...e2.json   (title, created_at, size, sha256)
//! ```

use crate::parse_id;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scriptorium_core::{BookSummary, Page, StoredBook};
use scriptorium_error::{ScriptoriumResult, StorageError, StorageErrorKind};
use scriptorium_interface::BookStorage;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Sidecar metadata written next to each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Retrieval identifier
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// When the book was saved
    pub created_at: DateTime<Utc>,
    /// Document size in bytes
    pub size_bytes: u64,
    /// Hex SHA-256 of the document bytes
    pub sha256: String,
}

impl BookMetadata {
    fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
            size_bytes: self.size_bytes,
        }
    }
}

/// Filesystem storage backend.
///
/// Writes go to a temporary file that is then renamed into place, and the
/// metadata sidecar is written last, so a book only becomes visible once
/// both files are complete. Loads verify the recorded hash.
#[derive(Debug, Clone)]
pub struct FileSystemBookStorage {
    base_path: PathBuf,
}

impl FileSystemBookStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem book storage");
        Ok(Self { base_path })
    }

    /// Directory holding the books.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    fn document_path(&self, id: &Uuid) -> PathBuf {
        self.base_path.join(format!("{}.docx", id))
    }

    fn metadata_path(&self, id: &Uuid) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    async fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StorageError> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })
    }

    /// Write the document, then its sidecar.
    ///
    /// The document is removed again if the sidecar cannot be written, so a
    /// failed save leaves nothing behind.
    async fn write_book(
        document_path: &Path,
        metadata_path: &Path,
        content: &[u8],
        metadata: &BookMetadata,
    ) -> Result<(), StorageError> {
        Self::write_atomic(document_path, content).await?;

        let sidecar = match serde_json::to_vec_pretty(metadata) {
            Ok(encoded) => Self::write_atomic(metadata_path, &encoded).await,
            Err(e) => Err(StorageError::new(StorageErrorKind::Serialization(
                e.to_string(),
            ))),
        };

        if let Err(e) = sidecar {
            if let Err(cleanup) = tokio::fs::remove_file(document_path).await {
                tracing::warn!(
                    path = %document_path.display(),
                    error = %cleanup,
                    "Failed to remove document after metadata write failed"
                );
            }
            return Err(e);
        }
        Ok(())
    }

    async fn read_file(path: &Path, id: &str) -> Result<Vec<u8>, StorageError> {
        tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(id.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })
    }

    async fn read_metadata(&self, id: &Uuid) -> Result<BookMetadata, StorageError> {
        let raw = Self::read_file(&self.metadata_path(id), &id.to_string()).await?;
        serde_json::from_slice(&raw).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!(
                "metadata for {}: {}",
                id, e
            )))
        })
    }
}

#[async_trait]
impl BookStorage for FileSystemBookStorage {
    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    async fn save(&self, title: &str, content: Vec<u8>) -> ScriptoriumResult<StoredBook> {
        let id = Uuid::new_v4();
        let metadata = BookMetadata {
            id,
            title: title.to_string(),
            created_at: Utc::now(),
            size_bytes: content.len() as u64,
            sha256: Self::compute_hash(&content),
        };

        let document_path = self.document_path(&id);
        Self::write_book(&document_path, &self.metadata_path(&id), &content, &metadata).await?;

        tracing::info!(
            id = %id,
            hash = %metadata.sha256,
            path = %document_path.display(),
            "Stored book"
        );

        Ok(StoredBook {
            id,
            title: metadata.title,
            content,
            created_at: metadata.created_at,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn load(&self, id: &str) -> ScriptoriumResult<StoredBook> {
        let uuid = parse_id(id)?;
        let metadata = self.read_metadata(&uuid).await?;
        let content = Self::read_file(&self.document_path(&uuid), id).await?;

        let actual = Self::compute_hash(&content);
        if actual != metadata.sha256 {
            return Err(StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: hash mismatch, expected {}, got {}",
                uuid, metadata.sha256, actual
            )))
            .into());
        }

        tracing::debug!(id = %uuid, size = content.len(), "Loaded book");
        Ok(StoredBook {
            id: uuid,
            title: metadata.title,
            content,
            created_at: metadata.created_at,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, page: Page) -> ScriptoriumResult<Vec<BookSummary>> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.base_path.display(),
                e
            )))
        })?;

        let mut summaries = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(e.to_string()))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(uuid) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| Uuid::parse_str(stem).ok())
            else {
                continue;
            };

            match self.read_metadata(&uuid).await {
                Ok(metadata) => summaries.push(metadata.summary()),
                Err(e) => tracing::warn!(error = %e, "Skipping unreadable metadata"),
            }
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect())
    }

    async fn exists(&self, id: &str) -> ScriptoriumResult<bool> {
        let Ok(uuid) = parse_id(id) else {
            return Ok(false);
        };
        Ok(tokio::fs::try_exists(self.metadata_path(&uuid))
            .await
            .unwrap_or(false))
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(content: &[u8]) -> BookMetadata {
        BookMetadata {
            id: Uuid::new_v4(),
            title: "Orphan".to_string(),
            created_at: Utc::now(),
            size_bytes: content.len() as u64,
            sha256: FileSystemBookStorage::compute_hash(content),
        }
    }

    #[tokio::test]
    async fn failed_sidecar_removes_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let document_path = dir.path().join("book.docx");
        let metadata_path = dir.path().join("missing").join("book.json");
        let content = b"PK fake docx".to_vec();

        let result = FileSystemBookStorage::write_book(
            &document_path,
            &metadata_path,
            &content,
            &metadata(&content),
        )
        .await;

        assert!(result.is_err());
        assert!(!document_path.exists());
        assert!(!metadata_path.exists());
    }

    #[tokio::test]
    async fn successful_write_keeps_both_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let document_path = dir.path().join("book.docx");
        let metadata_path = dir.path().join("book.json");
        let content = b"PK fake docx".to_vec();

        FileSystemBookStorage::write_book(
            &document_path,
            &metadata_path,
            &content,
            &metadata(&content),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read(&document_path).unwrap(), content);
        assert!(metadata_path.exists());
    }
}
