//! In-process book storage.

use crate::parse_id;
use async_trait::async_trait;
use chrono::Utc;
use scriptorium_core::{BookSummary, Page, StoredBook};
use scriptorium_error::{ScriptoriumResult, StorageError, StorageErrorKind};
use scriptorium_interface::BookStorage;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps every saved book in memory; contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemoryBookStorage {
    books: RwLock<BTreeMap<Uuid, StoredBook>>,
}

impl InMemoryBookStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// True when nothing has been saved.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStorage for InMemoryBookStorage {
    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    async fn save(&self, title: &str, content: Vec<u8>) -> ScriptoriumResult<StoredBook> {
        let book = StoredBook {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content,
            created_at: Utc::now(),
        };

        self.books.write().await.insert(book.id, book.clone());
        tracing::debug!(id = %book.id, "Stored book in memory");
        Ok(book)
    }

    async fn load(&self, id: &str) -> ScriptoriumResult<StoredBook> {
        let uuid = parse_id(id)?;
        let books = self.books.read().await;
        let book = books
            .get(&uuid)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))?;
        Ok(book)
    }

    async fn list(&self, page: Page) -> ScriptoriumResult<Vec<BookSummary>> {
        let books = self.books.read().await;
        let mut summaries: Vec<BookSummary> = books.values().map(StoredBook::summary).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(summaries
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect())
    }

    async fn exists(&self, id: &str) -> ScriptoriumResult<bool> {
        match parse_id(id) {
            Ok(uuid) => Ok(self.books.read().await.contains_key(&uuid)),
            Err(_) => Ok(false),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
