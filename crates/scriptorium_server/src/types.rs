//! Response bodies.

use scriptorium_core::{BookSummary, StoredBook};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a successful `POST /api/generate-book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBookResponse {
    /// Retrieval identifier
    pub id: Uuid,
    /// Generated title
    pub title: String,
    /// Download path for the document
    pub url: String,
}

impl From<&StoredBook> for GenerateBookResponse {
    fn from(book: &StoredBook) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            url: format!("/api/books/{}", book.id),
        }
    }
}

/// Body of `GET /api/books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListResponse {
    /// Books on this page, newest first
    pub books: Vec<BookSummary>,
    /// Page number
    pub page: u32,
    /// Page size in effect
    pub page_size: u32,
}

/// A plain message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text
    pub message: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" while the service is up
    pub status: String,
}
