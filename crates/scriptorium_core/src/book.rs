//! Assembled and stored book types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One chapter of an assembled book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chapter {
    /// Heading text
    pub title: String,
    /// Generated prose, newline separated
    pub body: String,
}

impl Chapter {
    /// Create a chapter from a title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Everything the document assembler needs to render a book.
///
/// Built once per request and not changed after assembly.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct BookDocument {
    /// Book title
    title: String,
    /// Author credited on the title page
    author: String,
    /// Chapters in reading order
    chapters: Vec<Chapter>,
    /// Optional cover image (PNG bytes)
    cover: Option<Vec<u8>>,
}

impl BookDocument {
    /// Pair chapter titles with bodies in order.
    ///
    /// Extra titles or bodies beyond the shorter list are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_core::BookDocument;
    ///
    /// let titles = vec!["One".to_string(), "Two".to_string()];
    /// let bodies = vec!["First body".to_string(), "Second body".to_string()];
    /// let book = BookDocument::new("Ink", "Author Name", &titles, bodies, None);
    ///
    /// assert_eq!(book.chapters().len(), 2);
    /// assert_eq!(book.chapters()[1].title, "Two");
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        chapter_titles: &[String],
        chapter_bodies: Vec<String>,
        cover: Option<Vec<u8>>,
    ) -> Self {
        let chapters = chapter_titles
            .iter()
            .zip(chapter_bodies)
            .map(|(title, body)| Chapter::new(title.clone(), body))
            .collect();

        Self {
            title: title.into(),
            author: author.into(),
            chapters,
            cover,
        }
    }
}

/// A persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBook {
    /// Retrieval identifier
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// Serialized document bytes
    #[serde(skip)]
    pub content: Vec<u8>,
    /// When the book was saved
    pub created_at: DateTime<Utc>,
}

impl StoredBook {
    /// Listing view of this book.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
            size_bytes: self.content.len() as u64,
        }
    }

    /// Download filename derived from the title.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_core::StoredBook;
    ///
    /// let book = StoredBook {
    ///     id: uuid::Uuid::new_v4(),
    ///     title: "The \"Last\" Ember".to_string(),
    ///     content: vec![],
    ///     created_at: chrono::Utc::now(),
    /// };
    /// assert_eq!(book.filename(), "The Last Ember.docx");
    /// ```
    pub fn filename(&self) -> String {
        docx_filename(&self.title)
    }
}

/// `{title}.docx` with quotes, slashes and line breaks removed.
///
/// Falls back to `book.docx` when nothing printable is left.
pub fn docx_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '"' | '\\' | '/' | '\r' | '\n'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "book.docx".to_string()
    } else {
        format!("{}.docx", cleaned)
    }
}

/// Title and identifier pair returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookSummary {
    /// Retrieval identifier
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// When the book was saved
    pub created_at: DateTime<Utc>,
    /// Document size in bytes
    pub size_bytes: u64,
}
