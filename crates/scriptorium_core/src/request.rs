//! Inbound book generation request.

use scriptorium_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Deserializer, Serialize};

/// A book outline submitted for generation.
///
/// Missing fields deserialize to empty values so that [`validate`](Self::validate)
/// can report them before any generation work starts. Blank chapter titles
/// are dropped together with the elaboration at the same position, so the
/// remaining notes stay with their chapters.
///
/// # Examples
///
/// ```
/// use scriptorium_core::GenerationRequest;
///
/// let request: GenerationRequest = serde_json::from_str(r#"{
///     "writing_style": "Wry and warm",
///     "book_description": "A lighthouse keeper's last winter",
///     "chapter_titles": "Arrival, Storm, Thaw"
/// }"#).unwrap();
///
/// assert_eq!(request.chapter_titles, vec!["Arrival", "Storm", "Thaw"]);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.elaboration(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawRequest")]
pub struct GenerationRequest {
    /// Writing style the prose should imitate
    pub writing_style: String,
    /// Plot or premise of the book
    pub book_description: String,
    /// Chapter titles in order
    pub chapter_titles: Vec<String>,
    /// Optional per-chapter notes, aligned by index with the titles
    pub chapter_elaborations: Vec<String>,
    /// Author shown on the title page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl GenerationRequest {
    /// Construct a request from its parts.
    pub fn new(
        writing_style: impl Into<String>,
        book_description: impl Into<String>,
        chapter_titles: Vec<String>,
        chapter_elaborations: Vec<String>,
    ) -> Self {
        let (chapter_titles, chapter_elaborations) =
            drop_blank_titles(chapter_titles, chapter_elaborations);
        Self {
            writing_style: writing_style.into(),
            book_description: book_description.into(),
            chapter_titles,
            chapter_elaborations,
            author: None,
        }
    }

    /// Check that style, description, and at least one chapter title are present.
    pub fn validate(&self) -> Result<(), RequestError> {
        let mut missing = Vec::new();
        if self.writing_style.trim().is_empty() {
            missing.push("writing_style");
        }
        if self.book_description.trim().is_empty() {
            missing.push("book_description");
        }
        if self.chapter_titles.iter().all(|t| t.trim().is_empty()) {
            missing.push("chapter_titles");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RequestError::new(RequestErrorKind::MissingField(
                missing.join(", "),
            )))
        }
    }

    /// The elaboration note for chapter `index`, if one was given and is not blank.
    ///
    /// A list shorter than the titles is fine; missing entries read as `None`.
    pub fn elaboration(&self, index: usize) -> Option<&str> {
        self.chapter_elaborations
            .get(index)
            .map(|note| note.trim())
            .filter(|note| !note.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Titles {
    List(Vec<String>),
    Joined(String),
}

/// Accept either a JSON array of titles or one comma-separated string.
///
/// Positions are kept so titles still line up with their elaborations.
fn deserialize_titles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let titles = match Titles::deserialize(deserializer)? {
        Titles::List(list) => list,
        Titles::Joined(joined) => joined.split(',').map(str::to_string).collect(),
    };

    Ok(titles.into_iter().map(|t| t.trim().to_string()).collect())
}

/// Remove blank titles and the elaborations at their positions.
fn drop_blank_titles(titles: Vec<String>, elaborations: Vec<String>) -> (Vec<String>, Vec<String>) {
    let blank: Vec<bool> = titles.iter().map(|t| t.trim().is_empty()).collect();

    let titles = titles
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.trim().to_string())
        .collect();
    let elaborations = elaborations
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !blank.get(*index).copied().unwrap_or(false))
        .map(|(_, note)| note)
        .collect();

    (titles, elaborations)
}

/// Wire shape of [`GenerationRequest`] before blank titles are removed.
#[derive(Deserialize)]
struct RawRequest {
    #[serde(default)]
    writing_style: String,
    #[serde(default)]
    book_description: String,
    #[serde(default, deserialize_with = "deserialize_titles")]
    chapter_titles: Vec<String>,
    #[serde(default)]
    chapter_elaborations: Vec<String>,
    #[serde(default)]
    author: Option<String>,
}

impl From<RawRequest> for GenerationRequest {
    fn from(raw: RawRequest) -> Self {
        let (chapter_titles, chapter_elaborations) =
            drop_blank_titles(raw.chapter_titles, raw.chapter_elaborations);
        Self {
            writing_style: raw.writing_style,
            book_description: raw.book_description,
            chapter_titles,
            chapter_elaborations,
            author: raw.author,
        }
    }
}
