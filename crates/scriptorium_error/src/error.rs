//! Top-level error wrapper types.

use crate::{
    ConfigError, DocumentError, GenerationError, HttpError, ImageError, RequestError,
    StorageError,
};

/// Every failure a Scriptorium crate can surface.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{ScriptoriumError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScriptoriumError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptoriumErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Inbound request rejected
    #[from(RequestError)]
    Request(RequestError),
    /// Text generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Cover image error
    #[from(ImageError)]
    Image(ImageError),
    /// Document assembly error
    #[from(DocumentError)]
    Document(DocumentError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Scriptorium error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{ScriptoriumError, ScriptoriumErrorKind, ScriptoriumResult, ConfigError};
///
/// fn might_fail() -> ScriptoriumResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ScriptoriumErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scriptorium Error: {}", _0)]
pub struct ScriptoriumError(Box<ScriptoriumErrorKind>);

impl ScriptoriumError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptoriumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptoriumErrorKind {
        &self.0
    }

    /// True for request validation failures (client errors).
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ScriptoriumErrorKind::Request(_))
    }

    /// True when a storage lookup found nothing under the identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ScriptoriumErrorKind::Storage(e) if e.is_not_found())
    }

    /// The generation error kind, if this is a generation failure.
    pub fn generation_kind(&self) -> Option<&crate::GenerationErrorKind> {
        match self.kind() {
            ScriptoriumErrorKind::Generation(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl crate::RetryableError for ScriptoriumError {
    fn is_retryable(&self) -> bool {
        self.generation_kind()
            .is_some_and(crate::GenerationErrorKind::is_retryable)
    }
}

// Generic From implementation for any type that converts to ScriptoriumErrorKind
impl<T> From<T> for ScriptoriumError
where
    T: Into<ScriptoriumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scriptorium operations.
pub type ScriptoriumResult<T> = std::result::Result<T, ScriptoriumError>;
