//! Inbound request validation errors.

/// Reasons a generation request is rejected before any work starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// A required field is absent or blank
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// Body could not be parsed
    #[display("Invalid request body: {}", _0)]
    InvalidBody(String),
    /// Field present but unusable
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidField {
        /// The field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::MissingField("chapter_titles".into()));
/// assert!(format!("{}", err).contains("chapter_titles"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    kind: RequestErrorKind,
    line: u32,
    file: &'static str,
}

impl RequestError {
    /// Create a new request error with caller location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RequestErrorKind {
        &self.kind
    }
}
