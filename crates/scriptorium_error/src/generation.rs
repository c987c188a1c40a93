//! Text generation errors and retry classification.

/// Text generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Upstream signalled rate limiting (HTTP 429)
    #[display("Upstream rate limited: {}", _0)]
    RateLimited(String),
    /// Non-retryable upstream failure
    #[display("Upstream returned HTTP {}: {}", status, message)]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Model answered with nothing but whitespace
    #[display("Empty response from the model")]
    EmptyResponse,
    /// Response did not have the expected payload shape
    #[display("Unexpected response structure from the model: {}", _0)]
    MalformedResponse(String),
    /// Retry budget consumed without a success
    #[display("Max retries exceeded after {} attempts", attempts)]
    RetriesExhausted {
        /// Number of attempts made
        attempts: usize,
    },
    /// Generated section fell below the word-count threshold
    #[display("Generated content too short: {} words, {} required", words, required)]
    ContentTooShort {
        /// Word tokens counted
        words: usize,
        /// Threshold in effect
        required: usize,
    },
    /// Request could not be sent or the body could not be read
    #[display("Transport failure: {}", _0)]
    Transport(String),
}

impl GenerationErrorKind {
    /// Only rate limiting is retried; everything else fails immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationErrorKind::RateLimited(_))
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited("slow down".into()));
/// assert!(err.is_retryable());
///
/// let err = GenerationError::new(GenerationErrorKind::Upstream {
///     status: 401,
///     message: "invalid x-api-key".into(),
/// });
/// assert!(!err.is_retryable());
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

/// Trait for errors that support retry logic.
pub trait RetryableError {
    /// Returns true if this error should trigger another attempt.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
