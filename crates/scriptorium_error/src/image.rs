//! Cover image generation errors.

/// Image generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// Image API answered with a non-success status
    #[display("Image API returned HTTP {}: {}", status, message)]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Transport failure talking to the image API
    #[display("Image request failed: {}", _0)]
    Transport(String),
    /// Response carried no usable artifact
    #[display("No image artifact in response: {}", _0)]
    MissingArtifact(String),
    /// Artifact payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Cover prompt rejected before calling the API
    #[display("Cover prompt rejected: {}", _0)]
    PromptRejected(String),
}

/// Image error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
