//! Content generation error types.

/// Generation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The image call completed but no candidate carried inline image data
    #[display("image call returned no candidate with inline image data")]
    NoImageReturned,
    /// Structured text failed to parse or was missing required fields
    #[display("structured response did not match the expected shape: {}", _0)]
    MalformedResponse(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::NoImageReturned);
/// assert!(format!("{}", err).contains("no candidate"));
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

    /// Shorthand for a malformed-response error.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::MalformedResponse(message.into()))
    }
}
