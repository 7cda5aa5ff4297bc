//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, ProviderError};

/// This is the foundation error enum for the Vitrine workspace.
///
/// # Examples
///
/// ```
/// use vitrine_error::{ConfigError, VitrineError};
///
/// let config_err = ConfigError::new("credential missing");
/// let err: VitrineError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VitrineErrorKind {
    /// Configuration error (missing credential, bad model identifier)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Image-backend provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Content generation error (validation of model responses)
    #[from(GenerationError)]
    Generation(GenerationError),
}

/// Vitrine error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vitrine_error::{GenerationError, GenerationErrorKind, VitrineResult};
///
/// fn parse_copy() -> VitrineResult<()> {
///     Err(GenerationError::new(GenerationErrorKind::NoImageReturned))?
/// }
///
/// match parse_copy() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vitrine Error: {}", _0)]
pub struct VitrineError(Box<VitrineErrorKind>);

impl VitrineError {
    /// Create a new error from a kind.
    pub fn new(kind: VitrineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VitrineErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VitrineErrorKind
impl<T> From<T> for VitrineError
where
    T: Into<VitrineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine_error::{ConfigError, VitrineResult};
///
/// fn init() -> VitrineResult<()> {
///     Err(ConfigError::new("GEMINI_API_KEY environment variable not set"))?
/// }
/// ```
pub type VitrineResult<T> = std::result::Result<T, VitrineError>;
