//! Image-backend provider error types.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Upstream returned a non-success HTTP status
    #[display("HTTP {} from upstream: {}", status, message)]
    Http {
        /// HTTP status code reported by the backend
        status: u16,
        /// Error body or status text
        message: String,
    },
    /// Request never completed (connection, TLS, timeout at the transport layer)
    #[display("transport failure: {}", _0)]
    Transport(String),
    /// Call completed but the payload was unusable
    #[display("unusable payload from backend: {}", _0)]
    Payload(String),
    /// Required credential for this backend is missing
    #[display("missing credential: {}", _0)]
    MissingCredential(String),
}

/// Error from an image-generation backend, carrying the backend identity.
///
/// Adapters propagate this to the caller unmodified; the router performs no
/// retries.
///
/// # Examples
///
/// ```
/// use vitrine_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(
///     "replicate",
///     ProviderErrorKind::Http {
///         status: 503,
///         message: "overloaded".to_string(),
///     },
/// );
/// assert!(format!("{}", err).contains("replicate"));
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error ({}): {} at line {} in {}", backend, kind, line, file)]
pub struct ProviderError {
    /// Name of the backend that failed (e.g., "gemini", "replicate")
    pub backend: &'static str,
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(backend: &'static str, kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            backend,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
