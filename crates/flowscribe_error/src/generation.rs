//! Errors raised while talking to the external generation service.

/// Generation-service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The credential environment variable is unset or empty
    #[display("{} environment variable not set.", _0)]
    CredentialMissing(String),
    /// Transport-level failure reaching the service
    #[display("{}", _0)]
    ServiceFailure(String),
    /// The service answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    ApiStatus {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// The response body did not have the expected shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// The response carried no image generation result
    #[display("No image data in response")]
    NoImage,
    /// The image payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Decode(String),
}

impl GenerationErrorKind {
    /// True when the failure happened before any request was sent.
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, GenerationErrorKind::CredentialMissing(_))
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use flowscribe_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::CredentialMissing(
///     "OPENAI_API_KEY".to_string(),
/// ));
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// assert!(err.kind.is_credential_missing());
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
}
