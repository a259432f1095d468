//! Top-level error wrapper types.

use crate::{ConfigError, FlowError, GenerationError, JsonError, StorageError};

/// Every error condition a Flowscribe crate can surface.
///
/// # Examples
///
/// ```
/// use flowscribe_error::{FlowscribeError, FlowscribeErrorKind, JsonError};
///
/// let err: FlowscribeError = JsonError::new("unexpected end of input").into();
/// assert!(matches!(err.kind(), FlowscribeErrorKind::Json(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FlowscribeErrorKind {
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Flow loading error
    #[from(FlowError)]
    Flow(FlowError),
    /// Generation service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Output storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Flowscribe error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Flowscribe Error: {}", _0)]
pub struct FlowscribeError(Box<FlowscribeErrorKind>);

impl FlowscribeError {
    /// Create a new error from a kind.
    pub fn new(kind: FlowscribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FlowscribeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FlowscribeErrorKind
impl<T> From<T> for FlowscribeError
where
    T: Into<FlowscribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Flowscribe operations.
pub type FlowscribeResult<T> = std::result::Result<T, FlowscribeError>;
