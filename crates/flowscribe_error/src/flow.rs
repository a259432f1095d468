//! Flow document error types.

/// Specific error conditions when loading a flow document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FlowErrorKind {
    /// The flow file does not exist
    #[display("File '{}' not found", _0)]
    NotFound(String),
    /// The flow file is not valid JSON
    #[display("Invalid JSON in '{}': {}", path, message)]
    InvalidFormat {
        /// Path of the offending file
        path: String,
        /// Parser diagnostic
        message: String,
        /// 1-based line reported by the parser
        line: usize,
        /// 1-based column reported by the parser
        column: usize,
    },
    /// A required top-level field is absent or has the wrong shape
    #[display("No '{}' field found in JSON", _0)]
    MissingField(String),
    /// Any other failure reading the file (I/O, encoding)
    #[display("Failed to read flow file: {}", _0)]
    FileRead(String),
}

/// Error type for flow loading.
///
/// # Examples
///
/// ```
/// use flowscribe_error::{FlowError, FlowErrorKind};
///
/// let err = FlowError::new(FlowErrorKind::MissingField("steps".to_string()));
/// assert!(format!("{}", err).contains("'steps'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Flow Error: {} at line {} in {}", kind, line, file)]
pub struct FlowError {
    /// The specific error condition
    pub kind: FlowErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl FlowError {
    /// Create a new FlowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FlowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
