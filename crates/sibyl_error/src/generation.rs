//! Model generation error types.

/// Generation error conditions for text-generation model calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Model server is not reachable at the configured URL
    #[display("Model server not running at {}", _0)]
    ServerNotRunning(String),
    /// Requested model is not available on the server
    #[display("Model '{}' not found on server", _0)]
    ModelNotFound(String),
    /// The model API call itself failed
    #[display("Model API error: {}", _0)]
    Api(String),
    /// The model returned no usable text content
    #[display("Model returned an empty response")]
    EmptyResponse,
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use sibyl_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty response"));
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

/// Result type for model generation operations.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
