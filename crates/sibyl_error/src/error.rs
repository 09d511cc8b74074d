//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError, GenerationError};

/// The foundation error enum covering every failure domain in the pipeline.
///
/// # Examples
///
/// ```
/// use sibyl_error::{SibylError, GenerationError, GenerationErrorKind};
///
/// let model_err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// let err: SibylError = model_err.into();
/// assert!(format!("{}", err).contains("Generation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SibylErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Sibyl error with kind discrimination.
///
/// # Examples
///
/// ```
/// use sibyl_error::{SibylResult, ConfigError};
///
/// fn might_fail() -> SibylResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sibyl Error: {}", _0)]
pub struct SibylError(Box<SibylErrorKind>);

impl SibylError {
    /// Create a new error from a kind.
    pub fn new(kind: SibylErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SibylErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SibylErrorKind
impl<T> From<T> for SibylError
where
    T: Into<SibylErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Sibyl operations.
///
/// # Examples
///
/// ```
/// use sibyl_error::{SibylResult, GenerationError, GenerationErrorKind};
///
/// fn call_model() -> SibylResult<String> {
///     Err(GenerationError::new(GenerationErrorKind::Api("timeout".into())))?
/// }
/// ```
pub type SibylResult<T> = std::result::Result<T, SibylError>;
