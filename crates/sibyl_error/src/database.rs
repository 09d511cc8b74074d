//! Database error types.

/// Database error conditions.
///
/// The executor makes no transient/permanent distinction between the two
/// kinds: both are retried identically up to the attempt cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DatabaseErrorKind {
    /// The database could not be reached
    #[display("Error connecting to MySQL database: {}", _0)]
    Connection(String),
    /// The database rejected the statement (syntax, permissions, etc.)
    #[display("Error executing SQL query: {}", _0)]
    Execution(String),
}

/// Database error with source location tracking.
///
/// # Examples
///
/// ```
/// use sibyl_error::{DatabaseError, DatabaseErrorKind};
///
/// let err = DatabaseError::new(DatabaseErrorKind::Connection("refused".into()));
/// assert!(format!("{}", err).contains("connecting"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Database Error: {} at line {} in {}", kind, line, file)]
pub struct DatabaseError {
    /// The kind of error that occurred
    pub kind: DatabaseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new DatabaseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for database operations.
pub type DatabaseResult<T> = std::result::Result<T, DatabaseError>;
