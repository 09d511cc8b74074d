//! Error types for the Sibyl text-to-SQL pipeline.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use sibyl_error::{SibylResult, ConfigError};
//!
//! fn load_setting() -> SibylResult<String> {
//!     Err(ConfigError::new("SIBYL_MAX_ATTEMPTS is not a number"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod generation;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind, DatabaseResult};
pub use error::{SibylError, SibylErrorKind, SibylResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
