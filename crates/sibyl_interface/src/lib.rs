//! Driver traits for the Sibyl text-to-SQL pipeline.
//!
//! The pipeline never talks to a model runtime directly; it goes through
//! [`TextDriver`] so tests can substitute deterministic stubs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::TextDriver;
