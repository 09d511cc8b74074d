//! Facade crate for the Sibyl text-to-SQL CLI.
//!
//! Wires configuration, the Ollama drivers, the MySQL client, and the
//! pipeline together behind a command-line surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod render;
