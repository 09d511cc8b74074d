//! Model provider integrations for the Sibyl text-to-SQL pipeline.
//!
//! Currently a single provider: Ollama, reached over a local network
//! endpoint. Both pipeline models (SQL generation and summarization) are
//! served through [`OllamaClient`] instances with independent model names.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ollama;

pub use ollama::{OllamaClient, messages_to_prompt};
