//! Ollama text-generation client.

mod client;
mod conversion;

pub use client::OllamaClient;
pub use conversion::{messages_to_prompt, response_to_output};
