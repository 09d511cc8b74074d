//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use sibyl_core::{GenerateRequest, GenerateResponse};
use sibyl_error::SibylResult;

/// Core trait that all text-generation backends must implement.
///
/// The pipeline configures two independent drivers: one for SQL
/// generation, one for natural-language summarization. Either may be a
/// different model on a different endpoint.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate model output given a filled prompt request.
    async fn generate(&self, req: &GenerateRequest) -> SibylResult<GenerateResponse>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3.2:3b").
    fn model_name(&self) -> &str;
}
