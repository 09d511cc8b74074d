//! Ollama client implementation.

use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest as OllamaRequest;

use super::conversion::{messages_to_prompt, response_to_output};
use async_trait::async_trait;
use sibyl_core::{GenerateRequest, GenerateResponse};
use sibyl_error::{GenerationError, GenerationErrorKind, GenerationResult, SibylResult};
use sibyl_interface::TextDriver;
use tracing::{debug, info, instrument, warn};

/// Default Ollama API port.
const OLLAMA_PORT: u16 = 11434;

/// Ollama client for local model execution.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// Ollama client instance
    client: Ollama,

    /// Model name (e.g., "llama3.2:3b", "deepseek-r1:1.5b")
    model_name: String,

    /// Ollama server URL
    base_url: String,
}

impl OllamaClient {
    /// Create a new Ollama client with default localhost connection.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self::new_with_url(model_name, "http://127.0.0.1:11434")
    }

    /// Create a new Ollama client with custom server URL.
    #[instrument(name = "ollama_client_new_with_url", skip(model_name, base_url))]
    pub fn new_with_url(
        model_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model_name = model_name.into();
        let base_url = base_url.into();

        info!(
            model = %model_name,
            url = %base_url,
            "Creating Ollama client"
        );

        let client = Ollama::new(base_url.clone(), OLLAMA_PORT);

        Self {
            client,
            model_name,
            base_url,
        }
    }

    /// Check that the Ollama server is running and the model is available.
    #[instrument(skip(self))]
    pub async fn validate(&self) -> GenerationResult<()> {
        debug!("Validating Ollama server and model availability");

        match self.client.list_local_models().await {
            Ok(models) => {
                debug!(count = models.len(), "Found local models");

                let model_exists = models.iter().any(|m| m.name == self.model_name);

                if !model_exists {
                    warn!(
                        model = %self.model_name,
                        available = ?models.iter().map(|m| &m.name).collect::<Vec<_>>(),
                        "Model not found locally"
                    );

                    return Err(GenerationError::new(GenerationErrorKind::ModelNotFound(
                        self.model_name.clone(),
                    )));
                }

                info!("Ollama server and model validated");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to connect to Ollama server");
                Err(GenerationError::new(GenerationErrorKind::ServerNotRunning(
                    self.base_url.clone(),
                )))
            }
        }
    }
}

#[async_trait]
impl TextDriver for OllamaClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> SibylResult<GenerateResponse> {
        debug!("Generating with Ollama");

        let prompt = messages_to_prompt(&req.messages);

        debug!(prompt_length = prompt.len(), "Converted messages to prompt");

        let model = req.model.clone().unwrap_or_else(|| self.model_name.clone());
        let ollama_req = OllamaRequest::new(model, prompt);

        let response = self
            .client
            .generate(ollama_req)
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Api(e.to_string())))?;

        debug!(
            response_length = response.response.len(),
            "Received response from Ollama"
        );

        Ok(GenerateResponse {
            outputs: vec![response_to_output(response)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
