//! The two model-facing pipeline stages.

use crate::prompt::{answer_prompt, sql_generation_prompt};
use crate::sanitize::{strip_code_fences, strip_reasoning_tags};
use sibyl_core::{GenerateRequest, Message};
use sibyl_database::RowSet;
use sibyl_error::{GenerationError, GenerationErrorKind, SibylResult};
use sibyl_interface::TextDriver;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Translates a natural-language question into raw SQL text.
pub struct SqlGenerator {
    driver: Arc<dyn TextDriver>,
}

impl SqlGenerator {
    /// Create a generator over a text driver.
    pub fn new(driver: Arc<dyn TextDriver>) -> Self {
        Self { driver }
    }

    /// Fill the SQL-generation prompt and invoke the model.
    ///
    /// Returns the raw response text; fence-stripping happens in the
    /// orchestrator. Any driver failure surfaces as a generation error —
    /// the caller aborts the run, there is no retry at this stage.
    #[instrument(skip(self, schema, query))]
    pub async fn generate_sql(&self, schema: &str, query: &str) -> SibylResult<String> {
        let prompt = sql_generation_prompt(schema, query);

        debug!(
            model = %self.driver.model_name(),
            prompt_length = prompt.len(),
            "Requesting SQL generation"
        );

        let req = GenerateRequest {
            messages: vec![Message::user(prompt)],
            model: Some(self.driver.model_name().to_string()),
            ..Default::default()
        };

        let response = self.driver.generate(&req).await?;
        let text = response.text();

        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        Ok(text)
    }
}

/// Summarizes a row set as a natural-language answer.
pub struct AnswerGenerator {
    driver: Arc<dyn TextDriver>,
}

impl AnswerGenerator {
    /// Create a generator over a text driver.
    pub fn new(driver: Arc<dyn TextDriver>) -> Self {
        Self { driver }
    }

    /// Fill the summarization prompt, invoke the model, and sanitize.
    ///
    /// The prompt embeds the stringified rows; empty row sets are
    /// distinguishable before the model is invoked and yield a "no data"
    /// style answer. Output is fence-stripped, then reasoning-stripped.
    #[instrument(skip(self, rows, query), fields(row_count = rows.len()))]
    pub async fn summarize(&self, rows: &RowSet, query: &str) -> SibylResult<String> {
        let prompt = answer_prompt(rows, query);

        debug!(
            model = %self.driver.model_name(),
            prompt_length = prompt.len(),
            "Requesting natural language response"
        );

        let req = GenerateRequest {
            messages: vec![Message::user(prompt)],
            model: Some(self.driver.model_name().to_string()),
            ..Default::default()
        };

        let response = self.driver.generate(&req).await?;
        let text = response.text();

        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        Ok(strip_reasoning_tags(&strip_code_fences(&text)))
    }
}
