//! Input types for model requests.

use serde::{Deserialize, Serialize};

/// Supported input content for a model request.
///
/// The pipeline is text-only: prompts are filled templates, so text is the
/// single input modality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}
