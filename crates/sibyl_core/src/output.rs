//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// Supported output content from a model response.
///
/// # Examples
///
/// ```
/// use sibyl_core::Output;
///
/// let out = Output::Text("SELECT 1;".to_string());
/// assert_eq!(out, Output::Text("SELECT 1;".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}
