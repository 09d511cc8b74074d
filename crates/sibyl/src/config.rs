//! Process-wide configuration.
//!
//! Built once at startup from environment variables and passed by
//! reference into each component; nothing mutates it afterwards.

use sibyl_database::{MySqlConfig, RetryPolicy};
use sibyl_error::ConfigError;
use std::time::Duration;

/// One model identity: a model name and the endpoint serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Model name (e.g., "llama3.2:3b")
    pub name: String,
    /// Ollama base URL
    pub base_url: String,
}

/// Everything the pipeline needs, resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SibylConfig {
    /// Model used for SQL generation
    pub sql_model: ModelConfig,
    /// Model used for natural-language summarization
    pub answer_model: ModelConfig,
    /// Target database connection descriptor
    pub database: MySqlConfig,
    /// Retry policy for query execution
    pub retry: RetryPolicy,
}

impl SibylConfig {
    /// Create config from environment variables.
    ///
    /// Reads (all optional, with defaults):
    /// - `SIBYL_OLLAMA_URL` (default: "http://127.0.0.1:11434")
    /// - `SIBYL_SQL_MODEL` (default: "llama3.2:3b")
    /// - `SIBYL_ANSWER_MODEL` (default: "deepseek-r1:1.5b")
    /// - `SIBYL_DB_HOST` / `SIBYL_DB_USER` / `SIBYL_DB_PASSWORD` / `SIBYL_DB_NAME`
    /// - `SIBYL_MAX_ATTEMPTS` (default: 3)
    /// - `SIBYL_RETRY_DELAY_MS` (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("SIBYL_OLLAMA_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:11434".to_string());

        let sql_model = ModelConfig {
            name: std::env::var("SIBYL_SQL_MODEL").unwrap_or_else(|_| "llama3.2:3b".to_string()),
            base_url: base_url.clone(),
        };
        let answer_model = ModelConfig {
            name: std::env::var("SIBYL_ANSWER_MODEL")
                .unwrap_or_else(|_| "deepseek-r1:1.5b".to_string()),
            base_url,
        };

        let retry = parse_retry_policy(
            std::env::var("SIBYL_MAX_ATTEMPTS").ok(),
            std::env::var("SIBYL_RETRY_DELAY_MS").ok(),
        )?;

        Ok(Self {
            sql_model,
            answer_model,
            database: MySqlConfig::from_env(),
            retry,
        })
    }
}

/// Build the retry policy from raw environment values.
///
/// # Examples
///
/// ```
/// use sibyl::config::parse_retry_policy;
///
/// let policy = parse_retry_policy(Some("5".into()), Some("0".into())).unwrap();
/// assert_eq!(policy.max_attempts, 5);
/// assert!(parse_retry_policy(Some("three".into()), None).is_err());
/// ```
pub fn parse_retry_policy(
    max_attempts: Option<String>,
    delay_ms: Option<String>,
) -> Result<RetryPolicy, ConfigError> {
    let defaults = RetryPolicy::default();

    let max_attempts = match max_attempts {
        Some(raw) => raw.parse::<u32>().map_err(|_| {
            ConfigError::new(format!("SIBYL_MAX_ATTEMPTS is not a number: '{raw}'"))
        })?,
        None => defaults.max_attempts,
    };
    if max_attempts == 0 {
        return Err(ConfigError::new("SIBYL_MAX_ATTEMPTS must be at least 1"));
    }

    let delay = match delay_ms {
        Some(raw) => {
            let millis = raw.parse::<u64>().map_err(|_| {
                ConfigError::new(format!("SIBYL_RETRY_DELAY_MS is not a number: '{raw}'"))
            })?;
            Duration::from_millis(millis)
        }
        None => defaults.delay,
    };

    Ok(RetryPolicy::new(max_attempts, delay))
}
