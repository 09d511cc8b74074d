//! Bounded-retry query execution.

use crate::{DatabaseClient, RowSet};
use sibyl_core::ExecutionLog;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Fixed-interval retry policy for query execution.
///
/// Linear retry: a fixed attempt cap and a fixed delay between attempts.
/// No backoff, no jitter, no transient/permanent distinction. Injected
/// into the executor so tests can run with zero delay.
///
/// # Examples
///
/// ```
/// use sibyl_database::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts, 3);
/// assert_eq!(policy.delay, Duration::from_secs(1));
///
/// let fast = RetryPolicy::no_delay(3);
/// assert_eq!(fast.delay, Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of execution attempts.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with an explicit cap and delay.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Zero-delay policy with the given attempt cap.
    pub fn no_delay(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }
}

/// Executes one SQL statement with bounded, fixed-interval retry.
pub struct QueryExecutor {
    client: Arc<dyn DatabaseClient>,
    policy: RetryPolicy,
}

impl QueryExecutor {
    /// Create an executor over a database client and a retry policy.
    pub fn new(client: Arc<dyn DatabaseClient>, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// The policy this executor retries under.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Run one statement, retrying failed attempts up to the cap.
    ///
    /// Every attempt outcome is appended to `log`. Connection and
    /// execution failures are retried identically; after the final failed
    /// attempt the executor returns `None` ("no result") instead of
    /// raising. A successful attempt returns its rows immediately.
    #[instrument(skip(self, sql, log))]
    pub async fn run_query(&self, sql: &str, log: &mut ExecutionLog) -> Option<RowSet> {
        for attempt in 1..=self.policy.max_attempts {
            info!(attempt, "Executing SQL query");
            log.push(format!("Attempt {attempt}: Executing SQL query..."));

            match self.client.fetch_all(sql).await {
                Ok(rows) => {
                    info!(attempt, count = rows.len(), "SQL query executed successfully");
                    log.push("SQL query executed successfully.");
                    return Some(rows);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "SQL attempt failed");
                    log.push(e.kind.to_string());

                    if attempt < self.policy.max_attempts {
                        tokio::time::sleep(self.policy.delay).await;
                    }
                }
            }
        }

        warn!(
            max_attempts = self.policy.max_attempts,
            "No results after exhausting all attempts"
        );
        None
    }
}
