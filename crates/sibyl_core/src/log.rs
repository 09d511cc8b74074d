//! Per-run execution log.

use serde::{Deserialize, Serialize};

/// Ordered diagnostic messages accumulated during one pipeline run.
///
/// Append-only; discarded with the run's report. Every attempt outcome,
/// generated statement, and failure lands here so the user can expand the
/// full history after the run.
///
/// # Examples
///
/// ```
/// use sibyl_core::ExecutionLog;
///
/// let mut log = ExecutionLog::new();
/// log.push("Generated SQL: SELECT 1;");
/// assert_eq!(log.len(), 1);
/// assert!(log.entries()[0].contains("SELECT 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecutionLog {
    entries: Vec<String>,
}

impl ExecutionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in append order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }
}
