//! Database client trait and MySQL implementation.

use crate::{MySqlConfig, Row, RowSet, SqlValue};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sibyl_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::{Connection, Row as _};
use tracing::{debug, instrument};

/// One execution attempt against the database.
///
/// An implementation acquires a fresh connection, executes the statement,
/// fetches every resulting row, and releases the connection before
/// returning — success or failure. Retry lives in
/// [`QueryExecutor`](crate::QueryExecutor), not here, so tests can
/// substitute deterministic clients.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Execute one statement and fetch all rows.
    async fn fetch_all(&self, sql: &str) -> DatabaseResult<RowSet>;
}

/// MySQL client opening one synchronous-style connection per attempt.
///
/// Connections are never pooled or reused across attempts or runs.
#[derive(Debug, Clone)]
pub struct MySqlClient {
    config: MySqlConfig,
}

impl MySqlClient {
    /// Create a client over the given connection descriptor.
    pub fn new(config: MySqlConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DatabaseClient for MySqlClient {
    #[instrument(skip(self, sql), fields(database = %self.config.database))]
    async fn fetch_all(&self, sql: &str) -> DatabaseResult<RowSet> {
        let mut conn = MySqlConnection::connect(&self.config.url())
            .await
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;

        let fetched = sqlx::query(sql)
            .fetch_all(&mut conn)
            .await
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Execution(e.to_string())));

        // The connection is scoped to this attempt: close it before the
        // attempt ends, whatever the outcome.
        let _ = conn.close().await;

        let fetched = fetched?;
        debug!(count = fetched.len(), "Fetched rows");

        Ok(RowSet::from(
            fetched.iter().map(decode_row).collect::<Vec<_>>(),
        ))
    }
}

fn decode_row(row: &MySqlRow) -> Row {
    Row((0..row.len()).map(|idx| decode_value(row, idx)).collect())
}

/// Decode one column into the dynamic value model.
///
/// Column types are unknown at compile time, so decoding probes the
/// native kinds in order. SQL NULL falls through every probe as
/// `Ok(None)` and lands on `Null`.
fn decode_value(row: &MySqlRow, idx: usize) -> SqlValue {
    if let Ok(Some(v)) = row.try_get::<Option<i64>, _>(idx) {
        return SqlValue::Integer(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<f64>, _>(idx) {
        return SqlValue::Float(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<NaiveDate>, _>(idx) {
        return SqlValue::Date(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<NaiveDateTime>, _>(idx) {
        // The value model carries a single DATE temporal kind; render
        // finer-grained timestamps as text.
        return SqlValue::Text(v.to_string());
    }
    if let Ok(Some(v)) = row.try_get::<Option<String>, _>(idx) {
        return SqlValue::Text(v);
    }
    SqlValue::Null
}
