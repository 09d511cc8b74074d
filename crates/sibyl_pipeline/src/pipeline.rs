//! The pipeline orchestrator.

use crate::generator::{AnswerGenerator, SqlGenerator};
use crate::sanitize::strip_code_fences;
use crate::schema::DEFAULT_SCHEMA;
use sibyl_core::ExecutionLog;
use sibyl_database::{DatabaseClient, QueryExecutor, RetryPolicy, RowSet};
use sibyl_interface::TextDriver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Pipeline run states.
///
/// `GeneratingSql` failure goes straight to the terminal `Failed` state,
/// bypassing execution. Execution attempts loop inside the executor until
/// `Success` or the attempt cap (`Exhausted` — terminal, reported as "no
/// results", distinct from `Failed`). `SummarizingAnswer` is reachable
/// only from `Success`. No state is resumable; every run starts from
/// `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PipelineState {
    /// No run in progress.
    Idle,
    /// First model call in flight.
    GeneratingSql,
    /// Execution attempts in progress; the attempt counter lives in the
    /// executor's retry loop.
    ExecutingSql,
    /// A statement executed and rows were fetched.
    Success,
    /// Every execution attempt failed.
    Exhausted,
    /// Second model call in flight.
    SummarizingAnswer,
    /// Run finished with a report.
    Done,
    /// SQL generation failed; nothing was executed.
    Failed,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Rows fetched and summarized.
    Completed {
        /// Sanitized natural-language answer.
        answer: String,
    },
    /// Rows fetched but the summary model failed; the rows are still
    /// shown, only the summary is missing.
    CompletedWithoutSummary {
        /// Human-readable description of the summarization failure.
        summary_error: String,
    },
    /// Every execution attempt failed; reported as a warning, not an
    /// error.
    NoResults,
    /// SQL generation failed; the run aborted before touching the
    /// database.
    Failed {
        /// Human-readable description of the generation failure.
        error: String,
    },
}

/// Everything one run produced, for rendering.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct PipelineReport {
    /// How the run ended.
    outcome: PipelineOutcome,
    /// The sanitized statement, when generation succeeded.
    generated_sql: Option<String>,
    /// The fetched rows, when an execution attempt succeeded.
    rows: Option<RowSet>,
    /// Wall-clock duration of the whole run.
    elapsed: Duration,
    /// Per-run diagnostic log.
    log: ExecutionLog,
}

/// The linear question-to-answer pipeline.
///
/// Holds two independently configured text drivers (SQL generation and
/// summarization), a retrying query executor, and the schema description.
/// Strictly sequential inside a run; every call to [`Pipeline::run`]
/// starts fresh.
pub struct Pipeline {
    sql_generator: SqlGenerator,
    answer_generator: AnswerGenerator,
    executor: QueryExecutor,
    schema: String,
}

impl Pipeline {
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        sql_driver: Arc<dyn TextDriver>,
        answer_driver: Arc<dyn TextDriver>,
        database: Arc<dyn DatabaseClient>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            sql_generator: SqlGenerator::new(sql_driver),
            answer_generator: AnswerGenerator::new(answer_driver),
            executor: QueryExecutor::new(database, policy),
            schema: DEFAULT_SCHEMA.to_string(),
        }
    }

    /// Replace the schema description embedded in the SQL prompt.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Run the pipeline once for one question.
    ///
    /// Never returns an error: every failure mode is folded into the
    /// report's outcome, and every failure is appended to the report's
    /// execution log.
    #[instrument(skip(self, query))]
    pub async fn run(&self, query: &str) -> PipelineReport {
        let started = Instant::now();
        let mut log = ExecutionLog::new();

        let mut state = PipelineState::GeneratingSql;
        info!(state = %state, "Generating SQL query");

        let sql = match self.sql_generator.generate_sql(&self.schema, query).await {
            Ok(raw) => strip_code_fences(&raw),
            Err(e) => {
                state = PipelineState::Failed;
                debug!(state = %state, "Run aborted");
                log.push(format!("Error generating SQL query: {e}"));
                return PipelineReport {
                    outcome: PipelineOutcome::Failed {
                        error: e.to_string(),
                    },
                    generated_sql: None,
                    rows: None,
                    elapsed: started.elapsed(),
                    log,
                };
            }
        };
        log.push(format!("Generated SQL: {sql}"));

        state = PipelineState::ExecutingSql;
        debug!(state = %state, "Executing generated statement");
        let fetched = self.executor.run_query(&sql, &mut log).await;

        let (outcome, rows) = match fetched {
            None => {
                state = PipelineState::Exhausted;
                debug!(state = %state, "No results after all attempts");
                (PipelineOutcome::NoResults, None)
            }
            Some(rows) => {
                state = PipelineState::Success;
                debug!(state = %state, count = rows.len(), "Rows fetched");

                state = PipelineState::SummarizingAnswer;
                info!(state = %state, "Generating natural language response");
                match self.answer_generator.summarize(&rows, query).await {
                    Ok(answer) => (PipelineOutcome::Completed { answer }, Some(rows)),
                    Err(e) => {
                        // Degrade rather than abort: the rows were
                        // already obtained.
                        log.push(format!("Error generating natural language response: {e}"));
                        (
                            PipelineOutcome::CompletedWithoutSummary {
                                summary_error: e.to_string(),
                            },
                            Some(rows),
                        )
                    }
                }
            }
        };

        let elapsed = started.elapsed();
        log.push(format!(
            "Total time taken: {:.2} seconds",
            elapsed.as_secs_f64()
        ));

        state = PipelineState::Done;
        debug!(state = %state, "Run complete");

        PipelineReport {
            outcome,
            generated_sql: Some(sql),
            rows,
            elapsed,
            log,
        }
    }
}
