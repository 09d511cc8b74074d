//! End-to-end pipeline tests over stub drivers and a stub database.

use async_trait::async_trait;
use sibyl_core::{GenerateRequest, GenerateResponse, Output};
use sibyl_database::{
    DatabaseClient, DatabaseError, DatabaseErrorKind, DatabaseResult, RetryPolicy, Row, RowSet,
    SqlValue,
};
use sibyl_error::{GenerationError, GenerationErrorKind, SibylResult};
use sibyl_interface::TextDriver;
use sibyl_pipeline::{Pipeline, PipelineOutcome};
use std::sync::{Arc, Mutex};

/// Driver that replies with a fixed text, or fails when given none.
struct StubDriver {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubDriver {
    fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextDriver for StubDriver {
    async fn generate(&self, req: &GenerateRequest) -> SibylResult<GenerateResponse> {
        let prompt = req
            .messages
            .iter()
            .flat_map(|m| &m.content)
            .map(|input| match input {
                sibyl_core::Input::Text(text) => text.clone(),
            })
            .collect::<String>();
        self.prompts.lock().unwrap().push(prompt);

        match &self.reply {
            Some(reply) => Ok(GenerateResponse {
                outputs: vec![Output::Text(reply.clone())],
            }),
            None => Err(GenerationError::new(GenerationErrorKind::Api(
                "stub failure".into(),
            )))?,
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// Database stub that always returns the same rows.
struct StaticDatabase {
    rows: RowSet,
    statements: Mutex<Vec<String>>,
}

impl StaticDatabase {
    fn with_rows(rows: RowSet) -> Arc<Self> {
        Arc::new(Self {
            rows,
            statements: Mutex::new(Vec::new()),
        })
    }

    fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatabaseClient for StaticDatabase {
    async fn fetch_all(&self, sql: &str) -> DatabaseResult<RowSet> {
        self.statements.lock().unwrap().push(sql.to_string());
        Ok(self.rows.clone())
    }
}

/// Database stub that never succeeds.
struct DownDatabase;

#[async_trait]
impl DatabaseClient for DownDatabase {
    async fn fetch_all(&self, _sql: &str) -> DatabaseResult<RowSet> {
        Err(DatabaseError::new(DatabaseErrorKind::Connection(
            "refused".into(),
        )))
    }
}

fn sample_rows() -> RowSet {
    RowSet::from(vec![Row(vec![
        SqlValue::Integer(1),
        SqlValue::Text("Alice".into()),
        SqlValue::Integer(34),
    ])])
}

#[tokio::test]
async fn successful_run_completes_with_a_sanitized_answer() {
    let sql_driver = StubDriver::replying("SELECT * FROM users WHERE age > 30;");
    let answer_driver = StubDriver::replying(
        "<think>one matching user</think>One user, Alice (34), matches all conditions.",
    );
    let database = StaticDatabase::with_rows(sample_rows());

    let pipeline = Pipeline::new(
        sql_driver.clone(),
        answer_driver.clone(),
        database.clone(),
        RetryPolicy::no_delay(3),
    );
    let report = pipeline.run("Users older than 30 years").await;

    assert_eq!(
        *report.outcome(),
        PipelineOutcome::Completed {
            answer: "One user, Alice (34), matches all conditions.".to_string(),
        }
    );
    assert_eq!(
        report.generated_sql().as_deref(),
        Some("SELECT * FROM users WHERE age > 30;")
    );
    assert_eq!(*report.rows(), Some(sample_rows()));

    // The executed statement is the sanitized SQL, and the summary prompt
    // embeds the stringified rows.
    assert_eq!(
        database.statements(),
        vec!["SELECT * FROM users WHERE age > 30;".to_string()]
    );
    assert!(answer_driver.prompts()[0].contains("[(1, 'Alice', 34)]"));

    // Log carries the generated statement and the timing entry.
    assert!(report.log().iter().any(|e| e.starts_with("Generated SQL:")));
    assert!(report.log().iter().any(|e| e.starts_with("Total time taken:")));
}

#[tokio::test]
async fn sql_generation_failure_aborts_before_execution() {
    let sql_driver = StubDriver::failing();
    let answer_driver = StubDriver::replying("unused");
    let database = StaticDatabase::with_rows(sample_rows());

    let pipeline = Pipeline::new(
        sql_driver,
        answer_driver.clone(),
        database.clone(),
        RetryPolicy::no_delay(3),
    );
    let report = pipeline.run("anything").await;

    assert!(matches!(
        report.outcome(),
        PipelineOutcome::Failed { error } if error.contains("Generation Error")
    ));
    assert_eq!(*report.generated_sql(), None);
    assert_eq!(*report.rows(), None);

    // The database and the summary model were never touched.
    assert!(database.statements().is_empty());
    assert!(answer_driver.prompts().is_empty());
    assert!(
        report
            .log()
            .iter()
            .any(|e| e.starts_with("Error generating SQL query:"))
    );
}

#[tokio::test]
async fn exhausted_execution_reports_no_results_without_raising() {
    let sql_driver = StubDriver::replying("SELECT * FROM users;");
    let answer_driver = StubDriver::replying("unused");
    let pipeline = Pipeline::new(
        sql_driver,
        answer_driver.clone(),
        Arc::new(DownDatabase),
        RetryPolicy::no_delay(3),
    );

    let report = pipeline.run("all users").await;

    assert_eq!(*report.outcome(), PipelineOutcome::NoResults);
    assert_eq!(report.generated_sql().as_deref(), Some("SELECT * FROM users;"));
    assert_eq!(*report.rows(), None);
    assert!(answer_driver.prompts().is_empty());

    let failures = report
        .log()
        .iter()
        .filter(|e| e.contains("Error connecting"))
        .count();
    assert_eq!(failures, 3);
}

#[tokio::test]
async fn summary_failure_degrades_but_keeps_the_rows() {
    let sql_driver = StubDriver::replying("SELECT * FROM users;");
    let answer_driver = StubDriver::failing();
    let database = StaticDatabase::with_rows(sample_rows());

    let pipeline = Pipeline::new(
        sql_driver,
        answer_driver,
        database,
        RetryPolicy::no_delay(3),
    );
    let report = pipeline.run("all users").await;

    assert!(matches!(
        report.outcome(),
        PipelineOutcome::CompletedWithoutSummary { summary_error }
            if summary_error.contains("Generation Error")
    ));
    assert_eq!(*report.rows(), Some(sample_rows()));
    assert!(
        report
            .log()
            .iter()
            .any(|e| e.starts_with("Error generating natural language response:"))
    );
}

#[tokio::test]
async fn empty_row_sets_still_reach_the_summarizer() {
    let sql_driver = StubDriver::replying("SELECT * FROM users WHERE age > 200;");
    let answer_driver = StubDriver::replying("There is no data matching the query.");
    let database = StaticDatabase::with_rows(RowSet::default());

    let pipeline = Pipeline::new(
        sql_driver,
        answer_driver.clone(),
        database,
        RetryPolicy::no_delay(3),
    );
    let report = pipeline.run("users older than 200").await;

    assert_eq!(
        *report.outcome(),
        PipelineOutcome::Completed {
            answer: "There is no data matching the query.".to_string(),
        }
    );
    assert_eq!(*report.rows(), Some(RowSet::default()));
    assert!(answer_driver.prompts()[0].contains("SQL query result: []"));
}

#[tokio::test]
async fn fenced_sql_is_discarded_by_the_fence_stripper() {
    // Latent-defect regression: the fence stripper keeps text OUTSIDE the
    // fences, so a model that fences its SQL produces an empty statement.
    let sql_driver = StubDriver::replying("```sql\nSELECT * FROM users;\n```");
    let answer_driver = StubDriver::replying("unused");
    let database = StaticDatabase::with_rows(sample_rows());

    let pipeline = Pipeline::new(
        sql_driver,
        answer_driver,
        database.clone(),
        RetryPolicy::no_delay(3),
    );
    let report = pipeline.run("all users").await;

    assert_eq!(report.generated_sql().as_deref(), Some(""));
    assert_eq!(database.statements(), vec![String::new()]);
}
