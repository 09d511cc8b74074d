//! Command-line surface.

use crate::config::SibylConfig;
use crate::render::render_table;
use clap::Parser;
use sibyl_database::MySqlClient;
use sibyl_models::OllamaClient;
use sibyl_pipeline::{DEFAULT_SCHEMA, Pipeline, PipelineOutcome, PipelineReport};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::warn;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sibyl",
    about = "Generate SQL from natural language and summarize the results",
    version
)]
pub struct Cli {
    /// Natural-language question; starts an interactive prompt when omitted
    pub question: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Print the execution log after each run
    #[arg(long)]
    pub log: bool,
}

/// Assemble the pipeline from configuration and serve the request(s).
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SibylConfig::from_env()?;

    let sql_driver = Arc::new(OllamaClient::new_with_url(
        config.sql_model.name.clone(),
        config.sql_model.base_url.clone(),
    ));
    let answer_driver = Arc::new(OllamaClient::new_with_url(
        config.answer_model.name.clone(),
        config.answer_model.base_url.clone(),
    ));

    // Surface unreachable servers or missing models early; the pipeline
    // still reports any failure through its own run report.
    if let Err(e) = sql_driver.validate().await {
        warn!(error = %e, "SQL model validation failed");
    }
    if let Err(e) = answer_driver.validate().await {
        warn!(error = %e, "Answer model validation failed");
    }

    let database = Arc::new(MySqlClient::new(config.database.clone()));
    let pipeline = Pipeline::new(sql_driver, answer_driver, database, config.retry);

    match cli.question {
        Some(question) => run_once(&pipeline, &question, cli.log).await,
        None => interactive(&pipeline, cli.log).await,
    }
}

/// Run the pipeline for one question and render the report.
async fn run_once(
    pipeline: &Pipeline,
    question: &str,
    show_log: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if question.trim().is_empty() {
        println!("Please enter a query.");
        return Ok(());
    }

    let report = pipeline.run(question).await;
    render_report(&report, show_log);
    Ok(())
}

/// Prompt loop: one pipeline run per question, empty line or EOF exits.
async fn interactive(
    pipeline: &Pipeline,
    show_log: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Database Schema:\n{DEFAULT_SCHEMA}\n");

    let stdin = std::io::stdin();
    loop {
        print!("How can I help you?: ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let question = input.trim();
        if question.is_empty() {
            break;
        }

        run_once(pipeline, question, show_log).await?;
        println!();
    }
    Ok(())
}

fn render_report(report: &PipelineReport, show_log: bool) {
    if let Some(sql) = report.generated_sql() {
        println!("Generated SQL:\n{sql}\n");
    }

    match report.outcome() {
        PipelineOutcome::Completed { answer } => {
            print_rows(report);
            println!("Natural Language Response:\n{answer}");
        }
        PipelineOutcome::CompletedWithoutSummary { summary_error } => {
            print_rows(report);
            println!("Natural language response unavailable: {summary_error}");
        }
        PipelineOutcome::NoResults => {
            println!("No results returned by the SQL query after multiple attempts.");
        }
        PipelineOutcome::Failed { error } => {
            println!("Error generating SQL query: {error}");
        }
    }

    println!(
        "\nTotal time taken: {:.2} seconds",
        report.elapsed().as_secs_f64()
    );

    if show_log {
        println!("\nExecution Log:");
        for entry in report.log().iter() {
            println!("- {entry}");
        }
    }
}

fn print_rows(report: &PipelineReport) {
    if let Some(rows) = report.rows() {
        println!("Query Results:");
        println!("{}", render_table(rows));
    }
}
