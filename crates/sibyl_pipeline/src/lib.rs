//! Question-to-answer orchestration for the Sibyl text-to-SQL pipeline.
//!
//! One linear pipeline per user question: fill the SQL-generation prompt,
//! call the SQL model, sanitize the statement, execute it with bounded
//! retry, call the summarization model over the rows, sanitize again, and
//! report. Nothing survives across runs except configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod pipeline;
mod prompt;
pub mod sanitize;
mod schema;

pub use generator::{AnswerGenerator, SqlGenerator};
pub use pipeline::{Pipeline, PipelineOutcome, PipelineReport, PipelineState};
pub use prompt::{answer_prompt, sql_generation_prompt};
pub use schema::DEFAULT_SCHEMA;
