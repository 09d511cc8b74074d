//! Query execution with bounded retry for the Sibyl text-to-SQL pipeline.
//!
//! Model-generated SQL arrives as an opaque string, so execution goes
//! through sqlx's raw query interface and rows decode into the dynamic
//! [`SqlValue`] sum type. Each execution attempt acquires a fresh
//! connection and releases it before the attempt ends; the
//! [`QueryExecutor`] retries failed attempts on a fixed-interval
//! [`RetryPolicy`] and degrades to "no result" after the cap.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod executor;
mod value;

pub use client::{DatabaseClient, MySqlClient};
pub use config::MySqlConfig;
pub use executor::{QueryExecutor, RetryPolicy};
pub use value::{Row, RowSet, SqlValue};

pub use sibyl_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
