//! Core data types for the Sibyl text-to-SQL pipeline.
//!
//! This crate provides the foundation data types shared by the model
//! drivers and the pipeline: conversation messages, generation
//! request/response envelopes, and the per-run execution log.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod log;
mod message;
mod output;
mod request;
mod role;

pub use input::Input;
pub use log::ExecutionLog;
pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
