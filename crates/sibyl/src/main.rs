//! Sibyl CLI binary.
//!
//! Generates SQL from a natural-language question, executes it, and
//! summarizes the result — one linear pipeline per question.

use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use sibyl::cli::{Cli, run};

    // Local .env is optional; real environment variables win.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    run(cli).await
}
