//! Binary crate for the `herecast` command-line tool.
//!
//! This crate focuses on:
//! - Logging initialization
//! - Running the forecast chain
//! - Mapping failures to a single error line and a nonzero exit

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays a clean report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    if let Err(err) = cmd.run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
