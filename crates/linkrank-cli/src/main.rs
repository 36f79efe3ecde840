//! Linkrank CLI
//!
//! Rank the pages of an HTML corpus with a random surfer and with power
//! iteration, and print both estimates side by side.

use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;
use std::process::ExitCode;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (stderr, so stdout stays the report)
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match commands::rank::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<LinkRankError>()
                .map(LinkRankError::exit_code)
                .unwrap_or(exit_codes::GENERAL_ERROR);
            ExitCode::from(code as u8)
        }
    }
}
