//! lstshift: keep `\lstinputlisting` line ranges in sync with shifted sources.
//!
//! This is the main entry point for the `lstshift` CLI. It parses arguments,
//! sets up logging, dispatches to the command implementation, and handles
//! errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod discover;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod rewrite;
pub mod sync;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn init_tracing(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    // Only fails if a global subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
