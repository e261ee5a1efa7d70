//! CLI argument parsing for lstshift.
//!
//! Uses clap derive macros for declarative argument definitions. The range
//! arguments are taken as raw strings and validated here so that malformed
//! numbers produce the usage message and exit code 1.

use crate::error::{LstError, Result};
use crate::exit_codes;
use crate::rewrite::ChangeDescriptor;
use clap::Parser;
use std::path::PathBuf;

const USAGE: &str = "usage: lstshift [OPTIONS] <FILE> <START> <OLD_END> <NEW_END> [DOCUMENTS...]\n       \
                     lstshift [OPTIONS]    (derive ranges from the nested repository diff)";

/// Keep `\lstinputlisting` firstline/lastline ranges in sync with source files
/// whose lines shifted.
///
/// Without arguments, the changed blocks are derived from the diff of the
/// nested repository pointer. With arguments, FILE's block starting at START
/// and ending at OLD_END now ends at NEW_END.
#[derive(Parser, Debug)]
#[command(name = "lstshift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// <FILE> <START> <OLD_END> <NEW_END> [DOCUMENTS...]
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Config file (default: .lstshift.yaml in the working directory, if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Nested repository path, overriding the config.
    #[arg(long, value_name = "PATH")]
    pub submodule: Option<String>,

    /// Report what would change without writing documents.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Derive change descriptors from the nested repository diff.
    Derived,
    /// Apply one change descriptor. Empty `documents` means discover them.
    Explicit {
        change: ChangeDescriptor,
        documents: Vec<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Argument errors exit with the user error code; help and version exit 0.
    pub fn parse_args() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = if err.use_stderr() {
                    exit_codes::USER_ERROR
                } else {
                    exit_codes::SUCCESS
                };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }

    /// Interpret the positional arguments.
    pub fn invocation(&self) -> Result<Invocation> {
        if self.args.is_empty() {
            return Ok(Invocation::Derived);
        }
        if self.args.len() < 4 {
            return Err(usage_error("expected <FILE> <START> <OLD_END> <NEW_END>"));
        }

        let change = ChangeDescriptor::new(
            self.args[0].clone(),
            parse_line_number("START", &self.args[1])?,
            parse_line_number("OLD_END", &self.args[2])?,
            parse_line_number("NEW_END", &self.args[3])?,
        );
        let documents = self.args[4..].iter().map(PathBuf::from).collect();

        Ok(Invocation::Explicit { change, documents })
    }
}

fn parse_line_number(name: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| usage_error(&format!("{} must be a line number, got '{}'", name, value)))
}

fn usage_error(detail: &str) -> LstError {
    LstError::UserError(format!("{}\n{}", detail, USAGE))
}
