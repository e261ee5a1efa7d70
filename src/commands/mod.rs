//! Command implementations for lstshift.
//!
//! The dispatcher resolves the working directory and config, then routes to
//! explicit-range or diff-derived mode. Results are printed to stdout.

mod report;
mod shift;
mod sync;

use crate::cli::{Cli, Invocation};
use crate::config::Config;
use crate::error::{LstError, Result};
use crate::rewrite::RewriteOptions;
use std::env;
use std::path::PathBuf;

/// Settings shared by both modes.
pub(crate) struct RunContext {
    pub cwd: PathBuf,
    pub config: Config,
    pub options: RewriteOptions,
}

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let invocation = cli.invocation()?;

    let cwd = env::current_dir().map_err(|e| {
        LstError::UserError(format!("failed to get current working directory: {}", e))
    })?;

    let mut config = Config::resolve(&cwd, cli.config.as_deref())?;
    if let Some(submodule) = cli.submodule {
        config.submodule = submodule;
        config.validate()?;
    }

    let ctx = RunContext {
        options: RewriteOptions {
            directive: config.directive.clone(),
            dry_run: cli.dry_run,
        },
        cwd,
        config,
    };

    match invocation {
        Invocation::Derived => sync::cmd_sync(&ctx),
        Invocation::Explicit { change, documents } => shift::cmd_shift(&ctx, change, documents),
    }
}
