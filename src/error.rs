//! Error types for the lstshift CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::Path;
use thiserror::Error;

/// Main error type for lstshift operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum LstError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A document could not be read or written.
    #[error("I/O failed: {0}")]
    IoError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The old or new subproject commit could not be determined.
    #[error("Could not resolve subproject commits: {0}")]
    ResolutionError(String),
}

impl LstError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LstError::UserError(_) => exit_codes::USER_ERROR,
            LstError::IoError(_) => exit_codes::IO_FAILURE,
            LstError::GitError(_) => exit_codes::GIT_FAILURE,
            LstError::ResolutionError(_) => exit_codes::RESOLUTION_FAILURE,
        }
    }

    /// Wrap an `io::Error` raised while touching `path`.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        LstError::IoError(format!("failed to {} '{}': {}", action, path.display(), err))
    }
}

/// Result type alias for lstshift operations.
pub type Result<T> = std::result::Result<T, LstError>;
