//! Exit code constants for the lstshift CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Document I/O failure
//! - 3: Git operation failure
//! - 4: Subproject pointer resolution failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or unparseable arguments, invalid configuration.
pub const USER_ERROR: i32 = 1;

/// A document could not be read or written.
pub const IO_FAILURE: i32 = 2;

/// Git operation failure: git missing, nested repository absent, bad revision.
pub const GIT_FAILURE: i32 = 3;

/// The old or new subproject commit could not be determined from the diff.
pub const RESOLUTION_FAILURE: i32 = 4;
