//! Filesystem utilities for lstshift.
//!
//! Documents are rewritten through atomic writes so an interrupted run never
//! leaves a truncated file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
