//! Configuration model for lstshift.
//!
//! This module defines the Config struct that represents `.lstshift.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::{Config, DEFAULT_CONFIG_FILE};
