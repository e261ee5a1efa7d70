//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".lstshift.yaml";

/// Configuration for lstshift.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LaTeX command whose `firstline=`/`lastline=` options are rewritten
    /// (without the leading backslash).
    #[serde(default = "default_directive")]
    pub directive: String,

    /// Document file extensions to scan (no leading dots).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path of the nested repository whose recorded commit is diffed,
    /// relative to the working directory.
    #[serde(default = "default_submodule")]
    pub submodule: String,

    /// Prefix joined to paths from the nested repository's diff to form the
    /// filename used in directives. Defaults to `<submodule>/`.
    #[serde(default)]
    pub reference_prefix: Option<String>,

    /// Lines of context passed to `git diff -U`.
    #[serde(default = "default_diff_context")]
    pub diff_context: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directive: default_directive(),
            extensions: default_extensions(),
            submodule: default_submodule(),
            reference_prefix: None,
            diff_context: default_diff_context(),
        }
    }
}
