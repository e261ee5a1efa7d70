//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{LstError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LstError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LstError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config for a run.
    ///
    /// An explicit path must exist. Without one, `.lstshift.yaml` in `cwd` is
    /// used when present and defaults apply otherwise.
    pub fn resolve(cwd: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = cwd.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LstError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `directive` must be a non-empty run of ASCII letters
    /// - `extensions` must be non-empty, entries non-empty without leading dots
    /// - `submodule` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.directive.is_empty() || !self.directive.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LstError::UserError(format!(
                "config validation failed: directive must be a LaTeX command name made of letters (found '{}')",
                self.directive
            )));
        }

        if self.extensions.is_empty() {
            return Err(LstError::UserError(
                "config validation failed: extensions must list at least one extension"
                    .to_string(),
            ));
        }

        for ext in &self.extensions {
            if ext.is_empty() {
                return Err(LstError::UserError(
                    "config validation failed: extensions entries must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(LstError::UserError(format!(
                    "config validation failed: extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        if self.submodule.trim().is_empty() {
            return Err(LstError::UserError(
                "config validation failed: submodule must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Prefix that turns a path inside the nested repository into the
    /// filename documents reference it by.
    pub fn reference_prefix(&self) -> String {
        match &self.reference_prefix {
            Some(prefix) => prefix.clone(),
            None => format!("{}/", self.submodule.trim_end_matches('/')),
        }
    }
}
