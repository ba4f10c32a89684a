//! Configuration for the PE editor core
//!
//! This module provides the settings that control how the editor validates
//! connections and where exported files are written.

use crate::core::errors::{PeError, PeResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name used when the user leaves the circuit name blank
pub const DEFAULT_CIRCUIT_NAME: &str = "circuit";

/// File the circuit name is written to when the editor closes
pub const DEFAULT_LOG_FILE: &str = "apex.log";

/// How requested connections are checked before they are added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionPolicy {
    /// Accept every request, including self-loops, duplicates and unknown endpoints
    Permissive,
    /// Reject unknown endpoints, self-loops and duplicate edges
    Strict,
}

impl Default for ConnectionPolicy {
    fn default() -> Self {
        ConnectionPolicy::Permissive
    }
}

/// Editor configuration
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Validation applied to new connections
    pub connection_policy: ConnectionPolicy,
    /// Directory that exports and the session log are written to
    pub output_dir: PathBuf,
    /// Fallback circuit name for blank input
    pub default_name: String,
    /// Session log file name, relative to `output_dir`
    pub log_file: String,
    /// Log filter handed to the logger when `RUST_LOG` is unset
    pub log_level: Option<String>,
}

impl EditorConfig {
    /// Create a configuration with default values
    ///
    /// Defaults: permissive connections, current directory, `circuit`, `apex.log`
    pub fn new() -> Self {
        Self {
            connection_policy: ConnectionPolicy::default(),
            output_dir: PathBuf::from("."),
            default_name: DEFAULT_CIRCUIT_NAME.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_level: None,
        }
    }

    pub fn with_policy(mut self, policy: ConnectionPolicy) -> Self {
        self.connection_policy = policy;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log_file = file.into();
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> PeResult<Self> {
        toml::from_str(text).map_err(|e| PeError::Config(e.to_string()))
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> PeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PeError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve a user-entered circuit name, falling back to the default when blank
    pub fn resolve_name(&self, entered: &str) -> String {
        resolve_circuit_name(entered, &self.default_name)
    }

    /// Path of the session log file
    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(&self.log_file)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `entered` as typed, or `fallback` if nothing but whitespace was entered
pub fn resolve_circuit_name(entered: &str, fallback: &str) -> String {
    if entered.trim().is_empty() {
        fallback.to_string()
    } else {
        entered.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.connection_policy, ConnectionPolicy::Permissive);
        assert_eq!(config.default_name, "circuit");
        assert_eq!(config.log_file, "apex.log");
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_config_builder() {
        let config = EditorConfig::new()
            .with_policy(ConnectionPolicy::Strict)
            .with_output_dir("/tmp/pe")
            .with_default_name("pe")
            .with_log_file("session.log");

        assert_eq!(config.connection_policy, ConnectionPolicy::Strict);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/pe/session.log"));
        assert_eq!(config.resolve_name(""), "pe");
    }

    #[test]
    fn test_partial_toml() {
        let config = EditorConfig::from_toml_str("connection_policy = \"strict\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.connection_policy, ConnectionPolicy::Strict);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.default_name, "circuit");
    }

    #[test]
    fn test_bad_toml() {
        let result = EditorConfig::from_toml_str("connection_policy = \"sometimes\"");
        assert!(matches!(result, Err(PeError::Config(_))));
    }

    #[test]
    fn test_blank_names_fall_back() {
        assert_eq!(resolve_circuit_name("", "circuit"), "circuit");
        assert_eq!(resolve_circuit_name("   ", "circuit"), "circuit");
        assert_eq!(resolve_circuit_name("alu", "circuit"), "alu");
    }

    #[test]
    fn test_entered_name_is_kept_as_typed() {
        assert_eq!(resolve_circuit_name(" alu ", "circuit"), " alu ");
    }
}
