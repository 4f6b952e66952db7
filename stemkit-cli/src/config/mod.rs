//! Configuration module
//!
//! The CLI reads an optional TOML file. Every section and field may be
//! omitted; missing values take the defaults below, and command-line flags
//! override whatever the file says.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stemkit_core::api::defaults;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Stemming configuration
    #[serde(default)]
    pub stemming: StemmingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Stemming-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StemmingConfig {
    /// Language used when `--language` is not given
    pub default_language: String,
}

impl Default for StemmingConfig {
    fn default() -> Self {
        Self {
            default_language: "english".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Batch size (in words) at which a batch is split across threads
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            worker_threads: 0,
        }
    }
}

impl PerformanceConfig {
    /// Worker count for the core, `None` meaning one per CPU
    pub fn threads(&self) -> Option<usize> {
        (self.worker_threads > 0).then_some(self.worker_threads)
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Commented TOML template holding the default values
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# stemkit configuration
#
# Every value below is the built-in default. Remove a line to keep the
# default; command-line flags take precedence over this file.

[stemming]
# Language used when --language is not given.
# Accepts a name ("english"), an ISO 639-1 code ("en") or an ISO 639-2 code ("eng").
default_language = "{}"

[output]
# One of "text", "json", "markdown"
default_format = "{}"
# Indent JSON output
pretty_json = {}

[performance]
# Batches with at least this many words are split across threads
parallel_threshold = {}
# Number of worker threads (0 = one per CPU)
worker_threads = {}
"#,
            defaults.stemming.default_language,
            defaults.output.default_format,
            defaults.output.pretty_json,
            defaults.performance.parallel_threshold,
            defaults.performance.worker_threads,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml(&CliConfig::template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = CliConfig::from_toml(
            r#"
            [stemming]
            default_language = "fr"

            [performance]
            worker_threads = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.stemming.default_language, "fr");
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(
            config.performance.parallel_threshold,
            defaults::PARALLEL_THRESHOLD
        );
        assert_eq!(config.performance.threads(), Some(4));
    }

    #[test]
    fn test_zero_workers_means_auto() {
        assert_eq!(PerformanceConfig::default().threads(), None);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = CliConfig::from_toml("[output\npretty_json = yes").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[output]\ndefault_format = \"json\"\n").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.default_format, "json");
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/stemkit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
