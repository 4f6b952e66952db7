//! Configuration API for stemming

use crate::api::{Error, Language};
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Batches with at least this many words are stemmed in parallel
    pub const PARALLEL_THRESHOLD: usize = 10_000;
}

/// Stemming configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default configuration for a language
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Worker threads for batch stemming (None = all available)
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Minimum batch size, in words, for parallel stemming
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.parallel_threshold == 0 {
            return Err(Error::Configuration(
                "parallel_threshold must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code or name
    pub fn language(mut self, code: impl Into<String>) -> Result<Self, Error> {
        self.language = Some(code.into());
        Ok(self)
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the minimum batch size for parallel stemming
    pub fn parallel_threshold(mut self, words: usize) -> Self {
        self.parallel_threshold = Some(words);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(lang_code) = self.language {
            config.language = Language::from_str(&lang_code)?;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        if let Some(words) = self.parallel_threshold {
            config.parallel_threshold = words;
        }

        config.validate()?;
        Ok(config)
    }
}
