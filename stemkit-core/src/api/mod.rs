//! Caller-facing API for stemkit-core
//!
//! This module wraps the per-language pipelines behind a small surface: pick
//! a [`Language`], optionally tune a [`Config`], and hand words to a
//! [`Stemmer`].

mod config;
mod error;
mod language;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use language::Language;
pub use processor::Stemmer;
