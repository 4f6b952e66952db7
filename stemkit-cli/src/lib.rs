//! Stemkit CLI library
//!
//! This library provides the command-line interface for the stemkit
//! stemmers: batch stemming of word lists, fixture verification and
//! configuration scaffolding.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
