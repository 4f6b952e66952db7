//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use stemkit_core::Language;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod stem;
pub mod verify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stem word lists or single words
    Stem(stem::StemArgs),

    /// Check a stemmer against a pair of fixture files
    Verify(verify::VerifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Stem(args) => args.execute(),
            Commands::Verify(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Languages => {
                let mut out = String::from("Supported languages:\n");
                for language in Language::ALL {
                    out.push_str(&format!("  {}  {}\n", language.code(), language.name()));
                }
                out
            }
            ListCommands::Formats => {
                let mut out = String::from("Output formats:\n");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        out.push_str(&format!("  {:<10} {}\n", value.get_name(), help));
                    }
                }
                out
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
