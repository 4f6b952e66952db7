//! Verify command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use stemkit_core::fixtures::{load_fixture_files, verify};
use stemkit_core::numeric::within_tolerance;
use stemkit_core::{Stemmer, VerificationReport};

use super::init_logging;
use crate::error::CliError;

/// Accuracy differences below this count as equal
const ACCURACY_TOLERANCE: f64 = 1e-9;

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// File with one input word per line
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// File with the expected stem on the matching line
    #[arg(long, value_name = "FILE")]
    pub expected: PathBuf,

    /// Language name or ISO 639 code
    #[arg(
        short,
        long,
        value_name = "LANG",
        default_value = "english",
        env = "STEMKIT_LANGUAGE"
    )]
    pub language: String,

    /// Number of failing lines to print
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub show_failures: usize,

    /// Lowest accepted fraction of passing lines, between 0 and 1
    #[arg(long, value_name = "F", default_value_t = 1.0)]
    pub min_accuracy: f64,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl VerifyArgs {
    /// Execute the verify command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        if !(0.0..=1.0).contains(&self.min_accuracy) {
            return Err(CliError::ConfigError(format!(
                "--min-accuracy must be between 0 and 1, got {}",
                self.min_accuracy
            ))
            .into());
        }
        for path in [&self.input, &self.expected] {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
        }

        let stemmer = Stemmer::with_language(self.language.as_str())?;
        let pairs = load_fixture_files(&self.input, &self.expected)
            .context("Failed to load fixture files")?;
        log::info!("Loaded {} fixture pairs", pairs.len());

        let report = verify(&stemmer, &pairs);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", self.render_summary(&stemmer, &report));
        }

        self.check_accuracy(&report)
    }

    fn render_summary(&self, stemmer: &Stemmer, report: &VerificationReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Verified {} words ({}): {} passed, {} failed",
            report.total,
            stemmer.language(),
            report.passed,
            report.failures.len()
        );
        let _ = writeln!(out, "Accuracy: {:.2}%", report.accuracy() * 100.0);

        let shown = report.failures.len().min(self.show_failures);
        if shown > 0 {
            let _ = writeln!(
                out,
                "Failures (showing {} of {}):",
                shown,
                report.failures.len()
            );
            for failure in report.failures.iter().take(shown) {
                let _ = writeln!(
                    out,
                    "  line {}: {} -> {} (expected {})",
                    failure.line, failure.input, failure.actual, failure.expected
                );
            }
        }
        out
    }

    fn check_accuracy(&self, report: &VerificationReport) -> Result<()> {
        let accuracy = report.accuracy();
        if accuracy < self.min_accuracy
            && !within_tolerance(accuracy, self.min_accuracy, ACCURACY_TOLERANCE)
        {
            return Err(CliError::VerificationFailed {
                accuracy,
                minimum: self.min_accuracy,
            }
            .into());
        }
        Ok(())
    }
}
