//! Regression fixtures
//!
//! A fixture is a pair of parallel UTF-8 files: one input word per line and
//! the expected stem on the matching line. Lines where either side is the
//! [`GARBAGE_SENTINEL`] are skipped, as are blank input lines.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::api::{Error, Result, Stemmer};
use crate::numeric::safe_divide;

/// Marks a fixture line that must not be checked
pub const GARBAGE_SENTINEL: &str = "<garbage>";

/// One input word and its expected stem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixturePair {
    /// 1-based line number in the fixture files
    pub line: usize,
    pub input: String,
    pub expected: String,
}

/// A pair whose stem did not match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureFailure {
    pub line: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of checking a fixture set
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl VerificationReport {
    /// Fraction of pairs that passed; 0 for an empty fixture
    pub fn accuracy(&self) -> f64 {
        safe_divide(self.passed as f64, self.total as f64)
    }

    /// Check whether every pair passed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn is_garbage(line: &str) -> bool {
    line.trim() == GARBAGE_SENTINEL
}

/// Pair up the lines of an input and an expected fixture
pub fn parse_fixtures(input: &str, expected: &str) -> Result<Vec<FixturePair>> {
    let inputs: Vec<&str> = input.lines().collect();
    let outputs: Vec<&str> = expected.lines().collect();
    if inputs.len() != outputs.len() {
        return Err(Error::FixtureMismatch {
            input_lines: inputs.len(),
            expected_lines: outputs.len(),
        });
    }

    let pairs = inputs
        .iter()
        .zip(outputs.iter())
        .enumerate()
        .filter(|(_, (input, expected))| {
            !input.trim().is_empty() && !is_garbage(input) && !is_garbage(expected)
        })
        .map(|(index, (input, expected))| FixturePair {
            line: index + 1,
            input: input.trim().to_string(),
            expected: expected.trim().to_string(),
        })
        .collect();
    Ok(pairs)
}

/// Read and pair two fixture files
pub fn load_fixture_files(
    input_path: impl AsRef<Path>,
    expected_path: impl AsRef<Path>,
) -> Result<Vec<FixturePair>> {
    let input = fs::read_to_string(input_path)?;
    let expected = fs::read_to_string(expected_path)?;
    parse_fixtures(&input, &expected)
}

/// Stem every fixture input and compare it with the expected stem
pub fn verify(stemmer: &Stemmer, pairs: &[FixturePair]) -> VerificationReport {
    let mut report = VerificationReport {
        total: pairs.len(),
        ..VerificationReport::default()
    };
    for pair in pairs {
        let actual = stemmer.stem(&pair.input);
        if actual == pair.expected {
            report.passed += 1;
        } else {
            log::debug!(
                "line {}: {} -> {} (expected {})",
                pair.line,
                pair.input,
                actual,
                pair.expected
            );
            report.failures.push(FixtureFailure {
                line: pair.line,
                input: pair.input.clone(),
                expected: pair.expected.clone(),
                actual,
            });
        }
    }
    report
}
