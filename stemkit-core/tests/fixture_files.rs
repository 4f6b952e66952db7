//! Regression fixture loading from disk

use std::io::Write;

use stemkit_core::fixtures::{load_fixture_files, verify, GARBAGE_SENTINEL};
use stemkit_core::{Error, Language, Stemmer};
use tempfile::NamedTempFile;

fn fixture_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_verify_clean_fixture() {
    let input = fixture_file(&["hestene", "bilerne", GARBAGE_SENTINEL, "huset"]);
    let expected = fixture_file(&["hest", "bil", "whatever", "hus"]);

    let pairs = load_fixture_files(input.path(), expected.path()).unwrap();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[2].line, 4);

    let report = verify(&Stemmer::new(Language::Danish), &pairs);
    assert!(report.is_clean());
    assert_eq!(report.accuracy(), 1.0);
}

#[test]
fn test_failures_carry_line_numbers() {
    let input = fixture_file(&["katzen", "häuser"]);
    let expected = fixture_file(&["katz", "hauser"]);

    let pairs = load_fixture_files(input.path(), expected.path()).unwrap();
    let report = verify(&Stemmer::new(Language::German), &pairs);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].line, 2);
    assert_eq!(report.failures[0].actual, "haus");
}

#[test]
fn test_mismatched_fixture_files() {
    let input = fixture_file(&["a", "b", "c"]);
    let expected = fixture_file(&["a"]);
    let err = load_fixture_files(input.path(), expected.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::FixtureMismatch {
            input_lines: 3,
            expected_lines: 1
        }
    ));
}

#[test]
fn test_missing_fixture_file() {
    let expected = fixture_file(&["a"]);
    let err = load_fixture_files("/definitely/not/here.txt", expected.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
