#![cfg(feature = "cli")]

use seqassert::app::compare::{EXIT_ERROR, EXIT_FAILED, EXIT_PASSED};
use seqassert::app::run::{exit_code, run};
use seqassert::{CliConfig, SeqAssertError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn cli_for(expected: PathBuf, actual: PathBuf, config: Option<PathBuf>) -> CliConfig {
    CliConfig {
        expected,
        actual,
        mode: None,
        in_order: true,
        input_format: None,
        config,
        max_listed_elements: None,
        verbose: false,
    }
}

#[test]
fn test_exit_code_passed() {
    let temp_dir = TempDir::new().unwrap();
    let expected = write_file(&temp_dir, "expected.txt", "UTF-8\nUS-ASCII\n");
    let actual = write_file(&temp_dir, "actual.txt", "UTF-8\nUS-ASCII\n");

    let outcome = run(&cli_for(expected, actual, None));
    assert_eq!(exit_code(&outcome), EXIT_PASSED);
}

#[test]
fn test_exit_code_order_failure() {
    let temp_dir = TempDir::new().unwrap();
    let expected = write_file(&temp_dir, "expected.txt", "UTF-8\nUS-ASCII\n");
    let actual = write_file(&temp_dir, "actual.txt", "US-ASCII\nUTF-8\n");

    let outcome = run(&cli_for(expected, actual, None));
    assert_eq!(exit_code(&outcome), EXIT_FAILED);
}

#[test]
fn test_exit_code_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let expected = write_file(&temp_dir, "expected.txt", "a\n");
    let actual = temp_dir.path().join("absent.txt");

    let outcome = run(&cli_for(expected, actual, None));
    assert_eq!(exit_code(&outcome), EXIT_ERROR);

    let err = outcome.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SeqAssertError>(),
        Some(SeqAssertError::MissingInputError { .. })
    ));
}

#[test]
fn test_exit_code_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let expected = write_file(&temp_dir, "expected.txt", "a\n");
    let actual = write_file(&temp_dir, "actual.txt", "a\n");
    let config = write_file(&temp_dir, "seqassert.toml", "[format]\nmax_listed_elements = 0\n");

    let outcome = run(&cli_for(expected, actual, Some(config)));
    assert_eq!(exit_code(&outcome), EXIT_ERROR);
}
