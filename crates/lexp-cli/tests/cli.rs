//! Exit codes and stderr of the `lexp` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::copy(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("eu_life_expectancy_raw.tsv"),
        dir.path().join("eu_life_expectancy_raw.tsv"),
    )
    .expect("copy fixture");
    dir
}

fn lexp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexp"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LEXP_DATA_DIR")
        .output()
        .expect("run lexp")
}

fn clean(data_dir: &Path, args: &[&str]) -> Output {
    let data_dir = data_dir.to_string_lossy();
    let mut full = vec!["clean", "--data-dir", data_dir.as_ref()];
    full.extend_from_slice(args);
    lexp(&full)
}

#[test]
fn clean_valid_country_exits_zero() {
    let dir = data_dir();
    let output = clean(dir.path(), &["--country", "PT"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("cleaned").join("life_expectancy_PT.csv").is_file());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows written"));
}

#[test]
fn invalid_country_exits_one_without_output() {
    let dir = data_dir();
    let output = clean(dir.path(), &["--country", "XX"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("error: invalid country code: 'XX'"),
        "unexpected stderr: {stderr}"
    );
    assert!(!dir.path().join("cleaned").exists());
}

#[test]
fn country_absent_from_dataset_exits_one() {
    let dir = data_dir();
    let output = clean(dir.path(), &["--country", "FR"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'FR' is not present in the dataset"));
}

#[test]
fn missing_input_exits_one() {
    let dir = data_dir();
    let output = clean(dir.path(), &["--country", "PT", "--input", "missing.tsv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("missing.tsv"));
}

#[test]
fn countries_lists_codes() {
    let output = lexp(&["countries"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PT"));
    assert!(!stdout.contains("EU28"));
}
