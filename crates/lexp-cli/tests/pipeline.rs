//! End-to-end cleaning runs against the bundled fixture dataset.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use lexp_cli::pipeline::{CleanOptions, run_clean_pipeline};
use lexp_ingest::DEFAULT_INPUT_FILE;
use lexp_model::Region;
use lexp_transform::CleanError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Scratch data directory holding a copy of the raw fixture.
fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::copy(
        fixture("eu_life_expectancy_raw.tsv"),
        dir.path().join(DEFAULT_INPUT_FILE),
    )
    .expect("copy fixture");
    dir
}

fn clean_error(err: &anyhow::Error) -> &CleanError {
    err.downcast_ref::<CleanError>()
        .expect("expected a cleaning error")
}

#[test]
fn pt_output_matches_expected_file() {
    let dir = data_dir();
    let result = run_clean_pipeline(&CleanOptions::new("PT").with_data_dir(dir.path())).unwrap();

    assert!(result.written);
    assert_eq!(
        result.output_path,
        dir.path().join("cleaned").join("life_expectancy_PT.csv")
    );
    let actual = fs::read_to_string(&result.output_path).unwrap();
    let expected = fs::read_to_string(fixture("pt_life_expectancy_expected.csv")).unwrap();
    assert_eq!(actual, expected);

    assert_eq!(result.stats.input_rows, 9);
    assert_eq!(result.stats.invalid_values, 1);
    assert_eq!(result.stats.kept, 23);
}

#[test]
fn every_country_keeps_only_its_own_rows() {
    let dir = data_dir();
    for code in ["PT", "ES", "DE", "EU27_2020"] {
        let result =
            run_clean_pipeline(&CleanOptions::new(code).with_data_dir(dir.path())).unwrap();
        assert!(!result.records.is_empty(), "{code} produced no rows");
        assert!(
            result
                .records
                .iter()
                .all(|record| record.country.as_str() == code),
            "{code} output contains other regions"
        );

        let written = fs::read_to_string(&result.output_path).unwrap();
        for line in written.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields[3], code);
        }
    }
}

#[test]
fn lowercase_code_is_accepted() {
    let dir = data_dir();
    let result = run_clean_pipeline(&CleanOptions::new(" pt ").with_data_dir(dir.path())).unwrap();
    assert_eq!(result.country, Region::Pt);
}

#[test]
fn unknown_country_creates_no_file() {
    let dir = data_dir();
    let err = run_clean_pipeline(&CleanOptions::new("XX").with_data_dir(dir.path())).unwrap_err();

    assert!(matches!(
        clean_error(&err),
        CleanError::InvalidCountry { code, .. } if code == "XX"
    ));
    assert!(!dir.path().join("cleaned").exists());
}

#[test]
fn invalid_country_message() {
    let dir = data_dir();
    let err = run_clean_pipeline(&CleanOptions::new("XX").with_data_dir(dir.path())).unwrap_err();
    let message = clean_error(&err).to_string();
    insta::assert_snapshot!("invalid_country_message", message);
}

#[test]
fn country_missing_from_dataset_leaves_previous_output() {
    let dir = data_dir();
    let cleaned = dir.path().join("cleaned");
    fs::create_dir_all(&cleaned).unwrap();
    let stale = cleaned.join("life_expectancy_FR.csv");
    fs::write(&stale, "previous run\n").unwrap();

    let err = run_clean_pipeline(&CleanOptions::new("FR").with_data_dir(dir.path())).unwrap_err();

    assert!(matches!(
        clean_error(&err),
        CleanError::CountryNotInDataset {
            country: Region::Fr
        }
    ));
    assert_eq!(fs::read_to_string(&stale).unwrap(), "previous run\n");
    let leftovers: Vec<_> = fs::read_dir(&cleaned).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = data_dir();
    let options = CleanOptions::new("ES").with_data_dir(dir.path());

    let first = run_clean_pipeline(&options).unwrap();
    let first_bytes = fs::read(&first.output_path).unwrap();
    let second = run_clean_pipeline(&options).unwrap();
    let second_bytes = fs::read(&second.output_path).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = data_dir();
    let result = run_clean_pipeline(
        &CleanOptions::new("PT")
            .with_data_dir(dir.path())
            .with_dry_run(true),
    )
    .unwrap();

    assert!(!result.written);
    assert_eq!(result.stats.kept, 23);
    assert!(!result.output_path.exists());
}

#[test]
fn explicit_input_and_output_paths() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("pt.csv");
    let result = run_clean_pipeline(
        &CleanOptions::new("PT")
            .with_data_dir(dir.path())
            .with_input(fixture("eu_life_expectancy_raw.tsv"))
            .with_output(&output),
    )
    .unwrap();

    assert_eq!(result.output_path, output);
    assert!(output.exists());
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let err = run_clean_pipeline(&CleanOptions::new("PT").with_data_dir(dir.path())).unwrap_err();

    assert!(err.downcast_ref::<CleanError>().is_none());
    assert!(format!("{err:#}").contains(DEFAULT_INPUT_FILE));
}
