//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Validate**: Resolve the requested country code before any I/O
//! 2. **Ingest**: Resolve the input path and read the raw source
//! 3. **Clean**: Reshape to long rows, filter to the country, coerce values
//! 4. **Output**: Atomically write the cleaned CSV (skipped on dry runs)
//!
//! Errors from the validate and clean stages are returned unwrapped so that
//! callers can downcast to [`CleanError`](lexp_transform::CleanError).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lexp_ingest::{RawData, load_source, resolve_input};
use lexp_model::{CleanedRecord, Region};
use lexp_output::{default_output_path, write_cleaned_csv};
use lexp_transform::{CleanStats, clean, resolve_country};

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Options for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Requested country code, as typed by the user.
    pub country: String,
    /// Input file; defaults to the raw dataset inside `data_dir`.
    pub input: Option<PathBuf>,
    /// Directory holding the raw dataset and the `cleaned/` output folder.
    pub data_dir: PathBuf,
    /// Output file; defaults to `<data_dir>/cleaned/life_expectancy_<CC>.csv`.
    pub output: Option<PathBuf>,
    /// Clean and report without writing.
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            input: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Output path for `country`, honoring an explicit `--output`.
    pub fn output_path(&self, country: Region) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.data_dir, country))
    }
}

/// Result of a completed cleaning run.
#[derive(Debug)]
pub struct CleanRunResult {
    pub country: Region,
    pub input_path: PathBuf,
    /// Target path; only written when `written` is true.
    pub output_path: PathBuf,
    pub written: bool,
    pub stats: CleanStats,
    pub records: Vec<CleanedRecord>,
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Resolve and read the raw source.
pub fn ingest(data_dir: &Path, input: Option<&Path>) -> Result<(PathBuf, RawData)> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let start = Instant::now();

    let path = resolve_input(data_dir, input).context("resolve input file")?;
    let raw = load_source(&path).with_context(|| format!("load {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = raw.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok((path, raw))
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write cleaned records to `path`.
pub fn output(records: &[CleanedRecord], path: &Path) -> Result<PathBuf> {
    let span = info_span!("output");
    let _guard = span.enter();
    let start = Instant::now();

    let written = write_cleaned_csv(records, path)
        .with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %written.display(),
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(written)
}

/// Run all stages for one country.
pub fn run_clean_pipeline(options: &CleanOptions) -> Result<CleanRunResult> {
    let run_start = Instant::now();

    // Stage 1: an unknown code fails before the input is opened.
    let country = resolve_country(&options.country)?;
    let span = info_span!("clean", country = %country);
    let _guard = span.enter();

    let (input_path, raw) = ingest(&options.data_dir, options.input.as_deref())?;

    // Stage 3
    let cleaned = info_span!("transform").in_scope(|| clean(raw, country.as_str()))?;

    let output_path = options.output_path(country);
    let written = if options.dry_run {
        info!(path = %output_path.display(), "dry run, skipping output");
        false
    } else {
        output(&cleaned.records, &output_path)?;
        true
    };

    info!(
        kept = cleaned.stats.kept,
        dropped = cleaned.stats.dropped(),
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(CleanRunResult {
        country,
        input_path,
        output_path,
        written,
        stats: cleaned.stats,
        records: cleaned.records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_output_path() {
        let options = CleanOptions::new("pt").with_data_dir("/tmp/lexp");
        assert_eq!(
            options.output_path(Region::Pt),
            PathBuf::from("/tmp/lexp/cleaned/life_expectancy_PT.csv")
        );
    }

    #[test]
    fn test_options_explicit_output_wins() {
        let options = CleanOptions::new("PT").with_output("out.csv");
        assert_eq!(options.output_path(Region::Pt), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_unknown_country_fails_before_ingest() {
        let options = CleanOptions::new("XX").with_data_dir("/nonexistent/lexp");
        let err = run_clean_pipeline(&options).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<lexp_transform::CleanError>(),
            Some(lexp_transform::CleanError::InvalidCountry { .. })
        ));
    }
}
