//! Cleaned CSV writing.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;

use lexp_model::{CLEANED_COLUMNS, CleanedRecord, Region};

use crate::error::{OutputError, Result};

/// Subdirectory of the data directory that receives cleaned files.
pub const CLEANED_DIR: &str = "cleaned";

/// Default output location: `<data_dir>/cleaned/life_expectancy_<CC>.csv`.
pub fn default_output_path(data_dir: &Path, country: Region) -> PathBuf {
    data_dir
        .join(CLEANED_DIR)
        .join(format!("life_expectancy_{}.csv", country.as_str()))
}

/// Builds the output frame with columns `unit, sex, age, country, year, value`.
pub fn records_to_frame(records: &[CleanedRecord]) -> Result<DataFrame> {
    let [unit, sex, age, country, year, value] = CLEANED_COLUMNS;
    let columns = vec![
        Column::new(
            unit.into(),
            records.iter().map(|r| r.unit.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            sex.into(),
            records.iter().map(|r| r.sex.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            age.into(),
            records.iter().map(|r| r.age.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            country.into(),
            records.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            year.into(),
            records.iter().map(|r| r.year).collect::<Vec<i32>>(),
        ),
        Column::new(
            value.into(),
            records.iter().map(|r| r.value).collect::<Vec<f64>>(),
        ),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Writes cleaned records as CSV, replacing any previous file at `path`.
///
/// The data goes to a sibling temp file first and is renamed into place, so a
/// failed write never leaves a partial file at `path`.
pub fn write_cleaned_csv(records: &[CleanedRecord], path: &Path) -> Result<PathBuf> {
    let mut frame = records_to_frame(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");
    if let Err(error) = write_frame(&mut frame, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "wrote cleaned data");
    Ok(path.to_path_buf())
}

fn write_frame(frame: &mut DataFrame, temp_path: &Path) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(frame)?;

    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}
