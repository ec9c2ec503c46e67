//! Delimited (TSV/CSV) reading of the wide Eurostat export.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Header of the combined key column in Eurostat exports.
pub const KEY_COLUMN: &str = "unit,sex,age,geo\\time";

/// A wide table as read from disk: one key column plus one column per year.
///
/// Every column is a string column; type coercion happens during cleaning.
#[derive(Debug, Clone)]
pub struct WideTable {
    /// Source file, kept for diagnostics.
    pub path: PathBuf,
    /// Name of the key column as it appears in `frame` (may carry stray whitespace).
    pub key_column: String,
    pub frame: DataFrame,
}

impl WideTable {
    /// Number of raw rows (one per unit/sex/age/geo key).
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Year columns in source order.
    pub fn year_columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .filter(|name| name != &self.key_column)
            .collect()
    }
}

/// Returns true when a header names the combined key column.
///
/// Matching ignores case, surrounding whitespace and a UTF-8 BOM.
pub fn is_key_column(header: &str) -> bool {
    header
        .trim_matches('\u{feff}')
        .trim()
        .eq_ignore_ascii_case(KEY_COLUMN)
}

/// Reads the first line of a file, without BOM or line terminator.
fn read_header_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| IngestError::read(path, e))?;
    if read == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(Some(line.strip_prefix('\u{feff}').unwrap_or(line).to_string()))
}

/// Reads a delimited wide table into a string-typed DataFrame.
pub fn read_wide_table(path: &Path, separator: u8) -> Result<WideTable> {
    let header = read_header_line(path)?.ok_or_else(|| IngestError::EmptyInput {
        path: path.to_path_buf(),
    })?;
    if header.trim().is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let key_column = df
        .get_column_names()
        .into_iter()
        .find(|name| is_key_column(name.as_str()))
        .map(|name| name.to_string())
        .ok_or_else(|| IngestError::MissingKeyColumn {
            path: path.to_path_buf(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read wide table"
    );

    Ok(WideTable {
        path: path.to_path_buf(),
        key_column,
        frame: df,
    })
}
