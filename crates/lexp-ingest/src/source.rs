//! Reader selection by file extension.

use std::path::Path;

use lexp_model::Observation;

use crate::error::{IngestError, Result};
use crate::json::read_json;
use crate::table::{WideTable, read_wide_table};

/// Input formats with a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Tab-separated wide table (the Eurostat bulk download).
    Tsv,
    /// Comma-separated wide table.
    Csv,
    /// Eurostat-like JSON (records list or compact object).
    Json,
}

impl SourceFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "tsv" => Ok(Self::Tsv),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    "<none>".to_string()
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }
}

/// Raw data as loaded, before reshaping.
#[derive(Debug, Clone)]
pub enum RawData {
    /// Wide table with one column per year; needs melting.
    Wide(WideTable),
    /// Already long observations (JSON inputs).
    Long(Vec<Observation>),
}

impl RawData {
    /// Number of rows as read from the source.
    pub fn row_count(&self) -> usize {
        match self {
            RawData::Wide(table) => table.height(),
            RawData::Long(rows) => rows.len(),
        }
    }
}

/// Loads a raw dataset with the reader matching its extension.
pub fn load_source(path: &Path) -> Result<RawData> {
    let format = SourceFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading source");
    match format {
        SourceFormat::Tsv => read_wide_table(path, b'\t').map(RawData::Wide),
        SourceFormat::Csv => read_wide_table(path, b',').map(RawData::Wide),
        SourceFormat::Json => read_json(path).map(RawData::Long),
    }
}
