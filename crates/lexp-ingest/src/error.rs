//! Error types for life expectancy data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading the raw dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found under any of the candidate locations.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension has no reader.
    #[error("unsupported input format '{extension}' for {path} (expected .tsv, .csv or .json)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Tabular Parsing Errors ===
    /// Failed to parse the delimited file with Polars.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File has no header line.
    #[error("input file is empty: {path}")]
    EmptyInput { path: PathBuf },

    /// The combined `unit,sex,age,geo\time` column is absent.
    #[error("missing key column 'unit,sex,age,geo\\time' in {path}")]
    MissingKeyColumn { path: PathBuf },

    // === JSON Errors ===
    /// File is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON is valid but does not have a supported shape.
    #[error("unsupported JSON shape in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },
}

impl IngestError {
    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
