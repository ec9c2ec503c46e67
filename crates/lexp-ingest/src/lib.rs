//! Life expectancy data ingestion.
//!
//! This crate locates the raw Eurostat dataset and loads it into memory.
//!
//! # Features
//!
//! - **Input Resolution**: look up `--input` as given, then inside the data directory
//! - **Delimited Loading**: read TSV/CSV wide tables into string-typed Polars DataFrames
//! - **JSON Loading**: read Eurostat-like JSON (records list or compact object) as long rows
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lexp_ingest::{load_source, resolve_input};
//!
//! let path = resolve_input(Path::new("data"), None)?;
//! let raw = load_source(&path)?;
//! println!("{} raw rows", raw.row_count());
//! ```

mod error;
mod json;
mod resolve;
mod source;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Input Resolution ===
pub use resolve::{DEFAULT_INPUT_FILE, resolve_input};

// === Readers ===
pub use json::read_json;
pub use source::{RawData, SourceFormat, load_source};
pub use table::{KEY_COLUMN, WideTable, is_key_column, read_wide_table};
