//! Life expectancy output generation.
//!
//! Cleaned records are written as comma-separated files under
//! `<data_dir>/cleaned/`, one file per country.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{CLEANED_DIR, default_output_path, records_to_frame, write_cleaned_csv};
