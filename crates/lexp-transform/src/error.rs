//! Error types for the cleaning stage.

use lexp_model::Region;
use thiserror::Error;

/// Codes per line in the "valid country codes" listing.
const CODES_PER_LINE: usize = 10;

/// Errors raised while validating the country or reshaping the table.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The requested code does not name a known region.
    #[error(
        "invalid country code: '{code}'\n\nValid country codes are:{}",
        format_codes(.valid)
    )]
    InvalidCountry { code: String, valid: Vec<Region> },

    /// The region is known but the dataset has no rows for it.
    #[error("country code '{country}' is not present in the dataset")]
    CountryNotInDataset { country: Region },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Renders codes as indented, comma-separated lines of ten.
fn format_codes(codes: &[Region]) -> String {
    codes
        .chunks(CODES_PER_LINE)
        .map(|chunk| {
            let line: Vec<&str> = chunk.iter().map(Region::as_str).collect();
            format!("\n  - {}", line.join(", "))
        })
        .collect()
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
