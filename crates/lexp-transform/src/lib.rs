//! Life expectancy transformations.
//!
//! - [`reshape`]: unpivot the wide Eurostat table into long observations
//! - [`parse`]: coerce year labels and value cells, stripping footnote flags
//! - [`country`]: validate the requested country code
//! - [`clean`]: filter to one country and keep only valid rows

pub mod clean;
pub mod country;
mod error;
pub mod parse;
pub mod reshape;

pub use clean::{CleanStats, CleanedData, clean, clean_observations};
pub use country::{ensure_present, normalize_geo, resolve_country};
pub use error::{CleanError, Result};
pub use parse::{parse_value, parse_year};
pub use reshape::{Melted, melt, to_long};
