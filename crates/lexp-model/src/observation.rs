//! Row types flowing through the cleaning pipeline.

use crate::region::Region;

/// A single long-format observation before type coercion.
///
/// `time` and `value` keep the raw text of the source cell so that the
/// cleaning stage decides what survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub geo: String,
    pub time: String,
    pub value: String,
}

/// A validated row for one country.
///
/// `value` is always finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub country: Region,
    pub year: i32,
    pub value: f64,
}

/// Output column names, in file order.
pub const CLEANED_COLUMNS: [&str; 6] = ["unit", "sex", "age", "country", "year", "value"];
