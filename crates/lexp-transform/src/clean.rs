//! Country filtering and type coercion.

use lexp_ingest::RawData;
use lexp_model::{CleanedRecord, Observation, Region};
use tracing::{debug, info};

use crate::country::{ensure_present, normalize_geo, resolve_country};
use crate::error::Result;
use crate::parse::{parse_value, parse_year};
use crate::reshape::to_long;

/// Row accounting for one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Rows as read from the source (wide rows or JSON records).
    pub input_rows: usize,
    /// Long observations after reshaping.
    pub observations: usize,
    /// Raw rows skipped because their key column was malformed.
    pub malformed_keys: usize,
    /// Observations for other regions.
    pub other_regions: usize,
    /// Observations for the country with an unparseable year.
    pub invalid_years: usize,
    /// Observations for the country with a missing or unparseable value.
    pub invalid_values: usize,
    /// Records kept.
    pub kept: usize,
}

impl CleanStats {
    /// Observations of the selected country that were dropped.
    pub fn dropped(&self) -> usize {
        self.invalid_years + self.invalid_values
    }
}

/// Cleaned rows for one country.
#[derive(Debug, Clone)]
pub struct CleanedData {
    pub country: Region,
    pub records: Vec<CleanedRecord>,
    pub stats: CleanStats,
}

/// Filters long observations to `country` and coerces year and value.
///
/// Rows that fail coercion are dropped and counted, never substituted.
pub fn clean_observations(
    observations: &[Observation],
    country: Region,
) -> (Vec<CleanedRecord>, CleanStats) {
    let mut stats = CleanStats {
        observations: observations.len(),
        ..CleanStats::default()
    };
    let mut records = Vec::new();

    for row in observations {
        if normalize_geo(&row.geo) != Some(country) {
            stats.other_regions += 1;
            continue;
        }
        let Some(year) = parse_year(&row.time) else {
            stats.invalid_years += 1;
            debug!(time = %row.time, "dropping row with invalid year");
            continue;
        };
        let Some(value) = parse_value(&row.value) else {
            stats.invalid_values += 1;
            debug!(year, value = %row.value, "dropping row with invalid value");
            continue;
        };
        records.push(CleanedRecord {
            unit: row.unit.clone(),
            sex: row.sex.clone(),
            age: row.age.clone(),
            country,
            year,
            value,
        });
    }

    stats.kept = records.len();
    (records, stats)
}

/// Runs reshape, validation and filtering for one country code.
///
/// The code is validated before any data is touched; a region absent from the
/// dataset fails with [`CleanError::CountryNotInDataset`](crate::CleanError::CountryNotInDataset).
pub fn clean(raw: RawData, country_code: &str) -> Result<CleanedData> {
    let country = resolve_country(country_code)?;
    let input_rows = raw.row_count();

    let melted = to_long(raw)?;
    ensure_present(&melted.observations, country)?;

    let (records, mut stats) = clean_observations(&melted.observations, country);
    stats.input_rows = input_rows;
    stats.malformed_keys = melted.malformed_keys;

    info!(
        country = %country,
        input_rows,
        observations = stats.observations,
        kept = stats.kept,
        dropped = stats.dropped(),
        "clean complete"
    );

    Ok(CleanedData {
        country,
        records,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(geo: &str, time: &str, value: &str) -> Observation {
        Observation {
            unit: "YR".to_string(),
            sex: "T".to_string(),
            age: "Y65".to_string(),
            geo: geo.to_string(),
            time: time.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_footnoted_value_is_stripped() {
        let rows = vec![observation("PT", "Y2020", "81.1 e")];
        let (records, stats) = clean_observations(&rows, Region::Pt);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, Region::Pt);
        assert_eq!(records[0].year, 2020);
        assert_eq!(records[0].value, 81.1);
        assert_eq!(stats.kept, 1);
    }

    #[test]
    fn test_invalid_rows_are_dropped_and_counted() {
        let rows = vec![
            observation("PT", "2019", "78.6"),
            observation("PT", "2020", ": "),
            observation("PT", "2021", "78,6"),
            observation("PT", "bogus", "80.0"),
            observation("ES", "2019", "84.3"),
        ];
        let (records, stats) = clean_observations(&rows, Region::Pt);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2019);
        assert_eq!(
            stats,
            CleanStats {
                input_rows: 0,
                observations: 5,
                malformed_keys: 0,
                other_regions: 1,
                invalid_years: 1,
                invalid_values: 2,
                kept: 1,
            }
        );
        assert_eq!(stats.dropped(), 3);
    }

    #[test]
    fn test_clean_long_input_filters_country() {
        let raw = RawData::Long(vec![
            observation("PT", "2019", "78.6"),
            observation("ES", "2019", "84.3"),
            observation("pt", "2020", "79.0 p"),
        ]);
        let cleaned = clean(raw, "pt").unwrap();

        assert_eq!(cleaned.country, Region::Pt);
        assert_eq!(cleaned.records.len(), 2);
        assert!(cleaned.records.iter().all(|r| r.country == Region::Pt));
        assert_eq!(cleaned.stats.input_rows, 3);
    }

    #[test]
    fn test_clean_rejects_unknown_code_before_reading() {
        let raw = RawData::Long(vec![observation("PT", "2019", "78.6")]);
        let err = clean(raw, "NOPE").unwrap_err();
        assert!(matches!(err, crate::CleanError::InvalidCountry { .. }));
    }

    #[test]
    fn test_clean_rejects_region_missing_from_data() {
        let raw = RawData::Long(vec![observation("PT", "2019", "78.6")]);
        let err = clean(raw, "DE").unwrap_err();
        assert!(matches!(
            err,
            crate::CleanError::CountryNotInDataset {
                country: Region::De
            }
        ));
    }

    #[test]
    fn test_clean_all_values_invalid_keeps_nothing() {
        let raw = RawData::Long(vec![observation("PT", "2019", ":")]);
        let cleaned = clean(raw, "PT").unwrap();
        assert!(cleaned.records.is_empty());
        assert_eq!(cleaned.stats.invalid_values, 1);
    }
}
