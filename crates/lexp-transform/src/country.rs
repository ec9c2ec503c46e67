//! Country code validation.

use lexp_model::{Observation, Region};

use crate::error::{CleanError, Result};

/// Resolves a user-supplied country code (trimmed, upper-cased) to a region.
pub fn resolve_country(code: &str) -> Result<Region> {
    code.parse::<Region>().map_err(|_| CleanError::InvalidCountry {
        code: code.trim().to_string(),
        valid: Region::actual_countries(),
    })
}

/// Maps a dataset `geo` value to a region; unknown codes map to `None`.
pub fn normalize_geo(geo: &str) -> Option<Region> {
    Region::lookup(geo)
}

/// Fails unless at least one observation belongs to `country`.
pub fn ensure_present(observations: &[Observation], country: Region) -> Result<()> {
    if observations
        .iter()
        .any(|row| normalize_geo(&row.geo) == Some(country))
    {
        Ok(())
    } else {
        Err(CleanError::CountryNotInDataset { country })
    }
}
