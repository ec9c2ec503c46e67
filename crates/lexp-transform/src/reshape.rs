//! Wide → long reshaping of the Eurostat table.

use lexp_ingest::{RawData, WideTable};
use lexp_model::Observation;
use tracing::debug;

use crate::error::Result;

/// Long rows produced from a raw dataset.
#[derive(Debug, Clone, Default)]
pub struct Melted {
    /// Observations in melt order: year columns in source order, then rows in
    /// source order within each year.
    pub observations: Vec<Observation>,
    /// Raw rows whose key did not split into exactly four dimensions.
    pub malformed_keys: usize,
}

/// Splits a combined `unit,sex,age,geo` key.
fn split_key(key: &str) -> Option<[String; 4]> {
    let parts: Vec<String> = key.split(',').map(|part| part.trim().to_string()).collect();
    <[String; 4]>::try_from(parts).ok()
}

/// Unpivots the year columns of a wide table into long observations.
pub fn melt(table: &WideTable) -> Result<Melted> {
    let keys: Vec<Option<[String; 4]>> = table
        .frame
        .column(&table.key_column)?
        .str()?
        .into_iter()
        .map(|key| key.and_then(split_key))
        .collect();
    let malformed_keys = keys.iter().filter(|key| key.is_none()).count();
    if malformed_keys > 0 {
        debug!(
            path = %table.path.display(),
            malformed_keys,
            "skipping rows with malformed key column"
        );
    }

    let mut observations = Vec::with_capacity(table.height() * table.frame.width());
    for time in table.year_columns() {
        let column = table.frame.column(&time)?;
        for (key, cell) in keys.iter().zip(column.str()?) {
            let Some([unit, sex, age, geo]) = key else {
                continue;
            };
            observations.push(Observation {
                unit: unit.clone(),
                sex: sex.clone(),
                age: age.clone(),
                geo: geo.clone(),
                time: time.clone(),
                value: cell.unwrap_or_default().to_string(),
            });
        }
    }

    Ok(Melted {
        observations,
        malformed_keys,
    })
}

/// Brings any raw dataset to long form.
pub fn to_long(raw: RawData) -> Result<Melted> {
    match raw {
        RawData::Wide(table) => melt(&table),
        RawData::Long(observations) => Ok(Melted {
            observations,
            malformed_keys: 0,
        }),
    }
}
