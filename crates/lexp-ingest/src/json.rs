//! Eurostat-like JSON input.
//!
//! Two shapes are understood:
//!
//! - **Records list**: `[{"unit": .., "sex": .., "age": .., "geo": .., "time": .., "value": ..}]`,
//!   with common aliases (`country` for geo, `obs_value` for value, `year` for time, ...).
//! - **Compact object**: `{"dimension": {..}, "value": {"<linear index>": <number>}}`, the
//!   JSON-stat layout used by the Eurostat dissemination API.
//!
//! Both produce long [`Observation`]s whose `time` and `value` are still raw text.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::{Map, Value};

use lexp_model::Observation;

use crate::error::{IngestError, Result};

const DIMENSIONS: [&str; 5] = ["unit", "sex", "age", "geo", "time"];
const TIME_KEYS: [&str; 3] = ["time", "year", "date"];
const GEO_KEYS: [&str; 6] = ["geo", "country", "region", "geo_code", "geocode", "nuts_code"];
const VALUE_KEYS: [&str; 8] = [
    "value",
    "values",
    "obs_value",
    "obsvalue",
    "life_expectancy",
    "lifeexpectancy",
    "le",
    "val",
];

/// Reads a JSON file in either supported shape.
pub fn read_json(path: &Path) -> Result<Vec<Observation>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let data: Value = serde_json::from_str(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let shape_error = |reason: String| IngestError::JsonShape {
        path: path.to_path_buf(),
        reason,
    };

    match &data {
        Value::Array(records) => read_records(records).map_err(shape_error),
        Value::Object(object)
            if object.contains_key("dimension") && object.contains_key("value") =>
        {
            read_compact(object).map_err(shape_error)
        }
        _ => Err(shape_error(
            "expected a list of records or an object with 'dimension' and 'value'".to_string(),
        )),
    }
}

// ============================================================================
// Records list
// ============================================================================

fn pick<'a>(columns: &BTreeSet<String>, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|candidate| columns.contains(*candidate))
}

fn read_records(records: &[Value]) -> std::result::Result<Vec<Observation>, String> {
    let mut rows: Vec<BTreeMap<String, Value>> = Vec::with_capacity(records.len());
    for record in records {
        let Value::Object(object) = record else {
            return Err(format!("record is not an object: {record}"));
        };
        rows.push(
            object
                .iter()
                .map(|(key, value)| (key.to_lowercase(), value.clone()))
                .collect(),
        );
    }

    let columns: BTreeSet<String> = rows.iter().flat_map(|row| row.keys().cloned()).collect();
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let time_key = pick(&columns, &TIME_KEYS).ok_or_else(|| {
        "missing a time-like key among: ['time', 'year', 'date']".to_string()
    })?;
    let geo_key = pick(&columns, &GEO_KEYS).unwrap_or("geo");
    let value_key = pick(&columns, &VALUE_KEYS).unwrap_or("value");
    // `year` fills gaps in `time` when both are present.
    let year_fallback = time_key == "time" && columns.contains("year");

    let mut present: BTreeSet<&str> = columns.iter().map(String::as_str).collect();
    for (alias, canonical) in [(time_key, "time"), (geo_key, "geo"), (value_key, "value")] {
        if present.remove(alias) {
            present.insert(canonical);
        }
    }
    if year_fallback {
        present.remove("year");
    }
    let missing: Vec<&str> = DIMENSIONS
        .iter()
        .copied()
        .chain(["value"])
        .filter(|key| !present.contains(key))
        .collect();
    if !missing.is_empty() {
        return Err(format!(
            "JSON missing keys: {missing:?}. Present keys: {:?}",
            columns.iter().collect::<Vec<_>>()
        ));
    }

    let mut observations = Vec::with_capacity(rows.len());
    for row in &rows {
        let value = row.get(value_key).unwrap_or(&Value::Null);
        if value.is_null() {
            continue;
        }
        let mut time = row.get(time_key).unwrap_or(&Value::Null);
        if time.is_null() && year_fallback {
            time = row.get("year").unwrap_or(&Value::Null);
        }
        observations.push(Observation {
            unit: text(row.get("unit")),
            sex: text(row.get("sex")),
            age: text(row.get("age")),
            geo: text(row.get(geo_key)),
            time: normalize_time(time),
            value: text(Some(value)),
        });
    }
    Ok(observations)
}

/// Renders a scalar as plain text; null and absent become empty.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Normalizes a time-like value, e.g. `2019.0` → `"2019"`.
fn normalize_time(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Number(number) => match number.as_i64() {
            Some(int) => int.to_string(),
            None => number
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| (v.trunc() as i64).to_string())
                .unwrap_or_default(),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => (v.trunc() as i64).to_string(),
            _ => s.clone(),
        },
        other => other.to_string(),
    }
}

// ============================================================================
// Compact object
// ============================================================================

fn dimension_block<'a>(dimension: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    dimension
        .get(key)
        .or_else(|| dimension.get(&key.to_uppercase()))
}

/// Index → label map for one dimension.
fn labels(dimension: &Map<String, Value>, key: &str) -> BTreeMap<usize, String> {
    let Some(label) = dimension_block(dimension, key)
        .and_then(|block| block.get("category"))
        .and_then(|category| category.get("label"))
        .and_then(Value::as_object)
    else {
        return BTreeMap::new();
    };
    label
        .iter()
        .filter_map(|(idx, value)| Some((idx.parse::<usize>().ok()?, text(Some(value)))))
        .collect()
}

/// Cardinality of one dimension: `category.index` when present, else label count.
fn dimension_size(
    dimension: &Map<String, Value>,
    key: &str,
    labels_by_index: &BTreeMap<usize, String>,
) -> usize {
    let index_len = dimension_block(dimension, key)
        .and_then(|block| block.get("category"))
        .and_then(|category| category.get("index"))
        .and_then(|index| match index {
            Value::Object(map) => Some(map.len()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        })
        .filter(|len| *len > 0);
    index_len.unwrap_or(labels_by_index.len())
}

/// Converts a row-major linear index into per-dimension coordinates.
fn unravel(mut index: usize, bases: &[usize]) -> Vec<usize> {
    let mut coords = vec![0; bases.len()];
    for (slot, base) in coords.iter_mut().zip(bases).rev() {
        let base = (*base).max(1);
        *slot = index % base;
        index /= base;
    }
    coords
}

fn read_compact(object: &Map<String, Value>) -> std::result::Result<Vec<Observation>, String> {
    let dimension = object
        .get("dimension")
        .and_then(Value::as_object)
        .ok_or_else(|| "'dimension' must be an object".to_string())?;
    let values = object
        .get("value")
        .and_then(Value::as_object)
        .ok_or_else(|| "'value' must be an object".to_string())?;

    let mut order: Vec<&str> = DIMENSIONS
        .iter()
        .copied()
        .filter(|key| dimension_block(dimension, key).is_some())
        .collect();
    if order.is_empty() {
        order = DIMENSIONS.to_vec();
    }

    let maps: Vec<BTreeMap<usize, String>> = order
        .iter()
        .map(|key| {
            let map = labels(dimension, key);
            if map.is_empty() {
                BTreeMap::from([(0, String::new())])
            } else {
                map
            }
        })
        .collect();
    let bases: Vec<usize> = order
        .iter()
        .zip(&maps)
        .map(|(key, map)| dimension_size(dimension, key, map))
        .collect();

    let mut entries: Vec<(usize, &Value)> = values
        .iter()
        .filter_map(|(key, value)| Some((key.trim().parse::<usize>().ok()?, value)))
        .collect();
    entries.sort_by_key(|(index, _)| *index);

    let mut observations = Vec::with_capacity(entries.len());
    for (index, value) in entries {
        if value.is_null() {
            continue;
        }
        let coords = unravel(index, &bases);
        let mut fields: BTreeMap<&str, String> = BTreeMap::new();
        for ((key, map), coord) in order.iter().zip(&maps).zip(coords) {
            let label = map.get(&coord).cloned().unwrap_or_else(|| coord.to_string());
            fields.insert(*key, label);
        }
        let mut field = |key: &str| fields.remove(key).unwrap_or_default();
        observations.push(Observation {
            unit: field("unit"),
            sex: field("sex"),
            age: field("age"),
            geo: field("geo"),
            time: field("time"),
            value: text(Some(value)),
        });
    }
    Ok(observations)
}
