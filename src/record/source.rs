//! Reading raw slide records from JSON payloads.

use super::types::RawSlideRecord;
use crate::common::{Error, Result};
use serde_json::Value;
use std::io::Read;
use tracing::{debug, warn};

/// Envelope keys under which the record array may be nested.
///
/// `results` is the key used by paginated REST list responses.
const ENVELOPE_KEYS: [&str; 2] = ["slides", "results"];

/// Parse raw slide records from a JSON string.
///
/// Accepts either a top-level array of record objects or an object that
/// carries the array under `slides` or `results`.
///
/// # Examples
///
/// ```rust
/// use coursedeck::record::parse_records;
///
/// let records = parse_records(r#"[{"id": 1, "order": 1, "title": "Slide 1: Intro"}]"#)?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), coursedeck::Error>(())
/// ```
pub fn parse_records(json: &str) -> Result<Vec<RawSlideRecord>> {
    let payload: Value = serde_json::from_str(json)?;
    records_from_value(payload)
}

/// Parse raw slide records from a reader producing JSON.
pub fn parse_records_reader<R: Read>(reader: R) -> Result<Vec<RawSlideRecord>> {
    let payload: Value = serde_json::from_reader(reader)?;
    records_from_value(payload)
}

/// Extract raw slide records from an already-parsed JSON value.
///
/// Elements that are not objects are skipped and logged; they never fail
/// the whole payload.
pub fn records_from_value(payload: Value) -> Result<Vec<RawSlideRecord>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| {
                Error::InvalidPayload(format!(
                    "object payload has no {} array",
                    ENVELOPE_KEYS.join(" or ")
                ))
            })?,
        other => {
            return Err(Error::InvalidPayload(format!(
                "expected an array of slide records, found {}",
                value_kind(&other)
            )));
        },
    };

    let total = items.len();
    let mut records = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, kind = value_kind(&item), "skipping non-object slide record");
            continue;
        }
        match serde_json::from_value::<RawSlideRecord>(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!(index, error = %err, "skipping malformed slide record"),
        }
    }

    debug!(total, accepted = records.len(), "parsed slide records");
    Ok(records)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
