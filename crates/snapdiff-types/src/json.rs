//! Conversion between [`Value`]/[`Record`] and `serde_json`.
//!
//! JSON cannot carry non-finite numbers, so the outbound direction is
//! fallible. Integral numbers within the safe-integer range serialize as
//! JSON integers so `31` does not come back as `31.0`.

use serde_json::{Map, Number};
use tracing::warn;

use crate::error::{ValueError, ValueResult};
use crate::record::Record;
use crate::value::{as_safe_integer, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(number_from_json(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect()),
        }
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> ValueResult<Self> {
        match Value::from(json) {
            Value::Object(record) => Ok(record),
            other => Err(ValueError::NotAnObject {
                found: other.kind(),
            }),
        }
    }
}

impl Value {
    /// Convert to a `serde_json::Value`, failing on `NaN` or infinities.
    pub fn to_json(&self) -> ValueResult<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(number_to_json(*n)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<ValueResult<Vec<_>>>()?,
            ),
            Value::Object(record) => serde_json::Value::Object(record.to_json_map()?),
        })
    }
}

impl Record {
    /// Parse a JSON document that must be an object.
    pub fn from_json_str(text: &str) -> ValueResult<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Self::try_from(json)
    }

    /// Convert to a JSON object.
    pub fn to_json(&self) -> ValueResult<serde_json::Value> {
        Ok(serde_json::Value::Object(self.to_json_map()?))
    }

    /// Serialize as pretty-printed JSON text.
    pub fn to_json_string_pretty(&self) -> ValueResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }

    fn to_json_map(&self) -> ValueResult<Map<String, serde_json::Value>> {
        self.iter()
            .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
            .collect()
    }
}

fn number_from_json(n: &Number) -> f64 {
    if loses_precision(n) {
        warn!(number = %n, "integer outside the safe range; it will compare as the nearest double");
    }
    // `as_f64` only returns None under serde_json's arbitrary_precision.
    n.as_f64().unwrap_or(f64::NAN)
}

/// Returns `true` for integers that an `f64` cannot hold exactly.
fn loses_precision(n: &Number) -> bool {
    const MAX: u64 = 9_007_199_254_740_991;
    if let Some(i) = n.as_i64() {
        i.unsigned_abs() > MAX
    } else if let Some(u) = n.as_u64() {
        u > MAX
    } else {
        false
    }
}

fn number_to_json(n: f64) -> ValueResult<Number> {
    if let Some(i) = as_safe_integer(n) {
        return Ok(Number::from(i));
    }
    Number::from_f64(n).ok_or(ValueError::NonFiniteNumber(n))
}
