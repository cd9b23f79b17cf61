//! JSON encoding of values.
//!
//! Scalars, lists, and maps map onto their JSON counterparts. Values JSON
//! has no native form for are tagged single-key objects:
//!
//! ```text
//! {"$date": "2024-01-15"}
//! {"$datetime": "2024-01-15T10:30:00"}
//! {"$duration": {"days": 3}}
//! ```
//!
//! `Undefined` encodes as `null`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

use super::{Duration, MapKey, Value, DATETIME_FORMAT};
use crate::{DurationUnit, WireError};

const DATE_TAG: &str = "$date";
const DATETIME_TAG: &str = "$datetime";
const DURATION_TAG: &str = "$duration";

impl Value {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(f) => Number::from_f64(*f).map_or(serde_json::Value::Null, Into::into),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => items.iter().map(Value::to_json).collect(),
            Value::Map(entries) => entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_json()))
                .collect::<Map<_, _>>()
                .into(),
            Value::Date(d) => tagged(DATE_TAG, d.format("%Y-%m-%d").to_string().into()),
            Value::DateTime(dt) => tagged(DATETIME_TAG, dt.format(DATETIME_FORMAT).to_string().into()),
            Value::Duration(d) => {
                let fields = DurationUnit::ALL
                    .into_iter()
                    .filter(|unit| d.get(*unit) != 0)
                    .map(|unit| (unit.wire_name().to_string(), d.get(unit).into()))
                    .collect::<Map<_, _>>();
                tagged(DURATION_TAG, fields.into())
            }
            Value::Undefined => serde_json::Value::Null,
        }
    }

    pub fn from_json(json: &serde_json::Value) -> Result<Value, WireError> {
        Ok(match json {
            serde_json::Value::Null => Value::Undefined,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(
                    n.as_f64()
                        .ok_or_else(|| WireError::malformed(format!("unrepresentable number {n}")))?,
                ),
            },
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect::<Result<_, _>>()?)
            }
            serde_json::Value::Object(entries) => {
                if let Some(value) = decode_tagged(entries)? {
                    return Ok(value);
                }
                let mut map = std::collections::BTreeMap::new();
                for (key, value) in entries {
                    map.insert(MapKey::Str(key.clone()), Value::from_json(value)?);
                }
                Value::Map(map)
            }
        })
    }
}

fn tagged(tag: &str, payload: serde_json::Value) -> serde_json::Value {
    let mut map = Map::new();
    map.insert(tag.to_string(), payload);
    serde_json::Value::Object(map)
}

fn decode_tagged(entries: &Map<String, serde_json::Value>) -> Result<Option<Value>, WireError> {
    if entries.len() != 1 {
        return Ok(None);
    }
    let Some((tag, payload)) = entries.iter().next() else {
        return Ok(None);
    };
    let value = match tag.as_str() {
        DATE_TAG => Value::Date(parse_date(payload)?),
        DATETIME_TAG => Value::DateTime(parse_datetime(payload)?),
        DURATION_TAG => Value::Duration(parse_duration(payload)?),
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn parse_date(payload: &serde_json::Value) -> Result<NaiveDate, WireError> {
    let text = payload
        .as_str()
        .ok_or_else(|| WireError::malformed("$date payload must be a string"))?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| WireError::malformed(format!("invalid $date '{text}': {e}")))
}

/// Accepts naive ISO 8601 datetimes and RFC 3339 with an offset (normalized to UTC).
pub fn parse_datetime_text(text: &str) -> Option<NaiveDateTime> {
    let normalized = text.replacen(' ', "T", 1);
    NaiveDateTime::parse_from_str(&normalized, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(&normalized)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

fn parse_datetime(payload: &serde_json::Value) -> Result<NaiveDateTime, WireError> {
    let text = payload
        .as_str()
        .ok_or_else(|| WireError::malformed("$datetime payload must be a string"))?;
    parse_datetime_text(text).ok_or_else(|| WireError::malformed(format!("invalid $datetime '{text}'")))
}

fn parse_duration(payload: &serde_json::Value) -> Result<Duration, WireError> {
    let fields = payload
        .as_object()
        .ok_or_else(|| WireError::malformed("$duration payload must be an object"))?;
    let mut duration = Duration::ZERO;
    for (name, amount) in fields {
        let unit = DurationUnit::from_wire_name(name)
            .ok_or_else(|| WireError::malformed(format!("unknown duration unit '{name}'")))?;
        let amount = amount
            .as_i64()
            .ok_or_else(|| WireError::malformed(format!("duration field '{name}' must be an integer")))?;
        duration = duration
            .with_added(unit, amount)
            .ok_or_else(|| WireError::malformed("duration overflow"))?;
    }
    Ok(duration)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&raw).map_err(D::Error::custom)
    }
}
