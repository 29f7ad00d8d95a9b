//! JSON lines decoder.
//!
//! ```json
//! {"name": "Routing_Build_Taxi", "fields": {"provider": "Uber"}, "location": {"lat": 1.0, "lon": 2.0}, "utc": "2024-01-15T10:00:00Z"}
//! ```
//!
//! Only `name` is required. Numeric and boolean field values are kept in
//! their textual form so every rule sees the same string dictionary the ALOHA
//! decoder produces; `null` values are dropped as if the key were absent.

use crate::{DecodeError, RawRecord};
use chrono::{DateTime, Utc};
use routenorm_core::{Coordinate, RawEvent};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct JsonEvent {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
    #[serde(default)]
    location: Option<Coordinate>,
    #[serde(default)]
    utc: Option<DateTime<Utc>>,
}

pub fn decode_line(line: &str) -> Result<Option<RawRecord>, DecodeError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parsed: JsonEvent = serde_json::from_str(line)?;
    let mut event = RawEvent::new(parsed.name);
    for (key, value) in parsed.fields {
        if let Some(text) = field_text(&key, value)? {
            event.fields.insert(key, text);
        }
    }

    Ok(Some(RawRecord {
        event,
        location: parsed.location,
        utc: parsed.utc,
    }))
}

fn field_text(key: &str, value: Value) -> Result<Option<String>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(DecodeError::InvalidField {
            key: key.to_string(),
            reason: "nested values are not supported".to_string(),
        }),
    }
}
