//! Field extraction and defaulting over a [`RawEvent`].
//!
//! Every rule reads its inputs through [`Fields`]. Fallback chains are plain
//! ordered key slices: the first key present wins. Keep the chain constants
//! here so each tie-break order lives in exactly one place.

use crate::error::{NormalizeError, Result};
use crate::types::RawEvent;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Fallback chains
// ---------------------------------------------------------------------------

/// Mode source: `router` wins over `name`.
pub const MODE_KEYS: &[&str] = &["router", "name"];

/// Distance covered at route close: `distance` wins over `passedDistance`.
pub const DISTANCE_DONE_KEYS: &[&str] = &["distance", "passedDistance"];

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// A closed or tracked route with no percent recorded is taken as complete.
pub const DEFAULT_PERCENT: f64 = 100.0;
pub const DEFAULT_PROVIDER: &str = "Unknown";
pub const DEFAULT_TRAFFIC_STATE: &str = "Unknown";
pub const DEFAULT_ROUTING_MODE: &str = "onroute";
pub const DEFAULT_POINT_METHOD: &str = "outside_pp";
pub const DEFAULT_POINT_TYPE: &str = "unknown";
pub const DEFAULT_POINT_VALUE: &str = "unknown";

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// A value a numeric field can be parsed into.
///
/// `f64::from_str` accepts `NaN` and `inf`; neither is a measurement, and
/// `NaN` would make an event unequal to itself, so floats must be finite.
pub trait FieldValue: FromStr {
    fn is_acceptable(&self) -> bool {
        true
    }
}

impl FieldValue for f64 {
    fn is_acceptable(&self) -> bool {
        self.is_finite()
    }
}

impl FieldValue for i64 {}

// ---------------------------------------------------------------------------
// Lookup helper
// ---------------------------------------------------------------------------

/// Read-only view over the fields of one raw event.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    raw: &'a RawEvent,
}

impl<'a> Fields<'a> {
    pub fn new(raw: &'a RawEvent) -> Self {
        Self { raw }
    }

    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.raw.fields.get(key).map(String::as_str)
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or(default).to_string()
    }

    /// First present key of `keys`, with the key that supplied it.
    pub fn first_of(&self, keys: &'static [&'static str]) -> Option<(&'static str, &'a str)> {
        keys.iter()
            .find_map(|&key| self.text(key).map(|value| (key, value)))
    }

    pub fn require_first_of(&self, keys: &'static [&'static str]) -> Result<&'a str> {
        self.first_of(keys)
            .map(|(_, value)| value)
            .ok_or_else(|| NormalizeError::MissingMandatoryField {
                event: self.raw.name.clone(),
                keys,
            })
    }

    /// Parse `key` if present. Absent is `Ok(None)`; unparseable is an error.
    pub fn parse<T: FieldValue>(&self, key: &'static str) -> Result<Option<T>> {
        self.text(key)
            .map(|value| self.coerce(key, value))
            .transpose()
    }

    /// Parse the first present key of `keys`. Later keys are never consulted,
    /// even when the winning value fails to parse.
    pub fn parse_first_of<T: FieldValue>(&self, keys: &'static [&'static str]) -> Result<Option<T>> {
        self.first_of(keys)
            .map(|(key, value)| self.coerce(key, value))
            .transpose()
    }

    pub fn parse_or<T: FieldValue>(&self, key: &'static str, default: T) -> Result<T> {
        Ok(self.parse(key)?.unwrap_or(default))
    }

    fn coerce<T: FieldValue>(&self, key: &'static str, value: &str) -> Result<T> {
        value
            .trim()
            .parse::<T>()
            .ok()
            .filter(|parsed| parsed.is_acceptable())
            .ok_or_else(|| NormalizeError::ValueParse {
                event: self.raw.name.clone(),
                key,
                value: value.to_string(),
                expected: expected_type::<T>(),
            })
    }
}

fn expected_type<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
