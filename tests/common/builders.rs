//! Test builders: ergonomic constructors for raw events.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use routenorm_core::location::NoLocation;
use routenorm_core::{normalize, Coordinate, NormalizedEvent, RawEvent};

// ---------------------------------------------------------------------------
// RawEventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawEvent`] fixtures.
///
/// # Example
///
/// ```rust
/// let raw = RawEventBuilder::new("Routing_CalculatingRoute")
///     .field("router", "vehicle")
///     .start(1.0, 2.0)
///     .build();
/// ```
pub struct RawEventBuilder {
    event: RawEvent,
}

impl RawEventBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            event: RawEvent::new(name),
        }
    }

    pub fn field(mut self, key: &str, value: impl ToString) -> Self {
        self.event.fields.insert(key.to_string(), value.to_string());
        self
    }

    pub fn start(self, lat: f64, lon: f64) -> Self {
        self.field("startLat", lat).field("startLon", lon)
    }

    pub fn destination(self, lat: f64, lon: f64) -> Self {
        self.field("finalLat", lat).field("finalLon", lon)
    }

    pub fn build(self) -> RawEvent {
        self.event
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a raw event from a name and literal pairs.
pub fn raw(name: &str, fields: &[(&str, &str)]) -> RawEvent {
    RawEvent::new(name).with_fields(fields.iter().copied())
}

/// Normalize with no location collaborator, panicking on error.
pub fn normalized(raw: &RawEvent) -> NormalizedEvent {
    normalize(raw, &NoLocation)
        .unwrap_or_else(|err| panic!("{:?} should normalize: {err}", raw.name))
}

/// Normalize with a fixed live location, panicking on error.
pub fn normalized_at(raw: &RawEvent, lat: f64, lon: f64) -> NormalizedEvent {
    normalize(raw, &Coordinate::new(lat, lon))
        .unwrap_or_else(|err| panic!("{:?} should normalize: {err}", raw.name))
}
