//! Core types for routenorm-core.
//!
//! This module defines the data structures shared by every normalization
//! rule: the immutable [`RawEvent`] input, the [`Coordinate`] pair, the
//! canonical travel [`Mode`], and the closed [`NormalizedEvent`] output with
//! one case per semantic routing category.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A raw telemetry event as delivered by the ingestion layer.
///
/// Field values are kept as strings exactly as the device reported them;
/// numbers and booleans are parsed lazily by the rule that needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEvent {
    pub name: String,
    pub fields: HashMap<String, String>,
}

impl RawEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a field, replacing any previous value for the same key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// A latitude/longitude pair. Absence (`Option::None`) means unknown, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

// ---------------------------------------------------------------------------
// Travel mode
// ---------------------------------------------------------------------------

/// Canonical travel modality.
///
/// Identifiers outside the alias table are kept verbatim (lowercased) in
/// [`Mode::Other`] so new router names flow through without a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Pedestrian,
    Bicycle,
    Vehicle,
    Transit,
    Taxi,
    Other(String),
}

impl Mode {
    /// Map an already-canonical, lowercase identifier to a variant.
    pub fn from_canonical(s: &str) -> Self {
        match s {
            "pedestrian" => Mode::Pedestrian,
            "bicycle" => Mode::Bicycle,
            "vehicle" => Mode::Vehicle,
            "transit" => Mode::Transit,
            "taxi" => Mode::Taxi,
            other => Mode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Pedestrian => "pedestrian",
            Mode::Bicycle => "bicycle",
            Mode::Vehicle => "vehicle",
            Mode::Transit => "transit",
            Mode::Taxi => "taxi",
            Mode::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Normalized events
// ---------------------------------------------------------------------------

/// A route was calculated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub mode: Mode,
    /// Live device location when known, else the start embedded in the payload.
    pub start: Option<Coordinate>,
    /// `None` when the route was cancelled before a destination was picked.
    pub destination: Option<Coordinate>,
    /// Raw router result (`NoError`, `Cancelled`, ...), unvalidated.
    pub status: Option<String>,
    pub distance: Option<f64>,
}

/// A route was closed, either cancelled or because the destination was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEnd {
    pub mode: Option<Mode>,
    /// `None` means the device sent no rebuild data, which is not the same as zero.
    pub rebuild_count: Option<i64>,
    pub distance_done: Option<f64>,
    pub percent: f64,
}

/// Periodic progress update while navigating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteTracking {
    pub mode: Option<Mode>,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxiRouteRequest {
    /// Always [`Mode::Taxi`].
    pub mode: Mode,
    pub provider: String,
}

/// The traffic-jam overlay was toggled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficState {
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingBookmarksClick {
    /// Planning-screen mode. Platforms fill this inconsistently, so no default.
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPointAdd {
    pub mode: String,
    pub method: String,
    #[serde(rename = "type")]
    pub point_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingSearchClick {
    pub mode: String,
}

/// The typed output of normalization: one case per semantic routing category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NormalizedEvent {
    RouteRequest(RouteRequest),
    /// Route planning was initiated. The event itself is the whole signal.
    RouteStart,
    RouteEnd(RouteEnd),
    RouteTracking(RouteTracking),
    TaxiRouteRequest(TaxiRouteRequest),
    TrafficState(TrafficState),
    RoutingBookmarksClick(RoutingBookmarksClick),
    RoutingPointAdd(RoutingPointAdd),
    RoutingSearchClick(RoutingSearchClick),
}

impl NormalizedEvent {
    pub fn kind(&self) -> crate::EventKind {
        use crate::EventKind;
        match self {
            NormalizedEvent::RouteRequest(_) => EventKind::RouteRequest,
            NormalizedEvent::RouteStart => EventKind::RouteStart,
            NormalizedEvent::RouteEnd(_) => EventKind::RouteEnd,
            NormalizedEvent::RouteTracking(_) => EventKind::RouteTracking,
            NormalizedEvent::TaxiRouteRequest(_) => EventKind::TaxiRouteRequest,
            NormalizedEvent::TrafficState(_) => EventKind::TrafficState,
            NormalizedEvent::RoutingBookmarksClick(_) => EventKind::RoutingBookmarksClick,
            NormalizedEvent::RoutingPointAdd(_) => EventKind::RoutingPointAdd,
            NormalizedEvent::RoutingSearchClick(_) => EventKind::RoutingSearchClick,
        }
    }
}
