//! Normalizer: turns one [`RawEvent`] into one [`NormalizedEvent`].
//!
//! One pure function per routing category. Each reads its fields through
//! [`Fields`], applies the documented defaults, and either returns a complete
//! event or an error; nothing is cached between calls.

use crate::aliases::resolve_mode;
use crate::error::{NormalizeError, Result};
use crate::fields::{
    Fields, DEFAULT_PERCENT, DEFAULT_POINT_METHOD, DEFAULT_POINT_TYPE, DEFAULT_POINT_VALUE,
    DEFAULT_PROVIDER, DEFAULT_ROUTING_MODE, DEFAULT_TRAFFIC_STATE, DISTANCE_DONE_KEYS, MODE_KEYS,
};
use crate::kind::EventKind;
use crate::location::LocationProvider;
use crate::types::{
    Coordinate, Mode, NormalizedEvent, RawEvent, RouteEnd, RouteRequest, RouteTracking,
    RoutingBookmarksClick, RoutingPointAdd, RoutingSearchClick, TaxiRouteRequest, TrafficState,
};

/// Recognize `raw.name` and run the matching rule.
pub fn normalize<L>(raw: &RawEvent, location: &L) -> Result<NormalizedEvent>
where
    L: LocationProvider + ?Sized,
{
    let kind = EventKind::from_event_name(&raw.name)
        .ok_or_else(|| NormalizeError::UnrecognizedEvent(raw.name.clone()))?;
    let event = kind.normalize(raw, location)?;
    tracing::trace!(event = %raw.name, %kind, "normalized");
    Ok(event)
}

// ---------------------------------------------------------------------------
// Route lifecycle
// ---------------------------------------------------------------------------

/// `Routing_CalculatingRoute`. The only rule with a mandatory field: the mode.
pub fn route_request<L>(raw: &RawEvent, location: &L) -> Result<RouteRequest>
where
    L: LocationProvider + ?Sized,
{
    let fields = Fields::new(raw);
    let mode = resolve_mode(fields.require_first_of(MODE_KEYS)?);

    // The embedded start is only read when there is no live fix.
    let start = match location.current_location() {
        Some(live) => Some(live),
        None => coordinate(&fields, "startLat", "startLon")?,
    };

    Ok(RouteRequest {
        mode,
        start,
        destination: coordinate(&fields, "finalLat", "finalLon")?,
        status: fields.text("result").map(str::to_string),
        distance: fields.parse("distance")?,
    })
}

/// `Routing. Start` (Android) / `Point to point Go` (iOS). No payload.
pub fn route_start(_raw: &RawEvent) -> NormalizedEvent {
    NormalizedEvent::RouteStart
}

/// `RouteTracking_RouteClosing` / `RouteTracking_ReachedDestination`.
pub fn route_end(raw: &RawEvent) -> Result<RouteEnd> {
    let fields = Fields::new(raw);
    Ok(RouteEnd {
        mode: optional_mode(&fields),
        rebuild_count: fields.parse("rebuildCount")?,
        distance_done: fields.parse_first_of(DISTANCE_DONE_KEYS)?,
        percent: fields.parse_or("percent", DEFAULT_PERCENT)?,
    })
}

/// `RouteTracking_PercentUpdate`.
pub fn route_tracking(raw: &RawEvent) -> Result<RouteTracking> {
    let fields = Fields::new(raw);
    Ok(RouteTracking {
        mode: optional_mode(&fields),
        percent: fields.parse_or("percent", DEFAULT_PERCENT)?,
    })
}

// ---------------------------------------------------------------------------
// Taxi and traffic
// ---------------------------------------------------------------------------

pub fn taxi_route_request(raw: &RawEvent) -> TaxiRouteRequest {
    TaxiRouteRequest {
        mode: Mode::Taxi,
        provider: Fields::new(raw).text_or("provider", DEFAULT_PROVIDER),
    }
}

pub fn traffic_state(raw: &RawEvent) -> TrafficState {
    TrafficState {
        state: Fields::new(raw).text_or("state", DEFAULT_TRAFFIC_STATE),
    }
}

// ---------------------------------------------------------------------------
// Route planning screen
// ---------------------------------------------------------------------------

pub fn routing_bookmarks_click(raw: &RawEvent) -> RoutingBookmarksClick {
    RoutingBookmarksClick {
        mode: Fields::new(raw).text("mode").map(str::to_string),
    }
}

pub fn routing_point_add(raw: &RawEvent) -> RoutingPointAdd {
    let fields = Fields::new(raw);
    RoutingPointAdd {
        mode: fields.text_or("mode", DEFAULT_ROUTING_MODE),
        method: fields.text_or("method", DEFAULT_POINT_METHOD),
        point_type: fields.text_or("type", DEFAULT_POINT_TYPE),
        value: fields.text_or("value", DEFAULT_POINT_VALUE),
    }
}

pub fn routing_search_click(raw: &RawEvent) -> RoutingSearchClick {
    RoutingSearchClick {
        mode: Fields::new(raw).text_or("mode", DEFAULT_ROUTING_MODE),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Both halves present → coordinate; either missing → `None`.
fn coordinate(fields: &Fields<'_>, lat: &'static str, lon: &'static str) -> Result<Option<Coordinate>> {
    let lat = fields.parse::<f64>(lat)?;
    let lon = fields.parse::<f64>(lon)?;
    Ok(lat.zip(lon).map(Coordinate::from))
}

fn optional_mode(fields: &Fields<'_>) -> Option<Mode> {
    fields.first_of(MODE_KEYS).map(|(_, raw)| resolve_mode(raw))
}
