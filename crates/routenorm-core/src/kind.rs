//! Event-name recognition.
//!
//! Each [`EventKind`] declares the exact, case-sensitive event names it
//! claims. iOS and Android report some occurrences under different names, so a
//! kind may claim several. Recognition goes through a compile-time perfect hash
//! map, which refuses to build if two kinds claim the same name.

use crate::error::Result;
use crate::location::LocationProvider;
use crate::normalizer;
use crate::types::{NormalizedEvent, RawEvent};
use phf::phf_map;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    RouteRequest,
    RouteStart,
    RouteEnd,
    RouteTracking,
    TaxiRouteRequest,
    TrafficState,
    RoutingBookmarksClick,
    RoutingPointAdd,
    RoutingSearchClick,
}

static EVENT_NAMES: phf::Map<&'static str, EventKind> = phf_map! {
    "Routing_CalculatingRoute" => EventKind::RouteRequest,
    "Routing. Start" => EventKind::RouteStart,
    "Point to point Go" => EventKind::RouteStart,
    "RouteTracking_RouteClosing" => EventKind::RouteEnd,
    "RouteTracking_ReachedDestination" => EventKind::RouteEnd,
    "RouteTracking_PercentUpdate" => EventKind::RouteTracking,
    "Routing_Build_Taxi" => EventKind::TaxiRouteRequest,
    "$TrafficChangeState" => EventKind::TrafficState,
    "Routing_Bookmarks_click" => EventKind::RoutingBookmarksClick,
    "Routing_Point_add" => EventKind::RoutingPointAdd,
    "Routing_Search_click" => EventKind::RoutingSearchClick,
};

impl EventKind {
    pub const ALL: [EventKind; 9] = [
        EventKind::RouteRequest,
        EventKind::RouteStart,
        EventKind::RouteEnd,
        EventKind::RouteTracking,
        EventKind::TaxiRouteRequest,
        EventKind::TrafficState,
        EventKind::RoutingBookmarksClick,
        EventKind::RoutingPointAdd,
        EventKind::RoutingSearchClick,
    ];

    /// The event names this kind claims.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            EventKind::RouteRequest => &["Routing_CalculatingRoute"],
            EventKind::RouteStart => &["Routing. Start", "Point to point Go"],
            EventKind::RouteEnd => &[
                "RouteTracking_RouteClosing",
                "RouteTracking_ReachedDestination",
            ],
            EventKind::RouteTracking => &["RouteTracking_PercentUpdate"],
            EventKind::TaxiRouteRequest => &["Routing_Build_Taxi"],
            EventKind::TrafficState => &["$TrafficChangeState"],
            EventKind::RoutingBookmarksClick => &["Routing_Bookmarks_click"],
            EventKind::RoutingPointAdd => &["Routing_Point_add"],
            EventKind::RoutingSearchClick => &["Routing_Search_click"],
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_event_name(name: &str) -> Option<Self> {
        EVENT_NAMES.get(name).copied()
    }

    /// Run this kind's rule over `raw`. The event name is not re-checked.
    pub fn normalize<L>(self, raw: &RawEvent, location: &L) -> Result<NormalizedEvent>
    where
        L: LocationProvider + ?Sized,
    {
        Ok(match self {
            EventKind::RouteRequest => {
                NormalizedEvent::RouteRequest(normalizer::route_request(raw, location)?)
            }
            EventKind::RouteStart => normalizer::route_start(raw),
            EventKind::RouteEnd => NormalizedEvent::RouteEnd(normalizer::route_end(raw)?),
            EventKind::RouteTracking => {
                NormalizedEvent::RouteTracking(normalizer::route_tracking(raw)?)
            }
            EventKind::TaxiRouteRequest => {
                NormalizedEvent::TaxiRouteRequest(normalizer::taxi_route_request(raw))
            }
            EventKind::TrafficState => {
                NormalizedEvent::TrafficState(normalizer::traffic_state(raw))
            }
            EventKind::RoutingBookmarksClick => {
                NormalizedEvent::RoutingBookmarksClick(normalizer::routing_bookmarks_click(raw))
            }
            EventKind::RoutingPointAdd => {
                NormalizedEvent::RoutingPointAdd(normalizer::routing_point_add(raw))
            }
            EventKind::RoutingSearchClick => {
                NormalizedEvent::RoutingSearchClick(normalizer::routing_search_click(raw))
            }
        })
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventKind::RouteRequest => "route_request",
            EventKind::RouteStart => "route_start",
            EventKind::RouteEnd => "route_end",
            EventKind::RouteTracking => "route_tracking",
            EventKind::TaxiRouteRequest => "taxi_route_request",
            EventKind::TrafficState => "traffic_state",
            EventKind::RoutingBookmarksClick => "routing_bookmarks_click",
            EventKind::RoutingPointAdd => "routing_point_add",
            EventKind::RoutingSearchClick => "routing_search_click",
        };
        f.write_str(s)
    }
}
