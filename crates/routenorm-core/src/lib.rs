//! routenorm-core: routing telemetry normalization.
//!
//! Converts raw analytics events (an event name plus a loosely-typed string
//! dictionary, as emitted by the iOS and Android apps) into typed
//! [`NormalizedEvent`] values with stable field names and documented defaults.
//!
//! # Flow
//!
//! ```text
//! RawEvent ──► EventKind::from_event_name ──► rule (normalizer::*) ──► NormalizedEvent
//!                                                   ▲
//!                                   LocationProvider (route requests only)
//! ```
//!
//! Every rule is a pure, synchronous function: no shared state, no I/O, safe
//! to call from any number of threads.

pub mod aliases;
pub mod config;
pub mod error;
pub mod fields;
pub mod kind;
pub mod location;
pub mod normalizer;
pub mod types;

pub use aliases::{resolve_alias, resolve_mode};
pub use error::{NormalizeError, Result};
pub use kind::EventKind;
pub use location::{LocationProvider, NoLocation};
pub use normalizer::normalize;
pub use types::{
    Coordinate, Mode, NormalizedEvent, RawEvent, RouteEnd, RouteRequest, RouteTracking,
    RoutingBookmarksClick, RoutingPointAdd, RoutingSearchClick, TaxiRouteRequest, TrafficState,
};
