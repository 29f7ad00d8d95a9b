//! Mode alias resolution.
//!
//! Routers report their engine name (`astar-bidirectional-car`, `mixed-car`,
//! `subway`, ...) where analytics wants a travel modality. The table below is
//! fixed at compile time; lookups are case-insensitive and anything not in the
//! table passes through lowercased.

use crate::types::Mode;
use phf::phf_map;

/// Raw router/mode identifier (lowercase) → canonical mode name.
static MODE_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "astar-bidirectional-pedestrian" => "pedestrian",
    "astar-bidirectional-bicycle" => "bicycle",
    "astar-bidirectional-car" => "vehicle",
    "astar-bidirectional-transit" => "transit",
    "pedestrian" => "pedestrian",
    "bicycle" => "bicycle",
    "vehicle" => "vehicle",
    "mixed-car" => "vehicle",
    "subway" => "transit",
};

/// Resolve a raw identifier to its canonical mode string.
///
/// Total over every input, including the empty string.
pub fn resolve_alias(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    match MODE_ALIASES.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    }
}

/// Resolve a raw identifier straight to a [`Mode`].
pub fn resolve_mode(raw: &str) -> Mode {
    Mode::from_canonical(&resolve_alias(raw))
}
