//! Static raw-event corpora used across harnesses.
//!
//! Lines are taken from real device dumps (iOS and Android) so the decoders
//! and rules see the field spellings the apps actually send.

/// One line per recognized event name, in ALOHA text form.
pub const CORPUS_ALOHA: &[&str] = &[
    "ALOHA: Routing_CalculatingRoute [ distance=51797.4 elapsed=6.56531 finalLat=49.45913 finalLon=35.11263 name=vehicle result=NoError startDirectionX=0 startDirectionY=0 startLat=49.55215 startLon=34.52105 ]",
    "ALOHA: Routing. Start []",
    "ALOHA: Point to point Go [ Country=AR Language=ru-UA Orientation=Portrait Value=From_my_position ]",
    "ALOHA: RouteTracking_RouteClosing [ distance=513244 percent=0.197765 rebuildCount=0 router=vehicle ] <utc=0,lat=44.4369109,lon=8.9513113,acc=1.00>",
    "ALOHA: RouteTracking_ReachedDestination [ passedDistance=3.1224 rebuildCount=0 router=vehicle ]",
    "ALOHA: RouteTracking_PercentUpdate [ percent=75.3459 ] <utc=0,lat=-9.9709619,lon=-67.8104598,acc=1.00>",
    "ALOHA: Routing_Build_Taxi [ provider=Uber ]",
    "ALOHA: $TrafficChangeState [ state=WaitingData ]",
    "ALOHA: Routing_Bookmarks_click [ Country=IQ Language=ar-IQ Orientation=Portrait mode=planning ]",
    "ALOHA: Routing_Point_add [ method=planning_pp mode=planning type=finish value=point ]",
    "ALOHA: Routing_Search_click [ mode=onroute ]",
];

/// Lines that decode but that no rule claims, plus non-event noise.
pub const CORPUS_NOISE: &[&str] = &[
    "",
    "# dump started",
    "ALOHA: Search_Query [ query=cafe ]",
    "ALOHA: $OnStart []",
];

/// The same route lifecycle as JSON lines.
pub const CORPUS_JSONL: &[&str] = &[
    r#"{"name":"Routing_CalculatingRoute","fields":{"router":"astar-bidirectional-pedestrian","startLat":"55.75","startLon":"37.61"},"location":{"lat":55.76,"lon":37.62},"utc":"2024-01-15T10:00:00Z"}"#,
    r#"{"name":"RouteTracking_PercentUpdate","fields":{"percent":42.5}}"#,
    r#"{"name":"RouteTracking_ReachedDestination","fields":{"passedDistance":1200,"rebuildCount":2,"router":"pedestrian"}}"#,
];

/// Every recognized event name with an empty field dictionary.
pub fn bare_events() -> Vec<routenorm_core::RawEvent> {
    routenorm_core::EventKind::ALL
        .iter()
        .flat_map(|kind| kind.names().iter())
        .map(|name| routenorm_core::RawEvent::new(*name))
        .collect()
}

/// Join a corpus into a feed body with trailing newline.
pub fn feed(lines: &[&str]) -> String {
    let mut body = lines.join("\n");
    body.push('\n');
    body
}
