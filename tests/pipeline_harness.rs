//! Pipeline integration harness.
//!
//! # What this covers
//!
//! - **ALOHA feeds**: the real-device corpus runs end to end, one output line
//!   per recognized event, noise counted but not emitted.
//! - **JSON line feeds**: the same through the JSON decoder, including the
//!   record-level location acting as the location collaborator.
//! - **File feeds**: a feed opened from disk behaves like an in-memory one.
//! - **Policies**: `skip` keeps going, `fail` stops at the offending line.
//! - **Byte hygiene**: invalid UTF-8 is converted lossily and never ends a run.
//!
//! # Running
//!
//! ```sh
//! cargo test --test pipeline_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use routenorm::{Config, FeedSource, InputFormat, Pipeline, Policy, Summary};
use serde_json::Value;
use std::io::Write;

fn run(config: Config, body: &str) -> (Summary, Vec<Value>) {
    let mut out = Vec::new();
    let summary = Pipeline::new(config)
        .run(body.as_bytes(), &mut out)
        .expect("pipeline run should succeed");
    (summary, parse_output(&out))
}

fn parse_output(out: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(out)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each output line is JSON"))
        .collect()
}

fn jsonl_config() -> Config {
    let mut config = Config::defaults();
    config.input.format = InputFormat::Jsonl;
    config
}

#[test]
fn aloha_corpus_emits_one_event_per_line() {
    let (summary, events) = run(Config::defaults(), &feed(CORPUS_ALOHA));
    assert_eq!(summary.normalized as usize, CORPUS_ALOHA.len());
    assert_eq!(events.len(), CORPUS_ALOHA.len());
    assert_eq!(events[0]["event"], "route_request");
    assert_eq!(events[0]["name"], "Routing_CalculatingRoute");
    assert_eq!(events[2]["event"], "route_start");
    assert_eq!(events[4]["distance_done"], 3.1224);
    assert_eq!(events[9]["type"], "finish");
}

#[test]
fn noise_is_counted_not_emitted() {
    let (summary, events) = run(Config::defaults(), &feed(CORPUS_NOISE));
    assert!(events.is_empty());
    assert_eq!(
        summary,
        Summary {
            lines: 4,
            normalized: 0,
            ignored: 2,
            unrecognized: 2,
            failed: 0,
        }
    );
}

#[test]
fn jsonl_record_location_feeds_route_start() {
    let (summary, events) = run(jsonl_config(), &feed(CORPUS_JSONL));
    assert_eq!(summary.normalized, 3);

    let request = &events[0];
    assert_eq!(request["mode"], "pedestrian");
    assert_eq!(request["start"], serde_json::json!({"lat": 55.76, "lon": 37.62}));
    assert_eq!(request["utc"], "2024-01-15T10:00:00Z");

    assert_eq!(events[1]["percent"], 42.5);
    assert_eq!(events[2]["rebuild_count"], 2);
    assert_eq!(events[2]["distance_done"], 1200.0);
}

#[test]
fn file_feed_matches_in_memory_feed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(feed(CORPUS_ALOHA).as_bytes()).unwrap();

    let reader = routenorm_feeds::open(&FeedSource::File(file.path().to_path_buf())).unwrap();
    let mut out = Vec::new();
    let from_file = Pipeline::new(Config::defaults()).run(reader, &mut out).unwrap();

    let (in_memory, events) = run(Config::defaults(), &feed(CORPUS_ALOHA));
    assert_eq!(from_file, in_memory);
    assert_eq!(parse_output(&out), events);
}

#[test]
fn skip_policy_continues_past_bad_lines() {
    let body = feed(&[
        "ALOHA: RouteTracking_PercentUpdate [ percent=NaNish ]",
        "ALOHA: Routing_CalculatingRoute [ result=Cancelled ]",
        "ALOHA: Routing_Search_click []",
    ]);
    let (summary, events) = run(Config::defaults(), &body);
    assert_eq!(summary.failed, 2);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["mode"], "onroute");
}

#[test]
fn fail_policy_stops_at_first_bad_line() {
    let mut config = Config::defaults();
    config.pipeline.on_error = Policy::Fail;
    let body = feed(&[
        "ALOHA: Routing_Search_click []",
        "ALOHA: Routing_Build_Taxi [ provider=Yandex ] <lat=x,lon=y>",
        "ALOHA: Routing_Search_click []",
    ]);

    let mut out = Vec::new();
    let err = Pipeline::new(config).run(body.as_bytes(), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    assert_eq!(parse_output(&out).len(), 1);
}

#[test]
fn invalid_utf8_is_converted_not_fatal() {
    let mut body = Vec::new();
    body.extend_from_slice(b"ALOHA: Routing. Start []\n");
    body.extend_from_slice(b"ALOHA: $TrafficChangeState [ state=\xff\xfe ]\n");
    body.extend_from_slice(b"ALOHA: Routing_Build_Taxi [ provider=Uber ]\n");

    let mut out = Vec::new();
    let summary = Pipeline::new(Config::defaults())
        .run(body.as_slice(), &mut out)
        .expect("stray bytes must not abort the run");
    let events = parse_output(&out);

    assert_eq!(summary.lines, 3);
    assert_eq!(summary.normalized, 3);
    assert_eq!(events[1]["state"], "\u{FFFD}\u{FFFD}");
    assert_eq!(events[2]["event"], "taxi_route_request");
}

#[test]
fn pretty_output_is_still_valid_json() {
    let mut config = Config::defaults();
    config.output.pretty = true;
    let mut out = Vec::new();
    Pipeline::new(config)
        .run("ALOHA: Routing_Build_Taxi [ provider=Uber ]\n".as_bytes(), &mut out)
        .unwrap();
    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["provider"], "Uber");
}
