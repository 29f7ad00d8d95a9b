//! ALOHA text line decoder.
//!
//! The device statistics dump writes one event per line:
//!
//! ```text
//! ALOHA: RouteTracking_RouteClosing [ distance=513244 percent=0.197765 rebuildCount=0 router=vehicle ] <utc=0,lat=44.4369109,lon=8.9513113,acc=1.00>
//! ```
//!
//! The event name may contain spaces (`Routing. Start`). Both the bracketed
//! field list and the `<...>` device trailer are optional. `utc` is epoch
//! milliseconds; `0` means the device had no clock fix.

use crate::{DecodeError, RawRecord};
use chrono::{DateTime, Utc};
use regex::Regex;
use routenorm_core::{Coordinate, RawEvent};
use std::sync::LazyLock;

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ALOHA:\s*(?P<name>[^\[<]+?)\s*(?:\[(?P<fields>[^\]]*)\])?\s*(?:<(?P<meta>[^>]*)>)?\s*$")
        .expect("ALOHA line regex must compile")
});

pub fn decode_line(line: &str) -> Result<Option<RawRecord>, DecodeError> {
    let line = line.trim();
    if !line.starts_with("ALOHA:") {
        return Ok(None);
    }

    let caps = LINE
        .captures(line)
        .ok_or_else(|| DecodeError::Aloha(line.to_string()))?;

    let mut event = RawEvent::new(caps["name"].trim());
    if let Some(body) = caps.name("fields") {
        for token in body.as_str().split_whitespace() {
            match token.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    event.fields.insert(key.to_string(), value.to_string());
                }
                _ => tracing::debug!(event = %event.name, token, "ignoring non key=value token"),
            }
        }
    }

    let mut record = RawRecord::new(event);
    if let Some(meta) = caps.name("meta") {
        let (location, utc) = parse_meta(meta.as_str())?;
        record.location = location;
        record.utc = utc;
    }
    Ok(Some(record))
}

/// `utc=..,lat=..,lon=..,acc=..` → (location, timestamp).
fn parse_meta(meta: &str) -> Result<(Option<Coordinate>, Option<DateTime<Utc>>), DecodeError> {
    let mut lat = None;
    let mut lon = None;
    let mut utc = None;

    for pair in meta.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "lat" => lat = Some(parse_number::<f64>(key, value)?),
            "lon" => lon = Some(parse_number::<f64>(key, value)?),
            "utc" => {
                let millis = parse_number::<i64>(key, value)?;
                if millis != 0 {
                    utc = Some(DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                        DecodeError::InvalidField {
                            key: key.to_string(),
                            reason: format!("timestamp {millis} out of range"),
                        }
                    })?);
                }
            }
            _ => {}
        }
    }

    Ok((lat.zip(lon).map(Coordinate::from), utc))
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, DecodeError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| DecodeError::InvalidField {
        key: key.to_string(),
        reason: format!("{value:?}: {e}"),
    })
}
