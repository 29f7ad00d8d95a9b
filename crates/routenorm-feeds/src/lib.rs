//! routenorm-feeds: raw telemetry feed sources for routenorm.
//!
//! A feed is anything line-oriented (a file or stdin). Each line is decoded
//! into a [`RawRecord`]: the [`RawEvent`] itself plus the device metadata that
//! travelled with it, most importantly the location fix the normalizer uses as
//! its location collaborator.

pub mod aloha;
pub mod jsonl;

use chrono::{DateTime, Utc};
use routenorm_core::config::InputFormat;
use routenorm_core::{Coordinate, RawEvent};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use thiserror::Error;

/// Where raw lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

impl FeedSource {
    /// `None` or `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => FeedSource::File(path),
            _ => FeedSource::Stdin,
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Stdin => write!(f, "stdin"),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Open a feed for line-by-line reading.
pub fn open(source: &FeedSource) -> io::Result<Box<dyn BufRead>> {
    Ok(match source {
        FeedSource::Stdin => Box::new(io::stdin().lock()),
        FeedSource::File(path) => Box::new(BufReader::new(File::open(path)?)),
    })
}

/// One decoded line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub event: RawEvent,
    /// Device fix reported alongside the event, if any.
    pub location: Option<Coordinate>,
    pub utc: Option<DateTime<Utc>>,
}

impl RawRecord {
    pub fn new(event: RawEvent) -> Self {
        Self {
            event,
            location: None,
            utc: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed ALOHA line: {0}")]
    Aloha(String),

    #[error("malformed JSON event: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field {key:?}: {reason}")]
    InvalidField { key: String, reason: String },
}

/// Decode one line in `format`. Blank lines and non-event lines yield `Ok(None)`.
pub fn decode(format: InputFormat, line: &str) -> Result<Option<RawRecord>, DecodeError> {
    match format {
        InputFormat::Aloha => aloha::decode_line(line),
        InputFormat::Jsonl => jsonl::decode_line(line),
    }
}
