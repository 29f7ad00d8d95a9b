//! routenorm: routing telemetry normalizer.
//!
//! Reads raw analytics events emitted by the mobile apps and writes typed,
//! normalized routing events as JSON lines. The heavy lifting lives in the
//! workspace crates; this crate wires them into a pipeline and exposes it to
//! the CLI and the integration harnesses.
//!
//! # Architecture
//!
//! ```text
//! routenorm-feeds          routenorm-core                    pipeline
//! (file/stdin, decode) ──► (recognize, normalize) ──► (JSON lines + Summary)
//! ```

pub mod pipeline;

pub use pipeline::{Pipeline, Summary};
pub use routenorm_core::config::{Config, InputFormat, Policy};
pub use routenorm_core::{
    normalize, Coordinate, EventKind, LocationProvider, Mode, NoLocation, NormalizeError,
    NormalizedEvent, RawEvent,
};
pub use routenorm_feeds::{FeedSource, RawRecord};
