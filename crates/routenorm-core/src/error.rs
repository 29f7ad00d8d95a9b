//! Error taxonomy for normalization.
//!
//! Missing optional fields are never errors; every rule resolves them to a
//! documented default or an absent value. Only the conditions below abort a
//! normalization, and they do so atomically (no partial event is produced).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// None of the keys that can supply a mandatory field were present.
    #[error("event {event:?} is missing mandatory field (expected one of {keys:?})")]
    MissingMandatoryField {
        event: String,
        keys: &'static [&'static str],
    },

    /// A field was present but could not be coerced to the expected type.
    #[error("event {event:?}: field {key:?} = {value:?} is not a valid {expected}")]
    ValueParse {
        event: String,
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// No rule claims this event name.
    #[error("unrecognized event name {0:?}")]
    UnrecognizedEvent(String),
}
