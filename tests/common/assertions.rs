//! Domain-specific assertion macros for routenorm harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! variant that was expected, instead of dumping two unrelated enums.

use routenorm_core::NormalizedEvent;

/// Unwrap a [`NormalizedEvent`] into the payload of one variant or panic.
///
/// ```rust
/// let end = expect_variant!(event, RouteEnd);
/// assert_eq!(end.percent, 100.0);
/// ```
#[macro_export]
macro_rules! expect_variant {
    ($event:expr, $variant:ident) => {{
        match $event {
            routenorm_core::NormalizedEvent::$variant(inner) => inner,
            other => panic!(
                "expect_variant! failed:\n  expected: {}\n  actual:   {:?}",
                stringify!($variant),
                other
            ),
        }
    }};
}

/// Assert that normalizing `raw` fails with a value-parse error on `key`.
#[macro_export]
macro_rules! assert_parse_error {
    ($raw:expr, $key:expr) => {{
        let raw: &routenorm_core::RawEvent = &$raw;
        match routenorm_core::normalize(raw, &routenorm_core::NoLocation) {
            Err(routenorm_core::NormalizeError::ValueParse { key, .. }) if key == $key => {}
            other => panic!(
                "assert_parse_error! failed for {:?}:\n  expected ValueParse on {:?}\n  actual: {:?}",
                raw.name, $key, other
            ),
        }
    }};
}

/// Every serialized event carries its snake_case tag and nothing else is
/// required of it.
pub fn assert_tagged(event: &NormalizedEvent) {
    let json = serde_json::to_value(event).expect("normalized events always serialize");
    assert_eq!(
        json["event"],
        serde_json::Value::String(event.kind().to_string()),
        "serialized tag must match kind for {event:?}"
    );
}
