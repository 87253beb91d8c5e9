// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `messaging` namespace.

use crate::registry::{Deprecated::*, Entry, Instrument::*, Stability::*};

/// Number of messages that were delivered to the application.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_CONSUMED_MESSAGES: &str = "messaging.client.consumed.messages";

/// Duration of messaging operation initiated by a producer or consumer client.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_OPERATION_DURATION: &str = "messaging.client.operation.duration";

/// Deprecated. Use `messaging.client.sent.messages` instead.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.sent.messages`.")]
pub const MESSAGING_CLIENT_PUBLISHED_MESSAGES: &str = "messaging.client.published.messages";

/// Number of messages producer attempted to send to the broker.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_SENT_MESSAGES: &str = "messaging.client.sent.messages";

/// Duration of processing operation.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_PROCESS_DURATION: &str = "messaging.process.duration";

/// Deprecated. Use `messaging.client.consumed.messages` instead.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_PROCESS_MESSAGES: &str = "messaging.process.messages";

/// Deprecated. Use `messaging.client.operation.duration` instead.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_PUBLISH_DURATION: &str = "messaging.publish.duration";

/// Deprecated. Use `messaging.client.sent.messages` instead.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.sent.messages`.")]
pub const MESSAGING_PUBLISH_MESSAGES: &str = "messaging.publish.messages";

/// Deprecated. Use `messaging.client.operation.duration` instead.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.operation.duration`.")]
pub const MESSAGING_RECEIVE_DURATION: &str = "messaging.receive.duration";

/// Deprecated. Use `messaging.client.consumed.messages` instead.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.client.consumed.messages`.")]
pub const MESSAGING_RECEIVE_MESSAGES: &str = "messaging.receive.messages";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "MESSAGING_CLIENT_CONSUMED_MESSAGES",
        "messaging.client.consumed.messages",
        Counter,
        "{message}",
        Experimental,
    ),
    Entry::metric(
        "MESSAGING_CLIENT_OPERATION_DURATION",
        "messaging.client.operation.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "MESSAGING_CLIENT_PUBLISHED_MESSAGES",
        "messaging.client.published.messages",
        Counter,
        "{message}",
        Experimental,
    )
    .deprecated(Renamed("messaging.client.sent.messages")),
    Entry::metric(
        "MESSAGING_CLIENT_SENT_MESSAGES",
        "messaging.client.sent.messages",
        Counter,
        "{message}",
        Experimental,
    ),
    Entry::metric(
        "MESSAGING_PROCESS_DURATION",
        "messaging.process.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "MESSAGING_PROCESS_MESSAGES",
        "messaging.process.messages",
        Counter,
        "{message}",
        Experimental,
    )
    .deprecated(Renamed("messaging.client.consumed.messages")),
    Entry::metric(
        "MESSAGING_PUBLISH_DURATION",
        "messaging.publish.duration",
        Histogram,
        "s",
        Experimental,
    )
    .deprecated(Renamed("messaging.client.operation.duration")),
    Entry::metric(
        "MESSAGING_PUBLISH_MESSAGES",
        "messaging.publish.messages",
        Counter,
        "{message}",
        Experimental,
    )
    .deprecated(Renamed("messaging.client.sent.messages")),
    Entry::metric(
        "MESSAGING_RECEIVE_DURATION",
        "messaging.receive.duration",
        Histogram,
        "s",
        Experimental,
    )
    .deprecated(Renamed("messaging.client.operation.duration")),
    Entry::metric(
        "MESSAGING_RECEIVE_MESSAGES",
        "messaging.receive.messages",
        Counter,
        "{message}",
        Experimental,
    )
    .deprecated(Renamed("messaging.client.consumed.messages")),
];
