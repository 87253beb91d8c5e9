// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `http` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Number of active HTTP requests.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_ACTIVE_REQUESTS: &str = "http.client.active_requests";

/// The duration of the successfully established outbound HTTP connections.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_CONNECTION_DURATION: &str = "http.client.connection.duration";

/// Number of outbound HTTP connections that are currently active or idle on the client.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_OPEN_CONNECTIONS: &str = "http.client.open_connections";

/// Size of HTTP client request bodies.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_REQUEST_BODY_SIZE: &str = "http.client.request.body.size";

/// Duration of HTTP client requests.
///
/// Instrument: `histogram`. Unit: `s`.
pub const HTTP_CLIENT_REQUEST_DURATION: &str = "http.client.request.duration";

/// Size of HTTP client response bodies.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_RESPONSE_BODY_SIZE: &str = "http.client.response.body.size";

/// Number of active HTTP server requests.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_ACTIVE_REQUESTS: &str = "http.server.active_requests";

/// Size of HTTP server request bodies.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_REQUEST_BODY_SIZE: &str = "http.server.request.body.size";

/// Duration of HTTP server requests.
///
/// Instrument: `histogram`. Unit: `s`.
pub const HTTP_SERVER_REQUEST_DURATION: &str = "http.server.request.duration";

/// Size of HTTP server response bodies.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_RESPONSE_BODY_SIZE: &str = "http.server.response.body.size";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "HTTP_CLIENT_ACTIVE_REQUESTS",
        "http.client.active_requests",
        UpDownCounter,
        "{request}",
        Experimental,
    ),
    Entry::metric(
        "HTTP_CLIENT_CONNECTION_DURATION",
        "http.client.connection.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "HTTP_CLIENT_OPEN_CONNECTIONS",
        "http.client.open_connections",
        UpDownCounter,
        "{connection}",
        Experimental,
    ),
    Entry::metric(
        "HTTP_CLIENT_REQUEST_BODY_SIZE",
        "http.client.request.body.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "HTTP_CLIENT_REQUEST_DURATION",
        "http.client.request.duration",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "HTTP_CLIENT_RESPONSE_BODY_SIZE",
        "http.client.response.body.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "HTTP_SERVER_ACTIVE_REQUESTS",
        "http.server.active_requests",
        UpDownCounter,
        "{request}",
        Experimental,
    ),
    Entry::metric(
        "HTTP_SERVER_REQUEST_BODY_SIZE",
        "http.server.request.body.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "HTTP_SERVER_REQUEST_DURATION",
        "http.server.request.duration",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "HTTP_SERVER_RESPONSE_BODY_SIZE",
        "http.server.response.body.size",
        Histogram,
        "By",
        Experimental,
    ),
];
