// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `aspnetcore`, `kestrel`, `signalr` namespaces.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Number of exceptions caught by exception handling middleware.
///
/// Instrument: `counter`. Unit: `{exception}`.
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTIONS: &str = "aspnetcore.diagnostics.exceptions";

/// Number of requests that are currently active on the server that hold a rate limiting lease.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
pub const ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES: &str =
    "aspnetcore.rate_limiting.active_request_leases";

/// Number of requests that are currently queued, waiting to acquire a rate limiting lease.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
pub const ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS: &str =
    "aspnetcore.rate_limiting.queued_requests";

/// The time the request spent in a queue waiting to acquire a rate limiting lease.
///
/// Instrument: `histogram`. Unit: `s`.
pub const ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE: &str =
    "aspnetcore.rate_limiting.request.time_in_queue";

/// The duration of rate limiting lease held by requests on the server.
///
/// Instrument: `histogram`. Unit: `s`.
pub const ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION: &str =
    "aspnetcore.rate_limiting.request_lease.duration";

/// Number of requests that tried to acquire a rate limiting lease.
///
/// Instrument: `counter`. Unit: `{request}`.
pub const ASPNETCORE_RATE_LIMITING_REQUESTS: &str = "aspnetcore.rate_limiting.requests";

/// Number of requests that were attempted to be matched to an endpoint.
///
/// Instrument: `counter`. Unit: `{match_attempt}`.
pub const ASPNETCORE_ROUTING_MATCH_ATTEMPTS: &str = "aspnetcore.routing.match_attempts";

/// Number of connections that are currently active on the server.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
pub const KESTREL_ACTIVE_CONNECTIONS: &str = "kestrel.active_connections";

/// Number of TLS handshakes that are currently in progress on the server.
///
/// Instrument: `updowncounter`. Unit: `{handshake}`.
pub const KESTREL_ACTIVE_TLS_HANDSHAKES: &str = "kestrel.active_tls_handshakes";

/// The duration of connections on the server.
///
/// Instrument: `histogram`. Unit: `s`.
pub const KESTREL_CONNECTION_DURATION: &str = "kestrel.connection.duration";

/// Number of connections that are currently queued and are waiting to start.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
pub const KESTREL_QUEUED_CONNECTIONS: &str = "kestrel.queued_connections";

/// Number of HTTP requests on multiplexed connections (HTTP/2 and HTTP/3) that are currently queued and are waiting to start.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
pub const KESTREL_QUEUED_REQUESTS: &str = "kestrel.queued_requests";

/// Number of connections rejected by the server.
///
/// Instrument: `counter`. Unit: `{connection}`.
pub const KESTREL_REJECTED_CONNECTIONS: &str = "kestrel.rejected_connections";

/// The duration of TLS handshakes on the server.
///
/// Instrument: `histogram`. Unit: `s`.
pub const KESTREL_TLS_HANDSHAKE_DURATION: &str = "kestrel.tls_handshake.duration";

/// Number of connections that are currently upgraded (WebSockets).
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
pub const KESTREL_UPGRADED_CONNECTIONS: &str = "kestrel.upgraded_connections";

/// Number of connections that are currently active on the server.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
pub const SIGNALR_SERVER_ACTIVE_CONNECTIONS: &str = "signalr.server.active_connections";

/// The duration of connections on the server.
///
/// Instrument: `histogram`. Unit: `s`.
pub const SIGNALR_SERVER_CONNECTION_DURATION: &str = "signalr.server.connection.duration";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "ASPNETCORE_DIAGNOSTICS_EXCEPTIONS",
        "aspnetcore.diagnostics.exceptions",
        Counter,
        "{exception}",
        Stable,
    ),
    Entry::metric(
        "ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES",
        "aspnetcore.rate_limiting.active_request_leases",
        UpDownCounter,
        "{request}",
        Stable,
    ),
    Entry::metric(
        "ASPNETCORE_RATE_LIMITING_QUEUED_REQUESTS",
        "aspnetcore.rate_limiting.queued_requests",
        UpDownCounter,
        "{request}",
        Stable,
    ),
    Entry::metric(
        "ASPNETCORE_RATE_LIMITING_REQUEST_TIME_IN_QUEUE",
        "aspnetcore.rate_limiting.request.time_in_queue",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "ASPNETCORE_RATE_LIMITING_REQUEST_LEASE_DURATION",
        "aspnetcore.rate_limiting.request_lease.duration",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "ASPNETCORE_RATE_LIMITING_REQUESTS",
        "aspnetcore.rate_limiting.requests",
        Counter,
        "{request}",
        Stable,
    ),
    Entry::metric(
        "ASPNETCORE_ROUTING_MATCH_ATTEMPTS",
        "aspnetcore.routing.match_attempts",
        Counter,
        "{match_attempt}",
        Stable,
    ),
    Entry::metric(
        "KESTREL_ACTIVE_CONNECTIONS",
        "kestrel.active_connections",
        UpDownCounter,
        "{connection}",
        Stable,
    ),
    Entry::metric(
        "KESTREL_ACTIVE_TLS_HANDSHAKES",
        "kestrel.active_tls_handshakes",
        UpDownCounter,
        "{handshake}",
        Stable,
    ),
    Entry::metric(
        "KESTREL_CONNECTION_DURATION",
        "kestrel.connection.duration",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "KESTREL_QUEUED_CONNECTIONS",
        "kestrel.queued_connections",
        UpDownCounter,
        "{connection}",
        Stable,
    ),
    Entry::metric(
        "KESTREL_QUEUED_REQUESTS",
        "kestrel.queued_requests",
        UpDownCounter,
        "{request}",
        Stable,
    ),
    Entry::metric(
        "KESTREL_REJECTED_CONNECTIONS",
        "kestrel.rejected_connections",
        Counter,
        "{connection}",
        Stable,
    ),
    Entry::metric(
        "KESTREL_TLS_HANDSHAKE_DURATION",
        "kestrel.tls_handshake.duration",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "KESTREL_UPGRADED_CONNECTIONS",
        "kestrel.upgraded_connections",
        UpDownCounter,
        "{connection}",
        Stable,
    ),
    Entry::metric(
        "SIGNALR_SERVER_ACTIVE_CONNECTIONS",
        "signalr.server.active_connections",
        UpDownCounter,
        "{connection}",
        Stable,
    ),
    Entry::metric(
        "SIGNALR_SERVER_CONNECTION_DURATION",
        "signalr.server.connection.duration",
        Histogram,
        "s",
        Stable,
    ),
];
