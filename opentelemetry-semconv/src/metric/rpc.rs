// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `rpc` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Measures the duration of outbound RPC.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_DURATION: &str = "rpc.client.duration";

/// Measures the size of RPC request messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_REQUEST_SIZE: &str = "rpc.client.request.size";

/// Measures the number of messages received per RPC.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_REQUESTS_PER_RPC: &str = "rpc.client.requests_per_rpc";

/// Measures the size of RPC response messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_RESPONSE_SIZE: &str = "rpc.client.response.size";

/// Measures the number of messages sent per RPC.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_RESPONSES_PER_RPC: &str = "rpc.client.responses_per_rpc";

/// Measures the duration of inbound RPC.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_DURATION: &str = "rpc.server.duration";

/// Measures the size of RPC request messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_REQUEST_SIZE: &str = "rpc.server.request.size";

/// Measures the number of messages received per RPC.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_REQUESTS_PER_RPC: &str = "rpc.server.requests_per_rpc";

/// Measures the size of RPC response messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_RESPONSE_SIZE: &str = "rpc.server.response.size";

/// Measures the number of messages sent per RPC.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_RESPONSES_PER_RPC: &str = "rpc.server.responses_per_rpc";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("RPC_CLIENT_DURATION", "rpc.client.duration", Histogram, "ms", Experimental),
    Entry::metric(
        "RPC_CLIENT_REQUEST_SIZE",
        "rpc.client.request.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "RPC_CLIENT_REQUESTS_PER_RPC",
        "rpc.client.requests_per_rpc",
        Histogram,
        "{count}",
        Experimental,
    ),
    Entry::metric(
        "RPC_CLIENT_RESPONSE_SIZE",
        "rpc.client.response.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "RPC_CLIENT_RESPONSES_PER_RPC",
        "rpc.client.responses_per_rpc",
        Histogram,
        "{count}",
        Experimental,
    ),
    Entry::metric("RPC_SERVER_DURATION", "rpc.server.duration", Histogram, "ms", Experimental),
    Entry::metric(
        "RPC_SERVER_REQUEST_SIZE",
        "rpc.server.request.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "RPC_SERVER_REQUESTS_PER_RPC",
        "rpc.server.requests_per_rpc",
        Histogram,
        "{count}",
        Experimental,
    ),
    Entry::metric(
        "RPC_SERVER_RESPONSE_SIZE",
        "rpc.server.response.size",
        Histogram,
        "By",
        Experimental,
    ),
    Entry::metric(
        "RPC_SERVER_RESPONSES_PER_RPC",
        "rpc.server.responses_per_rpc",
        Histogram,
        "{count}",
        Experimental,
    ),
];
