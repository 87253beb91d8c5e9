// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `aspnetcore`, `signalr` namespaces.

use crate::registry::{Entry, Stability::*};

/// ASP.NET Core exception middleware handling result
///
/// Type: `string`. Examples: `"handled"`, `"unhandled"`.
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT: &str = "aspnetcore.diagnostics.exception.result";

/// Exception was handled by the exception handling middleware.
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_HANDLED: &str = "handled";

/// Exception was not handled by the exception handling middleware.
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_UNHANDLED: &str = "unhandled";

/// Exception handling was skipped because the response had started.
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_SKIPPED: &str = "skipped";

/// Exception handling didn't run because the request was aborted.
pub const ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_ABORTED: &str = "aborted";

semconv_enum! {
    /// Values of [`ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT`].
    AspnetcoreDiagnosticsExceptionResult for ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT {
        /// Exception was handled by the exception handling middleware.
        Handled = "handled",
        /// Exception was not handled by the exception handling middleware.
        Unhandled = "unhandled",
        /// Exception handling was skipped because the response had started.
        Skipped = "skipped",
        /// Exception handling didn't run because the request was aborted.
        Aborted = "aborted",
    }
}

/// Full type name of the `IExceptionHandler` implementation that handled the exception.
///
/// Type: `string`. Examples: `"Contoso.MyHandler"`.
pub const ASPNETCORE_DIAGNOSTICS_HANDLER_TYPE: &str = "aspnetcore.diagnostics.handler.type";

/// Rate limiting policy name.
///
/// Type: `string`. Examples: `"fixed"`, `"sliding"`, `"token"`.
pub const ASPNETCORE_RATE_LIMITING_POLICY: &str = "aspnetcore.rate_limiting.policy";

/// Rate-limiting result, shows whether the lease was acquired or contains a rejection reason
///
/// Type: `string`. Examples: `"acquired"`, `"request_canceled"`.
pub const ASPNETCORE_RATE_LIMITING_RESULT: &str = "aspnetcore.rate_limiting.result";

/// Lease was acquired
pub const ASPNETCORE_RATE_LIMITING_RESULT_VALUE_ACQUIRED: &str = "acquired";

/// Lease request was rejected by the endpoint limiter
pub const ASPNETCORE_RATE_LIMITING_RESULT_VALUE_ENDPOINT_LIMITER: &str = "endpoint_limiter";

/// Lease request was rejected by the global limiter
pub const ASPNETCORE_RATE_LIMITING_RESULT_VALUE_GLOBAL_LIMITER: &str = "global_limiter";

/// Lease request was canceled
pub const ASPNETCORE_RATE_LIMITING_RESULT_VALUE_REQUEST_CANCELED: &str = "request_canceled";

semconv_enum! {
    /// Values of [`ASPNETCORE_RATE_LIMITING_RESULT`].
    AspnetcoreRateLimitingResult for ASPNETCORE_RATE_LIMITING_RESULT {
        /// Lease was acquired
        Acquired = "acquired",
        /// Lease request was rejected by the endpoint limiter
        EndpointLimiter = "endpoint_limiter",
        /// Lease request was rejected by the global limiter
        GlobalLimiter = "global_limiter",
        /// Lease request was canceled
        RequestCanceled = "request_canceled",
    }
}

/// Flag indicating if request was handled by the application pipeline.
///
/// Type: `boolean`. Examples: `true`.
pub const ASPNETCORE_REQUEST_IS_UNHANDLED: &str = "aspnetcore.request.is_unhandled";

/// A value that indicates whether the matched route is a fallback route.
///
/// Type: `boolean`. Examples: `true`.
pub const ASPNETCORE_ROUTING_IS_FALLBACK: &str = "aspnetcore.routing.is_fallback";

/// Match result - success or failure
///
/// Type: `string`. Examples: `"success"`, `"failure"`.
pub const ASPNETCORE_ROUTING_MATCH_STATUS: &str = "aspnetcore.routing.match_status";

/// Match succeeded
pub const ASPNETCORE_ROUTING_MATCH_STATUS_VALUE_SUCCESS: &str = "success";

/// Match failed
pub const ASPNETCORE_ROUTING_MATCH_STATUS_VALUE_FAILURE: &str = "failure";

semconv_enum! {
    /// Values of [`ASPNETCORE_ROUTING_MATCH_STATUS`].
    AspnetcoreRoutingMatchStatus for ASPNETCORE_ROUTING_MATCH_STATUS {
        /// Match succeeded
        Success = "success",
        /// Match failed
        Failure = "failure",
    }
}

/// SignalR HTTP connection closure status.
///
/// Type: `string`. Examples: `"app_shutdown"`, `"timeout"`.
pub const SIGNALR_CONNECTION_STATUS: &str = "signalr.connection.status";

/// The connection was closed normally.
pub const SIGNALR_CONNECTION_STATUS_VALUE_NORMAL_CLOSURE: &str = "normal_closure";

/// The connection was closed due to a timeout.
pub const SIGNALR_CONNECTION_STATUS_VALUE_TIMEOUT: &str = "timeout";

/// The connection was closed because the app is shutting down.
pub const SIGNALR_CONNECTION_STATUS_VALUE_APP_SHUTDOWN: &str = "app_shutdown";

semconv_enum! {
    /// Values of [`SIGNALR_CONNECTION_STATUS`].
    SignalrConnectionStatus for SIGNALR_CONNECTION_STATUS {
        /// The connection was closed normally.
        NormalClosure = "normal_closure",
        /// The connection was closed due to a timeout.
        Timeout = "timeout",
        /// The connection was closed because the app is shutting down.
        AppShutdown = "app_shutdown",
    }
}

/// SignalR transport type
///
/// Type: `string`. Examples: `"web_sockets"`, `"long_polling"`.
pub const SIGNALR_TRANSPORT: &str = "signalr.transport";

/// ServerSentEvents protocol
pub const SIGNALR_TRANSPORT_VALUE_SERVER_SENT_EVENTS: &str = "server_sent_events";

/// LongPolling protocol
pub const SIGNALR_TRANSPORT_VALUE_LONG_POLLING: &str = "long_polling";

/// WebSockets protocol
pub const SIGNALR_TRANSPORT_VALUE_WEB_SOCKETS: &str = "web_sockets";

semconv_enum! {
    /// Values of [`SIGNALR_TRANSPORT`].
    SignalrTransport for SIGNALR_TRANSPORT {
        /// ServerSentEvents protocol
        ServerSentEvents = "server_sent_events",
        /// LongPolling protocol
        LongPolling = "long_polling",
        /// WebSockets protocol
        WebSockets = "web_sockets",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute(
        "ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT",
        "aspnetcore.diagnostics.exception.result",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_HANDLED",
        "aspnetcore.diagnostics.exception.result",
        "handled",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_UNHANDLED",
        "aspnetcore.diagnostics.exception.result",
        "unhandled",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_SKIPPED",
        "aspnetcore.diagnostics.exception.result",
        "skipped",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_DIAGNOSTICS_EXCEPTION_RESULT_VALUE_ABORTED",
        "aspnetcore.diagnostics.exception.result",
        "aborted",
        Stable,
    ),
    Entry::attribute(
        "ASPNETCORE_DIAGNOSTICS_HANDLER_TYPE",
        "aspnetcore.diagnostics.handler.type",
        Stable,
    ),
    Entry::attribute("ASPNETCORE_RATE_LIMITING_POLICY", "aspnetcore.rate_limiting.policy", Stable),
    Entry::attribute("ASPNETCORE_RATE_LIMITING_RESULT", "aspnetcore.rate_limiting.result", Stable),
    Entry::value(
        "ASPNETCORE_RATE_LIMITING_RESULT_VALUE_ACQUIRED",
        "aspnetcore.rate_limiting.result",
        "acquired",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_RATE_LIMITING_RESULT_VALUE_ENDPOINT_LIMITER",
        "aspnetcore.rate_limiting.result",
        "endpoint_limiter",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_RATE_LIMITING_RESULT_VALUE_GLOBAL_LIMITER",
        "aspnetcore.rate_limiting.result",
        "global_limiter",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_RATE_LIMITING_RESULT_VALUE_REQUEST_CANCELED",
        "aspnetcore.rate_limiting.result",
        "request_canceled",
        Stable,
    ),
    Entry::attribute("ASPNETCORE_REQUEST_IS_UNHANDLED", "aspnetcore.request.is_unhandled", Stable),
    Entry::attribute("ASPNETCORE_ROUTING_IS_FALLBACK", "aspnetcore.routing.is_fallback", Stable),
    Entry::attribute("ASPNETCORE_ROUTING_MATCH_STATUS", "aspnetcore.routing.match_status", Stable),
    Entry::value(
        "ASPNETCORE_ROUTING_MATCH_STATUS_VALUE_SUCCESS",
        "aspnetcore.routing.match_status",
        "success",
        Stable,
    ),
    Entry::value(
        "ASPNETCORE_ROUTING_MATCH_STATUS_VALUE_FAILURE",
        "aspnetcore.routing.match_status",
        "failure",
        Stable,
    ),
    Entry::attribute("SIGNALR_CONNECTION_STATUS", "signalr.connection.status", Stable),
    Entry::value(
        "SIGNALR_CONNECTION_STATUS_VALUE_NORMAL_CLOSURE",
        "signalr.connection.status",
        "normal_closure",
        Stable,
    ),
    Entry::value(
        "SIGNALR_CONNECTION_STATUS_VALUE_TIMEOUT",
        "signalr.connection.status",
        "timeout",
        Stable,
    ),
    Entry::value(
        "SIGNALR_CONNECTION_STATUS_VALUE_APP_SHUTDOWN",
        "signalr.connection.status",
        "app_shutdown",
        Stable,
    ),
    Entry::attribute("SIGNALR_TRANSPORT", "signalr.transport", Stable),
    Entry::value(
        "SIGNALR_TRANSPORT_VALUE_SERVER_SENT_EVENTS",
        "signalr.transport",
        "server_sent_events",
        Stable,
    ),
    Entry::value(
        "SIGNALR_TRANSPORT_VALUE_LONG_POLLING",
        "signalr.transport",
        "long_polling",
        Stable,
    ),
    Entry::value("SIGNALR_TRANSPORT_VALUE_WEB_SOCKETS", "signalr.transport", "web_sockets", Stable),
];
