// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `db` namespace.

use crate::registry::{Deprecated::*, Entry, Instrument::*, Stability::*};

/// The number of connections that are currently in state described by the `state` attribute.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_COUNT: &str = "db.client.connection.count";

/// The time it took to create a new connection.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_CREATE_TIME: &str = "db.client.connection.create_time";

/// The maximum number of idle open connections allowed.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MAX: &str = "db.client.connection.idle.max";

/// The minimum number of idle open connections allowed.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MIN: &str = "db.client.connection.idle.min";

/// The maximum number of open connections allowed.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_MAX: &str = "db.client.connection.max";

/// The number of current pending requests for an open connection.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_PENDING_REQUESTS: &str = "db.client.connection.pending_requests";

/// The number of connection timeouts that have occurred trying to obtain a connection from the pool.
///
/// Instrument: `counter`. Unit: `{timeout}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_TIMEOUTS: &str = "db.client.connection.timeouts";

/// The time between borrowing a connection and returning it to the pool.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_USE_TIME: &str = "db.client.connection.use_time";

/// The time it took to obtain an open connection from the pool.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_WAIT_TIME: &str = "db.client.connection.wait_time";

/// Deprecated, use `db.client.connection.create_time` instead. Note: the unit also changed from `ms` to `s`.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.create_time` with unit `s`.")]
pub const DB_CLIENT_CONNECTIONS_CREATE_TIME: &str = "db.client.connections.create_time";

/// Deprecated, use `db.client.connection.idle.max` instead.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.max`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MAX: &str = "db.client.connections.idle.max";

/// Deprecated, use `db.client.connection.idle.min` instead.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.idle.min`.")]
pub const DB_CLIENT_CONNECTIONS_IDLE_MIN: &str = "db.client.connections.idle.min";

/// Deprecated, use `db.client.connection.max` instead.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.max`.")]
pub const DB_CLIENT_CONNECTIONS_MAX: &str = "db.client.connections.max";

/// Deprecated, use `db.client.connection.pending_requests` instead.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.pending_requests`.")]
pub const DB_CLIENT_CONNECTIONS_PENDING_REQUESTS: &str = "db.client.connections.pending_requests";

/// Deprecated, use `db.client.connection.timeouts` instead.
///
/// Instrument: `counter`. Unit: `{timeout}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.timeouts`.")]
pub const DB_CLIENT_CONNECTIONS_TIMEOUTS: &str = "db.client.connections.timeouts";

/// Deprecated, use `db.client.connection.count` instead.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.count`.")]
pub const DB_CLIENT_CONNECTIONS_USAGE: &str = "db.client.connections.usage";

/// Deprecated, use `db.client.connection.use_time` instead. Note: the unit also changed from `ms` to `s`.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.use_time` with unit `s`.")]
pub const DB_CLIENT_CONNECTIONS_USE_TIME: &str = "db.client.connections.use_time";

/// Deprecated, use `db.client.connection.wait_time` instead. Note: the unit also changed from `ms` to `s`.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.wait_time` with unit `s`.")]
pub const DB_CLIENT_CONNECTIONS_WAIT_TIME: &str = "db.client.connections.wait_time";

/// Deprecated, use `azure.cosmosdb.client.active_instance.count` instead.
///
/// Instrument: `updowncounter`. Unit: `{instance}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.active_instance.count`.")]
pub const DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT: &str =
    "db.client.cosmosdb.active_instance.count";

/// Deprecated, use `azure.cosmosdb.client.operation.request_charge` instead.
///
/// Instrument: `histogram`. Unit: `{request_unit}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.client.operation.request_charge`.")]
pub const DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE: &str =
    "db.client.cosmosdb.operation.request_charge";

/// Duration of database client operations.
///
/// Instrument: `histogram`. Unit: `s`.
pub const DB_CLIENT_OPERATION_DURATION: &str = "db.client.operation.duration";

/// The actual number of records returned by the database operation.
///
/// Instrument: `histogram`. Unit: `{row}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_RESPONSE_RETURNED_ROWS: &str = "db.client.response.returned_rows";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "DB_CLIENT_CONNECTION_COUNT",
        "db.client.connection.count",
        UpDownCounter,
        "{connection}",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_CREATE_TIME",
        "db.client.connection.create_time",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_IDLE_MAX",
        "db.client.connection.idle.max",
        UpDownCounter,
        "{connection}",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_IDLE_MIN",
        "db.client.connection.idle.min",
        UpDownCounter,
        "{connection}",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_MAX",
        "db.client.connection.max",
        UpDownCounter,
        "{connection}",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_PENDING_REQUESTS",
        "db.client.connection.pending_requests",
        UpDownCounter,
        "{request}",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_TIMEOUTS",
        "db.client.connection.timeouts",
        Counter,
        "{timeout}",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_USE_TIME",
        "db.client.connection.use_time",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTION_WAIT_TIME",
        "db.client.connection.wait_time",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_CREATE_TIME",
        "db.client.connections.create_time",
        Histogram,
        "ms",
        Experimental,
    )
    .deprecated(Uncategorized),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_IDLE_MAX",
        "db.client.connections.idle.max",
        UpDownCounter,
        "{connection}",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.idle.max")),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_IDLE_MIN",
        "db.client.connections.idle.min",
        UpDownCounter,
        "{connection}",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.idle.min")),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_MAX",
        "db.client.connections.max",
        UpDownCounter,
        "{connection}",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.max")),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_PENDING_REQUESTS",
        "db.client.connections.pending_requests",
        UpDownCounter,
        "{request}",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.pending_requests")),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_TIMEOUTS",
        "db.client.connections.timeouts",
        Counter,
        "{timeout}",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.timeouts")),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_USAGE",
        "db.client.connections.usage",
        UpDownCounter,
        "{connection}",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.count")),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_USE_TIME",
        "db.client.connections.use_time",
        Histogram,
        "ms",
        Experimental,
    )
    .deprecated(Uncategorized),
    Entry::metric(
        "DB_CLIENT_CONNECTIONS_WAIT_TIME",
        "db.client.connections.wait_time",
        Histogram,
        "ms",
        Experimental,
    )
    .deprecated(Uncategorized),
    Entry::metric(
        "DB_CLIENT_COSMOSDB_ACTIVE_INSTANCE_COUNT",
        "db.client.cosmosdb.active_instance.count",
        UpDownCounter,
        "{instance}",
        Experimental,
    )
    .deprecated(Renamed("azure.cosmosdb.client.active_instance.count")),
    Entry::metric(
        "DB_CLIENT_COSMOSDB_OPERATION_REQUEST_CHARGE",
        "db.client.cosmosdb.operation.request_charge",
        Histogram,
        "{request_unit}",
        Experimental,
    )
    .deprecated(Renamed("azure.cosmosdb.client.operation.request_charge")),
    Entry::metric(
        "DB_CLIENT_OPERATION_DURATION",
        "db.client.operation.duration",
        Histogram,
        "s",
        Stable,
    ),
    Entry::metric(
        "DB_CLIENT_RESPONSE_RETURNED_ROWS",
        "db.client.response.returned_rows",
        Histogram,
        "{row}",
        Experimental,
    ),
];
