// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `azure` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Number of active client instances
///
/// Instrument: `updowncounter`. Unit: `{instance}`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT: &str =
    "azure.cosmosdb.client.active_instance.count";

/// Request units consumed by the operation
///
/// Instrument: `histogram`. Unit: `{request_unit}`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE: &str =
    "azure.cosmosdb.client.operation.request_charge";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "AZURE_COSMOSDB_CLIENT_ACTIVE_INSTANCE_COUNT",
        "azure.cosmosdb.client.active_instance.count",
        UpDownCounter,
        "{instance}",
        Experimental,
    ),
    Entry::metric(
        "AZURE_COSMOSDB_CLIENT_OPERATION_REQUEST_CHARGE",
        "azure.cosmosdb.client.operation.request_charge",
        Histogram,
        "{request_unit}",
        Experimental,
    ),
];
