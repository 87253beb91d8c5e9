// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `az`, `azure` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Deprecated, use `azure.resource_provider.namespace` instead.
///
/// Type: `string`. Examples: `"Microsoft.Storage"`, `"Microsoft.KeyVault"`, `"Microsoft.ServiceBus"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.resource_provider.namespace`.")]
pub const AZ_NAMESPACE: &str = "az.namespace";

/// Deprecated, use `azure.service.request.id` instead.
///
/// Type: `string`. Examples: `"00000000-0000-0000-0000-000000000000"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.service.request.id`.")]
pub const AZ_SERVICE_REQUEST_ID: &str = "az.service_request_id";

/// The unique identifier of the client instance.
///
/// Type: `string`. Examples: `"3ba4827d-4422-483f-b59f-85b74211c11d"`, `"storage-client-1"`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_CLIENT_ID: &str = "azure.client.id";

/// Cosmos client connection mode.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONNECTION_MODE: &str = "azure.cosmosdb.connection.mode";

/// Gateway (HTTP) connection.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONNECTION_MODE_VALUE_GATEWAY: &str = "gateway";

/// Direct connection.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONNECTION_MODE_VALUE_DIRECT: &str = "direct";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`AZURE_COSMOSDB_CONNECTION_MODE`].
    AzureCosmosdbConnectionMode for AZURE_COSMOSDB_CONNECTION_MODE {
        /// Gateway (HTTP) connection.
        Gateway = "gateway",
        /// Direct connection.
        Direct = "direct",
    }
}

/// Account or request consistency level.
///
/// Type: `string`. Examples: `"Eventual"`, `"ConsistentPrefix"`, `"BoundedStaleness"`, `"Strong"`, `"Session"`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONSISTENCY_LEVEL: &str = "azure.cosmosdb.consistency.level";

/// Strong
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_STRONG: &str = "Strong";

/// Bounded Staleness
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_BOUNDED_STALENESS: &str = "BoundedStaleness";

/// Session
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_SESSION: &str = "Session";

/// Eventual
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_EVENTUAL: &str = "Eventual";

/// Consistent Prefix
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_CONSISTENT_PREFIX: &str = "ConsistentPrefix";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`AZURE_COSMOSDB_CONSISTENCY_LEVEL`].
    AzureCosmosdbConsistencyLevel for AZURE_COSMOSDB_CONSISTENCY_LEVEL {
        /// Strong
        Strong = "Strong",
        /// Bounded Staleness
        BoundedStaleness = "BoundedStaleness",
        /// Session
        Session = "Session",
        /// Eventual
        Eventual = "Eventual",
        /// Consistent Prefix
        ConsistentPrefix = "ConsistentPrefix",
    }
}

/// List of regions contacted during operation in the order that they were contacted.
///
/// Type: `string[]`. Examples: `["North Central US", "Australia East", "Australia Southeast"]`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_OPERATION_CONTACTED_REGIONS: &str =
    "azure.cosmosdb.operation.contacted_regions";

/// The number of request units consumed by the operation.
///
/// Type: `double`. Examples: `46.18`, `1.0`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_OPERATION_REQUEST_CHARGE: &str = "azure.cosmosdb.operation.request_charge";

/// Request payload size in bytes.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_REQUEST_BODY_SIZE: &str = "azure.cosmosdb.request.body.size";

/// Cosmos DB sub status code.
///
/// Type: `int`. Examples: `1000`, `1002`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_COSMOSDB_RESPONSE_SUB_STATUS_CODE: &str = "azure.cosmosdb.response.sub_status_code";

/// Azure Resource Provider Namespace as recognized by the client.
///
/// Type: `string`. Examples: `"Microsoft.Storage"`, `"Microsoft.KeyVault"`, `"Microsoft.ServiceBus"`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_RESOURCE_PROVIDER_NAMESPACE: &str = "azure.resource_provider.namespace";

/// The unique identifier of the service request. It's generated by the Azure service and returned with the response.
///
/// Type: `string`. Examples: `"00000000-0000-0000-0000-000000000000"`.
#[cfg(feature = "semconv_experimental")]
pub const AZURE_SERVICE_REQUEST_ID: &str = "azure.service.request.id";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("AZ_NAMESPACE", "az.namespace", Experimental)
        .deprecated(Renamed("azure.resource_provider.namespace")),
    Entry::attribute("AZ_SERVICE_REQUEST_ID", "az.service_request_id", Experimental)
        .deprecated(Renamed("azure.service.request.id")),
    Entry::attribute("AZURE_CLIENT_ID", "azure.client.id", Experimental),
    Entry::attribute(
        "AZURE_COSMOSDB_CONNECTION_MODE",
        "azure.cosmosdb.connection.mode",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONNECTION_MODE_VALUE_GATEWAY",
        "azure.cosmosdb.connection.mode",
        "gateway",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONNECTION_MODE_VALUE_DIRECT",
        "azure.cosmosdb.connection.mode",
        "direct",
        Experimental,
    ),
    Entry::attribute(
        "AZURE_COSMOSDB_CONSISTENCY_LEVEL",
        "azure.cosmosdb.consistency.level",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_STRONG",
        "azure.cosmosdb.consistency.level",
        "Strong",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_BOUNDED_STALENESS",
        "azure.cosmosdb.consistency.level",
        "BoundedStaleness",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_SESSION",
        "azure.cosmosdb.consistency.level",
        "Session",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_EVENTUAL",
        "azure.cosmosdb.consistency.level",
        "Eventual",
        Experimental,
    ),
    Entry::value(
        "AZURE_COSMOSDB_CONSISTENCY_LEVEL_VALUE_CONSISTENT_PREFIX",
        "azure.cosmosdb.consistency.level",
        "ConsistentPrefix",
        Experimental,
    ),
    Entry::attribute(
        "AZURE_COSMOSDB_OPERATION_CONTACTED_REGIONS",
        "azure.cosmosdb.operation.contacted_regions",
        Experimental,
    ),
    Entry::attribute(
        "AZURE_COSMOSDB_OPERATION_REQUEST_CHARGE",
        "azure.cosmosdb.operation.request_charge",
        Experimental,
    ),
    Entry::attribute(
        "AZURE_COSMOSDB_REQUEST_BODY_SIZE",
        "azure.cosmosdb.request.body.size",
        Experimental,
    ),
    Entry::attribute(
        "AZURE_COSMOSDB_RESPONSE_SUB_STATUS_CODE",
        "azure.cosmosdb.response.sub_status_code",
        Experimental,
    ),
    Entry::attribute(
        "AZURE_RESOURCE_PROVIDER_NAMESPACE",
        "azure.resource_provider.namespace",
        Experimental,
    ),
    Entry::attribute("AZURE_SERVICE_REQUEST_ID", "azure.service.request.id", Experimental),
];
