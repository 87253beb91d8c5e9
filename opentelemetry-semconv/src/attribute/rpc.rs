// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `rpc`, `message` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Deprecated, use `rpc.message.compressed_size` instead.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `rpc.message.compressed_size`.")]
pub const MESSAGE_COMPRESSED_SIZE: &str = "message.compressed_size";

/// Deprecated, use `rpc.message.id` instead.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `rpc.message.id`.")]
pub const MESSAGE_ID: &str = "message.id";

/// Deprecated, use `rpc.message.type` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `rpc.message.type`.")]
pub const MESSAGE_TYPE: &str = "message.type";

/// sent
#[cfg(feature = "semconv_experimental")]
pub const MESSAGE_TYPE_VALUE_SENT: &str = "SENT";

/// received
#[cfg(feature = "semconv_experimental")]
pub const MESSAGE_TYPE_VALUE_RECEIVED: &str = "RECEIVED";

/// Deprecated, use `rpc.message.uncompressed_size` instead.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `rpc.message.uncompressed_size`.")]
pub const MESSAGE_UNCOMPRESSED_SIZE: &str = "message.uncompressed_size";

/// The error codes of the Connect request. Error codes are always string values.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE: &str = "rpc.connect_rpc.error_code";

/// cancelled
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_CANCELLED: &str = "cancelled";

/// unknown
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNKNOWN: &str = "unknown";

/// invalid_argument
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_INVALID_ARGUMENT: &str = "invalid_argument";

/// deadline_exceeded
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_DEADLINE_EXCEEDED: &str = "deadline_exceeded";

/// not_found
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_NOT_FOUND: &str = "not_found";

/// already_exists
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_ALREADY_EXISTS: &str = "already_exists";

/// permission_denied
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_PERMISSION_DENIED: &str = "permission_denied";

/// resource_exhausted
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_RESOURCE_EXHAUSTED: &str = "resource_exhausted";

/// failed_precondition
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_FAILED_PRECONDITION: &str = "failed_precondition";

/// aborted
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_ABORTED: &str = "aborted";

/// out_of_range
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_OUT_OF_RANGE: &str = "out_of_range";

/// unimplemented
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNIMPLEMENTED: &str = "unimplemented";

/// internal
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_INTERNAL: &str = "internal";

/// unavailable
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNAVAILABLE: &str = "unavailable";

/// data_loss
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_DATA_LOSS: &str = "data_loss";

/// unauthenticated
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNAUTHENTICATED: &str = "unauthenticated";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`RPC_CONNECT_RPC_ERROR_CODE`].
    RpcConnectRpcErrorCode for RPC_CONNECT_RPC_ERROR_CODE {
        /// cancelled
        Cancelled = "cancelled",
        /// unknown
        Unknown = "unknown",
        /// invalid_argument
        InvalidArgument = "invalid_argument",
        /// deadline_exceeded
        DeadlineExceeded = "deadline_exceeded",
        /// not_found
        NotFound = "not_found",
        /// already_exists
        AlreadyExists = "already_exists",
        /// permission_denied
        PermissionDenied = "permission_denied",
        /// resource_exhausted
        ResourceExhausted = "resource_exhausted",
        /// failed_precondition
        FailedPrecondition = "failed_precondition",
        /// aborted
        Aborted = "aborted",
        /// out_of_range
        OutOfRange = "out_of_range",
        /// unimplemented
        Unimplemented = "unimplemented",
        /// internal
        Internal = "internal",
        /// unavailable
        Unavailable = "unavailable",
        /// data_loss
        DataLoss = "data_loss",
        /// unauthenticated
        Unauthenticated = "unauthenticated",
    }
}

/// Connect request metadata, `<key>` being the normalized Connect Metadata key (lowercase), the value being the metadata values.
///
/// Type: `template[string[]]`. Examples: `["1.2.3.4", "1.2.3.5"]`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_REQUEST_METADATA: &str = "rpc.connect_rpc.request.metadata";

/// Builds a [`RPC_CONNECT_RPC_REQUEST_METADATA`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn rpc_connect_rpc_request_metadata(key: &str) -> String {
    crate::templated(RPC_CONNECT_RPC_REQUEST_METADATA, key)
}

/// Connect response metadata, `<key>` being the normalized Connect Metadata key (lowercase), the value being the metadata values.
///
/// Type: `template[string[]]`. Examples: `["attribute_value"]`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CONNECT_RPC_RESPONSE_METADATA: &str = "rpc.connect_rpc.response.metadata";

/// Builds a [`RPC_CONNECT_RPC_RESPONSE_METADATA`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn rpc_connect_rpc_response_metadata(key: &str) -> String {
    crate::templated(RPC_CONNECT_RPC_RESPONSE_METADATA, key)
}

/// gRPC request metadata, `<key>` being the normalized gRPC Metadata key (lowercase), the value being the metadata values.
///
/// Type: `template[string[]]`. Examples: `["1.2.3.4", "1.2.3.5"]`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_REQUEST_METADATA: &str = "rpc.grpc.request.metadata";

/// Builds a [`RPC_GRPC_REQUEST_METADATA`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn rpc_grpc_request_metadata(key: &str) -> String {
    crate::templated(RPC_GRPC_REQUEST_METADATA, key)
}

/// gRPC response metadata, `<key>` being the normalized gRPC Metadata key (lowercase), the value being the metadata values.
///
/// Type: `template[string[]]`. Examples: `["attribute_value"]`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_RESPONSE_METADATA: &str = "rpc.grpc.response.metadata";

/// Builds a [`RPC_GRPC_RESPONSE_METADATA`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn rpc_grpc_response_metadata(key: &str) -> String {
    crate::templated(RPC_GRPC_RESPONSE_METADATA, key)
}

/// The numeric status code of the gRPC request.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE: &str = "rpc.grpc.status_code";

/// OK
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_OK: i64 = 0;

/// CANCELLED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_CANCELLED: i64 = 1;

/// UNKNOWN
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_UNKNOWN: i64 = 2;

/// INVALID_ARGUMENT
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_INVALID_ARGUMENT: i64 = 3;

/// DEADLINE_EXCEEDED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_DEADLINE_EXCEEDED: i64 = 4;

/// NOT_FOUND
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_NOT_FOUND: i64 = 5;

/// ALREADY_EXISTS
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_ALREADY_EXISTS: i64 = 6;

/// PERMISSION_DENIED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_PERMISSION_DENIED: i64 = 7;

/// RESOURCE_EXHAUSTED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_RESOURCE_EXHAUSTED: i64 = 8;

/// FAILED_PRECONDITION
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_FAILED_PRECONDITION: i64 = 9;

/// ABORTED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_ABORTED: i64 = 10;

/// OUT_OF_RANGE
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_OUT_OF_RANGE: i64 = 11;

/// UNIMPLEMENTED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_UNIMPLEMENTED: i64 = 12;

/// INTERNAL
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_INTERNAL: i64 = 13;

/// UNAVAILABLE
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_UNAVAILABLE: i64 = 14;

/// DATA_LOSS
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_DATA_LOSS: i64 = 15;

/// UNAUTHENTICATED
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_UNAUTHENTICATED: i64 = 16;

/// `error.code` property of response if it is an error response.
///
/// Type: `int`. Examples: `-32700`, `100`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_JSONRPC_ERROR_CODE: &str = "rpc.jsonrpc.error_code";

/// `error.message` property of response if it is an error response.
///
/// Type: `string`. Examples: `"Parse error"`, `"User already exists"`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_JSONRPC_ERROR_MESSAGE: &str = "rpc.jsonrpc.error_message";

/// `id` property of request or response. Since protocol allows id to be int, string, `null` or missing (for notifications), value is expected to be cast to string for simplicity.
///
/// Type: `string`. Examples: `"10"`, `"request-7"`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_JSONRPC_REQUEST_ID: &str = "rpc.jsonrpc.request_id";

/// Protocol version as in `jsonrpc` property of request/response. Since JSON-RPC 1.0 doesn't specify this, the value can be omitted.
///
/// Type: `string`. Examples: `"2.0"`, `"1.0"`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_JSONRPC_VERSION: &str = "rpc.jsonrpc.version";

/// Compressed size of the message in bytes.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE_COMPRESSED_SIZE: &str = "rpc.message.compressed_size";

/// MUST be calculated as two different counters starting from `1` one for sent messages and one for received message.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE_ID: &str = "rpc.message.id";

/// Whether this is a received or sent message.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE_TYPE: &str = "rpc.message.type";

/// sent
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE_TYPE_VALUE_SENT: &str = "SENT";

/// received
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE_TYPE_VALUE_RECEIVED: &str = "RECEIVED";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`RPC_MESSAGE_TYPE`].
    RpcMessageType for RPC_MESSAGE_TYPE {
        /// sent
        Sent = "SENT",
        /// received
        Received = "RECEIVED",
    }
}

/// Uncompressed size of the message in bytes.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE_UNCOMPRESSED_SIZE: &str = "rpc.message.uncompressed_size";

/// The name of the (logical) method being called, must be equal to the $method part in the span name.
///
/// Type: `string`. Examples: `"exampleMethod"`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_METHOD: &str = "rpc.method";

/// The full (logical) name of the service being called, including its package name, if applicable.
///
/// Type: `string`. Examples: `"myservice.EchoService"`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVICE: &str = "rpc.service";

/// A string identifying the remoting system.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SYSTEM: &str = "rpc.system";

/// gRPC
#[cfg(feature = "semconv_experimental")]
pub const RPC_SYSTEM_VALUE_GRPC: &str = "grpc";

/// Java RMI
#[cfg(feature = "semconv_experimental")]
pub const RPC_SYSTEM_VALUE_JAVA_RMI: &str = "java_rmi";

/// .NET WCF
#[cfg(feature = "semconv_experimental")]
pub const RPC_SYSTEM_VALUE_DOTNET_WCF: &str = "dotnet_wcf";

/// Apache Dubbo
#[cfg(feature = "semconv_experimental")]
pub const RPC_SYSTEM_VALUE_APACHE_DUBBO: &str = "apache_dubbo";

/// Connect RPC
#[cfg(feature = "semconv_experimental")]
pub const RPC_SYSTEM_VALUE_CONNECT_RPC: &str = "connect_rpc";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`RPC_SYSTEM`].
    RpcSystem for RPC_SYSTEM {
        /// gRPC
        Grpc = "grpc",
        /// Java RMI
        JavaRmi = "java_rmi",
        /// .NET WCF
        DotnetWcf = "dotnet_wcf",
        /// Apache Dubbo
        ApacheDubbo = "apache_dubbo",
        /// Connect RPC
        ConnectRpc = "connect_rpc",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("MESSAGE_COMPRESSED_SIZE", "message.compressed_size", Experimental)
        .deprecated(Renamed("rpc.message.compressed_size")),
    Entry::attribute("MESSAGE_ID", "message.id", Experimental)
        .deprecated(Renamed("rpc.message.id")),
    Entry::attribute("MESSAGE_TYPE", "message.type", Experimental)
        .deprecated(Renamed("rpc.message.type")),
    Entry::value("MESSAGE_TYPE_VALUE_SENT", "message.type", "SENT", Experimental),
    Entry::value("MESSAGE_TYPE_VALUE_RECEIVED", "message.type", "RECEIVED", Experimental),
    Entry::attribute("MESSAGE_UNCOMPRESSED_SIZE", "message.uncompressed_size", Experimental)
        .deprecated(Renamed("rpc.message.uncompressed_size")),
    Entry::attribute("RPC_CONNECT_RPC_ERROR_CODE", "rpc.connect_rpc.error_code", Experimental),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_CANCELLED",
        "rpc.connect_rpc.error_code",
        "cancelled",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNKNOWN",
        "rpc.connect_rpc.error_code",
        "unknown",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_INVALID_ARGUMENT",
        "rpc.connect_rpc.error_code",
        "invalid_argument",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_DEADLINE_EXCEEDED",
        "rpc.connect_rpc.error_code",
        "deadline_exceeded",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_NOT_FOUND",
        "rpc.connect_rpc.error_code",
        "not_found",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_ALREADY_EXISTS",
        "rpc.connect_rpc.error_code",
        "already_exists",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_PERMISSION_DENIED",
        "rpc.connect_rpc.error_code",
        "permission_denied",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_RESOURCE_EXHAUSTED",
        "rpc.connect_rpc.error_code",
        "resource_exhausted",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_FAILED_PRECONDITION",
        "rpc.connect_rpc.error_code",
        "failed_precondition",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_ABORTED",
        "rpc.connect_rpc.error_code",
        "aborted",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_OUT_OF_RANGE",
        "rpc.connect_rpc.error_code",
        "out_of_range",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNIMPLEMENTED",
        "rpc.connect_rpc.error_code",
        "unimplemented",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_INTERNAL",
        "rpc.connect_rpc.error_code",
        "internal",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNAVAILABLE",
        "rpc.connect_rpc.error_code",
        "unavailable",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_DATA_LOSS",
        "rpc.connect_rpc.error_code",
        "data_loss",
        Experimental,
    ),
    Entry::value(
        "RPC_CONNECT_RPC_ERROR_CODE_VALUE_UNAUTHENTICATED",
        "rpc.connect_rpc.error_code",
        "unauthenticated",
        Experimental,
    ),
    Entry::template(
        "RPC_CONNECT_RPC_REQUEST_METADATA",
        "rpc.connect_rpc.request.metadata",
        Experimental,
    ),
    Entry::template(
        "RPC_CONNECT_RPC_RESPONSE_METADATA",
        "rpc.connect_rpc.response.metadata",
        Experimental,
    ),
    Entry::template("RPC_GRPC_REQUEST_METADATA", "rpc.grpc.request.metadata", Experimental),
    Entry::template("RPC_GRPC_RESPONSE_METADATA", "rpc.grpc.response.metadata", Experimental),
    Entry::attribute("RPC_GRPC_STATUS_CODE", "rpc.grpc.status_code", Experimental),
    Entry::int_value("RPC_GRPC_STATUS_CODE_VALUE_OK", "rpc.grpc.status_code", 0, Experimental),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_CANCELLED",
        "rpc.grpc.status_code",
        1,
        Experimental,
    ),
    Entry::int_value("RPC_GRPC_STATUS_CODE_VALUE_UNKNOWN", "rpc.grpc.status_code", 2, Experimental),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_INVALID_ARGUMENT",
        "rpc.grpc.status_code",
        3,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_DEADLINE_EXCEEDED",
        "rpc.grpc.status_code",
        4,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_NOT_FOUND",
        "rpc.grpc.status_code",
        5,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_ALREADY_EXISTS",
        "rpc.grpc.status_code",
        6,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_PERMISSION_DENIED",
        "rpc.grpc.status_code",
        7,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_RESOURCE_EXHAUSTED",
        "rpc.grpc.status_code",
        8,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_FAILED_PRECONDITION",
        "rpc.grpc.status_code",
        9,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_ABORTED",
        "rpc.grpc.status_code",
        10,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_OUT_OF_RANGE",
        "rpc.grpc.status_code",
        11,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_UNIMPLEMENTED",
        "rpc.grpc.status_code",
        12,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_INTERNAL",
        "rpc.grpc.status_code",
        13,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_UNAVAILABLE",
        "rpc.grpc.status_code",
        14,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_DATA_LOSS",
        "rpc.grpc.status_code",
        15,
        Experimental,
    ),
    Entry::int_value(
        "RPC_GRPC_STATUS_CODE_VALUE_UNAUTHENTICATED",
        "rpc.grpc.status_code",
        16,
        Experimental,
    ),
    Entry::attribute("RPC_JSONRPC_ERROR_CODE", "rpc.jsonrpc.error_code", Experimental),
    Entry::attribute("RPC_JSONRPC_ERROR_MESSAGE", "rpc.jsonrpc.error_message", Experimental),
    Entry::attribute("RPC_JSONRPC_REQUEST_ID", "rpc.jsonrpc.request_id", Experimental),
    Entry::attribute("RPC_JSONRPC_VERSION", "rpc.jsonrpc.version", Experimental),
    Entry::attribute("RPC_MESSAGE_COMPRESSED_SIZE", "rpc.message.compressed_size", Experimental),
    Entry::attribute("RPC_MESSAGE_ID", "rpc.message.id", Experimental),
    Entry::attribute("RPC_MESSAGE_TYPE", "rpc.message.type", Experimental),
    Entry::value("RPC_MESSAGE_TYPE_VALUE_SENT", "rpc.message.type", "SENT", Experimental),
    Entry::value("RPC_MESSAGE_TYPE_VALUE_RECEIVED", "rpc.message.type", "RECEIVED", Experimental),
    Entry::attribute(
        "RPC_MESSAGE_UNCOMPRESSED_SIZE",
        "rpc.message.uncompressed_size",
        Experimental,
    ),
    Entry::attribute("RPC_METHOD", "rpc.method", Experimental),
    Entry::attribute("RPC_SERVICE", "rpc.service", Experimental),
    Entry::attribute("RPC_SYSTEM", "rpc.system", Experimental),
    Entry::value("RPC_SYSTEM_VALUE_GRPC", "rpc.system", "grpc", Experimental),
    Entry::value("RPC_SYSTEM_VALUE_JAVA_RMI", "rpc.system", "java_rmi", Experimental),
    Entry::value("RPC_SYSTEM_VALUE_DOTNET_WCF", "rpc.system", "dotnet_wcf", Experimental),
    Entry::value("RPC_SYSTEM_VALUE_APACHE_DUBBO", "rpc.system", "apache_dubbo", Experimental),
    Entry::value("RPC_SYSTEM_VALUE_CONNECT_RPC", "rpc.system", "connect_rpc", Experimental),
];
