// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `otel`, `telemetry`, `opentracing` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Parent-child Reference type
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const OPENTRACING_REF_TYPE: &str = "opentracing.ref_type";

/// The parent Span depends on the child Span in some capacity
#[cfg(feature = "semconv_experimental")]
pub const OPENTRACING_REF_TYPE_VALUE_CHILD_OF: &str = "child_of";

/// The parent Span doesn't depend in any way on the result of the child Span
#[cfg(feature = "semconv_experimental")]
pub const OPENTRACING_REF_TYPE_VALUE_FOLLOWS_FROM: &str = "follows_from";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`OPENTRACING_REF_TYPE`].
    OpentracingRefType for OPENTRACING_REF_TYPE {
        /// The parent Span depends on the child Span in some capacity
        ChildOf = "child_of",
        /// The parent Span doesn't depend in any way on the result of the child Span
        FollowsFrom = "follows_from",
    }
}

/// A name uniquely identifying the instance of the OpenTelemetry component within its containing SDK instance.
///
/// Type: `string`. Examples: `"otlp_grpc_span_exporter/0"`, `"custom-name"`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_NAME: &str = "otel.component.name";

/// A name identifying the type of the OpenTelemetry component.
///
/// Type: `string`. Examples: `"batching_span_processor"`, `"com.example.MySpanExporter"`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE: &str = "otel.component.type";

/// The builtin SDK batching span processor
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_BATCHING_SPAN_PROCESSOR: &str = "batching_span_processor";

/// The builtin SDK simple span processor
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_SIMPLE_SPAN_PROCESSOR: &str = "simple_span_processor";

/// The builtin SDK batching log record processor
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_BATCHING_LOG_PROCESSOR: &str = "batching_log_processor";

/// The builtin SDK simple log record processor
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_SIMPLE_LOG_PROCESSOR: &str = "simple_log_processor";

/// OTLP span exporter over gRPC with protobuf serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_GRPC_SPAN_EXPORTER: &str = "otlp_grpc_span_exporter";

/// OTLP span exporter over HTTP with protobuf serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_SPAN_EXPORTER: &str = "otlp_http_span_exporter";

/// OTLP span exporter over HTTP with JSON serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_JSON_SPAN_EXPORTER: &str =
    "otlp_http_json_span_exporter";

/// Zipkin span exporter over HTTP
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_ZIPKIN_HTTP_SPAN_EXPORTER: &str = "zipkin_http_span_exporter";

/// OTLP log record exporter over gRPC with protobuf serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_GRPC_LOG_EXPORTER: &str = "otlp_grpc_log_exporter";

/// OTLP log record exporter over HTTP with protobuf serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_LOG_EXPORTER: &str = "otlp_http_log_exporter";

/// OTLP log record exporter over HTTP with JSON serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_JSON_LOG_EXPORTER: &str =
    "otlp_http_json_log_exporter";

/// The builtin SDK periodically exporting metric reader
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_PERIODIC_METRIC_READER: &str = "periodic_metric_reader";

/// OTLP metric exporter over gRPC with protobuf serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_GRPC_METRIC_EXPORTER: &str = "otlp_grpc_metric_exporter";

/// OTLP metric exporter over HTTP with protobuf serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_METRIC_EXPORTER: &str = "otlp_http_metric_exporter";

/// OTLP metric exporter over HTTP with JSON serialization
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_JSON_METRIC_EXPORTER: &str =
    "otlp_http_json_metric_exporter";

/// Prometheus metric exporter over HTTP with the default text-based format
#[cfg(feature = "semconv_experimental")]
pub const OTEL_COMPONENT_TYPE_VALUE_PROMETHEUS_HTTP_TEXT_METRIC_EXPORTER: &str =
    "prometheus_http_text_metric_exporter";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`OTEL_COMPONENT_TYPE`].
    OtelComponentType for OTEL_COMPONENT_TYPE {
        /// The builtin SDK batching span processor
        BatchingSpanProcessor = "batching_span_processor",
        /// The builtin SDK simple span processor
        SimpleSpanProcessor = "simple_span_processor",
        /// The builtin SDK batching log record processor
        BatchingLogProcessor = "batching_log_processor",
        /// The builtin SDK simple log record processor
        SimpleLogProcessor = "simple_log_processor",
        /// OTLP span exporter over gRPC with protobuf serialization
        OtlpGrpcSpanExporter = "otlp_grpc_span_exporter",
        /// OTLP span exporter over HTTP with protobuf serialization
        OtlpHttpSpanExporter = "otlp_http_span_exporter",
        /// OTLP span exporter over HTTP with JSON serialization
        OtlpHttpJsonSpanExporter = "otlp_http_json_span_exporter",
        /// Zipkin span exporter over HTTP
        ZipkinHttpSpanExporter = "zipkin_http_span_exporter",
        /// OTLP log record exporter over gRPC with protobuf serialization
        OtlpGrpcLogExporter = "otlp_grpc_log_exporter",
        /// OTLP log record exporter over HTTP with protobuf serialization
        OtlpHttpLogExporter = "otlp_http_log_exporter",
        /// OTLP log record exporter over HTTP with JSON serialization
        OtlpHttpJsonLogExporter = "otlp_http_json_log_exporter",
        /// The builtin SDK periodically exporting metric reader
        PeriodicMetricReader = "periodic_metric_reader",
        /// OTLP metric exporter over gRPC with protobuf serialization
        OtlpGrpcMetricExporter = "otlp_grpc_metric_exporter",
        /// OTLP metric exporter over HTTP with protobuf serialization
        OtlpHttpMetricExporter = "otlp_http_metric_exporter",
        /// OTLP metric exporter over HTTP with JSON serialization
        OtlpHttpJsonMetricExporter = "otlp_http_json_metric_exporter",
        /// Prometheus metric exporter over HTTP with the default text-based format
        PrometheusHttpTextMetricExporter = "prometheus_http_text_metric_exporter",
    }
}

/// Deprecated. Use the `otel.scope.name` attribute
///
/// Type: `string`. Examples: `"io.opentelemetry.contrib.mongodb"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `otel.scope.name`.")]
pub const OTEL_LIBRARY_NAME: &str = "otel.library.name";

/// Deprecated. Use the `otel.scope.version` attribute.
///
/// Type: `string`. Examples: `"1.0.0"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `otel.scope.version`.")]
pub const OTEL_LIBRARY_VERSION: &str = "otel.library.version";

/// The name of the instrumentation scope - (`InstrumentationScope.Name` in OTLP).
///
/// Type: `string`. Examples: `"io.opentelemetry.contrib.mongodb"`.
pub const OTEL_SCOPE_NAME: &str = "otel.scope.name";

/// The version of the instrumentation scope - (`InstrumentationScope.Version` in OTLP).
///
/// Type: `string`. Examples: `"1.0.0"`.
pub const OTEL_SCOPE_VERSION: &str = "otel.scope.version";

/// Determines whether the span has a parent span, and if so, whether it is a remote parent
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_PARENT_ORIGIN: &str = "otel.span.parent.origin";

/// The span does not have a parent, it is a root span
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_PARENT_ORIGIN_VALUE_NONE: &str = "none";

/// The span has a parent and the parent's span context isRemote() is false
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_PARENT_ORIGIN_VALUE_LOCAL: &str = "local";

/// The span has a parent and the parent's span context isRemote() is true
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_PARENT_ORIGIN_VALUE_REMOTE: &str = "remote";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`OTEL_SPAN_PARENT_ORIGIN`].
    OtelSpanParentOrigin for OTEL_SPAN_PARENT_ORIGIN {
        /// The span does not have a parent, it is a root span
        None = "none",
        /// The span has a parent and the parent's span context isRemote() is false
        Local = "local",
        /// The span has a parent and the parent's span context isRemote() is true
        Remote = "remote",
    }
}

/// The result value of the sampler for this span
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_SAMPLING_RESULT: &str = "otel.span.sampling_result";

/// The span is not sampled and not recording
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_SAMPLING_RESULT_VALUE_DROP: &str = "DROP";

/// The span is not sampled, but recording
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_SAMPLING_RESULT_VALUE_RECORD_ONLY: &str = "RECORD_ONLY";

/// The span is sampled and recording
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SPAN_SAMPLING_RESULT_VALUE_RECORD_AND_SAMPLE: &str = "RECORD_AND_SAMPLE";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`OTEL_SPAN_SAMPLING_RESULT`].
    OtelSpanSamplingResult for OTEL_SPAN_SAMPLING_RESULT {
        /// The span is not sampled and not recording
        Drop = "DROP",
        /// The span is not sampled, but recording
        RecordOnly = "RECORD_ONLY",
        /// The span is sampled and recording
        RecordAndSample = "RECORD_AND_SAMPLE",
    }
}

/// Name of the code, either "OK" or "ERROR". MUST NOT be set if the status code is UNSET.
///
/// Type: `string`.
pub const OTEL_STATUS_CODE: &str = "otel.status_code";

/// The operation has been validated by an Application developer or Operator to have completed successfully.
pub const OTEL_STATUS_CODE_VALUE_OK: &str = "OK";

/// The operation contains an error.
pub const OTEL_STATUS_CODE_VALUE_ERROR: &str = "ERROR";

semconv_enum! {
    /// Values of [`OTEL_STATUS_CODE`].
    OtelStatusCode for OTEL_STATUS_CODE {
        /// The operation has been validated by an Application developer or Operator to have completed successfully.
        Ok = "OK",
        /// The operation contains an error.
        Error = "ERROR",
    }
}

/// Description of the Status if it has a value, otherwise not set.
///
/// Type: `string`. Examples: `"resource not found"`.
pub const OTEL_STATUS_DESCRIPTION: &str = "otel.status_description";

/// The name of the auto instrumentation agent or distribution, if used.
///
/// Type: `string`. Examples: `"parts-unlimited-java"`.
#[cfg(feature = "semconv_experimental")]
pub const TELEMETRY_DISTRO_NAME: &str = "telemetry.distro.name";

/// The version string of the auto instrumentation agent or distribution, if used.
///
/// Type: `string`. Examples: `"1.2.3"`.
#[cfg(feature = "semconv_experimental")]
pub const TELEMETRY_DISTRO_VERSION: &str = "telemetry.distro.version";

/// The language of the telemetry SDK.
///
/// Type: `string`.
pub const TELEMETRY_SDK_LANGUAGE: &str = "telemetry.sdk.language";

/// cpp
pub const TELEMETRY_SDK_LANGUAGE_VALUE_CPP: &str = "cpp";

/// dotnet
pub const TELEMETRY_SDK_LANGUAGE_VALUE_DOTNET: &str = "dotnet";

/// erlang
pub const TELEMETRY_SDK_LANGUAGE_VALUE_ERLANG: &str = "erlang";

/// go
pub const TELEMETRY_SDK_LANGUAGE_VALUE_GO: &str = "go";

/// java
pub const TELEMETRY_SDK_LANGUAGE_VALUE_JAVA: &str = "java";

/// nodejs
pub const TELEMETRY_SDK_LANGUAGE_VALUE_NODEJS: &str = "nodejs";

/// php
pub const TELEMETRY_SDK_LANGUAGE_VALUE_PHP: &str = "php";

/// python
pub const TELEMETRY_SDK_LANGUAGE_VALUE_PYTHON: &str = "python";

/// ruby
pub const TELEMETRY_SDK_LANGUAGE_VALUE_RUBY: &str = "ruby";

/// rust
pub const TELEMETRY_SDK_LANGUAGE_VALUE_RUST: &str = "rust";

/// swift
pub const TELEMETRY_SDK_LANGUAGE_VALUE_SWIFT: &str = "swift";

/// webjs
pub const TELEMETRY_SDK_LANGUAGE_VALUE_WEBJS: &str = "webjs";

semconv_enum! {
    /// Values of [`TELEMETRY_SDK_LANGUAGE`].
    TelemetrySdkLanguage for TELEMETRY_SDK_LANGUAGE {
        /// cpp
        Cpp = "cpp",
        /// dotnet
        Dotnet = "dotnet",
        /// erlang
        Erlang = "erlang",
        /// go
        Go = "go",
        /// java
        Java = "java",
        /// nodejs
        Nodejs = "nodejs",
        /// php
        Php = "php",
        /// python
        Python = "python",
        /// ruby
        Ruby = "ruby",
        /// rust
        Rust = "rust",
        /// swift
        Swift = "swift",
        /// webjs
        Webjs = "webjs",
    }
}

/// The name of the telemetry SDK as defined above.
///
/// Type: `string`. Examples: `"opentelemetry"`.
pub const TELEMETRY_SDK_NAME: &str = "telemetry.sdk.name";

/// The version string of the telemetry SDK.
///
/// Type: `string`. Examples: `"1.2.3"`.
pub const TELEMETRY_SDK_VERSION: &str = "telemetry.sdk.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("OPENTRACING_REF_TYPE", "opentracing.ref_type", Experimental),
    Entry::value(
        "OPENTRACING_REF_TYPE_VALUE_CHILD_OF",
        "opentracing.ref_type",
        "child_of",
        Experimental,
    ),
    Entry::value(
        "OPENTRACING_REF_TYPE_VALUE_FOLLOWS_FROM",
        "opentracing.ref_type",
        "follows_from",
        Experimental,
    ),
    Entry::attribute("OTEL_COMPONENT_NAME", "otel.component.name", Experimental),
    Entry::attribute("OTEL_COMPONENT_TYPE", "otel.component.type", Experimental),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_BATCHING_SPAN_PROCESSOR",
        "otel.component.type",
        "batching_span_processor",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_SIMPLE_SPAN_PROCESSOR",
        "otel.component.type",
        "simple_span_processor",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_BATCHING_LOG_PROCESSOR",
        "otel.component.type",
        "batching_log_processor",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_SIMPLE_LOG_PROCESSOR",
        "otel.component.type",
        "simple_log_processor",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_GRPC_SPAN_EXPORTER",
        "otel.component.type",
        "otlp_grpc_span_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_SPAN_EXPORTER",
        "otel.component.type",
        "otlp_http_span_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_JSON_SPAN_EXPORTER",
        "otel.component.type",
        "otlp_http_json_span_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_ZIPKIN_HTTP_SPAN_EXPORTER",
        "otel.component.type",
        "zipkin_http_span_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_GRPC_LOG_EXPORTER",
        "otel.component.type",
        "otlp_grpc_log_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_LOG_EXPORTER",
        "otel.component.type",
        "otlp_http_log_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_JSON_LOG_EXPORTER",
        "otel.component.type",
        "otlp_http_json_log_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_PERIODIC_METRIC_READER",
        "otel.component.type",
        "periodic_metric_reader",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_GRPC_METRIC_EXPORTER",
        "otel.component.type",
        "otlp_grpc_metric_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_METRIC_EXPORTER",
        "otel.component.type",
        "otlp_http_metric_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_OTLP_HTTP_JSON_METRIC_EXPORTER",
        "otel.component.type",
        "otlp_http_json_metric_exporter",
        Experimental,
    ),
    Entry::value(
        "OTEL_COMPONENT_TYPE_VALUE_PROMETHEUS_HTTP_TEXT_METRIC_EXPORTER",
        "otel.component.type",
        "prometheus_http_text_metric_exporter",
        Experimental,
    ),
    Entry::attribute("OTEL_LIBRARY_NAME", "otel.library.name", Experimental)
        .deprecated(Renamed("otel.scope.name")),
    Entry::attribute("OTEL_LIBRARY_VERSION", "otel.library.version", Experimental)
        .deprecated(Renamed("otel.scope.version")),
    Entry::attribute("OTEL_SCOPE_NAME", "otel.scope.name", Stable),
    Entry::attribute("OTEL_SCOPE_VERSION", "otel.scope.version", Stable),
    Entry::attribute("OTEL_SPAN_PARENT_ORIGIN", "otel.span.parent.origin", Experimental),
    Entry::value(
        "OTEL_SPAN_PARENT_ORIGIN_VALUE_NONE",
        "otel.span.parent.origin",
        "none",
        Experimental,
    ),
    Entry::value(
        "OTEL_SPAN_PARENT_ORIGIN_VALUE_LOCAL",
        "otel.span.parent.origin",
        "local",
        Experimental,
    ),
    Entry::value(
        "OTEL_SPAN_PARENT_ORIGIN_VALUE_REMOTE",
        "otel.span.parent.origin",
        "remote",
        Experimental,
    ),
    Entry::attribute("OTEL_SPAN_SAMPLING_RESULT", "otel.span.sampling_result", Experimental),
    Entry::value(
        "OTEL_SPAN_SAMPLING_RESULT_VALUE_DROP",
        "otel.span.sampling_result",
        "DROP",
        Experimental,
    ),
    Entry::value(
        "OTEL_SPAN_SAMPLING_RESULT_VALUE_RECORD_ONLY",
        "otel.span.sampling_result",
        "RECORD_ONLY",
        Experimental,
    ),
    Entry::value(
        "OTEL_SPAN_SAMPLING_RESULT_VALUE_RECORD_AND_SAMPLE",
        "otel.span.sampling_result",
        "RECORD_AND_SAMPLE",
        Experimental,
    ),
    Entry::attribute("OTEL_STATUS_CODE", "otel.status_code", Stable),
    Entry::value("OTEL_STATUS_CODE_VALUE_OK", "otel.status_code", "OK", Stable),
    Entry::value("OTEL_STATUS_CODE_VALUE_ERROR", "otel.status_code", "ERROR", Stable),
    Entry::attribute("OTEL_STATUS_DESCRIPTION", "otel.status_description", Stable),
    Entry::attribute("TELEMETRY_DISTRO_NAME", "telemetry.distro.name", Experimental),
    Entry::attribute("TELEMETRY_DISTRO_VERSION", "telemetry.distro.version", Experimental),
    Entry::attribute("TELEMETRY_SDK_LANGUAGE", "telemetry.sdk.language", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_CPP", "telemetry.sdk.language", "cpp", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_DOTNET", "telemetry.sdk.language", "dotnet", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_ERLANG", "telemetry.sdk.language", "erlang", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_GO", "telemetry.sdk.language", "go", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_JAVA", "telemetry.sdk.language", "java", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_NODEJS", "telemetry.sdk.language", "nodejs", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_PHP", "telemetry.sdk.language", "php", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_PYTHON", "telemetry.sdk.language", "python", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_RUBY", "telemetry.sdk.language", "ruby", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_RUST", "telemetry.sdk.language", "rust", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_SWIFT", "telemetry.sdk.language", "swift", Stable),
    Entry::value("TELEMETRY_SDK_LANGUAGE_VALUE_WEBJS", "telemetry.sdk.language", "webjs", Stable),
    Entry::attribute("TELEMETRY_SDK_NAME", "telemetry.sdk.name", Stable),
    Entry::attribute("TELEMETRY_SDK_VERSION", "telemetry.sdk.version", Stable),
];
