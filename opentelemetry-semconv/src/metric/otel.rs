// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `otel` namespace.

use crate::registry::{Deprecated::*, Entry, Instrument::*, Stability::*};

/// The number of log records for which the export has finished, either successful or failed
///
/// Instrument: `counter`. Unit: `{log_record}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_LOG_EXPORTED: &str = "otel.sdk.exporter.log.exported";

/// The number of log records which were passed to the exporter, but that have not been exported yet (neither successful, nor failed)
///
/// Instrument: `updowncounter`. Unit: `{log_record}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_LOG_INFLIGHT: &str = "otel.sdk.exporter.log.inflight";

/// The number of metric data points for which the export has finished, either successful or failed
///
/// Instrument: `counter`. Unit: `{data_point}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_METRIC_DATA_POINT_EXPORTED: &str =
    "otel.sdk.exporter.metric_data_point.exported";

/// The number of metric data points which were passed to the exporter, but that have not been exported yet (neither successful, nor failed)
///
/// Instrument: `updowncounter`. Unit: `{data_point}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_METRIC_DATA_POINT_INFLIGHT: &str =
    "otel.sdk.exporter.metric_data_point.inflight";

/// The duration of exporting a batch of telemetry records.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_OPERATION_DURATION: &str = "otel.sdk.exporter.operation.duration";

/// The number of spans for which the export has finished, either successful or failed
///
/// Instrument: `counter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_SPAN_EXPORTED: &str = "otel.sdk.exporter.span.exported";

/// Deprecated, use `otel.sdk.exporter.span.exported` instead.
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `otel.sdk.exporter.span.exported`.")]
pub const OTEL_SDK_EXPORTER_SPAN_EXPORTED_COUNT: &str = "otel.sdk.exporter.span.exported.count";

/// The number of spans which were passed to the exporter, but that have not been exported yet (neither successful, nor failed)
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_EXPORTER_SPAN_INFLIGHT: &str = "otel.sdk.exporter.span.inflight";

/// Deprecated, use `otel.sdk.exporter.span.inflight` instead.
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `otel.sdk.exporter.span.inflight`.")]
pub const OTEL_SDK_EXPORTER_SPAN_INFLIGHT_COUNT: &str = "otel.sdk.exporter.span.inflight.count";

/// The number of logs submitted to enabled SDK Loggers
///
/// Instrument: `counter`. Unit: `{log_record}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_LOG_CREATED: &str = "otel.sdk.log.created";

/// The duration of the collect operation of the metric reader.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_METRIC_READER_COLLECTION_DURATION: &str =
    "otel.sdk.metric_reader.collection.duration";

/// The number of log records for which the processing has finished, either successful or failed
///
/// Instrument: `counter`. Unit: `{log_record}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_PROCESSOR_LOG_PROCESSED: &str = "otel.sdk.processor.log.processed";

/// The maximum number of log records the queue of a given instance of an SDK Log Record processor can hold
///
/// Instrument: `updowncounter`. Unit: `{log_record}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_PROCESSOR_LOG_QUEUE_CAPACITY: &str = "otel.sdk.processor.log.queue.capacity";

/// The number of log records in the queue of a given instance of an SDK log processor
///
/// Instrument: `updowncounter`. Unit: `{log_record}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_PROCESSOR_LOG_QUEUE_SIZE: &str = "otel.sdk.processor.log.queue.size";

/// The number of spans for which the processing has finished, either successful or failed
///
/// Instrument: `counter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_PROCESSOR_SPAN_PROCESSED: &str = "otel.sdk.processor.span.processed";

/// Deprecated, use `otel.sdk.processor.span.processed` instead.
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `otel.sdk.processor.span.processed`.")]
pub const OTEL_SDK_PROCESSOR_SPAN_PROCESSED_COUNT: &str = "otel.sdk.processor.span.processed.count";

/// The maximum number of spans the queue of a given instance of an SDK span processor can hold
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_PROCESSOR_SPAN_QUEUE_CAPACITY: &str = "otel.sdk.processor.span.queue.capacity";

/// The number of spans in the queue of a given instance of an SDK span processor
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_PROCESSOR_SPAN_QUEUE_SIZE: &str = "otel.sdk.processor.span.queue.size";

/// Use `otel.sdk.span.started` minus `otel.sdk.span.live` to derive this value.
///
/// Instrument: `counter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Obsoleted.")]
pub const OTEL_SDK_SPAN_ENDED: &str = "otel.sdk.span.ended";

/// Use `otel.sdk.span.started` minus `otel.sdk.span.live` to derive this value.
///
/// Instrument: `counter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Obsoleted.")]
pub const OTEL_SDK_SPAN_ENDED_COUNT: &str = "otel.sdk.span.ended.count";

/// The number of created spans with `recording=true` for which the end operation has not been called yet
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_SPAN_LIVE: &str = "otel.sdk.span.live";

/// Deprecated, use `otel.sdk.span.live` instead.
///
/// Instrument: `updowncounter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `otel.sdk.span.live`.")]
pub const OTEL_SDK_SPAN_LIVE_COUNT: &str = "otel.sdk.span.live.count";

/// The number of created spans
///
/// Instrument: `counter`. Unit: `{span}`.
#[cfg(feature = "semconv_experimental")]
pub const OTEL_SDK_SPAN_STARTED: &str = "otel.sdk.span.started";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "OTEL_SDK_EXPORTER_LOG_EXPORTED",
        "otel.sdk.exporter.log.exported",
        Counter,
        "{log_record}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_LOG_INFLIGHT",
        "otel.sdk.exporter.log.inflight",
        UpDownCounter,
        "{log_record}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_METRIC_DATA_POINT_EXPORTED",
        "otel.sdk.exporter.metric_data_point.exported",
        Counter,
        "{data_point}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_METRIC_DATA_POINT_INFLIGHT",
        "otel.sdk.exporter.metric_data_point.inflight",
        UpDownCounter,
        "{data_point}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_OPERATION_DURATION",
        "otel.sdk.exporter.operation.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_SPAN_EXPORTED",
        "otel.sdk.exporter.span.exported",
        Counter,
        "{span}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_SPAN_EXPORTED_COUNT",
        "otel.sdk.exporter.span.exported.count",
        UpDownCounter,
        "{span}",
        Experimental,
    )
    .deprecated(Renamed("otel.sdk.exporter.span.exported")),
    Entry::metric(
        "OTEL_SDK_EXPORTER_SPAN_INFLIGHT",
        "otel.sdk.exporter.span.inflight",
        UpDownCounter,
        "{span}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_EXPORTER_SPAN_INFLIGHT_COUNT",
        "otel.sdk.exporter.span.inflight.count",
        UpDownCounter,
        "{span}",
        Experimental,
    )
    .deprecated(Renamed("otel.sdk.exporter.span.inflight")),
    Entry::metric(
        "OTEL_SDK_LOG_CREATED",
        "otel.sdk.log.created",
        Counter,
        "{log_record}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_METRIC_READER_COLLECTION_DURATION",
        "otel.sdk.metric_reader.collection.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_LOG_PROCESSED",
        "otel.sdk.processor.log.processed",
        Counter,
        "{log_record}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_LOG_QUEUE_CAPACITY",
        "otel.sdk.processor.log.queue.capacity",
        UpDownCounter,
        "{log_record}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_LOG_QUEUE_SIZE",
        "otel.sdk.processor.log.queue.size",
        UpDownCounter,
        "{log_record}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_SPAN_PROCESSED",
        "otel.sdk.processor.span.processed",
        Counter,
        "{span}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_SPAN_PROCESSED_COUNT",
        "otel.sdk.processor.span.processed.count",
        UpDownCounter,
        "{span}",
        Experimental,
    )
    .deprecated(Renamed("otel.sdk.processor.span.processed")),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_SPAN_QUEUE_CAPACITY",
        "otel.sdk.processor.span.queue.capacity",
        UpDownCounter,
        "{span}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_PROCESSOR_SPAN_QUEUE_SIZE",
        "otel.sdk.processor.span.queue.size",
        UpDownCounter,
        "{span}",
        Experimental,
    ),
    Entry::metric("OTEL_SDK_SPAN_ENDED", "otel.sdk.span.ended", Counter, "{span}", Experimental)
        .deprecated(Obsoleted),
    Entry::metric(
        "OTEL_SDK_SPAN_ENDED_COUNT",
        "otel.sdk.span.ended.count",
        Counter,
        "{span}",
        Experimental,
    )
    .deprecated(Obsoleted),
    Entry::metric(
        "OTEL_SDK_SPAN_LIVE",
        "otel.sdk.span.live",
        UpDownCounter,
        "{span}",
        Experimental,
    ),
    Entry::metric(
        "OTEL_SDK_SPAN_LIVE_COUNT",
        "otel.sdk.span.live.count",
        UpDownCounter,
        "{span}",
        Experimental,
    )
    .deprecated(Renamed("otel.sdk.span.live")),
    Entry::metric(
        "OTEL_SDK_SPAN_STARTED",
        "otel.sdk.span.started",
        Counter,
        "{span}",
        Experimental,
    ),
];
