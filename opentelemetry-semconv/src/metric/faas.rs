// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `faas` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Number of invocation cold starts
///
/// Instrument: `counter`. Unit: `{coldstart}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_COLDSTARTS: &str = "faas.coldstarts";

/// Distribution of CPU usage per invocation
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_CPU_USAGE: &str = "faas.cpu_usage";

/// Number of invocation errors
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_ERRORS: &str = "faas.errors";

/// Measures the duration of the function's initialization, such as a cold start
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INIT_DURATION: &str = "faas.init_duration";

/// Number of successful invocations
///
/// Instrument: `counter`. Unit: `{invocation}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOCATIONS: &str = "faas.invocations";

/// Measures the duration of the function's logic execution
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKE_DURATION: &str = "faas.invoke_duration";

/// Distribution of max memory usage per invocation
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_MEM_USAGE: &str = "faas.mem_usage";

/// Distribution of net I/O usage per invocation
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_NET_IO: &str = "faas.net_io";

/// Number of invocation timeouts
///
/// Instrument: `counter`. Unit: `{timeout}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TIMEOUTS: &str = "faas.timeouts";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("FAAS_COLDSTARTS", "faas.coldstarts", Counter, "{coldstart}", Experimental),
    Entry::metric("FAAS_CPU_USAGE", "faas.cpu_usage", Histogram, "s", Experimental),
    Entry::metric("FAAS_ERRORS", "faas.errors", Counter, "{error}", Experimental),
    Entry::metric("FAAS_INIT_DURATION", "faas.init_duration", Histogram, "s", Experimental),
    Entry::metric("FAAS_INVOCATIONS", "faas.invocations", Counter, "{invocation}", Experimental),
    Entry::metric("FAAS_INVOKE_DURATION", "faas.invoke_duration", Histogram, "s", Experimental),
    Entry::metric("FAAS_MEM_USAGE", "faas.mem_usage", Histogram, "By", Experimental),
    Entry::metric("FAAS_NET_IO", "faas.net_io", Histogram, "By", Experimental),
    Entry::metric("FAAS_TIMEOUTS", "faas.timeouts", Counter, "{timeout}", Experimental),
];
