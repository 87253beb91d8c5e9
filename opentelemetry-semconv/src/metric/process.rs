// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `process` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Number of times the process has been context switched.
///
/// Instrument: `counter`. Unit: `{context_switch}`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CONTEXT_SWITCHES: &str = "process.context_switches";

/// Total CPU seconds broken down by different CPU states.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CPU_TIME: &str = "process.cpu.time";

/// Difference in process.cpu.time since the last measurement, divided by the elapsed time and number of CPUs available to the process.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CPU_UTILIZATION: &str = "process.cpu.utilization";

/// Disk bytes transferred.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_DISK_IO: &str = "process.disk.io";

/// The amount of physical memory in use.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_MEMORY_USAGE: &str = "process.memory.usage";

/// The amount of committed virtual memory.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_MEMORY_VIRTUAL: &str = "process.memory.virtual";

/// Network bytes transferred.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_NETWORK_IO: &str = "process.network.io";

/// Number of file descriptors in use by the process.
///
/// Instrument: `updowncounter`. Unit: `{file_descriptor}`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_OPEN_FILE_DESCRIPTOR_COUNT: &str = "process.open_file_descriptor.count";

/// Number of page faults the process has made.
///
/// Instrument: `counter`. Unit: `{fault}`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_PAGING_FAULTS: &str = "process.paging.faults";

/// Process threads count.
///
/// Instrument: `updowncounter`. Unit: `{thread}`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_THREAD_COUNT: &str = "process.thread.count";

/// The time the process has been running.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_UPTIME: &str = "process.uptime";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "PROCESS_CONTEXT_SWITCHES",
        "process.context_switches",
        Counter,
        "{context_switch}",
        Experimental,
    ),
    Entry::metric("PROCESS_CPU_TIME", "process.cpu.time", Counter, "s", Experimental),
    Entry::metric("PROCESS_CPU_UTILIZATION", "process.cpu.utilization", Gauge, "1", Experimental),
    Entry::metric("PROCESS_DISK_IO", "process.disk.io", Counter, "By", Experimental),
    Entry::metric(
        "PROCESS_MEMORY_USAGE",
        "process.memory.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "PROCESS_MEMORY_VIRTUAL",
        "process.memory.virtual",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("PROCESS_NETWORK_IO", "process.network.io", Counter, "By", Experimental),
    Entry::metric(
        "PROCESS_OPEN_FILE_DESCRIPTOR_COUNT",
        "process.open_file_descriptor.count",
        UpDownCounter,
        "{file_descriptor}",
        Experimental,
    ),
    Entry::metric(
        "PROCESS_PAGING_FAULTS",
        "process.paging.faults",
        Counter,
        "{fault}",
        Experimental,
    ),
    Entry::metric(
        "PROCESS_THREAD_COUNT",
        "process.thread.count",
        UpDownCounter,
        "{thread}",
        Experimental,
    ),
    Entry::metric("PROCESS_UPTIME", "process.uptime", Gauge, "s", Experimental),
];
