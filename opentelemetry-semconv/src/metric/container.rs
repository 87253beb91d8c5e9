// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `container` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Total CPU time consumed.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_TIME: &str = "container.cpu.time";

/// Container's CPU usage, measured in cpus. Range from 0 to the number of allocatable CPUs.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_USAGE: &str = "container.cpu.usage";

/// Disk bytes for the container.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_DISK_IO: &str = "container.disk.io";

/// Container filesystem available bytes.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_FILESYSTEM_AVAILABLE: &str = "container.filesystem.available";

/// Container filesystem capacity.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_FILESYSTEM_CAPACITY: &str = "container.filesystem.capacity";

/// Container filesystem usage.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_FILESYSTEM_USAGE: &str = "container.filesystem.usage";

/// Memory usage of the container.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_MEMORY_USAGE: &str = "container.memory.usage";

/// Network bytes for the container.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_NETWORK_IO: &str = "container.network.io";

/// The time the container has been running.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_UPTIME: &str = "container.uptime";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("CONTAINER_CPU_TIME", "container.cpu.time", Counter, "s", Experimental),
    Entry::metric("CONTAINER_CPU_USAGE", "container.cpu.usage", Gauge, "{cpu}", Experimental),
    Entry::metric("CONTAINER_DISK_IO", "container.disk.io", Counter, "By", Experimental),
    Entry::metric(
        "CONTAINER_FILESYSTEM_AVAILABLE",
        "container.filesystem.available",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "CONTAINER_FILESYSTEM_CAPACITY",
        "container.filesystem.capacity",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "CONTAINER_FILESYSTEM_USAGE",
        "container.filesystem.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("CONTAINER_MEMORY_USAGE", "container.memory.usage", Counter, "By", Experimental),
    Entry::metric("CONTAINER_NETWORK_IO", "container.network.io", Counter, "By", Experimental),
    Entry::metric("CONTAINER_UPTIME", "container.uptime", Gauge, "s", Experimental),
];
