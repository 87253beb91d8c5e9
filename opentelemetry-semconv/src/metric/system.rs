// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `system`, `cpu` namespaces.

use crate::registry::{Deprecated::*, Entry, Instrument::*, Stability::*};

/// Operating frequency of the logical CPU in Hertz.
///
/// Instrument: `gauge`. Unit: `Hz`.
#[cfg(feature = "semconv_experimental")]
pub const CPU_FREQUENCY: &str = "cpu.frequency";

/// Seconds each logical CPU spent on each mode
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const CPU_TIME: &str = "cpu.time";

/// For each logical CPU, the utilization is calculated as the change in cumulative CPU time (cpu.time) over a measurement interval, divided by the elapsed time.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const CPU_UTILIZATION: &str = "cpu.utilization";

/// Deprecated. Use `cpu.frequency` instead.
///
/// Instrument: `gauge`. Unit: `Hz`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.frequency`.")]
pub const SYSTEM_CPU_FREQUENCY: &str = "system.cpu.frequency";

/// Reports the number of logical (virtual) processor cores created by the operating system to manage multitasking
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_LOGICAL_COUNT: &str = "system.cpu.logical.count";

/// Reports the number of actual physical processor cores on the hardware
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_PHYSICAL_COUNT: &str = "system.cpu.physical.count";

/// Deprecated. Use `cpu.time` instead.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.time`.")]
pub const SYSTEM_CPU_TIME: &str = "system.cpu.time";

/// Deprecated. Use `cpu.utilization` instead.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.utilization`.")]
pub const SYSTEM_CPU_UTILIZATION: &str = "system.cpu.utilization";

/// Disk bytes transferred.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO: &str = "system.disk.io";

/// Time disk spent activated
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_IO_TIME: &str = "system.disk.io_time";

/// The total storage capacity of the disk
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_LIMIT: &str = "system.disk.limit";

/// The number of disk reads/writes merged into single physical disk access operations.
///
/// Instrument: `counter`. Unit: `{operation}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_MERGED: &str = "system.disk.merged";

/// Sum of the time each operation took to complete
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATION_TIME: &str = "system.disk.operation_time";

/// Disk operations count.
///
/// Instrument: `counter`. Unit: `{operation}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DISK_OPERATIONS: &str = "system.disk.operations";

/// The total storage capacity of the filesystem
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_LIMIT: &str = "system.filesystem.limit";

/// Reports a filesystem's space usage across different states.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_USAGE: &str = "system.filesystem.usage";

/// Fraction of filesystem bytes used.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_UTILIZATION: &str = "system.filesystem.utilization";

/// An estimate of how much memory is available for starting new applications, without causing swapping
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_AVAILABLE: &str = "system.linux.memory.available";

/// Reports the memory used by the Linux kernel for managing caches of frequently used objects.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_LINUX_MEMORY_SLAB_USAGE: &str = "system.linux.memory.slab.usage";

/// Total virtual memory available in the system.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_LIMIT: &str = "system.memory.limit";

/// Shared memory used (mostly by tmpfs).
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_SHARED: &str = "system.memory.shared";

/// Reports memory in use by state.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_USAGE: &str = "system.memory.usage";

/// Percentage of memory bytes in use.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_UTILIZATION: &str = "system.memory.utilization";

/// The number of connections
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_CONNECTION_COUNT: &str = "system.network.connection.count";

/// Deprecated, use `system.network.connection.count` instead
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `system.network.connection.count`.")]
pub const SYSTEM_NETWORK_CONNECTIONS: &str = "system.network.connections";

/// Count of packets that are dropped or discarded even though there was no error.
///
/// Instrument: `counter`. Unit: `{packet}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `system.network.packet.dropped`.")]
pub const SYSTEM_NETWORK_DROPPED: &str = "system.network.dropped";

/// Count of network errors detected.
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_ERRORS: &str = "system.network.errors";

/// The number of bytes transmitted and received
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_IO: &str = "system.network.io";

/// The number of packets transferred
///
/// Instrument: `counter`. Unit: `{packet}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_PACKET_COUNT: &str = "system.network.packet.count";

/// Count of packets that are dropped or discarded even though there was no error.
///
/// Instrument: `counter`. Unit: `{packet}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_PACKET_DROPPED: &str = "system.network.packet.dropped";

/// The number of packets transferred
///
/// Instrument: `counter`. Unit: `{packet}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `system.network.packet.count`.")]
pub const SYSTEM_NETWORK_PACKETS: &str = "system.network.packets";

/// The number of page faults
///
/// Instrument: `counter`. Unit: `{fault}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_FAULTS: &str = "system.paging.faults";

/// The number of paging operations
///
/// Instrument: `counter`. Unit: `{operation}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_OPERATIONS: &str = "system.paging.operations";

/// Unix swap or windows pagefile usage
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_USAGE: &str = "system.paging.usage";

/// Swap (unix) or pagefile (windows) utilization
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_UTILIZATION: &str = "system.paging.utilization";

/// Total number of processes in each state
///
/// Instrument: `updowncounter`. Unit: `{process}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_COUNT: &str = "system.process.count";

/// Total number of processes created over uptime of the host
///
/// Instrument: `counter`. Unit: `{process}`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_CREATED: &str = "system.process.created";

/// The time the system has been running
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_UPTIME: &str = "system.uptime";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("CPU_FREQUENCY", "cpu.frequency", Gauge, "Hz", Experimental),
    Entry::metric("CPU_TIME", "cpu.time", Counter, "s", Experimental),
    Entry::metric("CPU_UTILIZATION", "cpu.utilization", Gauge, "1", Experimental),
    Entry::metric("SYSTEM_CPU_FREQUENCY", "system.cpu.frequency", Gauge, "Hz", Experimental)
        .deprecated(Renamed("cpu.frequency")),
    Entry::metric(
        "SYSTEM_CPU_LOGICAL_COUNT",
        "system.cpu.logical.count",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_CPU_PHYSICAL_COUNT",
        "system.cpu.physical.count",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric("SYSTEM_CPU_TIME", "system.cpu.time", Counter, "s", Experimental)
        .deprecated(Renamed("cpu.time")),
    Entry::metric("SYSTEM_CPU_UTILIZATION", "system.cpu.utilization", Gauge, "1", Experimental)
        .deprecated(Renamed("cpu.utilization")),
    Entry::metric("SYSTEM_DISK_IO", "system.disk.io", Counter, "By", Experimental),
    Entry::metric("SYSTEM_DISK_IO_TIME", "system.disk.io_time", Counter, "s", Experimental),
    Entry::metric("SYSTEM_DISK_LIMIT", "system.disk.limit", UpDownCounter, "By", Experimental),
    Entry::metric("SYSTEM_DISK_MERGED", "system.disk.merged", Counter, "{operation}", Experimental),
    Entry::metric(
        "SYSTEM_DISK_OPERATION_TIME",
        "system.disk.operation_time",
        Counter,
        "s",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_DISK_OPERATIONS",
        "system.disk.operations",
        Counter,
        "{operation}",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_FILESYSTEM_LIMIT",
        "system.filesystem.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_FILESYSTEM_USAGE",
        "system.filesystem.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_FILESYSTEM_UTILIZATION",
        "system.filesystem.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_LINUX_MEMORY_AVAILABLE",
        "system.linux.memory.available",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_LINUX_MEMORY_SLAB_USAGE",
        "system.linux.memory.slab.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("SYSTEM_MEMORY_LIMIT", "system.memory.limit", UpDownCounter, "By", Experimental),
    Entry::metric(
        "SYSTEM_MEMORY_SHARED",
        "system.memory.shared",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("SYSTEM_MEMORY_USAGE", "system.memory.usage", UpDownCounter, "By", Experimental),
    Entry::metric(
        "SYSTEM_MEMORY_UTILIZATION",
        "system.memory.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_NETWORK_CONNECTION_COUNT",
        "system.network.connection.count",
        UpDownCounter,
        "{connection}",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_NETWORK_CONNECTIONS",
        "system.network.connections",
        UpDownCounter,
        "{connection}",
        Experimental,
    )
    .deprecated(Renamed("system.network.connection.count")),
    Entry::metric(
        "SYSTEM_NETWORK_DROPPED",
        "system.network.dropped",
        Counter,
        "{packet}",
        Experimental,
    )
    .deprecated(Renamed("system.network.packet.dropped")),
    Entry::metric(
        "SYSTEM_NETWORK_ERRORS",
        "system.network.errors",
        Counter,
        "{error}",
        Experimental,
    ),
    Entry::metric("SYSTEM_NETWORK_IO", "system.network.io", Counter, "By", Experimental),
    Entry::metric(
        "SYSTEM_NETWORK_PACKET_COUNT",
        "system.network.packet.count",
        Counter,
        "{packet}",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_NETWORK_PACKET_DROPPED",
        "system.network.packet.dropped",
        Counter,
        "{packet}",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_NETWORK_PACKETS",
        "system.network.packets",
        Counter,
        "{packet}",
        Experimental,
    )
    .deprecated(Renamed("system.network.packet.count")),
    Entry::metric("SYSTEM_PAGING_FAULTS", "system.paging.faults", Counter, "{fault}", Experimental),
    Entry::metric(
        "SYSTEM_PAGING_OPERATIONS",
        "system.paging.operations",
        Counter,
        "{operation}",
        Experimental,
    ),
    Entry::metric("SYSTEM_PAGING_USAGE", "system.paging.usage", UpDownCounter, "By", Experimental),
    Entry::metric(
        "SYSTEM_PAGING_UTILIZATION",
        "system.paging.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_PROCESS_COUNT",
        "system.process.count",
        UpDownCounter,
        "{process}",
        Experimental,
    ),
    Entry::metric(
        "SYSTEM_PROCESS_CREATED",
        "system.process.created",
        Counter,
        "{process}",
        Experimental,
    ),
    Entry::metric("SYSTEM_UPTIME", "system.uptime", Gauge, "s", Experimental),
];
