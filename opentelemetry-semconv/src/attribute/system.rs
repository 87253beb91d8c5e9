// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `system`, `cpu`, `disk`, `linux` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The logical CPU number \[0..n-1\]
///
/// Type: `int`. Examples: `1`.
#[cfg(feature = "semconv_experimental")]
pub const CPU_LOGICAL_NUMBER: &str = "cpu.logical_number";

/// The mode of the CPU
///
/// Type: `string`. Examples: `"user"`, `"system"`.
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE: &str = "cpu.mode";

/// user
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_USER: &str = "user";

/// system
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_SYSTEM: &str = "system";

/// nice
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_NICE: &str = "nice";

/// idle
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_IDLE: &str = "idle";

/// iowait
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_IOWAIT: &str = "iowait";

/// interrupt
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_INTERRUPT: &str = "interrupt";

/// steal
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_STEAL: &str = "steal";

/// kernel
#[cfg(feature = "semconv_experimental")]
pub const CPU_MODE_VALUE_KERNEL: &str = "kernel";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CPU_MODE`].
    CpuMode for CPU_MODE {
        /// user
        User = "user",
        /// system
        System = "system",
        /// nice
        Nice = "nice",
        /// idle
        Idle = "idle",
        /// iowait
        Iowait = "iowait",
        /// interrupt
        Interrupt = "interrupt",
        /// steal
        Steal = "steal",
        /// kernel
        Kernel = "kernel",
    }
}

/// The disk IO operation direction.
///
/// Type: `string`. Examples: `"read"`.
#[cfg(feature = "semconv_experimental")]
pub const DISK_IO_DIRECTION: &str = "disk.io.direction";

/// read
#[cfg(feature = "semconv_experimental")]
pub const DISK_IO_DIRECTION_VALUE_READ: &str = "read";

/// write
#[cfg(feature = "semconv_experimental")]
pub const DISK_IO_DIRECTION_VALUE_WRITE: &str = "write";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`DISK_IO_DIRECTION`].
    DiskIoDirection for DISK_IO_DIRECTION {
        /// read
        Read = "read",
        /// write
        Write = "write",
    }
}

/// The Linux Slab memory state
///
/// Type: `string`. Examples: `"reclaimable"`, `"unreclaimable"`.
#[cfg(feature = "semconv_experimental")]
pub const LINUX_MEMORY_SLAB_STATE: &str = "linux.memory.slab.state";

/// reclaimable
#[cfg(feature = "semconv_experimental")]
pub const LINUX_MEMORY_SLAB_STATE_VALUE_RECLAIMABLE: &str = "reclaimable";

/// unreclaimable
#[cfg(feature = "semconv_experimental")]
pub const LINUX_MEMORY_SLAB_STATE_VALUE_UNRECLAIMABLE: &str = "unreclaimable";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`LINUX_MEMORY_SLAB_STATE`].
    LinuxMemorySlabState for LINUX_MEMORY_SLAB_STATE {
        /// reclaimable
        Reclaimable = "reclaimable",
        /// unreclaimable
        Unreclaimable = "unreclaimable",
    }
}

/// Deprecated, use `cpu.logical_number` instead.
///
/// Type: `int`. Examples: `1`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.logical_number`.")]
pub const SYSTEM_CPU_LOGICAL_NUMBER: &str = "system.cpu.logical_number";

/// Deprecated, use `cpu.mode` instead.
///
/// Type: `string`. Examples: `"idle"`, `"interrupt"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.mode`.")]
pub const SYSTEM_CPU_STATE: &str = "system.cpu.state";

/// user
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_USER: &str = "user";

/// system
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_SYSTEM: &str = "system";

/// nice
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_NICE: &str = "nice";

/// idle
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_IDLE: &str = "idle";

/// iowait
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_IOWAIT: &str = "iowait";

/// interrupt
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_INTERRUPT: &str = "interrupt";

/// steal
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_CPU_STATE_VALUE_STEAL: &str = "steal";

/// The device identifier
///
/// Type: `string`. Examples: `"(identifier)"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_DEVICE: &str = "system.device";

/// The filesystem mode
///
/// Type: `string`. Examples: `"rw, ro"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_MODE: &str = "system.filesystem.mode";

/// The filesystem mount path
///
/// Type: `string`. Examples: `"/mnt/data"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_MOUNTPOINT: &str = "system.filesystem.mountpoint";

/// The filesystem state
///
/// Type: `string`. Examples: `"used"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_STATE: &str = "system.filesystem.state";

/// used
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_STATE_VALUE_USED: &str = "used";

/// free
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_STATE_VALUE_FREE: &str = "free";

/// reserved
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_STATE_VALUE_RESERVED: &str = "reserved";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_FILESYSTEM_STATE`].
    SystemFilesystemState for SYSTEM_FILESYSTEM_STATE {
        /// used
        Used = "used",
        /// free
        Free = "free",
        /// reserved
        Reserved = "reserved",
    }
}

/// The filesystem type
///
/// Type: `string`. Examples: `"ext4"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE: &str = "system.filesystem.type";

/// fat32
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE_VALUE_FAT32: &str = "fat32";

/// exfat
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE_VALUE_EXFAT: &str = "exfat";

/// ntfs
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE_VALUE_NTFS: &str = "ntfs";

/// refs
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE_VALUE_REFS: &str = "refs";

/// hfsplus
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE_VALUE_HFSPLUS: &str = "hfsplus";

/// ext4
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_FILESYSTEM_TYPE_VALUE_EXT4: &str = "ext4";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_FILESYSTEM_TYPE`].
    SystemFilesystemType for SYSTEM_FILESYSTEM_TYPE {
        /// fat32
        Fat32 = "fat32",
        /// exfat
        Exfat = "exfat",
        /// ntfs
        Ntfs = "ntfs",
        /// refs
        Refs = "refs",
        /// hfsplus
        Hfsplus = "hfsplus",
        /// ext4
        Ext4 = "ext4",
    }
}

/// The memory state
///
/// Type: `string`. Examples: `"free"`, `"cached"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_STATE: &str = "system.memory.state";

/// used
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_STATE_VALUE_USED: &str = "used";

/// free
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_STATE_VALUE_FREE: &str = "free";

/// shared
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, report shared memory usage with `metric.system.memory.shared` metric")]
pub const SYSTEM_MEMORY_STATE_VALUE_SHARED: &str = "shared";

/// buffers
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_STATE_VALUE_BUFFERS: &str = "buffers";

/// cached
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_MEMORY_STATE_VALUE_CACHED: &str = "cached";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_MEMORY_STATE`].
    SystemMemoryState for SYSTEM_MEMORY_STATE {
        /// used
        Used = "used",
        /// free
        Free = "free",
        /// shared
        ///
        /// Deprecated: Removed, report shared memory usage with `metric.system.memory.shared` metric
        Shared = "shared",
        /// buffers
        Buffers = "buffers",
        /// cached
        Cached = "cached",
    }
}

/// Deprecated, use `network.connection.state` instead.
///
/// Type: `string`. Examples: `"close_wait"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.connection.state`.")]
pub const SYSTEM_NETWORK_STATE: &str = "system.network.state";

/// close
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_CLOSE: &str = "close";

/// close_wait
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_CLOSE_WAIT: &str = "close_wait";

/// closing
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_CLOSING: &str = "closing";

/// delete
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_DELETE: &str = "delete";

/// established
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_ESTABLISHED: &str = "established";

/// fin_wait_1
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_FIN_WAIT_1: &str = "fin_wait_1";

/// fin_wait_2
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_FIN_WAIT_2: &str = "fin_wait_2";

/// last_ack
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_LAST_ACK: &str = "last_ack";

/// listen
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_LISTEN: &str = "listen";

/// syn_recv
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_SYN_RECV: &str = "syn_recv";

/// syn_sent
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_SYN_SENT: &str = "syn_sent";

/// time_wait
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_NETWORK_STATE_VALUE_TIME_WAIT: &str = "time_wait";

/// The paging access direction
///
/// Type: `string`. Examples: `"in"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_DIRECTION: &str = "system.paging.direction";

/// in
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_DIRECTION_VALUE_IN: &str = "in";

/// out
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_DIRECTION_VALUE_OUT: &str = "out";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_PAGING_DIRECTION`].
    SystemPagingDirection for SYSTEM_PAGING_DIRECTION {
        /// in
        In = "in",
        /// out
        Out = "out",
    }
}

/// The memory paging state
///
/// Type: `string`. Examples: `"free"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_STATE: &str = "system.paging.state";

/// used
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_STATE_VALUE_USED: &str = "used";

/// free
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_STATE_VALUE_FREE: &str = "free";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_PAGING_STATE`].
    SystemPagingState for SYSTEM_PAGING_STATE {
        /// used
        Used = "used",
        /// free
        Free = "free",
    }
}

/// The memory paging type
///
/// Type: `string`. Examples: `"minor"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_TYPE: &str = "system.paging.type";

/// major
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_TYPE_VALUE_MAJOR: &str = "major";

/// minor
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PAGING_TYPE_VALUE_MINOR: &str = "minor";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_PAGING_TYPE`].
    SystemPagingType for SYSTEM_PAGING_TYPE {
        /// major
        Major = "major",
        /// minor
        Minor = "minor",
    }
}

/// The process state, e.g., Linux Process State Codes
///
/// Type: `string`. Examples: `"running"`.
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_STATUS: &str = "system.process.status";

/// running
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_STATUS_VALUE_RUNNING: &str = "running";

/// sleeping
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_STATUS_VALUE_SLEEPING: &str = "sleeping";

/// stopped
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_STATUS_VALUE_STOPPED: &str = "stopped";

/// defunct
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESS_STATUS_VALUE_DEFUNCT: &str = "defunct";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`SYSTEM_PROCESS_STATUS`].
    SystemProcessStatus for SYSTEM_PROCESS_STATUS {
        /// running
        Running = "running",
        /// sleeping
        Sleeping = "sleeping",
        /// stopped
        Stopped = "stopped",
        /// defunct
        Defunct = "defunct",
    }
}

/// Deprecated, use `system.process.status` instead.
///
/// Type: `string`. Examples: `"running"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `system.process.status`.")]
pub const SYSTEM_PROCESSES_STATUS: &str = "system.processes.status";

/// running
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESSES_STATUS_VALUE_RUNNING: &str = "running";

/// sleeping
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESSES_STATUS_VALUE_SLEEPING: &str = "sleeping";

/// stopped
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESSES_STATUS_VALUE_STOPPED: &str = "stopped";

/// defunct
#[cfg(feature = "semconv_experimental")]
pub const SYSTEM_PROCESSES_STATUS_VALUE_DEFUNCT: &str = "defunct";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CPU_LOGICAL_NUMBER", "cpu.logical_number", Experimental),
    Entry::attribute("CPU_MODE", "cpu.mode", Experimental),
    Entry::value("CPU_MODE_VALUE_USER", "cpu.mode", "user", Experimental),
    Entry::value("CPU_MODE_VALUE_SYSTEM", "cpu.mode", "system", Experimental),
    Entry::value("CPU_MODE_VALUE_NICE", "cpu.mode", "nice", Experimental),
    Entry::value("CPU_MODE_VALUE_IDLE", "cpu.mode", "idle", Experimental),
    Entry::value("CPU_MODE_VALUE_IOWAIT", "cpu.mode", "iowait", Experimental),
    Entry::value("CPU_MODE_VALUE_INTERRUPT", "cpu.mode", "interrupt", Experimental),
    Entry::value("CPU_MODE_VALUE_STEAL", "cpu.mode", "steal", Experimental),
    Entry::value("CPU_MODE_VALUE_KERNEL", "cpu.mode", "kernel", Experimental),
    Entry::attribute("DISK_IO_DIRECTION", "disk.io.direction", Experimental),
    Entry::value("DISK_IO_DIRECTION_VALUE_READ", "disk.io.direction", "read", Experimental),
    Entry::value("DISK_IO_DIRECTION_VALUE_WRITE", "disk.io.direction", "write", Experimental),
    Entry::attribute("LINUX_MEMORY_SLAB_STATE", "linux.memory.slab.state", Experimental),
    Entry::value(
        "LINUX_MEMORY_SLAB_STATE_VALUE_RECLAIMABLE",
        "linux.memory.slab.state",
        "reclaimable",
        Experimental,
    ),
    Entry::value(
        "LINUX_MEMORY_SLAB_STATE_VALUE_UNRECLAIMABLE",
        "linux.memory.slab.state",
        "unreclaimable",
        Experimental,
    ),
    Entry::attribute("SYSTEM_CPU_LOGICAL_NUMBER", "system.cpu.logical_number", Experimental)
        .deprecated(Renamed("cpu.logical_number")),
    Entry::attribute("SYSTEM_CPU_STATE", "system.cpu.state", Experimental)
        .deprecated(Renamed("cpu.mode")),
    Entry::value("SYSTEM_CPU_STATE_VALUE_USER", "system.cpu.state", "user", Experimental),
    Entry::value("SYSTEM_CPU_STATE_VALUE_SYSTEM", "system.cpu.state", "system", Experimental),
    Entry::value("SYSTEM_CPU_STATE_VALUE_NICE", "system.cpu.state", "nice", Experimental),
    Entry::value("SYSTEM_CPU_STATE_VALUE_IDLE", "system.cpu.state", "idle", Experimental),
    Entry::value("SYSTEM_CPU_STATE_VALUE_IOWAIT", "system.cpu.state", "iowait", Experimental),
    Entry::value("SYSTEM_CPU_STATE_VALUE_INTERRUPT", "system.cpu.state", "interrupt", Experimental),
    Entry::value("SYSTEM_CPU_STATE_VALUE_STEAL", "system.cpu.state", "steal", Experimental),
    Entry::attribute("SYSTEM_DEVICE", "system.device", Experimental),
    Entry::attribute("SYSTEM_FILESYSTEM_MODE", "system.filesystem.mode", Experimental),
    Entry::attribute("SYSTEM_FILESYSTEM_MOUNTPOINT", "system.filesystem.mountpoint", Experimental),
    Entry::attribute("SYSTEM_FILESYSTEM_STATE", "system.filesystem.state", Experimental),
    Entry::value(
        "SYSTEM_FILESYSTEM_STATE_VALUE_USED",
        "system.filesystem.state",
        "used",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_STATE_VALUE_FREE",
        "system.filesystem.state",
        "free",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_STATE_VALUE_RESERVED",
        "system.filesystem.state",
        "reserved",
        Experimental,
    ),
    Entry::attribute("SYSTEM_FILESYSTEM_TYPE", "system.filesystem.type", Experimental),
    Entry::value(
        "SYSTEM_FILESYSTEM_TYPE_VALUE_FAT32",
        "system.filesystem.type",
        "fat32",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_TYPE_VALUE_EXFAT",
        "system.filesystem.type",
        "exfat",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_TYPE_VALUE_NTFS",
        "system.filesystem.type",
        "ntfs",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_TYPE_VALUE_REFS",
        "system.filesystem.type",
        "refs",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_TYPE_VALUE_HFSPLUS",
        "system.filesystem.type",
        "hfsplus",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_FILESYSTEM_TYPE_VALUE_EXT4",
        "system.filesystem.type",
        "ext4",
        Experimental,
    ),
    Entry::attribute("SYSTEM_MEMORY_STATE", "system.memory.state", Experimental),
    Entry::value("SYSTEM_MEMORY_STATE_VALUE_USED", "system.memory.state", "used", Experimental),
    Entry::value("SYSTEM_MEMORY_STATE_VALUE_FREE", "system.memory.state", "free", Experimental),
    Entry::value("SYSTEM_MEMORY_STATE_VALUE_SHARED", "system.memory.state", "shared", Experimental)
        .deprecated(Obsoleted),
    Entry::value(
        "SYSTEM_MEMORY_STATE_VALUE_BUFFERS",
        "system.memory.state",
        "buffers",
        Experimental,
    ),
    Entry::value("SYSTEM_MEMORY_STATE_VALUE_CACHED", "system.memory.state", "cached", Experimental),
    Entry::attribute("SYSTEM_NETWORK_STATE", "system.network.state", Experimental)
        .deprecated(Renamed("network.connection.state")),
    Entry::value("SYSTEM_NETWORK_STATE_VALUE_CLOSE", "system.network.state", "close", Experimental),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_CLOSE_WAIT",
        "system.network.state",
        "close_wait",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_CLOSING",
        "system.network.state",
        "closing",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_DELETE",
        "system.network.state",
        "delete",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_ESTABLISHED",
        "system.network.state",
        "established",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_FIN_WAIT_1",
        "system.network.state",
        "fin_wait_1",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_FIN_WAIT_2",
        "system.network.state",
        "fin_wait_2",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_LAST_ACK",
        "system.network.state",
        "last_ack",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_LISTEN",
        "system.network.state",
        "listen",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_SYN_RECV",
        "system.network.state",
        "syn_recv",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_SYN_SENT",
        "system.network.state",
        "syn_sent",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_NETWORK_STATE_VALUE_TIME_WAIT",
        "system.network.state",
        "time_wait",
        Experimental,
    ),
    Entry::attribute("SYSTEM_PAGING_DIRECTION", "system.paging.direction", Experimental),
    Entry::value("SYSTEM_PAGING_DIRECTION_VALUE_IN", "system.paging.direction", "in", Experimental),
    Entry::value(
        "SYSTEM_PAGING_DIRECTION_VALUE_OUT",
        "system.paging.direction",
        "out",
        Experimental,
    ),
    Entry::attribute("SYSTEM_PAGING_STATE", "system.paging.state", Experimental),
    Entry::value("SYSTEM_PAGING_STATE_VALUE_USED", "system.paging.state", "used", Experimental),
    Entry::value("SYSTEM_PAGING_STATE_VALUE_FREE", "system.paging.state", "free", Experimental),
    Entry::attribute("SYSTEM_PAGING_TYPE", "system.paging.type", Experimental),
    Entry::value("SYSTEM_PAGING_TYPE_VALUE_MAJOR", "system.paging.type", "major", Experimental),
    Entry::value("SYSTEM_PAGING_TYPE_VALUE_MINOR", "system.paging.type", "minor", Experimental),
    Entry::attribute("SYSTEM_PROCESS_STATUS", "system.process.status", Experimental),
    Entry::value(
        "SYSTEM_PROCESS_STATUS_VALUE_RUNNING",
        "system.process.status",
        "running",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_PROCESS_STATUS_VALUE_SLEEPING",
        "system.process.status",
        "sleeping",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_PROCESS_STATUS_VALUE_STOPPED",
        "system.process.status",
        "stopped",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_PROCESS_STATUS_VALUE_DEFUNCT",
        "system.process.status",
        "defunct",
        Experimental,
    ),
    Entry::attribute("SYSTEM_PROCESSES_STATUS", "system.processes.status", Experimental)
        .deprecated(Renamed("system.process.status")),
    Entry::value(
        "SYSTEM_PROCESSES_STATUS_VALUE_RUNNING",
        "system.processes.status",
        "running",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_PROCESSES_STATUS_VALUE_SLEEPING",
        "system.processes.status",
        "sleeping",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_PROCESSES_STATUS_VALUE_STOPPED",
        "system.processes.status",
        "stopped",
        Experimental,
    ),
    Entry::value(
        "SYSTEM_PROCESSES_STATUS_VALUE_DEFUNCT",
        "system.processes.status",
        "defunct",
        Experimental,
    ),
];
