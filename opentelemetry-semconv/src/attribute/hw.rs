// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `hw` namespace.

use crate::registry::{Entry, Stability::*};

/// Design capacity in Watts-hours or Amper-hours
///
/// Type: `string`. Examples: `"9.3Ah"`, `"50Wh"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_CAPACITY: &str = "hw.battery.capacity";

/// Battery chemistry, e.g. Lithium-Ion, Nickel-Cadmium, etc.
///
/// Type: `string`. Examples: `"Li-ion"`, `"NiMH"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_CHEMISTRY: &str = "hw.battery.chemistry";

/// The current state of the battery
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_STATE: &str = "hw.battery.state";

/// Charging
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_STATE_VALUE_CHARGING: &str = "charging";

/// Discharging
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_STATE_VALUE_DISCHARGING: &str = "discharging";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_BATTERY_STATE`].
    HwBatteryState for HW_BATTERY_STATE {
        /// Charging
        Charging = "charging",
        /// Discharging
        Discharging = "discharging",
    }
}

/// BIOS version of the hardware component
///
/// Type: `string`. Examples: `"1.2.3"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BIOS_VERSION: &str = "hw.bios_version";

/// Driver version for the hardware component
///
/// Type: `string`. Examples: `"10.2.1-3"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_DRIVER_VERSION: &str = "hw.driver_version";

/// Type of the enclosure (useful for modular systems)
///
/// Type: `string`. Examples: `"Computer"`, `"DiskArray"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_ENCLOSURE_TYPE: &str = "hw.enclosure.type";

/// Firmware version of the hardware component
///
/// Type: `string`. Examples: `"2.0.1"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_FIRMWARE_VERSION: &str = "hw.firmware_version";

/// Type of task the GPU is performing
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_TASK: &str = "hw.gpu.task";

/// Decoder
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_TASK_VALUE_DECODER: &str = "decoder";

/// Encoder
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_TASK_VALUE_ENCODER: &str = "encoder";

/// General
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_TASK_VALUE_GENERAL: &str = "general";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_GPU_TASK`].
    HwGpuTask for HW_GPU_TASK {
        /// Decoder
        Decoder = "decoder",
        /// Encoder
        Encoder = "encoder",
        /// General
        General = "general",
    }
}

/// An identifier for the hardware component, unique within the monitored host
///
/// Type: `string`. Examples: `"win32battery_battery_testsysa33_1"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_ID: &str = "hw.id";

/// Type of limit for hardware components
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE: &str = "hw.limit_type";

/// Critical
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_CRITICAL: &str = "critical";

/// Degraded
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_DEGRADED: &str = "degraded";

/// High Critical
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_HIGH_CRITICAL: &str = "high.critical";

/// High Degraded
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_HIGH_DEGRADED: &str = "high.degraded";

/// Low Critical
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_LOW_CRITICAL: &str = "low.critical";

/// Low Degraded
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_LOW_DEGRADED: &str = "low.degraded";

/// Maximum
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_MAX: &str = "max";

/// Throttled
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_THROTTLED: &str = "throttled";

/// Turbo
#[cfg(feature = "semconv_experimental")]
pub const HW_LIMIT_TYPE_VALUE_TURBO: &str = "turbo";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_LIMIT_TYPE`].
    HwLimitType for HW_LIMIT_TYPE {
        /// Critical
        Critical = "critical",
        /// Degraded
        Degraded = "degraded",
        /// High Critical
        HighCritical = "high.critical",
        /// High Degraded
        HighDegraded = "high.degraded",
        /// Low Critical
        LowCritical = "low.critical",
        /// Low Degraded
        LowDegraded = "low.degraded",
        /// Maximum
        Max = "max",
        /// Throttled
        Throttled = "throttled",
        /// Turbo
        Turbo = "turbo",
    }
}

/// RAID Level of the logical disk
///
/// Type: `string`. Examples: `"RAID0+1"`, `"RAID5"`, `"RAID10"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_RAID_LEVEL: &str = "hw.logical_disk.raid_level";

/// State of the logical disk space usage
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_STATE: &str = "hw.logical_disk.state";

/// Used
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_STATE_VALUE_USED: &str = "used";

/// Free
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_STATE_VALUE_FREE: &str = "free";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_LOGICAL_DISK_STATE`].
    HwLogicalDiskState for HW_LOGICAL_DISK_STATE {
        /// Used
        Used = "used",
        /// Free
        Free = "free",
    }
}

/// Type of the memory module
///
/// Type: `string`. Examples: `"DDR4"`, `"DDR5"`, `"LPDDR5"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_MEMORY_TYPE: &str = "hw.memory.type";

/// Descriptive model name of the hardware component
///
/// Type: `string`. Examples: `"PERC H740P"`, `"Intel(R) Core(TM) i7-10700K"`, `"Dell XPS 15 Battery"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_MODEL: &str = "hw.model";

/// An easily-recognizable name for the hardware component
///
/// Type: `string`. Examples: `"eth0"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NAME: &str = "hw.name";

/// Logical addresses of the adapter (e.g. IP address, or WWPN)
///
/// Type: `string[]`. Examples: `["172.16.8.21", "57.11.193.42"]`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_LOGICAL_ADDRESSES: &str = "hw.network.logical_addresses";

/// Physical address of the adapter (e.g. MAC address, or WWNN)
///
/// Type: `string`. Examples: `"00-90-F5-E9-7B-36"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_PHYSICAL_ADDRESS: &str = "hw.network.physical_address";

/// Unique identifier of the parent component (typically the `hw.id` attribute of the enclosure, or disk controller)
///
/// Type: `string`. Examples: `"dellStorage_perc_0"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PARENT: &str = "hw.parent";

/// Self-Monitoring, Analysis, and Reporting Technology (SMART) attribute of the physical disk
///
/// Type: `string`. Examples: `"Spin Retry Count"`, `"Seek Error Rate"`, `"Raw Read Error Rate"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_SMART_ATTRIBUTE: &str = "hw.physical_disk.smart_attribute";

/// State of the physical disk endurance utilization
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_STATE: &str = "hw.physical_disk.state";

/// Remaining
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_STATE_VALUE_REMAINING: &str = "remaining";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_PHYSICAL_DISK_STATE`].
    HwPhysicalDiskState for HW_PHYSICAL_DISK_STATE {
        /// Remaining
        Remaining = "remaining",
    }
}

/// Type of the physical disk
///
/// Type: `string`. Examples: `"HDD"`, `"SSD"`, `"10K"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_TYPE: &str = "hw.physical_disk.type";

/// Location of the sensor
///
/// Type: `string`. Examples: `"cpu0"`, `"ps1"`, `"INLET"`, `"CPU0_DIE"`, `"AMBIENT"`, `"MOTHERBOARD"`, `"PS0 V3_3"`, `"MAIN_12V"`, `"CPU_VCORE"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_SENSOR_LOCATION: &str = "hw.sensor_location";

/// Serial number of the hardware component
///
/// Type: `string`. Examples: `"CNFCP0123456789"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_SERIAL_NUMBER: &str = "hw.serial_number";

/// The current state of the component
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_STATE: &str = "hw.state";

/// Degraded
#[cfg(feature = "semconv_experimental")]
pub const HW_STATE_VALUE_DEGRADED: &str = "degraded";

/// Failed
#[cfg(feature = "semconv_experimental")]
pub const HW_STATE_VALUE_FAILED: &str = "failed";

/// Needs Cleaning
#[cfg(feature = "semconv_experimental")]
pub const HW_STATE_VALUE_NEEDS_CLEANING: &str = "needs_cleaning";

/// OK
#[cfg(feature = "semconv_experimental")]
pub const HW_STATE_VALUE_OK: &str = "ok";

/// Predicted Failure
#[cfg(feature = "semconv_experimental")]
pub const HW_STATE_VALUE_PREDICTED_FAILURE: &str = "predicted_failure";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_STATE`].
    HwState for HW_STATE {
        /// Degraded
        Degraded = "degraded",
        /// Failed
        Failed = "failed",
        /// Needs Cleaning
        NeedsCleaning = "needs_cleaning",
        /// OK
        Ok = "ok",
        /// Predicted Failure
        PredictedFailure = "predicted_failure",
    }
}

/// Type of tape drive operation
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_TAPE_DRIVE_OPERATION_TYPE: &str = "hw.tape_drive.operation_type";

/// Mount
#[cfg(feature = "semconv_experimental")]
pub const HW_TAPE_DRIVE_OPERATION_TYPE_VALUE_MOUNT: &str = "mount";

/// Unmount
#[cfg(feature = "semconv_experimental")]
pub const HW_TAPE_DRIVE_OPERATION_TYPE_VALUE_UNMOUNT: &str = "unmount";

/// Clean
#[cfg(feature = "semconv_experimental")]
pub const HW_TAPE_DRIVE_OPERATION_TYPE_VALUE_CLEAN: &str = "clean";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_TAPE_DRIVE_OPERATION_TYPE`].
    HwTapeDriveOperationType for HW_TAPE_DRIVE_OPERATION_TYPE {
        /// Mount
        Mount = "mount",
        /// Unmount
        Unmount = "unmount",
        /// Clean
        Clean = "clean",
    }
}

/// Type of the component
///
/// Describes the category of the hardware component for which `hw.state` is being reported.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE: &str = "hw.type";

/// Battery
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_BATTERY: &str = "battery";

/// CPU
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_CPU: &str = "cpu";

/// Disk controller
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_DISK_CONTROLLER: &str = "disk_controller";

/// Enclosure
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_ENCLOSURE: &str = "enclosure";

/// Fan
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_FAN: &str = "fan";

/// GPU
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_GPU: &str = "gpu";

/// Logical disk
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_LOGICAL_DISK: &str = "logical_disk";

/// Memory
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_MEMORY: &str = "memory";

/// Network
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_NETWORK: &str = "network";

/// Physical disk
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_PHYSICAL_DISK: &str = "physical_disk";

/// Power supply
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_POWER_SUPPLY: &str = "power_supply";

/// Tape drive
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_TAPE_DRIVE: &str = "tape_drive";

/// Temperature
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_TEMPERATURE: &str = "temperature";

/// Voltage
#[cfg(feature = "semconv_experimental")]
pub const HW_TYPE_VALUE_VOLTAGE: &str = "voltage";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HW_TYPE`].
    HwType for HW_TYPE {
        /// Battery
        Battery = "battery",
        /// CPU
        Cpu = "cpu",
        /// Disk controller
        DiskController = "disk_controller",
        /// Enclosure
        Enclosure = "enclosure",
        /// Fan
        Fan = "fan",
        /// GPU
        Gpu = "gpu",
        /// Logical disk
        LogicalDisk = "logical_disk",
        /// Memory
        Memory = "memory",
        /// Network
        Network = "network",
        /// Physical disk
        PhysicalDisk = "physical_disk",
        /// Power supply
        PowerSupply = "power_supply",
        /// Tape drive
        TapeDrive = "tape_drive",
        /// Temperature
        Temperature = "temperature",
        /// Voltage
        Voltage = "voltage",
    }
}

/// Vendor name of the hardware component
///
/// Type: `string`. Examples: `"Dell"`, `"HP"`, `"Intel"`, `"AMD"`, `"LSI"`, `"Lenovo"`.
#[cfg(feature = "semconv_experimental")]
pub const HW_VENDOR: &str = "hw.vendor";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("HW_BATTERY_CAPACITY", "hw.battery.capacity", Experimental),
    Entry::attribute("HW_BATTERY_CHEMISTRY", "hw.battery.chemistry", Experimental),
    Entry::attribute("HW_BATTERY_STATE", "hw.battery.state", Experimental),
    Entry::value("HW_BATTERY_STATE_VALUE_CHARGING", "hw.battery.state", "charging", Experimental),
    Entry::value(
        "HW_BATTERY_STATE_VALUE_DISCHARGING",
        "hw.battery.state",
        "discharging",
        Experimental,
    ),
    Entry::attribute("HW_BIOS_VERSION", "hw.bios_version", Experimental),
    Entry::attribute("HW_DRIVER_VERSION", "hw.driver_version", Experimental),
    Entry::attribute("HW_ENCLOSURE_TYPE", "hw.enclosure.type", Experimental),
    Entry::attribute("HW_FIRMWARE_VERSION", "hw.firmware_version", Experimental),
    Entry::attribute("HW_GPU_TASK", "hw.gpu.task", Experimental),
    Entry::value("HW_GPU_TASK_VALUE_DECODER", "hw.gpu.task", "decoder", Experimental),
    Entry::value("HW_GPU_TASK_VALUE_ENCODER", "hw.gpu.task", "encoder", Experimental),
    Entry::value("HW_GPU_TASK_VALUE_GENERAL", "hw.gpu.task", "general", Experimental),
    Entry::attribute("HW_ID", "hw.id", Experimental),
    Entry::attribute("HW_LIMIT_TYPE", "hw.limit_type", Experimental),
    Entry::value("HW_LIMIT_TYPE_VALUE_CRITICAL", "hw.limit_type", "critical", Experimental),
    Entry::value("HW_LIMIT_TYPE_VALUE_DEGRADED", "hw.limit_type", "degraded", Experimental),
    Entry::value(
        "HW_LIMIT_TYPE_VALUE_HIGH_CRITICAL",
        "hw.limit_type",
        "high.critical",
        Experimental,
    ),
    Entry::value(
        "HW_LIMIT_TYPE_VALUE_HIGH_DEGRADED",
        "hw.limit_type",
        "high.degraded",
        Experimental,
    ),
    Entry::value("HW_LIMIT_TYPE_VALUE_LOW_CRITICAL", "hw.limit_type", "low.critical", Experimental),
    Entry::value("HW_LIMIT_TYPE_VALUE_LOW_DEGRADED", "hw.limit_type", "low.degraded", Experimental),
    Entry::value("HW_LIMIT_TYPE_VALUE_MAX", "hw.limit_type", "max", Experimental),
    Entry::value("HW_LIMIT_TYPE_VALUE_THROTTLED", "hw.limit_type", "throttled", Experimental),
    Entry::value("HW_LIMIT_TYPE_VALUE_TURBO", "hw.limit_type", "turbo", Experimental),
    Entry::attribute("HW_LOGICAL_DISK_RAID_LEVEL", "hw.logical_disk.raid_level", Experimental),
    Entry::attribute("HW_LOGICAL_DISK_STATE", "hw.logical_disk.state", Experimental),
    Entry::value("HW_LOGICAL_DISK_STATE_VALUE_USED", "hw.logical_disk.state", "used", Experimental),
    Entry::value("HW_LOGICAL_DISK_STATE_VALUE_FREE", "hw.logical_disk.state", "free", Experimental),
    Entry::attribute("HW_MEMORY_TYPE", "hw.memory.type", Experimental),
    Entry::attribute("HW_MODEL", "hw.model", Experimental),
    Entry::attribute("HW_NAME", "hw.name", Experimental),
    Entry::attribute("HW_NETWORK_LOGICAL_ADDRESSES", "hw.network.logical_addresses", Experimental),
    Entry::attribute("HW_NETWORK_PHYSICAL_ADDRESS", "hw.network.physical_address", Experimental),
    Entry::attribute("HW_PARENT", "hw.parent", Experimental),
    Entry::attribute(
        "HW_PHYSICAL_DISK_SMART_ATTRIBUTE",
        "hw.physical_disk.smart_attribute",
        Experimental,
    ),
    Entry::attribute("HW_PHYSICAL_DISK_STATE", "hw.physical_disk.state", Experimental),
    Entry::value(
        "HW_PHYSICAL_DISK_STATE_VALUE_REMAINING",
        "hw.physical_disk.state",
        "remaining",
        Experimental,
    ),
    Entry::attribute("HW_PHYSICAL_DISK_TYPE", "hw.physical_disk.type", Experimental),
    Entry::attribute("HW_SENSOR_LOCATION", "hw.sensor_location", Experimental),
    Entry::attribute("HW_SERIAL_NUMBER", "hw.serial_number", Experimental),
    Entry::attribute("HW_STATE", "hw.state", Experimental),
    Entry::value("HW_STATE_VALUE_DEGRADED", "hw.state", "degraded", Experimental),
    Entry::value("HW_STATE_VALUE_FAILED", "hw.state", "failed", Experimental),
    Entry::value("HW_STATE_VALUE_NEEDS_CLEANING", "hw.state", "needs_cleaning", Experimental),
    Entry::value("HW_STATE_VALUE_OK", "hw.state", "ok", Experimental),
    Entry::value("HW_STATE_VALUE_PREDICTED_FAILURE", "hw.state", "predicted_failure", Experimental),
    Entry::attribute("HW_TAPE_DRIVE_OPERATION_TYPE", "hw.tape_drive.operation_type", Experimental),
    Entry::value(
        "HW_TAPE_DRIVE_OPERATION_TYPE_VALUE_MOUNT",
        "hw.tape_drive.operation_type",
        "mount",
        Experimental,
    ),
    Entry::value(
        "HW_TAPE_DRIVE_OPERATION_TYPE_VALUE_UNMOUNT",
        "hw.tape_drive.operation_type",
        "unmount",
        Experimental,
    ),
    Entry::value(
        "HW_TAPE_DRIVE_OPERATION_TYPE_VALUE_CLEAN",
        "hw.tape_drive.operation_type",
        "clean",
        Experimental,
    ),
    Entry::attribute("HW_TYPE", "hw.type", Experimental),
    Entry::value("HW_TYPE_VALUE_BATTERY", "hw.type", "battery", Experimental),
    Entry::value("HW_TYPE_VALUE_CPU", "hw.type", "cpu", Experimental),
    Entry::value("HW_TYPE_VALUE_DISK_CONTROLLER", "hw.type", "disk_controller", Experimental),
    Entry::value("HW_TYPE_VALUE_ENCLOSURE", "hw.type", "enclosure", Experimental),
    Entry::value("HW_TYPE_VALUE_FAN", "hw.type", "fan", Experimental),
    Entry::value("HW_TYPE_VALUE_GPU", "hw.type", "gpu", Experimental),
    Entry::value("HW_TYPE_VALUE_LOGICAL_DISK", "hw.type", "logical_disk", Experimental),
    Entry::value("HW_TYPE_VALUE_MEMORY", "hw.type", "memory", Experimental),
    Entry::value("HW_TYPE_VALUE_NETWORK", "hw.type", "network", Experimental),
    Entry::value("HW_TYPE_VALUE_PHYSICAL_DISK", "hw.type", "physical_disk", Experimental),
    Entry::value("HW_TYPE_VALUE_POWER_SUPPLY", "hw.type", "power_supply", Experimental),
    Entry::value("HW_TYPE_VALUE_TAPE_DRIVE", "hw.type", "tape_drive", Experimental),
    Entry::value("HW_TYPE_VALUE_TEMPERATURE", "hw.type", "temperature", Experimental),
    Entry::value("HW_TYPE_VALUE_VOLTAGE", "hw.type", "voltage", Experimental),
    Entry::attribute("HW_VENDOR", "hw.vendor", Experimental),
];
