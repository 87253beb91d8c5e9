// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `hw` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Remaining fraction of battery charge.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_CHARGE: &str = "hw.battery.charge";

/// Lower limit of battery charge fraction to ensure proper operation.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_CHARGE_LIMIT: &str = "hw.battery.charge.limit";

/// Time left before battery is completely charged or discharged.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const HW_BATTERY_TIME_LEFT: &str = "hw.battery.time_left";

/// CPU current frequency.
///
/// Instrument: `gauge`. Unit: `Hz`.
#[cfg(feature = "semconv_experimental")]
pub const HW_CPU_SPEED: &str = "hw.cpu.speed";

/// CPU maximum frequency.
///
/// Instrument: `gauge`. Unit: `Hz`.
#[cfg(feature = "semconv_experimental")]
pub const HW_CPU_SPEED_LIMIT: &str = "hw.cpu.speed.limit";

/// Energy consumed by the component
///
/// Instrument: `counter`. Unit: `J`.
#[cfg(feature = "semconv_experimental")]
pub const HW_ENERGY: &str = "hw.energy";

/// Number of errors encountered by the component
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const HW_ERRORS: &str = "hw.errors";

/// Fan speed in revolutions per minute.
///
/// Instrument: `gauge`. Unit: `rpm`.
#[cfg(feature = "semconv_experimental")]
pub const HW_FAN_SPEED: &str = "hw.fan.speed";

/// Speed limit in rpm.
///
/// Instrument: `gauge`. Unit: `rpm`.
#[cfg(feature = "semconv_experimental")]
pub const HW_FAN_SPEED_LIMIT: &str = "hw.fan.speed.limit";

/// Fan speed expressed as a fraction of its maximum speed.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_FAN_SPEED_RATIO: &str = "hw.fan.speed_ratio";

/// Received and transmitted bytes by the GPU.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_IO: &str = "hw.gpu.io";

/// Size of the GPU memory.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_MEMORY_LIMIT: &str = "hw.gpu.memory.limit";

/// GPU memory used.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_MEMORY_USAGE: &str = "hw.gpu.memory.usage";

/// Fraction of GPU memory used.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_MEMORY_UTILIZATION: &str = "hw.gpu.memory.utilization";

/// Fraction of time spent in a specific task.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_GPU_UTILIZATION: &str = "hw.gpu.utilization";

/// Ambient (external) temperature of the physical host
///
/// Instrument: `gauge`. Unit: `Cel`.
#[cfg(feature = "semconv_experimental")]
pub const HW_HOST_AMBIENT_TEMPERATURE: &str = "hw.host.ambient_temperature";

/// Total energy consumed by the entire physical host, in joules
///
/// Instrument: `counter`. Unit: `J`.
#[cfg(feature = "semconv_experimental")]
pub const HW_HOST_ENERGY: &str = "hw.host.energy";

/// By how many degrees Celsius the temperature of the physical host can be increased, before reaching a warning threshold on one of the internal sensors
///
/// Instrument: `gauge`. Unit: `Cel`.
#[cfg(feature = "semconv_experimental")]
pub const HW_HOST_HEATING_MARGIN: &str = "hw.host.heating_margin";

/// Instantaneous power consumed by the entire physical host in Watts (`hw.host.energy` is preferred)
///
/// Instrument: `gauge`. Unit: `W`.
#[cfg(feature = "semconv_experimental")]
pub const HW_HOST_POWER: &str = "hw.host.power";

/// Size of the logical disk.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_LIMIT: &str = "hw.logical_disk.limit";

/// Logical disk space usage.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_USAGE: &str = "hw.logical_disk.usage";

/// Logical disk space utilization as a fraction.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_LOGICAL_DISK_UTILIZATION: &str = "hw.logical_disk.utilization";

/// Size of the memory module.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_MEMORY_SIZE: &str = "hw.memory.size";

/// Link speed.
///
/// Instrument: `updowncounter`. Unit: `By/s`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_BANDWIDTH_LIMIT: &str = "hw.network.bandwidth.limit";

/// Utilization of the network bandwidth as a fraction.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_BANDWIDTH_UTILIZATION: &str = "hw.network.bandwidth.utilization";

/// Received and transmitted network traffic in bytes.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_IO: &str = "hw.network.io";

/// Received and transmitted network traffic in packets (or frames).
///
/// Instrument: `counter`. Unit: `{packet}`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_PACKETS: &str = "hw.network.packets";

/// Link status: `1` (up) or `0` (down).
///
/// Instrument: `updowncounter`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_NETWORK_UP: &str = "hw.network.up";

/// Endurance remaining for this SSD disk.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_ENDURANCE_UTILIZATION: &str = "hw.physical_disk.endurance_utilization";

/// Size of the disk.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_SIZE: &str = "hw.physical_disk.size";

/// Value of the corresponding S.M.A.R.T. (Self-Monitoring, Analysis, and Reporting Technology) attribute.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_PHYSICAL_DISK_SMART: &str = "hw.physical_disk.smart";

/// Instantaneous power consumed by the component
///
/// Instrument: `gauge`. Unit: `W`.
#[cfg(feature = "semconv_experimental")]
pub const HW_POWER: &str = "hw.power";

/// Maximum power output of the power supply.
///
/// Instrument: `updowncounter`. Unit: `W`.
#[cfg(feature = "semconv_experimental")]
pub const HW_POWER_SUPPLY_LIMIT: &str = "hw.power_supply.limit";

/// Current power output of the power supply.
///
/// Instrument: `updowncounter`. Unit: `W`.
#[cfg(feature = "semconv_experimental")]
pub const HW_POWER_SUPPLY_USAGE: &str = "hw.power_supply.usage";

/// Utilization of the power supply as a fraction of its maximum output.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_POWER_SUPPLY_UTILIZATION: &str = "hw.power_supply.utilization";

/// Operational status: `1` (true) or `0` (false) for each of the possible states
///
/// Instrument: `updowncounter`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const HW_STATUS: &str = "hw.status";

/// Operations performed by the tape drive.
///
/// Instrument: `counter`. Unit: `{operation}`.
#[cfg(feature = "semconv_experimental")]
pub const HW_TAPE_DRIVE_OPERATIONS: &str = "hw.tape_drive.operations";

/// Temperature in degrees Celsius.
///
/// Instrument: `gauge`. Unit: `Cel`.
#[cfg(feature = "semconv_experimental")]
pub const HW_TEMPERATURE: &str = "hw.temperature";

/// Temperature limit in degrees Celsius.
///
/// Instrument: `gauge`. Unit: `Cel`.
#[cfg(feature = "semconv_experimental")]
pub const HW_TEMPERATURE_LIMIT: &str = "hw.temperature.limit";

/// Voltage measured by the sensor.
///
/// Instrument: `gauge`. Unit: `V`.
#[cfg(feature = "semconv_experimental")]
pub const HW_VOLTAGE: &str = "hw.voltage";

/// Voltage limit in Volts.
///
/// Instrument: `gauge`. Unit: `V`.
#[cfg(feature = "semconv_experimental")]
pub const HW_VOLTAGE_LIMIT: &str = "hw.voltage.limit";

/// Nominal (expected) voltage.
///
/// Instrument: `gauge`. Unit: `V`.
#[cfg(feature = "semconv_experimental")]
pub const HW_VOLTAGE_NOMINAL: &str = "hw.voltage.nominal";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("HW_BATTERY_CHARGE", "hw.battery.charge", Gauge, "1", Experimental),
    Entry::metric("HW_BATTERY_CHARGE_LIMIT", "hw.battery.charge.limit", Gauge, "1", Experimental),
    Entry::metric("HW_BATTERY_TIME_LEFT", "hw.battery.time_left", Gauge, "s", Experimental),
    Entry::metric("HW_CPU_SPEED", "hw.cpu.speed", Gauge, "Hz", Experimental),
    Entry::metric("HW_CPU_SPEED_LIMIT", "hw.cpu.speed.limit", Gauge, "Hz", Experimental),
    Entry::metric("HW_ENERGY", "hw.energy", Counter, "J", Experimental),
    Entry::metric("HW_ERRORS", "hw.errors", Counter, "{error}", Experimental),
    Entry::metric("HW_FAN_SPEED", "hw.fan.speed", Gauge, "rpm", Experimental),
    Entry::metric("HW_FAN_SPEED_LIMIT", "hw.fan.speed.limit", Gauge, "rpm", Experimental),
    Entry::metric("HW_FAN_SPEED_RATIO", "hw.fan.speed_ratio", Gauge, "1", Experimental),
    Entry::metric("HW_GPU_IO", "hw.gpu.io", Counter, "By", Experimental),
    Entry::metric("HW_GPU_MEMORY_LIMIT", "hw.gpu.memory.limit", UpDownCounter, "By", Experimental),
    Entry::metric("HW_GPU_MEMORY_USAGE", "hw.gpu.memory.usage", UpDownCounter, "By", Experimental),
    Entry::metric(
        "HW_GPU_MEMORY_UTILIZATION",
        "hw.gpu.memory.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric("HW_GPU_UTILIZATION", "hw.gpu.utilization", Gauge, "1", Experimental),
    Entry::metric(
        "HW_HOST_AMBIENT_TEMPERATURE",
        "hw.host.ambient_temperature",
        Gauge,
        "Cel",
        Experimental,
    ),
    Entry::metric("HW_HOST_ENERGY", "hw.host.energy", Counter, "J", Experimental),
    Entry::metric("HW_HOST_HEATING_MARGIN", "hw.host.heating_margin", Gauge, "Cel", Experimental),
    Entry::metric("HW_HOST_POWER", "hw.host.power", Gauge, "W", Experimental),
    Entry::metric(
        "HW_LOGICAL_DISK_LIMIT",
        "hw.logical_disk.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "HW_LOGICAL_DISK_USAGE",
        "hw.logical_disk.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "HW_LOGICAL_DISK_UTILIZATION",
        "hw.logical_disk.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric("HW_MEMORY_SIZE", "hw.memory.size", UpDownCounter, "By", Experimental),
    Entry::metric(
        "HW_NETWORK_BANDWIDTH_LIMIT",
        "hw.network.bandwidth.limit",
        UpDownCounter,
        "By/s",
        Experimental,
    ),
    Entry::metric(
        "HW_NETWORK_BANDWIDTH_UTILIZATION",
        "hw.network.bandwidth.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric("HW_NETWORK_IO", "hw.network.io", Counter, "By", Experimental),
    Entry::metric("HW_NETWORK_PACKETS", "hw.network.packets", Counter, "{packet}", Experimental),
    Entry::metric("HW_NETWORK_UP", "hw.network.up", UpDownCounter, "1", Experimental),
    Entry::metric(
        "HW_PHYSICAL_DISK_ENDURANCE_UTILIZATION",
        "hw.physical_disk.endurance_utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric(
        "HW_PHYSICAL_DISK_SIZE",
        "hw.physical_disk.size",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("HW_PHYSICAL_DISK_SMART", "hw.physical_disk.smart", Gauge, "1", Experimental),
    Entry::metric("HW_POWER", "hw.power", Gauge, "W", Experimental),
    Entry::metric(
        "HW_POWER_SUPPLY_LIMIT",
        "hw.power_supply.limit",
        UpDownCounter,
        "W",
        Experimental,
    ),
    Entry::metric(
        "HW_POWER_SUPPLY_USAGE",
        "hw.power_supply.usage",
        UpDownCounter,
        "W",
        Experimental,
    ),
    Entry::metric(
        "HW_POWER_SUPPLY_UTILIZATION",
        "hw.power_supply.utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric("HW_STATUS", "hw.status", UpDownCounter, "1", Experimental),
    Entry::metric(
        "HW_TAPE_DRIVE_OPERATIONS",
        "hw.tape_drive.operations",
        Counter,
        "{operation}",
        Experimental,
    ),
    Entry::metric("HW_TEMPERATURE", "hw.temperature", Gauge, "Cel", Experimental),
    Entry::metric("HW_TEMPERATURE_LIMIT", "hw.temperature.limit", Gauge, "Cel", Experimental),
    Entry::metric("HW_VOLTAGE", "hw.voltage", Gauge, "V", Experimental),
    Entry::metric("HW_VOLTAGE_LIMIT", "hw.voltage.limit", Gauge, "V", Experimental),
    Entry::metric("HW_VOLTAGE_NOMINAL", "hw.voltage.nominal", Gauge, "V", Experimental),
];
