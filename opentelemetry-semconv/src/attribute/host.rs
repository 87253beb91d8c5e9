// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `host`, `os`, `mainframe`, `zos` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The CPU architecture the host system is running on.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH: &str = "host.arch";

/// AMD64
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_AMD64: &str = "amd64";

/// ARM32
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_ARM32: &str = "arm32";

/// ARM64
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_ARM64: &str = "arm64";

/// Itanium
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_IA64: &str = "ia64";

/// 32-bit PowerPC
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_PPC32: &str = "ppc32";

/// 64-bit PowerPC
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_PPC64: &str = "ppc64";

/// IBM z/Architecture
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_S390X: &str = "s390x";

/// 32-bit x86
#[cfg(feature = "semconv_experimental")]
pub const HOST_ARCH_VALUE_X86: &str = "x86";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HOST_ARCH`].
    HostArch for HOST_ARCH {
        /// AMD64
        Amd64 = "amd64",
        /// ARM32
        Arm32 = "arm32",
        /// ARM64
        Arm64 = "arm64",
        /// Itanium
        Ia64 = "ia64",
        /// 32-bit PowerPC
        Ppc32 = "ppc32",
        /// 64-bit PowerPC
        Ppc64 = "ppc64",
        /// IBM z/Architecture
        S390x = "s390x",
        /// 32-bit x86
        X86 = "x86",
    }
}

/// The amount of level 2 memory cache available to the processor (in Bytes).
///
/// Type: `int`. Examples: `12288000`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_CPU_CACHE_L2_SIZE: &str = "host.cpu.cache.l2.size";

/// Family or generation of the CPU.
///
/// Type: `string`. Examples: `"6"`, `"PA-RISC 1.1e"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_CPU_FAMILY: &str = "host.cpu.family";

/// Model identifier. It provides more granular information about the CPU, distinguishing it from other CPUs within the same family.
///
/// Type: `string`. Examples: `"6"`, `"9000/778/B180L"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_CPU_MODEL_ID: &str = "host.cpu.model.id";

/// Model designation of the processor.
///
/// Type: `string`. Examples: `"11th Gen Intel(R) Core(TM) i7-1185G7 @ 3.00GHz"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_CPU_MODEL_NAME: &str = "host.cpu.model.name";

/// Stepping or core revisions.
///
/// Type: `string`. Examples: `"1"`, `"r1p1"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_CPU_STEPPING: &str = "host.cpu.stepping";

/// Processor manufacturer identifier. A maximum 12-character string.
///
/// Type: `string`. Examples: `"GenuineIntel"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_CPU_VENDOR_ID: &str = "host.cpu.vendor.id";

/// Unique host ID. For Cloud, this must be the instance_id assigned by the cloud provider.
///
/// Type: `string`. Examples: `"fdbf79e8af94cb7f9e8df36789187052"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_ID: &str = "host.id";

/// VM image ID or host OS image ID. For Cloud, this value is from the provider.
///
/// Type: `string`. Examples: `"ami-07b06b442921831e5"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_IMAGE_ID: &str = "host.image.id";

/// Name of the VM image or OS install the host was instantiated from.
///
/// Type: `string`. Examples: `"infra-ami-eks-worker-node-7d4ec78312"`, `"CentOS-8-x86_64-1905"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_IMAGE_NAME: &str = "host.image.name";

/// The version string of the VM image or host OS.
///
/// Type: `string`. Examples: `"0.1"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_IMAGE_VERSION: &str = "host.image.version";

/// Available IP addresses of the host, excluding loopback interfaces.
///
/// Type: `string[]`. Examples: `["192.168.1.140", "fe80::abc2:4a28:737a:609e"]`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_IP: &str = "host.ip";

/// Available MAC addresses of the host, excluding loopback interfaces.
///
/// Type: `string[]`. Examples: `["AC-DE-48-23-45-67", "AC-DE-48-23-45-67-01-9F"]`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_MAC: &str = "host.mac";

/// Name of the host. On Unix systems, it may contain what the hostname command returns, or the fully qualified hostname, or another name specified by the user.
///
/// Type: `string`. Examples: `"opentelemetry-test"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_NAME: &str = "host.name";

/// Type of host. For Cloud, this must be the machine type.
///
/// Type: `string`. Examples: `"n1-standard-1"`.
#[cfg(feature = "semconv_experimental")]
pub const HOST_TYPE: &str = "host.type";

/// Name of the logical partition that hosts a systems with a mainframe operating system.
///
/// Type: `string`. Examples: `"LPAR01"`.
#[cfg(feature = "semconv_experimental")]
pub const MAINFRAME_LPAR_NAME: &str = "mainframe.lpar.name";

/// Unique identifier for a particular build or compilation of the operating system.
///
/// Type: `string`. Examples: `"TQ3C.230805.001.B2"`, `"20E247"`, `"22621"`.
#[cfg(feature = "semconv_experimental")]
pub const OS_BUILD_ID: &str = "os.build_id";

/// Human readable (not intended to be parsed) OS version information, like e.g. reported by `ver` or `lsb_release -a` commands.
///
/// Type: `string`. Examples: `"Microsoft Windows [Version 10.0.18363.778]"`, `"Ubuntu 18.04.1 LTS"`.
#[cfg(feature = "semconv_experimental")]
pub const OS_DESCRIPTION: &str = "os.description";

/// Human readable operating system name.
///
/// Type: `string`. Examples: `"iOS"`, `"Android"`, `"Ubuntu"`.
#[cfg(feature = "semconv_experimental")]
pub const OS_NAME: &str = "os.name";

/// The operating system type.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE: &str = "os.type";

/// Microsoft Windows
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_WINDOWS: &str = "windows";

/// Linux
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_LINUX: &str = "linux";

/// Apple Darwin
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_DARWIN: &str = "darwin";

/// FreeBSD
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_FREEBSD: &str = "freebsd";

/// NetBSD
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_NETBSD: &str = "netbsd";

/// OpenBSD
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_OPENBSD: &str = "openbsd";

/// DragonFly BSD
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_DRAGONFLYBSD: &str = "dragonflybsd";

/// HP-UX (Hewlett Packard Unix)
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_HPUX: &str = "hpux";

/// AIX (Advanced Interactive eXecutive)
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_AIX: &str = "aix";

/// SunOS, Oracle Solaris
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_SOLARIS: &str = "solaris";

/// Deprecated. Use `zos` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `zos`.")]
pub const OS_TYPE_VALUE_Z_OS: &str = "z_os";

/// IBM z/OS
#[cfg(feature = "semconv_experimental")]
pub const OS_TYPE_VALUE_ZOS: &str = "zos";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`OS_TYPE`].
    OsType for OS_TYPE {
        /// Microsoft Windows
        Windows = "windows",
        /// Linux
        Linux = "linux",
        /// Apple Darwin
        Darwin = "darwin",
        /// FreeBSD
        Freebsd = "freebsd",
        /// NetBSD
        Netbsd = "netbsd",
        /// OpenBSD
        Openbsd = "openbsd",
        /// DragonFly BSD
        Dragonflybsd = "dragonflybsd",
        /// HP-UX (Hewlett Packard Unix)
        Hpux = "hpux",
        /// AIX (Advanced Interactive eXecutive)
        Aix = "aix",
        /// SunOS, Oracle Solaris
        Solaris = "solaris",
        /// Deprecated. Use `zos` instead.
        ///
        /// Deprecated: Replaced by `zos`.
        ZOs = "z_os",
        /// IBM z/OS
        Zos = "zos",
    }
}

/// The version string of the operating system.
///
/// Type: `string`. Examples: `"14.2.1"`, `"18.04.1"`.
#[cfg(feature = "semconv_experimental")]
pub const OS_VERSION: &str = "os.version";

/// The System Management Facility (SMF) Identifier uniquely identified a z/OS system within a SYSPLEX or mainframe environment and is used for system and performance analysis.
///
/// Type: `string`. Examples: `"SYS1"`.
#[cfg(feature = "semconv_experimental")]
pub const ZOS_SMF_ID: &str = "zos.smf.id";

/// The name of the SYSPLEX to which the z/OS system belongs too.
///
/// Type: `string`. Examples: `"SYSPLEX1"`.
#[cfg(feature = "semconv_experimental")]
pub const ZOS_SYSPLEX_NAME: &str = "zos.sysplex.name";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("HOST_ARCH", "host.arch", Experimental),
    Entry::value("HOST_ARCH_VALUE_AMD64", "host.arch", "amd64", Experimental),
    Entry::value("HOST_ARCH_VALUE_ARM32", "host.arch", "arm32", Experimental),
    Entry::value("HOST_ARCH_VALUE_ARM64", "host.arch", "arm64", Experimental),
    Entry::value("HOST_ARCH_VALUE_IA64", "host.arch", "ia64", Experimental),
    Entry::value("HOST_ARCH_VALUE_PPC32", "host.arch", "ppc32", Experimental),
    Entry::value("HOST_ARCH_VALUE_PPC64", "host.arch", "ppc64", Experimental),
    Entry::value("HOST_ARCH_VALUE_S390X", "host.arch", "s390x", Experimental),
    Entry::value("HOST_ARCH_VALUE_X86", "host.arch", "x86", Experimental),
    Entry::attribute("HOST_CPU_CACHE_L2_SIZE", "host.cpu.cache.l2.size", Experimental),
    Entry::attribute("HOST_CPU_FAMILY", "host.cpu.family", Experimental),
    Entry::attribute("HOST_CPU_MODEL_ID", "host.cpu.model.id", Experimental),
    Entry::attribute("HOST_CPU_MODEL_NAME", "host.cpu.model.name", Experimental),
    Entry::attribute("HOST_CPU_STEPPING", "host.cpu.stepping", Experimental),
    Entry::attribute("HOST_CPU_VENDOR_ID", "host.cpu.vendor.id", Experimental),
    Entry::attribute("HOST_ID", "host.id", Experimental),
    Entry::attribute("HOST_IMAGE_ID", "host.image.id", Experimental),
    Entry::attribute("HOST_IMAGE_NAME", "host.image.name", Experimental),
    Entry::attribute("HOST_IMAGE_VERSION", "host.image.version", Experimental),
    Entry::attribute("HOST_IP", "host.ip", Experimental),
    Entry::attribute("HOST_MAC", "host.mac", Experimental),
    Entry::attribute("HOST_NAME", "host.name", Experimental),
    Entry::attribute("HOST_TYPE", "host.type", Experimental),
    Entry::attribute("MAINFRAME_LPAR_NAME", "mainframe.lpar.name", Experimental),
    Entry::attribute("OS_BUILD_ID", "os.build_id", Experimental),
    Entry::attribute("OS_DESCRIPTION", "os.description", Experimental),
    Entry::attribute("OS_NAME", "os.name", Experimental),
    Entry::attribute("OS_TYPE", "os.type", Experimental),
    Entry::value("OS_TYPE_VALUE_WINDOWS", "os.type", "windows", Experimental),
    Entry::value("OS_TYPE_VALUE_LINUX", "os.type", "linux", Experimental),
    Entry::value("OS_TYPE_VALUE_DARWIN", "os.type", "darwin", Experimental),
    Entry::value("OS_TYPE_VALUE_FREEBSD", "os.type", "freebsd", Experimental),
    Entry::value("OS_TYPE_VALUE_NETBSD", "os.type", "netbsd", Experimental),
    Entry::value("OS_TYPE_VALUE_OPENBSD", "os.type", "openbsd", Experimental),
    Entry::value("OS_TYPE_VALUE_DRAGONFLYBSD", "os.type", "dragonflybsd", Experimental),
    Entry::value("OS_TYPE_VALUE_HPUX", "os.type", "hpux", Experimental),
    Entry::value("OS_TYPE_VALUE_AIX", "os.type", "aix", Experimental),
    Entry::value("OS_TYPE_VALUE_SOLARIS", "os.type", "solaris", Experimental),
    Entry::value("OS_TYPE_VALUE_Z_OS", "os.type", "z_os", Experimental).deprecated(Renamed("zos")),
    Entry::value("OS_TYPE_VALUE_ZOS", "os.type", "zos", Experimental),
    Entry::attribute("OS_VERSION", "os.version", Experimental),
    Entry::attribute("ZOS_SMF_ID", "zos.smf.id", Experimental),
    Entry::attribute("ZOS_SYSPLEX_NAME", "zos.sysplex.name", Experimental),
];
