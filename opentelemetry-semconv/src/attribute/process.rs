// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `process` namespace.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Length of the process.command_args array
///
/// Type: `int`. Examples: `4`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_ARGS_COUNT: &str = "process.args_count";

/// The command used to launch the process (i.e. the command name).
///
/// Type: `string`. Examples: `"cmd/otelcol"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_COMMAND: &str = "process.command";

/// All the command arguments (including the command/executable itself) as received by the process.
///
/// Type: `string[]`. Examples: `["cmd/otecol", "--config=config.yaml"]`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_COMMAND_ARGS: &str = "process.command_args";

/// The full command used to launch the process as a single string representing the full command.
///
/// Type: `string`. Examples: `"C:\\cmd\\otecol --config=\"my directory\\config.yaml\""`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_COMMAND_LINE: &str = "process.command_line";

/// Specifies whether the context switches for this data point were voluntary or involuntary.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CONTEXT_SWITCH_TYPE: &str = "process.context_switch_type";

/// voluntary
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CONTEXT_SWITCH_TYPE_VALUE_VOLUNTARY: &str = "voluntary";

/// involuntary
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CONTEXT_SWITCH_TYPE_VALUE_INVOLUNTARY: &str = "involuntary";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`PROCESS_CONTEXT_SWITCH_TYPE`].
    ProcessContextSwitchType for PROCESS_CONTEXT_SWITCH_TYPE {
        /// voluntary
        Voluntary = "voluntary",
        /// involuntary
        Involuntary = "involuntary",
    }
}

/// Deprecated, use `cpu.mode` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.mode`.")]
pub const PROCESS_CPU_STATE: &str = "process.cpu.state";

/// system
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CPU_STATE_VALUE_SYSTEM: &str = "system";

/// user
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CPU_STATE_VALUE_USER: &str = "user";

/// wait
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CPU_STATE_VALUE_WAIT: &str = "wait";

/// The date and time the process was created, in ISO 8601 format.
///
/// Type: `string`. Examples: `"2023-11-21T09:25:34.853Z"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_CREATION_TIME: &str = "process.creation.time";

/// Process environment variables, `<key>` being the environment variable name, the value being the environment variable value.
///
/// Type: `template[string]`. Examples: `"ubuntu"`, `"/usr/local/bin:/usr/bin"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_ENVIRONMENT_VARIABLE: &str = "process.environment_variable";

/// Builds a [`PROCESS_ENVIRONMENT_VARIABLE`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn process_environment_variable(key: &str) -> String {
    crate::templated(PROCESS_ENVIRONMENT_VARIABLE, key)
}

/// The GNU build ID as found in the `.note.gnu.build-id` ELF section (hex string).
///
/// Type: `string`. Examples: `"c89b11207f6479603b0d49bf291c092c2b719293"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXECUTABLE_BUILD_ID_GNU: &str = "process.executable.build_id.gnu";

/// The Go build ID as retrieved by `go tool buildid <go executable>`.
///
/// Type: `string`. Examples: `"foh3mEXu7BLZjsN9pOwG/kATcXlYVCDEFouRMQed_/WwRFB1hPo9LBkekthSPG/x8hMC8emW2cCjXD0_1aY"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXECUTABLE_BUILD_ID_GO: &str = "process.executable.build_id.go";

/// Profiling specific build ID for executables.
///
/// Type: `string`. Examples: `"600DCAFE4A110000F2BF38C493F5FB92"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXECUTABLE_BUILD_ID_HTLHASH: &str = "process.executable.build_id.htlhash";

/// Deprecated, use `process.executable.build_id.htlhash` instead.
///
/// Type: `string`. Examples: `"600DCAFE4A110000F2BF38C493F5FB92"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `process.executable.build_id.htlhash`.")]
pub const PROCESS_EXECUTABLE_BUILD_ID_PROFILING: &str = "process.executable.build_id.profiling";

/// The name of the process executable.
///
/// Type: `string`. Examples: `"otelcol"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXECUTABLE_NAME: &str = "process.executable.name";

/// The full path to the process executable.
///
/// Type: `string`. Examples: `"/usr/bin/cmd/otelcol"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXECUTABLE_PATH: &str = "process.executable.path";

/// The exit code of the process.
///
/// Type: `int`. Examples: `127`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXIT_CODE: &str = "process.exit.code";

/// The date and time the process exited, in ISO 8601 format.
///
/// Type: `string`. Examples: `"2023-11-21T09:26:12.315Z"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_EXIT_TIME: &str = "process.exit.time";

/// The PID of the process's group leader. This is also the process group ID (PGID) of the process.
///
/// Type: `int`. Examples: `23`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_GROUP_LEADER_PID: &str = "process.group_leader.pid";

/// Whether the process is connected to an interactive shell.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_INTERACTIVE: &str = "process.interactive";

/// The control group associated with the process.
///
/// Type: `string`. Examples: `"1:name=systemd:/user.slice/user-1000.slice/session-3.scope"`, `"0::/user.slice/user-1000.slice/user@1000.service/tmux-spawn-0267755b-4639-4a27-90ed-f19f88e53748.scope"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_LINUX_CGROUP: &str = "process.linux.cgroup";

/// The username of the user that owns the process.
///
/// Type: `string`. Examples: `"root"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_OWNER: &str = "process.owner";

/// The type of page fault for this data point. Type `major` is for major/hard page faults, and `minor` is for minor/soft page faults.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_PAGING_FAULT_TYPE: &str = "process.paging.fault_type";

/// major
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_PAGING_FAULT_TYPE_VALUE_MAJOR: &str = "major";

/// minor
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_PAGING_FAULT_TYPE_VALUE_MINOR: &str = "minor";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`PROCESS_PAGING_FAULT_TYPE`].
    ProcessPagingFaultType for PROCESS_PAGING_FAULT_TYPE {
        /// major
        Major = "major",
        /// minor
        Minor = "minor",
    }
}

/// Parent Process identifier (PPID).
///
/// Type: `int`. Examples: `111`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_PARENT_PID: &str = "process.parent_pid";

/// Process identifier (PID).
///
/// Type: `int`. Examples: `1234`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_PID: &str = "process.pid";

/// The real user ID (RUID) of the process.
///
/// Type: `int`. Examples: `1000`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_REAL_USER_ID: &str = "process.real_user.id";

/// The username of the real user of the process.
///
/// Type: `string`. Examples: `"operator"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_REAL_USER_NAME: &str = "process.real_user.name";

/// An additional description about the runtime of the process, for example a specific vendor customization of the runtime environment.
///
/// Type: `string`. Examples: `"Eclipse OpenJ9 Eclipse OpenJ9 VM openj9-0.21.0"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_RUNTIME_DESCRIPTION: &str = "process.runtime.description";

/// The name of the runtime of this process.
///
/// Type: `string`. Examples: `"OpenJDK Runtime Environment"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_RUNTIME_NAME: &str = "process.runtime.name";

/// The version of the runtime of this process, as returned by the runtime without modification.
///
/// Type: `string`. Examples: `"14.0.2"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_RUNTIME_VERSION: &str = "process.runtime.version";

/// The saved user ID (SUID) of the process.
///
/// Type: `int`. Examples: `1002`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_SAVED_USER_ID: &str = "process.saved_user.id";

/// The username of the saved user.
///
/// Type: `string`. Examples: `"operator"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_SAVED_USER_NAME: &str = "process.saved_user.name";

/// The PID of the process's session leader. This is also the session ID (SID) of the process.
///
/// Type: `int`. Examples: `14`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_SESSION_LEADER_PID: &str = "process.session_leader.pid";

/// The process state, e.g., Linux Process State Codes
///
/// Type: `string`. Examples: `"running"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_STATE: &str = "process.state";

/// running
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_STATE_VALUE_RUNNING: &str = "running";

/// sleeping
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_STATE_VALUE_SLEEPING: &str = "sleeping";

/// stopped
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_STATE_VALUE_STOPPED: &str = "stopped";

/// defunct
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_STATE_VALUE_DEFUNCT: &str = "defunct";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`PROCESS_STATE`].
    ProcessState for PROCESS_STATE {
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

/// Process title (proctitle)
///
/// Type: `string`. Examples: `"cat /etc/hostname"`, `"xfce4-session"`, `"bash"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_TITLE: &str = "process.title";

/// The effective user ID (EUID) of the process.
///
/// Type: `int`. Examples: `1001`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_USER_ID: &str = "process.user.id";

/// The username of the effective user of the process.
///
/// Type: `string`. Examples: `"root"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_USER_NAME: &str = "process.user.name";

/// Virtual process identifier.
///
/// Type: `int`. Examples: `12`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_VPID: &str = "process.vpid";

/// The working directory of the process.
///
/// Type: `string`. Examples: `"/root"`.
#[cfg(feature = "semconv_experimental")]
pub const PROCESS_WORKING_DIRECTORY: &str = "process.working_directory";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("PROCESS_ARGS_COUNT", "process.args_count", Experimental),
    Entry::attribute("PROCESS_COMMAND", "process.command", Experimental),
    Entry::attribute("PROCESS_COMMAND_ARGS", "process.command_args", Experimental),
    Entry::attribute("PROCESS_COMMAND_LINE", "process.command_line", Experimental),
    Entry::attribute("PROCESS_CONTEXT_SWITCH_TYPE", "process.context_switch_type", Experimental),
    Entry::value(
        "PROCESS_CONTEXT_SWITCH_TYPE_VALUE_VOLUNTARY",
        "process.context_switch_type",
        "voluntary",
        Experimental,
    ),
    Entry::value(
        "PROCESS_CONTEXT_SWITCH_TYPE_VALUE_INVOLUNTARY",
        "process.context_switch_type",
        "involuntary",
        Experimental,
    ),
    Entry::attribute("PROCESS_CPU_STATE", "process.cpu.state", Experimental)
        .deprecated(Renamed("cpu.mode")),
    Entry::value("PROCESS_CPU_STATE_VALUE_SYSTEM", "process.cpu.state", "system", Experimental),
    Entry::value("PROCESS_CPU_STATE_VALUE_USER", "process.cpu.state", "user", Experimental),
    Entry::value("PROCESS_CPU_STATE_VALUE_WAIT", "process.cpu.state", "wait", Experimental),
    Entry::attribute("PROCESS_CREATION_TIME", "process.creation.time", Experimental),
    Entry::template("PROCESS_ENVIRONMENT_VARIABLE", "process.environment_variable", Experimental),
    Entry::attribute(
        "PROCESS_EXECUTABLE_BUILD_ID_GNU",
        "process.executable.build_id.gnu",
        Experimental,
    ),
    Entry::attribute(
        "PROCESS_EXECUTABLE_BUILD_ID_GO",
        "process.executable.build_id.go",
        Experimental,
    ),
    Entry::attribute(
        "PROCESS_EXECUTABLE_BUILD_ID_HTLHASH",
        "process.executable.build_id.htlhash",
        Experimental,
    ),
    Entry::attribute(
        "PROCESS_EXECUTABLE_BUILD_ID_PROFILING",
        "process.executable.build_id.profiling",
        Experimental,
    )
    .deprecated(Renamed("process.executable.build_id.htlhash")),
    Entry::attribute("PROCESS_EXECUTABLE_NAME", "process.executable.name", Experimental),
    Entry::attribute("PROCESS_EXECUTABLE_PATH", "process.executable.path", Experimental),
    Entry::attribute("PROCESS_EXIT_CODE", "process.exit.code", Experimental),
    Entry::attribute("PROCESS_EXIT_TIME", "process.exit.time", Experimental),
    Entry::attribute("PROCESS_GROUP_LEADER_PID", "process.group_leader.pid", Experimental),
    Entry::attribute("PROCESS_INTERACTIVE", "process.interactive", Experimental),
    Entry::attribute("PROCESS_LINUX_CGROUP", "process.linux.cgroup", Experimental),
    Entry::attribute("PROCESS_OWNER", "process.owner", Experimental),
    Entry::attribute("PROCESS_PAGING_FAULT_TYPE", "process.paging.fault_type", Experimental),
    Entry::value(
        "PROCESS_PAGING_FAULT_TYPE_VALUE_MAJOR",
        "process.paging.fault_type",
        "major",
        Experimental,
    ),
    Entry::value(
        "PROCESS_PAGING_FAULT_TYPE_VALUE_MINOR",
        "process.paging.fault_type",
        "minor",
        Experimental,
    ),
    Entry::attribute("PROCESS_PARENT_PID", "process.parent_pid", Experimental),
    Entry::attribute("PROCESS_PID", "process.pid", Experimental),
    Entry::attribute("PROCESS_REAL_USER_ID", "process.real_user.id", Experimental),
    Entry::attribute("PROCESS_REAL_USER_NAME", "process.real_user.name", Experimental),
    Entry::attribute("PROCESS_RUNTIME_DESCRIPTION", "process.runtime.description", Experimental),
    Entry::attribute("PROCESS_RUNTIME_NAME", "process.runtime.name", Experimental),
    Entry::attribute("PROCESS_RUNTIME_VERSION", "process.runtime.version", Experimental),
    Entry::attribute("PROCESS_SAVED_USER_ID", "process.saved_user.id", Experimental),
    Entry::attribute("PROCESS_SAVED_USER_NAME", "process.saved_user.name", Experimental),
    Entry::attribute("PROCESS_SESSION_LEADER_PID", "process.session_leader.pid", Experimental),
    Entry::attribute("PROCESS_STATE", "process.state", Experimental),
    Entry::value("PROCESS_STATE_VALUE_RUNNING", "process.state", "running", Experimental),
    Entry::value("PROCESS_STATE_VALUE_SLEEPING", "process.state", "sleeping", Experimental),
    Entry::value("PROCESS_STATE_VALUE_STOPPED", "process.state", "stopped", Experimental),
    Entry::value("PROCESS_STATE_VALUE_DEFUNCT", "process.state", "defunct", Experimental),
    Entry::attribute("PROCESS_TITLE", "process.title", Experimental),
    Entry::attribute("PROCESS_USER_ID", "process.user.id", Experimental),
    Entry::attribute("PROCESS_USER_NAME", "process.user.name", Experimental),
    Entry::attribute("PROCESS_VPID", "process.vpid", Experimental),
    Entry::attribute("PROCESS_WORKING_DIRECTORY", "process.working_directory", Experimental),
];
