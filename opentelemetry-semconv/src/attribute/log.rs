// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `log`, `event` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Identifies the class / type of event.
///
/// Type: `string`. Examples: `"browser.mouse.click"`, `"device.app.lifecycle"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by EventName top-level field on the LogRecord.")]
pub const EVENT_NAME: &str = "event.name";

/// The basename of the file.
///
/// Type: `string`. Examples: `"audit.log"`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_FILE_NAME: &str = "log.file.name";

/// The basename of the file, with symlinks resolved.
///
/// Type: `string`. Examples: `"uuid.log"`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_FILE_NAME_RESOLVED: &str = "log.file.name_resolved";

/// The full path to the file.
///
/// Type: `string`. Examples: `"/var/log/mysql/audit.log"`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_FILE_PATH: &str = "log.file.path";

/// The full path to the file, with symlinks resolved.
///
/// Type: `string`. Examples: `"/var/lib/docker/uuid.log"`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_FILE_PATH_RESOLVED: &str = "log.file.path_resolved";

/// The stream associated with the log.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_IOSTREAM: &str = "log.iostream";

/// Logs from stdout stream
#[cfg(feature = "semconv_experimental")]
pub const LOG_IOSTREAM_VALUE_STDOUT: &str = "stdout";

/// Events from stderr stream
#[cfg(feature = "semconv_experimental")]
pub const LOG_IOSTREAM_VALUE_STDERR: &str = "stderr";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`LOG_IOSTREAM`].
    LogIostream for LOG_IOSTREAM {
        /// Logs from stdout stream
        Stdout = "stdout",
        /// Events from stderr stream
        Stderr = "stderr",
    }
}

/// The complete original Log Record.
///
/// Type: `string`. Examples: `"77 <86>1 2015-08-06T21:58:59.694Z 192.168.2.133 inactive - - - Something happened"`, `[INFO] 8/3/24 12:34:56 Something happened`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_RECORD_ORIGINAL: &str = "log.record.original";

/// A unique identifier for the Log Record.
///
/// Type: `string`. Examples: `"01ARZ3NDEKTSV4RRFFQ69G5FAV"`.
#[cfg(feature = "semconv_experimental")]
pub const LOG_RECORD_UID: &str = "log.record.uid";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("EVENT_NAME", "event.name", Experimental).deprecated(Uncategorized),
    Entry::attribute("LOG_FILE_NAME", "log.file.name", Experimental),
    Entry::attribute("LOG_FILE_NAME_RESOLVED", "log.file.name_resolved", Experimental),
    Entry::attribute("LOG_FILE_PATH", "log.file.path", Experimental),
    Entry::attribute("LOG_FILE_PATH_RESOLVED", "log.file.path_resolved", Experimental),
    Entry::attribute("LOG_IOSTREAM", "log.iostream", Experimental),
    Entry::value("LOG_IOSTREAM_VALUE_STDOUT", "log.iostream", "stdout", Experimental),
    Entry::value("LOG_IOSTREAM_VALUE_STDERR", "log.iostream", "stderr", Experimental),
    Entry::attribute("LOG_RECORD_ORIGINAL", "log.record.original", Experimental),
    Entry::attribute("LOG_RECORD_UID", "log.record.uid", Experimental),
];
