// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `file` namespace.

use crate::registry::{Entry, Stability::*};

/// Time when the file was last accessed, in ISO 8601 format.
///
/// This attribute might not be supported by some file systems (NFS, FAT32, in embedded OS, etc.).
///
/// Type: `string`. Examples: `"2021-01-01T12:00:00Z"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_ACCESSED: &str = "file.accessed";

/// Array of file attributes.
///
/// Attributes names depend on the OS or file system. Here's a non-exhaustive list of values expected for this attribute: `archive`, `compressed`, `directory`, `encrypted`, `execute`, `hidden`, `immutable`, `journaled`, `read`, `readonly`, `symbolic link`, `system`, `temporary`, `write`.
///
/// Type: `string[]`. Examples: `["readonly", "hidden"]`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_ATTRIBUTES: &str = "file.attributes";

/// Time when the file attributes or metadata was last changed, in ISO 8601 format.
///
/// `file.changed` captures the time when any of the file's properties or attributes (including the content) are changed, while `file.modified` captures the timestamp when the file content is modified.
///
/// Type: `string`. Examples: `"2021-01-01T12:00:00Z"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_CHANGED: &str = "file.changed";

/// Time when the file was created, in ISO 8601 format.
///
/// This attribute might not be supported by some file systems (NFS, FAT32, in embedded OS, etc.).
///
/// Type: `string`. Examples: `"2021-01-01T12:00:00Z"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_CREATED: &str = "file.created";

/// Directory where the file is located. It should include the drive letter, when appropriate.
///
/// Type: `string`. Examples: `"/home/user"`, `"C:\\Program Files\\MyApp"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_DIRECTORY: &str = "file.directory";

/// File extension, excluding the leading dot.
///
/// When the file name has multiple extensions (example.tar.gz), only the last one should be captured ("gz", not "tar.gz").
///
/// Type: `string`. Examples: `"png"`, `"gz"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_EXTENSION: &str = "file.extension";

/// Name of the fork. A fork is additional data associated with a filesystem object.
///
/// On Linux, a resource fork is used to store additional data with a filesystem object. A file always has at least one fork for the data portion, and additional forks may exist.
/// On NTFS, this is analogous to an Alternate Data Stream (ADS), and the default data stream for a file is just called $DATA. Zone.Identifier is commonly used by Windows to track contents downloaded from the Internet. An ADS is typically of the form: `C:\path\to\filename.extension:some_fork_name`, and `some_fork_name` is the value that should populate `fork_name`. `filename.extension` should populate `file.name`, and `extension` should populate `file.extension`. The full path, `file.path`, will include the fork name.
///
/// Type: `string`. Examples: `"Zone.Identifer"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_FORK_NAME: &str = "file.fork_name";

/// Primary Group ID (GID) of the file.
///
/// Type: `string`. Examples: `"1000"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_GROUP_ID: &str = "file.group.id";

/// Primary group name of the file.
///
/// Type: `string`. Examples: `"users"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_GROUP_NAME: &str = "file.group.name";

/// Inode representing the file in the filesystem.
///
/// Type: `string`. Examples: `"256383"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_INODE: &str = "file.inode";

/// Mode of the file in octal representation.
///
/// Type: `string`. Examples: `"0640"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_MODE: &str = "file.mode";

/// Time when the file content was last modified, in ISO 8601 format.
///
/// Type: `string`. Examples: `"2021-01-01T12:00:00Z"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_MODIFIED: &str = "file.modified";

/// Name of the file including the extension, without the directory.
///
/// Type: `string`. Examples: `"example.png"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_NAME: &str = "file.name";

/// The user ID (UID) or security identifier (SID) of the file owner.
///
/// Type: `string`. Examples: `"1000"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_OWNER_ID: &str = "file.owner.id";

/// Username of the file owner.
///
/// Type: `string`. Examples: `"root"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_OWNER_NAME: &str = "file.owner.name";

/// Full path to the file, including the file name. It should include the drive letter, when appropriate.
///
/// Type: `string`. Examples: `"/home/alice/example.png"`, `"C:\\Program Files\\MyApp\\myapp.exe"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_PATH: &str = "file.path";

/// File size in bytes.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_SIZE: &str = "file.size";

/// Path to the target of a symbolic link.
///
/// This attribute is only applicable to symbolic links.
///
/// Type: `string`. Examples: `"/usr/bin/python3"`.
#[cfg(feature = "semconv_experimental")]
pub const FILE_SYMBOLIC_LINK_TARGET_PATH: &str = "file.symbolic_link.target_path";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("FILE_ACCESSED", "file.accessed", Experimental),
    Entry::attribute("FILE_ATTRIBUTES", "file.attributes", Experimental),
    Entry::attribute("FILE_CHANGED", "file.changed", Experimental),
    Entry::attribute("FILE_CREATED", "file.created", Experimental),
    Entry::attribute("FILE_DIRECTORY", "file.directory", Experimental),
    Entry::attribute("FILE_EXTENSION", "file.extension", Experimental),
    Entry::attribute("FILE_FORK_NAME", "file.fork_name", Experimental),
    Entry::attribute("FILE_GROUP_ID", "file.group.id", Experimental),
    Entry::attribute("FILE_GROUP_NAME", "file.group.name", Experimental),
    Entry::attribute("FILE_INODE", "file.inode", Experimental),
    Entry::attribute("FILE_MODE", "file.mode", Experimental),
    Entry::attribute("FILE_MODIFIED", "file.modified", Experimental),
    Entry::attribute("FILE_NAME", "file.name", Experimental),
    Entry::attribute("FILE_OWNER_ID", "file.owner.id", Experimental),
    Entry::attribute("FILE_OWNER_NAME", "file.owner.name", Experimental),
    Entry::attribute("FILE_PATH", "file.path", Experimental),
    Entry::attribute("FILE_SIZE", "file.size", Experimental),
    Entry::attribute(
        "FILE_SYMBOLIC_LINK_TARGET_PATH",
        "file.symbolic_link.target_path",
        Experimental,
    ),
];
