// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `code`, `thread`, `profile` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Deprecated, use `code.column.number`
///
/// Type: `int`. Examples: `16`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `code.column.number`.")]
pub const CODE_COLUMN: &str = "code.column";

/// The column number in `code.file.path` best representing the operation. It SHOULD point within the code unit named in `code.function.name`.
///
/// Type: `int`. Examples: `16`.
pub const CODE_COLUMN_NUMBER: &str = "code.column.number";

/// The source code file name that identifies the code unit as uniquely as possible (preferably an absolute file path).
///
/// Type: `string`. Examples: `"/usr/local/MyApplication/content_root/app/index.php"`.
pub const CODE_FILE_PATH: &str = "code.file.path";

/// Deprecated, use `code.file.path` instead
///
/// Type: `string`. Examples: `"/usr/local/MyApplication/content_root/app/index.php"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `code.file.path`.")]
pub const CODE_FILEPATH: &str = "code.filepath";

/// Deprecated, use `code.function.name` instead
///
/// Type: `string`. Examples: `"serveRequest"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `code.function.name`.")]
pub const CODE_FUNCTION: &str = "code.function";

/// The method or function fully-qualified name without arguments. The value should fit the natural representation of the language runtime, which is also likely the same used within `code.stacktrace` attribute value.
///
/// Type: `string`. Examples: `"com.example.MyHttpService.serveRequest"`, `"GuzzleHttp\\Client::transfer"`, `"fopen"`.
pub const CODE_FUNCTION_NAME: &str = "code.function.name";

/// The line number in `code.file.path` best representing the operation. It SHOULD point within the code unit named in `code.function.name`.
///
/// Type: `int`. Examples: `42`.
pub const CODE_LINE_NUMBER: &str = "code.line.number";

/// Deprecated, use `code.line.number` instead
///
/// Type: `int`. Examples: `42`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `code.line.number`.")]
pub const CODE_LINENO: &str = "code.lineno";

/// Deprecated, namespace is now included into `code.function.name`
///
/// Type: `string`. Examples: `"com.example.MyHttpService"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Value should be included in `code.function.name` which is expected to be a fully-qualified name.")]
pub const CODE_NAMESPACE: &str = "code.namespace";

/// A stacktrace as a string in the natural representation for the language runtime. The representation is identical to `exception.stacktrace`.
///
/// Type: `string`. Examples: `"at com.example.GenerateTrace.methodB(GenerateTrace.java:13)\\n at com.example.GenerateTrace.methodA(GenerateTrace.java:9)\\n at com.example.GenerateTrace.main(GenerateTrace.java:5)"`.
pub const CODE_STACKTRACE: &str = "code.stacktrace";

/// Describes the interpreter or compiler of a single frame.
///
/// Type: `string`. Examples: `"cpython"`.
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE: &str = "profile.frame.type";

/// .NET
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_DOTNET: &str = "dotnet";

/// JVM
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_JVM: &str = "jvm";

/// Kernel
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_KERNEL: &str = "kernel";

/// Can be one of but not limited to C, C++, Go or Rust.
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_NATIVE: &str = "native";

/// Perl
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_PERL: &str = "perl";

/// PHP
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_PHP: &str = "php";

/// Python
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_CPYTHON: &str = "cpython";

/// Ruby
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_RUBY: &str = "ruby";

/// V8JS
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_V8JS: &str = "v8js";

/// Erlang
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_BEAM: &str = "beam";

/// Go, with stack unwinding support.
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_GO: &str = "go";

/// Rust
#[cfg(feature = "semconv_experimental")]
pub const PROFILE_FRAME_TYPE_VALUE_RUST: &str = "rust";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`PROFILE_FRAME_TYPE`].
    ProfileFrameType for PROFILE_FRAME_TYPE {
        /// .NET
        Dotnet = "dotnet",
        /// JVM
        Jvm = "jvm",
        /// Kernel
        Kernel = "kernel",
        /// Can be one of but not limited to C, C++, Go or Rust.
        Native = "native",
        /// Perl
        Perl = "perl",
        /// PHP
        Php = "php",
        /// Python
        Cpython = "cpython",
        /// Ruby
        Ruby = "ruby",
        /// V8JS
        V8js = "v8js",
        /// Erlang
        Beam = "beam",
        /// Go, with stack unwinding support.
        Go = "go",
        /// Rust
        Rust = "rust",
    }
}

/// Current "managed" thread ID (as opposed to OS thread ID).
///
/// Type: `int`. Examples: `42`.
#[cfg(feature = "semconv_experimental")]
pub const THREAD_ID: &str = "thread.id";

/// Current thread name.
///
/// Type: `string`. Examples: `"main"`.
#[cfg(feature = "semconv_experimental")]
pub const THREAD_NAME: &str = "thread.name";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CODE_COLUMN", "code.column", Experimental)
        .deprecated(Renamed("code.column.number")),
    Entry::attribute("CODE_COLUMN_NUMBER", "code.column.number", Stable),
    Entry::attribute("CODE_FILE_PATH", "code.file.path", Stable),
    Entry::attribute("CODE_FILEPATH", "code.filepath", Experimental)
        .deprecated(Renamed("code.file.path")),
    Entry::attribute("CODE_FUNCTION", "code.function", Experimental)
        .deprecated(Renamed("code.function.name")),
    Entry::attribute("CODE_FUNCTION_NAME", "code.function.name", Stable),
    Entry::attribute("CODE_LINE_NUMBER", "code.line.number", Stable),
    Entry::attribute("CODE_LINENO", "code.lineno", Experimental)
        .deprecated(Renamed("code.line.number")),
    Entry::attribute("CODE_NAMESPACE", "code.namespace", Experimental).deprecated(Obsoleted),
    Entry::attribute("CODE_STACKTRACE", "code.stacktrace", Stable),
    Entry::attribute("PROFILE_FRAME_TYPE", "profile.frame.type", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_DOTNET", "profile.frame.type", "dotnet", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_JVM", "profile.frame.type", "jvm", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_KERNEL", "profile.frame.type", "kernel", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_NATIVE", "profile.frame.type", "native", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_PERL", "profile.frame.type", "perl", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_PHP", "profile.frame.type", "php", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_CPYTHON", "profile.frame.type", "cpython", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_RUBY", "profile.frame.type", "ruby", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_V8JS", "profile.frame.type", "v8js", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_BEAM", "profile.frame.type", "beam", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_GO", "profile.frame.type", "go", Experimental),
    Entry::value("PROFILE_FRAME_TYPE_VALUE_RUST", "profile.frame.type", "rust", Experimental),
    Entry::attribute("THREAD_ID", "thread.id", Experimental),
    Entry::attribute("THREAD_NAME", "thread.name", Experimental),
];
