// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `error`, `exception` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// A message providing more detail about an error in human-readable form.
///
/// Type: `string`. Examples: `"Unexpected input type: string"`, `"The user has exceeded their storage quota"`.
#[cfg(feature = "semconv_experimental")]
pub const ERROR_MESSAGE: &str = "error.message";

/// Describes a class of error the operation ended with.
///
/// Type: `string`. Examples: `"timeout"`, `"java.net.UnknownHostException"`, `"server_certificate_invalid"`, `"500"`.
pub const ERROR_TYPE: &str = "error.type";

/// A fallback error value to be used when the instrumentation doesn't define a custom value.
pub const ERROR_TYPE_VALUE_OTHER: &str = "_OTHER";

semconv_enum! {
    /// Values of [`ERROR_TYPE`].
    ErrorType for ERROR_TYPE {
        /// A fallback error value to be used when the instrumentation doesn't define a custom value.
        Other = "_OTHER",
    }
}

/// Indicates that the exception is escaping the scope of the span.
///
/// Type: `boolean`.
#[deprecated(note = "It's no longer recommended to record exceptions that are handled and do not escape the scope of a span.")]
pub const EXCEPTION_ESCAPED: &str = "exception.escaped";

/// The exception message.
///
/// Type: `string`. Examples: `"Division by zero"`, `"Can't convert 'int' object to str implicitly"`.
pub const EXCEPTION_MESSAGE: &str = "exception.message";

/// A stacktrace as a string in the natural representation for the language runtime. The representation is to be determined and documented by each language SIG.
///
/// Type: `string`. Examples: `"Exception in thread \"main\" java.lang.RuntimeException: Test exception\\n at com.example.GenerateTrace.methodB(GenerateTrace.java:13)"`.
pub const EXCEPTION_STACKTRACE: &str = "exception.stacktrace";

/// The type of the exception (its fully-qualified class name, if applicable). The dynamic type of the exception should be preferred over the static type in languages that support it.
///
/// Type: `string`. Examples: `"java.net.ConnectException"`, `"OSError"`.
pub const EXCEPTION_TYPE: &str = "exception.type";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("ERROR_MESSAGE", "error.message", Experimental),
    Entry::attribute("ERROR_TYPE", "error.type", Stable),
    Entry::value("ERROR_TYPE_VALUE_OTHER", "error.type", "_OTHER", Stable),
    Entry::attribute("EXCEPTION_ESCAPED", "exception.escaped", Stable).deprecated(Obsoleted),
    Entry::attribute("EXCEPTION_MESSAGE", "exception.message", Stable),
    Entry::attribute("EXCEPTION_STACKTRACE", "exception.stacktrace", Stable),
    Entry::attribute("EXCEPTION_TYPE", "exception.type", Stable),
];
