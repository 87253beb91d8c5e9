//! # OpenTelemetry Semantic Conventions
//!
//! OpenTelemetry semantic conventions are agreed standardized naming patterns
//! for OpenTelemetry things. This crate publishes them as plain Rust constants
//! so instrumentation never has to spell an attribute key or metric name by
//! hand.
//!
//! * [`attribute`]: attribute keys, the documented values of enum attributes,
//!   and one function per templated key such as `http.request.header.<key>`.
//! * [`metric`]: instrument names.
//! * [`event`]: event names.
//! * [`registry`]: the same entries as data, with their stability,
//!   deprecation and instrument metadata.
//!
//! Entries that are not yet stable upstream are only compiled with the
//! `semconv_experimental` feature. The `opentelemetry` feature adds
//! conversions from the typed enum values into `opentelemetry::KeyValue`.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry_semconv::{attribute, metric};
//!
//! assert_eq!(attribute::DB_SYSTEM_NAME, "db.system.name");
//! assert_eq!(attribute::HTTP_REQUEST_METHOD_VALUE_OTHER, "_OTHER");
//! assert_eq!(metric::HTTP_SERVER_REQUEST_DURATION, "http.server.request.duration");
//! assert_eq!(
//!     attribute::http_request_header("content-type"),
//!     "http.request.header.content-type"
//! );
//! ```
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod attribute;
pub mod event;
pub mod metric;
pub mod registry;
pub mod value;
mod version;

pub use value::{EnumValue, UnknownValue};
pub use version::{SCHEMA_URL, SEMCONV_VERSION};

/// Joins a templated attribute prefix and a caller supplied key with a `.`.
///
/// The key is used as given: it is neither validated nor escaped, so an empty
/// key yields the prefix followed by a trailing dot.
///
/// ```rust
/// use opentelemetry_semconv::{attribute, templated};
///
/// assert_eq!(
///     templated(attribute::HTTP_RESPONSE_HEADER, "x-request-id"),
///     "http.response.header.x-request-id"
/// );
/// ```
pub fn templated(prefix: &str, key: &str) -> String {
    format!("{prefix}.{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http.request.header", "content-type", "http.request.header.content-type")]
    #[case("http.response.header", "", "http.response.header.")]
    #[case("rpc.grpc.request.metadata", "a.b", "rpc.grpc.request.metadata.a.b")]
    #[case("db.operation.parameter", "ünïcödé", "db.operation.parameter.ünïcödé")]
    fn templated_joins_with_a_dot(#[case] prefix: &str, #[case] key: &str, #[case] expected: &str) {
        assert_eq!(templated(prefix, key), expected);
    }

    #[rstest]
    #[case("content", "-type")]
    #[case("", "accept")]
    #[case("x-", "")]
    fn templated_concatenation_is_associative(#[case] k1: &str, #[case] k2: &str) {
        let joined = format!("{k1}{k2}");
        assert_eq!(
            attribute::http_request_header(&joined),
            format!("{}{k2}", attribute::http_request_header(k1))
        );
    }

    #[test]
    fn schema_url_matches_version() {
        assert_eq!(
            SCHEMA_URL,
            format!("https://opentelemetry.io/schemas/{SEMCONV_VERSION}")
        );
    }
}
