// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `http`, `url`, `user_agent` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Deprecated, use `client.address` instead.
///
/// Type: `string`. Examples: `"83.164.160.102"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `client.address`.")]
pub const HTTP_CLIENT_IP: &str = "http.client_ip";

/// State of the HTTP connection in the HTTP connection pool.
///
/// Type: `string`. Examples: `"active"`, `"idle"`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CONNECTION_STATE: &str = "http.connection.state";

/// active state.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CONNECTION_STATE_VALUE_ACTIVE: &str = "active";

/// idle state.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CONNECTION_STATE_VALUE_IDLE: &str = "idle";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`HTTP_CONNECTION_STATE`].
    HttpConnectionState for HTTP_CONNECTION_STATE {
        /// active state.
        Active = "active",
        /// idle state.
        Idle = "idle",
    }
}

/// Deprecated, use `network.protocol.name` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.protocol.name`.")]
pub const HTTP_FLAVOR: &str = "http.flavor";

/// HTTP/1.0
#[cfg(feature = "semconv_experimental")]
pub const HTTP_FLAVOR_VALUE_HTTP_1_0: &str = "1.0";

/// HTTP/1.1
#[cfg(feature = "semconv_experimental")]
pub const HTTP_FLAVOR_VALUE_HTTP_1_1: &str = "1.1";

/// HTTP/2
#[cfg(feature = "semconv_experimental")]
pub const HTTP_FLAVOR_VALUE_HTTP_2_0: &str = "2.0";

/// HTTP/3
#[cfg(feature = "semconv_experimental")]
pub const HTTP_FLAVOR_VALUE_HTTP_3_0: &str = "3.0";

/// SPDY protocol.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_FLAVOR_VALUE_SPDY: &str = "SPDY";

/// QUIC protocol.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_FLAVOR_VALUE_QUIC: &str = "QUIC";

/// Deprecated, use one of `server.address`, `client.address` or `http.request.header.host` instead, depending on the usage.
///
/// Type: `string`. Examples: `"www.example.org"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by one of `server.address`, `client.address` or `http.request.header.host`, depending on the usage.")]
pub const HTTP_HOST: &str = "http.host";

/// Deprecated, use `http.request.method` instead.
///
/// Type: `string`. Examples: `"GET"`, `"POST"`, `"HEAD"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.method`.")]
pub const HTTP_METHOD: &str = "http.method";

/// The size of the request payload body in bytes. This is the number of bytes transferred excluding headers and is often, but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length) header. For requests using transport encoding, this should be the compressed size.
///
/// Type: `int`. Examples: `3495`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_REQUEST_BODY_SIZE: &str = "http.request.body.size";

/// HTTP request headers, `<key>` being the normalized HTTP Header name (lowercase), the value being the header values.
///
/// Type: `template[string[]]`. Examples: `["application/json"]`, `["1.2.3.4", "1.2.3.5"]`.
pub const HTTP_REQUEST_HEADER: &str = "http.request.header";

/// Builds a [`HTTP_REQUEST_HEADER`] key for `key`.
pub fn http_request_header(key: &str) -> String {
    crate::templated(HTTP_REQUEST_HEADER, key)
}

/// HTTP request method.
///
/// HTTP request method value SHOULD be "known" to the instrumentation. Methods the
/// instrumentation does not know MUST be reported as `_OTHER`.
///
/// Type: `string`. Examples: `"GET"`, `"POST"`, `"HEAD"`.
pub const HTTP_REQUEST_METHOD: &str = "http.request.method";

/// CONNECT method.
pub const HTTP_REQUEST_METHOD_VALUE_CONNECT: &str = "CONNECT";

/// DELETE method.
pub const HTTP_REQUEST_METHOD_VALUE_DELETE: &str = "DELETE";

/// GET method.
pub const HTTP_REQUEST_METHOD_VALUE_GET: &str = "GET";

/// HEAD method.
pub const HTTP_REQUEST_METHOD_VALUE_HEAD: &str = "HEAD";

/// OPTIONS method.
pub const HTTP_REQUEST_METHOD_VALUE_OPTIONS: &str = "OPTIONS";

/// PATCH method.
pub const HTTP_REQUEST_METHOD_VALUE_PATCH: &str = "PATCH";

/// POST method.
pub const HTTP_REQUEST_METHOD_VALUE_POST: &str = "POST";

/// PUT method.
pub const HTTP_REQUEST_METHOD_VALUE_PUT: &str = "PUT";

/// TRACE method.
pub const HTTP_REQUEST_METHOD_VALUE_TRACE: &str = "TRACE";

/// QUERY method.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_REQUEST_METHOD_VALUE_QUERY: &str = "QUERY";

/// Any HTTP method that the instrumentation has no prior knowledge of.
pub const HTTP_REQUEST_METHOD_VALUE_OTHER: &str = "_OTHER";

semconv_enum! {
    /// Values of [`HTTP_REQUEST_METHOD`].
    HttpRequestMethod for HTTP_REQUEST_METHOD {
        /// CONNECT method.
        Connect = "CONNECT",
        /// DELETE method.
        Delete = "DELETE",
        /// GET method.
        Get = "GET",
        /// HEAD method.
        Head = "HEAD",
        /// OPTIONS method.
        Options = "OPTIONS",
        /// PATCH method.
        Patch = "PATCH",
        /// POST method.
        Post = "POST",
        /// PUT method.
        Put = "PUT",
        /// TRACE method.
        Trace = "TRACE",
        /// QUERY method.
        Query = "QUERY",
        /// Any HTTP method that the instrumentation has no prior knowledge of.
        Other = "_OTHER",
    }
}

/// Original HTTP method sent by the client in the request line.
///
/// Type: `string`. Examples: `"GeT"`, `"ACL"`, `"foo"`.
pub const HTTP_REQUEST_METHOD_ORIGINAL: &str = "http.request.method_original";

/// The ordinal number of request resending attempt (for any reason, including redirects).
///
/// Type: `int`. Examples: `3`.
pub const HTTP_REQUEST_RESEND_COUNT: &str = "http.request.resend_count";

/// The total size of the request in bytes. This should be the total number of bytes sent over the wire, including the request line (HTTP/1.1), framing (HTTP/2 and HTTP/3), headers, and request body if any.
///
/// Type: `int`. Examples: `1437`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_REQUEST_SIZE: &str = "http.request.size";

/// Deprecated, use `http.request.header.content-length` instead.
///
/// Type: `int`. Examples: `3495`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.header.content-length`.")]
pub const HTTP_REQUEST_CONTENT_LENGTH: &str = "http.request_content_length";

/// Deprecated, use `http.request.body.size` instead.
///
/// Type: `int`. Examples: `5493`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.body.size`.")]
pub const HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED: &str =
    "http.request_content_length_uncompressed";

/// The size of the response payload body in bytes. This is the number of bytes transferred excluding headers and is often, but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length) header. For requests using transport encoding, this should be the compressed size.
///
/// Type: `int`. Examples: `3495`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_RESPONSE_BODY_SIZE: &str = "http.response.body.size";

/// HTTP response headers, `<key>` being the normalized HTTP Header name (lowercase), the value being the header values.
///
/// Type: `template[string[]]`. Examples: `["application/json"]`, `["abc", "def"]`.
pub const HTTP_RESPONSE_HEADER: &str = "http.response.header";

/// Builds a [`HTTP_RESPONSE_HEADER`] key for `key`.
pub fn http_response_header(key: &str) -> String {
    crate::templated(HTTP_RESPONSE_HEADER, key)
}

/// The total size of the response in bytes. This should be the total number of bytes sent over the wire, including the status line (HTTP/1.1), framing (HTTP/2 and HTTP/3), headers, and response body and trailers if any.
///
/// Type: `int`. Examples: `1437`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_RESPONSE_SIZE: &str = "http.response.size";

/// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
///
/// Type: `int`. Examples: `200`.
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";

/// Deprecated, use `http.response.header.content-length` instead.
///
/// Type: `int`. Examples: `3495`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.header.content-length`.")]
pub const HTTP_RESPONSE_CONTENT_LENGTH: &str = "http.response_content_length";

/// Deprecated, use `http.response.body.size` instead.
///
/// Type: `int`. Examples: `5493`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.body.size`.")]
pub const HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED: &str =
    "http.response_content_length_uncompressed";

/// The matched route, that is, the path template in the format used by the respective server framework.
///
/// Type: `string`. Examples: `"/users/:userID?"`, `"{controller}/{action}/{id?}"`.
pub const HTTP_ROUTE: &str = "http.route";

/// Deprecated, use `url.scheme` instead.
///
/// Type: `string`. Examples: `"http"`, `"https"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `url.scheme`.")]
pub const HTTP_SCHEME: &str = "http.scheme";

/// Deprecated, use `server.address` instead.
///
/// Type: `string`. Examples: `"example.com"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address`.")]
pub const HTTP_SERVER_NAME: &str = "http.server_name";

/// Deprecated, use `http.response.status_code` instead.
///
/// Type: `int`. Examples: `200`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.status_code`.")]
pub const HTTP_STATUS_CODE: &str = "http.status_code";

/// Deprecated, use `url.path` and `url.query` instead.
///
/// Type: `string`. Examples: `"/search?q=OpenTelemetry#SemConv"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Split to `url.path` and `url.query`.")]
pub const HTTP_TARGET: &str = "http.target";

/// Deprecated, use `url.full` instead.
///
/// Type: `string`. Examples: `"https://www.foo.bar/search?q=OpenTelemetry#SemConv"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `url.full`.")]
pub const HTTP_URL: &str = "http.url";

/// Deprecated, use `user_agent.original` instead.
///
/// Type: `string`. Examples: `"CERN-LineMode/2.15 libwww/2.17b3"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `user_agent.original`.")]
pub const HTTP_USER_AGENT: &str = "http.user_agent";

/// Domain extracted from the `url.full`, such as "opentelemetry.io".
///
/// Type: `string`. Examples: `"www.foo.bar"`, `"opentelemetry.io"`, `"3.12.167.2"`, `[1080:0:0:0:8:800:200C:417A]`.
#[cfg(feature = "semconv_experimental")]
pub const URL_DOMAIN: &str = "url.domain";

/// The file extension extracted from the `url.full`, excluding the leading dot.
///
/// Type: `string`. Examples: `"png"`, `"gz"`.
#[cfg(feature = "semconv_experimental")]
pub const URL_EXTENSION: &str = "url.extension";

/// The [URI fragment](https://www.rfc-editor.org/rfc/rfc3986#section-3.5) component
///
/// Type: `string`. Examples: `"SemConv"`.
pub const URL_FRAGMENT: &str = "url.fragment";

/// Absolute URL describing a network resource according to [RFC3986](https://www.rfc-editor.org/rfc/rfc3986)
///
/// Type: `string`. Examples: `"https://www.foo.bar/search?q=OpenTelemetry#SemConv"`, `"//localhost"`.
pub const URL_FULL: &str = "url.full";

/// Unmodified original URL as seen in the event source.
///
/// Type: `string`. Examples: `"https://www.foo.bar/search?q=OpenTelemetry#SemConv"`, `"search?q=OpenTelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const URL_ORIGINAL: &str = "url.original";

/// The [URI path](https://www.rfc-editor.org/rfc/rfc3986#section-3.3) component
///
/// Type: `string`. Examples: `"/search"`.
pub const URL_PATH: &str = "url.path";

/// Port extracted from the `url.full`
///
/// Type: `int`. Examples: `443`.
#[cfg(feature = "semconv_experimental")]
pub const URL_PORT: &str = "url.port";

/// The [URI query](https://www.rfc-editor.org/rfc/rfc3986#section-3.4) component
///
/// Type: `string`. Examples: `"q=OpenTelemetry"`.
pub const URL_QUERY: &str = "url.query";

/// The highest registered url domain, stripped of the subdomain.
///
/// Type: `string`. Examples: `"example.com"`, `"foo.co.uk"`.
#[cfg(feature = "semconv_experimental")]
pub const URL_REGISTERED_DOMAIN: &str = "url.registered_domain";

/// The [URI scheme](https://www.rfc-editor.org/rfc/rfc3986#section-3.1) component identifying the used protocol.
///
/// Type: `string`. Examples: `"https"`, `"ftp"`, `"telnet"`.
pub const URL_SCHEME: &str = "url.scheme";

/// The subdomain portion of a fully qualified domain name includes all of the names except the host name under the registered_domain. In a partially qualified domain, or if the qualification level of the full name cannot be determined, subdomain contains all of the names below the registered domain.
///
/// Type: `string`. Examples: `"east"`, `"sub2.sub1"`.
#[cfg(feature = "semconv_experimental")]
pub const URL_SUBDOMAIN: &str = "url.subdomain";

/// The low-cardinality template of an [absolute path reference](https://www.rfc-editor.org/rfc/rfc3986#section-4.2).
///
/// Type: `string`. Examples: `"/users/{id}"`, `"/users/:id"`, `"/users?id={id}"`.
#[cfg(feature = "semconv_experimental")]
pub const URL_TEMPLATE: &str = "url.template";

/// The effective top level domain (eTLD), also known as the domain suffix, is the last part of the domain name. For example, the top level domain for example.com is `com`.
///
/// Type: `string`. Examples: `"com"`, `"co.uk"`.
#[cfg(feature = "semconv_experimental")]
pub const URL_TOP_LEVEL_DOMAIN: &str = "url.top_level_domain";

/// Name of the user-agent extracted from original. Usually refers to the browser's name.
///
/// Type: `string`. Examples: `"Safari"`, `"YourApp"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_NAME: &str = "user_agent.name";

/// Value of the [HTTP User-Agent](https://www.rfc-editor.org/rfc/rfc9110.html#field.user-agent) header sent by the client.
///
/// Type: `string`. Examples: `"CERN-LineMode/2.15 libwww/2.17b3"`, `"YourApp/1.0.0 grpc-java-okhttp/1.27.2"`.
pub const USER_AGENT_ORIGINAL: &str = "user_agent.original";

/// Human readable operating system name.
///
/// Type: `string`. Examples: `"iOS"`, `"Android"`, `"Ubuntu"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_OS_NAME: &str = "user_agent.os.name";

/// The version string of the operating system as defined in [Version Attributes](/docs/resource/README.md#version-attributes).
///
/// Type: `string`. Examples: `"14.2.1"`, `"18.04.1"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_OS_VERSION: &str = "user_agent.os.version";

/// Specifies the category of synthetic traffic, such as tests or bots.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_SYNTHETIC_TYPE: &str = "user_agent.synthetic.type";

/// Bot source.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_SYNTHETIC_TYPE_VALUE_BOT: &str = "bot";

/// Synthetic test source.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_SYNTHETIC_TYPE_VALUE_TEST: &str = "test";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`USER_AGENT_SYNTHETIC_TYPE`].
    UserAgentSyntheticType for USER_AGENT_SYNTHETIC_TYPE {
        /// Bot source.
        Bot = "bot",
        /// Synthetic test source.
        Test = "test",
    }
}

/// Version of the user-agent extracted from original. Usually refers to the browser's version
///
/// Type: `string`. Examples: `"14.1.2"`, `"1.0.0"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_VERSION: &str = "user_agent.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("HTTP_CLIENT_IP", "http.client_ip", Experimental)
        .deprecated(Renamed("client.address")),
    Entry::attribute("HTTP_CONNECTION_STATE", "http.connection.state", Experimental),
    Entry::value(
        "HTTP_CONNECTION_STATE_VALUE_ACTIVE",
        "http.connection.state",
        "active",
        Experimental,
    ),
    Entry::value("HTTP_CONNECTION_STATE_VALUE_IDLE", "http.connection.state", "idle", Experimental),
    Entry::attribute("HTTP_FLAVOR", "http.flavor", Experimental)
        .deprecated(Renamed("network.protocol.name")),
    Entry::value("HTTP_FLAVOR_VALUE_HTTP_1_0", "http.flavor", "1.0", Experimental),
    Entry::value("HTTP_FLAVOR_VALUE_HTTP_1_1", "http.flavor", "1.1", Experimental),
    Entry::value("HTTP_FLAVOR_VALUE_HTTP_2_0", "http.flavor", "2.0", Experimental),
    Entry::value("HTTP_FLAVOR_VALUE_HTTP_3_0", "http.flavor", "3.0", Experimental),
    Entry::value("HTTP_FLAVOR_VALUE_SPDY", "http.flavor", "SPDY", Experimental),
    Entry::value("HTTP_FLAVOR_VALUE_QUIC", "http.flavor", "QUIC", Experimental),
    Entry::attribute("HTTP_HOST", "http.host", Experimental).deprecated(Uncategorized),
    Entry::attribute("HTTP_METHOD", "http.method", Experimental)
        .deprecated(Renamed("http.request.method")),
    Entry::attribute("HTTP_REQUEST_BODY_SIZE", "http.request.body.size", Experimental),
    Entry::template("HTTP_REQUEST_HEADER", "http.request.header", Stable),
    Entry::attribute("HTTP_REQUEST_METHOD", "http.request.method", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_CONNECT", "http.request.method", "CONNECT", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_DELETE", "http.request.method", "DELETE", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_GET", "http.request.method", "GET", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_HEAD", "http.request.method", "HEAD", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_OPTIONS", "http.request.method", "OPTIONS", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_PATCH", "http.request.method", "PATCH", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_POST", "http.request.method", "POST", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_PUT", "http.request.method", "PUT", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_TRACE", "http.request.method", "TRACE", Stable),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_QUERY", "http.request.method", "QUERY", Experimental),
    Entry::value("HTTP_REQUEST_METHOD_VALUE_OTHER", "http.request.method", "_OTHER", Stable),
    Entry::attribute("HTTP_REQUEST_METHOD_ORIGINAL", "http.request.method_original", Stable),
    Entry::attribute("HTTP_REQUEST_RESEND_COUNT", "http.request.resend_count", Stable),
    Entry::attribute("HTTP_REQUEST_SIZE", "http.request.size", Experimental),
    Entry::attribute("HTTP_REQUEST_CONTENT_LENGTH", "http.request_content_length", Experimental)
        .deprecated(Uncategorized),
    Entry::attribute(
        "HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED",
        "http.request_content_length_uncompressed",
        Experimental,
    )
    .deprecated(Renamed("http.request.body.size")),
    Entry::attribute("HTTP_RESPONSE_BODY_SIZE", "http.response.body.size", Experimental),
    Entry::template("HTTP_RESPONSE_HEADER", "http.response.header", Stable),
    Entry::attribute("HTTP_RESPONSE_SIZE", "http.response.size", Experimental),
    Entry::attribute("HTTP_RESPONSE_STATUS_CODE", "http.response.status_code", Stable),
    Entry::attribute("HTTP_RESPONSE_CONTENT_LENGTH", "http.response_content_length", Experimental)
        .deprecated(Uncategorized),
    Entry::attribute(
        "HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED",
        "http.response_content_length_uncompressed",
        Experimental,
    )
    .deprecated(Renamed("http.response.body.size")),
    Entry::attribute("HTTP_ROUTE", "http.route", Stable),
    Entry::attribute("HTTP_SCHEME", "http.scheme", Experimental).deprecated(Renamed("url.scheme")),
    Entry::attribute("HTTP_SERVER_NAME", "http.server_name", Experimental)
        .deprecated(Renamed("server.address")),
    Entry::attribute("HTTP_STATUS_CODE", "http.status_code", Experimental)
        .deprecated(Renamed("http.response.status_code")),
    Entry::attribute("HTTP_TARGET", "http.target", Experimental).deprecated(Uncategorized),
    Entry::attribute("HTTP_URL", "http.url", Experimental).deprecated(Renamed("url.full")),
    Entry::attribute("HTTP_USER_AGENT", "http.user_agent", Experimental)
        .deprecated(Renamed("user_agent.original")),
    Entry::attribute("URL_DOMAIN", "url.domain", Experimental),
    Entry::attribute("URL_EXTENSION", "url.extension", Experimental),
    Entry::attribute("URL_FRAGMENT", "url.fragment", Stable),
    Entry::attribute("URL_FULL", "url.full", Stable),
    Entry::attribute("URL_ORIGINAL", "url.original", Experimental),
    Entry::attribute("URL_PATH", "url.path", Stable),
    Entry::attribute("URL_PORT", "url.port", Experimental),
    Entry::attribute("URL_QUERY", "url.query", Stable),
    Entry::attribute("URL_REGISTERED_DOMAIN", "url.registered_domain", Experimental),
    Entry::attribute("URL_SCHEME", "url.scheme", Stable),
    Entry::attribute("URL_SUBDOMAIN", "url.subdomain", Experimental),
    Entry::attribute("URL_TEMPLATE", "url.template", Experimental),
    Entry::attribute("URL_TOP_LEVEL_DOMAIN", "url.top_level_domain", Experimental),
    Entry::attribute("USER_AGENT_NAME", "user_agent.name", Experimental),
    Entry::attribute("USER_AGENT_ORIGINAL", "user_agent.original", Stable),
    Entry::attribute("USER_AGENT_OS_NAME", "user_agent.os.name", Experimental),
    Entry::attribute("USER_AGENT_OS_VERSION", "user_agent.os.version", Experimental),
    Entry::attribute("USER_AGENT_SYNTHETIC_TYPE", "user_agent.synthetic.type", Experimental),
    Entry::value(
        "USER_AGENT_SYNTHETIC_TYPE_VALUE_BOT",
        "user_agent.synthetic.type",
        "bot",
        Experimental,
    ),
    Entry::value(
        "USER_AGENT_SYNTHETIC_TYPE_VALUE_TEST",
        "user_agent.synthetic.type",
        "test",
        Experimental,
    ),
    Entry::attribute("USER_AGENT_VERSION", "user_agent.version", Experimental),
];
