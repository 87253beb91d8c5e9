// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! # Metric Semantic Conventions
//!
//! Instrument names defined by the semantic conventions, grouped into one
//! module per domain and re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry_semconv::metric;
//!
//! assert_eq!(
//!     metric::HTTP_SERVER_REQUEST_DURATION,
//!     "http.server.request.duration"
//! );
//! ```

pub mod aspnetcore;
pub mod azure;
pub mod cicd;
pub mod container;
pub mod db;
pub mod faas;
pub mod gen_ai;
pub mod http;
pub mod hw;
pub mod k8s;
pub mod messaging;
pub mod network;
pub mod otel;
pub mod process;
pub mod rpc;
pub mod runtime;
pub mod system;
pub mod vcs;

pub use self::aspnetcore::*;
#[cfg(feature = "semconv_experimental")]
pub use self::azure::*;
#[cfg(feature = "semconv_experimental")]
pub use self::cicd::*;
#[cfg(feature = "semconv_experimental")]
pub use self::container::*;
pub use self::db::*;
#[cfg(feature = "semconv_experimental")]
pub use self::faas::*;
#[cfg(feature = "semconv_experimental")]
pub use self::gen_ai::*;
pub use self::http::*;
#[cfg(feature = "semconv_experimental")]
pub use self::hw::*;
#[cfg(feature = "semconv_experimental")]
pub use self::k8s::*;
#[cfg(feature = "semconv_experimental")]
pub use self::messaging::*;
#[cfg(feature = "semconv_experimental")]
pub use self::network::*;
#[cfg(feature = "semconv_experimental")]
pub use self::otel::*;
#[cfg(feature = "semconv_experimental")]
pub use self::process::*;
#[cfg(feature = "semconv_experimental")]
pub use self::rpc::*;
pub use self::runtime::*;
#[cfg(feature = "semconv_experimental")]
pub use self::system::*;
#[cfg(feature = "semconv_experimental")]
pub use self::vcs::*;

pub(crate) static DOMAINS: &[&[crate::registry::Entry]] = &[
    aspnetcore::ENTRIES,
    azure::ENTRIES,
    cicd::ENTRIES,
    container::ENTRIES,
    db::ENTRIES,
    faas::ENTRIES,
    gen_ai::ENTRIES,
    http::ENTRIES,
    hw::ENTRIES,
    k8s::ENTRIES,
    messaging::ENTRIES,
    network::ENTRIES,
    otel::ENTRIES,
    process::ENTRIES,
    rpc::ENTRIES,
    runtime::ENTRIES,
    system::ENTRIES,
    vcs::ENTRIES,
];
