// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `service`, `deployment` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Deprecated, use `deployment.environment.name` instead.
///
/// Type: `string`. Examples: `"staging"`, `"production"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `deployment.environment.name`.")]
pub const DEPLOYMENT_ENVIRONMENT: &str = "deployment.environment";

/// Name of the deployment environment (aka deployment tier).
///
/// Type: `string`. Examples: `"staging"`, `"production"`.
#[cfg(feature = "semconv_experimental")]
pub const DEPLOYMENT_ENVIRONMENT_NAME: &str = "deployment.environment.name";

/// The id of the deployment.
///
/// Type: `string`. Examples: `"1208"`.
#[cfg(feature = "semconv_experimental")]
pub const DEPLOYMENT_ID: &str = "deployment.id";

/// The name of the deployment.
///
/// Type: `string`. Examples: `"deploy my app"`, `"deploy-frontend"`.
#[cfg(feature = "semconv_experimental")]
pub const DEPLOYMENT_NAME: &str = "deployment.name";

/// The status of the deployment.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const DEPLOYMENT_STATUS: &str = "deployment.status";

/// failed
#[cfg(feature = "semconv_experimental")]
pub const DEPLOYMENT_STATUS_VALUE_FAILED: &str = "failed";

/// succeeded
#[cfg(feature = "semconv_experimental")]
pub const DEPLOYMENT_STATUS_VALUE_SUCCEEDED: &str = "succeeded";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`DEPLOYMENT_STATUS`].
    DeploymentStatus for DEPLOYMENT_STATUS {
        /// failed
        Failed = "failed",
        /// succeeded
        Succeeded = "succeeded",
    }
}

/// The string ID of the service instance.
///
/// Type: `string`. Examples: `"627cc493-f310-47de-96bd-71410b7dec09"`.
#[cfg(feature = "semconv_experimental")]
pub const SERVICE_INSTANCE_ID: &str = "service.instance.id";

/// Logical name of the service.
///
/// Type: `string`. Examples: `"shoppingcart"`.
pub const SERVICE_NAME: &str = "service.name";

/// A namespace for `service.name`.
///
/// Type: `string`. Examples: `"Shop"`.
#[cfg(feature = "semconv_experimental")]
pub const SERVICE_NAMESPACE: &str = "service.namespace";

/// The version string of the service API or implementation. The format is not defined by these conventions.
///
/// Type: `string`. Examples: `"2.0.0"`, `"a01dbef8a"`.
pub const SERVICE_VERSION: &str = "service.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("DEPLOYMENT_ENVIRONMENT", "deployment.environment", Experimental)
        .deprecated(Renamed("deployment.environment.name")),
    Entry::attribute("DEPLOYMENT_ENVIRONMENT_NAME", "deployment.environment.name", Experimental),
    Entry::attribute("DEPLOYMENT_ID", "deployment.id", Experimental),
    Entry::attribute("DEPLOYMENT_NAME", "deployment.name", Experimental),
    Entry::attribute("DEPLOYMENT_STATUS", "deployment.status", Experimental),
    Entry::value("DEPLOYMENT_STATUS_VALUE_FAILED", "deployment.status", "failed", Experimental),
    Entry::value(
        "DEPLOYMENT_STATUS_VALUE_SUCCEEDED",
        "deployment.status",
        "succeeded",
        Experimental,
    ),
    Entry::attribute("SERVICE_INSTANCE_ID", "service.instance.id", Experimental),
    Entry::attribute("SERVICE_NAME", "service.name", Stable),
    Entry::attribute("SERVICE_NAMESPACE", "service.namespace", Experimental),
    Entry::attribute("SERVICE_VERSION", "service.version", Stable),
];
