// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `feature_flag` namespace.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The unique identifier for the flag evaluation context. For example, the targeting key.
///
/// Type: `string`. Examples: `"5157782b-2203-4c80-a857-dbbd5e7761db"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_CONTEXT_ID: &str = "feature_flag.context.id";

/// Deprecated, use `error.message` instead.
///
/// Type: `string`. Examples: `"Flag header-color expected type string but found type number"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `error.message`.")]
pub const FEATURE_FLAG_EVALUATION_ERROR_MESSAGE: &str = "feature_flag.evaluation.error.message";

/// Deprecated, use `feature_flag.result.reason` instead.
///
/// Type: `string`. Examples: `"static"`, `"targeting_match"`, `"error"`, `"default"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `feature_flag.result.reason`.")]
pub const FEATURE_FLAG_EVALUATION_REASON: &str = "feature_flag.evaluation.reason";

/// The resolved value is static (no dynamic evaluation).
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_STATIC: &str = "static";

/// The resolved value fell back to a pre-configured value (no dynamic evaluation occurred or dynamic evaluation yielded no result).
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_DEFAULT: &str = "default";

/// The resolved value was the result of a dynamic evaluation, such as a rule or specific user-targeting.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_TARGETING_MATCH: &str = "targeting_match";

/// The resolved value was the result of pseudorandom assignment.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_SPLIT: &str = "split";

/// The resolved value was retrieved from cache.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_CACHED: &str = "cached";

/// The resolved value was the result of the flag being disabled in the management system.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_DISABLED: &str = "disabled";

/// The reason for the resolved value could not be determined.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_UNKNOWN: &str = "unknown";

/// The resolved value is non-authoritative or possibly out of date
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_STALE: &str = "stale";

/// The resolved value was the result of an error.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION_REASON_VALUE_ERROR: &str = "error";

/// The lookup key of the feature flag.
///
/// Type: `string`. Examples: `"logo-color"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_KEY: &str = "feature_flag.key";

/// Identifies the feature flag provider.
///
/// Type: `string`. Examples: `"Flag Manager"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_PROVIDER_NAME: &str = "feature_flag.provider.name";

/// The reason code which shows how a feature flag value was determined.
///
/// Type: `string`. Examples: `"static"`, `"targeting_match"`, `"error"`, `"default"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON: &str = "feature_flag.result.reason";

/// The resolved value is static (no dynamic evaluation).
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_STATIC: &str = "static";

/// The resolved value fell back to a pre-configured value (no dynamic evaluation occurred or dynamic evaluation yielded no result).
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_DEFAULT: &str = "default";

/// The resolved value was the result of a dynamic evaluation, such as a rule or specific user-targeting.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_TARGETING_MATCH: &str = "targeting_match";

/// The resolved value was the result of pseudorandom assignment.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_SPLIT: &str = "split";

/// The resolved value was retrieved from cache.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_CACHED: &str = "cached";

/// The resolved value was the result of the flag being disabled in the management system.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_DISABLED: &str = "disabled";

/// The reason for the resolved value could not be determined.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_UNKNOWN: &str = "unknown";

/// The resolved value is non-authoritative or possibly out of date
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_STALE: &str = "stale";

/// The resolved value was the result of an error.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_REASON_VALUE_ERROR: &str = "error";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`FEATURE_FLAG_RESULT_REASON`].
    FeatureFlagResultReason for FEATURE_FLAG_RESULT_REASON {
        /// The resolved value is static (no dynamic evaluation).
        Static = "static",
        /// The resolved value fell back to a pre-configured value (no dynamic evaluation occurred or dynamic evaluation yielded no result).
        Default = "default",
        /// The resolved value was the result of a dynamic evaluation, such as a rule or specific user-targeting.
        TargetingMatch = "targeting_match",
        /// The resolved value was the result of pseudorandom assignment.
        Split = "split",
        /// The resolved value was retrieved from cache.
        Cached = "cached",
        /// The resolved value was the result of the flag being disabled in the management system.
        Disabled = "disabled",
        /// The reason for the resolved value could not be determined.
        Unknown = "unknown",
        /// The resolved value is non-authoritative or possibly out of date
        Stale = "stale",
        /// The resolved value was the result of an error.
        Error = "error",
    }
}

/// The evaluated value of the feature flag.
///
/// Type: `any`. Examples: `#ff0000`, `true`, `3`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_VALUE: &str = "feature_flag.result.value";

/// A semantic identifier for an evaluated flag value.
///
/// Type: `string`. Examples: `"red"`, `"true"`, `"on"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_RESULT_VARIANT: &str = "feature_flag.result.variant";

/// The identifier of the flag set to which the feature flag belongs.
///
/// Type: `string`. Examples: `"proj-1"`, `"ab98sgs"`, `"service1/dev"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_SET_ID: &str = "feature_flag.set.id";

/// Deprecated, use `feature_flag.result.variant` instead.
///
/// Type: `string`. Examples: `"red"`, `"true"`, `"on"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `feature_flag.result.variant`.")]
pub const FEATURE_FLAG_VARIANT: &str = "feature_flag.variant";

/// The version of the ruleset used during the evaluation. This may be any stable value which uniquely identifies the ruleset.
///
/// Type: `string`. Examples: `"1"`, `"01ABCDEF"`.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_VERSION: &str = "feature_flag.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("FEATURE_FLAG_CONTEXT_ID", "feature_flag.context.id", Experimental),
    Entry::attribute(
        "FEATURE_FLAG_EVALUATION_ERROR_MESSAGE",
        "feature_flag.evaluation.error.message",
        Experimental,
    )
    .deprecated(Renamed("error.message")),
    Entry::attribute(
        "FEATURE_FLAG_EVALUATION_REASON",
        "feature_flag.evaluation.reason",
        Experimental,
    )
    .deprecated(Renamed("feature_flag.result.reason")),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_STATIC",
        "feature_flag.evaluation.reason",
        "static",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_DEFAULT",
        "feature_flag.evaluation.reason",
        "default",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_TARGETING_MATCH",
        "feature_flag.evaluation.reason",
        "targeting_match",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_SPLIT",
        "feature_flag.evaluation.reason",
        "split",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_CACHED",
        "feature_flag.evaluation.reason",
        "cached",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_DISABLED",
        "feature_flag.evaluation.reason",
        "disabled",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_UNKNOWN",
        "feature_flag.evaluation.reason",
        "unknown",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_STALE",
        "feature_flag.evaluation.reason",
        "stale",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_EVALUATION_REASON_VALUE_ERROR",
        "feature_flag.evaluation.reason",
        "error",
        Experimental,
    ),
    Entry::attribute("FEATURE_FLAG_KEY", "feature_flag.key", Experimental),
    Entry::attribute("FEATURE_FLAG_PROVIDER_NAME", "feature_flag.provider.name", Experimental),
    Entry::attribute("FEATURE_FLAG_RESULT_REASON", "feature_flag.result.reason", Experimental),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_STATIC",
        "feature_flag.result.reason",
        "static",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_DEFAULT",
        "feature_flag.result.reason",
        "default",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_TARGETING_MATCH",
        "feature_flag.result.reason",
        "targeting_match",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_SPLIT",
        "feature_flag.result.reason",
        "split",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_CACHED",
        "feature_flag.result.reason",
        "cached",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_DISABLED",
        "feature_flag.result.reason",
        "disabled",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_UNKNOWN",
        "feature_flag.result.reason",
        "unknown",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_STALE",
        "feature_flag.result.reason",
        "stale",
        Experimental,
    ),
    Entry::value(
        "FEATURE_FLAG_RESULT_REASON_VALUE_ERROR",
        "feature_flag.result.reason",
        "error",
        Experimental,
    ),
    Entry::attribute("FEATURE_FLAG_RESULT_VALUE", "feature_flag.result.value", Experimental),
    Entry::attribute("FEATURE_FLAG_RESULT_VARIANT", "feature_flag.result.variant", Experimental),
    Entry::attribute("FEATURE_FLAG_SET_ID", "feature_flag.set.id", Experimental),
    Entry::attribute("FEATURE_FLAG_VARIANT", "feature_flag.variant", Experimental)
        .deprecated(Renamed("feature_flag.result.variant")),
    Entry::attribute("FEATURE_FLAG_VERSION", "feature_flag.version", Experimental),
];
