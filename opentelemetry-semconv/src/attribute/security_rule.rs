// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `security_rule` namespace.

use crate::registry::{Entry, Stability::*};

/// A categorization value keyword used by the entity using the rule for detection of this event
///
/// Type: `string`. Examples: `"Attempted Information Leak"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_CATEGORY: &str = "security_rule.category";

/// The description of the rule generating the event.
///
/// Type: `string`. Examples: `"Block requests to public DNS over HTTPS / TLS protocols"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_DESCRIPTION: &str = "security_rule.description";

/// Name of the license under which the rule used to generate this event is made available.
///
/// Type: `string`. Examples: `"Apache 2.0"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_LICENSE: &str = "security_rule.license";

/// The name of the rule or signature generating the event.
///
/// Type: `string`. Examples: `"BLOCK_DNS_over_TLS"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_NAME: &str = "security_rule.name";

/// Reference URL to additional information about the rule used to generate this event.
///
/// Type: `string`. Examples: `"https://en.wikipedia.org/wiki/DNS_over_TLS"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_REFERENCE: &str = "security_rule.reference";

/// Name of the ruleset, policy, group, or parent category in which the rule used to generate this event is a member.
///
/// Type: `string`. Examples: `"Standard_Protocol_Filters"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_RULESET_NAME: &str = "security_rule.ruleset.name";

/// A rule ID that is unique within the scope of a set or group of agents, observers, or other entities using the rule for detection of this event.
///
/// Type: `string`. Examples: `"550e8400-e29b-41d4-a716-446655440000"`, `"1100110011"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_UUID: &str = "security_rule.uuid";

/// The version / revision of the rule being used for analysis.
///
/// Type: `string`. Examples: `"1.0.0"`.
#[cfg(feature = "semconv_experimental")]
pub const SECURITY_RULE_VERSION: &str = "security_rule.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("SECURITY_RULE_CATEGORY", "security_rule.category", Experimental),
    Entry::attribute("SECURITY_RULE_DESCRIPTION", "security_rule.description", Experimental),
    Entry::attribute("SECURITY_RULE_LICENSE", "security_rule.license", Experimental),
    Entry::attribute("SECURITY_RULE_NAME", "security_rule.name", Experimental),
    Entry::attribute("SECURITY_RULE_REFERENCE", "security_rule.reference", Experimental),
    Entry::attribute("SECURITY_RULE_RULESET_NAME", "security_rule.ruleset.name", Experimental),
    Entry::attribute("SECURITY_RULE_UUID", "security_rule.uuid", Experimental),
    Entry::attribute("SECURITY_RULE_VERSION", "security_rule.version", Experimental),
];
