// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `vcs` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// The number of changes (pull requests/merge requests/changelists) in a repository, categorized by their state (e.g. open or merged)
///
/// Instrument: `updowncounter`. Unit: `{change}`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_COUNT: &str = "vcs.change.count";

/// The time duration a change (pull request/merge request/changelist) has been in a given state.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_DURATION: &str = "vcs.change.duration";

/// The amount of time since its creation it took a change (pull request/merge request/changelist) to get the first approval.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_TIME_TO_APPROVAL: &str = "vcs.change.time_to_approval";

/// The amount of time since its creation it took a change (pull request/merge request/changelist) to get merged into the target(base) ref.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_TIME_TO_MERGE: &str = "vcs.change.time_to_merge";

/// The number of unique contributors to a repository
///
/// Instrument: `gauge`. Unit: `{contributor}`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CONTRIBUTOR_COUNT: &str = "vcs.contributor.count";

/// The number of refs of type branch or tag in a repository.
///
/// Instrument: `updowncounter`. Unit: `{ref}`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_COUNT: &str = "vcs.ref.count";

/// The number of lines added/removed in a ref (branch) relative to the ref from the `vcs.ref.base.name` attribute.
///
/// Instrument: `gauge`. Unit: `{line}`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_LINES_DELTA: &str = "vcs.ref.lines_delta";

/// The number of revisions (commits) a ref (branch) is ahead/behind the branch from the `vcs.ref.base.name` attribute
///
/// Instrument: `gauge`. Unit: `{revision}`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_REVISIONS_DELTA: &str = "vcs.ref.revisions_delta";

/// Time a ref (branch) created from the default branch (trunk) has existed. The `ref.type` attribute will always be `branch`
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_TIME: &str = "vcs.ref.time";

/// The number of repositories in an organization.
///
/// Instrument: `updowncounter`. Unit: `{repository}`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REPOSITORY_COUNT: &str = "vcs.repository.count";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("VCS_CHANGE_COUNT", "vcs.change.count", UpDownCounter, "{change}", Experimental),
    Entry::metric("VCS_CHANGE_DURATION", "vcs.change.duration", Gauge, "s", Experimental),
    Entry::metric(
        "VCS_CHANGE_TIME_TO_APPROVAL",
        "vcs.change.time_to_approval",
        Gauge,
        "s",
        Experimental,
    ),
    Entry::metric("VCS_CHANGE_TIME_TO_MERGE", "vcs.change.time_to_merge", Gauge, "s", Experimental),
    Entry::metric(
        "VCS_CONTRIBUTOR_COUNT",
        "vcs.contributor.count",
        Gauge,
        "{contributor}",
        Experimental,
    ),
    Entry::metric("VCS_REF_COUNT", "vcs.ref.count", UpDownCounter, "{ref}", Experimental),
    Entry::metric("VCS_REF_LINES_DELTA", "vcs.ref.lines_delta", Gauge, "{line}", Experimental),
    Entry::metric(
        "VCS_REF_REVISIONS_DELTA",
        "vcs.ref.revisions_delta",
        Gauge,
        "{revision}",
        Experimental,
    ),
    Entry::metric("VCS_REF_TIME", "vcs.ref.time", Gauge, "s", Experimental),
    Entry::metric(
        "VCS_REPOSITORY_COUNT",
        "vcs.repository.count",
        UpDownCounter,
        "{repository}",
        Experimental,
    ),
];
