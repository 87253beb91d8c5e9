// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `cicd` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// The number of pipeline runs currently active in the system by state.
///
/// Instrument: `updowncounter`. Unit: `{run}`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_ACTIVE: &str = "cicd.pipeline.run.active";

/// Duration of a pipeline run grouped by pipeline, state and result.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_DURATION: &str = "cicd.pipeline.run.duration";

/// The number of errors encountered in pipeline runs (eg. compile, test failures).
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_ERRORS: &str = "cicd.pipeline.run.errors";

/// The number of errors in a component of the CICD system (eg. controller, scheduler, agent).
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_SYSTEM_ERRORS: &str = "cicd.system.errors";

/// The number of workers on the CICD system by state.
///
/// Instrument: `updowncounter`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_COUNT: &str = "cicd.worker.count";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "CICD_PIPELINE_RUN_ACTIVE",
        "cicd.pipeline.run.active",
        UpDownCounter,
        "{run}",
        Experimental,
    ),
    Entry::metric(
        "CICD_PIPELINE_RUN_DURATION",
        "cicd.pipeline.run.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "CICD_PIPELINE_RUN_ERRORS",
        "cicd.pipeline.run.errors",
        Counter,
        "{error}",
        Experimental,
    ),
    Entry::metric("CICD_SYSTEM_ERRORS", "cicd.system.errors", Counter, "{error}", Experimental),
    Entry::metric("CICD_WORKER_COUNT", "cicd.worker.count", UpDownCounter, "{count}", Experimental),
];
