// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `dns` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// Measures the time taken to perform a DNS lookup.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DNS_LOOKUP_DURATION: &str = "dns.lookup.duration";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric("DNS_LOOKUP_DURATION", "dns.lookup.duration", Histogram, "s", Experimental),
];
