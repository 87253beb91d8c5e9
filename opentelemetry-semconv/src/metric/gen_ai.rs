// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `gen_ai` namespace.

use crate::registry::{Entry, Instrument::*, Stability::*};

/// GenAI operation duration
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_CLIENT_OPERATION_DURATION: &str = "gen_ai.client.operation.duration";

/// Measures number of input and output tokens used
///
/// Instrument: `histogram`. Unit: `{token}`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_CLIENT_TOKEN_USAGE: &str = "gen_ai.client.token.usage";

/// Generative AI server request duration such as time-to-last byte or last output token
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SERVER_REQUEST_DURATION: &str = "gen_ai.server.request.duration";

/// Time per output token generated after the first token for successful responses
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SERVER_TIME_PER_OUTPUT_TOKEN: &str = "gen_ai.server.time_per_output_token";

/// Time to generate first token for successful responses
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SERVER_TIME_TO_FIRST_TOKEN: &str = "gen_ai.server.time_to_first_token";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "GEN_AI_CLIENT_OPERATION_DURATION",
        "gen_ai.client.operation.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "GEN_AI_CLIENT_TOKEN_USAGE",
        "gen_ai.client.token.usage",
        Histogram,
        "{token}",
        Experimental,
    ),
    Entry::metric(
        "GEN_AI_SERVER_REQUEST_DURATION",
        "gen_ai.server.request.duration",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "GEN_AI_SERVER_TIME_PER_OUTPUT_TOKEN",
        "gen_ai.server.time_per_output_token",
        Histogram,
        "s",
        Experimental,
    ),
    Entry::metric(
        "GEN_AI_SERVER_TIME_TO_FIRST_TOKEN",
        "gen_ai.server.time_to_first_token",
        Histogram,
        "s",
        Experimental,
    ),
];
