// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

/// The semantic conventions release these constants were generated from.
pub const SEMCONV_VERSION: &str = "1.36.0";

/// The schema URL matching [`SEMCONV_VERSION`].
pub const SCHEMA_URL: &str = "https://opentelemetry.io/schemas/1.36.0";
