// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `artifact` namespace.

use crate::registry::{Entry, Stability::*};

/// The provenance filename of the built attestation which directly relates to the build artifact filename.
///
/// Type: `string`. Examples: `"golang-binary-amd64-v0.1.0.attestation"`, `"docker-image-amd64-v0.1.0.intoto.json1"`, `"release-1.tar.gz.attestation"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_ATTESTATION_FILENAME: &str = "artifact.attestation.filename";

/// The full hash value of the built attestation.
///
/// Type: `string`. Examples: `"1b31dfcd5b7f9267bf2ff47651df1cfb9147b9e4df1f335accf65b4cda498408"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_ATTESTATION_HASH: &str = "artifact.attestation.hash";

/// The id of the build software attestation.
///
/// Type: `string`. Examples: `"123"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_ATTESTATION_ID: &str = "artifact.attestation.id";

/// The human readable file name of the artifact, typically generated during build and release processes.
///
/// Type: `string`. Examples: `"golang-binary-amd64-v0.1.0"`, `"docker-image-amd64-v0.1.0"`, `"release-1.tar.gz"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_FILENAME: &str = "artifact.filename";

/// The full hash value, often found in checksum.txt on a release of the artifact and used to verify package integrity.
///
/// Type: `string`. Examples: `"9ff4c52759e2c4ac70b7d517bc7fcdc1cda631ca0045271ddd1b192544f8a3e9"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_HASH: &str = "artifact.hash";

/// The Package URL of the package artifact.
///
/// Type: `string`. Examples: `"pkg:github/package-url/purl-spec@1209109710924"`, `"pkg:npm/foo@12.12.3"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_PURL: &str = "artifact.purl";

/// The version of the artifact.
///
/// Type: `string`. Examples: `"v0.1.0"`, `"1.2.1"`, `"122691-build"`.
#[cfg(feature = "semconv_experimental")]
pub const ARTIFACT_VERSION: &str = "artifact.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute(
        "ARTIFACT_ATTESTATION_FILENAME",
        "artifact.attestation.filename",
        Experimental,
    ),
    Entry::attribute("ARTIFACT_ATTESTATION_HASH", "artifact.attestation.hash", Experimental),
    Entry::attribute("ARTIFACT_ATTESTATION_ID", "artifact.attestation.id", Experimental),
    Entry::attribute("ARTIFACT_FILENAME", "artifact.filename", Experimental),
    Entry::attribute("ARTIFACT_HASH", "artifact.hash", Experimental),
    Entry::attribute("ARTIFACT_PURL", "artifact.purl", Experimental),
    Entry::attribute("ARTIFACT_VERSION", "artifact.version", Experimental),
];
