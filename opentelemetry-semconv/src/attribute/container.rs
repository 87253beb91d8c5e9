// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `container`, `oci` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The command used to run the container (i.e. the command name).
///
/// Type: `string`. Examples: `"otelcontribcol"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_COMMAND: &str = "container.command";

/// All the command arguments (including the command/executable itself) run by the container.
///
/// Type: `string[]`. Examples: `["otelcontribcol", "--config", "config.yaml"]`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_COMMAND_ARGS: &str = "container.command_args";

/// The full command run by the container as a single string representing the full command.
///
/// Type: `string`. Examples: `"otelcontribcol --config config.yaml"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_COMMAND_LINE: &str = "container.command_line";

/// Deprecated, use `cpu.mode` instead.
///
/// Type: `string`. Examples: `"user"`, `"kernel"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cpu.mode`.")]
pub const CONTAINER_CPU_STATE: &str = "container.cpu.state";

/// When tasks of the cgroup are in user mode (Linux). When all container processes are in user mode (Windows).
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_STATE_VALUE_USER: &str = "user";

/// When CPU is used by the system (host OS)
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_STATE_VALUE_SYSTEM: &str = "system";

/// When tasks of the cgroup are in kernel mode (Linux). When all container processes are in kernel mode (Windows).
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CPU_STATE_VALUE_KERNEL: &str = "kernel";

/// The name of the CSI (Container Storage Interface) plugin used by the volume.
///
/// Type: `string`. Examples: `"pd.csi.storage.gke.io"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CSI_PLUGIN_NAME: &str = "container.csi.plugin.name";

/// The unique volume ID returned by the CSI (Container Storage Interface) plugin.
///
/// Type: `string`. Examples: `"projects/my-gcp-project/zones/my-gcp-zone/disks/my-gcp-disk"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_CSI_VOLUME_ID: &str = "container.csi.volume.id";

/// Container ID. Usually a UUID, as for example used to identify Docker containers. The UUID might be abbreviated.
///
/// Type: `string`. Examples: `"a3bf90e006b2"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_ID: &str = "container.id";

/// Runtime specific image identifier. Usually a hash algorithm followed by a UUID.
///
/// Type: `string`. Examples: `"sha256:19c92d0a00d1b66d897bceaa7319bee0dd38a10a851c60bcec9474aa3f01e50f"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_IMAGE_ID: &str = "container.image.id";

/// Name of the image the container was built on.
///
/// Type: `string`. Examples: `"gcr.io/opentelemetry/operator"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_IMAGE_NAME: &str = "container.image.name";

/// Repo digests of the container image as provided by the container runtime.
///
/// Type: `string[]`. Examples: `["example@sha256:afcc7f1ac1b49db317a7196c902e61c6c3c4607d63599ee1a82d702d249a0ccb", "internal.registry.example.com:5000/example@sha256:b69959407d21e8a062e0416bf13405bb2b71ed7a84dde4158ebafacfa06f5578"]`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_IMAGE_REPO_DIGESTS: &str = "container.image.repo_digests";

/// Container image tags.
///
/// Type: `string[]`. Examples: `["v1.27.1", "3.5.7-0"]`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_IMAGE_TAGS: &str = "container.image.tags";

/// Container labels, `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"nginx"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_LABEL: &str = "container.label";

/// Builds a [`CONTAINER_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn container_label(key: &str) -> String {
    crate::templated(CONTAINER_LABEL, key)
}

/// Deprecated, use `container.label` instead.
///
/// Type: `template[string]`. Examples: `"nginx"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `container.label`.")]
pub const CONTAINER_LABELS: &str = "container.labels";

/// Builds a [`CONTAINER_LABELS`] key for `key`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `container.label`.")]
#[allow(deprecated)]
pub fn container_labels(key: &str) -> String {
    crate::templated(CONTAINER_LABELS, key)
}

/// Container name used by container runtime.
///
/// Type: `string`. Examples: `"opentelemetry-autoconf"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_NAME: &str = "container.name";

/// Deprecated, use `container.runtime.name` instead.
///
/// Type: `string`. Examples: `"docker"`, `"containerd"`, `"rkt"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `container.runtime.name`.")]
pub const CONTAINER_RUNTIME: &str = "container.runtime";

/// A description about the runtime which could include, for example details about the CRI/API version being used or other customisations.
///
/// Type: `string`. Examples: `"docker://19.3.1 - CRI: 1.22.0"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_RUNTIME_DESCRIPTION: &str = "container.runtime.description";

/// The container runtime managing this container.
///
/// Type: `string`. Examples: `"docker"`, `"containerd"`, `"rkt"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_RUNTIME_NAME: &str = "container.runtime.name";

/// The version of the runtime of this process, as returned by the runtime without modification.
///
/// Type: `string`. Examples: `"1.0.0"`.
#[cfg(feature = "semconv_experimental")]
pub const CONTAINER_RUNTIME_VERSION: &str = "container.runtime.version";

/// The digest of the OCI image manifest. For container images specifically is the digest by which the container image is known.
///
/// Type: `string`. Examples: `"sha256:e4ca62c0d62f3e886e684806dfe9d4e0cda60d54986898173c1083856cfda0f4"`.
#[cfg(feature = "semconv_experimental")]
pub const OCI_MANIFEST_DIGEST: &str = "oci.manifest.digest";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CONTAINER_COMMAND", "container.command", Experimental),
    Entry::attribute("CONTAINER_COMMAND_ARGS", "container.command_args", Experimental),
    Entry::attribute("CONTAINER_COMMAND_LINE", "container.command_line", Experimental),
    Entry::attribute("CONTAINER_CPU_STATE", "container.cpu.state", Experimental)
        .deprecated(Renamed("cpu.mode")),
    Entry::value("CONTAINER_CPU_STATE_VALUE_USER", "container.cpu.state", "user", Experimental),
    Entry::value("CONTAINER_CPU_STATE_VALUE_SYSTEM", "container.cpu.state", "system", Experimental),
    Entry::value("CONTAINER_CPU_STATE_VALUE_KERNEL", "container.cpu.state", "kernel", Experimental),
    Entry::attribute("CONTAINER_CSI_PLUGIN_NAME", "container.csi.plugin.name", Experimental),
    Entry::attribute("CONTAINER_CSI_VOLUME_ID", "container.csi.volume.id", Experimental),
    Entry::attribute("CONTAINER_ID", "container.id", Experimental),
    Entry::attribute("CONTAINER_IMAGE_ID", "container.image.id", Experimental),
    Entry::attribute("CONTAINER_IMAGE_NAME", "container.image.name", Experimental),
    Entry::attribute("CONTAINER_IMAGE_REPO_DIGESTS", "container.image.repo_digests", Experimental),
    Entry::attribute("CONTAINER_IMAGE_TAGS", "container.image.tags", Experimental),
    Entry::template("CONTAINER_LABEL", "container.label", Experimental),
    Entry::template("CONTAINER_LABELS", "container.labels", Experimental)
        .deprecated(Renamed("container.label")),
    Entry::attribute("CONTAINER_NAME", "container.name", Experimental),
    Entry::attribute("CONTAINER_RUNTIME", "container.runtime", Experimental)
        .deprecated(Renamed("container.runtime.name")),
    Entry::attribute(
        "CONTAINER_RUNTIME_DESCRIPTION",
        "container.runtime.description",
        Experimental,
    ),
    Entry::attribute("CONTAINER_RUNTIME_NAME", "container.runtime.name", Experimental),
    Entry::attribute("CONTAINER_RUNTIME_VERSION", "container.runtime.version", Experimental),
    Entry::attribute("OCI_MANIFEST_DIGEST", "oci.manifest.digest", Experimental),
];
