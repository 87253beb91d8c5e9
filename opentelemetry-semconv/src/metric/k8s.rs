// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Metrics of the `k8s` namespace.

use crate::registry::{Deprecated::*, Entry, Instrument::*, Stability::*};

/// Maximum CPU resource limit set for the container.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_CPU_LIMIT: &str = "k8s.container.cpu.limit";

/// CPU resource requested for the container.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_CPU_REQUEST: &str = "k8s.container.cpu.request";

/// Maximum ephemeral storage resource limit set for the container.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_EPHEMERAL_STORAGE_LIMIT: &str = "k8s.container.ephemeral_storage.limit";

/// Ephemeral storage resource requested for the container.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_EPHEMERAL_STORAGE_REQUEST: &str = "k8s.container.ephemeral_storage.request";

/// Maximum memory resource limit set for the container.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_MEMORY_LIMIT: &str = "k8s.container.memory.limit";

/// Memory resource requested for the container.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_MEMORY_REQUEST: &str = "k8s.container.memory.request";

/// Indicates whether the container is currently marked as ready to accept traffic, based on its readiness probe (1 = ready, 0 = not ready).
///
/// Instrument: `updowncounter`. Unit: `{container}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_READY: &str = "k8s.container.ready";

/// Describes how many times the container has restarted (since the last counter reset).
///
/// Instrument: `updowncounter`. Unit: `{restart}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_RESTART_COUNT: &str = "k8s.container.restart.count";

/// Describes the number of K8s containers that are currently in a state for a given reason.
///
/// Instrument: `updowncounter`. Unit: `{container}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON: &str = "k8s.container.status.reason";

/// Describes the number of K8s containers that are currently in a given state.
///
/// Instrument: `updowncounter`. Unit: `{container}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_STATE: &str = "k8s.container.status.state";

/// Maximum storage resource limit set for the container.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STORAGE_LIMIT: &str = "k8s.container.storage.limit";

/// Storage resource requested for the container.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STORAGE_REQUEST: &str = "k8s.container.storage.request";

/// The number of actively running jobs for a cronjob.
///
/// Instrument: `updowncounter`. Unit: `{job}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CRONJOB_ACTIVE_JOBS: &str = "k8s.cronjob.active_jobs";

/// Number of nodes that are running at least 1 daemon pod and are supposed to run the daemon pod.
///
/// Instrument: `updowncounter`. Unit: `{node}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_CURRENT_SCHEDULED_NODES: &str = "k8s.daemonset.current_scheduled_nodes";

/// Number of nodes that should be running the daemon pod (including nodes currently running the daemon pod).
///
/// Instrument: `updowncounter`. Unit: `{node}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_DESIRED_SCHEDULED_NODES: &str = "k8s.daemonset.desired_scheduled_nodes";

/// Number of nodes that are running the daemon pod, but are not supposed to run the daemon pod.
///
/// Instrument: `updowncounter`. Unit: `{node}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_MISSCHEDULED_NODES: &str = "k8s.daemonset.misscheduled_nodes";

/// Number of nodes that should be running the daemon pod and have one or more of the daemon pod running and ready.
///
/// Instrument: `updowncounter`. Unit: `{node}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_READY_NODES: &str = "k8s.daemonset.ready_nodes";

/// Total number of available replica pods (ready for at least minReadySeconds) targeted by this deployment.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DEPLOYMENT_AVAILABLE_PODS: &str = "k8s.deployment.available_pods";

/// Number of desired replica pods in this deployment.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DEPLOYMENT_DESIRED_PODS: &str = "k8s.deployment.desired_pods";

/// Current number of replica pods managed by this horizontal pod autoscaler, as last seen by the autoscaler.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_CURRENT_PODS: &str = "k8s.hpa.current_pods";

/// Desired number of replica pods managed by this horizontal pod autoscaler, as last calculated by the autoscaler.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_DESIRED_PODS: &str = "k8s.hpa.desired_pods";

/// The upper limit for the number of replica pods to which the autoscaler can scale up.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_MAX_PODS: &str = "k8s.hpa.max_pods";

/// Target average utilization, in percentage, for CPU resource in HPA config.
///
/// Instrument: `gauge`. Unit: `1`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_METRIC_TARGET_CPU_AVERAGE_UTILIZATION: &str =
    "k8s.hpa.metric.target.cpu.average_utilization";

/// Target average value for CPU resource in HPA config.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_METRIC_TARGET_CPU_AVERAGE_VALUE: &str = "k8s.hpa.metric.target.cpu.average_value";

/// Target value for CPU resource in HPA config.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_METRIC_TARGET_CPU_VALUE: &str = "k8s.hpa.metric.target.cpu.value";

/// The lower limit for the number of replica pods to which the autoscaler can scale down.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_MIN_PODS: &str = "k8s.hpa.min_pods";

/// The number of pending and actively running pods for a job.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_ACTIVE_PODS: &str = "k8s.job.active_pods";

/// The desired number of successfully finished pods the job should be run with.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_DESIRED_SUCCESSFUL_PODS: &str = "k8s.job.desired_successful_pods";

/// The number of pods which reached phase Failed for a job.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_FAILED_PODS: &str = "k8s.job.failed_pods";

/// The max desired number of pods the job should run at any given time.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_MAX_PARALLEL_PODS: &str = "k8s.job.max_parallel_pods";

/// The number of pods which reached phase Succeeded for a job.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_SUCCESSFUL_PODS: &str = "k8s.job.successful_pods";

/// Describes number of K8s namespaces that are currently in a given phase.
///
/// Instrument: `updowncounter`. Unit: `{namespace}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_PHASE: &str = "k8s.namespace.phase";

/// Amount of cpu allocatable on the node.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_ALLOCATABLE_CPU: &str = "k8s.node.allocatable.cpu";

/// Amount of ephemeral-storage allocatable on the node.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_ALLOCATABLE_EPHEMERAL_STORAGE: &str = "k8s.node.allocatable.ephemeral_storage";

/// Amount of memory allocatable on the node.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_ALLOCATABLE_MEMORY: &str = "k8s.node.allocatable.memory";

/// Amount of pods allocatable on the node.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_ALLOCATABLE_PODS: &str = "k8s.node.allocatable.pods";

/// Describes the condition of a particular Node.
///
/// Instrument: `updowncounter`. Unit: `{node}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_STATUS: &str = "k8s.node.condition.status";

/// Total CPU time consumed.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CPU_TIME: &str = "k8s.node.cpu.time";

/// Node's CPU usage, measured in cpus. Range from 0 to the number of allocatable CPUs.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CPU_USAGE: &str = "k8s.node.cpu.usage";

/// Node filesystem available bytes.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_FILESYSTEM_AVAILABLE: &str = "k8s.node.filesystem.available";

/// Node filesystem capacity.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_FILESYSTEM_CAPACITY: &str = "k8s.node.filesystem.capacity";

/// Node filesystem usage.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_FILESYSTEM_USAGE: &str = "k8s.node.filesystem.usage";

/// Memory usage of the Node.
///
/// Instrument: `gauge`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_MEMORY_USAGE: &str = "k8s.node.memory.usage";

/// Node network errors.
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_NETWORK_ERRORS: &str = "k8s.node.network.errors";

/// Network bytes for the Node.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_NETWORK_IO: &str = "k8s.node.network.io";

/// The time the Node has been running.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_UPTIME: &str = "k8s.node.uptime";

/// Total CPU time consumed.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_CPU_TIME: &str = "k8s.pod.cpu.time";

/// Pod's CPU usage, measured in cpus. Range from 0 to the number of allocatable CPUs.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_CPU_USAGE: &str = "k8s.pod.cpu.usage";

/// Pod filesystem available bytes.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_FILESYSTEM_AVAILABLE: &str = "k8s.pod.filesystem.available";

/// Pod filesystem capacity.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_FILESYSTEM_CAPACITY: &str = "k8s.pod.filesystem.capacity";

/// Pod filesystem usage.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_FILESYSTEM_USAGE: &str = "k8s.pod.filesystem.usage";

/// Memory usage of the Pod.
///
/// Instrument: `gauge`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_MEMORY_USAGE: &str = "k8s.pod.memory.usage";

/// Pod network errors.
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_NETWORK_ERRORS: &str = "k8s.pod.network.errors";

/// Network bytes for the Pod.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_NETWORK_IO: &str = "k8s.pod.network.io";

/// The time the Pod has been running.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_UPTIME: &str = "k8s.pod.uptime";

/// Pod volume storage space available.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_VOLUME_AVAILABLE: &str = "k8s.pod.volume.available";

/// Pod volume total capacity.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_VOLUME_CAPACITY: &str = "k8s.pod.volume.capacity";

/// The total inodes in the filesystem of the Pod's volume.
///
/// Instrument: `updowncounter`. Unit: `{inode}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_VOLUME_INODE_COUNT: &str = "k8s.pod.volume.inode.count";

/// The free inodes in the filesystem of the Pod's volume.
///
/// Instrument: `updowncounter`. Unit: `{inode}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_VOLUME_INODE_FREE: &str = "k8s.pod.volume.inode.free";

/// The inodes used by the filesystem of the Pod's volume.
///
/// Instrument: `updowncounter`. Unit: `{inode}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_VOLUME_INODE_USED: &str = "k8s.pod.volume.inode.used";

/// Pod volume usage.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_VOLUME_USAGE: &str = "k8s.pod.volume.usage";

/// Total number of available replica pods (ready for at least minReadySeconds) targeted by this replicaset.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICASET_AVAILABLE_PODS: &str = "k8s.replicaset.available_pods";

/// Number of desired replica pods in this replicaset.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICASET_DESIRED_PODS: &str = "k8s.replicaset.desired_pods";

/// Deprecated, use `k8s.replicationcontroller.available_pods` instead.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `k8s.replicationcontroller.available_pods`.")]
pub const K8S_REPLICATION_CONTROLLER_AVAILABLE_PODS: &str =
    "k8s.replication_controller.available_pods";

/// Deprecated, use `k8s.replicationcontroller.desired_pods` instead.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `k8s.replicationcontroller.desired_pods`.")]
pub const K8S_REPLICATION_CONTROLLER_DESIRED_PODS: &str = "k8s.replication_controller.desired_pods";

/// Total number of available replica pods (ready for at least minReadySeconds) targeted by this replication controller.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICATIONCONTROLLER_AVAILABLE_PODS: &str =
    "k8s.replicationcontroller.available_pods";

/// Number of desired replica pods in this replication controller.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICATIONCONTROLLER_DESIRED_PODS: &str = "k8s.replicationcontroller.desired_pods";

/// The CPU limits in a specific namespace. The value represents the configured quota limit of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_CPU_LIMIT_HARD: &str = "k8s.resourcequota.cpu.limit.hard";

/// The CPU limits in a specific namespace. The value represents the current observed total usage of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_CPU_LIMIT_USED: &str = "k8s.resourcequota.cpu.limit.used";

/// The CPU requests in a specific namespace. The value represents the configured quota limit of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_CPU_REQUEST_HARD: &str = "k8s.resourcequota.cpu.request.hard";

/// The CPU requests in a specific namespace. The value represents the current observed total usage of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_CPU_REQUEST_USED: &str = "k8s.resourcequota.cpu.request.used";

/// The memory limits in a specific namespace. The value represents the configured quota limit of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_MEMORY_LIMIT_HARD: &str = "k8s.resourcequota.memory.limit.hard";

/// The memory limits in a specific namespace. The value represents the current observed total usage of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_MEMORY_LIMIT_USED: &str = "k8s.resourcequota.memory.limit.used";

/// The memory requests in a specific namespace. The value represents the configured quota limit of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_MEMORY_REQUEST_HARD: &str = "k8s.resourcequota.memory.request.hard";

/// The memory requests in a specific namespace. The value represents the current observed total usage of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_MEMORY_REQUEST_USED: &str = "k8s.resourcequota.memory.request.used";

/// The object count limits in a specific namespace. The value represents the configured quota limit of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `{object}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_OBJECT_COUNT_HARD: &str = "k8s.resourcequota.object_count.hard";

/// The object count limits in a specific namespace. The value represents the current observed total usage of the resource in the namespace.
///
/// Instrument: `updowncounter`. Unit: `{object}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_OBJECT_COUNT_USED: &str = "k8s.resourcequota.object_count.used";

/// The number of replica pods created by the statefulset controller from the statefulset version indicated by currentRevision.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_CURRENT_PODS: &str = "k8s.statefulset.current_pods";

/// Number of desired replica pods in this statefulset.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_DESIRED_PODS: &str = "k8s.statefulset.desired_pods";

/// The number of replica pods created for this statefulset with a Ready Condition.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_READY_PODS: &str = "k8s.statefulset.ready_pods";

/// Number of replica pods created by the statefulset controller from the statefulset version indicated by updateRevision.
///
/// Instrument: `updowncounter`. Unit: `{pod}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_UPDATED_PODS: &str = "k8s.statefulset.updated_pods";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::metric(
        "K8S_CONTAINER_CPU_LIMIT",
        "k8s.container.cpu.limit",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_CPU_REQUEST",
        "k8s.container.cpu.request",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_EPHEMERAL_STORAGE_LIMIT",
        "k8s.container.ephemeral_storage.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_EPHEMERAL_STORAGE_REQUEST",
        "k8s.container.ephemeral_storage.request",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_MEMORY_LIMIT",
        "k8s.container.memory.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_MEMORY_REQUEST",
        "k8s.container.memory.request",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_READY",
        "k8s.container.ready",
        UpDownCounter,
        "{container}",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_RESTART_COUNT",
        "k8s.container.restart.count",
        UpDownCounter,
        "{restart}",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_STATUS_REASON",
        "k8s.container.status.reason",
        UpDownCounter,
        "{container}",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_STATUS_STATE",
        "k8s.container.status.state",
        UpDownCounter,
        "{container}",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_STORAGE_LIMIT",
        "k8s.container.storage.limit",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_CONTAINER_STORAGE_REQUEST",
        "k8s.container.storage.request",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_CRONJOB_ACTIVE_JOBS",
        "k8s.cronjob.active_jobs",
        UpDownCounter,
        "{job}",
        Experimental,
    ),
    Entry::metric(
        "K8S_DAEMONSET_CURRENT_SCHEDULED_NODES",
        "k8s.daemonset.current_scheduled_nodes",
        UpDownCounter,
        "{node}",
        Experimental,
    ),
    Entry::metric(
        "K8S_DAEMONSET_DESIRED_SCHEDULED_NODES",
        "k8s.daemonset.desired_scheduled_nodes",
        UpDownCounter,
        "{node}",
        Experimental,
    ),
    Entry::metric(
        "K8S_DAEMONSET_MISSCHEDULED_NODES",
        "k8s.daemonset.misscheduled_nodes",
        UpDownCounter,
        "{node}",
        Experimental,
    ),
    Entry::metric(
        "K8S_DAEMONSET_READY_NODES",
        "k8s.daemonset.ready_nodes",
        UpDownCounter,
        "{node}",
        Experimental,
    ),
    Entry::metric(
        "K8S_DEPLOYMENT_AVAILABLE_PODS",
        "k8s.deployment.available_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_DEPLOYMENT_DESIRED_PODS",
        "k8s.deployment.desired_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_HPA_CURRENT_PODS",
        "k8s.hpa.current_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_HPA_DESIRED_PODS",
        "k8s.hpa.desired_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric("K8S_HPA_MAX_PODS", "k8s.hpa.max_pods", UpDownCounter, "{pod}", Experimental),
    Entry::metric(
        "K8S_HPA_METRIC_TARGET_CPU_AVERAGE_UTILIZATION",
        "k8s.hpa.metric.target.cpu.average_utilization",
        Gauge,
        "1",
        Experimental,
    ),
    Entry::metric(
        "K8S_HPA_METRIC_TARGET_CPU_AVERAGE_VALUE",
        "k8s.hpa.metric.target.cpu.average_value",
        Gauge,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_HPA_METRIC_TARGET_CPU_VALUE",
        "k8s.hpa.metric.target.cpu.value",
        Gauge,
        "{cpu}",
        Experimental,
    ),
    Entry::metric("K8S_HPA_MIN_PODS", "k8s.hpa.min_pods", UpDownCounter, "{pod}", Experimental),
    Entry::metric(
        "K8S_JOB_ACTIVE_PODS",
        "k8s.job.active_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_JOB_DESIRED_SUCCESSFUL_PODS",
        "k8s.job.desired_successful_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_JOB_FAILED_PODS",
        "k8s.job.failed_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_JOB_MAX_PARALLEL_PODS",
        "k8s.job.max_parallel_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_JOB_SUCCESSFUL_PODS",
        "k8s.job.successful_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_NAMESPACE_PHASE",
        "k8s.namespace.phase",
        UpDownCounter,
        "{namespace}",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_ALLOCATABLE_CPU",
        "k8s.node.allocatable.cpu",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_ALLOCATABLE_EPHEMERAL_STORAGE",
        "k8s.node.allocatable.ephemeral_storage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_ALLOCATABLE_MEMORY",
        "k8s.node.allocatable.memory",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_ALLOCATABLE_PODS",
        "k8s.node.allocatable.pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_CONDITION_STATUS",
        "k8s.node.condition.status",
        UpDownCounter,
        "{node}",
        Experimental,
    ),
    Entry::metric("K8S_NODE_CPU_TIME", "k8s.node.cpu.time", Counter, "s", Experimental),
    Entry::metric("K8S_NODE_CPU_USAGE", "k8s.node.cpu.usage", Gauge, "{cpu}", Experimental),
    Entry::metric(
        "K8S_NODE_FILESYSTEM_AVAILABLE",
        "k8s.node.filesystem.available",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_FILESYSTEM_CAPACITY",
        "k8s.node.filesystem.capacity",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_NODE_FILESYSTEM_USAGE",
        "k8s.node.filesystem.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("K8S_NODE_MEMORY_USAGE", "k8s.node.memory.usage", Gauge, "By", Experimental),
    Entry::metric(
        "K8S_NODE_NETWORK_ERRORS",
        "k8s.node.network.errors",
        Counter,
        "{error}",
        Experimental,
    ),
    Entry::metric("K8S_NODE_NETWORK_IO", "k8s.node.network.io", Counter, "By", Experimental),
    Entry::metric("K8S_NODE_UPTIME", "k8s.node.uptime", Gauge, "s", Experimental),
    Entry::metric("K8S_POD_CPU_TIME", "k8s.pod.cpu.time", Counter, "s", Experimental),
    Entry::metric("K8S_POD_CPU_USAGE", "k8s.pod.cpu.usage", Gauge, "{cpu}", Experimental),
    Entry::metric(
        "K8S_POD_FILESYSTEM_AVAILABLE",
        "k8s.pod.filesystem.available",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_FILESYSTEM_CAPACITY",
        "k8s.pod.filesystem.capacity",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_FILESYSTEM_USAGE",
        "k8s.pod.filesystem.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric("K8S_POD_MEMORY_USAGE", "k8s.pod.memory.usage", Gauge, "By", Experimental),
    Entry::metric(
        "K8S_POD_NETWORK_ERRORS",
        "k8s.pod.network.errors",
        Counter,
        "{error}",
        Experimental,
    ),
    Entry::metric("K8S_POD_NETWORK_IO", "k8s.pod.network.io", Counter, "By", Experimental),
    Entry::metric("K8S_POD_UPTIME", "k8s.pod.uptime", Gauge, "s", Experimental),
    Entry::metric(
        "K8S_POD_VOLUME_AVAILABLE",
        "k8s.pod.volume.available",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_VOLUME_CAPACITY",
        "k8s.pod.volume.capacity",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_VOLUME_INODE_COUNT",
        "k8s.pod.volume.inode.count",
        UpDownCounter,
        "{inode}",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_VOLUME_INODE_FREE",
        "k8s.pod.volume.inode.free",
        UpDownCounter,
        "{inode}",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_VOLUME_INODE_USED",
        "k8s.pod.volume.inode.used",
        UpDownCounter,
        "{inode}",
        Experimental,
    ),
    Entry::metric(
        "K8S_POD_VOLUME_USAGE",
        "k8s.pod.volume.usage",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_REPLICASET_AVAILABLE_PODS",
        "k8s.replicaset.available_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_REPLICASET_DESIRED_PODS",
        "k8s.replicaset.desired_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_REPLICATION_CONTROLLER_AVAILABLE_PODS",
        "k8s.replication_controller.available_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    )
    .deprecated(Renamed("k8s.replicationcontroller.available_pods")),
    Entry::metric(
        "K8S_REPLICATION_CONTROLLER_DESIRED_PODS",
        "k8s.replication_controller.desired_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    )
    .deprecated(Renamed("k8s.replicationcontroller.desired_pods")),
    Entry::metric(
        "K8S_REPLICATIONCONTROLLER_AVAILABLE_PODS",
        "k8s.replicationcontroller.available_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_REPLICATIONCONTROLLER_DESIRED_PODS",
        "k8s.replicationcontroller.desired_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_CPU_LIMIT_HARD",
        "k8s.resourcequota.cpu.limit.hard",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_CPU_LIMIT_USED",
        "k8s.resourcequota.cpu.limit.used",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_CPU_REQUEST_HARD",
        "k8s.resourcequota.cpu.request.hard",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_CPU_REQUEST_USED",
        "k8s.resourcequota.cpu.request.used",
        UpDownCounter,
        "{cpu}",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_MEMORY_LIMIT_HARD",
        "k8s.resourcequota.memory.limit.hard",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_MEMORY_LIMIT_USED",
        "k8s.resourcequota.memory.limit.used",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_MEMORY_REQUEST_HARD",
        "k8s.resourcequota.memory.request.hard",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_MEMORY_REQUEST_USED",
        "k8s.resourcequota.memory.request.used",
        UpDownCounter,
        "By",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_OBJECT_COUNT_HARD",
        "k8s.resourcequota.object_count.hard",
        UpDownCounter,
        "{object}",
        Experimental,
    ),
    Entry::metric(
        "K8S_RESOURCEQUOTA_OBJECT_COUNT_USED",
        "k8s.resourcequota.object_count.used",
        UpDownCounter,
        "{object}",
        Experimental,
    ),
    Entry::metric(
        "K8S_STATEFULSET_CURRENT_PODS",
        "k8s.statefulset.current_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_STATEFULSET_DESIRED_PODS",
        "k8s.statefulset.desired_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_STATEFULSET_READY_PODS",
        "k8s.statefulset.ready_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
    Entry::metric(
        "K8S_STATEFULSET_UPDATED_PODS",
        "k8s.statefulset.updated_pods",
        UpDownCounter,
        "{pod}",
        Experimental,
    ),
];
