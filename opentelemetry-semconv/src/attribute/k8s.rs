// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `k8s` namespace.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The name of the cluster.
///
/// Type: `string`. Examples: `"opentelemetry-cluster"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CLUSTER_NAME: &str = "k8s.cluster.name";

/// A pseudo-ID for the cluster, set to the UID of the `kube-system` namespace.
///
/// Type: `string`. Examples: `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CLUSTER_UID: &str = "k8s.cluster.uid";

/// The name of the Container from Pod specification, must be unique within a Pod.
///
/// Type: `string`. Examples: `"redis"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_NAME: &str = "k8s.container.name";

/// Number of times the container was restarted. This attribute can be used to identify a particular container (running or stopped) within a container spec.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_RESTART_COUNT: &str = "k8s.container.restart_count";

/// Last terminated reason of the Container.
///
/// Type: `string`. Examples: `"Evicted"`, `"Error"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_LAST_TERMINATED_REASON: &str =
    "k8s.container.status.last_terminated_reason";

/// The reason for the container state. Corresponds to the `reason` field of the K8s ContainerStateWaiting or ContainerStateTerminated.
///
/// Type: `string`. Examples: `"ContainerCreating"`, `"CrashLoopBackOff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON: &str = "k8s.container.status.reason";

/// The container is being created.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_CONTAINER_CREATING: &str = "ContainerCreating";

/// The container is in a crash loop back off state.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_CRASH_LOOP_BACK_OFF: &str = "CrashLoopBackOff";

/// There was an error creating the container configuration.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_CREATE_CONTAINER_CONFIG_ERROR: &str =
    "CreateContainerConfigError";

/// There was an error pulling the container image.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_ERR_IMAGE_PULL: &str = "ErrImagePull";

/// The container image pull is in back off state.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_IMAGE_PULL_BACK_OFF: &str = "ImagePullBackOff";

/// The container was killed due to out of memory.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_OOM_KILLED: &str = "OOMKilled";

/// The container has completed execution.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_COMPLETED: &str = "Completed";

/// There was an error with the container.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_ERROR: &str = "Error";

/// The container cannot run.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_REASON_VALUE_CONTAINER_CANNOT_RUN: &str = "ContainerCannotRun";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`K8S_CONTAINER_STATUS_REASON`].
    K8sContainerStatusReason for K8S_CONTAINER_STATUS_REASON {
        /// The container is being created.
        ContainerCreating = "ContainerCreating",
        /// The container is in a crash loop back off state.
        CrashLoopBackOff = "CrashLoopBackOff",
        /// There was an error creating the container configuration.
        CreateContainerConfigError = "CreateContainerConfigError",
        /// There was an error pulling the container image.
        ErrImagePull = "ErrImagePull",
        /// The container image pull is in back off state.
        ImagePullBackOff = "ImagePullBackOff",
        /// The container was killed due to out of memory.
        OomKilled = "OOMKilled",
        /// The container has completed execution.
        Completed = "Completed",
        /// There was an error with the container.
        Error = "Error",
        /// The container cannot run.
        ContainerCannotRun = "ContainerCannotRun",
    }
}

/// The state of the container.
///
/// Type: `string`. Examples: `"terminated"`, `"running"`, `"waiting"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_STATE: &str = "k8s.container.status.state";

/// The container has terminated.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_STATE_VALUE_TERMINATED: &str = "terminated";

/// The container is running.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_STATE_VALUE_RUNNING: &str = "running";

/// The container is waiting.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CONTAINER_STATUS_STATE_VALUE_WAITING: &str = "waiting";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`K8S_CONTAINER_STATUS_STATE`].
    K8sContainerStatusState for K8S_CONTAINER_STATUS_STATE {
        /// The container has terminated.
        Terminated = "terminated",
        /// The container is running.
        Running = "running",
        /// The container is waiting.
        Waiting = "waiting",
    }
}

/// The annotation placed on the CronJob, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CRONJOB_ANNOTATION: &str = "k8s.cronjob.annotation";

/// Builds a [`K8S_CRONJOB_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_cronjob_annotation(key: &str) -> String {
    crate::templated(K8S_CRONJOB_ANNOTATION, key)
}

/// The label placed on the CronJob, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CRONJOB_LABEL: &str = "k8s.cronjob.label";

/// Builds a [`K8S_CRONJOB_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_cronjob_label(key: &str) -> String {
    crate::templated(K8S_CRONJOB_LABEL, key)
}

/// The name of the CronJob.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CRONJOB_NAME: &str = "k8s.cronjob.name";

/// The UID of the CronJob.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_CRONJOB_UID: &str = "k8s.cronjob.uid";

/// The annotation placed on the DaemonSet, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_ANNOTATION: &str = "k8s.daemonset.annotation";

/// Builds a [`K8S_DAEMONSET_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_daemonset_annotation(key: &str) -> String {
    crate::templated(K8S_DAEMONSET_ANNOTATION, key)
}

/// The label placed on the DaemonSet, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_LABEL: &str = "k8s.daemonset.label";

/// Builds a [`K8S_DAEMONSET_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_daemonset_label(key: &str) -> String {
    crate::templated(K8S_DAEMONSET_LABEL, key)
}

/// The name of the DaemonSet.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_NAME: &str = "k8s.daemonset.name";

/// The UID of the DaemonSet.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DAEMONSET_UID: &str = "k8s.daemonset.uid";

/// The annotation placed on the Deployment, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DEPLOYMENT_ANNOTATION: &str = "k8s.deployment.annotation";

/// Builds a [`K8S_DEPLOYMENT_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_deployment_annotation(key: &str) -> String {
    crate::templated(K8S_DEPLOYMENT_ANNOTATION, key)
}

/// The label placed on the Deployment, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DEPLOYMENT_LABEL: &str = "k8s.deployment.label";

/// Builds a [`K8S_DEPLOYMENT_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_deployment_label(key: &str) -> String {
    crate::templated(K8S_DEPLOYMENT_LABEL, key)
}

/// The name of the Deployment.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DEPLOYMENT_NAME: &str = "k8s.deployment.name";

/// The UID of the Deployment.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_DEPLOYMENT_UID: &str = "k8s.deployment.uid";

/// The type of metric source for the horizontal pod autoscaler.
///
/// Type: `string`. Examples: `"Resource"`, `"ContainerResource"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_METRIC_TYPE: &str = "k8s.hpa.metric.type";

/// The name of the horizontal pod autoscaler.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_NAME: &str = "k8s.hpa.name";

/// The API version of the target resource to scale for the HorizontalPodAutoscaler.
///
/// Type: `string`. Examples: `"apps/v1"`, `"autoscaling/v2"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_SCALETARGETREF_API_VERSION: &str = "k8s.hpa.scaletargetref.api_version";

/// The kind of the target resource to scale for the HorizontalPodAutoscaler.
///
/// Type: `string`. Examples: `"Deployment"`, `"StatefulSet"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_SCALETARGETREF_KIND: &str = "k8s.hpa.scaletargetref.kind";

/// The name of the target resource to scale for the HorizontalPodAutoscaler.
///
/// Type: `string`. Examples: `"my-deployment"`, `"my-statefulset"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_SCALETARGETREF_NAME: &str = "k8s.hpa.scaletargetref.name";

/// The UID of the horizontal pod autoscaler.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HPA_UID: &str = "k8s.hpa.uid";

/// The size (identifier) of the K8s huge page.
///
/// Type: `string`. Examples: `"2Mi"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_HUGEPAGE_SIZE: &str = "k8s.hugepage.size";

/// The annotation placed on the Job, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_ANNOTATION: &str = "k8s.job.annotation";

/// Builds a [`K8S_JOB_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_job_annotation(key: &str) -> String {
    crate::templated(K8S_JOB_ANNOTATION, key)
}

/// The label placed on the Job, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_LABEL: &str = "k8s.job.label";

/// Builds a [`K8S_JOB_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_job_label(key: &str) -> String {
    crate::templated(K8S_JOB_LABEL, key)
}

/// The name of the Job.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_NAME: &str = "k8s.job.name";

/// The UID of the Job.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_JOB_UID: &str = "k8s.job.uid";

/// The annotation placed on the namespace, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_ANNOTATION: &str = "k8s.namespace.annotation";

/// Builds a [`K8S_NAMESPACE_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_namespace_annotation(key: &str) -> String {
    crate::templated(K8S_NAMESPACE_ANNOTATION, key)
}

/// The label placed on the namespace, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_LABEL: &str = "k8s.namespace.label";

/// Builds a [`K8S_NAMESPACE_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_namespace_label(key: &str) -> String {
    crate::templated(K8S_NAMESPACE_LABEL, key)
}

/// The name of the namespace.
///
/// Type: `string`. Examples: `"default"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_NAME: &str = "k8s.namespace.name";

/// The phase of the K8s namespace.
///
/// Type: `string`. Examples: `"active"`, `"terminating"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_PHASE: &str = "k8s.namespace.phase";

/// Active namespace phase as described by K8s API
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_PHASE_VALUE_ACTIVE: &str = "active";

/// Terminating namespace phase as described by K8s API
#[cfg(feature = "semconv_experimental")]
pub const K8S_NAMESPACE_PHASE_VALUE_TERMINATING: &str = "terminating";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`K8S_NAMESPACE_PHASE`].
    K8sNamespacePhase for K8S_NAMESPACE_PHASE {
        /// Active namespace phase as described by K8s API
        Active = "active",
        /// Terminating namespace phase as described by K8s API
        Terminating = "terminating",
    }
}

/// The annotation placed on the Node, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_ANNOTATION: &str = "k8s.node.annotation";

/// Builds a [`K8S_NODE_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_node_annotation(key: &str) -> String {
    crate::templated(K8S_NODE_ANNOTATION, key)
}

/// The status of the condition, one of True, False, Unknown.
///
/// Type: `string`. Examples: `"true"`, `"false"`, `"unknown"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_STATUS: &str = "k8s.node.condition.status";

/// condition_true
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_STATUS_VALUE_CONDITION_TRUE: &str = "true";

/// condition_false
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_STATUS_VALUE_CONDITION_FALSE: &str = "false";

/// condition_unknown
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_STATUS_VALUE_CONDITION_UNKNOWN: &str = "unknown";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`K8S_NODE_CONDITION_STATUS`].
    K8sNodeConditionStatus for K8S_NODE_CONDITION_STATUS {
        /// condition_true
        ConditionTrue = "true",
        /// condition_false
        ConditionFalse = "false",
        /// condition_unknown
        ConditionUnknown = "unknown",
    }
}

/// The condition type of a K8s Node.
///
/// Type: `string`. Examples: `"Ready"`, `"DiskPressure"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_TYPE: &str = "k8s.node.condition.type";

/// The node is healthy and ready to accept pods
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_TYPE_VALUE_READY: &str = "Ready";

/// Pressure exists on the disk size
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_TYPE_VALUE_DISK_PRESSURE: &str = "DiskPressure";

/// Pressure exists on the node memory
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_TYPE_VALUE_MEMORY_PRESSURE: &str = "MemoryPressure";

/// Pressure exists on the processes on the node
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_TYPE_VALUE_PID_PRESSURE: &str = "PIDPressure";

/// The network for the node is not correctly configured
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CONDITION_TYPE_VALUE_NETWORK_UNAVAILABLE: &str = "NetworkUnavailable";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`K8S_NODE_CONDITION_TYPE`].
    K8sNodeConditionType for K8S_NODE_CONDITION_TYPE {
        /// The node is healthy and ready to accept pods
        Ready = "Ready",
        /// Pressure exists on the disk size
        DiskPressure = "DiskPressure",
        /// Pressure exists on the node memory
        MemoryPressure = "MemoryPressure",
        /// Pressure exists on the processes on the node
        PidPressure = "PIDPressure",
        /// The network for the node is not correctly configured
        NetworkUnavailable = "NetworkUnavailable",
    }
}

/// The label placed on the Node, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_LABEL: &str = "k8s.node.label";

/// Builds a [`K8S_NODE_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_node_label(key: &str) -> String {
    crate::templated(K8S_NODE_LABEL, key)
}

/// The name of the Node.
///
/// Type: `string`. Examples: `"node-1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_NAME: &str = "k8s.node.name";

/// The UID of the Node.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_UID: &str = "k8s.node.uid";

/// The annotation placed on the Pod, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_ANNOTATION: &str = "k8s.pod.annotation";

/// Builds a [`K8S_POD_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_pod_annotation(key: &str) -> String {
    crate::templated(K8S_POD_ANNOTATION, key)
}

/// The label placed on the Pod, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_LABEL: &str = "k8s.pod.label";

/// Builds a [`K8S_POD_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_pod_label(key: &str) -> String {
    crate::templated(K8S_POD_LABEL, key)
}

/// Deprecated, use `k8s.pod.label` instead.
///
/// Type: `template[string]`. Examples: `"my-app"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `k8s.pod.label`.")]
pub const K8S_POD_LABELS: &str = "k8s.pod.labels";

/// Builds a [`K8S_POD_LABELS`] key for `key`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `k8s.pod.label`.")]
#[allow(deprecated)]
pub fn k8s_pod_labels(key: &str) -> String {
    crate::templated(K8S_POD_LABELS, key)
}

/// The name of the Pod.
///
/// Type: `string`. Examples: `"opentelemetry-pod-autoconf"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_NAME: &str = "k8s.pod.name";

/// The UID of the Pod.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_UID: &str = "k8s.pod.uid";

/// The annotation placed on the ReplicaSet, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICASET_ANNOTATION: &str = "k8s.replicaset.annotation";

/// Builds a [`K8S_REPLICASET_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_replicaset_annotation(key: &str) -> String {
    crate::templated(K8S_REPLICASET_ANNOTATION, key)
}

/// The label placed on the ReplicaSet, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICASET_LABEL: &str = "k8s.replicaset.label";

/// Builds a [`K8S_REPLICASET_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_replicaset_label(key: &str) -> String {
    crate::templated(K8S_REPLICASET_LABEL, key)
}

/// The name of the ReplicaSet.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICASET_NAME: &str = "k8s.replicaset.name";

/// The UID of the ReplicaSet.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICASET_UID: &str = "k8s.replicaset.uid";

/// The name of the replication controller.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICATIONCONTROLLER_NAME: &str = "k8s.replicationcontroller.name";

/// The UID of the replication controller.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_REPLICATIONCONTROLLER_UID: &str = "k8s.replicationcontroller.uid";

/// The name of the resource quota.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_NAME: &str = "k8s.resourcequota.name";

/// The name of the K8s resource a resource quota defines.
///
/// Type: `string`. Examples: `"count/replicationcontrollers"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_RESOURCE_NAME: &str = "k8s.resourcequota.resource_name";

/// The UID of the resource quota.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_RESOURCEQUOTA_UID: &str = "k8s.resourcequota.uid";

/// The annotation placed on the StatefulSet, the `<key>` being the annotation name, the value being the annotation value.
///
/// Type: `template[string]`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_ANNOTATION: &str = "k8s.statefulset.annotation";

/// Builds a [`K8S_STATEFULSET_ANNOTATION`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_statefulset_annotation(key: &str) -> String {
    crate::templated(K8S_STATEFULSET_ANNOTATION, key)
}

/// The label placed on the StatefulSet, the `<key>` being the label name, the value being the label value.
///
/// Type: `template[string]`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_LABEL: &str = "k8s.statefulset.label";

/// Builds a [`K8S_STATEFULSET_LABEL`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn k8s_statefulset_label(key: &str) -> String {
    crate::templated(K8S_STATEFULSET_LABEL, key)
}

/// The name of the StatefulSet.
///
/// Type: `string`. Examples: `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_NAME: &str = "k8s.statefulset.name";

/// The UID of the StatefulSet.
///
/// Type: `string`. Examples: `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STATEFULSET_UID: &str = "k8s.statefulset.uid";

/// The name of K8s StorageClass object.
///
/// Type: `string`. Examples: `"gold.storageclass.storage.k8s.io"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_STORAGECLASS_NAME: &str = "k8s.storageclass.name";

/// The name of the K8s volume.
///
/// Type: `string`. Examples: `"volume0"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_NAME: &str = "k8s.volume.name";

/// The type of the K8s volume.
///
/// Type: `string`. Examples: `"emptyDir"`, `"persistentVolumeClaim"`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE: &str = "k8s.volume.type";

/// A persistentVolumeClaim volume
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE_VALUE_PERSISTENT_VOLUME_CLAIM: &str = "persistentVolumeClaim";

/// A configMap volume
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE_VALUE_CONFIG_MAP: &str = "configMap";

/// A downwardAPI volume
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE_VALUE_DOWNWARD_API: &str = "downwardAPI";

/// An emptyDir volume
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE_VALUE_EMPTY_DIR: &str = "emptyDir";

/// A secret volume
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE_VALUE_SECRET: &str = "secret";

/// A local volume
#[cfg(feature = "semconv_experimental")]
pub const K8S_VOLUME_TYPE_VALUE_LOCAL: &str = "local";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`K8S_VOLUME_TYPE`].
    K8sVolumeType for K8S_VOLUME_TYPE {
        /// A persistentVolumeClaim volume
        PersistentVolumeClaim = "persistentVolumeClaim",
        /// A configMap volume
        ConfigMap = "configMap",
        /// A downwardAPI volume
        DownwardApi = "downwardAPI",
        /// An emptyDir volume
        EmptyDir = "emptyDir",
        /// A secret volume
        Secret = "secret",
        /// A local volume
        Local = "local",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("K8S_CLUSTER_NAME", "k8s.cluster.name", Experimental),
    Entry::attribute("K8S_CLUSTER_UID", "k8s.cluster.uid", Experimental),
    Entry::attribute("K8S_CONTAINER_NAME", "k8s.container.name", Experimental),
    Entry::attribute("K8S_CONTAINER_RESTART_COUNT", "k8s.container.restart_count", Experimental),
    Entry::attribute(
        "K8S_CONTAINER_STATUS_LAST_TERMINATED_REASON",
        "k8s.container.status.last_terminated_reason",
        Experimental,
    ),
    Entry::attribute("K8S_CONTAINER_STATUS_REASON", "k8s.container.status.reason", Experimental),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_CONTAINER_CREATING",
        "k8s.container.status.reason",
        "ContainerCreating",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_CRASH_LOOP_BACK_OFF",
        "k8s.container.status.reason",
        "CrashLoopBackOff",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_CREATE_CONTAINER_CONFIG_ERROR",
        "k8s.container.status.reason",
        "CreateContainerConfigError",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_ERR_IMAGE_PULL",
        "k8s.container.status.reason",
        "ErrImagePull",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_IMAGE_PULL_BACK_OFF",
        "k8s.container.status.reason",
        "ImagePullBackOff",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_OOM_KILLED",
        "k8s.container.status.reason",
        "OOMKilled",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_COMPLETED",
        "k8s.container.status.reason",
        "Completed",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_ERROR",
        "k8s.container.status.reason",
        "Error",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_REASON_VALUE_CONTAINER_CANNOT_RUN",
        "k8s.container.status.reason",
        "ContainerCannotRun",
        Experimental,
    ),
    Entry::attribute("K8S_CONTAINER_STATUS_STATE", "k8s.container.status.state", Experimental),
    Entry::value(
        "K8S_CONTAINER_STATUS_STATE_VALUE_TERMINATED",
        "k8s.container.status.state",
        "terminated",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_STATE_VALUE_RUNNING",
        "k8s.container.status.state",
        "running",
        Experimental,
    ),
    Entry::value(
        "K8S_CONTAINER_STATUS_STATE_VALUE_WAITING",
        "k8s.container.status.state",
        "waiting",
        Experimental,
    ),
    Entry::template("K8S_CRONJOB_ANNOTATION", "k8s.cronjob.annotation", Experimental),
    Entry::template("K8S_CRONJOB_LABEL", "k8s.cronjob.label", Experimental),
    Entry::attribute("K8S_CRONJOB_NAME", "k8s.cronjob.name", Experimental),
    Entry::attribute("K8S_CRONJOB_UID", "k8s.cronjob.uid", Experimental),
    Entry::template("K8S_DAEMONSET_ANNOTATION", "k8s.daemonset.annotation", Experimental),
    Entry::template("K8S_DAEMONSET_LABEL", "k8s.daemonset.label", Experimental),
    Entry::attribute("K8S_DAEMONSET_NAME", "k8s.daemonset.name", Experimental),
    Entry::attribute("K8S_DAEMONSET_UID", "k8s.daemonset.uid", Experimental),
    Entry::template("K8S_DEPLOYMENT_ANNOTATION", "k8s.deployment.annotation", Experimental),
    Entry::template("K8S_DEPLOYMENT_LABEL", "k8s.deployment.label", Experimental),
    Entry::attribute("K8S_DEPLOYMENT_NAME", "k8s.deployment.name", Experimental),
    Entry::attribute("K8S_DEPLOYMENT_UID", "k8s.deployment.uid", Experimental),
    Entry::attribute("K8S_HPA_METRIC_TYPE", "k8s.hpa.metric.type", Experimental),
    Entry::attribute("K8S_HPA_NAME", "k8s.hpa.name", Experimental),
    Entry::attribute(
        "K8S_HPA_SCALETARGETREF_API_VERSION",
        "k8s.hpa.scaletargetref.api_version",
        Experimental,
    ),
    Entry::attribute("K8S_HPA_SCALETARGETREF_KIND", "k8s.hpa.scaletargetref.kind", Experimental),
    Entry::attribute("K8S_HPA_SCALETARGETREF_NAME", "k8s.hpa.scaletargetref.name", Experimental),
    Entry::attribute("K8S_HPA_UID", "k8s.hpa.uid", Experimental),
    Entry::attribute("K8S_HUGEPAGE_SIZE", "k8s.hugepage.size", Experimental),
    Entry::template("K8S_JOB_ANNOTATION", "k8s.job.annotation", Experimental),
    Entry::template("K8S_JOB_LABEL", "k8s.job.label", Experimental),
    Entry::attribute("K8S_JOB_NAME", "k8s.job.name", Experimental),
    Entry::attribute("K8S_JOB_UID", "k8s.job.uid", Experimental),
    Entry::template("K8S_NAMESPACE_ANNOTATION", "k8s.namespace.annotation", Experimental),
    Entry::template("K8S_NAMESPACE_LABEL", "k8s.namespace.label", Experimental),
    Entry::attribute("K8S_NAMESPACE_NAME", "k8s.namespace.name", Experimental),
    Entry::attribute("K8S_NAMESPACE_PHASE", "k8s.namespace.phase", Experimental),
    Entry::value("K8S_NAMESPACE_PHASE_VALUE_ACTIVE", "k8s.namespace.phase", "active", Experimental),
    Entry::value(
        "K8S_NAMESPACE_PHASE_VALUE_TERMINATING",
        "k8s.namespace.phase",
        "terminating",
        Experimental,
    ),
    Entry::template("K8S_NODE_ANNOTATION", "k8s.node.annotation", Experimental),
    Entry::attribute("K8S_NODE_CONDITION_STATUS", "k8s.node.condition.status", Experimental),
    Entry::value(
        "K8S_NODE_CONDITION_STATUS_VALUE_CONDITION_TRUE",
        "k8s.node.condition.status",
        "true",
        Experimental,
    ),
    Entry::value(
        "K8S_NODE_CONDITION_STATUS_VALUE_CONDITION_FALSE",
        "k8s.node.condition.status",
        "false",
        Experimental,
    ),
    Entry::value(
        "K8S_NODE_CONDITION_STATUS_VALUE_CONDITION_UNKNOWN",
        "k8s.node.condition.status",
        "unknown",
        Experimental,
    ),
    Entry::attribute("K8S_NODE_CONDITION_TYPE", "k8s.node.condition.type", Experimental),
    Entry::value(
        "K8S_NODE_CONDITION_TYPE_VALUE_READY",
        "k8s.node.condition.type",
        "Ready",
        Experimental,
    ),
    Entry::value(
        "K8S_NODE_CONDITION_TYPE_VALUE_DISK_PRESSURE",
        "k8s.node.condition.type",
        "DiskPressure",
        Experimental,
    ),
    Entry::value(
        "K8S_NODE_CONDITION_TYPE_VALUE_MEMORY_PRESSURE",
        "k8s.node.condition.type",
        "MemoryPressure",
        Experimental,
    ),
    Entry::value(
        "K8S_NODE_CONDITION_TYPE_VALUE_PID_PRESSURE",
        "k8s.node.condition.type",
        "PIDPressure",
        Experimental,
    ),
    Entry::value(
        "K8S_NODE_CONDITION_TYPE_VALUE_NETWORK_UNAVAILABLE",
        "k8s.node.condition.type",
        "NetworkUnavailable",
        Experimental,
    ),
    Entry::template("K8S_NODE_LABEL", "k8s.node.label", Experimental),
    Entry::attribute("K8S_NODE_NAME", "k8s.node.name", Experimental),
    Entry::attribute("K8S_NODE_UID", "k8s.node.uid", Experimental),
    Entry::template("K8S_POD_ANNOTATION", "k8s.pod.annotation", Experimental),
    Entry::template("K8S_POD_LABEL", "k8s.pod.label", Experimental),
    Entry::template("K8S_POD_LABELS", "k8s.pod.labels", Experimental)
        .deprecated(Renamed("k8s.pod.label")),
    Entry::attribute("K8S_POD_NAME", "k8s.pod.name", Experimental),
    Entry::attribute("K8S_POD_UID", "k8s.pod.uid", Experimental),
    Entry::template("K8S_REPLICASET_ANNOTATION", "k8s.replicaset.annotation", Experimental),
    Entry::template("K8S_REPLICASET_LABEL", "k8s.replicaset.label", Experimental),
    Entry::attribute("K8S_REPLICASET_NAME", "k8s.replicaset.name", Experimental),
    Entry::attribute("K8S_REPLICASET_UID", "k8s.replicaset.uid", Experimental),
    Entry::attribute(
        "K8S_REPLICATIONCONTROLLER_NAME",
        "k8s.replicationcontroller.name",
        Experimental,
    ),
    Entry::attribute(
        "K8S_REPLICATIONCONTROLLER_UID",
        "k8s.replicationcontroller.uid",
        Experimental,
    ),
    Entry::attribute("K8S_RESOURCEQUOTA_NAME", "k8s.resourcequota.name", Experimental),
    Entry::attribute(
        "K8S_RESOURCEQUOTA_RESOURCE_NAME",
        "k8s.resourcequota.resource_name",
        Experimental,
    ),
    Entry::attribute("K8S_RESOURCEQUOTA_UID", "k8s.resourcequota.uid", Experimental),
    Entry::template("K8S_STATEFULSET_ANNOTATION", "k8s.statefulset.annotation", Experimental),
    Entry::template("K8S_STATEFULSET_LABEL", "k8s.statefulset.label", Experimental),
    Entry::attribute("K8S_STATEFULSET_NAME", "k8s.statefulset.name", Experimental),
    Entry::attribute("K8S_STATEFULSET_UID", "k8s.statefulset.uid", Experimental),
    Entry::attribute("K8S_STORAGECLASS_NAME", "k8s.storageclass.name", Experimental),
    Entry::attribute("K8S_VOLUME_NAME", "k8s.volume.name", Experimental),
    Entry::attribute("K8S_VOLUME_TYPE", "k8s.volume.type", Experimental),
    Entry::value(
        "K8S_VOLUME_TYPE_VALUE_PERSISTENT_VOLUME_CLAIM",
        "k8s.volume.type",
        "persistentVolumeClaim",
        Experimental,
    ),
    Entry::value("K8S_VOLUME_TYPE_VALUE_CONFIG_MAP", "k8s.volume.type", "configMap", Experimental),
    Entry::value(
        "K8S_VOLUME_TYPE_VALUE_DOWNWARD_API",
        "k8s.volume.type",
        "downwardAPI",
        Experimental,
    ),
    Entry::value("K8S_VOLUME_TYPE_VALUE_EMPTY_DIR", "k8s.volume.type", "emptyDir", Experimental),
    Entry::value("K8S_VOLUME_TYPE_VALUE_SECRET", "k8s.volume.type", "secret", Experimental),
    Entry::value("K8S_VOLUME_TYPE_VALUE_LOCAL", "k8s.volume.type", "local", Experimental),
];
