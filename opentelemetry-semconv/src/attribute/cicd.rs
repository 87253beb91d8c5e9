// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `cicd` namespace.

use crate::registry::{Entry, Stability::*};

/// The kind of action a pipeline run is performing.
///
/// Type: `string`. Examples: `"BUILD"`, `"RUN"`, `"SYNC"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_ACTION_NAME: &str = "cicd.pipeline.action.name";

/// The pipeline run is executing a build.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_ACTION_NAME_VALUE_BUILD: &str = "BUILD";

/// The pipeline run is executing.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_ACTION_NAME_VALUE_RUN: &str = "RUN";

/// The pipeline run is executing a sync.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_ACTION_NAME_VALUE_SYNC: &str = "SYNC";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CICD_PIPELINE_ACTION_NAME`].
    CicdPipelineActionName for CICD_PIPELINE_ACTION_NAME {
        /// The pipeline run is executing a build.
        Build = "BUILD",
        /// The pipeline run is executing.
        Run = "RUN",
        /// The pipeline run is executing a sync.
        Sync = "SYNC",
    }
}

/// The human readable name of the pipeline within a CI/CD system.
///
/// Type: `string`. Examples: `"Build and Test"`, `"Lint"`, `"Deploy Go Project"`, `"deploy_to_environment"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_NAME: &str = "cicd.pipeline.name";

/// The result of a pipeline run.
///
/// Type: `string`. Examples: `"success"`, `"failure"`, `"timeout"`, `"skipped"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT: &str = "cicd.pipeline.result";

/// The pipeline run finished successfully.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT_VALUE_SUCCESS: &str = "success";

/// The pipeline run did not finish successfully, eg. due to a compile error or a failing test.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT_VALUE_FAILURE: &str = "failure";

/// The pipeline run failed due to an error in the CICD system, eg. due to the worker being killed.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT_VALUE_ERROR: &str = "error";

/// A timeout caused the pipeline run to be interrupted.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT_VALUE_TIMEOUT: &str = "timeout";

/// The pipeline run was cancelled, eg. by a user manually cancelling the pipeline run.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT_VALUE_CANCELLATION: &str = "cancellation";

/// The pipeline run was skipped, eg. due to a precondition not being met.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RESULT_VALUE_SKIP: &str = "skip";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CICD_PIPELINE_RESULT`].
    CicdPipelineResult for CICD_PIPELINE_RESULT {
        /// The pipeline run finished successfully.
        Success = "success",
        /// The pipeline run did not finish successfully, eg. due to a compile error or a failing test.
        Failure = "failure",
        /// The pipeline run failed due to an error in the CICD system, eg. due to the worker being killed.
        Error = "error",
        /// A timeout caused the pipeline run to be interrupted.
        Timeout = "timeout",
        /// The pipeline run was cancelled, eg. by a user manually cancelling the pipeline run.
        Cancellation = "cancellation",
        /// The pipeline run was skipped, eg. due to a precondition not being met.
        Skip = "skip",
    }
}

/// The unique identifier of a pipeline run within a CI/CD system.
///
/// Type: `string`. Examples: `"120912"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_ID: &str = "cicd.pipeline.run.id";

/// The pipeline run goes through these states during its lifecycle.
///
/// Type: `string`. Examples: `"pending"`, `"executing"`, `"finalizing"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_STATE: &str = "cicd.pipeline.run.state";

/// The run pending state spans from the event triggering the pipeline run until the execution of the run starts.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_STATE_VALUE_PENDING: &str = "pending";

/// The executing state spans the execution of any run tasks.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_STATE_VALUE_EXECUTING: &str = "executing";

/// The finalizing state spans from when the run has finished executing until cleanup of the run resources is complete.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_STATE_VALUE_FINALIZING: &str = "finalizing";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CICD_PIPELINE_RUN_STATE`].
    CicdPipelineRunState for CICD_PIPELINE_RUN_STATE {
        /// The run pending state spans from the event triggering the pipeline run until the execution of the run starts.
        Pending = "pending",
        /// The executing state spans the execution of any run tasks.
        Executing = "executing",
        /// The finalizing state spans from when the run has finished executing until cleanup of the run resources is complete.
        Finalizing = "finalizing",
    }
}

/// The URL of the pipeline run, providing the complete address in order to locate and identify the pipeline run.
///
/// Type: `string`. Examples: `"https://github.com/open-telemetry/semantic-conventions/actions/runs/9753949763?pr=1075"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_RUN_URL_FULL: &str = "cicd.pipeline.run.url.full";

/// The human readable name of a task within a pipeline.
///
/// Type: `string`. Examples: `"Run GoLang Linter"`, `"Go Build"`, `"go-test"`, `"deploy_binary"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_NAME: &str = "cicd.pipeline.task.name";

/// The unique identifier of a task run within a pipeline.
///
/// Type: `string`. Examples: `"12097"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_ID: &str = "cicd.pipeline.task.run.id";

/// The result of a task run.
///
/// Type: `string`. Examples: `"success"`, `"failure"`, `"timeout"`, `"skipped"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT: &str = "cicd.pipeline.task.run.result";

/// The task run finished successfully.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT_VALUE_SUCCESS: &str = "success";

/// The task run did not finish successfully, eg. due to a compile error or a failing test.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT_VALUE_FAILURE: &str = "failure";

/// The task run failed due to an error in the CICD system, eg. due to the worker being killed.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT_VALUE_ERROR: &str = "error";

/// A timeout caused the task run to be interrupted.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT_VALUE_TIMEOUT: &str = "timeout";

/// The task run was cancelled, eg. by a user manually cancelling the task run.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT_VALUE_CANCELLATION: &str = "cancellation";

/// The task run was skipped, eg. due to a precondition not being met.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_RESULT_VALUE_SKIP: &str = "skip";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CICD_PIPELINE_TASK_RUN_RESULT`].
    CicdPipelineTaskRunResult for CICD_PIPELINE_TASK_RUN_RESULT {
        /// The task run finished successfully.
        Success = "success",
        /// The task run did not finish successfully, eg. due to a compile error or a failing test.
        Failure = "failure",
        /// The task run failed due to an error in the CICD system, eg. due to the worker being killed.
        Error = "error",
        /// A timeout caused the task run to be interrupted.
        Timeout = "timeout",
        /// The task run was cancelled, eg. by a user manually cancelling the task run.
        Cancellation = "cancellation",
        /// The task run was skipped, eg. due to a precondition not being met.
        Skip = "skip",
    }
}

/// The URL of the pipeline task run, providing the complete address in order to locate and identify the pipeline task run.
///
/// Type: `string`. Examples: `"https://github.com/open-telemetry/semantic-conventions/actions/runs/9753949763/job/26920038674?pr=1075"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_RUN_URL_FULL: &str = "cicd.pipeline.task.run.url.full";

/// The type of the task within a pipeline.
///
/// Type: `string`. Examples: `"build"`, `"test"`, `"deploy"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_TYPE: &str = "cicd.pipeline.task.type";

/// build
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_TYPE_VALUE_BUILD: &str = "build";

/// test
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_TYPE_VALUE_TEST: &str = "test";

/// deploy
#[cfg(feature = "semconv_experimental")]
pub const CICD_PIPELINE_TASK_TYPE_VALUE_DEPLOY: &str = "deploy";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CICD_PIPELINE_TASK_TYPE`].
    CicdPipelineTaskType for CICD_PIPELINE_TASK_TYPE {
        /// build
        Build = "build",
        /// test
        Test = "test",
        /// deploy
        Deploy = "deploy",
    }
}

/// The name of a component of the CICD system.
///
/// Type: `string`. Examples: `"controller"`, `"scheduler"`, `"agent"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_SYSTEM_COMPONENT: &str = "cicd.system.component";

/// The unique identifier of a worker within a CICD system.
///
/// Type: `string`. Examples: `"abc123"`, `"10.0.1.2"`, `"controller"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_ID: &str = "cicd.worker.id";

/// The name of a worker within a CICD system.
///
/// Type: `string`. Examples: `"agent-abc"`, `"controller"`, `"Ubuntu LTS"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_NAME: &str = "cicd.worker.name";

/// The state of a CICD worker / agent.
///
/// Type: `string`. Examples: `"idle"`, `"busy"`, `"down"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_STATE: &str = "cicd.worker.state";

/// The worker is not performing work for the CICD system. It is available to the CICD system to perform work on (online / idle).
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_STATE_VALUE_AVAILABLE: &str = "available";

/// The worker is performing work for the CICD system.
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_STATE_VALUE_BUSY: &str = "busy";

/// The worker is not available to the CICD system (disconnected / down).
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_STATE_VALUE_OFFLINE: &str = "offline";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CICD_WORKER_STATE`].
    CicdWorkerState for CICD_WORKER_STATE {
        /// The worker is not performing work for the CICD system. It is available to the CICD system to perform work on (online / idle).
        Available = "available",
        /// The worker is performing work for the CICD system.
        Busy = "busy",
        /// The worker is not available to the CICD system (disconnected / down).
        Offline = "offline",
    }
}

/// The URL of the worker, providing the complete address in order to locate and identify the worker.
///
/// Type: `string`. Examples: `"https://cicd.example.org/worker/abc123"`.
#[cfg(feature = "semconv_experimental")]
pub const CICD_WORKER_URL_FULL: &str = "cicd.worker.url.full";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CICD_PIPELINE_ACTION_NAME", "cicd.pipeline.action.name", Experimental),
    Entry::value(
        "CICD_PIPELINE_ACTION_NAME_VALUE_BUILD",
        "cicd.pipeline.action.name",
        "BUILD",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_ACTION_NAME_VALUE_RUN",
        "cicd.pipeline.action.name",
        "RUN",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_ACTION_NAME_VALUE_SYNC",
        "cicd.pipeline.action.name",
        "SYNC",
        Experimental,
    ),
    Entry::attribute("CICD_PIPELINE_NAME", "cicd.pipeline.name", Experimental),
    Entry::attribute("CICD_PIPELINE_RESULT", "cicd.pipeline.result", Experimental),
    Entry::value(
        "CICD_PIPELINE_RESULT_VALUE_SUCCESS",
        "cicd.pipeline.result",
        "success",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_RESULT_VALUE_FAILURE",
        "cicd.pipeline.result",
        "failure",
        Experimental,
    ),
    Entry::value("CICD_PIPELINE_RESULT_VALUE_ERROR", "cicd.pipeline.result", "error", Experimental),
    Entry::value(
        "CICD_PIPELINE_RESULT_VALUE_TIMEOUT",
        "cicd.pipeline.result",
        "timeout",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_RESULT_VALUE_CANCELLATION",
        "cicd.pipeline.result",
        "cancellation",
        Experimental,
    ),
    Entry::value("CICD_PIPELINE_RESULT_VALUE_SKIP", "cicd.pipeline.result", "skip", Experimental),
    Entry::attribute("CICD_PIPELINE_RUN_ID", "cicd.pipeline.run.id", Experimental),
    Entry::attribute("CICD_PIPELINE_RUN_STATE", "cicd.pipeline.run.state", Experimental),
    Entry::value(
        "CICD_PIPELINE_RUN_STATE_VALUE_PENDING",
        "cicd.pipeline.run.state",
        "pending",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_RUN_STATE_VALUE_EXECUTING",
        "cicd.pipeline.run.state",
        "executing",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_RUN_STATE_VALUE_FINALIZING",
        "cicd.pipeline.run.state",
        "finalizing",
        Experimental,
    ),
    Entry::attribute("CICD_PIPELINE_RUN_URL_FULL", "cicd.pipeline.run.url.full", Experimental),
    Entry::attribute("CICD_PIPELINE_TASK_NAME", "cicd.pipeline.task.name", Experimental),
    Entry::attribute("CICD_PIPELINE_TASK_RUN_ID", "cicd.pipeline.task.run.id", Experimental),
    Entry::attribute(
        "CICD_PIPELINE_TASK_RUN_RESULT",
        "cicd.pipeline.task.run.result",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_RUN_RESULT_VALUE_SUCCESS",
        "cicd.pipeline.task.run.result",
        "success",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_RUN_RESULT_VALUE_FAILURE",
        "cicd.pipeline.task.run.result",
        "failure",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_RUN_RESULT_VALUE_ERROR",
        "cicd.pipeline.task.run.result",
        "error",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_RUN_RESULT_VALUE_TIMEOUT",
        "cicd.pipeline.task.run.result",
        "timeout",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_RUN_RESULT_VALUE_CANCELLATION",
        "cicd.pipeline.task.run.result",
        "cancellation",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_RUN_RESULT_VALUE_SKIP",
        "cicd.pipeline.task.run.result",
        "skip",
        Experimental,
    ),
    Entry::attribute(
        "CICD_PIPELINE_TASK_RUN_URL_FULL",
        "cicd.pipeline.task.run.url.full",
        Experimental,
    ),
    Entry::attribute("CICD_PIPELINE_TASK_TYPE", "cicd.pipeline.task.type", Experimental),
    Entry::value(
        "CICD_PIPELINE_TASK_TYPE_VALUE_BUILD",
        "cicd.pipeline.task.type",
        "build",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_TYPE_VALUE_TEST",
        "cicd.pipeline.task.type",
        "test",
        Experimental,
    ),
    Entry::value(
        "CICD_PIPELINE_TASK_TYPE_VALUE_DEPLOY",
        "cicd.pipeline.task.type",
        "deploy",
        Experimental,
    ),
    Entry::attribute("CICD_SYSTEM_COMPONENT", "cicd.system.component", Experimental),
    Entry::attribute("CICD_WORKER_ID", "cicd.worker.id", Experimental),
    Entry::attribute("CICD_WORKER_NAME", "cicd.worker.name", Experimental),
    Entry::attribute("CICD_WORKER_STATE", "cicd.worker.state", Experimental),
    Entry::value(
        "CICD_WORKER_STATE_VALUE_AVAILABLE",
        "cicd.worker.state",
        "available",
        Experimental,
    ),
    Entry::value("CICD_WORKER_STATE_VALUE_BUSY", "cicd.worker.state", "busy", Experimental),
    Entry::value("CICD_WORKER_STATE_VALUE_OFFLINE", "cicd.worker.state", "offline", Experimental),
    Entry::attribute("CICD_WORKER_URL_FULL", "cicd.worker.url.full", Experimental),
];
