// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! # Semantic Attributes
//!
//! Every attribute key defined by the semantic conventions, grouped into one
//! module per domain and re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry_semconv::attribute;
//!
//! assert_eq!(attribute::HTTP_REQUEST_METHOD, "http.request.method");
//! assert_eq!(attribute::HTTP_REQUEST_METHOD_VALUE_GET, "GET");
//! assert_eq!(
//!     attribute::http_request_header("accept"),
//!     "http.request.header.accept"
//! );
//! ```

pub mod android;
pub mod app;
pub mod artifact;
pub mod aspnetcore;
pub mod aws;
pub mod azure;
pub mod cicd;
pub mod cloud;
pub mod code;
pub mod container;
pub mod db;
pub mod error;
pub mod faas;
pub mod feature_flag;
pub mod file;
pub mod gen_ai;
pub mod geo;
pub mod graphql;
pub mod host;
pub mod http;
pub mod hw;
pub mod k8s;
pub mod log;
pub mod messaging;
pub mod network;
pub mod otel;
pub mod process;
pub mod rpc;
pub mod runtime;
pub mod security_rule;
pub mod service;
pub mod system;
pub mod test;
pub mod vcs;

#[cfg(feature = "semconv_experimental")]
pub use self::android::*;
#[cfg(feature = "semconv_experimental")]
pub use self::app::*;
#[cfg(feature = "semconv_experimental")]
pub use self::artifact::*;
pub use self::aspnetcore::*;
#[cfg(feature = "semconv_experimental")]
pub use self::aws::*;
#[cfg(feature = "semconv_experimental")]
pub use self::azure::*;
#[cfg(feature = "semconv_experimental")]
pub use self::cicd::*;
#[cfg(feature = "semconv_experimental")]
pub use self::cloud::*;
pub use self::code::*;
#[cfg(feature = "semconv_experimental")]
pub use self::container::*;
pub use self::db::*;
pub use self::error::*;
#[cfg(feature = "semconv_experimental")]
pub use self::faas::*;
#[cfg(feature = "semconv_experimental")]
pub use self::feature_flag::*;
#[cfg(feature = "semconv_experimental")]
pub use self::file::*;
#[cfg(feature = "semconv_experimental")]
pub use self::gen_ai::*;
#[cfg(feature = "semconv_experimental")]
pub use self::geo::*;
#[cfg(feature = "semconv_experimental")]
pub use self::graphql::*;
#[cfg(feature = "semconv_experimental")]
pub use self::host::*;
pub use self::http::*;
#[cfg(feature = "semconv_experimental")]
pub use self::hw::*;
#[cfg(feature = "semconv_experimental")]
pub use self::k8s::*;
#[cfg(feature = "semconv_experimental")]
pub use self::log::*;
#[cfg(feature = "semconv_experimental")]
pub use self::messaging::*;
pub use self::network::*;
pub use self::otel::*;
#[cfg(feature = "semconv_experimental")]
pub use self::process::*;
#[cfg(feature = "semconv_experimental")]
pub use self::rpc::*;
pub use self::runtime::*;
#[cfg(feature = "semconv_experimental")]
pub use self::security_rule::*;
pub use self::service::*;
#[cfg(feature = "semconv_experimental")]
pub use self::system::*;
#[cfg(feature = "semconv_experimental")]
pub use self::test::*;
#[cfg(feature = "semconv_experimental")]
pub use self::vcs::*;

pub(crate) static DOMAINS: &[&[crate::registry::Entry]] = &[
    android::ENTRIES,
    app::ENTRIES,
    artifact::ENTRIES,
    aspnetcore::ENTRIES,
    aws::ENTRIES,
    azure::ENTRIES,
    cicd::ENTRIES,
    cloud::ENTRIES,
    code::ENTRIES,
    container::ENTRIES,
    db::ENTRIES,
    error::ENTRIES,
    faas::ENTRIES,
    feature_flag::ENTRIES,
    file::ENTRIES,
    gen_ai::ENTRIES,
    geo::ENTRIES,
    graphql::ENTRIES,
    host::ENTRIES,
    http::ENTRIES,
    hw::ENTRIES,
    k8s::ENTRIES,
    log::ENTRIES,
    messaging::ENTRIES,
    network::ENTRIES,
    otel::ENTRIES,
    process::ENTRIES,
    rpc::ENTRIES,
    runtime::ENTRIES,
    security_rule::ENTRIES,
    service::ENTRIES,
    system::ENTRIES,
    test::ENTRIES,
    vcs::ENTRIES,
];

#[cfg(test)]
pub(crate) static TYPED_ENUMS: &[crate::value::EnumLiterals] = &[
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<android::AndroidAppState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<android::IosAppState>,
    crate::value::literals::<aspnetcore::AspnetcoreDiagnosticsExceptionResult>,
    crate::value::literals::<aspnetcore::AspnetcoreRateLimitingResult>,
    crate::value::literals::<aspnetcore::AspnetcoreRoutingMatchStatus>,
    crate::value::literals::<aspnetcore::SignalrConnectionStatus>,
    crate::value::literals::<aspnetcore::SignalrTransport>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<aws::AwsEcsLaunchtype>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<azure::AzureCosmosdbConnectionMode>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<azure::AzureCosmosdbConsistencyLevel>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cicd::CicdPipelineActionName>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cicd::CicdPipelineResult>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cicd::CicdPipelineRunState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cicd::CicdPipelineTaskRunResult>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cicd::CicdPipelineTaskType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cicd::CicdWorkerState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cloud::CloudPlatform>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cloud::CloudProvider>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cloud::GcpApphubServiceCriticalityType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cloud::GcpApphubServiceEnvironmentType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cloud::GcpApphubWorkloadCriticalityType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<cloud::GcpApphubWorkloadEnvironmentType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<code::ProfileFrameType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<db::CassandraConsistencyLevel>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<db::DbClientConnectionState>,
    crate::value::literals::<db::DbSystemName>,
    crate::value::literals::<error::ErrorType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<faas::FaasDocumentOperation>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<faas::FaasInvokedProvider>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<faas::FaasTrigger>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<feature_flag::FeatureFlagResultReason>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<gen_ai::GenAiOperationName>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<gen_ai::GenAiOutputType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<gen_ai::GenAiSystem>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<gen_ai::GenAiTokenType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<gen_ai::OpenaiRequestServiceTier>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<geo::GeoContinentCode>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<graphql::GraphqlOperationType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<host::HostArch>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<host::OsType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<http::HttpConnectionState>,
    crate::value::literals::<http::HttpRequestMethod>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<http::UserAgentSyntheticType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwBatteryState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwGpuTask>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwLimitType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwLogicalDiskState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwPhysicalDiskState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwTapeDriveOperationType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<hw::HwType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<k8s::K8sContainerStatusReason>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<k8s::K8sContainerStatusState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<k8s::K8sNamespacePhase>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<k8s::K8sNodeConditionStatus>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<k8s::K8sNodeConditionType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<k8s::K8sVolumeType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<log::LogIostream>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<messaging::MessagingOperationType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<messaging::MessagingRocketmqConsumptionModel>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<messaging::MessagingRocketmqMessageType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<messaging::MessagingServicebusDispositionStatus>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<messaging::MessagingSystem>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<network::NetworkConnectionState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<network::NetworkConnectionSubtype>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<network::NetworkConnectionType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<network::NetworkIoDirection>,
    crate::value::literals::<network::NetworkTransport>,
    crate::value::literals::<network::NetworkType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<network::TlsProtocolName>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<otel::OpentracingRefType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<otel::OtelComponentType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<otel::OtelSpanParentOrigin>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<otel::OtelSpanSamplingResult>,
    crate::value::literals::<otel::OtelStatusCode>,
    crate::value::literals::<otel::TelemetrySdkLanguage>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<process::ProcessContextSwitchType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<process::ProcessPagingFaultType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<process::ProcessState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<rpc::RpcConnectRpcErrorCode>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<rpc::RpcMessageType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<rpc::RpcSystem>,
    crate::value::literals::<runtime::DotnetGcHeapGeneration>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<runtime::GoMemoryType>,
    crate::value::literals::<runtime::JvmMemoryType>,
    crate::value::literals::<runtime::JvmThreadState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<runtime::NodejsEventloopState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<runtime::V8jsGcType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<runtime::V8jsHeapSpaceName>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<service::DeploymentStatus>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::CpuMode>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::DiskIoDirection>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::LinuxMemorySlabState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemFilesystemState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemFilesystemType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemMemoryState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemPagingDirection>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemPagingState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemPagingType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<system::SystemProcessStatus>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<test::TestCaseResultStatus>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<test::TestSuiteRunStatus>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsChangeState>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsLineChangeType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsProviderName>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsRefBaseType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsRefHeadType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsRefType>,
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<vcs::VcsRevisionDeltaDirection>,
];
