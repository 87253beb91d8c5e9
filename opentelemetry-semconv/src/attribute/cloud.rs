// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `cloud`, `cloudevents`, `cloudfoundry`, `gcp`, `heroku` namespaces.

use crate::registry::{Entry, Stability::*};

/// The cloud account ID the resource is assigned to.
///
/// Type: `string`. Examples: `"111111111111"`, `"opentelemetry"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_ACCOUNT_ID: &str = "cloud.account.id";

/// Cloud regions often have multiple, isolated locations known as zones to increase availability. Availability zone represents the zone where the resource is running.
///
/// Type: `string`. Examples: `"us-east-1c"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_AVAILABILITY_ZONE: &str = "cloud.availability_zone";

/// The cloud platform in use.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM: &str = "cloud.platform";

/// Alibaba Cloud Elastic Compute Service
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_ALIBABA_CLOUD_ECS: &str = "alibaba_cloud_ecs";

/// Alibaba Cloud Function Compute
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_ALIBABA_CLOUD_FC: &str = "alibaba_cloud_fc";

/// Red Hat OpenShift on Alibaba Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_ALIBABA_CLOUD_OPENSHIFT: &str = "alibaba_cloud_openshift";

/// AWS Elastic Compute Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_EC2: &str = "aws_ec2";

/// AWS Elastic Container Service
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_ECS: &str = "aws_ecs";

/// AWS Elastic Kubernetes Service
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_EKS: &str = "aws_eks";

/// AWS Lambda
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_LAMBDA: &str = "aws_lambda";

/// AWS Elastic Beanstalk
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_ELASTIC_BEANSTALK: &str = "aws_elastic_beanstalk";

/// AWS App Runner
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_APP_RUNNER: &str = "aws_app_runner";

/// Red Hat OpenShift on AWS (ROSA)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AWS_OPENSHIFT: &str = "aws_openshift";

/// Azure Virtual Machines
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_VM: &str = "azure.vm";

/// Azure Container Apps
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_CONTAINER_APPS: &str = "azure.container_apps";

/// Azure Container Instances
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_CONTAINER_INSTANCES: &str = "azure.container_instances";

/// Azure Kubernetes Service
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_AKS: &str = "azure.aks";

/// Azure Functions
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_FUNCTIONS: &str = "azure.functions";

/// Azure App Service
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_APP_SERVICE: &str = "azure.app_service";

/// Azure Red Hat OpenShift
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_AZURE_OPENSHIFT: &str = "azure.openshift";

/// Google Bare Metal Solution (BMS)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_BARE_METAL_SOLUTION: &str = "gcp_bare_metal_solution";

/// Google Cloud Compute Engine (GCE)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_COMPUTE_ENGINE: &str = "gcp_compute_engine";

/// Google Cloud Run
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_CLOUD_RUN: &str = "gcp_cloud_run";

/// Google Cloud Kubernetes Engine (GKE)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_KUBERNETES_ENGINE: &str = "gcp_kubernetes_engine";

/// Google Cloud Functions (GCF)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_CLOUD_FUNCTIONS: &str = "gcp_cloud_functions";

/// Google Cloud App Engine (GAE)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_APP_ENGINE: &str = "gcp_app_engine";

/// Red Hat OpenShift on Google Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_GCP_OPENSHIFT: &str = "gcp_openshift";

/// Red Hat OpenShift on IBM Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_IBM_CLOUD_OPENSHIFT: &str = "ibm_cloud_openshift";

/// Compute on Oracle Cloud Infrastructure (OCI)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_ORACLE_CLOUD_COMPUTE: &str = "oracle_cloud.compute";

/// Kubernetes Engine (OKE) on Oracle Cloud Infrastructure (OCI)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_ORACLE_CLOUD_OKE: &str = "oracle_cloud.oke";

/// Tencent Cloud Cloud Virtual Machine (CVM)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_TENCENT_CLOUD_CVM: &str = "tencent_cloud_cvm";

/// Tencent Cloud Elastic Kubernetes Service (EKS)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_TENCENT_CLOUD_EKS: &str = "tencent_cloud_eks";

/// Tencent Cloud Serverless Cloud Function (SCF)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PLATFORM_VALUE_TENCENT_CLOUD_SCF: &str = "tencent_cloud_scf";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CLOUD_PLATFORM`].
    CloudPlatform for CLOUD_PLATFORM {
        /// Alibaba Cloud Elastic Compute Service
        AlibabaCloudEcs = "alibaba_cloud_ecs",
        /// Alibaba Cloud Function Compute
        AlibabaCloudFc = "alibaba_cloud_fc",
        /// Red Hat OpenShift on Alibaba Cloud
        AlibabaCloudOpenshift = "alibaba_cloud_openshift",
        /// AWS Elastic Compute Cloud
        AwsEc2 = "aws_ec2",
        /// AWS Elastic Container Service
        AwsEcs = "aws_ecs",
        /// AWS Elastic Kubernetes Service
        AwsEks = "aws_eks",
        /// AWS Lambda
        AwsLambda = "aws_lambda",
        /// AWS Elastic Beanstalk
        AwsElasticBeanstalk = "aws_elastic_beanstalk",
        /// AWS App Runner
        AwsAppRunner = "aws_app_runner",
        /// Red Hat OpenShift on AWS (ROSA)
        AwsOpenshift = "aws_openshift",
        /// Azure Virtual Machines
        AzureVm = "azure.vm",
        /// Azure Container Apps
        AzureContainerApps = "azure.container_apps",
        /// Azure Container Instances
        AzureContainerInstances = "azure.container_instances",
        /// Azure Kubernetes Service
        AzureAks = "azure.aks",
        /// Azure Functions
        AzureFunctions = "azure.functions",
        /// Azure App Service
        AzureAppService = "azure.app_service",
        /// Azure Red Hat OpenShift
        AzureOpenshift = "azure.openshift",
        /// Google Bare Metal Solution (BMS)
        GcpBareMetalSolution = "gcp_bare_metal_solution",
        /// Google Cloud Compute Engine (GCE)
        GcpComputeEngine = "gcp_compute_engine",
        /// Google Cloud Run
        GcpCloudRun = "gcp_cloud_run",
        /// Google Cloud Kubernetes Engine (GKE)
        GcpKubernetesEngine = "gcp_kubernetes_engine",
        /// Google Cloud Functions (GCF)
        GcpCloudFunctions = "gcp_cloud_functions",
        /// Google Cloud App Engine (GAE)
        GcpAppEngine = "gcp_app_engine",
        /// Red Hat OpenShift on Google Cloud
        GcpOpenshift = "gcp_openshift",
        /// Red Hat OpenShift on IBM Cloud
        IbmCloudOpenshift = "ibm_cloud_openshift",
        /// Compute on Oracle Cloud Infrastructure (OCI)
        OracleCloudCompute = "oracle_cloud.compute",
        /// Kubernetes Engine (OKE) on Oracle Cloud Infrastructure (OCI)
        OracleCloudOke = "oracle_cloud.oke",
        /// Tencent Cloud Cloud Virtual Machine (CVM)
        TencentCloudCvm = "tencent_cloud_cvm",
        /// Tencent Cloud Elastic Kubernetes Service (EKS)
        TencentCloudEks = "tencent_cloud_eks",
        /// Tencent Cloud Serverless Cloud Function (SCF)
        TencentCloudScf = "tencent_cloud_scf",
    }
}

/// Name of the cloud provider.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER: &str = "cloud.provider";

/// Alibaba Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_ALIBABA_CLOUD: &str = "alibaba_cloud";

/// Amazon Web Services
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_AWS: &str = "aws";

/// Microsoft Azure
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_AZURE: &str = "azure";

/// Google Cloud Platform
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_GCP: &str = "gcp";

/// Heroku Platform as a Service
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_HEROKU: &str = "heroku";

/// IBM Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_IBM_CLOUD: &str = "ibm_cloud";

/// Oracle Cloud Infrastructure (OCI)
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_ORACLE_CLOUD: &str = "oracle_cloud";

/// Tencent Cloud
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_PROVIDER_VALUE_TENCENT_CLOUD: &str = "tencent_cloud";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CLOUD_PROVIDER`].
    CloudProvider for CLOUD_PROVIDER {
        /// Alibaba Cloud
        AlibabaCloud = "alibaba_cloud",
        /// Amazon Web Services
        Aws = "aws",
        /// Microsoft Azure
        Azure = "azure",
        /// Google Cloud Platform
        Gcp = "gcp",
        /// Heroku Platform as a Service
        Heroku = "heroku",
        /// IBM Cloud
        IbmCloud = "ibm_cloud",
        /// Oracle Cloud Infrastructure (OCI)
        OracleCloud = "oracle_cloud",
        /// Tencent Cloud
        TencentCloud = "tencent_cloud",
    }
}

/// The geographical region within a cloud provider. When associated with a resource, this attribute specifies the region where the resource operates.
///
/// Type: `string`. Examples: `"us-central1"`, `"us-east-1"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_REGION: &str = "cloud.region";

/// Cloud provider-specific native identifier of the monitored cloud resource (e.g. an ARN on AWS, a fully qualified resource ID on Azure, a full resource name on GCP)
///
/// Type: `string`. Examples: `"arn:aws:lambda:REGION:ACCOUNT_ID:function:my-function"`, `"//run.googleapis.com/projects/PROJECT_ID/locations/LOCATION_ID/services/SERVICE_ID"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUD_RESOURCE_ID: &str = "cloud.resource_id";

/// The event_id uniquely identifies the event.
///
/// Type: `string`. Examples: `"123e4567-e89b-12d3-a456-426614174000"`, `"0001"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDEVENTS_EVENT_ID: &str = "cloudevents.event_id";

/// The source identifies the context in which an event happened.
///
/// Type: `string`. Examples: `"https://github.com/cloudevents"`, `"/cloudevents/spec/pull/123"`, `"my-service"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDEVENTS_EVENT_SOURCE: &str = "cloudevents.event_source";

/// The version of the CloudEvents specification which the event uses.
///
/// Type: `string`. Examples: `"1.0"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDEVENTS_EVENT_SPEC_VERSION: &str = "cloudevents.event_spec_version";

/// The subject of the event in the context of the event producer (identified by source).
///
/// Type: `string`. Examples: `"mynewfile.jpg"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDEVENTS_EVENT_SUBJECT: &str = "cloudevents.event_subject";

/// The event_type contains a value describing the type of event related to the originating occurrence.
///
/// Type: `string`. Examples: `"com.github.pull_request.opened"`, `"com.example.object.deleted.v2"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDEVENTS_EVENT_TYPE: &str = "cloudevents.event_type";

/// The guid of the application.
///
/// Type: `string`. Examples: `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_APP_ID: &str = "cloudfoundry.app.id";

/// The index of the application instance. 0 when just one instance is active.
///
/// Type: `string`. Examples: `"0"`, `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_APP_INSTANCE_ID: &str = "cloudfoundry.app.instance.id";

/// The name of the application.
///
/// Type: `string`. Examples: `"my-app-name"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_APP_NAME: &str = "cloudfoundry.app.name";

/// The guid of the CloudFoundry org the application is running in.
///
/// Type: `string`. Examples: `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_ORG_ID: &str = "cloudfoundry.org.id";

/// The name of the CloudFoundry organization the app is running in.
///
/// Type: `string`. Examples: `"my-org-name"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_ORG_NAME: &str = "cloudfoundry.org.name";

/// The UID identifying the process.
///
/// Type: `string`. Examples: `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_PROCESS_ID: &str = "cloudfoundry.process.id";

/// The type of process.
///
/// Type: `string`. Examples: `"web"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_PROCESS_TYPE: &str = "cloudfoundry.process.type";

/// The guid of the CloudFoundry space the application is running in.
///
/// Type: `string`. Examples: `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_SPACE_ID: &str = "cloudfoundry.space.id";

/// The name of the CloudFoundry space the application is running in.
///
/// Type: `string`. Examples: `"my-space-name"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_SPACE_NAME: &str = "cloudfoundry.space.name";

/// A guid or another name describing the event source.
///
/// Type: `string`. Examples: `"cf/gorouter"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_SYSTEM_ID: &str = "cloudfoundry.system.id";

/// A guid describing the concrete instance of the event source.
///
/// Type: `string`. Examples: `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`.
#[cfg(feature = "semconv_experimental")]
pub const CLOUDFOUNDRY_SYSTEM_INSTANCE_ID: &str = "cloudfoundry.system.instance.id";

/// The container within GCP where the AppHub application is defined.
///
/// Type: `string`. Examples: `"projects/my-container-project"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_APPLICATION_CONTAINER: &str = "gcp.apphub.application.container";

/// The name of the application as configured in AppHub.
///
/// Type: `string`. Examples: `"my-application"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_APPLICATION_ID: &str = "gcp.apphub.application.id";

/// The GCP zone or region where the application is defined.
///
/// Type: `string`. Examples: `"us-central1"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_APPLICATION_LOCATION: &str = "gcp.apphub.application.location";

/// Criticality of a service indicates its importance to the business.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_CRITICALITY_TYPE: &str = "gcp.apphub.service.criticality_type";

/// Mission critical service.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_MISSION_CRITICAL: &str = "MISSION_CRITICAL";

/// High impact.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_HIGH: &str = "HIGH";

/// Medium impact.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_MEDIUM: &str = "MEDIUM";

/// Low impact.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_LOW: &str = "LOW";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GCP_APPHUB_SERVICE_CRITICALITY_TYPE`].
    GcpApphubServiceCriticalityType for GCP_APPHUB_SERVICE_CRITICALITY_TYPE {
        /// Mission critical service.
        MissionCritical = "MISSION_CRITICAL",
        /// High impact.
        High = "HIGH",
        /// Medium impact.
        Medium = "MEDIUM",
        /// Low impact.
        Low = "LOW",
    }
}

/// Environment of a service is the stage of a software lifecycle.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE: &str = "gcp.apphub.service.environment_type";

/// Production environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_PRODUCTION: &str = "PRODUCTION";

/// Staging environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_STAGING: &str = "STAGING";

/// Test environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_TEST: &str = "TEST";

/// Development environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_DEVELOPMENT: &str = "DEVELOPMENT";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE`].
    GcpApphubServiceEnvironmentType for GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE {
        /// Production environment.
        Production = "PRODUCTION",
        /// Staging environment.
        Staging = "STAGING",
        /// Test environment.
        Test = "TEST",
        /// Development environment.
        Development = "DEVELOPMENT",
    }
}

/// The name of the service as configured in AppHub.
///
/// Type: `string`. Examples: `"my-service"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_SERVICE_ID: &str = "gcp.apphub.service.id";

/// Criticality of a workload indicates its importance to the business.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE: &str = "gcp.apphub.workload.criticality_type";

/// Mission critical service.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_MISSION_CRITICAL: &str = "MISSION_CRITICAL";

/// High impact.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_HIGH: &str = "HIGH";

/// Medium impact.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_MEDIUM: &str = "MEDIUM";

/// Low impact.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_LOW: &str = "LOW";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE`].
    GcpApphubWorkloadCriticalityType for GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE {
        /// Mission critical service.
        MissionCritical = "MISSION_CRITICAL",
        /// High impact.
        High = "HIGH",
        /// Medium impact.
        Medium = "MEDIUM",
        /// Low impact.
        Low = "LOW",
    }
}

/// Environment of a workload is the stage of a software lifecycle.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE: &str = "gcp.apphub.workload.environment_type";

/// Production environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_PRODUCTION: &str = "PRODUCTION";

/// Staging environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_STAGING: &str = "STAGING";

/// Test environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_TEST: &str = "TEST";

/// Development environment.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_DEVELOPMENT: &str = "DEVELOPMENT";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE`].
    GcpApphubWorkloadEnvironmentType for GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE {
        /// Production environment.
        Production = "PRODUCTION",
        /// Staging environment.
        Staging = "STAGING",
        /// Test environment.
        Test = "TEST",
        /// Development environment.
        Development = "DEVELOPMENT",
    }
}

/// The name of the workload as configured in AppHub.
///
/// Type: `string`. Examples: `"my-workload"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_APPHUB_WORKLOAD_ID: &str = "gcp.apphub.workload.id";

/// Identifies the Google Cloud service for which the official client library is intended.
///
/// Type: `string`. Examples: `"appengine"`, `"run"`, `"firestore"`, `"alloydb"`, `"spanner"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_CLIENT_SERVICE: &str = "gcp.client.service";

/// The name of the Cloud Run execution being run for the Job, as set by the `CLOUD_RUN_EXECUTION` environment variable.
///
/// Type: `string`. Examples: `"job-name-xxxx"`, `"sample-job-mdw84"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_CLOUD_RUN_JOB_EXECUTION: &str = "gcp.cloud_run.job.execution";

/// The index for a task within an execution as provided by the `CLOUD_RUN_TASK_INDEX` environment variable.
///
/// Type: `int`. Examples: `0`, `1`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_CLOUD_RUN_JOB_TASK_INDEX: &str = "gcp.cloud_run.job.task_index";

/// The hostname of a GCE instance. This is the full value of the default or custom hostname.
///
/// Type: `string`. Examples: `"my-host1234.example.com"`, `"sample-vm.us-west1-b.c.my-project.internal"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_GCE_INSTANCE_HOSTNAME: &str = "gcp.gce.instance.hostname";

/// The instance name of a GCE instance. This is the value provided by `host.name`, the visible name of the instance in the Cloud Console UI, and the prefix for the default hostname of the instance as defined by the default internal DNS name.
///
/// Type: `string`. Examples: `"instance-1"`, `"my-vm-name"`.
#[cfg(feature = "semconv_experimental")]
pub const GCP_GCE_INSTANCE_NAME: &str = "gcp.gce.instance.name";

/// Unique identifier for the application
///
/// Type: `string`. Examples: `"2daa2797-e42b-4624-9322-ec3f968df4da"`.
#[cfg(feature = "semconv_experimental")]
pub const HEROKU_APP_ID: &str = "heroku.app.id";

/// Commit hash for the current release
///
/// Type: `string`. Examples: `"e6134959463efd8966b20e75b913cafe3f5ec"`.
#[cfg(feature = "semconv_experimental")]
pub const HEROKU_RELEASE_COMMIT: &str = "heroku.release.commit";

/// Time and date the release was created
///
/// Type: `string`. Examples: `"2022-10-23T18:00:42Z"`.
#[cfg(feature = "semconv_experimental")]
pub const HEROKU_RELEASE_CREATION_TIMESTAMP: &str = "heroku.release.creation_timestamp";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CLOUD_ACCOUNT_ID", "cloud.account.id", Experimental),
    Entry::attribute("CLOUD_AVAILABILITY_ZONE", "cloud.availability_zone", Experimental),
    Entry::attribute("CLOUD_PLATFORM", "cloud.platform", Experimental),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_ALIBABA_CLOUD_ECS",
        "cloud.platform",
        "alibaba_cloud_ecs",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_ALIBABA_CLOUD_FC",
        "cloud.platform",
        "alibaba_cloud_fc",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_ALIBABA_CLOUD_OPENSHIFT",
        "cloud.platform",
        "alibaba_cloud_openshift",
        Experimental,
    ),
    Entry::value("CLOUD_PLATFORM_VALUE_AWS_EC2", "cloud.platform", "aws_ec2", Experimental),
    Entry::value("CLOUD_PLATFORM_VALUE_AWS_ECS", "cloud.platform", "aws_ecs", Experimental),
    Entry::value("CLOUD_PLATFORM_VALUE_AWS_EKS", "cloud.platform", "aws_eks", Experimental),
    Entry::value("CLOUD_PLATFORM_VALUE_AWS_LAMBDA", "cloud.platform", "aws_lambda", Experimental),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AWS_ELASTIC_BEANSTALK",
        "cloud.platform",
        "aws_elastic_beanstalk",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AWS_APP_RUNNER",
        "cloud.platform",
        "aws_app_runner",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AWS_OPENSHIFT",
        "cloud.platform",
        "aws_openshift",
        Experimental,
    ),
    Entry::value("CLOUD_PLATFORM_VALUE_AZURE_VM", "cloud.platform", "azure.vm", Experimental),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AZURE_CONTAINER_APPS",
        "cloud.platform",
        "azure.container_apps",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AZURE_CONTAINER_INSTANCES",
        "cloud.platform",
        "azure.container_instances",
        Experimental,
    ),
    Entry::value("CLOUD_PLATFORM_VALUE_AZURE_AKS", "cloud.platform", "azure.aks", Experimental),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AZURE_FUNCTIONS",
        "cloud.platform",
        "azure.functions",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AZURE_APP_SERVICE",
        "cloud.platform",
        "azure.app_service",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_AZURE_OPENSHIFT",
        "cloud.platform",
        "azure.openshift",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_BARE_METAL_SOLUTION",
        "cloud.platform",
        "gcp_bare_metal_solution",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_COMPUTE_ENGINE",
        "cloud.platform",
        "gcp_compute_engine",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_CLOUD_RUN",
        "cloud.platform",
        "gcp_cloud_run",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_KUBERNETES_ENGINE",
        "cloud.platform",
        "gcp_kubernetes_engine",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_CLOUD_FUNCTIONS",
        "cloud.platform",
        "gcp_cloud_functions",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_APP_ENGINE",
        "cloud.platform",
        "gcp_app_engine",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_GCP_OPENSHIFT",
        "cloud.platform",
        "gcp_openshift",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_IBM_CLOUD_OPENSHIFT",
        "cloud.platform",
        "ibm_cloud_openshift",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_ORACLE_CLOUD_COMPUTE",
        "cloud.platform",
        "oracle_cloud.compute",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_ORACLE_CLOUD_OKE",
        "cloud.platform",
        "oracle_cloud.oke",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_TENCENT_CLOUD_CVM",
        "cloud.platform",
        "tencent_cloud_cvm",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_TENCENT_CLOUD_EKS",
        "cloud.platform",
        "tencent_cloud_eks",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PLATFORM_VALUE_TENCENT_CLOUD_SCF",
        "cloud.platform",
        "tencent_cloud_scf",
        Experimental,
    ),
    Entry::attribute("CLOUD_PROVIDER", "cloud.provider", Experimental),
    Entry::value(
        "CLOUD_PROVIDER_VALUE_ALIBABA_CLOUD",
        "cloud.provider",
        "alibaba_cloud",
        Experimental,
    ),
    Entry::value("CLOUD_PROVIDER_VALUE_AWS", "cloud.provider", "aws", Experimental),
    Entry::value("CLOUD_PROVIDER_VALUE_AZURE", "cloud.provider", "azure", Experimental),
    Entry::value("CLOUD_PROVIDER_VALUE_GCP", "cloud.provider", "gcp", Experimental),
    Entry::value("CLOUD_PROVIDER_VALUE_HEROKU", "cloud.provider", "heroku", Experimental),
    Entry::value("CLOUD_PROVIDER_VALUE_IBM_CLOUD", "cloud.provider", "ibm_cloud", Experimental),
    Entry::value(
        "CLOUD_PROVIDER_VALUE_ORACLE_CLOUD",
        "cloud.provider",
        "oracle_cloud",
        Experimental,
    ),
    Entry::value(
        "CLOUD_PROVIDER_VALUE_TENCENT_CLOUD",
        "cloud.provider",
        "tencent_cloud",
        Experimental,
    ),
    Entry::attribute("CLOUD_REGION", "cloud.region", Experimental),
    Entry::attribute("CLOUD_RESOURCE_ID", "cloud.resource_id", Experimental),
    Entry::attribute("CLOUDEVENTS_EVENT_ID", "cloudevents.event_id", Experimental),
    Entry::attribute("CLOUDEVENTS_EVENT_SOURCE", "cloudevents.event_source", Experimental),
    Entry::attribute(
        "CLOUDEVENTS_EVENT_SPEC_VERSION",
        "cloudevents.event_spec_version",
        Experimental,
    ),
    Entry::attribute("CLOUDEVENTS_EVENT_SUBJECT", "cloudevents.event_subject", Experimental),
    Entry::attribute("CLOUDEVENTS_EVENT_TYPE", "cloudevents.event_type", Experimental),
    Entry::attribute("CLOUDFOUNDRY_APP_ID", "cloudfoundry.app.id", Experimental),
    Entry::attribute("CLOUDFOUNDRY_APP_INSTANCE_ID", "cloudfoundry.app.instance.id", Experimental),
    Entry::attribute("CLOUDFOUNDRY_APP_NAME", "cloudfoundry.app.name", Experimental),
    Entry::attribute("CLOUDFOUNDRY_ORG_ID", "cloudfoundry.org.id", Experimental),
    Entry::attribute("CLOUDFOUNDRY_ORG_NAME", "cloudfoundry.org.name", Experimental),
    Entry::attribute("CLOUDFOUNDRY_PROCESS_ID", "cloudfoundry.process.id", Experimental),
    Entry::attribute("CLOUDFOUNDRY_PROCESS_TYPE", "cloudfoundry.process.type", Experimental),
    Entry::attribute("CLOUDFOUNDRY_SPACE_ID", "cloudfoundry.space.id", Experimental),
    Entry::attribute("CLOUDFOUNDRY_SPACE_NAME", "cloudfoundry.space.name", Experimental),
    Entry::attribute("CLOUDFOUNDRY_SYSTEM_ID", "cloudfoundry.system.id", Experimental),
    Entry::attribute(
        "CLOUDFOUNDRY_SYSTEM_INSTANCE_ID",
        "cloudfoundry.system.instance.id",
        Experimental,
    ),
    Entry::attribute(
        "GCP_APPHUB_APPLICATION_CONTAINER",
        "gcp.apphub.application.container",
        Experimental,
    ),
    Entry::attribute("GCP_APPHUB_APPLICATION_ID", "gcp.apphub.application.id", Experimental),
    Entry::attribute(
        "GCP_APPHUB_APPLICATION_LOCATION",
        "gcp.apphub.application.location",
        Experimental,
    ),
    Entry::attribute(
        "GCP_APPHUB_SERVICE_CRITICALITY_TYPE",
        "gcp.apphub.service.criticality_type",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_MISSION_CRITICAL",
        "gcp.apphub.service.criticality_type",
        "MISSION_CRITICAL",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_HIGH",
        "gcp.apphub.service.criticality_type",
        "HIGH",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_MEDIUM",
        "gcp.apphub.service.criticality_type",
        "MEDIUM",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_CRITICALITY_TYPE_VALUE_LOW",
        "gcp.apphub.service.criticality_type",
        "LOW",
        Experimental,
    ),
    Entry::attribute(
        "GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE",
        "gcp.apphub.service.environment_type",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_PRODUCTION",
        "gcp.apphub.service.environment_type",
        "PRODUCTION",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_STAGING",
        "gcp.apphub.service.environment_type",
        "STAGING",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_TEST",
        "gcp.apphub.service.environment_type",
        "TEST",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_SERVICE_ENVIRONMENT_TYPE_VALUE_DEVELOPMENT",
        "gcp.apphub.service.environment_type",
        "DEVELOPMENT",
        Experimental,
    ),
    Entry::attribute("GCP_APPHUB_SERVICE_ID", "gcp.apphub.service.id", Experimental),
    Entry::attribute(
        "GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE",
        "gcp.apphub.workload.criticality_type",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_MISSION_CRITICAL",
        "gcp.apphub.workload.criticality_type",
        "MISSION_CRITICAL",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_HIGH",
        "gcp.apphub.workload.criticality_type",
        "HIGH",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_MEDIUM",
        "gcp.apphub.workload.criticality_type",
        "MEDIUM",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_CRITICALITY_TYPE_VALUE_LOW",
        "gcp.apphub.workload.criticality_type",
        "LOW",
        Experimental,
    ),
    Entry::attribute(
        "GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE",
        "gcp.apphub.workload.environment_type",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_PRODUCTION",
        "gcp.apphub.workload.environment_type",
        "PRODUCTION",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_STAGING",
        "gcp.apphub.workload.environment_type",
        "STAGING",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_TEST",
        "gcp.apphub.workload.environment_type",
        "TEST",
        Experimental,
    ),
    Entry::value(
        "GCP_APPHUB_WORKLOAD_ENVIRONMENT_TYPE_VALUE_DEVELOPMENT",
        "gcp.apphub.workload.environment_type",
        "DEVELOPMENT",
        Experimental,
    ),
    Entry::attribute("GCP_APPHUB_WORKLOAD_ID", "gcp.apphub.workload.id", Experimental),
    Entry::attribute("GCP_CLIENT_SERVICE", "gcp.client.service", Experimental),
    Entry::attribute("GCP_CLOUD_RUN_JOB_EXECUTION", "gcp.cloud_run.job.execution", Experimental),
    Entry::attribute("GCP_CLOUD_RUN_JOB_TASK_INDEX", "gcp.cloud_run.job.task_index", Experimental),
    Entry::attribute("GCP_GCE_INSTANCE_HOSTNAME", "gcp.gce.instance.hostname", Experimental),
    Entry::attribute("GCP_GCE_INSTANCE_NAME", "gcp.gce.instance.name", Experimental),
    Entry::attribute("HEROKU_APP_ID", "heroku.app.id", Experimental),
    Entry::attribute("HEROKU_RELEASE_COMMIT", "heroku.release.commit", Experimental),
    Entry::attribute(
        "HEROKU_RELEASE_CREATION_TIMESTAMP",
        "heroku.release.creation_timestamp",
        Experimental,
    ),
];
