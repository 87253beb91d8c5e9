// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `faas` namespace.

use crate::registry::{Entry, Stability::*};

/// A boolean that is true if the serverless function is executed for the first time (aka cold-start).
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_COLDSTART: &str = "faas.coldstart";

/// A string containing the schedule period as Cron Expression.
///
/// Type: `string`. Examples: `"0/5 * * * ? *"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_CRON: &str = "faas.cron";

/// The name of the source on which the triggering operation was performed. For example, in Cloud Storage or S3 corresponds to the bucket name, and in Cosmos DB to the database name.
///
/// Type: `string`. Examples: `"myBucketName"`, `"myDbName"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_COLLECTION: &str = "faas.document.collection";

/// The document name/table subjected to the operation. For example, in Cloud Storage or S3 is the name of the file, and in Cosmos DB the table name.
///
/// Type: `string`. Examples: `"myFile.txt"`, `"myTableName"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_NAME: &str = "faas.document.name";

/// Describes the type of the operation that was performed on the data.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_OPERATION: &str = "faas.document.operation";

/// When a new object is created.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_OPERATION_VALUE_INSERT: &str = "insert";

/// When an object is modified.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_OPERATION_VALUE_EDIT: &str = "edit";

/// When an object is deleted.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_OPERATION_VALUE_DELETE: &str = "delete";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`FAAS_DOCUMENT_OPERATION`].
    FaasDocumentOperation for FAAS_DOCUMENT_OPERATION {
        /// When a new object is created.
        Insert = "insert",
        /// When an object is modified.
        Edit = "edit",
        /// When an object is deleted.
        Delete = "delete",
    }
}

/// A string containing the time when the data was accessed in the ISO 8601 format expressed in UTC.
///
/// Type: `string`. Examples: `"2020-01-23T13:47:06Z"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_DOCUMENT_TIME: &str = "faas.document.time";

/// The execution environment ID as a string, that will be potentially reused for other invocations to the same function/function version.
///
/// Type: `string`. Examples: `"2021/06/28/[$LATEST]2f399eb14537447da05ab2a2e39309de"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INSTANCE: &str = "faas.instance";

/// The invocation ID of the current function invocation.
///
/// Type: `string`. Examples: `"af9d5aa4-a685-4c5f-a22b-444f80b3cc28"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOCATION_ID: &str = "faas.invocation_id";

/// The name of the invoked function.
///
/// Type: `string`. Examples: `"my-function"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_NAME: &str = "faas.invoked_name";

/// The cloud provider of the invoked function.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_PROVIDER: &str = "faas.invoked_provider";

/// Alibaba Cloud
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_PROVIDER_VALUE_ALIBABA_CLOUD: &str = "alibaba_cloud";

/// Amazon Web Services
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_PROVIDER_VALUE_AWS: &str = "aws";

/// Microsoft Azure
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_PROVIDER_VALUE_AZURE: &str = "azure";

/// Google Cloud Platform
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_PROVIDER_VALUE_GCP: &str = "gcp";

/// Tencent Cloud
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_PROVIDER_VALUE_TENCENT_CLOUD: &str = "tencent_cloud";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`FAAS_INVOKED_PROVIDER`].
    FaasInvokedProvider for FAAS_INVOKED_PROVIDER {
        /// Alibaba Cloud
        AlibabaCloud = "alibaba_cloud",
        /// Amazon Web Services
        Aws = "aws",
        /// Microsoft Azure
        Azure = "azure",
        /// Google Cloud Platform
        Gcp = "gcp",
        /// Tencent Cloud
        TencentCloud = "tencent_cloud",
    }
}

/// The cloud region of the invoked function.
///
/// Type: `string`. Examples: `"eu-central-1"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKED_REGION: &str = "faas.invoked_region";

/// The amount of memory available to the serverless function converted to Bytes.
///
/// Type: `int`. Examples: `134217728`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_MAX_MEMORY: &str = "faas.max_memory";

/// The name of the single function that this runtime instance executes.
///
/// Type: `string`. Examples: `"my-function"`, `"myazurefunctionapp/some-function-name"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_NAME: &str = "faas.name";

/// A string containing the function invocation time in the ISO 8601 format expressed in UTC.
///
/// Type: `string`. Examples: `"2020-01-23T13:47:06Z"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TIME: &str = "faas.time";

/// Type of the trigger which caused this function invocation.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TRIGGER: &str = "faas.trigger";

/// A response to some data source operation such as a database or filesystem read/write
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TRIGGER_VALUE_DATASOURCE: &str = "datasource";

/// To provide an answer to an inbound HTTP request
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TRIGGER_VALUE_HTTP: &str = "http";

/// A function is set to be executed when messages are sent to a messaging system
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TRIGGER_VALUE_PUBSUB: &str = "pubsub";

/// A function is scheduled to be executed regularly
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TRIGGER_VALUE_TIMER: &str = "timer";

/// If none of the others apply
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TRIGGER_VALUE_OTHER: &str = "other";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`FAAS_TRIGGER`].
    FaasTrigger for FAAS_TRIGGER {
        /// A response to some data source operation such as a database or filesystem read/write
        Datasource = "datasource",
        /// To provide an answer to an inbound HTTP request
        Http = "http",
        /// A function is set to be executed when messages are sent to a messaging system
        Pubsub = "pubsub",
        /// A function is scheduled to be executed regularly
        Timer = "timer",
        /// If none of the others apply
        Other = "other",
    }
}

/// The immutable version of the function being executed.
///
/// Type: `string`. Examples: `"26"`, `"pinkfroid-00002"`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_VERSION: &str = "faas.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("FAAS_COLDSTART", "faas.coldstart", Experimental),
    Entry::attribute("FAAS_CRON", "faas.cron", Experimental),
    Entry::attribute("FAAS_DOCUMENT_COLLECTION", "faas.document.collection", Experimental),
    Entry::attribute("FAAS_DOCUMENT_NAME", "faas.document.name", Experimental),
    Entry::attribute("FAAS_DOCUMENT_OPERATION", "faas.document.operation", Experimental),
    Entry::value(
        "FAAS_DOCUMENT_OPERATION_VALUE_INSERT",
        "faas.document.operation",
        "insert",
        Experimental,
    ),
    Entry::value(
        "FAAS_DOCUMENT_OPERATION_VALUE_EDIT",
        "faas.document.operation",
        "edit",
        Experimental,
    ),
    Entry::value(
        "FAAS_DOCUMENT_OPERATION_VALUE_DELETE",
        "faas.document.operation",
        "delete",
        Experimental,
    ),
    Entry::attribute("FAAS_DOCUMENT_TIME", "faas.document.time", Experimental),
    Entry::attribute("FAAS_INSTANCE", "faas.instance", Experimental),
    Entry::attribute("FAAS_INVOCATION_ID", "faas.invocation_id", Experimental),
    Entry::attribute("FAAS_INVOKED_NAME", "faas.invoked_name", Experimental),
    Entry::attribute("FAAS_INVOKED_PROVIDER", "faas.invoked_provider", Experimental),
    Entry::value(
        "FAAS_INVOKED_PROVIDER_VALUE_ALIBABA_CLOUD",
        "faas.invoked_provider",
        "alibaba_cloud",
        Experimental,
    ),
    Entry::value("FAAS_INVOKED_PROVIDER_VALUE_AWS", "faas.invoked_provider", "aws", Experimental),
    Entry::value(
        "FAAS_INVOKED_PROVIDER_VALUE_AZURE",
        "faas.invoked_provider",
        "azure",
        Experimental,
    ),
    Entry::value("FAAS_INVOKED_PROVIDER_VALUE_GCP", "faas.invoked_provider", "gcp", Experimental),
    Entry::value(
        "FAAS_INVOKED_PROVIDER_VALUE_TENCENT_CLOUD",
        "faas.invoked_provider",
        "tencent_cloud",
        Experimental,
    ),
    Entry::attribute("FAAS_INVOKED_REGION", "faas.invoked_region", Experimental),
    Entry::attribute("FAAS_MAX_MEMORY", "faas.max_memory", Experimental),
    Entry::attribute("FAAS_NAME", "faas.name", Experimental),
    Entry::attribute("FAAS_TIME", "faas.time", Experimental),
    Entry::attribute("FAAS_TRIGGER", "faas.trigger", Experimental),
    Entry::value("FAAS_TRIGGER_VALUE_DATASOURCE", "faas.trigger", "datasource", Experimental),
    Entry::value("FAAS_TRIGGER_VALUE_HTTP", "faas.trigger", "http", Experimental),
    Entry::value("FAAS_TRIGGER_VALUE_PUBSUB", "faas.trigger", "pubsub", Experimental),
    Entry::value("FAAS_TRIGGER_VALUE_TIMER", "faas.trigger", "timer", Experimental),
    Entry::value("FAAS_TRIGGER_VALUE_OTHER", "faas.trigger", "other", Experimental),
    Entry::attribute("FAAS_VERSION", "faas.version", Experimental),
];
