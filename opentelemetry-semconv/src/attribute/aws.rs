// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `aws` namespace.

use crate::registry::{Entry, Stability::*};

/// The unique identifier of the AWS Bedrock Guardrail. A guardrail helps safeguard and prevent unwanted behavior from model responses or user messages.
///
/// Type: `string`. Examples: `"sgi5gkybzqak"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_BEDROCK_GUARDRAIL_ID: &str = "aws.bedrock.guardrail.id";

/// The unique identifier of the AWS Bedrock Knowledge base.
///
/// Type: `string`. Examples: `"XFWUPB9PAW"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_BEDROCK_KNOWLEDGE_BASE_ID: &str = "aws.bedrock.knowledge_base.id";

/// The JSON-serialized value of each item in the `AttributeDefinitions` request field.
///
/// Type: `string[]`. Examples: `["{ \"AttributeName\": \"string\", \"AttributeType\": \"string\" }"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_ATTRIBUTE_DEFINITIONS: &str = "aws.dynamodb.attribute_definitions";

/// The value of the `AttributesToGet` request parameter.
///
/// Type: `string[]`. Examples: `["lives", "id"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_ATTRIBUTES_TO_GET: &str = "aws.dynamodb.attributes_to_get";

/// The value of the `ConsistentRead` request parameter.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_CONSISTENT_READ: &str = "aws.dynamodb.consistent_read";

/// The JSON-serialized value of each item in the `ConsumedCapacity` response field.
///
/// Type: `string[]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_CONSUMED_CAPACITY: &str = "aws.dynamodb.consumed_capacity";

/// The value of the `Count` response parameter.
///
/// Type: `int`. Examples: `10`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_COUNT: &str = "aws.dynamodb.count";

/// The value of the `ExclusiveStartTableName` request parameter.
///
/// Type: `string`. Examples: `"Users"`, `"CatsTable"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_EXCLUSIVE_START_TABLE: &str = "aws.dynamodb.exclusive_start_table";

/// The JSON-serialized value of each item in the `GlobalSecondaryIndexUpdates` request field.
///
/// Type: `string[]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_GLOBAL_SECONDARY_INDEX_UPDATES: &str =
    "aws.dynamodb.global_secondary_index_updates";

/// The JSON-serialized value of each item of the `GlobalSecondaryIndexes` request field.
///
/// Type: `string[]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_GLOBAL_SECONDARY_INDEXES: &str = "aws.dynamodb.global_secondary_indexes";

/// The value of the `IndexName` request parameter.
///
/// Type: `string`. Examples: `"name_to_group"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_INDEX_NAME: &str = "aws.dynamodb.index_name";

/// The JSON-serialized value of the `ItemCollectionMetrics` response field.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_ITEM_COLLECTION_METRICS: &str = "aws.dynamodb.item_collection_metrics";

/// The value of the `Limit` request parameter.
///
/// Type: `int`. Examples: `10`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_LIMIT: &str = "aws.dynamodb.limit";

/// The JSON-serialized value of each item of the `LocalSecondaryIndexes` request field.
///
/// Type: `string[]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_LOCAL_SECONDARY_INDEXES: &str = "aws.dynamodb.local_secondary_indexes";

/// The value of the `ProjectionExpression` request parameter.
///
/// Type: `string`. Examples: `"Title"`, `"Title, Price, Color"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_PROJECTION: &str = "aws.dynamodb.projection";

/// The value of the `ProvisionedThroughput.ReadCapacityUnits` request parameter.
///
/// Type: `double`. Examples: `1.0`, `2.0`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_PROVISIONED_READ_CAPACITY: &str = "aws.dynamodb.provisioned_read_capacity";

/// The value of the `ProvisionedThroughput.WriteCapacityUnits` request parameter.
///
/// Type: `double`. Examples: `1.0`, `2.0`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_PROVISIONED_WRITE_CAPACITY: &str = "aws.dynamodb.provisioned_write_capacity";

/// The value of the `ScanIndexForward` request parameter.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_SCAN_FORWARD: &str = "aws.dynamodb.scan_forward";

/// The value of the `ScannedCount` response parameter.
///
/// Type: `int`. Examples: `50`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_SCANNED_COUNT: &str = "aws.dynamodb.scanned_count";

/// The value of the `Segment` request parameter.
///
/// Type: `int`. Examples: `10`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_SEGMENT: &str = "aws.dynamodb.segment";

/// The value of the `Select` request parameter.
///
/// Type: `string`. Examples: `"ALL_ATTRIBUTES"`, `"COUNT"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_SELECT: &str = "aws.dynamodb.select";

/// The number of items in the `TableNames` response parameter.
///
/// Type: `int`. Examples: `20`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_TABLE_COUNT: &str = "aws.dynamodb.table_count";

/// The keys in the `RequestItems` object field.
///
/// Type: `string[]`. Examples: `["Users", "Cats"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_TABLE_NAMES: &str = "aws.dynamodb.table_names";

/// The value of the `TotalSegments` request parameter.
///
/// Type: `int`. Examples: `100`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_DYNAMODB_TOTAL_SEGMENTS: &str = "aws.dynamodb.total_segments";

/// The ARN of an ECS cluster.
///
/// Type: `string`. Examples: `"arn:aws:ecs:us-west-2:123456789123:cluster/my-cluster"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_CLUSTER_ARN: &str = "aws.ecs.cluster.arn";

/// The Amazon Resource Name (ARN) of an ECS container instance.
///
/// Type: `string`. Examples: `"arn:aws:ecs:us-west-1:123456789123:container/32624152-9086-4f0e-acae-1a75b14fe4d9"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_CONTAINER_ARN: &str = "aws.ecs.container.arn";

/// The launch type for an ECS task.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_LAUNCHTYPE: &str = "aws.ecs.launchtype";

/// Amazon EC2
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_LAUNCHTYPE_VALUE_EC2: &str = "ec2";

/// Amazon Fargate
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_LAUNCHTYPE_VALUE_FARGATE: &str = "fargate";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`AWS_ECS_LAUNCHTYPE`].
    AwsEcsLaunchtype for AWS_ECS_LAUNCHTYPE {
        /// Amazon EC2
        Ec2 = "ec2",
        /// Amazon Fargate
        Fargate = "fargate",
    }
}

/// The ARN of a running ECS task.
///
/// Type: `string`. Examples: `"arn:aws:ecs:us-west-1:123456789123:task/10838bed-421f-43ef-870a-f43feacbbb5b"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_TASK_ARN: &str = "aws.ecs.task.arn";

/// The family name of the ECS task definition used to create the ECS task.
///
/// Type: `string`. Examples: `"opentelemetry-family"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_TASK_FAMILY: &str = "aws.ecs.task.family";

/// The ID of a running ECS task. The ID MUST be extracted from `task.arn`.
///
/// Type: `string`. Examples: `"10838bed-421f-43ef-870a-f43feacbbb5b"`, `"23ebb8ac-c18f-46c6-8bbe-d55d0e37cfbd"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_TASK_ID: &str = "aws.ecs.task.id";

/// The revision for the task definition used to create the ECS task.
///
/// Type: `string`. Examples: `"8"`, `"26"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_ECS_TASK_REVISION: &str = "aws.ecs.task.revision";

/// The ARN of an EKS cluster.
///
/// Type: `string`. Examples: `"arn:aws:ecs:us-west-2:123456789123:cluster/my-cluster"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_EKS_CLUSTER_ARN: &str = "aws.eks.cluster.arn";

/// The AWS extended request ID as returned in the response header `x-amz-id-2`.
///
/// Type: `string`. Examples: `"wzHcyEWfmOGDIE5QOhTAqFDoDWP3y8IUvpNINCwL9N4TEHbUw0/gZJ+VZTmCNCWR7fezEN3eCiQ="`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_EXTENDED_REQUEST_ID: &str = "aws.extended_request_id";

/// The name of the AWS Kinesis stream the request refers to.
///
/// Type: `string`. Examples: `"some-stream-name"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_KINESIS_STREAM_NAME: &str = "aws.kinesis.stream_name";

/// The full invoked ARN as provided on the `Context` passed to the function.
///
/// Type: `string`. Examples: `"arn:aws:lambda:us-east-1:123456:function:myfunction:myalias"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_LAMBDA_INVOKED_ARN: &str = "aws.lambda.invoked_arn";

/// The UUID of the AWS Lambda EvenSource Mapping.
///
/// Type: `string`. Examples: `"587ad24b-03b9-4413-8202-bbd56b36e5b7"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_LAMBDA_RESOURCE_MAPPING_ID: &str = "aws.lambda.resource_mapping.id";

/// The Amazon Resource Name(s) (ARN) of the AWS log group(s).
///
/// Type: `string[]`. Examples: `["arn:aws:logs:us-west-1:123456789012:log-group:/aws/my/group:*"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_LOG_GROUP_ARNS: &str = "aws.log.group.arns";

/// The name(s) of the AWS log group(s) an application is writing to.
///
/// Type: `string[]`. Examples: `["/aws/lambda/my-function", "opentelemetry-service"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_LOG_GROUP_NAMES: &str = "aws.log.group.names";

/// The ARN(s) of the AWS log stream(s).
///
/// Type: `string[]`. Examples: `["arn:aws:logs:us-west-1:123456789012:log-group:/aws/my/group:log-stream:logs/main/10838bed-421f-43ef-870a-f43feacbbb5b"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_LOG_STREAM_ARNS: &str = "aws.log.stream.arns";

/// The name(s) of the AWS log stream(s) an application is writing to.
///
/// Type: `string[]`. Examples: `["logs/main/10838bed-421f-43ef-870a-f43feacbbb5b"]`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_LOG_STREAM_NAMES: &str = "aws.log.stream.names";

/// The AWS request ID as returned in the response headers `x-amzn-requestid`, `x-amzn-request-id` or `x-amz-request-id`.
///
/// Type: `string`. Examples: `"79b9da39-b7ae-508a-a6bc-864b2829c622"`, `"C9ER4AJX75574TDJ"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_REQUEST_ID: &str = "aws.request_id";

/// The S3 bucket name the request refers to.
///
/// Type: `string`. Examples: `"some-bucket-name"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_S3_BUCKET: &str = "aws.s3.bucket";

/// The source object (in the form `bucket`/`key`) for the copy operation.
///
/// Type: `string`. Examples: `"someFile.yml"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_S3_COPY_SOURCE: &str = "aws.s3.copy_source";

/// The delete request container that specifies the objects to be deleted.
///
/// Type: `string`. Examples: `"Objects=[{Key=string,VersionId=string},{Key=string,VersionId=string}],Quiet=boolean"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_S3_DELETE: &str = "aws.s3.delete";

/// The S3 object key the request refers to.
///
/// Type: `string`. Examples: `"someFile.yml"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_S3_KEY: &str = "aws.s3.key";

/// The part number of the part being uploaded in a multipart-upload operation.
///
/// Type: `int`. Examples: `3456`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_S3_PART_NUMBER: &str = "aws.s3.part_number";

/// Upload ID that identifies the multipart upload.
///
/// Type: `string`. Examples: `"dfRtDYWFbkRONycy.Yxwh66Yjlx.cph0gtNBtJ"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_S3_UPLOAD_ID: &str = "aws.s3.upload_id";

/// The ARN of the Secret stored in the Secrets Mangger.
///
/// Type: `string`. Examples: `"arn:aws:secretsmanager:us-east-1:123456789012:secret:SecretName-6RandomCharacters"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_SECRETSMANAGER_SECRET_ARN: &str = "aws.secretsmanager.secret.arn";

/// The ARN of the AWS SNS Topic.
///
/// Type: `string`. Examples: `"arn:aws:sns:us-east-1:123456789012:mystack-mytopic-NZJ5JSMVGFIE"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_SNS_TOPIC_ARN: &str = "aws.sns.topic.arn";

/// The URL of the AWS SQS Queue.
///
/// Type: `string`. Examples: `"https://sqs.us-east-1.amazonaws.com/123456789012/MyQueue"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_SQS_QUEUE_URL: &str = "aws.sqs.queue.url";

/// The ARN of the AWS Step Functions Activity.
///
/// Type: `string`. Examples: `"arn:aws:states:us-east-1:123456789012:activity:get-greeting"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_STEP_FUNCTIONS_ACTIVITY_ARN: &str = "aws.step_functions.activity.arn";

/// The ARN of the AWS Step Functions State Machine.
///
/// Type: `string`. Examples: `"arn:aws:states:us-east-1:123456789012:stateMachine:myStateMachine:1"`.
#[cfg(feature = "semconv_experimental")]
pub const AWS_STEP_FUNCTIONS_STATE_MACHINE_ARN: &str = "aws.step_functions.state_machine.arn";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("AWS_BEDROCK_GUARDRAIL_ID", "aws.bedrock.guardrail.id", Experimental),
    Entry::attribute(
        "AWS_BEDROCK_KNOWLEDGE_BASE_ID",
        "aws.bedrock.knowledge_base.id",
        Experimental,
    ),
    Entry::attribute(
        "AWS_DYNAMODB_ATTRIBUTE_DEFINITIONS",
        "aws.dynamodb.attribute_definitions",
        Experimental,
    ),
    Entry::attribute(
        "AWS_DYNAMODB_ATTRIBUTES_TO_GET",
        "aws.dynamodb.attributes_to_get",
        Experimental,
    ),
    Entry::attribute("AWS_DYNAMODB_CONSISTENT_READ", "aws.dynamodb.consistent_read", Experimental),
    Entry::attribute(
        "AWS_DYNAMODB_CONSUMED_CAPACITY",
        "aws.dynamodb.consumed_capacity",
        Experimental,
    ),
    Entry::attribute("AWS_DYNAMODB_COUNT", "aws.dynamodb.count", Experimental),
    Entry::attribute(
        "AWS_DYNAMODB_EXCLUSIVE_START_TABLE",
        "aws.dynamodb.exclusive_start_table",
        Experimental,
    ),
    Entry::attribute(
        "AWS_DYNAMODB_GLOBAL_SECONDARY_INDEX_UPDATES",
        "aws.dynamodb.global_secondary_index_updates",
        Experimental,
    ),
    Entry::attribute(
        "AWS_DYNAMODB_GLOBAL_SECONDARY_INDEXES",
        "aws.dynamodb.global_secondary_indexes",
        Experimental,
    ),
    Entry::attribute("AWS_DYNAMODB_INDEX_NAME", "aws.dynamodb.index_name", Experimental),
    Entry::attribute(
        "AWS_DYNAMODB_ITEM_COLLECTION_METRICS",
        "aws.dynamodb.item_collection_metrics",
        Experimental,
    ),
    Entry::attribute("AWS_DYNAMODB_LIMIT", "aws.dynamodb.limit", Experimental),
    Entry::attribute(
        "AWS_DYNAMODB_LOCAL_SECONDARY_INDEXES",
        "aws.dynamodb.local_secondary_indexes",
        Experimental,
    ),
    Entry::attribute("AWS_DYNAMODB_PROJECTION", "aws.dynamodb.projection", Experimental),
    Entry::attribute(
        "AWS_DYNAMODB_PROVISIONED_READ_CAPACITY",
        "aws.dynamodb.provisioned_read_capacity",
        Experimental,
    ),
    Entry::attribute(
        "AWS_DYNAMODB_PROVISIONED_WRITE_CAPACITY",
        "aws.dynamodb.provisioned_write_capacity",
        Experimental,
    ),
    Entry::attribute("AWS_DYNAMODB_SCAN_FORWARD", "aws.dynamodb.scan_forward", Experimental),
    Entry::attribute("AWS_DYNAMODB_SCANNED_COUNT", "aws.dynamodb.scanned_count", Experimental),
    Entry::attribute("AWS_DYNAMODB_SEGMENT", "aws.dynamodb.segment", Experimental),
    Entry::attribute("AWS_DYNAMODB_SELECT", "aws.dynamodb.select", Experimental),
    Entry::attribute("AWS_DYNAMODB_TABLE_COUNT", "aws.dynamodb.table_count", Experimental),
    Entry::attribute("AWS_DYNAMODB_TABLE_NAMES", "aws.dynamodb.table_names", Experimental),
    Entry::attribute("AWS_DYNAMODB_TOTAL_SEGMENTS", "aws.dynamodb.total_segments", Experimental),
    Entry::attribute("AWS_ECS_CLUSTER_ARN", "aws.ecs.cluster.arn", Experimental),
    Entry::attribute("AWS_ECS_CONTAINER_ARN", "aws.ecs.container.arn", Experimental),
    Entry::attribute("AWS_ECS_LAUNCHTYPE", "aws.ecs.launchtype", Experimental),
    Entry::value("AWS_ECS_LAUNCHTYPE_VALUE_EC2", "aws.ecs.launchtype", "ec2", Experimental),
    Entry::value("AWS_ECS_LAUNCHTYPE_VALUE_FARGATE", "aws.ecs.launchtype", "fargate", Experimental),
    Entry::attribute("AWS_ECS_TASK_ARN", "aws.ecs.task.arn", Experimental),
    Entry::attribute("AWS_ECS_TASK_FAMILY", "aws.ecs.task.family", Experimental),
    Entry::attribute("AWS_ECS_TASK_ID", "aws.ecs.task.id", Experimental),
    Entry::attribute("AWS_ECS_TASK_REVISION", "aws.ecs.task.revision", Experimental),
    Entry::attribute("AWS_EKS_CLUSTER_ARN", "aws.eks.cluster.arn", Experimental),
    Entry::attribute("AWS_EXTENDED_REQUEST_ID", "aws.extended_request_id", Experimental),
    Entry::attribute("AWS_KINESIS_STREAM_NAME", "aws.kinesis.stream_name", Experimental),
    Entry::attribute("AWS_LAMBDA_INVOKED_ARN", "aws.lambda.invoked_arn", Experimental),
    Entry::attribute(
        "AWS_LAMBDA_RESOURCE_MAPPING_ID",
        "aws.lambda.resource_mapping.id",
        Experimental,
    ),
    Entry::attribute("AWS_LOG_GROUP_ARNS", "aws.log.group.arns", Experimental),
    Entry::attribute("AWS_LOG_GROUP_NAMES", "aws.log.group.names", Experimental),
    Entry::attribute("AWS_LOG_STREAM_ARNS", "aws.log.stream.arns", Experimental),
    Entry::attribute("AWS_LOG_STREAM_NAMES", "aws.log.stream.names", Experimental),
    Entry::attribute("AWS_REQUEST_ID", "aws.request_id", Experimental),
    Entry::attribute("AWS_S3_BUCKET", "aws.s3.bucket", Experimental),
    Entry::attribute("AWS_S3_COPY_SOURCE", "aws.s3.copy_source", Experimental),
    Entry::attribute("AWS_S3_DELETE", "aws.s3.delete", Experimental),
    Entry::attribute("AWS_S3_KEY", "aws.s3.key", Experimental),
    Entry::attribute("AWS_S3_PART_NUMBER", "aws.s3.part_number", Experimental),
    Entry::attribute("AWS_S3_UPLOAD_ID", "aws.s3.upload_id", Experimental),
    Entry::attribute(
        "AWS_SECRETSMANAGER_SECRET_ARN",
        "aws.secretsmanager.secret.arn",
        Experimental,
    ),
    Entry::attribute("AWS_SNS_TOPIC_ARN", "aws.sns.topic.arn", Experimental),
    Entry::attribute("AWS_SQS_QUEUE_URL", "aws.sqs.queue.url", Experimental),
    Entry::attribute(
        "AWS_STEP_FUNCTIONS_ACTIVITY_ARN",
        "aws.step_functions.activity.arn",
        Experimental,
    ),
    Entry::attribute(
        "AWS_STEP_FUNCTIONS_STATE_MACHINE_ARN",
        "aws.step_functions.state_machine.arn",
        Experimental,
    ),
];
