// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `messaging` namespace.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The number of messages sent, received, or processed in the scope of the batching operation.
///
/// Type: `int`. Examples: `0`, `1`, `2`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_BATCH_MESSAGE_COUNT: &str = "messaging.batch.message_count";

/// A unique identifier for the client that consumes or produces a message.
///
/// Type: `string`. Examples: `"client-5"`, `"myhost@8742@s8083jm"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_ID: &str = "messaging.client.id";

/// The name of the consumer group with which a consumer is associated.
///
/// Type: `string`. Examples: `"my-group"`, `"indexer"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CONSUMER_GROUP_NAME: &str = "messaging.consumer.group.name";

/// A boolean that is true if the message destination is anonymous (could be unnamed or have auto-generated name).
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_DESTINATION_ANONYMOUS: &str = "messaging.destination.anonymous";

/// The message destination name
///
/// Type: `string`. Examples: `"MyQueue"`, `"MyTopic"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_DESTINATION_NAME: &str = "messaging.destination.name";

/// The identifier of the partition messages are sent to or received from, unique within the `messaging.destination.name`.
///
/// Type: `string`. Examples: `"1"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_DESTINATION_PARTITION_ID: &str = "messaging.destination.partition.id";

/// The name of the destination subscription from which a message is consumed.
///
/// Type: `string`. Examples: `"subscription-a"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_DESTINATION_SUBSCRIPTION_NAME: &str = "messaging.destination.subscription.name";

/// Low cardinality representation of the messaging destination name
///
/// Type: `string`. Examples: `"/customers/{customerId}"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_DESTINATION_TEMPLATE: &str = "messaging.destination.template";

/// A boolean that is true if the message destination is temporary and might not exist anymore after messages are processed.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_DESTINATION_TEMPORARY: &str = "messaging.destination.temporary";

/// Deprecated, no replacement at this time.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed. No replacement at this time.")]
pub const MESSAGING_DESTINATION_PUBLISH_ANONYMOUS: &str = "messaging.destination_publish.anonymous";

/// Deprecated, no replacement at this time.
///
/// Type: `string`. Examples: `"MyQueue"`, `"MyTopic"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed. No replacement at this time.")]
pub const MESSAGING_DESTINATION_PUBLISH_NAME: &str = "messaging.destination_publish.name";

/// Deprecated, use `messaging.consumer.group.name` instead.
///
/// Type: `string`. Examples: `"$Default"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.consumer.group.name`.")]
pub const MESSAGING_EVENTHUBS_CONSUMER_GROUP: &str = "messaging.eventhubs.consumer.group";

/// The UTC epoch seconds at which the message has been accepted and stored in the entity.
///
/// Type: `int`. Examples: `1701393730`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_EVENTHUBS_MESSAGE_ENQUEUED_TIME: &str =
    "messaging.eventhubs.message.enqueued_time";

/// The ack deadline in seconds set for the modify ack deadline request.
///
/// Type: `int`. Examples: `10`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_GCP_PUBSUB_MESSAGE_ACK_DEADLINE: &str =
    "messaging.gcp_pubsub.message.ack_deadline";

/// The ack id for a given message.
///
/// Type: `string`. Examples: `"ack_id"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_GCP_PUBSUB_MESSAGE_ACK_ID: &str = "messaging.gcp_pubsub.message.ack_id";

/// The delivery attempt for a given message.
///
/// Type: `int`. Examples: `2`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_GCP_PUBSUB_MESSAGE_DELIVERY_ATTEMPT: &str =
    "messaging.gcp_pubsub.message.delivery_attempt";

/// The ordering key for a given message. If the attribute is not present, the message does not have an ordering key.
///
/// Type: `string`. Examples: `"ordering_key"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_GCP_PUBSUB_MESSAGE_ORDERING_KEY: &str =
    "messaging.gcp_pubsub.message.ordering_key";

/// Deprecated, use `messaging.consumer.group.name` instead.
///
/// Type: `string`. Examples: `"my-group"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.consumer.group.name`.")]
pub const MESSAGING_KAFKA_CONSUMER_GROUP: &str = "messaging.kafka.consumer.group";

/// Deprecated, use `messaging.destination.partition.id` instead.
///
/// Type: `int`. Examples: `2`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Record string representation of the partition id in `messaging.destination.partition.id` attribute.")]
pub const MESSAGING_KAFKA_DESTINATION_PARTITION: &str = "messaging.kafka.destination.partition";

/// Message keys in Kafka are used for grouping alike messages to ensure they're processed on the same partition.
///
/// Type: `string`. Examples: `"myKey"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_KAFKA_MESSAGE_KEY: &str = "messaging.kafka.message.key";

/// Deprecated, use `messaging.kafka.offset` instead.
///
/// Type: `int`. Examples: `42`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.kafka.offset`.")]
pub const MESSAGING_KAFKA_MESSAGE_OFFSET: &str = "messaging.kafka.message.offset";

/// A boolean that is true if the message is a tombstone.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_KAFKA_MESSAGE_TOMBSTONE: &str = "messaging.kafka.message.tombstone";

/// The offset of a record in the corresponding Kafka partition.
///
/// Type: `int`. Examples: `42`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_KAFKA_OFFSET: &str = "messaging.kafka.offset";

/// The size of the message body in bytes.
///
/// Type: `int`. Examples: `1439`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_MESSAGE_BODY_SIZE: &str = "messaging.message.body.size";

/// The conversation ID identifying the conversation to which the message belongs, represented as a string. Sometimes called "Correlation ID".
///
/// Type: `string`. Examples: `"MyConversationId"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_MESSAGE_CONVERSATION_ID: &str = "messaging.message.conversation_id";

/// The size of the message body and metadata in bytes.
///
/// Type: `int`. Examples: `2738`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_MESSAGE_ENVELOPE_SIZE: &str = "messaging.message.envelope.size";

/// A value used by the messaging system as an identifier for the message, represented as a string.
///
/// Type: `string`. Examples: `"452a7c7c7c7048c2f887f61572b18fc2"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_MESSAGE_ID: &str = "messaging.message.id";

/// Deprecated, use `messaging.operation.type` instead.
///
/// Type: `string`. Examples: `"publish"`, `"create"`, `"process"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.operation.type`.")]
pub const MESSAGING_OPERATION: &str = "messaging.operation";

/// The system-specific name of the messaging operation.
///
/// Type: `string`. Examples: `"ack"`, `"nack"`, `"send"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_NAME: &str = "messaging.operation.name";

/// A string identifying the type of the messaging operation.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_TYPE: &str = "messaging.operation.type";

/// A message is created. "Create" spans always refer to a single message and are used to provide a unique creation context for messages in batch sending scenarios.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_TYPE_VALUE_CREATE: &str = "create";

/// One or more messages are provided for sending to an intermediary.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_TYPE_VALUE_SEND: &str = "send";

/// One or more messages are requested by a consumer.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_TYPE_VALUE_RECEIVE: &str = "receive";

/// One or more messages are processed by a consumer.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_TYPE_VALUE_PROCESS: &str = "process";

/// One or more messages are settled.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_OPERATION_TYPE_VALUE_SETTLE: &str = "settle";

/// Deprecated. Use `process` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `process`.")]
pub const MESSAGING_OPERATION_TYPE_VALUE_DELIVER: &str = "deliver";

/// Deprecated. Use `send` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `send`.")]
pub const MESSAGING_OPERATION_TYPE_VALUE_PUBLISH: &str = "publish";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`MESSAGING_OPERATION_TYPE`].
    MessagingOperationType for MESSAGING_OPERATION_TYPE {
        /// A message is created. "Create" spans always refer to a single message and are used to provide a unique creation context for messages in batch sending scenarios.
        Create = "create",
        /// One or more messages are provided for sending to an intermediary.
        Send = "send",
        /// One or more messages are requested by a consumer.
        Receive = "receive",
        /// One or more messages are processed by a consumer.
        Process = "process",
        /// One or more messages are settled.
        Settle = "settle",
        /// Deprecated. Use `process` instead.
        ///
        /// Deprecated: Replaced by `process`.
        Deliver = "deliver",
        /// Deprecated. Use `send` instead.
        ///
        /// Deprecated: Replaced by `send`.
        Publish = "publish",
    }
}

/// RabbitMQ message routing key.
///
/// Type: `string`. Examples: `"myKey"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_RABBITMQ_DESTINATION_ROUTING_KEY: &str =
    "messaging.rabbitmq.destination.routing_key";

/// RabbitMQ message delivery tag
///
/// Type: `int`. Examples: `123`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_RABBITMQ_MESSAGE_DELIVERY_TAG: &str = "messaging.rabbitmq.message.delivery_tag";

/// Deprecated, use `messaging.consumer.group.name` instead.
///
/// Type: `string`. Examples: `"myConsumerGroup"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.consumer.group.name` on the consumer spans. No replacement for producer spans.")]
pub const MESSAGING_ROCKETMQ_CLIENT_GROUP: &str = "messaging.rocketmq.client_group";

/// Model of message consumption. This only applies to consumer spans.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_CONSUMPTION_MODEL: &str = "messaging.rocketmq.consumption_model";

/// Clustering consumption model
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_CONSUMPTION_MODEL_VALUE_CLUSTERING: &str = "clustering";

/// Broadcasting consumption model
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_CONSUMPTION_MODEL_VALUE_BROADCASTING: &str = "broadcasting";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`MESSAGING_ROCKETMQ_CONSUMPTION_MODEL`].
    MessagingRocketmqConsumptionModel for MESSAGING_ROCKETMQ_CONSUMPTION_MODEL {
        /// Clustering consumption model
        Clustering = "clustering",
        /// Broadcasting consumption model
        Broadcasting = "broadcasting",
    }
}

/// The delay time level for delay message, which determines the message delay time.
///
/// Type: `int`. Examples: `3`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_DELAY_TIME_LEVEL: &str =
    "messaging.rocketmq.message.delay_time_level";

/// The timestamp in milliseconds that the delay message is expected to be delivered to consumer.
///
/// Type: `int`. Examples: `1665987217045`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_DELIVERY_TIMESTAMP: &str =
    "messaging.rocketmq.message.delivery_timestamp";

/// It is essential for FIFO message. Messages that belong to the same message group are always processed one by one within the same consumer group.
///
/// Type: `string`. Examples: `"myMessageGroup"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_GROUP: &str = "messaging.rocketmq.message.group";

/// Key(s) of message, another way to mark message besides message id.
///
/// Type: `string[]`. Examples: `["keyA", "keyB"]`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_KEYS: &str = "messaging.rocketmq.message.keys";

/// The secondary classifier of message besides topic.
///
/// Type: `string`. Examples: `"tagA"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_TAG: &str = "messaging.rocketmq.message.tag";

/// Type of message.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_TYPE: &str = "messaging.rocketmq.message.type";

/// Normal message
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_NORMAL: &str = "normal";

/// FIFO message
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_FIFO: &str = "fifo";

/// Delay message
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_DELAY: &str = "delay";

/// Transaction message
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_TRANSACTION: &str = "transaction";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`MESSAGING_ROCKETMQ_MESSAGE_TYPE`].
    MessagingRocketmqMessageType for MESSAGING_ROCKETMQ_MESSAGE_TYPE {
        /// Normal message
        Normal = "normal",
        /// FIFO message
        Fifo = "fifo",
        /// Delay message
        Delay = "delay",
        /// Transaction message
        Transaction = "transaction",
    }
}

/// Namespace of RocketMQ resources, resources in different namespaces are individual.
///
/// Type: `string`. Examples: `"myNamespace"`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_ROCKETMQ_NAMESPACE: &str = "messaging.rocketmq.namespace";

/// Deprecated, use `messaging.destination.subscription.name` instead.
///
/// Type: `string`. Examples: `"subscription-a"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `messaging.destination.subscription.name`.")]
pub const MESSAGING_SERVICEBUS_DESTINATION_SUBSCRIPTION_NAME: &str =
    "messaging.servicebus.destination.subscription_name";

/// Describes the settlement type.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_DISPOSITION_STATUS: &str = "messaging.servicebus.disposition_status";

/// Message is completed
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_COMPLETE: &str = "complete";

/// Message is abandoned
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_ABANDON: &str = "abandon";

/// Message is sent to dead letter queue
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_DEAD_LETTER: &str = "dead_letter";

/// Message is deferred
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_DEFER: &str = "defer";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`MESSAGING_SERVICEBUS_DISPOSITION_STATUS`].
    MessagingServicebusDispositionStatus for MESSAGING_SERVICEBUS_DISPOSITION_STATUS {
        /// Message is completed
        Complete = "complete",
        /// Message is abandoned
        Abandon = "abandon",
        /// Message is sent to dead letter queue
        DeadLetter = "dead_letter",
        /// Message is deferred
        Defer = "defer",
    }
}

/// Number of deliveries that have been attempted for this message.
///
/// Type: `int`. Examples: `2`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_MESSAGE_DELIVERY_COUNT: &str =
    "messaging.servicebus.message.delivery_count";

/// The UTC epoch seconds at which the message has been accepted and stored in the entity.
///
/// Type: `int`. Examples: `1701393730`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SERVICEBUS_MESSAGE_ENQUEUED_TIME: &str =
    "messaging.servicebus.message.enqueued_time";

/// The messaging system as identified by the client instrumentation.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM: &str = "messaging.system";

/// Apache ActiveMQ
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_ACTIVEMQ: &str = "activemq";

/// Amazon Simple Notification Service (SNS)
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_AWS_SNS: &str = "aws.sns";

/// Amazon Simple Queue Service (SQS)
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_AWS_SQS: &str = "aws_sqs";

/// Azure Event Grid
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_EVENTGRID: &str = "eventgrid";

/// Azure Event Hubs
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_EVENTHUBS: &str = "eventhubs";

/// Azure Service Bus
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_SERVICEBUS: &str = "servicebus";

/// Google Cloud Pub/Sub
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_GCP_PUBSUB: &str = "gcp_pubsub";

/// Java Message Service
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_JMS: &str = "jms";

/// Apache Kafka
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_KAFKA: &str = "kafka";

/// RabbitMQ
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_RABBITMQ: &str = "rabbitmq";

/// Apache RocketMQ
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_ROCKETMQ: &str = "rocketmq";

/// Apache Pulsar
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_SYSTEM_VALUE_PULSAR: &str = "pulsar";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`MESSAGING_SYSTEM`].
    MessagingSystem for MESSAGING_SYSTEM {
        /// Apache ActiveMQ
        Activemq = "activemq",
        /// Amazon Simple Notification Service (SNS)
        AwsSns = "aws.sns",
        /// Amazon Simple Queue Service (SQS)
        AwsSqs = "aws_sqs",
        /// Azure Event Grid
        Eventgrid = "eventgrid",
        /// Azure Event Hubs
        Eventhubs = "eventhubs",
        /// Azure Service Bus
        Servicebus = "servicebus",
        /// Google Cloud Pub/Sub
        GcpPubsub = "gcp_pubsub",
        /// Java Message Service
        Jms = "jms",
        /// Apache Kafka
        Kafka = "kafka",
        /// RabbitMQ
        Rabbitmq = "rabbitmq",
        /// Apache RocketMQ
        Rocketmq = "rocketmq",
        /// Apache Pulsar
        Pulsar = "pulsar",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute(
        "MESSAGING_BATCH_MESSAGE_COUNT",
        "messaging.batch.message_count",
        Experimental,
    ),
    Entry::attribute("MESSAGING_CLIENT_ID", "messaging.client.id", Experimental),
    Entry::attribute(
        "MESSAGING_CONSUMER_GROUP_NAME",
        "messaging.consumer.group.name",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_DESTINATION_ANONYMOUS",
        "messaging.destination.anonymous",
        Experimental,
    ),
    Entry::attribute("MESSAGING_DESTINATION_NAME", "messaging.destination.name", Experimental),
    Entry::attribute(
        "MESSAGING_DESTINATION_PARTITION_ID",
        "messaging.destination.partition.id",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_DESTINATION_SUBSCRIPTION_NAME",
        "messaging.destination.subscription.name",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_DESTINATION_TEMPLATE",
        "messaging.destination.template",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_DESTINATION_TEMPORARY",
        "messaging.destination.temporary",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_DESTINATION_PUBLISH_ANONYMOUS",
        "messaging.destination_publish.anonymous",
        Experimental,
    )
    .deprecated(Obsoleted),
    Entry::attribute(
        "MESSAGING_DESTINATION_PUBLISH_NAME",
        "messaging.destination_publish.name",
        Experimental,
    )
    .deprecated(Obsoleted),
    Entry::attribute(
        "MESSAGING_EVENTHUBS_CONSUMER_GROUP",
        "messaging.eventhubs.consumer.group",
        Experimental,
    )
    .deprecated(Renamed("messaging.consumer.group.name")),
    Entry::attribute(
        "MESSAGING_EVENTHUBS_MESSAGE_ENQUEUED_TIME",
        "messaging.eventhubs.message.enqueued_time",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_GCP_PUBSUB_MESSAGE_ACK_DEADLINE",
        "messaging.gcp_pubsub.message.ack_deadline",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_GCP_PUBSUB_MESSAGE_ACK_ID",
        "messaging.gcp_pubsub.message.ack_id",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_GCP_PUBSUB_MESSAGE_DELIVERY_ATTEMPT",
        "messaging.gcp_pubsub.message.delivery_attempt",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_GCP_PUBSUB_MESSAGE_ORDERING_KEY",
        "messaging.gcp_pubsub.message.ordering_key",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_KAFKA_CONSUMER_GROUP",
        "messaging.kafka.consumer.group",
        Experimental,
    )
    .deprecated(Renamed("messaging.consumer.group.name")),
    Entry::attribute(
        "MESSAGING_KAFKA_DESTINATION_PARTITION",
        "messaging.kafka.destination.partition",
        Experimental,
    )
    .deprecated(Obsoleted),
    Entry::attribute("MESSAGING_KAFKA_MESSAGE_KEY", "messaging.kafka.message.key", Experimental),
    Entry::attribute(
        "MESSAGING_KAFKA_MESSAGE_OFFSET",
        "messaging.kafka.message.offset",
        Experimental,
    )
    .deprecated(Renamed("messaging.kafka.offset")),
    Entry::attribute(
        "MESSAGING_KAFKA_MESSAGE_TOMBSTONE",
        "messaging.kafka.message.tombstone",
        Experimental,
    ),
    Entry::attribute("MESSAGING_KAFKA_OFFSET", "messaging.kafka.offset", Experimental),
    Entry::attribute("MESSAGING_MESSAGE_BODY_SIZE", "messaging.message.body.size", Experimental),
    Entry::attribute(
        "MESSAGING_MESSAGE_CONVERSATION_ID",
        "messaging.message.conversation_id",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_MESSAGE_ENVELOPE_SIZE",
        "messaging.message.envelope.size",
        Experimental,
    ),
    Entry::attribute("MESSAGING_MESSAGE_ID", "messaging.message.id", Experimental),
    Entry::attribute("MESSAGING_OPERATION", "messaging.operation", Experimental)
        .deprecated(Renamed("messaging.operation.type")),
    Entry::attribute("MESSAGING_OPERATION_NAME", "messaging.operation.name", Experimental),
    Entry::attribute("MESSAGING_OPERATION_TYPE", "messaging.operation.type", Experimental),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_CREATE",
        "messaging.operation.type",
        "create",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_SEND",
        "messaging.operation.type",
        "send",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_RECEIVE",
        "messaging.operation.type",
        "receive",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_PROCESS",
        "messaging.operation.type",
        "process",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_SETTLE",
        "messaging.operation.type",
        "settle",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_DELIVER",
        "messaging.operation.type",
        "deliver",
        Experimental,
    )
    .deprecated(Renamed("process")),
    Entry::value(
        "MESSAGING_OPERATION_TYPE_VALUE_PUBLISH",
        "messaging.operation.type",
        "publish",
        Experimental,
    )
    .deprecated(Renamed("send")),
    Entry::attribute(
        "MESSAGING_RABBITMQ_DESTINATION_ROUTING_KEY",
        "messaging.rabbitmq.destination.routing_key",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_RABBITMQ_MESSAGE_DELIVERY_TAG",
        "messaging.rabbitmq.message.delivery_tag",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_CLIENT_GROUP",
        "messaging.rocketmq.client_group",
        Experimental,
    )
    .deprecated(Uncategorized),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_CONSUMPTION_MODEL",
        "messaging.rocketmq.consumption_model",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_ROCKETMQ_CONSUMPTION_MODEL_VALUE_CLUSTERING",
        "messaging.rocketmq.consumption_model",
        "clustering",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_ROCKETMQ_CONSUMPTION_MODEL_VALUE_BROADCASTING",
        "messaging.rocketmq.consumption_model",
        "broadcasting",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_MESSAGE_DELAY_TIME_LEVEL",
        "messaging.rocketmq.message.delay_time_level",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_MESSAGE_DELIVERY_TIMESTAMP",
        "messaging.rocketmq.message.delivery_timestamp",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_MESSAGE_GROUP",
        "messaging.rocketmq.message.group",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_MESSAGE_KEYS",
        "messaging.rocketmq.message.keys",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_MESSAGE_TAG",
        "messaging.rocketmq.message.tag",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_ROCKETMQ_MESSAGE_TYPE",
        "messaging.rocketmq.message.type",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_NORMAL",
        "messaging.rocketmq.message.type",
        "normal",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_FIFO",
        "messaging.rocketmq.message.type",
        "fifo",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_DELAY",
        "messaging.rocketmq.message.type",
        "delay",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_ROCKETMQ_MESSAGE_TYPE_VALUE_TRANSACTION",
        "messaging.rocketmq.message.type",
        "transaction",
        Experimental,
    ),
    Entry::attribute("MESSAGING_ROCKETMQ_NAMESPACE", "messaging.rocketmq.namespace", Experimental),
    Entry::attribute(
        "MESSAGING_SERVICEBUS_DESTINATION_SUBSCRIPTION_NAME",
        "messaging.servicebus.destination.subscription_name",
        Experimental,
    )
    .deprecated(Renamed("messaging.destination.subscription.name")),
    Entry::attribute(
        "MESSAGING_SERVICEBUS_DISPOSITION_STATUS",
        "messaging.servicebus.disposition_status",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_COMPLETE",
        "messaging.servicebus.disposition_status",
        "complete",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_ABANDON",
        "messaging.servicebus.disposition_status",
        "abandon",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_DEAD_LETTER",
        "messaging.servicebus.disposition_status",
        "dead_letter",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_SERVICEBUS_DISPOSITION_STATUS_VALUE_DEFER",
        "messaging.servicebus.disposition_status",
        "defer",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_SERVICEBUS_MESSAGE_DELIVERY_COUNT",
        "messaging.servicebus.message.delivery_count",
        Experimental,
    ),
    Entry::attribute(
        "MESSAGING_SERVICEBUS_MESSAGE_ENQUEUED_TIME",
        "messaging.servicebus.message.enqueued_time",
        Experimental,
    ),
    Entry::attribute("MESSAGING_SYSTEM", "messaging.system", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_ACTIVEMQ", "messaging.system", "activemq", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_AWS_SNS", "messaging.system", "aws.sns", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_AWS_SQS", "messaging.system", "aws_sqs", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_EVENTGRID", "messaging.system", "eventgrid", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_EVENTHUBS", "messaging.system", "eventhubs", Experimental),
    Entry::value(
        "MESSAGING_SYSTEM_VALUE_SERVICEBUS",
        "messaging.system",
        "servicebus",
        Experimental,
    ),
    Entry::value(
        "MESSAGING_SYSTEM_VALUE_GCP_PUBSUB",
        "messaging.system",
        "gcp_pubsub",
        Experimental,
    ),
    Entry::value("MESSAGING_SYSTEM_VALUE_JMS", "messaging.system", "jms", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_KAFKA", "messaging.system", "kafka", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_RABBITMQ", "messaging.system", "rabbitmq", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_ROCKETMQ", "messaging.system", "rocketmq", Experimental),
    Entry::value("MESSAGING_SYSTEM_VALUE_PULSAR", "messaging.system", "pulsar", Experimental),
];
