// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `db`, `cassandra`, `elasticsearch`, `pool`, `state` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The consistency level of the query. Based on consistency values from [CQL](https://docs.datastax.com/en/cassandra-oss/3.0/cassandra/dml/dmlConfigConsistency.html).
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL: &str = "cassandra.consistency.level";

/// all
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_ALL: &str = "all";

/// each_quorum
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_EACH_QUORUM: &str = "each_quorum";

/// quorum
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_QUORUM: &str = "quorum";

/// local_quorum
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_QUORUM: &str = "local_quorum";

/// one
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_ONE: &str = "one";

/// two
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_TWO: &str = "two";

/// three
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_THREE: &str = "three";

/// local_one
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_ONE: &str = "local_one";

/// any
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_ANY: &str = "any";

/// serial
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_SERIAL: &str = "serial";

/// local_serial
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_SERIAL: &str = "local_serial";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`CASSANDRA_CONSISTENCY_LEVEL`].
    CassandraConsistencyLevel for CASSANDRA_CONSISTENCY_LEVEL {
        /// all
        All = "all",
        /// each_quorum
        EachQuorum = "each_quorum",
        /// quorum
        Quorum = "quorum",
        /// local_quorum
        LocalQuorum = "local_quorum",
        /// one
        One = "one",
        /// two
        Two = "two",
        /// three
        Three = "three",
        /// local_one
        LocalOne = "local_one",
        /// any
        Any = "any",
        /// serial
        Serial = "serial",
        /// local_serial
        LocalSerial = "local_serial",
    }
}

/// The data center of the coordinating node for a query.
///
/// Type: `string`. Examples: `"us-west-2"`.
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_COORDINATOR_DC: &str = "cassandra.coordinator.dc";

/// The ID of the coordinating node for a query.
///
/// Type: `string`. Examples: `"be13faa2-8574-4d71-926d-27f16cf8a7af"`.
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_COORDINATOR_ID: &str = "cassandra.coordinator.id";

/// The fetch size used for paging, i.e. how many rows will be returned at once.
///
/// Type: `int`. Examples: `5000`.
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_PAGE_SIZE: &str = "cassandra.page.size";

/// Whether or not the query is idempotent.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_QUERY_IDEMPOTENT: &str = "cassandra.query.idempotent";

/// The number of times a query was speculatively executed. Not set or `0` if the query was not executed speculatively.
///
/// Type: `int`. Examples: `0`, `2`.
#[cfg(feature = "semconv_experimental")]
pub const CASSANDRA_SPECULATIVE_EXECUTION_COUNT: &str = "cassandra.speculative_execution.count";

/// Deprecated, use `cassandra.consistency.level` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cassandra.consistency.level`.")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL: &str = "db.cassandra.consistency_level";

/// all
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_ALL: &str = "all";

/// each_quorum
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_EACH_QUORUM: &str = "each_quorum";

/// quorum
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_QUORUM: &str = "quorum";

/// local_quorum
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_QUORUM: &str = "local_quorum";

/// one
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_ONE: &str = "one";

/// two
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_TWO: &str = "two";

/// three
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_THREE: &str = "three";

/// local_one
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_ONE: &str = "local_one";

/// any
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_ANY: &str = "any";

/// serial
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_SERIAL: &str = "serial";

/// local_serial
#[cfg(feature = "semconv_experimental")]
pub const DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_SERIAL: &str = "local_serial";

/// Deprecated, use `cassandra.coordinator.dc` instead.
///
/// Type: `string`. Examples: `"us-west-2"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cassandra.coordinator.dc`.")]
pub const DB_CASSANDRA_COORDINATOR_DC: &str = "db.cassandra.coordinator.dc";

/// Deprecated, use `cassandra.coordinator.id` instead.
///
/// Type: `string`. Examples: `"be13faa2-8574-4d71-926d-27f16cf8a7af"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cassandra.coordinator.id`.")]
pub const DB_CASSANDRA_COORDINATOR_ID: &str = "db.cassandra.coordinator.id";

/// Deprecated, use `cassandra.query.idempotent` instead.
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cassandra.query.idempotent`.")]
pub const DB_CASSANDRA_IDEMPOTENCE: &str = "db.cassandra.idempotence";

/// Deprecated, use `cassandra.page.size` instead.
///
/// Type: `int`. Examples: `5000`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cassandra.page.size`.")]
pub const DB_CASSANDRA_PAGE_SIZE: &str = "db.cassandra.page_size";

/// Deprecated, use `cassandra.speculative_execution.count` instead.
///
/// Type: `int`. Examples: `0`, `2`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `cassandra.speculative_execution.count`.")]
pub const DB_CASSANDRA_SPECULATIVE_EXECUTION_COUNT: &str =
    "db.cassandra.speculative_execution_count";

/// Deprecated, use `db.collection.name` instead.
///
/// Type: `string`. Examples: `"mytable"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub const DB_CASSANDRA_TABLE: &str = "db.cassandra.table";

/// The name of the connection pool; unique within the instrumented application. In case the connection pool implementation doesn't provide a name, instrumentation SHOULD use a combination of parameters that would make the name unique, for example, combining attributes `server.address`, `server.port`, and `db.namespace`, formatted as `server.address:server.port/db.namespace`. Instrumentations that generate connection pool name following different patterns SHOULD document it.
///
/// Type: `string`. Examples: `"myDataSource"`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_POOL_NAME: &str = "db.client.connection.pool.name";

/// The state of a connection in the pool
///
/// Type: `string`. Examples: `"idle"`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_STATE: &str = "db.client.connection.state";

/// idle
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_STATE_VALUE_IDLE: &str = "idle";

/// used
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_STATE_VALUE_USED: &str = "used";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`DB_CLIENT_CONNECTION_STATE`].
    DbClientConnectionState for DB_CLIENT_CONNECTION_STATE {
        /// idle
        Idle = "idle",
        /// used
        Used = "used",
    }
}

/// Deprecated, use `db.client.connection.pool.name` instead.
///
/// Type: `string`. Examples: `"myDataSource"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.pool.name`.")]
pub const DB_CLIENT_CONNECTIONS_POOL_NAME: &str = "db.client.connections.pool.name";

/// Deprecated, use `db.client.connection.state` instead.
///
/// Type: `string`. Examples: `"idle"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.state`.")]
pub const DB_CLIENT_CONNECTIONS_STATE: &str = "db.client.connections.state";

/// idle
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTIONS_STATE_VALUE_IDLE: &str = "idle";

/// used
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTIONS_STATE_VALUE_USED: &str = "used";

/// The name of a collection (table, container) within the database.
///
/// Type: `string`. Examples: `"public.users"`, `"customers"`.
pub const DB_COLLECTION_NAME: &str = "db.collection.name";

/// Deprecated, use `server.address`, `server.port` attributes instead.
///
/// Type: `string`. Examples: `"Server=(localdb)\\v11.0;Integrated Security=true;"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address` and `server.port`.")]
pub const DB_CONNECTION_STRING: &str = "db.connection_string";

/// Deprecated, use `azure.client.id` instead.
///
/// Type: `string`. Examples: `"3ba4827d-4422-483f-b59f-85b74211c11d"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.client.id`.")]
pub const DB_COSMOSDB_CLIENT_ID: &str = "db.cosmosdb.client_id";

/// Deprecated, use `azure.cosmosdb.connection.mode` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.connection.mode`.")]
pub const DB_COSMOSDB_CONNECTION_MODE: &str = "db.cosmosdb.connection_mode";

/// Gateway (HTTP) connection.
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONNECTION_MODE_VALUE_GATEWAY: &str = "gateway";

/// Direct connection.
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONNECTION_MODE_VALUE_DIRECT: &str = "direct";

/// Deprecated, use `cosmosdb.consistency.level` instead.
///
/// Type: `string`. Examples: `"Eventual"`, `"ConsistentPrefix"`, `"BoundedStaleness"`, `"Strong"`, `"Session"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.consistency.level`.")]
pub const DB_COSMOSDB_CONSISTENCY_LEVEL: &str = "db.cosmosdb.consistency_level";

/// strong
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_STRONG: &str = "Strong";

/// bounded_staleness
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_BOUNDED_STALENESS: &str = "BoundedStaleness";

/// session
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_SESSION: &str = "Session";

/// eventual
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_EVENTUAL: &str = "Eventual";

/// consistent_prefix
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_CONSISTENT_PREFIX: &str = "ConsistentPrefix";

/// Deprecated, use `db.collection.name` instead.
///
/// Type: `string`. Examples: `"mytable"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub const DB_COSMOSDB_CONTAINER: &str = "db.cosmosdb.container";

/// Deprecated, no replacement at this time.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "No replacement at this time.")]
pub const DB_COSMOSDB_OPERATION_TYPE: &str = "db.cosmosdb.operation_type";

/// batch
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_BATCH: &str = "batch";

/// create
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_CREATE: &str = "create";

/// delete
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_DELETE: &str = "delete";

/// execute
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_EXECUTE: &str = "execute";

/// execute_javascript
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_EXECUTE_JAVASCRIPT: &str = "execute_javascript";

/// invalid
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_INVALID: &str = "invalid";

/// head
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_HEAD: &str = "head";

/// head_feed
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_HEAD_FEED: &str = "head_feed";

/// patch
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_PATCH: &str = "patch";

/// query
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_QUERY: &str = "query";

/// query_plan
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_QUERY_PLAN: &str = "query_plan";

/// read
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_READ: &str = "read";

/// read_feed
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_READ_FEED: &str = "read_feed";

/// replace
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_REPLACE: &str = "replace";

/// upsert
#[cfg(feature = "semconv_experimental")]
pub const DB_COSMOSDB_OPERATION_TYPE_VALUE_UPSERT: &str = "upsert";

/// Deprecated, use `azure.cosmosdb.operation.contacted_regions` instead.
///
/// Type: `string[]`. Examples: `["North Central US", "Australia East", "Australia Southeast"]`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.operation.contacted_regions`.")]
pub const DB_COSMOSDB_REGIONS_CONTACTED: &str = "db.cosmosdb.regions_contacted";

/// Deprecated, use `azure.cosmosdb.operation.request_charge` instead.
///
/// Type: `double`. Examples: `46.18`, `1.0`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.operation.request_charge`.")]
pub const DB_COSMOSDB_REQUEST_CHARGE: &str = "db.cosmosdb.request_charge";

/// Deprecated, use `azure.cosmosdb.request.body.size` instead.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.request.body.size`.")]
pub const DB_COSMOSDB_REQUEST_CONTENT_LENGTH: &str = "db.cosmosdb.request_content_length";

/// Deprecated, use `db.response.status_code` instead.
///
/// Type: `int`. Examples: `200`, `201`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.response.status_code`.")]
pub const DB_COSMOSDB_STATUS_CODE: &str = "db.cosmosdb.status_code";

/// Deprecated, use `azure.cosmosdb.response.sub_status_code` instead.
///
/// Type: `int`. Examples: `1000`, `1002`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `azure.cosmosdb.response.sub_status_code`.")]
pub const DB_COSMOSDB_SUB_STATUS_CODE: &str = "db.cosmosdb.sub_status_code";

/// Deprecated, use `db.namespace` instead.
///
/// Type: `string`. Examples: `"e9106fc68e3044f0b1475b04bf4ffd5f"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.namespace`.")]
pub const DB_ELASTICSEARCH_CLUSTER_NAME: &str = "db.elasticsearch.cluster.name";

/// Deprecated, use `elasticsearch.node.name` instead.
///
/// Type: `string`. Examples: `"instance-0000000001"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `elasticsearch.node.name`.")]
pub const DB_ELASTICSEARCH_NODE_NAME: &str = "db.elasticsearch.node.name";

/// Deprecated, use `db.operation.parameter` instead.
///
/// Type: `template[string]`. Examples: `"test-index"`, `"123"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.operation.parameter`.")]
pub const DB_ELASTICSEARCH_PATH_PARTS: &str = "db.elasticsearch.path_parts";

/// Builds a [`DB_ELASTICSEARCH_PATH_PARTS`] key for `key`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.operation.parameter`.")]
#[allow(deprecated)]
pub fn db_elasticsearch_path_parts(key: &str) -> String {
    crate::templated(DB_ELASTICSEARCH_PATH_PARTS, key)
}

/// Deprecated, no general replacement at this time. For Elasticsearch, use `db.elasticsearch.node.name` instead.
///
/// Type: `string`. Examples: `"mysql-e26b99z.example.com"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no general replacement at this time. For Elasticsearch, use `db.elasticsearch.node.name` instead.")]
pub const DB_INSTANCE_ID: &str = "db.instance.id";

/// Removed, no replacement at this time.
///
/// Type: `string`. Examples: `"org.postgresql.Driver"`, `"com.microsoft.sqlserver.jdbc.SQLServerDriver"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no replacement at this time.")]
pub const DB_JDBC_DRIVER_CLASSNAME: &str = "db.jdbc.driver_classname";

/// Deprecated, use `db.collection.name` instead.
///
/// Type: `string`. Examples: `"mytable"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub const DB_MONGODB_COLLECTION: &str = "db.mongodb.collection";

/// Deprecated, SQL Server instance is now populated as a part of `db.namespace` attribute.
///
/// Type: `string`. Examples: `"MSSQLSERVER"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, SQL Server instance is now populated as a part of `db.namespace` attribute.")]
pub const DB_MSSQL_INSTANCE_NAME: &str = "db.mssql.instance_name";

/// Deprecated, use `db.namespace` instead.
///
/// Type: `string`. Examples: `"customers"`, `"main"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.namespace`.")]
pub const DB_NAME: &str = "db.name";

/// The name of the database, fully qualified within the server address and port.
///
/// Type: `string`. Examples: `"customers"`, `"test.users"`.
pub const DB_NAMESPACE: &str = "db.namespace";

/// Deprecated, use `db.operation.name` instead.
///
/// Type: `string`. Examples: `"findAndModify"`, `"HMSET"`, `"SELECT"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.operation.name`.")]
pub const DB_OPERATION: &str = "db.operation";

/// The number of queries included in a batch operation.
///
/// Type: `int`. Examples: `2`, `3`, `4`.
pub const DB_OPERATION_BATCH_SIZE: &str = "db.operation.batch.size";

/// The name of the operation or command being executed.
///
/// Type: `string`. Examples: `"findAndModify"`, `"HMSET"`, `"SELECT"`.
pub const DB_OPERATION_NAME: &str = "db.operation.name";

/// A database operation parameter, with `<key>` being the parameter name, and the attribute value being a string representation of the parameter value.
///
/// Type: `template[string]`. Examples: `"someval"`, `"55"`.
#[cfg(feature = "semconv_experimental")]
pub const DB_OPERATION_PARAMETER: &str = "db.operation.parameter";

/// Builds a [`DB_OPERATION_PARAMETER`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn db_operation_parameter(key: &str) -> String {
    crate::templated(DB_OPERATION_PARAMETER, key)
}

/// A database query parameter, with `<key>` being the parameter name, and the attribute value being a string representation of the parameter value.
///
/// Type: `template[string]`. Examples: `"someval"`, `"55"`.
#[cfg(feature = "semconv_experimental")]
pub const DB_QUERY_PARAMETER: &str = "db.query.parameter";

/// Builds a [`DB_QUERY_PARAMETER`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn db_query_parameter(key: &str) -> String {
    crate::templated(DB_QUERY_PARAMETER, key)
}

/// Low cardinality summary of a database query.
///
/// Type: `string`. Examples: `"SELECT wuser_table"`, `"INSERT shipping_details SELECT orders"`, `"get user by id"`.
pub const DB_QUERY_SUMMARY: &str = "db.query.summary";

/// The database query being executed.
///
/// Type: `string`. Examples: `"SELECT * FROM wuser_table where username = ?"`, `"SET mykey ?"`.
pub const DB_QUERY_TEXT: &str = "db.query.text";

/// Deprecated, use `db.namespace` instead.
///
/// Type: `int`. Examples: `0`, `1`, `15`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Uncategorized.")]
pub const DB_REDIS_DATABASE_INDEX: &str = "db.redis.database_index";

/// Number of rows returned by the operation.
///
/// Type: `int`. Examples: `10`, `30`, `1000`.
#[cfg(feature = "semconv_experimental")]
pub const DB_RESPONSE_RETURNED_ROWS: &str = "db.response.returned_rows";

/// Database response status code.
///
/// Type: `string`. Examples: `"102"`, `"ORA-17002"`, `"08P01"`, `"404"`.
pub const DB_RESPONSE_STATUS_CODE: &str = "db.response.status_code";

/// Deprecated, use `db.collection.name` instead.
///
/// Type: `string`. Examples: `"mytable"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.collection.name`, but only if not extracting the value from `db.query.text`.")]
pub const DB_SQL_TABLE: &str = "db.sql.table";

/// The database statement being executed.
///
/// Type: `string`. Examples: `"SELECT * FROM wuser_table"`, `"SET mykey \"WuValue\""`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.query.text`.")]
pub const DB_STATEMENT: &str = "db.statement";

/// The name of a stored procedure within the database.
///
/// Type: `string`. Examples: `"GetCustomer"`.
pub const DB_STORED_PROCEDURE_NAME: &str = "db.stored_procedure.name";

/// Deprecated, use `db.system.name` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.system.name`.")]
pub const DB_SYSTEM: &str = "db.system";

/// Some other SQL database. Fallback only. See notes.
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_OTHER_SQL: &str = "other_sql";

/// Adabas (Adaptable Database System)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_ADABAS: &str = "adabas";

/// Deprecated, use `intersystems_cache` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `intersystems_cache`.")]
pub const DB_SYSTEM_VALUE_CACHE: &str = "cache";

/// InterSystems Caché
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_INTERSYSTEMS_CACHE: &str = "intersystems_cache";

/// Apache Cassandra
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_CASSANDRA: &str = "cassandra";

/// ClickHouse
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_CLICKHOUSE: &str = "clickhouse";

/// Deprecated, use `other_sql` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `other_sql`.")]
pub const DB_SYSTEM_VALUE_CLOUDSCAPE: &str = "cloudscape";

/// CockroachDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_COCKROACHDB: &str = "cockroachdb";

/// Deprecated, no replacement at this time.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed.")]
pub const DB_SYSTEM_VALUE_COLDFUSION: &str = "coldfusion";

/// Microsoft Azure Cosmos DB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_COSMOSDB: &str = "cosmosdb";

/// Couchbase
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_COUCHBASE: &str = "couchbase";

/// CouchDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_COUCHDB: &str = "couchdb";

/// IBM Db2
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_DB2: &str = "db2";

/// Apache Derby
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_DERBY: &str = "derby";

/// Amazon DynamoDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_DYNAMODB: &str = "dynamodb";

/// EnterpriseDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_EDB: &str = "edb";

/// Elasticsearch
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_ELASTICSEARCH: &str = "elasticsearch";

/// FileMaker
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_FILEMAKER: &str = "filemaker";

/// Firebird
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_FIREBIRD: &str = "firebird";

/// Deprecated, use `other_sql` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `other_sql`.")]
pub const DB_SYSTEM_VALUE_FIRSTSQL: &str = "firstsql";

/// Apache Geode
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_GEODE: &str = "geode";

/// H2
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_H2: &str = "h2";

/// SAP HANA
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_HANADB: &str = "hanadb";

/// Apache HBase
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_HBASE: &str = "hbase";

/// Apache Hive
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_HIVE: &str = "hive";

/// HyperSQL DataBase
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_HSQLDB: &str = "hsqldb";

/// InfluxDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_INFLUXDB: &str = "influxdb";

/// Informix
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_INFORMIX: &str = "informix";

/// Ingres
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_INGRES: &str = "ingres";

/// InstantDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_INSTANTDB: &str = "instantdb";

/// InterBase
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_INTERBASE: &str = "interbase";

/// MariaDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_MARIADB: &str = "mariadb";

/// SAP MaxDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_MAXDB: &str = "maxdb";

/// Memcached
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_MEMCACHED: &str = "memcached";

/// MongoDB
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_MONGODB: &str = "mongodb";

/// Microsoft SQL Server
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_MSSQL: &str = "mssql";

/// Deprecated, Microsoft SQL Server Compact is discontinued.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, use `other_sql` instead.")]
pub const DB_SYSTEM_VALUE_MSSQLCOMPACT: &str = "mssqlcompact";

/// MySQL
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_MYSQL: &str = "mysql";

/// Neo4j
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_NEO4J: &str = "neo4j";

/// Netezza
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_NETEZZA: &str = "netezza";

/// OpenSearch
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_OPENSEARCH: &str = "opensearch";

/// Oracle Database
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_ORACLE: &str = "oracle";

/// Pervasive PSQL
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_PERVASIVE: &str = "pervasive";

/// PointBase
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_POINTBASE: &str = "pointbase";

/// PostgreSQL
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_POSTGRESQL: &str = "postgresql";

/// Progress Database
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_PROGRESS: &str = "progress";

/// Redis
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_REDIS: &str = "redis";

/// Amazon Redshift
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_REDSHIFT: &str = "redshift";

/// Cloud Spanner
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_SPANNER: &str = "spanner";

/// SQLite
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_SQLITE: &str = "sqlite";

/// Sybase
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_SYBASE: &str = "sybase";

/// Teradata
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_TERADATA: &str = "teradata";

/// Trino
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_TRINO: &str = "trino";

/// Vertica
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_VALUE_VERTICA: &str = "vertica";

/// The database management system (DBMS) product as identified by the client instrumentation.
///
/// The actual DBMS may differ from the one identified by the client. For example, when using PostgreSQL client libraries to connect to a CockroachDB, the `db.system.name` is set to `postgresql` based on the instrumentation's best knowledge.
///
/// Type: `string`.
pub const DB_SYSTEM_NAME: &str = "db.system.name";

/// Some other SQL database. Fallback only.
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_OTHER_SQL: &str = "other_sql";

/// [Adabas (Adaptable Database System)](https://documentation.softwareag.com/?pf=adabas)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_SOFTWAREAG_ADABAS: &str = "softwareag.adabas";

/// [Actian Ingres](https://www.actian.com/databases/ingres/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_ACTIAN_INGRES: &str = "actian.ingres";

/// [Amazon DynamoDB](https://aws.amazon.com/pm/dynamodb/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_AWS_DYNAMODB: &str = "aws.dynamodb";

/// [Amazon Redshift](https://aws.amazon.com/redshift/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_AWS_REDSHIFT: &str = "aws.redshift";

/// [Azure Cosmos DB](https://learn.microsoft.com/azure/cosmos-db)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_AZURE_COSMOSDB: &str = "azure.cosmosdb";

/// [InterSystems Caché](https://www.intersystems.com/products/cache/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_INTERSYSTEMS_CACHE: &str = "intersystems.cache";

/// [Apache Cassandra](https://cassandra.apache.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_CASSANDRA: &str = "cassandra";

/// [ClickHouse](https://clickhouse.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_CLICKHOUSE: &str = "clickhouse";

/// [CockroachDB](https://www.cockroachlabs.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_COCKROACHDB: &str = "cockroachdb";

/// [Couchbase](https://www.couchbase.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_COUCHBASE: &str = "couchbase";

/// [Apache CouchDB](https://couchdb.apache.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_COUCHDB: &str = "couchdb";

/// [Apache Derby](https://db.apache.org/derby/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_DERBY: &str = "derby";

/// [Elasticsearch](https://www.elastic.co/elasticsearch)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_ELASTICSEARCH: &str = "elasticsearch";

/// [Firebird](https://www.firebirdsql.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_FIREBIRDSQL: &str = "firebirdsql";

/// [Google Cloud Spanner](https://cloud.google.com/spanner)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_GCP_SPANNER: &str = "gcp.spanner";

/// [Apache Geode](https://geode.apache.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_GEODE: &str = "geode";

/// [H2 Database](https://h2database.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_H2DATABASE: &str = "h2database";

/// [Apache HBase](https://hbase.apache.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_HBASE: &str = "hbase";

/// [Apache Hive](https://hive.apache.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_HIVE: &str = "hive";

/// [HyperSQL Database](https://hsqldb.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_HSQLDB: &str = "hsqldb";

/// [IBM Db2](https://www.ibm.com/db2)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_IBM_DB2: &str = "ibm.db2";

/// [IBM Informix](https://www.ibm.com/products/informix)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_IBM_INFORMIX: &str = "ibm.informix";

/// [IBM Netezza](https://www.ibm.com/products/netezza)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_IBM_NETEZZA: &str = "ibm.netezza";

/// [InfluxDB](https://www.influxdata.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_INFLUXDB: &str = "influxdb";

/// [Instant](https://www.instantdb.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_INSTANTDB: &str = "instantdb";

/// [MariaDB](https://mariadb.org/)
pub const DB_SYSTEM_NAME_VALUE_MARIADB: &str = "mariadb";

/// [Memcached](https://memcached.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_MEMCACHED: &str = "memcached";

/// [MongoDB](https://www.mongodb.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_MONGODB: &str = "mongodb";

/// [Microsoft SQL Server](https://www.microsoft.com/sql-server)
pub const DB_SYSTEM_NAME_VALUE_MICROSOFT_SQL_SERVER: &str = "microsoft.sql_server";

/// [MySQL](https://www.mysql.com/)
pub const DB_SYSTEM_NAME_VALUE_MYSQL: &str = "mysql";

/// [Neo4j](https://neo4j.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_NEO4J: &str = "neo4j";

/// [OpenSearch](https://opensearch.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_OPENSEARCH: &str = "opensearch";

/// [Oracle Database](https://www.oracle.com/database/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_ORACLE_DB: &str = "oracle.db";

/// [PostgreSQL](https://www.postgresql.org/)
pub const DB_SYSTEM_NAME_VALUE_POSTGRESQL: &str = "postgresql";

/// [Redis](https://redis.io/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_REDIS: &str = "redis";

/// [SAP HANA](https://www.sap.com/products/technology-platform/hana/what-is-sap-hana.html)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_SAP_HANA: &str = "sap.hana";

/// [SAP MaxDB](https://maxdb.sap.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_SAP_MAXDB: &str = "sap.maxdb";

/// [SQLite](https://www.sqlite.org/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_SQLITE: &str = "sqlite";

/// [Teradata](https://www.teradata.com/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_TERADATA: &str = "teradata";

/// [Trino](https://trino.io/)
#[cfg(feature = "semconv_experimental")]
pub const DB_SYSTEM_NAME_VALUE_TRINO: &str = "trino";

semconv_enum! {
    /// Values of [`DB_SYSTEM_NAME`].
    DbSystemName for DB_SYSTEM_NAME {
        /// Some other SQL database. Fallback only.
        OtherSql = "other_sql",
        /// [Adabas (Adaptable Database System)](https://documentation.softwareag.com/?pf=adabas)
        SoftwareagAdabas = "softwareag.adabas",
        /// [Actian Ingres](https://www.actian.com/databases/ingres/)
        ActianIngres = "actian.ingres",
        /// [Amazon DynamoDB](https://aws.amazon.com/pm/dynamodb/)
        AwsDynamodb = "aws.dynamodb",
        /// [Amazon Redshift](https://aws.amazon.com/redshift/)
        AwsRedshift = "aws.redshift",
        /// [Azure Cosmos DB](https://learn.microsoft.com/azure/cosmos-db)
        AzureCosmosdb = "azure.cosmosdb",
        /// [InterSystems Caché](https://www.intersystems.com/products/cache/)
        IntersystemsCache = "intersystems.cache",
        /// [Apache Cassandra](https://cassandra.apache.org/)
        Cassandra = "cassandra",
        /// [ClickHouse](https://clickhouse.com/)
        Clickhouse = "clickhouse",
        /// [CockroachDB](https://www.cockroachlabs.com/)
        Cockroachdb = "cockroachdb",
        /// [Couchbase](https://www.couchbase.com/)
        Couchbase = "couchbase",
        /// [Apache CouchDB](https://couchdb.apache.org/)
        Couchdb = "couchdb",
        /// [Apache Derby](https://db.apache.org/derby/)
        Derby = "derby",
        /// [Elasticsearch](https://www.elastic.co/elasticsearch)
        Elasticsearch = "elasticsearch",
        /// [Firebird](https://www.firebirdsql.org/)
        Firebirdsql = "firebirdsql",
        /// [Google Cloud Spanner](https://cloud.google.com/spanner)
        GcpSpanner = "gcp.spanner",
        /// [Apache Geode](https://geode.apache.org/)
        Geode = "geode",
        /// [H2 Database](https://h2database.com/)
        H2database = "h2database",
        /// [Apache HBase](https://hbase.apache.org/)
        Hbase = "hbase",
        /// [Apache Hive](https://hive.apache.org/)
        Hive = "hive",
        /// [HyperSQL Database](https://hsqldb.org/)
        Hsqldb = "hsqldb",
        /// [IBM Db2](https://www.ibm.com/db2)
        IbmDb2 = "ibm.db2",
        /// [IBM Informix](https://www.ibm.com/products/informix)
        IbmInformix = "ibm.informix",
        /// [IBM Netezza](https://www.ibm.com/products/netezza)
        IbmNetezza = "ibm.netezza",
        /// [InfluxDB](https://www.influxdata.com/)
        Influxdb = "influxdb",
        /// [Instant](https://www.instantdb.com/)
        Instantdb = "instantdb",
        /// [MariaDB](https://mariadb.org/)
        Mariadb = "mariadb",
        /// [Memcached](https://memcached.org/)
        Memcached = "memcached",
        /// [MongoDB](https://www.mongodb.com/)
        Mongodb = "mongodb",
        /// [Microsoft SQL Server](https://www.microsoft.com/sql-server)
        MicrosoftSqlServer = "microsoft.sql_server",
        /// [MySQL](https://www.mysql.com/)
        Mysql = "mysql",
        /// [Neo4j](https://neo4j.com/)
        Neo4j = "neo4j",
        /// [OpenSearch](https://opensearch.org/)
        Opensearch = "opensearch",
        /// [Oracle Database](https://www.oracle.com/database/)
        OracleDb = "oracle.db",
        /// [PostgreSQL](https://www.postgresql.org/)
        Postgresql = "postgresql",
        /// [Redis](https://redis.io/)
        Redis = "redis",
        /// [SAP HANA](https://www.sap.com/products/technology-platform/hana/what-is-sap-hana.html)
        SapHana = "sap.hana",
        /// [SAP MaxDB](https://maxdb.sap.com/)
        SapMaxdb = "sap.maxdb",
        /// [SQLite](https://www.sqlite.org/)
        Sqlite = "sqlite",
        /// [Teradata](https://www.teradata.com/)
        Teradata = "teradata",
        /// [Trino](https://trino.io/)
        Trino = "trino",
    }
}

/// Deprecated, no replacement at this time.
///
/// Type: `string`. Examples: `"readonly_user"`, `"reporting_user"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no replacement at this time.")]
pub const DB_USER: &str = "db.user";

/// Represents the human-readable identifier of the node/instance to which a request was routed.
///
/// Type: `string`. Examples: `"instance-0000000001"`.
#[cfg(feature = "semconv_experimental")]
pub const ELASTICSEARCH_NODE_NAME: &str = "elasticsearch.node.name";

/// Deprecated, use `db.client.connection.pool.name` instead.
///
/// Type: `string`. Examples: `"myDataSource"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.pool.name`.")]
pub const POOL_NAME: &str = "pool.name";

/// Deprecated, use `db.client.connection.state` instead.
///
/// Type: `string`. Examples: `"idle"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `db.client.connection.state`.")]
pub const STATE: &str = "state";

/// idle
#[cfg(feature = "semconv_experimental")]
pub const STATE_VALUE_IDLE: &str = "idle";

/// used
#[cfg(feature = "semconv_experimental")]
pub const STATE_VALUE_USED: &str = "used";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CASSANDRA_CONSISTENCY_LEVEL", "cassandra.consistency.level", Experimental),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_ALL",
        "cassandra.consistency.level",
        "all",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_EACH_QUORUM",
        "cassandra.consistency.level",
        "each_quorum",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_QUORUM",
        "cassandra.consistency.level",
        "quorum",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_QUORUM",
        "cassandra.consistency.level",
        "local_quorum",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_ONE",
        "cassandra.consistency.level",
        "one",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_TWO",
        "cassandra.consistency.level",
        "two",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_THREE",
        "cassandra.consistency.level",
        "three",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_ONE",
        "cassandra.consistency.level",
        "local_one",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_ANY",
        "cassandra.consistency.level",
        "any",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_SERIAL",
        "cassandra.consistency.level",
        "serial",
        Experimental,
    ),
    Entry::value(
        "CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_SERIAL",
        "cassandra.consistency.level",
        "local_serial",
        Experimental,
    ),
    Entry::attribute("CASSANDRA_COORDINATOR_DC", "cassandra.coordinator.dc", Experimental),
    Entry::attribute("CASSANDRA_COORDINATOR_ID", "cassandra.coordinator.id", Experimental),
    Entry::attribute("CASSANDRA_PAGE_SIZE", "cassandra.page.size", Experimental),
    Entry::attribute("CASSANDRA_QUERY_IDEMPOTENT", "cassandra.query.idempotent", Experimental),
    Entry::attribute(
        "CASSANDRA_SPECULATIVE_EXECUTION_COUNT",
        "cassandra.speculative_execution.count",
        Experimental,
    ),
    Entry::attribute(
        "DB_CASSANDRA_CONSISTENCY_LEVEL",
        "db.cassandra.consistency_level",
        Experimental,
    )
    .deprecated(Renamed("cassandra.consistency.level")),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_ALL",
        "db.cassandra.consistency_level",
        "all",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_EACH_QUORUM",
        "db.cassandra.consistency_level",
        "each_quorum",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_QUORUM",
        "db.cassandra.consistency_level",
        "quorum",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_QUORUM",
        "db.cassandra.consistency_level",
        "local_quorum",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_ONE",
        "db.cassandra.consistency_level",
        "one",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_TWO",
        "db.cassandra.consistency_level",
        "two",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_THREE",
        "db.cassandra.consistency_level",
        "three",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_ONE",
        "db.cassandra.consistency_level",
        "local_one",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_ANY",
        "db.cassandra.consistency_level",
        "any",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_SERIAL",
        "db.cassandra.consistency_level",
        "serial",
        Experimental,
    ),
    Entry::value(
        "DB_CASSANDRA_CONSISTENCY_LEVEL_VALUE_LOCAL_SERIAL",
        "db.cassandra.consistency_level",
        "local_serial",
        Experimental,
    ),
    Entry::attribute("DB_CASSANDRA_COORDINATOR_DC", "db.cassandra.coordinator.dc", Experimental)
        .deprecated(Renamed("cassandra.coordinator.dc")),
    Entry::attribute("DB_CASSANDRA_COORDINATOR_ID", "db.cassandra.coordinator.id", Experimental)
        .deprecated(Renamed("cassandra.coordinator.id")),
    Entry::attribute("DB_CASSANDRA_IDEMPOTENCE", "db.cassandra.idempotence", Experimental)
        .deprecated(Renamed("cassandra.query.idempotent")),
    Entry::attribute("DB_CASSANDRA_PAGE_SIZE", "db.cassandra.page_size", Experimental)
        .deprecated(Renamed("cassandra.page.size")),
    Entry::attribute(
        "DB_CASSANDRA_SPECULATIVE_EXECUTION_COUNT",
        "db.cassandra.speculative_execution_count",
        Experimental,
    )
    .deprecated(Renamed("cassandra.speculative_execution.count")),
    Entry::attribute("DB_CASSANDRA_TABLE", "db.cassandra.table", Experimental)
        .deprecated(Renamed("db.collection.name")),
    Entry::attribute(
        "DB_CLIENT_CONNECTION_POOL_NAME",
        "db.client.connection.pool.name",
        Experimental,
    ),
    Entry::attribute("DB_CLIENT_CONNECTION_STATE", "db.client.connection.state", Experimental),
    Entry::value(
        "DB_CLIENT_CONNECTION_STATE_VALUE_IDLE",
        "db.client.connection.state",
        "idle",
        Experimental,
    ),
    Entry::value(
        "DB_CLIENT_CONNECTION_STATE_VALUE_USED",
        "db.client.connection.state",
        "used",
        Experimental,
    ),
    Entry::attribute(
        "DB_CLIENT_CONNECTIONS_POOL_NAME",
        "db.client.connections.pool.name",
        Experimental,
    )
    .deprecated(Renamed("db.client.connection.pool.name")),
    Entry::attribute("DB_CLIENT_CONNECTIONS_STATE", "db.client.connections.state", Experimental)
        .deprecated(Renamed("db.client.connection.state")),
    Entry::value(
        "DB_CLIENT_CONNECTIONS_STATE_VALUE_IDLE",
        "db.client.connections.state",
        "idle",
        Experimental,
    ),
    Entry::value(
        "DB_CLIENT_CONNECTIONS_STATE_VALUE_USED",
        "db.client.connections.state",
        "used",
        Experimental,
    ),
    Entry::attribute("DB_COLLECTION_NAME", "db.collection.name", Stable),
    Entry::attribute("DB_CONNECTION_STRING", "db.connection_string", Experimental)
        .deprecated(Uncategorized),
    Entry::attribute("DB_COSMOSDB_CLIENT_ID", "db.cosmosdb.client_id", Experimental)
        .deprecated(Renamed("azure.client.id")),
    Entry::attribute("DB_COSMOSDB_CONNECTION_MODE", "db.cosmosdb.connection_mode", Experimental)
        .deprecated(Renamed("azure.cosmosdb.connection.mode")),
    Entry::value(
        "DB_COSMOSDB_CONNECTION_MODE_VALUE_GATEWAY",
        "db.cosmosdb.connection_mode",
        "gateway",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_CONNECTION_MODE_VALUE_DIRECT",
        "db.cosmosdb.connection_mode",
        "direct",
        Experimental,
    ),
    Entry::attribute("DB_COSMOSDB_CONSISTENCY_LEVEL", "db.cosmosdb.consistency_level", Experimental)
        .deprecated(Renamed("azure.cosmosdb.consistency.level")),
    Entry::value(
        "DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_STRONG",
        "db.cosmosdb.consistency_level",
        "Strong",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_BOUNDED_STALENESS",
        "db.cosmosdb.consistency_level",
        "BoundedStaleness",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_SESSION",
        "db.cosmosdb.consistency_level",
        "Session",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_EVENTUAL",
        "db.cosmosdb.consistency_level",
        "Eventual",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_CONSISTENCY_LEVEL_VALUE_CONSISTENT_PREFIX",
        "db.cosmosdb.consistency_level",
        "ConsistentPrefix",
        Experimental,
    ),
    Entry::attribute("DB_COSMOSDB_CONTAINER", "db.cosmosdb.container", Experimental)
        .deprecated(Renamed("db.collection.name")),
    Entry::attribute("DB_COSMOSDB_OPERATION_TYPE", "db.cosmosdb.operation_type", Experimental)
        .deprecated(Obsoleted),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_BATCH",
        "db.cosmosdb.operation_type",
        "batch",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_CREATE",
        "db.cosmosdb.operation_type",
        "create",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_DELETE",
        "db.cosmosdb.operation_type",
        "delete",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_EXECUTE",
        "db.cosmosdb.operation_type",
        "execute",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_EXECUTE_JAVASCRIPT",
        "db.cosmosdb.operation_type",
        "execute_javascript",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_INVALID",
        "db.cosmosdb.operation_type",
        "invalid",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_HEAD",
        "db.cosmosdb.operation_type",
        "head",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_HEAD_FEED",
        "db.cosmosdb.operation_type",
        "head_feed",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_PATCH",
        "db.cosmosdb.operation_type",
        "patch",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_QUERY",
        "db.cosmosdb.operation_type",
        "query",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_QUERY_PLAN",
        "db.cosmosdb.operation_type",
        "query_plan",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_READ",
        "db.cosmosdb.operation_type",
        "read",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_READ_FEED",
        "db.cosmosdb.operation_type",
        "read_feed",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_REPLACE",
        "db.cosmosdb.operation_type",
        "replace",
        Experimental,
    ),
    Entry::value(
        "DB_COSMOSDB_OPERATION_TYPE_VALUE_UPSERT",
        "db.cosmosdb.operation_type",
        "upsert",
        Experimental,
    ),
    Entry::attribute("DB_COSMOSDB_REGIONS_CONTACTED", "db.cosmosdb.regions_contacted", Experimental)
        .deprecated(Renamed("azure.cosmosdb.operation.contacted_regions")),
    Entry::attribute("DB_COSMOSDB_REQUEST_CHARGE", "db.cosmosdb.request_charge", Experimental)
        .deprecated(Renamed("azure.cosmosdb.operation.request_charge")),
    Entry::attribute(
        "DB_COSMOSDB_REQUEST_CONTENT_LENGTH",
        "db.cosmosdb.request_content_length",
        Experimental,
    )
    .deprecated(Renamed("azure.cosmosdb.request.body.size")),
    Entry::attribute("DB_COSMOSDB_STATUS_CODE", "db.cosmosdb.status_code", Experimental)
        .deprecated(Uncategorized),
    Entry::attribute("DB_COSMOSDB_SUB_STATUS_CODE", "db.cosmosdb.sub_status_code", Experimental)
        .deprecated(Renamed("azure.cosmosdb.response.sub_status_code")),
    Entry::attribute("DB_ELASTICSEARCH_CLUSTER_NAME", "db.elasticsearch.cluster.name", Experimental)
        .deprecated(Renamed("db.namespace")),
    Entry::attribute("DB_ELASTICSEARCH_NODE_NAME", "db.elasticsearch.node.name", Experimental)
        .deprecated(Renamed("elasticsearch.node.name")),
    Entry::template("DB_ELASTICSEARCH_PATH_PARTS", "db.elasticsearch.path_parts", Experimental)
        .deprecated(Renamed("db.operation.parameter")),
    Entry::attribute("DB_INSTANCE_ID", "db.instance.id", Experimental).deprecated(Obsoleted),
    Entry::attribute("DB_JDBC_DRIVER_CLASSNAME", "db.jdbc.driver_classname", Experimental)
        .deprecated(Obsoleted),
    Entry::attribute("DB_MONGODB_COLLECTION", "db.mongodb.collection", Experimental)
        .deprecated(Renamed("db.collection.name")),
    Entry::attribute("DB_MSSQL_INSTANCE_NAME", "db.mssql.instance_name", Experimental)
        .deprecated(Obsoleted),
    Entry::attribute("DB_NAME", "db.name", Experimental).deprecated(Renamed("db.namespace")),
    Entry::attribute("DB_NAMESPACE", "db.namespace", Stable),
    Entry::attribute("DB_OPERATION", "db.operation", Experimental)
        .deprecated(Renamed("db.operation.name")),
    Entry::attribute("DB_OPERATION_BATCH_SIZE", "db.operation.batch.size", Stable),
    Entry::attribute("DB_OPERATION_NAME", "db.operation.name", Stable),
    Entry::template("DB_OPERATION_PARAMETER", "db.operation.parameter", Experimental),
    Entry::template("DB_QUERY_PARAMETER", "db.query.parameter", Experimental),
    Entry::attribute("DB_QUERY_SUMMARY", "db.query.summary", Stable),
    Entry::attribute("DB_QUERY_TEXT", "db.query.text", Stable),
    Entry::attribute("DB_REDIS_DATABASE_INDEX", "db.redis.database_index", Experimental)
        .deprecated(Uncategorized),
    Entry::attribute("DB_RESPONSE_RETURNED_ROWS", "db.response.returned_rows", Experimental),
    Entry::attribute("DB_RESPONSE_STATUS_CODE", "db.response.status_code", Stable),
    Entry::attribute("DB_SQL_TABLE", "db.sql.table", Experimental).deprecated(Uncategorized),
    Entry::attribute("DB_STATEMENT", "db.statement", Experimental)
        .deprecated(Renamed("db.query.text")),
    Entry::attribute("DB_STORED_PROCEDURE_NAME", "db.stored_procedure.name", Stable),
    Entry::attribute("DB_SYSTEM", "db.system", Experimental).deprecated(Renamed("db.system.name")),
    Entry::value("DB_SYSTEM_VALUE_OTHER_SQL", "db.system", "other_sql", Experimental),
    Entry::value("DB_SYSTEM_VALUE_ADABAS", "db.system", "adabas", Experimental),
    Entry::value("DB_SYSTEM_VALUE_CACHE", "db.system", "cache", Experimental)
        .deprecated(Renamed("intersystems_cache")),
    Entry::value(
        "DB_SYSTEM_VALUE_INTERSYSTEMS_CACHE",
        "db.system",
        "intersystems_cache",
        Experimental,
    ),
    Entry::value("DB_SYSTEM_VALUE_CASSANDRA", "db.system", "cassandra", Experimental),
    Entry::value("DB_SYSTEM_VALUE_CLICKHOUSE", "db.system", "clickhouse", Experimental),
    Entry::value("DB_SYSTEM_VALUE_CLOUDSCAPE", "db.system", "cloudscape", Experimental)
        .deprecated(Renamed("other_sql")),
    Entry::value("DB_SYSTEM_VALUE_COCKROACHDB", "db.system", "cockroachdb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_COLDFUSION", "db.system", "coldfusion", Experimental)
        .deprecated(Obsoleted),
    Entry::value("DB_SYSTEM_VALUE_COSMOSDB", "db.system", "cosmosdb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_COUCHBASE", "db.system", "couchbase", Experimental),
    Entry::value("DB_SYSTEM_VALUE_COUCHDB", "db.system", "couchdb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_DB2", "db.system", "db2", Experimental),
    Entry::value("DB_SYSTEM_VALUE_DERBY", "db.system", "derby", Experimental),
    Entry::value("DB_SYSTEM_VALUE_DYNAMODB", "db.system", "dynamodb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_EDB", "db.system", "edb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_ELASTICSEARCH", "db.system", "elasticsearch", Experimental),
    Entry::value("DB_SYSTEM_VALUE_FILEMAKER", "db.system", "filemaker", Experimental),
    Entry::value("DB_SYSTEM_VALUE_FIREBIRD", "db.system", "firebird", Experimental),
    Entry::value("DB_SYSTEM_VALUE_FIRSTSQL", "db.system", "firstsql", Experimental)
        .deprecated(Renamed("other_sql")),
    Entry::value("DB_SYSTEM_VALUE_GEODE", "db.system", "geode", Experimental),
    Entry::value("DB_SYSTEM_VALUE_H2", "db.system", "h2", Experimental),
    Entry::value("DB_SYSTEM_VALUE_HANADB", "db.system", "hanadb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_HBASE", "db.system", "hbase", Experimental),
    Entry::value("DB_SYSTEM_VALUE_HIVE", "db.system", "hive", Experimental),
    Entry::value("DB_SYSTEM_VALUE_HSQLDB", "db.system", "hsqldb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_INFLUXDB", "db.system", "influxdb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_INFORMIX", "db.system", "informix", Experimental),
    Entry::value("DB_SYSTEM_VALUE_INGRES", "db.system", "ingres", Experimental),
    Entry::value("DB_SYSTEM_VALUE_INSTANTDB", "db.system", "instantdb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_INTERBASE", "db.system", "interbase", Experimental),
    Entry::value("DB_SYSTEM_VALUE_MARIADB", "db.system", "mariadb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_MAXDB", "db.system", "maxdb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_MEMCACHED", "db.system", "memcached", Experimental),
    Entry::value("DB_SYSTEM_VALUE_MONGODB", "db.system", "mongodb", Experimental),
    Entry::value("DB_SYSTEM_VALUE_MSSQL", "db.system", "mssql", Experimental),
    Entry::value("DB_SYSTEM_VALUE_MSSQLCOMPACT", "db.system", "mssqlcompact", Experimental)
        .deprecated(Obsoleted),
    Entry::value("DB_SYSTEM_VALUE_MYSQL", "db.system", "mysql", Experimental),
    Entry::value("DB_SYSTEM_VALUE_NEO4J", "db.system", "neo4j", Experimental),
    Entry::value("DB_SYSTEM_VALUE_NETEZZA", "db.system", "netezza", Experimental),
    Entry::value("DB_SYSTEM_VALUE_OPENSEARCH", "db.system", "opensearch", Experimental),
    Entry::value("DB_SYSTEM_VALUE_ORACLE", "db.system", "oracle", Experimental),
    Entry::value("DB_SYSTEM_VALUE_PERVASIVE", "db.system", "pervasive", Experimental),
    Entry::value("DB_SYSTEM_VALUE_POINTBASE", "db.system", "pointbase", Experimental),
    Entry::value("DB_SYSTEM_VALUE_POSTGRESQL", "db.system", "postgresql", Experimental),
    Entry::value("DB_SYSTEM_VALUE_PROGRESS", "db.system", "progress", Experimental),
    Entry::value("DB_SYSTEM_VALUE_REDIS", "db.system", "redis", Experimental),
    Entry::value("DB_SYSTEM_VALUE_REDSHIFT", "db.system", "redshift", Experimental),
    Entry::value("DB_SYSTEM_VALUE_SPANNER", "db.system", "spanner", Experimental),
    Entry::value("DB_SYSTEM_VALUE_SQLITE", "db.system", "sqlite", Experimental),
    Entry::value("DB_SYSTEM_VALUE_SYBASE", "db.system", "sybase", Experimental),
    Entry::value("DB_SYSTEM_VALUE_TERADATA", "db.system", "teradata", Experimental),
    Entry::value("DB_SYSTEM_VALUE_TRINO", "db.system", "trino", Experimental),
    Entry::value("DB_SYSTEM_VALUE_VERTICA", "db.system", "vertica", Experimental),
    Entry::attribute("DB_SYSTEM_NAME", "db.system.name", Stable),
    Entry::value("DB_SYSTEM_NAME_VALUE_OTHER_SQL", "db.system.name", "other_sql", Experimental),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_SOFTWAREAG_ADABAS",
        "db.system.name",
        "softwareag.adabas",
        Experimental,
    ),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_ACTIAN_INGRES",
        "db.system.name",
        "actian.ingres",
        Experimental,
    ),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_AWS_DYNAMODB",
        "db.system.name",
        "aws.dynamodb",
        Experimental,
    ),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_AWS_REDSHIFT",
        "db.system.name",
        "aws.redshift",
        Experimental,
    ),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_AZURE_COSMOSDB",
        "db.system.name",
        "azure.cosmosdb",
        Experimental,
    ),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_INTERSYSTEMS_CACHE",
        "db.system.name",
        "intersystems.cache",
        Experimental,
    ),
    Entry::value("DB_SYSTEM_NAME_VALUE_CASSANDRA", "db.system.name", "cassandra", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_CLICKHOUSE", "db.system.name", "clickhouse", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_COCKROACHDB", "db.system.name", "cockroachdb", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_COUCHBASE", "db.system.name", "couchbase", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_COUCHDB", "db.system.name", "couchdb", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_DERBY", "db.system.name", "derby", Experimental),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_ELASTICSEARCH",
        "db.system.name",
        "elasticsearch",
        Experimental,
    ),
    Entry::value("DB_SYSTEM_NAME_VALUE_FIREBIRDSQL", "db.system.name", "firebirdsql", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_GCP_SPANNER", "db.system.name", "gcp.spanner", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_GEODE", "db.system.name", "geode", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_H2DATABASE", "db.system.name", "h2database", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_HBASE", "db.system.name", "hbase", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_HIVE", "db.system.name", "hive", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_HSQLDB", "db.system.name", "hsqldb", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_IBM_DB2", "db.system.name", "ibm.db2", Experimental),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_IBM_INFORMIX",
        "db.system.name",
        "ibm.informix",
        Experimental,
    ),
    Entry::value("DB_SYSTEM_NAME_VALUE_IBM_NETEZZA", "db.system.name", "ibm.netezza", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_INFLUXDB", "db.system.name", "influxdb", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_INSTANTDB", "db.system.name", "instantdb", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_MARIADB", "db.system.name", "mariadb", Stable),
    Entry::value("DB_SYSTEM_NAME_VALUE_MEMCACHED", "db.system.name", "memcached", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_MONGODB", "db.system.name", "mongodb", Experimental),
    Entry::value(
        "DB_SYSTEM_NAME_VALUE_MICROSOFT_SQL_SERVER",
        "db.system.name",
        "microsoft.sql_server",
        Stable,
    ),
    Entry::value("DB_SYSTEM_NAME_VALUE_MYSQL", "db.system.name", "mysql", Stable),
    Entry::value("DB_SYSTEM_NAME_VALUE_NEO4J", "db.system.name", "neo4j", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_OPENSEARCH", "db.system.name", "opensearch", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_ORACLE_DB", "db.system.name", "oracle.db", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_POSTGRESQL", "db.system.name", "postgresql", Stable),
    Entry::value("DB_SYSTEM_NAME_VALUE_REDIS", "db.system.name", "redis", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_SAP_HANA", "db.system.name", "sap.hana", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_SAP_MAXDB", "db.system.name", "sap.maxdb", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_SQLITE", "db.system.name", "sqlite", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_TERADATA", "db.system.name", "teradata", Experimental),
    Entry::value("DB_SYSTEM_NAME_VALUE_TRINO", "db.system.name", "trino", Experimental),
    Entry::attribute("DB_USER", "db.user", Experimental).deprecated(Obsoleted),
    Entry::attribute("ELASTICSEARCH_NODE_NAME", "elasticsearch.node.name", Experimental),
    Entry::attribute("POOL_NAME", "pool.name", Experimental)
        .deprecated(Renamed("db.client.connection.pool.name")),
    Entry::attribute("STATE", "state", Experimental)
        .deprecated(Renamed("db.client.connection.state")),
    Entry::value("STATE_VALUE_IDLE", "state", "idle", Experimental),
    Entry::value("STATE_VALUE_USED", "state", "used", Experimental),
];
