// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `graphql` namespace.

use crate::registry::{Entry, Stability::*};

/// The GraphQL document being executed.
///
/// Type: `string`. Examples: `"query findBookById { bookById(id: ?) { name } }"`.
#[cfg(feature = "semconv_experimental")]
pub const GRAPHQL_DOCUMENT: &str = "graphql.document";

/// The name of the operation being executed.
///
/// Type: `string`. Examples: `"findBookById"`.
#[cfg(feature = "semconv_experimental")]
pub const GRAPHQL_OPERATION_NAME: &str = "graphql.operation.name";

/// The type of the operation being executed.
///
/// Type: `string`. Examples: `"query"`, `"mutation"`, `"subscription"`.
#[cfg(feature = "semconv_experimental")]
pub const GRAPHQL_OPERATION_TYPE: &str = "graphql.operation.type";

/// GraphQL query
#[cfg(feature = "semconv_experimental")]
pub const GRAPHQL_OPERATION_TYPE_VALUE_QUERY: &str = "query";

/// GraphQL mutation
#[cfg(feature = "semconv_experimental")]
pub const GRAPHQL_OPERATION_TYPE_VALUE_MUTATION: &str = "mutation";

/// GraphQL subscription
#[cfg(feature = "semconv_experimental")]
pub const GRAPHQL_OPERATION_TYPE_VALUE_SUBSCRIPTION: &str = "subscription";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GRAPHQL_OPERATION_TYPE`].
    GraphqlOperationType for GRAPHQL_OPERATION_TYPE {
        /// GraphQL query
        Query = "query",
        /// GraphQL mutation
        Mutation = "mutation",
        /// GraphQL subscription
        Subscription = "subscription",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("GRAPHQL_DOCUMENT", "graphql.document", Experimental),
    Entry::attribute("GRAPHQL_OPERATION_NAME", "graphql.operation.name", Experimental),
    Entry::attribute("GRAPHQL_OPERATION_TYPE", "graphql.operation.type", Experimental),
    Entry::value(
        "GRAPHQL_OPERATION_TYPE_VALUE_QUERY",
        "graphql.operation.type",
        "query",
        Experimental,
    ),
    Entry::value(
        "GRAPHQL_OPERATION_TYPE_VALUE_MUTATION",
        "graphql.operation.type",
        "mutation",
        Experimental,
    ),
    Entry::value(
        "GRAPHQL_OPERATION_TYPE_VALUE_SUBSCRIPTION",
        "graphql.operation.type",
        "subscription",
        Experimental,
    ),
];
