use std::env;

use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

/// Build the GraphQL schema and inject shared state into the context.
pub fn build_schema(state: AppState) -> Schema<QueryRoot, MutationRoot, EmptySubscription> {
    let introspection_enabled = env::var("GQL_INTROSPECTION")
        .map(|v| v == "true")
        .unwrap_or(false);

    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        // AppState is Clone; available in resolvers via ctx.data::<AppState>()
        .data(state)
        .limit_depth(15)
        .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
