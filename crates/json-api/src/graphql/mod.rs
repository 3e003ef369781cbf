//! Read-only GraphQL query layer over the same domain services as REST.

pub(crate) mod handlers;
pub(crate) mod query;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use salvo::Router;

use orderdesk_app::context::AppContext;

use crate::graphql::query::QueryRoot;

pub(crate) type OrderdeskSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the domain services injected as context data.
pub(crate) fn schema(app: AppContext) -> OrderdeskSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(app)
        .finish()
}

pub(crate) fn routes() -> Router {
    Router::with_path("graphql")
        .get(handlers::graphiql)
        .post(handlers::execute)
}
