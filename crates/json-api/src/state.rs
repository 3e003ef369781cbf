//! State

use std::sync::Arc;

use orderdesk_app::context::AppContext;

use crate::graphql::{self, OrderdeskSchema};

/// Shared per-request state: the domain services and the GraphQL schema
/// built over them.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) schema: OrderdeskSchema,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        let schema = graphql::schema(app.clone());

        Self { app, schema }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
