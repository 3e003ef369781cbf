//! App Router

use std::sync::Arc;

use salvo::{Router, affix_state::inject, catch_panic::CatchPanic, trailing_slash::remove_slash};

use crate::{customers, graphql, healthcheck, order_items, orders, products, state::State};

/// The full application router: REST resources under `/api`, the GraphQL
/// endpoint at `/graphql`, and the healthcheck.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(customers::routes())
                .push(products::routes())
                .push(orders::routes())
                .push(order_items::routes()),
        )
        .push(graphql::routes())
}
