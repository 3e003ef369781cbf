//! Customers resource.

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod patch;
pub(crate) mod update;

use salvo::Router;

pub(crate) fn routes() -> Router {
    Router::with_path("customers")
        .get(index::handler)
        .post(create::handler)
        .push(
            Router::with_path("{id}")
                .get(get::handler)
                .put(update::handler)
                .patch(patch::handler)
                .delete(delete::handler),
        )
}
