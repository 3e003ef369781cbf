//! Patch Product Handler (partial)

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{create::ProductPayload, get::ProductResponse},
    state::State,
};

/// Patch Product Handler
///
/// Partial update: only the supplied fields change.
#[endpoint(
    tags("products"),
    summary = "Patch Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let updated = state
        .app
        .products
        .patch_product(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(product_id = %id, "patched product");

    Ok(Json(updated.into()))
}
