//! Patch Order Handler (partial)

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{create::OrderPayload, get::OrderResponse},
    state::State,
};

/// Patch Order Handler
///
/// Partial update: only the supplied fields change.
#[endpoint(
    tags("orders"),
    summary = "Patch Order",
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<OrderPayload>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let updated = state
        .app
        .orders
        .patch_order(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(order_id = %id, "patched order");

    Ok(Json(updated.into()))
}
