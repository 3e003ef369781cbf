//! Update Order Handler (full)

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

/// Update Order Handler
///
/// Full update: every writable field must be supplied. Items are managed
/// through the order-items endpoint, never replaced here.
#[endpoint(
    tags("orders"),
    summary = "Update Order",
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
        .replace_order(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(order_id = %id, "updated order");

    Ok(Json(updated.into()))
}
