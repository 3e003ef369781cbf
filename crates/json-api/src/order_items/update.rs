//! Update Order Item Handler (full)

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    order_items::{create::OrderItemPayload, get::OrderItemResponse},
    state::State,
};

/// Update Order Item Handler
///
/// Full update: every writable field must be supplied.
#[endpoint(
    tags("order-items"),
    summary = "Update Order Item",
    responses(
        (status_code = StatusCode::OK, description = "Order item updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::NOT_FOUND, description = "Order item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<OrderItemPayload>,
    depot: &mut Depot,
) -> Result<Json<OrderItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let updated = state
        .app
        .order_items
        .replace_order_item(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(order_item_id = %id, "updated order item");

    Ok(Json(updated.into()))
}
