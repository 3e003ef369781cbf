//! Create Order Item Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::order_items::data::OrderItemDraft;

use crate::{errors::ApiError, extensions::*, order_items::get::OrderItemResponse, state::State};

/// Order item payload for create and update requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemPayload {
    /// The order this item belongs to
    pub order: Option<Uuid>,

    /// The product this item refers to
    pub product: Option<Uuid>,

    /// Number of units ordered (must be positive)
    pub quantity: Option<i32>,

    /// Unit price captured at order time
    pub unit_price: Option<Decimal>,
}

impl From<OrderItemPayload> for OrderItemDraft {
    fn from(payload: OrderItemPayload) -> Self {
        Self {
            order: payload.order.map(Into::into),
            product: payload.product.map(Into::into),
            quantity: payload.quantity,
            unit_price: payload.unit_price,
        }
    }
}

/// Create Order Item Handler
#[endpoint(
    tags("order-items"),
    summary = "Create Order Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Order item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<OrderItemPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .order_items
        .create_order_item(json.into_inner().into())
        .await?;

    res.add_header(LOCATION, format!("/api/order-items/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(order_item_id = %created.id, "created order item");

    Ok(Json(created.into()))
}
