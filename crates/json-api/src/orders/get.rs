//! Get Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::orders::records::OrderRecord;

use crate::{
    errors::ApiError, extensions::*, order_items::get::OrderItemResponse, state::State,
};

/// Order Response. `customer_name` is denormalized from the referenced
/// customer and `items` nests the order's items; both are read-only here,
/// items are written through their own endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub id: Uuid,

    /// The order's unique human-facing number
    pub number: String,

    /// When the order was placed
    pub date_and_time: String,

    /// The customer who placed the order
    pub customer: Uuid,

    /// The referenced customer's name (read-only)
    pub customer_name: String,

    /// Carrier used to ship the order
    pub shipping_method: String,

    /// Shipping cost
    pub shipping_cost: Decimal,

    /// Order lifecycle state
    pub status: String,

    /// The order's items (read-only)
    pub items: Vec<OrderItemResponse>,

    /// When the order was created (server-set)
    pub created_at: String,

    /// When the order was last updated (server-set)
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.id.into(),
            number: order.number,
            date_and_time: order.date_and_time.to_string(),
            customer: order.customer_id.into(),
            customer_name: order.customer_name,
            shipping_method: order.shipping_method.to_string(),
            shipping_cost: order.shipping_cost,
            status: order.status.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns a single order with its items nested.
#[endpoint(tags("orders"), summary = "Retrieve Order")]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state.app.orders.get_order(id.into_inner().into()).await?;

    Ok(Json(order.into()))
}
