//! Order Item Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, order_items::get::OrderItemResponse, state::State};

/// Order Item Index Handler
///
/// Returns every order item as a bare JSON array.
#[endpoint(tags("order-items"), summary = "List Order Items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state.app.order_items.list_order_items().await?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
