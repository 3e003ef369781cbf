//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, orders::get::OrderResponse, state::State};

/// Order Index Handler
///
/// Returns every order, items nested, as a bare JSON array.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state.app.orders.list_orders().await?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
