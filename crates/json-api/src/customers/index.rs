//! Customer Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{customers::get::CustomerResponse, errors::ApiError, extensions::*, state::State};

/// Customer Index Handler
///
/// Returns every customer as a bare JSON array.
#[endpoint(tags("customers"), summary = "List Customers")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customers = state.app.customers.list_customers().await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}
