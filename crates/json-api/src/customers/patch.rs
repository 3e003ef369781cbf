//! Patch Customer Handler (partial)

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    customers::{create::CustomerPayload, get::CustomerResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Patch Customer Handler
///
/// Partial update: only the supplied fields change.
#[endpoint(
    tags("customers"),
    summary = "Patch Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<CustomerPayload>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let updated = state
        .app
        .customers
        .patch_customer(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(customer_id = %id, "patched customer");

    Ok(Json(updated.into()))
}
