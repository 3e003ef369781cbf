//! Create Customer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::customers::data::CustomerDraft;

use crate::{customers::get::CustomerResponse, errors::ApiError, extensions::*, state::State};

/// Customer payload for create and update requests. Presence is validated
/// by the domain layer, so every field is optional on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerPayload {
    /// The customer's display name
    pub name: Option<String>,

    /// The customer's unique email address
    pub email: Option<String>,
}

impl From<CustomerPayload> for CustomerDraft {
    fn from(payload: CustomerPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
        }
    }
}

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .customers
        .create_customer(json.into_inner().into())
        .await?;

    res.add_header(LOCATION, format!("/api/customers/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(customer_id = %created.id, "created customer");

    Ok(Json(created.into()))
}
