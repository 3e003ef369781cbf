//! Get Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::customers::records::CustomerRecord;

use crate::{errors::ApiError, extensions::*, state::State};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// The unique identifier of the customer
    pub id: Uuid,

    /// The customer's display name
    pub name: String,

    /// The customer's unique email address
    pub email: String,

    /// When the customer was created (server-set)
    pub created_at: String,

    /// When the customer was last updated (server-set)
    pub updated_at: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            id: customer.id.into(),
            name: customer.name,
            email: customer.email,
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
        }
    }
}

/// Get Customer Handler
///
/// Returns a single customer.
#[endpoint(tags("customers"), summary = "Retrieve Customer")]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = state
        .app
        .customers
        .get_customer(id.into_inner().into())
        .await?;

    Ok(Json(customer.into()))
}
