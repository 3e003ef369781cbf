//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::products::data::ProductDraft;

use crate::{errors::ApiError, extensions::*, products::get::ProductResponse, state::State};

/// Product payload for create and update requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPayload {
    /// The product's unique stock keeping unit
    pub sku: Option<String>,

    /// The product's display name
    pub name: Option<String>,

    /// The current unit price
    pub unit_price: Option<Decimal>,

    /// Units currently in stock (defaults to 0)
    pub stock_level: Option<i32>,
}

impl From<ProductPayload> for ProductDraft {
    fn from(payload: ProductPayload) -> Self {
        Self {
            sku: payload.sku,
            name: payload.name,
            unit_price: payload.unit_price,
            stock_level: payload.stock_level,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await?;

    res.add_header(LOCATION, format!("/api/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %created.id, "created product");

    Ok(Json(created.into()))
}
