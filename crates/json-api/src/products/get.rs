//! Get Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::products::records::ProductRecord;

use crate::{errors::ApiError, extensions::*, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The product's unique stock keeping unit
    pub sku: String,

    /// The product's display name
    pub name: String,

    /// The current unit price
    pub unit_price: Decimal,

    /// Units currently in stock
    pub stock_level: i32,

    /// When the product was created (server-set)
    pub created_at: String,

    /// When the product was last updated (server-set)
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into(),
            sku: product.sku,
            name: product.name,
            unit_price: product.unit_price,
            stock_level: product.stock_level,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(tags("products"), summary = "Retrieve Product")]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(id.into_inner().into())
        .await?;

    Ok(Json(product.into()))
}
