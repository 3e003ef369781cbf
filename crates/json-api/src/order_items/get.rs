//! Get Order Item Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::order_items::records::OrderItemRecord;

use crate::{errors::ApiError, extensions::*, state::State};

/// Order Item Response. `product_name` and `product_sku` are denormalized
/// from the referenced product at serialization time.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the order item
    pub id: Uuid,

    /// The order this item belongs to
    pub order: Uuid,

    /// The product this item refers to
    pub product: Uuid,

    /// The referenced product's name (read-only)
    pub product_name: String,

    /// The referenced product's sku (read-only)
    pub product_sku: String,

    /// Number of units ordered
    pub quantity: i32,

    /// Unit price captured at order time
    pub unit_price: Decimal,

    /// When the item was created (server-set)
    pub created_at: String,

    /// When the item was last updated (server-set)
    pub updated_at: String,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            id: item.id.into(),
            order: item.order_id.into(),
            product: item.product_id.into(),
            product_name: item.product_name,
            product_sku: item.product_sku,
            quantity: item.quantity,
            unit_price: item.unit_price,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Get Order Item Handler
///
/// Returns a single order item.
#[endpoint(tags("order-items"), summary = "Retrieve Order Item")]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .order_items
        .get_order_item(id.into_inner().into())
        .await?;

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use orderdesk_app::domain::{
        ServiceError,
        order_items::{MockOrderItemsService, records::OrderItemId},
        orders::records::OrderId,
        products::records::ProductId,
    };

    use crate::test_helpers::{make_order_item, order_items_service};

    use super::*;

    fn make_service(items: MockOrderItemsService) -> Service {
        order_items_service(items, Router::with_path("order-items/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_the_item_with_denormalized_product_fields() -> TestResult {
        let id = OrderItemId::new();
        let order = OrderId::new();
        let product = ProductId::new();

        let mut items = MockOrderItemsService::new();

        items
            .expect_get_order_item()
            .once()
            .withf(move |item| *item == id)
            .return_once(move |_| Ok(make_order_item(id, order, product)));

        let mut res = TestClient::get(format!("http://example.com/order-items/{id}"))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderItemResponse = res.take_json().await?;

        assert_eq!(body.product, product.into_uuid());
        assert_eq!(body.product_name, "Test Product");
        assert_eq!(body.product_sku, "SKU123");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() -> TestResult {
        let mut items = MockOrderItemsService::new();

        items
            .expect_get_order_item()
            .once()
            .return_once(|_| Err(ServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/order-items/{}", OrderItemId::new()))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
