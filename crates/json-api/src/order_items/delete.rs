//! Delete Order Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{errors::ApiError, extensions::*, state::State};

/// Delete Order Item Handler
#[endpoint(
    tags("order-items"),
    summary = "Delete Order Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Order item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(id: PathParam<Uuid>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    state.app.order_items.delete_order_item(id.into()).await?;

    tracing::info!(order_item_id = %id, "deleted order item");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use orderdesk_app::domain::{
        ServiceError,
        order_items::{MockOrderItemsService, records::OrderItemId},
    };

    use crate::test_helpers::order_items_service;

    use super::*;

    fn make_service(items: MockOrderItemsService) -> Service {
        order_items_service(items, Router::with_path("order-items/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_item_returns_204() -> TestResult {
        let id = OrderItemId::new();

        let mut items = MockOrderItemsService::new();

        items
            .expect_delete_order_item()
            .once()
            .withf(move |item| *item == id)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/order-items/{id}"))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_item_returns_404() -> TestResult {
        let mut items = MockOrderItemsService::new();

        items
            .expect_delete_order_item()
            .once()
            .return_once(|_| Err(ServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/order-items/{}", OrderItemId::new()))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
