//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::orders::data::OrderDraft;

use crate::{errors::ApiError, extensions::*, orders::get::OrderResponse, state::State};

/// Order payload for create and update requests. Enum and datetime fields
/// stay strings so a bad value yields a field-level error, not a parse
/// failure for the whole body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderPayload {
    /// The order's unique human-facing number
    pub number: Option<String>,

    /// When the order was placed (defaults to now)
    pub date_and_time: Option<String>,

    /// The customer who placed the order
    pub customer: Option<Uuid>,

    /// Carrier: standard, express, tnt, or startrak
    pub shipping_method: Option<String>,

    /// Shipping cost
    pub shipping_cost: Option<Decimal>,

    /// Lifecycle state: pending, completed, or cancelled (defaults to pending)
    pub status: Option<String>,
}

impl From<OrderPayload> for OrderDraft {
    fn from(payload: OrderPayload) -> Self {
        Self {
            number: payload.number,
            date_and_time: payload.date_and_time,
            customer: payload.customer.map(Into::into),
            shipping_method: payload.shipping_method,
            shipping_cost: payload.shipping_cost,
            status: payload.status,
        }
    }
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<OrderPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .orders
        .create_order(json.into_inner().into())
        .await?;

    res.add_header(LOCATION, format!("/api/orders/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(order_id = %created.id, number = %created.number, "created order");

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orderdesk_app::{
        domain::{
            ServiceError,
            customers::records::CustomerId,
            orders::{MockOrdersService, records::OrderId},
        },
        validate::{BLANK, FieldErrors},
    };

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    #[tokio::test]
    async fn test_create_order_returns_201_with_the_created_entity() -> TestResult {
        let id = OrderId::new();
        let customer = CustomerId::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(move |draft| {
                *draft
                    == OrderDraft {
                        number: Some("ORD456".to_owned()),
                        date_and_time: None,
                        customer: Some(customer),
                        shipping_method: Some("standard".to_owned()),
                        shipping_cost: Some(Decimal::new(1000, 2)),
                        status: Some("pending".to_owned()),
                    }
            })
            .return_once(move |_| {
                let mut order = make_order(id);
                order.number = "ORD456".to_owned();
                Ok(order)
            });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "number": "ORD456",
                "customer": customer.into_uuid(),
                "shipping_method": "standard",
                "shipping_cost": 10.00,
                "status": "pending"
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.number, "ORD456");
        assert!(body.items.is_empty(), "a fresh order has no items");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_empty_number_returns_400_keyed_to_number() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().once().return_once(|_| {
            Err(ServiceError::Validation(FieldErrors::single("number", BLANK)))
        });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "number": "",
                "customer": CustomerId::new().into_uuid(),
                "shipping_method": "express",
                "shipping_cost": 5.00
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert!(body.get("number").is_some(), "error body should key number: {body}");

        Ok(())
    }
}
