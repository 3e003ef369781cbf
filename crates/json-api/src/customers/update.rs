//! Update Customer Handler (full)

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

/// Update Customer Handler
///
/// Full update: every writable field must be supplied.
#[endpoint(
    tags("customers"),
    summary = "Update Customer",
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
        .replace_customer(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(customer_id = %id, "updated customer");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orderdesk_app::{
        domain::{
            ServiceError,
            customers::{MockCustomersService, data::CustomerDraft, records::CustomerId},
        },
        validate::{FieldErrors, REQUIRED},
    };

    use crate::test_helpers::{customers_service, make_customer};

    use super::*;

    fn make_service(customers: MockCustomersService) -> Service {
        customers_service(customers, Router::with_path("customers/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_put_replaces_all_writable_fields() -> TestResult {
        let id = CustomerId::new();

        let mut customers = MockCustomersService::new();

        customers
            .expect_replace_customer()
            .once()
            .withf(move |customer, draft| {
                *customer == id
                    && *draft
                        == CustomerDraft {
                            name: Some("Zoe New".to_owned()),
                            email: Some("zoe.new@example.com".to_owned()),
                        }
            })
            .return_once(move |_, _| {
                let mut updated = make_customer(id);
                updated.name = "Zoe New".to_owned();
                Ok(updated)
            });

        let mut res = TestClient::put(format!("http://example.com/customers/{id}"))
            .json(&json!({ "name": "Zoe New", "email": "zoe.new@example.com" }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CustomerResponse = res.take_json().await?;

        assert_eq!(body.name, "Zoe New");

        Ok(())
    }

    #[tokio::test]
    async fn test_put_missing_required_field_returns_400() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_replace_customer()
            .once()
            .return_once(|_, _| {
                Err(ServiceError::Validation(FieldErrors::single("email", REQUIRED)))
            });

        let mut res = TestClient::put(format!("http://example.com/customers/{}", CustomerId::new()))
            .json(&json!({ "name": "Zoe New" }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body, json!({ "email": [REQUIRED] }));

        Ok(())
    }

    #[tokio::test]
    async fn test_put_missing_customer_returns_404() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_replace_customer()
            .once()
            .return_once(|_, _| Err(ServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/customers/{}", CustomerId::new()))
            .json(&json!({ "name": "Zoe", "email": "zoe@example.com" }))
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
