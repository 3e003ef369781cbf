//! Update Product Handler (full)

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{create::ProductPayload, get::ProductResponse},
    state::State,
};

/// Update Product Handler
///
/// Full update: every writable field must be supplied.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let updated = state
        .app
        .products
        .replace_product(id.into(), json.into_inner().into())
        .await?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orderdesk_app::domain::products::{
        MockProductsService, data::ProductDraft, records::ProductId,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_put_replaces_all_writable_fields() -> TestResult {
        let id = ProductId::new();

        let mut products = MockProductsService::new();

        products
            .expect_replace_product()
            .once()
            .withf(move |product, draft| {
                *product == id
                    && *draft
                        == ProductDraft {
                            sku: Some("SKU1234".to_owned()),
                            name: Some("Updated Product".to_owned()),
                            unit_price: Some(Decimal::new(2500, 2)),
                            stock_level: None,
                        }
            })
            .return_once(move |_, _| {
                let mut updated = make_product(id);
                updated.name = "Updated Product".to_owned();
                Ok(updated)
            });

        let mut res = TestClient::put(format!("http://example.com/products/{id}"))
            .json(&json!({ "sku": "SKU1234", "name": "Updated Product", "unit_price": 25.00 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.name, "Updated Product");

        Ok(())
    }
}
