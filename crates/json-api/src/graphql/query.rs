//! GraphQL query root and object types.

use async_graphql::{Context, Object, Result, SimpleObject};
use rust_decimal::Decimal;
use uuid::Uuid;

use orderdesk_app::{
    context::AppContext,
    domain::{ServiceError, customers::records::CustomerRecord, products::records::ProductRecord},
};

/// Customer as exposed to GraphQL clients.
#[derive(Debug, SimpleObject)]
#[graphql(name = "Customer")]
pub(crate) struct CustomerNode {
    id: Uuid,
    name: String,
    email: String,
    created_at: String,
    updated_at: String,
}

impl From<CustomerRecord> for CustomerNode {
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

/// Product as exposed to GraphQL clients.
#[derive(Debug, SimpleObject)]
#[graphql(name = "Product")]
pub(crate) struct ProductNode {
    id: Uuid,
    sku: String,
    name: String,
    unit_price: Decimal,
    stock_level: i32,
    created_at: String,
    updated_at: String,
}

impl From<ProductRecord> for ProductNode {
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

#[derive(Debug, Default)]
pub(crate) struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Customers whose name or email contains `q` (case-insensitive),
    /// optionally capped to `limit` rows. No `q` returns all.
    async fn customers(
        &self,
        ctx: &Context<'_>,
        q: Option<String>,
        limit: Option<i32>,
    ) -> Result<Vec<CustomerNode>> {
        let app = ctx.data::<AppContext>()?;

        let customers = app
            .customers
            .search_customers(q, clamp_limit(limit))
            .await
            .map_err(service_error)?;

        Ok(customers.into_iter().map(Into::into).collect())
    }

    /// The customer with the given id, or null.
    async fn customer(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<CustomerNode>> {
        let app = ctx.data::<AppContext>()?;

        match app.customers.get_customer(id.into()).await {
            Ok(customer) => Ok(Some(customer.into())),
            Err(ServiceError::NotFound) => Ok(None),
            Err(error) => Err(service_error(error)),
        }
    }

    /// Products whose name or sku contains `q` (case-insensitive),
    /// optionally capped to `limit` rows. No `q` returns all.
    async fn products(
        &self,
        ctx: &Context<'_>,
        q: Option<String>,
        limit: Option<i32>,
    ) -> Result<Vec<ProductNode>> {
        let app = ctx.data::<AppContext>()?;

        let products = app
            .products
            .search_products(q, clamp_limit(limit))
            .await
            .map_err(service_error)?;

        Ok(products.into_iter().map(Into::into).collect())
    }

    /// The product with the given id, or null.
    async fn product(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<ProductNode>> {
        let app = ctx.data::<AppContext>()?;

        match app.products.get_product(id.into()).await {
            Ok(product) => Ok(Some(product.into())),
            Err(ServiceError::NotFound) => Ok(None),
            Err(error) => Err(service_error(error)),
        }
    }
}

/// Non-positive limits behave like no limit, as in the original API.
fn clamp_limit(limit: Option<i32>) -> Option<u32> {
    limit.and_then(|value| u32::try_from(value).ok()).filter(|value| *value > 0)
}

fn service_error(error: ServiceError) -> async_graphql::Error {
    tracing::error!("graphql query failed: {error}");

    async_graphql::Error::new("query failed")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use orderdesk_app::domain::{
        customers::{MockCustomersService, records::CustomerId},
        products::{MockProductsService, records::ProductId},
    };

    use crate::{
        graphql::schema,
        test_helpers::{app_with_customers, app_with_products, make_customer, make_product},
    };

    #[tokio::test]
    async fn customers_query_forwards_q_and_limit() -> TestResult {
        let id = CustomerId::new();

        let mut customers = MockCustomersService::new();

        customers
            .expect_search_customers()
            .once()
            .withf(|q, limit| q.as_deref() == Some("zo") && *limit == Some(1))
            .return_once(move |_, _| Ok(vec![make_customer(id)]));

        let schema = schema(app_with_customers(customers));

        let response = schema
            .execute(r#"{ customers(q: "zo", limit: 1) { id name email } }"#)
            .await;

        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);

        let data = serde_json::to_value(&response.data)?;

        assert_eq!(data["customers"][0]["name"], "Zoe");
        assert_eq!(data["customers"][0]["email"], "zoe@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn customers_query_without_arguments_returns_all() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_search_customers()
            .once()
            .withf(|q, limit| q.is_none() && limit.is_none())
            .return_once(|_, _| Ok(vec![]));

        let schema = schema(app_with_customers(customers));

        let response = schema.execute("{ customers { id } }").await;

        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);

        Ok(())
    }

    #[tokio::test]
    async fn customer_query_resolves_missing_id_to_null() -> TestResult {
        let id = CustomerId::new();

        let mut customers = MockCustomersService::new();

        customers
            .expect_get_customer()
            .once()
            .return_once(|_| Err(orderdesk_app::domain::ServiceError::NotFound));

        let schema = schema(app_with_customers(customers));

        let response = schema
            .execute(format!(r#"{{ customer(id: "{id}") {{ id name }} }}"#))
            .await;

        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);

        let data = serde_json::to_value(&response.data)?;

        assert_eq!(data["customer"], serde_json::Value::Null);

        Ok(())
    }

    #[tokio::test]
    async fn products_query_selects_entity_fields() -> TestResult {
        let id = ProductId::new();

        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(|q, limit| q.as_deref() == Some("SKU") && *limit == Some(1))
            .return_once(move |_, _| Ok(vec![make_product(id)]));

        let schema = schema(app_with_products(products));

        let response = schema
            .execute(r#"{ products(q: "SKU", limit: 1) { id sku name unitPrice stockLevel } }"#)
            .await;

        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);

        let data = serde_json::to_value(&response.data)?;

        assert_eq!(data["products"][0]["sku"], "SKU123");
        assert_eq!(data["products"][0]["unitPrice"], "19.99");

        Ok(())
    }

    #[tokio::test]
    async fn negative_limit_is_treated_as_no_limit() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(|_, limit| limit.is_none())
            .return_once(|_, _| Ok(vec![]));

        let schema = schema(app_with_products(products));

        let response = schema.execute("{ products(limit: -1) { id } }").await;

        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);

        Ok(())
    }
}
