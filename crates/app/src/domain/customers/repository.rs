//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::customers::{
    data::{CustomerPatch, NewCustomer},
    records::{CustomerId, CustomerRecord},
};

const SEARCH_CUSTOMERS_SQL: &str = include_str!("sql/search_customers.sql");
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const DELETE_CUSTOMER_ORDER_ITEMS_SQL: &str = include_str!("sql/delete_customer_order_items.sql");
const DELETE_CUSTOMER_ORDERS_SQL: &str = include_str!("sql/delete_customer_orders.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn search_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        q: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(SEARCH_CUSTOMERS_SQL)
            .bind(q)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(GET_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        new: &NewCustomer,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(CREATE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .bind(&new.name)
            .bind(&new.email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        patch: &CustomerPatch,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(UPDATE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .bind(patch.name.as_deref())
            .bind(patch.email.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    /// Explicit cascade: order items of the customer's orders, then the
    /// orders, then the customer, all inside the caller's transaction.
    pub(crate) async fn delete_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<u64, sqlx::Error> {
        query(DELETE_CUSTOMER_ORDER_ITEMS_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?;

        query(DELETE_CUSTOMER_ORDERS_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?;

        let rows_affected = query(DELETE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CustomerId::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
