//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    customers::records::CustomerId,
    orders::{
        data::{NewOrder, OrderPatch},
        records::{OrderId, OrderRecord},
    },
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const UPDATE_ORDER_SQL: &str = include_str!("sql/update_order.sql");
const DELETE_ORDER_ITEMS_SQL: &str = include_str!("sql/delete_order_items.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");
const CUSTOMER_EXISTS_SQL: &str = include_str!("sql/customer_exists.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        new: &NewOrder,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(&new.number)
            .bind(SqlxTimestamp::from(new.date_and_time))
            .bind(new.customer.into_uuid())
            .bind(new.shipping_method.as_str())
            .bind(new.shipping_cost)
            .bind(new.status.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        patch: &OrderPatch,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(patch.number.as_deref())
            .bind(patch.date_and_time.map(SqlxTimestamp::from))
            .bind(patch.customer.map(CustomerId::into_uuid))
            .bind(patch.shipping_method.map(|method| method.as_str()))
            .bind(patch.shipping_cost)
            .bind(patch.status.map(|status| status.as_str()))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Explicit cascade: the order's items, then the order.
    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<u64, sqlx::Error> {
        query(DELETE_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?;

        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn customer_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(CUSTOMER_EXISTS_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_uuid(row.try_get("id")?),
            number: row.try_get("number")?,
            date_and_time: row.try_get::<SqlxTimestamp, _>("date_and_time")?.to_jiff(),
            customer_id: CustomerId::from_uuid(row.try_get::<Uuid, _>("customer_id")?),
            customer_name: row.try_get("customer_name")?,
            shipping_method: parse_column(row, "shipping_method")?,
            shipping_cost: row.try_get("shipping_cost")?,
            status: parse_column(row, "status")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

fn parse_column<T>(row: &PgRow, col: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.try_get::<String, _>(col)?
        .parse()
        .map_err(|e: T::Err| sqlx::Error::ColumnDecode {
            index: col.to_owned(),
            source: Box::new(e),
        })
}
