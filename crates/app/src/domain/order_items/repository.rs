//! Order Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    order_items::{
        data::{NewOrderItem, OrderItemPatch},
        records::{OrderItemId, OrderItemRecord},
    },
    orders::records::OrderId,
    products::records::ProductId,
};

const LIST_ORDER_ITEMS_SQL: &str = include_str!("sql/list_order_items.sql");
const GET_ORDER_ITEM_SQL: &str = include_str!("sql/get_order_item.sql");
const ITEMS_FOR_ORDERS_SQL: &str = include_str!("sql/items_for_orders.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const UPDATE_ORDER_ITEM_SQL: &str = include_str!("sql/update_order_item.sql");
const DELETE_ORDER_ITEM_SQL: &str = include_str!("sql/delete_order_item.sql");
const ORDER_EXISTS_SQL: &str = include_str!("sql/order_exists.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(LIST_ORDER_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemId,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Items belonging to any of the given orders, used to nest items into
    /// order representations with one query.
    pub(crate) async fn items_for_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[Uuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(ITEMS_FOR_ORDERS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemId,
        new: &NewOrderItem,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_ORDER_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(new.order.into_uuid())
            .bind(new.product.into_uuid())
            .bind(new.quantity)
            .bind(new.unit_price)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn update_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemId,
        patch: &OrderItemPatch,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(patch.order.map(OrderId::into_uuid))
            .bind(patch.product.map(ProductId::into_uuid))
            .bind(patch.quantity)
            .bind(patch.unit_price)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_ITEM_SQL)
            .bind(item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn order_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(ORDER_EXISTS_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn product_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PRODUCT_EXISTS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderItemId::from_uuid(row.try_get("id")?),
            order_id: OrderId::from_uuid(row.try_get::<Uuid, _>("order_id")?),
            product_id: ProductId::from_uuid(row.try_get::<Uuid, _>("product_id")?),
            product_name: row.try_get("product_name")?,
            product_sku: row.try_get("product_sku")?,
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
