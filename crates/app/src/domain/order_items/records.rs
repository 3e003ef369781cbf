//! Order Item Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{orders::records::OrderId, products::records::ProductId},
    uuids::TypedUuid,
};

/// Order item id
pub type OrderItemId = TypedUuid<OrderItemRecord>;

/// Order Item Record, with the referenced product's name and sku
/// denormalized. `unit_price` is captured at order time, independent of the
/// product's current price.
#[derive(Debug, Clone)]
pub struct OrderItemRecord {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
