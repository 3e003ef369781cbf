//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        customers::records::CustomerId,
        order_items::records::OrderItemRecord,
        orders::enums::{OrderStatus, ShippingMethod},
    },
    uuids::TypedUuid,
};

/// Order id
pub type OrderId = TypedUuid<OrderRecord>;

/// Order Record, with the owning customer's name denormalized and the
/// order's items nested for serialization.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: OrderId,
    pub number: String,
    pub date_and_time: Timestamp,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub shipping_method: ShippingMethod,
    pub shipping_cost: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
