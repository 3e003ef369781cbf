//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product id
pub type ProductId = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub unit_price: Decimal,
    pub stock_level: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
