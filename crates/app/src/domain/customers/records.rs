//! Customer Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Customer id
pub type CustomerId = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
