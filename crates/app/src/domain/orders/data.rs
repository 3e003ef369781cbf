//! Order input data.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        customers::records::CustomerId,
        orders::enums::{OrderStatus, ShippingMethod},
    },
    validate::{BAD_DATETIME, FieldErrors, REQUIRED, check_amount, require_amount, require_string},
};

/// Raw order input, straight off the wire. Enum and datetime fields arrive
/// as strings so a bad value fails field validation, not body parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub number: Option<String>,
    pub date_and_time: Option<String>,
    pub customer: Option<CustomerId>,
    pub shipping_method: Option<String>,
    pub shipping_cost: Option<Decimal>,
    pub status: Option<String>,
}

/// Validated data for a create or full update. Fields with server defaults
/// (`date_and_time`, `status`) are resolved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub number: String,
    pub date_and_time: Timestamp,
    pub customer: CustomerId,
    pub shipping_method: ShippingMethod,
    pub shipping_cost: Decimal,
    pub status: OrderStatus,
}

/// Validated data for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderPatch {
    pub number: Option<String>,
    pub date_and_time: Option<Timestamp>,
    pub customer: Option<CustomerId>,
    pub shipping_method: Option<ShippingMethod>,
    pub shipping_cost: Option<Decimal>,
    pub status: Option<OrderStatus>,
}

impl From<NewOrder> for OrderPatch {
    fn from(new: NewOrder) -> Self {
        Self {
            number: Some(new.number),
            date_and_time: Some(new.date_and_time),
            customer: Some(new.customer),
            shipping_method: Some(new.shipping_method),
            shipping_cost: Some(new.shipping_cost),
            status: Some(new.status),
        }
    }
}

impl OrderDraft {
    /// Validate all writable fields for a create or full update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for missing, blank, malformed, or
    /// out-of-choice fields.
    pub fn into_new(self) -> Result<NewOrder, FieldErrors> {
        let mut errors = FieldErrors::new();

        let number = require_string(&mut errors, "number", self.number);

        let date_and_time = match self.date_and_time {
            None => Some(Timestamp::now()),
            Some(value) => parse_datetime(&mut errors, &value),
        };

        let customer = self.customer;
        if customer.is_none() {
            errors.push("customer", REQUIRED);
        }

        let shipping_method = match self.shipping_method {
            None => {
                errors.push("shipping_method", REQUIRED);
                None
            }
            Some(value) => parse_choice::<ShippingMethod>(&mut errors, "shipping_method", &value),
        };

        let shipping_cost = require_amount(&mut errors, "shipping_cost", self.shipping_cost);

        let status = match self.status {
            None => Some(OrderStatus::default()),
            Some(value) => parse_choice::<OrderStatus>(&mut errors, "status", &value),
        };

        match (number, date_and_time, customer, shipping_method, shipping_cost, status) {
            (
                Some(number),
                Some(date_and_time),
                Some(customer),
                Some(shipping_method),
                Some(shipping_cost),
                Some(status),
            ) => errors.into_result(NewOrder {
                number,
                date_and_time,
                customer,
                shipping_method,
                shipping_cost,
                status,
            }),
            _ => Err(errors),
        }
    }

    /// Validate only the supplied fields for a partial update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for blank, malformed, or out-of-choice
    /// supplied fields.
    pub fn into_patch(self) -> Result<OrderPatch, FieldErrors> {
        let mut errors = FieldErrors::new();

        let patch = OrderPatch {
            number: self
                .number
                .and_then(|number| require_string(&mut errors, "number", Some(number))),
            date_and_time: self
                .date_and_time
                .and_then(|value| parse_datetime(&mut errors, &value)),
            customer: self.customer,
            shipping_method: self
                .shipping_method
                .and_then(|value| parse_choice(&mut errors, "shipping_method", &value)),
            shipping_cost: self
                .shipping_cost
                .and_then(|cost| check_amount(&mut errors, "shipping_cost", cost)),
            status: self
                .status
                .and_then(|value| parse_choice(&mut errors, "status", &value)),
        };

        errors.into_result(patch)
    }
}

fn parse_datetime(errors: &mut FieldErrors, value: &str) -> Option<Timestamp> {
    match value.parse::<Timestamp>() {
        Ok(timestamp) => Some(timestamp),
        Err(_) => {
            errors.push("date_and_time", BAD_DATETIME);
            None
        }
    }
}

fn parse_choice<T>(errors: &mut FieldErrors, field: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(choice) => Some(choice),
        Err(error) => {
            errors.push(field, error.to_string());
            None
        }
    }
}
