//! Product input data.

use rust_decimal::Decimal;

use crate::validate::{FieldErrors, NEGATIVE, check_amount, require_amount, require_string};

/// Raw product input, straight off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub unit_price: Option<Decimal>,
    pub stock_level: Option<i32>,
}

/// Validated data for a create or full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub unit_price: Decimal,
    pub stock_level: i32,
}

/// Validated data for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub unit_price: Option<Decimal>,
    pub stock_level: Option<i32>,
}

impl From<NewProduct> for ProductPatch {
    fn from(new: NewProduct) -> Self {
        Self {
            sku: Some(new.sku),
            name: Some(new.name),
            unit_price: Some(new.unit_price),
            stock_level: Some(new.stock_level),
        }
    }
}

impl ProductDraft {
    /// Validate all writable fields for a create or full update.
    /// `stock_level` defaults to 0 when omitted.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for missing, blank, or negative fields.
    pub fn into_new(self) -> Result<NewProduct, FieldErrors> {
        let mut errors = FieldErrors::new();

        let sku = require_string(&mut errors, "sku", self.sku);
        let name = require_string(&mut errors, "name", self.name);
        let unit_price = require_amount(&mut errors, "unit_price", self.unit_price);
        let stock_level = check_stock_level(&mut errors, self.stock_level.unwrap_or(0));

        match (sku, name, unit_price, stock_level) {
            (Some(sku), Some(name), Some(unit_price), Some(stock_level)) => {
                errors.into_result(NewProduct {
                    sku,
                    name,
                    unit_price,
                    stock_level,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate only the supplied fields for a partial update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for blank or negative supplied fields.
    pub fn into_patch(self) -> Result<ProductPatch, FieldErrors> {
        let mut errors = FieldErrors::new();

        let patch = ProductPatch {
            sku: self
                .sku
                .and_then(|sku| require_string(&mut errors, "sku", Some(sku))),
            name: self
                .name
                .and_then(|name| require_string(&mut errors, "name", Some(name))),
            unit_price: self
                .unit_price
                .and_then(|price| check_amount(&mut errors, "unit_price", price)),
            stock_level: self
                .stock_level
                .and_then(|level| check_stock_level(&mut errors, level)),
        };

        errors.into_result(patch)
    }
}

fn check_stock_level(errors: &mut FieldErrors, level: i32) -> Option<i32> {
    if level < 0 {
        errors.push("stock_level", NEGATIVE);
        None
    } else {
        Some(level)
    }
}
