//! Order item input data.

use rust_decimal::Decimal;

use crate::{
    domain::{orders::records::OrderId, products::records::ProductId},
    validate::{FieldErrors, NOT_POSITIVE, REQUIRED, check_amount, require_amount},
};

/// Raw order item input, straight off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItemDraft {
    pub order: Option<OrderId>,
    pub product: Option<ProductId>,
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

/// Validated data for a create or full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub order: OrderId,
    pub product: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Validated data for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItemPatch {
    pub order: Option<OrderId>,
    pub product: Option<ProductId>,
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

impl From<NewOrderItem> for OrderItemPatch {
    fn from(new: NewOrderItem) -> Self {
        Self {
            order: Some(new.order),
            product: Some(new.product),
            quantity: Some(new.quantity),
            unit_price: Some(new.unit_price),
        }
    }
}

impl OrderItemDraft {
    /// Validate all writable fields for a create or full update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for missing or out-of-range fields.
    pub fn into_new(self) -> Result<NewOrderItem, FieldErrors> {
        let mut errors = FieldErrors::new();

        let order = self.order;
        if order.is_none() {
            errors.push("order", REQUIRED);
        }

        let product = self.product;
        if product.is_none() {
            errors.push("product", REQUIRED);
        }

        let quantity = match self.quantity {
            None => {
                errors.push("quantity", REQUIRED);
                None
            }
            Some(quantity) => check_quantity(&mut errors, quantity),
        };

        let unit_price = require_amount(&mut errors, "unit_price", self.unit_price);

        match (order, product, quantity, unit_price) {
            (Some(order), Some(product), Some(quantity), Some(unit_price)) => {
                errors.into_result(NewOrderItem {
                    order,
                    product,
                    quantity,
                    unit_price,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate only the supplied fields for a partial update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for out-of-range supplied fields.
    pub fn into_patch(self) -> Result<OrderItemPatch, FieldErrors> {
        let mut errors = FieldErrors::new();

        let patch = OrderItemPatch {
            order: self.order,
            product: self.product,
            quantity: self
                .quantity
                .and_then(|quantity| check_quantity(&mut errors, quantity)),
            unit_price: self
                .unit_price
                .and_then(|price| check_amount(&mut errors, "unit_price", price)),
        };

        errors.into_result(patch)
    }
}

fn check_quantity(errors: &mut FieldErrors, quantity: i32) -> Option<i32> {
    if quantity <= 0 {
        errors.push("quantity", NOT_POSITIVE);
        None
    } else {
        Some(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> OrderItemDraft {
        OrderItemDraft {
            order: Some(OrderId::new()),
            product: Some(ProductId::new()),
            quantity: Some(2),
            unit_price: Some(Decimal::new(1999, 2)),
        }
    }

    #[test]
    fn full_draft_validates() {
        let new = valid_draft().into_new().expect("valid draft");

        assert_eq!(new.quantity, 2);
        assert_eq!(new.unit_price, Decimal::new(1999, 2));
    }

    #[test]
    fn non_positive_quantity_is_keyed_to_quantity() {
        for quantity in [0, -1] {
            let mut draft = valid_draft();

            draft.quantity = Some(quantity);

            let errors = draft.into_new().expect_err("bad quantity");

            assert!(errors.contains("quantity"), "quantity {quantity} should be rejected");
        }
    }

    #[test]
    fn missing_references_are_required() {
        let errors = OrderItemDraft::default().into_new().expect_err("empty draft");

        assert!(errors.contains("order"));
        assert!(errors.contains("product"));
        assert!(errors.contains("quantity"));
        assert!(errors.contains("unit_price"));
    }

    #[test]
    fn patch_validates_only_supplied_fields() {
        let patch = OrderItemDraft {
            quantity: Some(4),
            ..OrderItemDraft::default()
        }
        .into_patch()
        .expect("valid patch");

        assert_eq!(patch.quantity, Some(4));
        assert!(patch.order.is_none());
        assert!(patch.unit_price.is_none());
    }

    #[test]
    fn patch_rejects_non_positive_quantity() {
        let errors = OrderItemDraft {
            quantity: Some(-1),
            ..OrderItemDraft::default()
        }
        .into_patch()
        .expect_err("bad quantity");

        assert!(errors.contains("quantity"));
    }
}
