//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::error::{DatabaseError, ErrorKind};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        errors::{ServiceError, missing_reference},
        order_items::{records::OrderItemRecord, repository::PgOrderItemsRepository},
        orders::{
            data::{NewOrder, OrderDraft, OrderPatch},
            records::{OrderId, OrderRecord},
            repository::PgOrdersRepository,
        },
    },
    validate::{FieldErrors, NOT_UNIQUE},
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }

    async fn apply_update(&self, order: OrderId, patch: &OrderPatch) -> Result<OrderRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(customer) = patch.customer {
            if !self.orders_repository.customer_exists(&mut tx, customer).await? {
                return Err(missing_reference("customer"));
            }
        }

        let rows_affected = self
            .orders_repository
            .update_order(&mut tx, order, patch)
            .await
            .map_err(map_write_error)?;

        if rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        let mut updated = self.orders_repository.get_order(&mut tx, order).await?;

        updated.items = self
            .items_repository
            .items_for_orders(&mut tx, &[order.into_uuid()])
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;

        let ids: Vec<Uuid> = orders.iter().map(|order| order.id.into_uuid()).collect();

        let items = self.items_repository.items_for_orders(&mut tx, &ids).await?;

        tx.commit().await?;

        let mut by_order: FxHashMap<OrderId, Vec<OrderItemRecord>> = FxHashMap::default();

        for item in items {
            by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|mut order| {
                order.items = by_order.remove(&order.id).unwrap_or_default();
                order
            })
            .collect())
    }

    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.orders_repository.get_order(&mut tx, order).await?;

        record.items = self
            .items_repository
            .items_for_orders(&mut tx, &[order.into_uuid()])
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, ServiceError> {
        let new: NewOrder = draft.into_new()?;

        let mut tx = self.db.begin().await?;

        if !self.orders_repository.customer_exists(&mut tx, new.customer).await? {
            return Err(missing_reference("customer"));
        }

        let order = OrderId::new();

        self.orders_repository
            .create_order(&mut tx, order, &new)
            .await
            .map_err(map_write_error)?;

        let created = self.orders_repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn replace_order(&self, order: OrderId, draft: OrderDraft) -> Result<OrderRecord, ServiceError> {
        let patch = OrderPatch::from(draft.into_new()?);

        self.apply_update(order, &patch).await
    }

    async fn patch_order(&self, order: OrderId, draft: OrderDraft) -> Result<OrderRecord, ServiceError> {
        let patch = draft.into_patch()?;

        self.apply_update(order, &patch).await
    }

    async fn delete_order(&self, order: OrderId) -> Result<(), ServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.orders_repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Constraint failures from order writes: a duplicate `number` is a unique
/// conflict, a foreign-key failure means the customer vanished mid-write.
fn map_write_error(error: sqlx::Error) -> ServiceError {
    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::UniqueViolation) => {
            ServiceError::Validation(FieldErrors::single("number", NOT_UNIQUE))
        }
        Some(ErrorKind::ForeignKeyViolation) => missing_reference("customer"),
        _ => ServiceError::from(error),
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders with their items nested.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ServiceError>;

    /// Retrieve a single order with its items nested.
    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, ServiceError>;

    /// Validate and persist a new order. Items are attached through the
    /// order-items operations, never here.
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, ServiceError>;

    /// Full update: every writable field must be supplied.
    async fn replace_order(&self, order: OrderId, draft: OrderDraft)
    -> Result<OrderRecord, ServiceError>;

    /// Partial update: only supplied fields change.
    async fn patch_order(&self, order: OrderId, draft: OrderDraft)
    -> Result<OrderRecord, ServiceError>;

    /// Delete an order and, by cascade, its items.
    async fn delete_order(&self, order: OrderId) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{domain::customers::records::CustomerId, test::detached_db};

    use super::*;

    fn detached_service() -> PgOrdersService {
        PgOrdersService::new(detached_db())
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft_before_storage() -> TestResult {
        let service = detached_service();

        let result = service
            .create_order(OrderDraft {
                number: Some(String::new()),
                date_and_time: None,
                customer: Some(CustomerId::new()),
                shipping_method: Some("invalid_method".to_owned()),
                shipping_cost: Some(Decimal::new(-500, 2)),
                status: Some("unknown".to_owned()),
            })
            .await;

        let Err(ServiceError::Validation(errors)) = result else {
            panic!("expected Validation, got {result:?}");
        };

        assert!(errors.contains("number"));
        assert!(errors.contains("shipping_method"));
        assert!(errors.contains("shipping_cost"));
        assert!(errors.contains("status"));

        Ok(())
    }

    #[tokio::test]
    async fn patch_rejects_bad_status_before_storage() -> TestResult {
        let service = detached_service();

        let result = service
            .patch_order(OrderId::new(), OrderDraft {
                status: Some("unknown".to_owned()),
                ..OrderDraft::default()
            })
            .await;

        let Err(ServiceError::Validation(errors)) = result else {
            panic!("expected Validation, got {result:?}");
        };

        assert!(errors.contains("status"));

        Ok(())
    }
}
