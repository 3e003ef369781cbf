//! Order items service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::error::{DatabaseError, ErrorKind};

use crate::{
    database::Db,
    domain::{
        errors::{ServiceError, missing_reference},
        order_items::{
            data::{OrderItemDraft, OrderItemPatch},
            records::{OrderItemId, OrderItemRecord},
            repository::PgOrderItemsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrderItemsService {
    db: Db,
    repository: PgOrderItemsRepository,
}

impl PgOrderItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrderItemsRepository::new(),
        }
    }

    async fn apply_update(
        &self,
        item: OrderItemId,
        patch: &OrderItemPatch,
    ) -> Result<OrderItemRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(order) = patch.order {
            if !self.repository.order_exists(&mut tx, order).await? {
                return Err(missing_reference("order"));
            }
        }

        if let Some(product) = patch.product {
            if !self.repository.product_exists(&mut tx, product).await? {
                return Err(missing_reference("product"));
            }
        }

        let rows_affected = self
            .repository
            .update_order_item(&mut tx, item, patch)
            .await
            .map_err(map_write_error)?;

        if rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        let updated = self.repository.get_order_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[async_trait]
impl OrderItemsService for PgOrderItemsService {
    async fn list_order_items(&self) -> Result<Vec<OrderItemRecord>, ServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_order_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_order_item(&self, item: OrderItemId) -> Result<OrderItemRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_order_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn create_order_item(
        &self,
        draft: OrderItemDraft,
    ) -> Result<OrderItemRecord, ServiceError> {
        let new = draft.into_new()?;

        let mut tx = self.db.begin().await?;

        if !self.repository.order_exists(&mut tx, new.order).await? {
            return Err(missing_reference("order"));
        }

        if !self.repository.product_exists(&mut tx, new.product).await? {
            return Err(missing_reference("product"));
        }

        let item = OrderItemId::new();

        self.repository
            .create_order_item(&mut tx, item, &new)
            .await
            .map_err(map_write_error)?;

        let created = self.repository.get_order_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn replace_order_item(
        &self,
        item: OrderItemId,
        draft: OrderItemDraft,
    ) -> Result<OrderItemRecord, ServiceError> {
        let patch = OrderItemPatch::from(draft.into_new()?);

        self.apply_update(item, &patch).await
    }

    async fn patch_order_item(
        &self,
        item: OrderItemId,
        draft: OrderItemDraft,
    ) -> Result<OrderItemRecord, ServiceError> {
        let patch = draft.into_patch()?;

        self.apply_update(item, &patch).await
    }

    async fn delete_order_item(&self, item: OrderItemId) -> Result<(), ServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

/// A foreign-key failure on an item write means the order or product row
/// vanished between the existence check and the insert; the constraint name
/// says which.
fn map_write_error(error: sqlx::Error) -> ServiceError {
    let (kind, on_product) = match error.as_database_error() {
        Some(db_error) => (
            Some(db_error.kind()),
            db_error.constraint().is_some_and(|name| name.contains("product")),
        ),
        None => (None, false),
    };

    match kind {
        Some(ErrorKind::ForeignKeyViolation) => {
            missing_reference(if on_product { "product" } else { "order" })
        }
        _ => ServiceError::from(error),
    }
}

#[automock]
#[async_trait]
pub trait OrderItemsService: Send + Sync {
    /// Retrieves all order items.
    async fn list_order_items(&self) -> Result<Vec<OrderItemRecord>, ServiceError>;

    /// Retrieve a single order item.
    async fn get_order_item(&self, item: OrderItemId) -> Result<OrderItemRecord, ServiceError>;

    /// Validate and persist a new order item; the referenced order and
    /// product must exist.
    async fn create_order_item(
        &self,
        draft: OrderItemDraft,
    ) -> Result<OrderItemRecord, ServiceError>;

    /// Full update: every writable field must be supplied.
    async fn replace_order_item(
        &self,
        item: OrderItemId,
        draft: OrderItemDraft,
    ) -> Result<OrderItemRecord, ServiceError>;

    /// Partial update: only supplied fields change.
    async fn patch_order_item(
        &self,
        item: OrderItemId,
        draft: OrderItemDraft,
    ) -> Result<OrderItemRecord, ServiceError>;

    /// Delete an order item.
    async fn delete_order_item(&self, item: OrderItemId) -> Result<(), ServiceError>;
}
