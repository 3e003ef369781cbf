//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        errors::{ServiceError, unique_violation},
        products::{
            data::{ProductDraft, ProductPatch},
            records::{ProductId, ProductRecord},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }

    async fn apply_update(
        &self,
        product: ProductId,
        patch: &ProductPatch,
    ) -> Result<ProductRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, patch)
            .await
            .map_err(|e| unique_violation(e, "sku"))?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ServiceError> {
        self.search_products(None, None).await
    }

    async fn search_products(
        &self,
        q: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<ProductRecord>, ServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .search_products(&mut tx, q.as_deref(), limit.map(i64::from))
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<ProductRecord, ServiceError> {
        let new = draft.into_new()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, ProductId::new(), &new)
            .await
            .map_err(|e| unique_violation(e, "sku"))?;

        tx.commit().await?;

        Ok(created)
    }

    async fn replace_product(
        &self,
        product: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductRecord, ServiceError> {
        let patch = ProductPatch::from(draft.into_new()?);

        self.apply_update(product, &patch).await
    }

    async fn patch_product(
        &self,
        product: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductRecord, ServiceError> {
        let patch = draft.into_patch()?;

        self.apply_update(product, &patch).await
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ServiceError>;

    /// Case-insensitive substring search over name and sku, optionally
    /// capped to `limit` rows.
    async fn search_products(
        &self,
        q: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<ProductRecord>, ServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ServiceError>;

    /// Validate and persist a new product.
    async fn create_product(&self, draft: ProductDraft) -> Result<ProductRecord, ServiceError>;

    /// Full update: every writable field must be supplied.
    async fn replace_product(
        &self,
        product: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductRecord, ServiceError>;

    /// Partial update: only supplied fields change.
    async fn patch_product(
        &self,
        product: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductRecord, ServiceError>;

    /// Delete a product and, by cascade, the order items referencing it.
    async fn delete_product(&self, product: ProductId) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::detached_db;

    use super::*;

    fn detached_service() -> PgProductsService {
        PgProductsService::new(detached_db())
    }

    #[tokio::test]
    async fn create_rejects_empty_sku_and_negative_price_before_storage() -> TestResult {
        let service = detached_service();

        let result = service
            .create_product(ProductDraft {
                sku: Some(String::new()),
                name: Some("Invalid Product".to_owned()),
                unit_price: Some(Decimal::new(-1000, 2)),
                stock_level: None,
            })
            .await;

        let Err(ServiceError::Validation(errors)) = result else {
            panic!("expected Validation, got {result:?}");
        };

        assert!(errors.contains("sku"));
        assert!(errors.contains("unit_price"));

        Ok(())
    }

    #[tokio::test]
    async fn replace_requires_all_writable_fields() -> TestResult {
        let service = detached_service();

        let result = service
            .replace_product(ProductId::new(), ProductDraft {
                name: Some("Updated Product".to_owned()),
                ..ProductDraft::default()
            })
            .await;

        let Err(ServiceError::Validation(errors)) = result else {
            panic!("expected Validation, got {result:?}");
        };

        assert!(errors.contains("sku"));
        assert!(errors.contains("unit_price"));

        Ok(())
    }
}
