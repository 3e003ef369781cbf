//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        customers::{
            data::{CustomerDraft, CustomerPatch},
            records::{CustomerId, CustomerRecord},
            repository::PgCustomersRepository,
        },
        errors::{ServiceError, unique_violation},
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, ServiceError> {
        self.search_customers(None, None).await
    }

    async fn search_customers(
        &self,
        q: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<CustomerRecord>, ServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self
            .repository
            .search_customers(&mut tx, q.as_deref(), limit.map(i64::from))
            .await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn get_customer(&self, customer: CustomerId) -> Result<CustomerRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn create_customer(&self, draft: CustomerDraft) -> Result<CustomerRecord, ServiceError> {
        let new = draft.into_new()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_customer(&mut tx, CustomerId::new(), &new)
            .await
            .map_err(|e| unique_violation(e, "email"))?;

        tx.commit().await?;

        Ok(created)
    }

    async fn replace_customer(
        &self,
        customer: CustomerId,
        draft: CustomerDraft,
    ) -> Result<CustomerRecord, ServiceError> {
        let patch = CustomerPatch::from(draft.into_new()?);

        self.apply_update(customer, &patch).await
    }

    async fn patch_customer(
        &self,
        customer: CustomerId,
        draft: CustomerDraft,
    ) -> Result<CustomerRecord, ServiceError> {
        let patch = draft.into_patch()?;

        self.apply_update(customer, &patch).await
    }

    async fn delete_customer(&self, customer: CustomerId) -> Result<(), ServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_customer(&mut tx, customer).await?;

        if rows_affected == 0 {
            return Err(ServiceError::NotFound);
        }

        tx.commit().await?;

        tracing::debug!(customer_id = %customer, "deleted customer and dependent orders");

        Ok(())
    }
}

impl PgCustomersService {
    async fn apply_update(
        &self,
        customer: CustomerId,
        patch: &CustomerPatch,
    ) -> Result<CustomerRecord, ServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_customer(&mut tx, customer, patch)
            .await
            .map_err(|e| unique_violation(e, "email"))?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves all customers.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, ServiceError>;

    /// Case-insensitive substring search over name and email, optionally
    /// capped to `limit` rows.
    async fn search_customers(
        &self,
        q: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<CustomerRecord>, ServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(&self, customer: CustomerId) -> Result<CustomerRecord, ServiceError>;

    /// Validate and persist a new customer.
    async fn create_customer(&self, draft: CustomerDraft) -> Result<CustomerRecord, ServiceError>;

    /// Full update: every writable field must be supplied.
    async fn replace_customer(
        &self,
        customer: CustomerId,
        draft: CustomerDraft,
    ) -> Result<CustomerRecord, ServiceError>;

    /// Partial update: only supplied fields change.
    async fn patch_customer(
        &self,
        customer: CustomerId,
        draft: CustomerDraft,
    ) -> Result<CustomerRecord, ServiceError>;

    /// Delete a customer and, by cascade, its orders and their items.
    async fn delete_customer(&self, customer: CustomerId) -> Result<(), ServiceError>;
}
