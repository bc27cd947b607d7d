//! # Customer Client
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerDraft, CustomerId, CustomerPatch, CustomerUpdate};
use actor_framework::{ActorClient, Page, PageLimits, ResourceClient};
use async_trait::async_trait;
use tracing::instrument;

#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
    limits: PageLimits,
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self::with_limits(inner, PageLimits::default())
    }

    pub fn with_limits(inner: ResourceClient<Customer>, limits: PageLimits) -> Self {
        Self { inner, limits }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, CustomerError> {
        Ok(self.inner.create(draft).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.get(id)
            .await?
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_customers(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Customer>, CustomerError> {
        self.list((), self.limits.normalize(page_number, page_size))
            .await
    }

    #[instrument(skip(self))]
    pub async fn replace_customer(
        &self,
        id: CustomerId,
        version: Option<u64>,
        draft: CustomerDraft,
    ) -> Result<Customer, CustomerError> {
        Ok(self
            .inner
            .update(id, version, CustomerUpdate::Replace(draft))
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn patch_customer(
        &self,
        id: CustomerId,
        version: Option<u64>,
        patch: CustomerPatch,
    ) -> Result<Customer, CustomerError> {
        Ok(self
            .inner
            .update(id, version, CustomerUpdate::Patch(patch))
            .await?)
    }

    /// Returns `false` when no customer has this id. Refused while the customer has orders.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<bool, CustomerError> {
        match self.delete(id).await {
            Ok(()) => Ok(true),
            Err(CustomerError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
