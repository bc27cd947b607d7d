//! # Category Client
use crate::category_actor::CategoryError;
use crate::model::{Category, CategoryDraft, CategoryId};
use actor_framework::{ActorClient, Page, PageLimits, ResourceClient};
use async_trait::async_trait;
use tracing::instrument;

#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
    limits: PageLimits,
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self::with_limits(inner, PageLimits::default())
    }

    pub fn with_limits(inner: ResourceClient<Category>, limits: PageLimits) -> Self {
        Self { inner, limits }
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, draft: CategoryDraft) -> Result<Category, CategoryError> {
        Ok(self.inner.create(draft).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.get(id)
            .await?
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Category>, CategoryError> {
        self.list((), self.limits.normalize(page_number, page_size))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        version: Option<u64>,
        draft: CategoryDraft,
    ) -> Result<Category, CategoryError> {
        Ok(self.inner.update(id, version, draft).await?)
    }

    /// Returns `false` when no category has this id. Detaches it from every beer.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<bool, CategoryError> {
        match self.delete(id).await {
            Ok(()) => Ok(true),
            Err(CategoryError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
