//! # Order Client
use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, Page, PageLimits, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Reference checks and linking happen in the Order actor's `on_create` hook, so a
/// successful `create_order` means the customer and every ordered beer existed.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    limits: PageLimits,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self::with_limits(inner, PageLimits::default())
    }

    pub fn with_limits(inner: ResourceClient<Order>, limits: PageLimits) -> Self {
        Self { inner, limits }
    }

    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!(?order, "create_order called");
        let created = self.inner.create(order).await?;
        info!(id = %created.id, lines = created.lines.len(), "Order created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        query: OrderQuery,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Order>, OrderError> {
        self.list(query, self.limits.normalize(page_number, page_size))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: OrderId,
        version: Option<u64>,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        Ok(self.inner.update(id, version, update).await?)
    }

    /// Returns `false` when no order has this id.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<bool, OrderError> {
        match self.delete(id).await {
            Ok(()) => Ok(true),
            Err(OrderError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
