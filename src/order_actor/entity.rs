//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creating an order validates the whole aggregate, then links it to its customer and
//! beers in one link-graph message. Only then does it become `Persisted` and visible.

use super::patch::merge_patch;
use super::OrderError;
use crate::clients::LinkClient;
use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderState, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Query = OrderQuery;
    type Action = Infallible;
    type ActionResult = ();
    type Context = LinkClient;
    type Error = OrderError;

    fn next_id(_sequence: u64) -> OrderId {
        OrderId::new()
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order::from_create(id, params)?)
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.update_date = Utc::now();
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query.customer_id {
            Some(customer) => customer == self.customer_id,
            None => true,
        }
    }

    async fn on_create(&mut self, links: &LinkClient) -> Result<(), Self::Error> {
        links
            .attach_order(self.id, self.customer_id, self.beer_ids())
            .await?;
        self.state = OrderState::Persisted;
        debug!(id = %self.id, lines = self.lines.len(), "Order linked");
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _links: &LinkClient) -> Result<(), Self::Error> {
        let changed = merge_patch(self, &update)?;
        debug!(id = %self.id, ?changed, "Patched");
        Ok(())
    }

    /// Removes the order from its customer's collection and from the beer index. Lines
    /// and shipment go with the aggregate.
    async fn on_delete(&self, links: &LinkClient) -> Result<(), Self::Error> {
        links.detach_order(self.id).await?;
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _links: &LinkClient) -> Result<(), Self::Error> {
        match action {}
    }
}
