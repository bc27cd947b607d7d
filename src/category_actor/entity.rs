//! [`ActorEntity`] implementation for [`Category`].

use super::CategoryError;
use crate::clients::LinkClient;
use crate::model::{Category, CategoryDraft, CategoryId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryDraft;
    type Update = CategoryDraft;
    type Query = ();
    type Action = Infallible;
    type ActionResult = ();
    type Context = LinkClient;
    type Error = CategoryError;

    fn next_id(_sequence: u64) -> CategoryId {
        CategoryId::new()
    }

    fn from_create_params(id: CategoryId, params: CategoryDraft) -> Result<Self, Self::Error> {
        Ok(Category::from_draft(id, params)?)
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.update_date = Utc::now();
    }

    async fn on_create(&mut self, links: &LinkClient) -> Result<(), Self::Error> {
        links.register_category(self.id).await?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: CategoryDraft,
        _links: &LinkClient,
    ) -> Result<(), Self::Error> {
        let candidate = Category {
            description: update.description,
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Detaches the category from every beer.
    async fn on_delete(&self, links: &LinkClient) -> Result<(), Self::Error> {
        let detached = links.retire_category(self.id).await?;
        debug!(id = %self.id, detached, "Retired from link graph");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _links: &LinkClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
