//! [`ActorEntity`] implementation for [`Beer`].

use super::patch::merge_patch;
use super::query::BeerQuery;
use super::BeerError;
use crate::clients::LinkClient;
use crate::model::{Beer, BeerDraft, BeerId, BeerUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Beer {
    type Id = BeerId;
    type Create = BeerDraft;
    type Update = BeerUpdate;
    type Query = BeerQuery;
    type Action = Infallible;
    type ActionResult = ();
    type Context = LinkClient;
    type Error = BeerError;

    fn next_id(_sequence: u64) -> BeerId {
        BeerId::new()
    }

    fn from_create_params(id: BeerId, params: BeerDraft) -> Result<Self, Self::Error> {
        Ok(Beer::from_draft(id, params)?)
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.update_date = Utc::now();
    }

    fn matches(&self, query: &BeerQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, links: &LinkClient) -> Result<(), Self::Error> {
        links.register_beer(self.id, self.upc.clone()).await?;
        Ok(())
    }

    /// A changed product code is claimed last, after every local check has passed.
    async fn on_update(&mut self, update: BeerUpdate, links: &LinkClient) -> Result<(), Self::Error> {
        let previous_upc = self.upc.clone();
        match update {
            BeerUpdate::Replace(draft) => self.replace_with(draft)?,
            BeerUpdate::Patch(patch) => {
                let changed = merge_patch(self, &patch)?;
                debug!(id = %self.id, ?changed, "Patched");
            }
        }
        if self.upc != previous_upc {
            links.claim_upc(self.id, self.upc.clone()).await?;
        }
        Ok(())
    }

    /// Detaches category links; refused while order lines reference the beer.
    async fn on_delete(&self, links: &LinkClient) -> Result<(), Self::Error> {
        let detached = links.retire_beer(self.id).await?;
        debug!(id = %self.id, detached, "Retired from link graph");
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _links: &LinkClient) -> Result<(), Self::Error> {
        match action {}
    }
}
