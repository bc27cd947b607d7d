//! [`ActorEntity`] implementation for [`Customer`].

use super::patch::merge_patch;
use super::CustomerError;
use crate::clients::LinkClient;
use crate::model::{Customer, CustomerDraft, CustomerId, CustomerUpdate};
use crate::validation::ValidationErrors;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

fn replace(customer: &mut Customer, draft: CustomerDraft) -> Result<(), ValidationErrors> {
    let candidate = Customer {
        name: draft.name,
        email: draft.email,
        ..customer.clone()
    };
    candidate.validate()?;
    *customer = candidate;
    Ok(())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerDraft;
    type Update = CustomerUpdate;
    type Query = ();
    type Action = Infallible;
    type ActionResult = ();
    type Context = LinkClient;
    type Error = CustomerError;

    fn next_id(_sequence: u64) -> CustomerId {
        CustomerId::new()
    }

    fn from_create_params(id: CustomerId, params: CustomerDraft) -> Result<Self, Self::Error> {
        Ok(Customer::from_draft(id, params)?)
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.update_date = Utc::now();
    }

    async fn on_create(&mut self, links: &LinkClient) -> Result<(), Self::Error> {
        links.register_customer(self.id).await?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _links: &LinkClient,
    ) -> Result<(), Self::Error> {
        match update {
            CustomerUpdate::Replace(draft) => replace(self, draft)?,
            CustomerUpdate::Patch(patch) => {
                merge_patch(self, &patch)?;
            }
        }
        Ok(())
    }

    /// An order never loses its customer: deletion is refused while orders exist.
    async fn on_delete(&self, links: &LinkClient) -> Result<(), Self::Error> {
        links.retire_customer(self.id).await?;
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
