//! # Link Client
//!
//! Domain API over the link graph actor. Every method is one graph message, so each
//! relation change is applied to both sides at once.
use crate::links::{LinkAction, LinkError, LinkGraph, LinkOutcome, GRAPH_ID};
use crate::model::{BeerId, CategoryId, CustomerId, OrderId};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct LinkClient {
    inner: ResourceClient<LinkGraph>,
}

#[async_trait]
impl ActorClient<LinkGraph> for LinkClient {
    type Error = LinkError;

    fn inner(&self) -> &ResourceClient<LinkGraph> {
        &self.inner
    }
}

fn unexpected(outcome: LinkOutcome) -> LinkError {
    LinkError::ActorCommunicationError(format!("unexpected link outcome: {outcome:?}"))
}

impl LinkClient {
    pub fn new(inner: ResourceClient<LinkGraph>) -> Self {
        Self { inner }
    }

    async fn act(&self, action: LinkAction) -> Result<LinkOutcome, LinkError> {
        debug!(?action, "Sending link action");
        Ok(self.inner.perform_action(GRAPH_ID, action).await?)
    }

    async fn changed(&self, action: LinkAction) -> Result<bool, LinkError> {
        match self.act(action).await? {
            LinkOutcome::Changed(changed) => Ok(changed),
            other => Err(unexpected(other)),
        }
    }

    async fn retired(&self, action: LinkAction) -> Result<usize, LinkError> {
        match self.act(action).await? {
            LinkOutcome::Retired(detached) => Ok(detached),
            other => Err(unexpected(other)),
        }
    }

    async fn registered(&self, action: LinkAction) -> Result<(), LinkError> {
        match self.act(action).await? {
            LinkOutcome::Registered => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Registers the beer under its product code. Fails without effect when the code
    /// is taken.
    #[instrument(skip(self))]
    pub async fn register_beer(&self, beer: BeerId, upc: String) -> Result<(), LinkError> {
        self.registered(LinkAction::RegisterBeer { beer, upc }).await
    }

    /// Moves the beer to a new product code and releases the old one.
    #[instrument(skip(self))]
    pub async fn claim_upc(&self, beer: BeerId, upc: String) -> Result<bool, LinkError> {
        self.changed(LinkAction::ClaimUpc { beer, upc }).await
    }

    /// Detaches the beer from its categories. Refused while order lines reference it.
    #[instrument(skip(self))]
    pub async fn retire_beer(&self, beer: BeerId) -> Result<usize, LinkError> {
        self.retired(LinkAction::RetireBeer(beer)).await
    }

    #[instrument(skip(self))]
    pub async fn register_category(&self, category: CategoryId) -> Result<(), LinkError> {
        self.registered(LinkAction::RegisterCategory(category)).await
    }

    /// Detaches the category from every beer.
    #[instrument(skip(self))]
    pub async fn retire_category(&self, category: CategoryId) -> Result<usize, LinkError> {
        self.retired(LinkAction::RetireCategory(category)).await
    }

    #[instrument(skip(self))]
    pub async fn register_customer(&self, customer: CustomerId) -> Result<(), LinkError> {
        self.registered(LinkAction::RegisterCustomer(customer)).await
    }

    /// Refused while the customer still has orders.
    #[instrument(skip(self))]
    pub async fn retire_customer(&self, customer: CustomerId) -> Result<usize, LinkError> {
        self.retired(LinkAction::RetireCustomer(customer)).await
    }

    /// Returns `true` when the link is new.
    #[instrument(skip(self))]
    pub async fn attach_category(
        &self,
        beer: BeerId,
        category: CategoryId,
    ) -> Result<bool, LinkError> {
        self.changed(LinkAction::AttachCategory { beer, category })
            .await
    }

    /// Returns `true` when a link was removed.
    #[instrument(skip(self))]
    pub async fn detach_category(
        &self,
        beer: BeerId,
        category: CategoryId,
    ) -> Result<bool, LinkError> {
        self.changed(LinkAction::DetachCategory { beer, category })
            .await
    }

    /// Registers the order with its customer and beers. Fails without effect when any
    /// of them is unknown.
    #[instrument(skip(self))]
    pub async fn attach_order(
        &self,
        order: OrderId,
        customer: CustomerId,
        beers: BTreeSet<BeerId>,
    ) -> Result<(), LinkError> {
        self.changed(LinkAction::AttachOrder {
            order,
            customer,
            beers,
        })
        .await
        .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn detach_order(&self, order: OrderId) -> Result<(), LinkError> {
        self.retired(LinkAction::DetachOrder(order)).await.map(|_| ())
    }

    pub async fn categories_of(&self, beer: BeerId) -> Result<BTreeSet<CategoryId>, LinkError> {
        match self.act(LinkAction::CategoriesOf(beer)).await? {
            LinkOutcome::Categories(categories) => Ok(categories),
            other => Err(unexpected(other)),
        }
    }

    pub async fn beers_in(&self, category: CategoryId) -> Result<BTreeSet<BeerId>, LinkError> {
        match self.act(LinkAction::BeersIn(category)).await? {
            LinkOutcome::Beers(beers) => Ok(beers),
            other => Err(unexpected(other)),
        }
    }

    pub async fn orders_of(&self, customer: CustomerId) -> Result<BTreeSet<OrderId>, LinkError> {
        match self.act(LinkAction::OrdersOf(customer)).await? {
            LinkOutcome::Orders(orders) => Ok(orders),
            other => Err(unexpected(other)),
        }
    }

    pub async fn orders_for_beer(&self, beer: BeerId) -> Result<BTreeSet<OrderId>, LinkError> {
        match self.act(LinkAction::OrdersForBeer(beer)).await? {
            LinkOutcome::Orders(orders) => Ok(orders),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action};
    use actor_framework::FrameworkError;

    #[tokio::test]
    async fn attach_category_sends_one_graph_action() {
        let (client, mut receiver) = create_mock_client::<LinkGraph>(10);
        let links = LinkClient::new(client);
        let (beer, category) = (BeerId::new(), CategoryId::new());

        let task = tokio::spawn(async move { links.attach_category(beer, category).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, GRAPH_ID);
        assert_eq!(action, LinkAction::AttachCategory { beer, category });
        responder.send(Ok(LinkOutcome::Changed(true))).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn graph_errors_come_back_typed() {
        let (client, mut receiver) = create_mock_client::<LinkGraph>(10);
        let links = LinkClient::new(client);
        let beer = BeerId::new();

        let task = tokio::spawn(async move { links.retire_beer(beer).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::entity(LinkError::StillReferenced {
                record: crate::links::RecordRef::Beer(beer),
                dependents: 3,
            })))
            .unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(LinkError::StillReferenced { dependents: 3, .. })
        ));
    }

    #[tokio::test]
    async fn mismatched_outcome_is_an_error_not_a_panic() {
        let (client, mut receiver) = create_mock_client::<LinkGraph>(10);
        let links = LinkClient::new(client);

        let task = tokio::spawn(async move { links.orders_of(CustomerId::new()).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder.send(Ok(LinkOutcome::Registered)).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(LinkError::ActorCommunicationError(_))
        ));
    }
}
