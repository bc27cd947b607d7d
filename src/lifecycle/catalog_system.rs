use super::CatalogConfig;
use crate::clients::{BeerClient, CategoryClient, CustomerClient, LinkClient, OrderClient};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running catalog: one actor per record type plus the link graph.
///
/// The clients are public and cheap to clone. Hand clones to whatever serves requests,
/// then call [`shutdown`](Self::shutdown) once those are gone.
pub struct CatalogSystem {
    pub beer_client: BeerClient,
    pub category_client: CategoryClient,
    pub customer_client: CustomerClient,
    pub order_client: OrderClient,
    pub link_client: LinkClient,

    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts the system with default configuration.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Spawns every actor. Must be called inside a Tokio runtime.
    pub fn with_config(config: CatalogConfig) -> Self {
        let capacity = config.channel_capacity;
        let limits = config.page_limits;

        let (link_actor, link_client) = crate::links::new(capacity);
        let (beer_actor, beer_client) = crate::beer_actor::new(capacity);
        let (category_actor, category_client) = crate::category_actor::new(capacity);
        let (customer_actor, customer_client) = crate::customer_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        let link_client = LinkClient::new(link_client);

        let handles = vec![
            tokio::spawn(link_actor.run(())),
            tokio::spawn(beer_actor.run(link_client.clone())),
            tokio::spawn(category_actor.run(link_client.clone())),
            tokio::spawn(customer_actor.run(link_client.clone())),
            tokio::spawn(order_actor.run(link_client.clone())),
        ];
        info!(capacity, ?limits, "Catalog started");

        Self {
            beer_client: BeerClient::with_limits(beer_client, limits),
            category_client: CategoryClient::with_limits(category_client, limits),
            customer_client: CustomerClient::with_limits(customer_client, limits),
            order_client: OrderClient::with_limits(order_client, limits),
            link_client,
            handles,
        }
    }

    /// Drops every client and waits for each actor to drain its mailbox and exit.
    ///
    /// Clones handed out elsewhere keep their actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog...");

        drop(self.beer_client);
        drop(self.category_client);
        drop(self.customer_client);
        drop(self.order_client);
        drop(self.link_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
