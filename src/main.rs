//! Demo binary: starts the catalog, loads a few records, and exercises the main flows.

use beer_catalog::clients::BeerListParams;
use beer_catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use beer_catalog::model::{
    BeerDraft, BeerStyle, CategoryDraft, CustomerDraft, OrderCreate, OrderLineDraft,
    ShipmentDraft,
};
use std::error::Error;
use tracing::{error, info, Instrument};

fn beer(name: &str, style: BeerStyle, upc: &str, quantity: u32, price: f64) -> BeerDraft {
    BeerDraft {
        beer_name: name.to_string(),
        beer_style: Some(style),
        upc: upc.to_string(),
        quantity_on_hand: Some(quantity),
        price: Some(price),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(?config, "Starting beer catalog");
    let system = CatalogSystem::with_config(config);

    let span = tracing::info_span!("bootstrap");
    let (beers, customers) = async {
        info!("Loading demo data");
        let mut beers = Vec::new();
        for draft in [
            beer("Galaxy Cat", BeerStyle::PaleAle, "12356", 122, 12.99),
            beer("Crank", BeerStyle::PaleAle, "12356222", 392, 11.99),
            beer("Sunshine City", BeerStyle::Ipa, "12356111", 144, 13.99),
        ] {
            beers.push(system.beer_client.create_beer(draft).await?);
        }

        let mut customers = Vec::new();
        for n in 1..=3 {
            let draft = CustomerDraft {
                name: format!("Customer {n}"),
                email: Some(format!("customer{n}@example.com")),
            };
            customers.push(system.customer_client.create_customer(draft).await?);
        }
        Ok::<_, Box<dyn Error>>((beers, customers))
    }
    .instrument(span)
    .await?;
    info!(beers = beers.len(), customers = customers.len(), "Demo data loaded");

    let span = tracing::info_span!("categories");
    async {
        let category = system
            .category_client
            .create_category(CategoryDraft {
                description: "Hoppy".to_string(),
            })
            .await?;
        for beer in &beers {
            system.link_client.attach_category(beer.id, category.id).await?;
        }
        let tagged = system.link_client.beers_in(category.id).await?;
        info!(category = %category.id, beers = tagged.len(), "Category attached");
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system
            .order_client
            .create_order(OrderCreate {
                customer_id: Some(customers[0].id),
                customer_ref: Some("demo-1".to_string()),
                lines: beers
                    .iter()
                    .take(2)
                    .map(|beer| OrderLineDraft {
                        beer_id: Some(beer.id),
                        order_quantity: 6,
                    })
                    .collect(),
                shipment: Some(ShipmentDraft {
                    tracking_number: "1Z999AA10123456784".to_string(),
                }),
            })
            .await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_id = %order.id, lines = order.lines.len(), "Order placed"),
        Err(e) => error!(error = %e, "Order placement failed"),
    }

    let span = tracing::info_span!("listing");
    async {
        let page = system
            .beer_client
            .list_beers(BeerListParams {
                beer_style: Some(BeerStyle::PaleAle),
                show_inventory: Some(false),
                ..Default::default()
            })
            .await?;
        for view in &page.content {
            info!(id = %view.id, name = %view.beer_name, price = view.price, "Listed");
        }
        info!(total = page.total_elements, pages = page.total_pages(), "Listing done");
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
