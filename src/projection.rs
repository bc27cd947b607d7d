//! Result projection: stored beers to their external shape.

use crate::model::{Beer, BeerId, BeerStyle};
use actor_framework::Page;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The externally visible beer. An absent quantity is omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeerView {
    pub id: BeerId,
    pub version: u64,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<u32>,
    pub price: f64,
    pub created_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl From<Beer> for BeerView {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            version: beer.version,
            beer_name: beer.beer_name,
            beer_style: beer.beer_style,
            upc: beer.upc,
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price,
            created_date: beer.created_date,
            update_date: beer.update_date,
        }
    }
}

/// Inventory is hidden only when the caller explicitly opts out.
pub fn project(beer: Beer, show_inventory: Option<bool>) -> BeerView {
    let mut view = BeerView::from(beer);
    if show_inventory == Some(false) {
        view.quantity_on_hand = None;
    }
    view
}

pub fn project_page(page: Page<Beer>, show_inventory: Option<bool>) -> Page<BeerView> {
    page.map(|beer| project(beer, show_inventory))
}
