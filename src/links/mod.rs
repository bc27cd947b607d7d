//! # Link Graph Actor
//!
//! Owns every relation that spans two record types:
//!
//! - beer ↔ category (many-to-many)
//! - customer → orders (the customer's reverse order collection)
//! - order → beers (the per-beer "ordered by" index)
//!
//! It also keeps the set of live beers, categories and customers, so orders and
//! category links can only point at records that exist. Record actors register on
//! create and retire on delete; retirement either cascades (categories, beer
//! categories) or is refused while dependents remain (beers on order lines, customers
//! with orders).

pub mod error;
pub mod graph;
pub mod table;

pub use error::*;
pub use graph::*;
pub use table::LinkTable;

use actor_framework::{ResourceActor, ResourceClient};

/// Creates the link graph actor, already holding its single empty graph.
pub fn new(buffer_size: usize) -> (ResourceActor<LinkGraph>, ResourceClient<LinkGraph>) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor.seed(GRAPH_ID, LinkGraph::default()), client)
}
