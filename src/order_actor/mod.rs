//! # Order Actor
//!
//! Stores order aggregates (order, lines, shipment) as single units.
//!
//! ## Lifecycle
//!
//! `Draft` → `Persisted`. A draft is built and fully validated from an
//! [`OrderCreate`](crate::model::OrderCreate); `on_create` then links it to its customer
//! and beers through the link graph. If any reference is unknown the order is never
//! stored and the caller gets a [`OrderError::Validation`].

pub mod entity;
pub mod error;
pub mod patch;

pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
