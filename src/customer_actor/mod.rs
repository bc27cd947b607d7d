//! # Customer Actor
//!
//! Stores customers. Each customer registers with the link graph, which holds its
//! reverse order collection; a customer with orders cannot be deleted.

pub mod entity;
pub mod error;
pub mod patch;

pub use error::*;

use crate::model::Customer;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
