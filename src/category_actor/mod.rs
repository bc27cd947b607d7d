//! # Category Actor
//!
//! Stores categories. The beer side of the many-to-many relation is kept by the link
//! graph, and deleting a category detaches it from every beer.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Category;
use actor_framework::{ResourceActor, ResourceClient};

pub fn new(buffer_size: usize) -> (ResourceActor<Category>, ResourceClient<Category>) {
    ResourceActor::new(buffer_size)
}
