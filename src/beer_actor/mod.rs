//! # Beer Actor
//!
//! Owns the catalog store of beers.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Beer`]
//! - [`error`] - [`BeerError`]
//! - [`query`] - [`BeerQuery`], the filter predicate composer
//! - [`patch`] - the merge table behind partial updates
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor's context is a [`LinkClient`](crate::clients::LinkClient): beers register
//! with the link graph on create and retire from it on delete, which detaches their
//! categories.

pub mod entity;
pub mod error;
pub mod patch;
pub mod query;

pub use error::*;
pub use query::BeerQuery;

use crate::model::Beer;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Beer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Beer>, ResourceClient<Beer>) {
    ResourceActor::new(buffer_size)
}
