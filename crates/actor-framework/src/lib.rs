//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores. Each resource type is
//! owned by exactly one [`ResourceActor`] that processes its messages one at a time, so
//! every check-then-write (version guard, existence check, cascade) is indivisible
//! with respect to every other request on the same resource.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain records, validation hooks and query predicates
//! 2. **Runtime Layer** ([`ResourceActor`]) - the store, message processing and the version guard
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Request Surface
//!
//! | Request | Behaviour |
//! |---------|-----------|
//! | `Create` | Allocates an id, builds the entity, runs `on_create`, stores it |
//! | `Get` | Returns a snapshot clone, or `None` |
//! | `List` | Filters with [`ActorEntity::matches`], then slices with a [`PageRequest`] |
//! | `Update` | Version guard, `on_update` on a working copy, version bump, store |
//! | `Delete` | `on_delete` may veto, then removes |
//! | `Action` | Resource-specific operation via `handle_action` |
//!
//! ## Optimistic Concurrency
//!
//! An `Update` may carry the version the caller last observed. When it differs from the
//! stored version the actor answers [`FrameworkError::VersionConflict`] and leaves the
//! record untouched. A missing record is always [`FrameworkError::NotFound`], whatever
//! version was supplied.
//!
//! ```rust,ignore
//! let beer = client.get(id).await?.expect("exists");
//! // Two writers race with the same observed version: exactly one wins.
//! let first = client.update(id, Some(beer.version()), rename("Crank")).await;
//! let second = client.update(id, Some(beer.version()), rename("Galaxy Cat")).await;
//! assert!(first.is_ok());
//! assert!(matches!(second, Err(FrameworkError::VersionConflict { .. })));
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at
//! construction time. Actors are created first, and their clients are then handed to
//! the actors that depend on them.
//!
//! ```rust,ignore
//! let (graph_actor, graph_client) = ResourceActor::<LinkGraph>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(graph_actor.run(()));
//! tokio::spawn(order_actor.run(LinkClient::new(graph_client)));
//! ```
//!
//! ## Pagination
//!
//! [`PageLimits::normalize`] turns loosely specified paging input into a bounded
//! [`PageRequest`]. Results come back as a [`Page`] carrying the slice and the total
//! number of matching elements.
//!
//! ## Testing
//!
//! [`mock::MockClient`] implements the same `ResourceClient<T>` API with scripted
//! responses, so actors that depend on other actors can be tested in isolation.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod page;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use page::{Page, PageLimits, PageRequest};
