//! # Beer Catalog
//!
//! An in-memory beer catalog built from resource-oriented actors on Tokio.
//!
//! ## Module Tour
//!
//! - [`model`]: the records ([`Beer`](model::Beer), [`Category`](model::Category),
//!   [`Customer`](model::Customer), [`Order`](model::Order)) and their payloads.
//! - [`beer_actor`], [`category_actor`], [`customer_actor`], [`order_actor`]: the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations, one actor per record type.
//! - [`links`]: the link graph actor that owns every relation between records.
//! - [`clients`]: typed clients, the public operation surface.
//! - [`merge`] and [`validation`]: partial-update merging and field validation.
//! - [`projection`]: the outbound beer shape.
//! - [`lifecycle`]: startup, configuration, tracing and shutdown.
//!
//! ## Concurrency
//!
//! Each actor owns its store and handles one message at a time, so a version check and
//! the write it guards can never interleave with another update. Relations live in a
//! single graph entity, which keeps both directions of every link consistent.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod beer_actor;
pub mod category_actor;
pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod links;
pub mod merge;
pub mod model;
pub mod order_actor;
pub mod projection;
pub mod validation;
