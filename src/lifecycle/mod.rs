//! # System Lifecycle
//!
//! Starts every catalog actor, wires each one to the link graph, and shuts them all
//! down again.
//!
//! ## Startup order
//!
//! The link graph actor has no context and starts first. The beer, category, customer
//! and order actors each receive a [`LinkClient`](crate::clients::LinkClient) through
//! `run()`. The graph never calls back into them, so no request cycle can form.
//!
//! ```rust,ignore
//! let system = CatalogSystem::with_config(CatalogConfig::from_env()?);
//! let beer = system.beer_client.create_beer(draft).await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! Dropping every client closes the channels. Each actor drains what is queued, logs
//! its final size and returns. The record actors hold link clients, so the graph actor
//! stops last.

pub mod catalog_system;
pub mod config;
pub mod telemetry;

pub use catalog_system::CatalogSystem;
pub use config::{CatalogConfig, ConfigError};
pub use telemetry::setup_tracing;
