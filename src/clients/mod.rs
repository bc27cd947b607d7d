//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client turns framework errors into its resource's error type and exposes the
//! catalog operations in domain terms.

pub mod beer_client;
pub mod category_client;
pub mod customer_client;
pub mod link_client;
pub mod order_client;

pub use beer_client::*;
pub use category_client::*;
pub use customer_client::*;
pub use link_client::*;
pub use order_client::*;
