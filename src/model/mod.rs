//! Plain record types and request payloads. The `ActorEntity` implementations live
//! next to each actor.

pub mod beer;
pub mod category;
pub mod customer;
pub mod ids;
pub mod order;

pub use beer::*;
pub use category::*;
pub use customer::*;
pub use ids::*;
pub use order::*;
