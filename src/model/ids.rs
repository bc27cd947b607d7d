//! Type-safe record identifiers.
//!
//! Every id wraps a time-ordered UUID (v7), so a store keyed by id iterates in
//! creation order.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

record_id!(
    /// Identifier of a beer (product) record.
    BeerId
);
record_id!(
    /// Identifier of a category record.
    CategoryId
);
record_id!(
    /// Identifier of a customer record.
    CustomerId
);
record_id!(
    /// Identifier of an order aggregate.
    OrderId
);
record_id!(OrderLineId);
record_id!(ShipmentId);
