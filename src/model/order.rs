//! The order aggregate: an order, its lines and its optional shipment.
//!
//! Lines and the shipment are owned by the order and carry its id as a back-reference,
//! so they are created, stored and deleted as one unit. The customer side and the
//! per-beer "ordered by" index live in the link graph.

use super::ids::{BeerId, CustomerId, OrderId, OrderLineId, ShipmentId};
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const CUSTOMER_REF_MAX: usize = 255;
pub const TRACKING_NUMBER_MAX: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Built and validated, not yet linked to its customer and beers.
    Draft,
    /// Linked and stored. Terminal.
    Persisted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub id: OrderLineId,
    pub order_id: OrderId,
    pub beer_id: BeerId,
    pub order_quantity: u32,
    pub quantity_allocated: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub order_id: OrderId,
    pub tracking_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<Shipment>,
    pub state: OrderState,
    pub created_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderLineDraft {
    pub beer_id: Option<BeerId>,
    pub order_quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShipmentDraft {
    pub tracking_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderCreate {
    pub customer_id: Option<CustomerId>,
    pub customer_ref: Option<String>,
    pub lines: Vec<OrderLineDraft>,
    pub shipment: Option<ShipmentDraft>,
}

/// Sparse order payload. A present shipment replaces the current one; a blank
/// `customer_ref` leaves the stored one alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderUpdate {
    pub customer_ref: Option<String>,
    pub shipment: Option<ShipmentDraft>,
}

/// Filter for listing orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub customer_id: Option<CustomerId>,
}

impl ShipmentDraft {
    fn validate_into(&self, errors: &mut ValidationErrors) {
        errors.require_text(
            "shipment.tracking_number",
            &self.tracking_number,
            TRACKING_NUMBER_MAX,
        );
    }

    pub fn attach_to(self, order_id: OrderId) -> Shipment {
        Shipment {
            id: ShipmentId::new(),
            order_id,
            tracking_number: self.tracking_number,
        }
    }
}

impl Order {
    /// Builds a draft aggregate, reporting every violation of the request at once.
    pub fn from_create(id: OrderId, params: OrderCreate) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_present("customer_id", params.customer_id.as_ref());
        if let Some(customer_ref) = &params.customer_ref {
            errors.max_chars("customer_ref", customer_ref, CUSTOMER_REF_MAX);
        }
        for (index, line) in params.lines.iter().enumerate() {
            if line.beer_id.is_none() {
                errors.push("lines.beer_id", format!("line {index}: must not be null"));
            }
            if line.order_quantity == 0 {
                errors.push(
                    "lines.order_quantity",
                    format!("line {index}: must be greater than 0"),
                );
            }
        }
        if let Some(shipment) = &params.shipment {
            shipment.validate_into(&mut errors);
        }

        let (Some(customer_id), true) = (params.customer_id, errors.is_empty()) else {
            return Err(errors);
        };

        let lines = params
            .lines
            .into_iter()
            .filter_map(|line| {
                line.beer_id.map(|beer_id| OrderLine {
                    id: OrderLineId::new(),
                    order_id: id,
                    beer_id,
                    order_quantity: line.order_quantity,
                    quantity_allocated: 0,
                })
            })
            .collect();
        let now = Utc::now();
        Ok(Self {
            id,
            version: 0,
            customer_ref: params.customer_ref,
            customer_id,
            lines,
            shipment: params.shipment.map(|s| s.attach_to(id)),
            state: OrderState::Draft,
            created_date: now,
            update_date: now,
        })
    }

    /// Checks the fields a patch can change.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(customer_ref) = &self.customer_ref {
            errors.max_chars("customer_ref", customer_ref, CUSTOMER_REF_MAX);
        }
        if let Some(shipment) = &self.shipment {
            errors.require_text(
                "shipment.tracking_number",
                &shipment.tracking_number,
                TRACKING_NUMBER_MAX,
            );
        }
        errors.into_result()
    }

    /// Distinct beers referenced by the order's lines.
    pub fn beer_ids(&self) -> BTreeSet<BeerId> {
        self.lines.iter().map(|line| line.beer_id).collect()
    }
}
