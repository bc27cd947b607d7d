//! Merge table for order updates.

use crate::merge::{self, overwrite_optional_text, MergeRule};
use crate::model::{Order, OrderUpdate};
use crate::validation::ValidationErrors;

fn customer_ref(update: &OrderUpdate, order: &mut Order) -> bool {
    overwrite_optional_text(&update.customer_ref, &mut order.customer_ref)
}

/// The new shipment gets a fresh id and points back at the order.
fn shipment(update: &OrderUpdate, order: &mut Order) -> bool {
    match &update.shipment {
        Some(draft) => {
            order.shipment = Some(draft.clone().attach_to(order.id));
            true
        }
        None => false,
    }
}

pub const ORDER_PATCH_RULES: &[MergeRule<OrderUpdate, Order>] = &[
    MergeRule {
        field: "customer_ref",
        merge: customer_ref,
    },
    MergeRule {
        field: "shipment",
        merge: shipment,
    },
];

/// Merges `update` into `order` and re-validates. On a violation `order` is left
/// untouched.
pub fn merge_patch(
    order: &mut Order,
    update: &OrderUpdate,
) -> Result<Vec<&'static str>, ValidationErrors> {
    let mut candidate = order.clone();
    let changed = merge::apply(ORDER_PATCH_RULES, update, &mut candidate);
    candidate.validate()?;
    *order = candidate;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BeerId, CustomerId, OrderCreate, OrderId, OrderLineDraft, ShipmentDraft,
    };

    fn stored() -> Order {
        Order::from_create(
            OrderId::new(),
            OrderCreate {
                customer_id: Some(CustomerId::new()),
                customer_ref: Some("PO-42".into()),
                lines: vec![OrderLineDraft {
                    beer_id: Some(BeerId::new()),
                    order_quantity: 2,
                }],
                shipment: Some(ShipmentDraft {
                    tracking_number: "1Z999".into(),
                }),
            },
        )
        .unwrap()
    }

    #[test]
    fn blank_customer_ref_is_ignored() {
        let mut order = stored();
        let before = order.clone();
        let update = OrderUpdate {
            customer_ref: Some("   ".into()),
            shipment: None,
        };
        assert!(merge_patch(&mut order, &update).unwrap().is_empty());
        assert_eq!(order.customer_ref.as_deref(), Some("PO-42"));
        assert_eq!(order, before);
    }

    #[test]
    fn shipment_is_replaced_with_back_reference() {
        let mut order = stored();
        let previous = order.shipment.clone().unwrap();
        let changed = merge_patch(
            &mut order,
            &OrderUpdate {
                customer_ref: Some("PO-43".into()),
                shipment: Some(ShipmentDraft {
                    tracking_number: "1Z000".into(),
                }),
            },
        )
        .unwrap();

        assert_eq!(changed, vec!["customer_ref", "shipment"]);
        let shipment = order.shipment.as_ref().unwrap();
        assert_ne!(shipment.id, previous.id);
        assert_eq!(shipment.order_id, order.id);
        assert_eq!(shipment.tracking_number, "1Z000");
        assert_eq!(order.customer_ref.as_deref(), Some("PO-43"));
    }

    #[test]
    fn invalid_values_are_rejected_atomically() {
        let mut order = stored();
        let before = order.clone();
        let err = merge_patch(
            &mut order,
            &OrderUpdate {
                customer_ref: Some("x".repeat(256)),
                shipment: Some(ShipmentDraft {
                    tracking_number: " ".into(),
                }),
            },
        )
        .unwrap_err();

        assert!(err.has_field("customer_ref"));
        assert!(err.has_field("shipment.tracking_number"));
        assert_eq!(order, before);
    }
}
